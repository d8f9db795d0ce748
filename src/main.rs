#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use keepsake_core::RemoteConfig;
use tracing_subscriber::EnvFilter;

/// Global remote-service config, resolved once at startup
static REMOTE_CONFIG: OnceLock<RemoteConfig> = OnceLock::new();

/// Get the remote-service config resolved at startup.
pub fn remote_config() -> RemoteConfig {
    REMOTE_CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| RemoteConfig {
            project_id: String::new(),
            api_key: String::new(),
            cloud_name: String::new(),
            upload_preset: String::new(),
        })
}

/// Keepsake - Anniversary Experience
#[derive(Parser, Debug)]
#[command(name = "keepsake-desktop")]
#[command(about = "Keepsake - a two-page anniversary experience with an admin panel")]
struct Args {
    /// Path to the remote-services config file (JSON). Defaults to
    /// <config dir>/keepsake/keepsake.json, with KEEPSAKE_* environment
    /// variables overriding individual fields.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keepsake")
            .join("keepsake.json")
    });

    // A readable file wins; otherwise the environment must provide
    // everything. Without credentials there is nothing to show.
    let config = if config_path.is_file() {
        RemoteConfig::load(&config_path)
    } else {
        RemoteConfig::from_env()
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("cannot resolve remote-service config: {}", e);
            eprintln!(
                "Keepsake needs remote-service credentials: put them in {} or set the KEEPSAKE_* environment variables.",
                config_path.display()
            );
            std::process::exit(1);
        }
    };

    tracing::info!(project = %config.project_id, "starting Keepsake");
    let _ = REMOTE_CONFIG.set(config);

    let window = WindowBuilder::new()
        .with_title("Keepsake")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}

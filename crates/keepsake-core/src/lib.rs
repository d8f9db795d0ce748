//! Keepsake Core Library
//!
//! Headless half of the Keepsake anniversary site: remote-service clients
//! and the page logic that is worth testing without a window.
//!
//! ## Overview
//!
//! Keepsake is a two-page experience — a public page (launch-gate countdown,
//! live counter, timeline, masonry photo gallery, flip-card reasons, music
//! embed and a long-press secret letter) and an admin panel managing that
//! content. Persistence, identity and image hosting are delegated to
//! external managed services; this crate wraps them in thin clients and
//! keeps every state machine (gate, countdown, masonry, long-press, embed
//! rewriting) pure and clock-injected.
//!
//! ## Quick Start
//!
//! ```ignore
//! use keepsake_core::{RemoteConfig, SiteClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RemoteConfig::load("keepsake.json".as_ref())?;
//!     let client = SiteClient::new(config)?;
//!
//!     let settings = client.load_settings().await?;
//!     for event in client.list_timeline().await? {
//!         println!("{}: {}", event.data.date.date_naive(), event.data.title);
//!     }
//!     let _ = settings;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod countdown;
pub mod embed;
pub mod error;
pub mod gate;
pub mod hold;
pub mod image_host;
pub mod masonry;
pub mod store;
pub mod types;
pub mod validate;

// Re-exports
pub use auth::{auth_error_message, AuthClient, Session};
pub use client::SiteClient;
pub use config::RemoteConfig;
pub use countdown::{istanbul_midnight, pad2, TimeParts};
pub use embed::{is_valid_spotify_url, spotify_embed_url};
pub use error::{CoreError, CoreResult};
pub use gate::{evaluate as evaluate_gate, GateState};
pub use hold::{HoldGauge, HoldSample, HOLD_SAMPLE_MS, HOLD_THRESHOLD_MS};
pub use image_host::{validate_image, Uploaded, MAX_UPLOAD_BYTES};
pub use masonry::{columns_for_width, MasonryLayout, FALLBACK_ASPECT, ITEM_GAP};
pub use types::*;

//! Public anniversary page.
//!
//! Sits behind the launch gate: `Loading` while settings are fetched, a
//! full-screen countdown while the launch instant is in the future, and the
//! real page after it passes. A countdown hitting zero bumps `generation`,
//! which re-enters `Loading` and fetches fresh settings before opening.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use keepsake_core::{evaluate_gate, GateState};

use crate::app::Route;
use crate::components::{
    CountdownOverlay, GallerySection, LiveCounter, MusicSection, ReasonsSection,
    SecretLetterSection, TimelineSection,
};
use crate::context::{use_client, use_client_ready, use_session};

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let client_ready = use_client_ready();
    let session = use_session();

    let mut gate: Signal<GateState> = use_signal(|| GateState::Loading);
    let mut launch: Signal<Option<DateTime<Utc>>> = use_signal(|| None);
    let mut generation: Signal<u64> = use_signal(|| 0);

    use_effect(move || {
        let _ = generation();
        let signed_in = session().is_some();
        if !client_ready() {
            return;
        }
        gate.set(GateState::Loading);
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            let configured = match site.load_settings().await {
                Ok(settings) => settings.launch_date,
                Err(e) => {
                    // Fail open: a broken fetch must never lock the site
                    tracing::error!("gate settings fetch failed: {}", e);
                    None
                }
            };
            launch.set(configured);
            gate.set(evaluate_gate(configured, Utc::now(), signed_in));
        });
    });

    match gate() {
        GateState::Loading => rsx! {
            div { class: "page-loading",
                div { class: "loading-spinner" }
            }
        },
        GateState::Gated => {
            let Some(launch_at) = launch() else {
                return rsx! {
                    div { class: "page-loading",
                        div { class: "loading-spinner" }
                    }
                };
            };
            rsx! {
                CountdownOverlay {
                    launch: launch_at,
                    on_elapsed: move |_| {
                        let next = *generation.peek() + 1;
                        generation.set(next);
                    },
                }
            }
        }
        GateState::Open => rsx! {
            div { class: "public-page",
                header { class: "hero",
                    h1 { class: "hero-title", "İyi ki Varsın Sevgilim" }
                    p { class: "hero-subtitle", "Birlikte yazdığımız hikayemize hoş geldin" }
                    button {
                        class: "hero-scroll",
                        onclick: move |_| {
                            let _ = dioxus::document::eval(
                                "document.getElementById('counter')\
                                 .scrollIntoView({ behavior: 'smooth' });",
                            );
                        },
                        "↓"
                    }
                }

                LiveCounter {}
                TimelineSection {}
                GallerySection {}
                ReasonsSection {}
                MusicSection {}
                SecretLetterSection {}

                footer { class: "site-footer",
                    p { "Sonsuza kadar seninle ❤️" }
                    Link { class: "footer-admin-link", to: Route::Admin {}, "•" }
                }
            }
        },
    }
}

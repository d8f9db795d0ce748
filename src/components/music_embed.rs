//! "Our song" section: the configured Spotify link rendered as an embedded
//! player, or a placeholder when no song has been chosen yet.

use dioxus::prelude::*;
use keepsake_core::spotify_embed_url;

use crate::context::use_client;

#[component]
pub fn MusicSection() -> Element {
    let client = use_client();
    let mut embed_url: Signal<Option<Option<String>>> = use_signal(|| None);

    use_effect(move || {
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.load_settings().await {
                Ok(settings) => {
                    let embed = settings
                        .spotify_url
                        .as_deref()
                        .and_then(spotify_embed_url);
                    embed_url.set(Some(embed));
                }
                Err(e) => {
                    tracing::error!("music settings fetch failed: {}", e);
                    embed_url.set(Some(None));
                }
            }
        });
    });

    rsx! {
        section { class: "music-section", id: "music",
            h2 { class: "section-title", "Şarkımız" }
            {match embed_url() {
                None => rsx! {
                    div { class: "loading-spinner" }
                },
                Some(None) => rsx! {
                    div { class: "music-placeholder",
                        span { class: "music-note", "🎵" }
                        p { "Henüz şarkı eklenmemiş." }
                    }
                },
                Some(Some(url)) => rsx! {
                    iframe {
                        class: "music-embed",
                        src: "{url}",
                        width: "100%",
                        height: "352",
                        allow: "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture",
                        "loading": "lazy",
                    }
                },
            }}
        }
    }
}

//! Flip-card "reasons I love you" grid.
//!
//! At most one card shows its back at a time: flipping a card flips the
//! previous one face-down, and tapping the open card closes it.

use dioxus::prelude::*;
use keepsake_core::{Doc, Reason};

use crate::context::use_client;

#[component]
pub fn ReasonsSection() -> Element {
    let client = use_client();
    let mut reasons: Signal<Option<Vec<Doc<Reason>>>> = use_signal(|| None);
    let mut flipped: Signal<Option<usize>> = use_signal(|| None);
    let mut failed: Signal<bool> = use_signal(|| false);

    use_effect(move || {
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.list_reasons().await {
                Ok(list) => reasons.set(Some(list)),
                Err(e) => {
                    tracing::error!("reasons fetch failed: {}", e);
                    failed.set(true);
                    reasons.set(Some(Vec::new()));
                }
            }
        });
    });

    rsx! {
        section { class: "reasons-section", id: "reasons",
            h2 { class: "section-title", "Seni Sevmemin Sebepleri" }
            {match reasons() {
                None => rsx! {
                    div { class: "loading-spinner" }
                },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "empty-state",
                        if failed() {
                            "Sebepler şu an yüklenemiyor."
                        } else {
                            "Henüz sebep eklenmemiş."
                        }
                    }
                },
                Some(list) => rsx! {
                    div { class: "reasons-grid",
                        for (index, reason) in list.iter().enumerate() {
                            FlipCard {
                                key: "{reason.id}",
                                number: reason.data.order,
                                text: reason.data.text.clone(),
                                flipped: flipped() == Some(index),
                                on_flip: move |_| {
                                    if flipped() == Some(index) {
                                        flipped.set(None);
                                    } else {
                                        flipped.set(Some(index));
                                    }
                                },
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn FlipCard(number: i64, text: String, flipped: bool, on_flip: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: if flipped { "flip-card flipped" } else { "flip-card" },
            onclick: move |_| on_flip.call(()),
            div { class: "flip-card-inner",
                div { class: "flip-card-front",
                    span { class: "flip-card-number", "{number}" }
                    span { class: "flip-card-heart", "❤" }
                }
                div { class: "flip-card-back",
                    p { "{text}" }
                }
            }
        }
    }
}

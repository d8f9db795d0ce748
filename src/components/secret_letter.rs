//! Long-press secret letter.
//!
//! Holding the button for three seconds reveals the letter in a modal.
//! Mouse and touch events both drive the same gauge, so overlapping
//! synthetic events cannot double-trigger the reveal. The letter text is
//! fetched when the gauge fires, not at mount, so a letter written while
//! the page is open still shows up.

use chrono::Utc;
use dioxus::prelude::*;
use keepsake_core::{letter_paragraphs, HoldGauge, HoldSample, HOLD_SAMPLE_MS};

use crate::context::use_client;

/// Paragraphs for the revealed modal. An unwritten letter still reveals,
/// with placeholder copy inside the modal.
fn modal_paragraphs(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        vec!["Henüz mektup yazılmamış...".to_string()]
    } else {
        letter_paragraphs(text)
    }
}

#[component]
pub fn SecretLetterSection() -> Element {
    let client = use_client();
    let mut letter: Signal<Option<String>> = use_signal(|| None);
    let mut gauge: Signal<HoldGauge> = use_signal(HoldGauge::new);
    let mut progress: Signal<f64> = use_signal(|| 0.0);
    let mut revealed: Signal<bool> = use_signal(|| false);
    let mut sampler: Signal<Option<Task>> = use_signal(|| None);

    let mut reveal = move || {
        revealed.set(true);
        letter.set(None);
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            let text = match site.load_settings().await {
                Ok(settings) => settings.secret_letter.unwrap_or_default(),
                Err(e) => {
                    tracing::error!("letter settings fetch failed: {}", e);
                    String::new()
                }
            };
            letter.set(Some(text));
        });
    };

    let mut begin_hold = move || {
        gauge.write().press(Utc::now());
        if sampler.peek().is_some() {
            return;
        }
        let task = spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_millis(HOLD_SAMPLE_MS));
            loop {
                interval.tick().await;
                match gauge.write().sample(Utc::now()) {
                    HoldSample::Idle => {
                        progress.set(0.0);
                        break;
                    }
                    HoldSample::Holding(p) => progress.set(p),
                    HoldSample::Triggered => {
                        progress.set(0.0);
                        reveal();
                        break;
                    }
                }
            }
            sampler.set(None);
        });
        sampler.set(Some(task));
    };

    let mut end_hold = move || {
        gauge.write().release();
        progress.set(0.0);
    };

    use_drop(move || {
        if let Some(task) = sampler.take() {
            task.cancel();
        }
    });

    rsx! {
        section { class: "letter-section", id: "letter",
            h2 { class: "section-title", "Sana Bir Mektubum Var" }
            p { class: "letter-hint", "Okumak için 3 saniye basılı tut" }
            button {
                class: "hold-btn",
                onmousedown: move |_| begin_hold(),
                onmouseup: move |_| end_hold(),
                onmouseleave: move |_| end_hold(),
                ontouchstart: move |_| begin_hold(),
                ontouchend: move |_| end_hold(),
                ontouchcancel: move |_| end_hold(),
                span { class: "hold-btn-label", "💌 Basılı Tut" }
                div {
                    class: "hold-progress",
                    style: "width: {progress()}%;",
                }
            }

            if revealed() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| revealed.set(false),
                    div {
                        class: "letter-modal",
                        onclick: move |e| e.stop_propagation(),
                        h3 { class: "letter-modal-title", "Sevgilime 💌" }
                        {match letter() {
                            None => rsx! {
                                div { class: "loading-spinner" }
                            },
                            Some(text) => rsx! {
                                for paragraph in modal_paragraphs(&text) {
                                    p { class: "letter-paragraph", "{paragraph}" }
                                }
                            },
                        }}
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| revealed.set(false),
                            "Kapat"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_letter_reveals_placeholder() {
        assert_eq!(modal_paragraphs(""), vec!["Henüz mektup yazılmamış..."]);
        assert_eq!(modal_paragraphs("  \n  "), vec!["Henüz mektup yazılmamış..."]);
    }

    #[test]
    fn test_written_letter_splits_into_paragraphs() {
        let parts = modal_paragraphs("Merhaba.\n\nSeni seviyorum.");
        assert_eq!(parts, vec!["Merhaba.", "Seni seviyorum."]);
    }
}

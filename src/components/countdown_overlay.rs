//! Countdown Overlay
//!
//! Full-screen gate shown to visitors before the launch instant. Ticks once
//! a second and asks the page to re-evaluate the gate when the countdown
//! reaches zero.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use keepsake_core::{pad2, TimeParts};

#[component]
pub fn CountdownOverlay(
    /// The configured launch instant
    launch: DateTime<Utc>,
    /// Called once when the countdown reaches zero
    on_elapsed: EventHandler<()>,
) -> Element {
    let mut parts: Signal<Option<TimeParts>> =
        use_signal(|| TimeParts::until(Utc::now(), launch));
    let mut ticker: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        // Replace any previous ticker so only one interval ever runs
        if let Some(task) = ticker.take() {
            task.cancel();
        }
        let task = spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                let remaining = TimeParts::until(Utc::now(), launch);
                parts.set(remaining);
                if remaining.is_none() {
                    on_elapsed.call(());
                    break;
                }
            }
        });
        ticker.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
    });

    let shown = parts().unwrap_or(TimeParts {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    });

    rsx! {
        div { class: "countdown-overlay",
            div { class: "countdown-content",
                div { class: "countdown-heart", "💝" }
                h1 { class: "countdown-title", "Özel Bir Sürpriz Hazırlanıyor..." }
                p { class: "countdown-subtitle",
                    "Sabırla bekle, çok yakında seninle paylaşacağım güzel şeyler var"
                }

                div { class: "countdown-timer",
                    CountdownDigit { value: shown.days, label: "Gün" }
                    CountdownDigit { value: shown.hours, label: "Saat" }
                    CountdownDigit { value: shown.minutes, label: "Dakika" }
                    CountdownDigit { value: shown.seconds, label: "Saniye" }
                }

                p { class: "countdown-message", "Seni çok seviyorum ❤️" }
            }
        }
    }
}

#[component]
fn CountdownDigit(value: i64, label: &'static str) -> Element {
    rsx! {
        div { class: "countdown-item",
            span { class: "countdown-number", {pad2(value)} }
            span { class: "countdown-label", "{label}" }
        }
    }
}

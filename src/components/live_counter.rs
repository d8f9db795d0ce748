//! Live relationship counter.
//!
//! Counts up from the configured start date, ticking once a second. The
//! start date comes from settings; until it loads (or if it was never set)
//! the counter runs from the built-in default.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use keepsake_core::{istanbul_midnight, pad2, TimeParts};

use crate::context::use_client;

/// Fallback start instant: 1 Jan 2023, midnight Istanbul time.
fn default_start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_672_520_400, 0).unwrap_or_default()
}

#[component]
pub fn LiveCounter() -> Element {
    let client = use_client();
    let mut start: Signal<DateTime<Utc>> = use_signal(default_start);
    let mut parts: Signal<TimeParts> =
        use_signal(|| TimeParts::since(default_start(), Utc::now()));
    let mut ticker: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.load_settings().await {
                Ok(settings) => {
                    if let Some(date) = settings.start_date {
                        // Day rollover happens at the couple's midnight
                        start.set(istanbul_midnight(date));
                    }
                }
                Err(e) => tracing::error!("counter settings fetch failed: {}", e),
            }
        });
    });

    use_effect(move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
        let task = spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                parts.set(TimeParts::since(start(), Utc::now()));
            }
        });
        ticker.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
    });

    let shown = parts();

    rsx! {
        section { class: "counter-section", id: "counter",
            h2 { class: "section-title", "Birlikte Geçen Zaman" }
            div { class: "counter-grid",
                CounterCell { value: shown.days.to_string(), label: "Gün" }
                CounterCell { value: pad2(shown.hours), label: "Saat" }
                CounterCell { value: pad2(shown.minutes), label: "Dakika" }
                CounterCell { value: pad2(shown.seconds), label: "Saniye" }
            }
            p { class: "counter-caption", "...ve her saniye seninle daha güzel" }
        }
    }
}

#[component]
fn CounterCell(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "counter-cell",
            span { class: "counter-value", "{value}" }
            span { class: "counter-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_is_istanbul_new_year_2023() {
        assert_eq!(default_start().to_rfc3339(), "2022-12-31T21:00:00+00:00");
    }
}

//! Timeline of shared memories, date-ascending, alternating sides.

use chrono::{DateTime, Datelike, Utc};
use dioxus::prelude::*;
use keepsake_core::{Doc, TimelineEvent};

use crate::context::use_client;

const TURKISH_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos",
    "Eylül", "Ekim", "Kasım", "Aralık",
];

/// "15 Haziran 2023" style display date.
pub fn format_turkish_date(date: DateTime<Utc>) -> String {
    let month = TURKISH_MONTHS
        .get(date.month0() as usize)
        .copied()
        .unwrap_or("");
    format!("{} {} {}", date.day(), month, date.year())
}

#[component]
pub fn TimelineSection() -> Element {
    let client = use_client();
    let mut events: Signal<Option<Vec<Doc<TimelineEvent>>>> = use_signal(|| None);
    let mut failed: Signal<bool> = use_signal(|| false);

    use_effect(move || {
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.list_timeline().await {
                Ok(list) => events.set(Some(list)),
                Err(e) => {
                    tracing::error!("timeline fetch failed: {}", e);
                    failed.set(true);
                    events.set(Some(Vec::new()));
                }
            }
        });
    });

    rsx! {
        section { class: "timeline-section", id: "timeline",
            h2 { class: "section-title", "Hikayemiz" }
            {match events() {
                None => rsx! {
                    div { class: "loading-spinner" }
                },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "empty-state",
                        if failed() {
                            "Anılar şu an yüklenemiyor."
                        } else {
                            "Henüz anı eklenmemiş."
                        }
                    }
                },
                Some(list) => rsx! {
                    div { class: "timeline",
                        for (index, event) in list.iter().enumerate() {
                            TimelineEntry {
                                key: "{event.id}",
                                event: event.data.clone(),
                                right: index % 2 == 1,
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn TimelineEntry(event: TimelineEvent, right: bool) -> Element {
    let side = if right { "timeline-entry right" } else { "timeline-entry left" };
    rsx! {
        div { class: "{side}",
            div { class: "timeline-dot" }
            div { class: "timeline-card",
                span { class: "timeline-date", {format_turkish_date(event.date)} }
                h3 { class: "timeline-title", "{event.title}" }
                if !event.description.is_empty() {
                    p { class: "timeline-text", "{event.description}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_turkish_date_formatting() {
        assert_eq!(format_turkish_date(ts("2023-06-15T00:00:00Z")), "15 Haziran 2023");
        assert_eq!(format_turkish_date(ts("2024-01-01T00:00:00Z")), "1 Ocak 2024");
        assert_eq!(format_turkish_date(ts("2025-12-31T00:00:00Z")), "31 Aralık 2025");
    }
}

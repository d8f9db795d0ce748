//! Site settings: start date, launch instant, song link and the secret
//! letter. Each card saves on its own and only writes the field it owns.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use dioxus::prelude::*;
use keepsake_core::validate::{parse_form_date, validate_music_url};
use keepsake_core::SettingsPatch;

use crate::context::{push_toast, use_client, use_toasts, ToastKind};

/// Parse a `datetime-local` input as Istanbul wall time (+03:00, no DST).
fn parse_launch_input(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M").ok()?;
    let offset = FixedOffset::east_opt(3 * 3600)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|t| t.with_timezone(&Utc))
}

fn launch_input_value(instant: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap_or_else(|| Utc.fix());
    instant
        .with_timezone(&offset)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

#[component]
pub fn SettingsManager() -> Element {
    let client = use_client();
    let toasts = use_toasts();

    let mut loaded: Signal<bool> = use_signal(|| false);
    let mut start_date: Signal<String> = use_signal(String::new);
    let mut launch_date: Signal<String> = use_signal(String::new);
    let mut spotify_url: Signal<String> = use_signal(String::new);
    let mut secret_letter: Signal<String> = use_signal(String::new);
    let mut busy: Signal<bool> = use_signal(|| false);

    use_effect(move || {
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.load_settings().await {
                Ok(settings) => {
                    if let Some(date) = settings.start_date {
                        start_date.set(date.format("%Y-%m-%d").to_string());
                    }
                    if let Some(instant) = settings.launch_date {
                        launch_date.set(launch_input_value(instant));
                    }
                    if let Some(url) = settings.spotify_url {
                        spotify_url.set(url);
                    }
                    if let Some(letter) = settings.secret_letter {
                        secret_letter.set(letter);
                    }
                    loaded.set(true);
                }
                Err(e) => {
                    tracing::error!("settings fetch failed: {}", e);
                    push_toast(toasts, e.user_message(), ToastKind::Error);
                    loaded.set(true);
                }
            }
        });
    });

    // One shared saver; every card builds a single-field patch
    let mut save = move |patch: SettingsPatch, success: &'static str| {
        if busy() || patch.is_empty() {
            return;
        }
        busy.set(true);
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            if let Some(site) = guard.as_ref() {
                match site.save_settings(&patch).await {
                    Ok(()) => push_toast(toasts, success, ToastKind::Success),
                    Err(e) => push_toast(toasts, e.user_message(), ToastKind::Error),
                }
            }
            busy.set(false);
        });
    };

    let save_start = move |_| match parse_form_date(&start_date()) {
        Ok(date) => save(
            SettingsPatch {
                start_date: Some(date),
                ..Default::default()
            },
            "Başlangıç tarihi kaydedildi",
        ),
        Err(e) => push_toast(toasts, e.user_message(), ToastKind::Error),
    };

    let save_launch = move |_| match parse_launch_input(&launch_date()) {
        Some(instant) => save(
            SettingsPatch {
                launch_date: Some(instant),
                ..Default::default()
            },
            "Açılış zamanı kaydedildi",
        ),
        None => push_toast(toasts, "Lütfen bir tarih seçin", ToastKind::Error),
    };

    let save_music = move |_| match validate_music_url(&spotify_url()) {
        Ok(()) => save(
            SettingsPatch {
                spotify_url: Some(spotify_url().trim().to_string()),
                ..Default::default()
            },
            "Şarkı kaydedildi",
        ),
        Err(e) => push_toast(toasts, e.user_message(), ToastKind::Error),
    };

    let save_letter = move |_| {
        save(
            SettingsPatch {
                secret_letter: Some(secret_letter()),
                ..Default::default()
            },
            "Mektup kaydedildi",
        )
    };

    if !loaded() {
        return rsx! {
            div { class: "loading-spinner" }
        };
    }

    rsx! {
        div { class: "manager-panel",
            div { class: "settings-card",
                h3 { "Başlangıç Tarihi" }
                p { class: "settings-hint", "Sayaç bu günden itibaren sayar." }
                div { class: "form-group",
                    input {
                        r#type: "date",
                        value: "{start_date}",
                        oninput: move |e| start_date.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy(),
                    onclick: save_start,
                    "Kaydet"
                }
            }

            div { class: "settings-card",
                h3 { "Açılış Zamanı" }
                p { class: "settings-hint",
                    "Bu andan önce ziyaretçiler sadece geri sayımı görür."
                }
                div { class: "form-group",
                    input {
                        r#type: "datetime-local",
                        value: "{launch_date}",
                        oninput: move |e| launch_date.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy(),
                    onclick: save_launch,
                    "Kaydet"
                }
            }

            div { class: "settings-card",
                h3 { "Şarkımız" }
                div { class: "form-group",
                    input {
                        placeholder: "https://open.spotify.com/track/...",
                        value: "{spotify_url}",
                        oninput: move |e| spotify_url.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy(),
                    onclick: save_music,
                    "Kaydet"
                }
            }

            div { class: "settings-card",
                h3 { "Gizli Mektup" }
                p { class: "settings-hint", "Boş satırla ayrılan bölümler paragraf olur." }
                div { class: "form-group",
                    textarea {
                        rows: "10",
                        value: "{secret_letter}",
                        oninput: move |e| secret_letter.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: busy(),
                    onclick: save_letter,
                    "Kaydet"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_input_round_trip() {
        let parsed = parse_launch_input("2026-02-14T20:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-02-14T17:00:00+00:00");
        assert_eq!(launch_input_value(parsed), "2026-02-14T20:00");
    }

    #[test]
    fn test_launch_input_rejects_garbage() {
        assert!(parse_launch_input("").is_none());
        assert!(parse_launch_input("14.02.2026 20:00").is_none());
    }
}

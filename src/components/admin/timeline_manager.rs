//! Timeline CRUD: list, add, edit in place, delete via the shared dialog.

use dioxus::prelude::*;
use keepsake_core::validate::validate_timeline_form;
use keepsake_core::{Doc, TimelineEvent};

use crate::components::timeline_section::format_turkish_date;
use crate::context::{
    bump_refresh, push_toast, use_client, use_pending_delete, use_refresh, use_toasts,
    DeleteTarget, PendingDelete, ToastKind,
};

#[component]
pub fn TimelineManager() -> Element {
    let client = use_client();
    let toasts = use_toasts();
    let mut pending_delete = use_pending_delete();
    let refresh = use_refresh();

    let mut events: Signal<Option<Vec<Doc<TimelineEvent>>>> = use_signal(|| None);
    let mut date: Signal<String> = use_signal(String::new);
    let mut title: Signal<String> = use_signal(String::new);
    let mut description: Signal<String> = use_signal(String::new);
    let mut editing: Signal<Option<String>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut busy: Signal<bool> = use_signal(|| false);

    // Reload on mount and after every confirmed mutation
    use_effect(move || {
        let _ = refresh();
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.list_timeline().await {
                Ok(list) => events.set(Some(list)),
                Err(e) => {
                    tracing::error!("admin timeline fetch failed: {}", e);
                    push_toast(toasts, e.user_message(), ToastKind::Error);
                    events.set(Some(Vec::new()));
                }
            }
        });
    });

    let mut clear_form = move || {
        date.set(String::new());
        title.set(String::new());
        description.set(String::new());
        editing.set(None);
        error.set(None);
    };

    let submit = move |_| {
        if busy() {
            return;
        }
        let parsed = match validate_timeline_form(&date(), &title()) {
            Ok(parsed) => parsed,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let record = TimelineEvent {
            date: parsed,
            title: title().trim().to_string(),
            description: description().trim().to_string(),
            created_at: None,
            updated_at: None,
        };
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            if let Some(site) = guard.as_ref() {
                let result = match editing() {
                    Some(id) => site.update_timeline_event(&id, &record).await.map(|_| ()),
                    None => site.create_timeline_event(&record).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let message = if editing().is_some() {
                            "Anı güncellendi"
                        } else {
                            "Anı eklendi"
                        };
                        push_toast(toasts, message, ToastKind::Success);
                        clear_form();
                        bump_refresh(refresh);
                    }
                    Err(e) => push_toast(toasts, e.user_message(), ToastKind::Error),
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "manager-panel",
            div { class: "settings-card",
                h3 {
                    if editing().is_some() { "Anıyı Düzenle" } else { "Yeni Anı" }
                }
                div { class: "form-group",
                    label { "Tarih" }
                    input {
                        r#type: "date",
                        value: "{date}",
                        oninput: move |e| date.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Başlık" }
                    input {
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Açıklama" }
                    textarea {
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: busy(),
                        onclick: submit,
                        if editing().is_some() { "Güncelle" } else { "Ekle" }
                    }
                    if editing().is_some() {
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| clear_form(),
                            "Vazgeç"
                        }
                    }
                }
            }

            {match events() {
                None => rsx! {
                    div { class: "loading-spinner" }
                },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "empty-state", "Henüz anı eklenmemiş." }
                },
                Some(list) => rsx! {
                    div { class: "item-list",
                        for event in list.iter() {
                            {
                                let id = event.id.clone();
                                let data = event.data.clone();
                                rsx! {
                                    div { key: "{id}", class: "list-item",
                                        div { class: "list-item-body",
                                            span { class: "list-item-date", {format_turkish_date(data.date)} }
                                            strong { "{data.title}" }
                                            if !data.description.is_empty() {
                                                p { "{data.description}" }
                                            }
                                        }
                                        div { class: "list-item-actions",
                                            button {
                                                class: "btn btn-small",
                                                onclick: {
                                                    let id = id.clone();
                                                    let data = data.clone();
                                                    move |_| {
                                                        date.set(data.date.format("%Y-%m-%d").to_string());
                                                        title.set(data.title.clone());
                                                        description.set(data.description.clone());
                                                        editing.set(Some(id.clone()));
                                                        error.set(None);
                                                    }
                                                },
                                                "Düzenle"
                                            }
                                            button {
                                                class: "btn btn-small btn-danger",
                                                onclick: {
                                                    let id = id.clone();
                                                    move |_| {
                                                        pending_delete.set(Some(PendingDelete {
                                                            message: "Bu anıyı silmek istediğine emin misin?".to_string(),
                                                            target: DeleteTarget::TimelineEvent(id.clone()),
                                                        }));
                                                    }
                                                },
                                                "Sil"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

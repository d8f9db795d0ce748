//! Reasons CRUD: ordered list of flip-card texts.

use dioxus::prelude::*;
use keepsake_core::validate::validate_reason_form;
use keepsake_core::{Doc, Reason};

use crate::context::{
    bump_refresh, push_toast, use_client, use_pending_delete, use_refresh, use_toasts,
    DeleteTarget, PendingDelete, ToastKind,
};

#[component]
pub fn ReasonsManager() -> Element {
    let client = use_client();
    let toasts = use_toasts();
    let mut pending_delete = use_pending_delete();
    let refresh = use_refresh();

    let mut reasons: Signal<Option<Vec<Doc<Reason>>>> = use_signal(|| None);
    let mut order: Signal<String> = use_signal(String::new);
    let mut text: Signal<String> = use_signal(String::new);
    let mut editing: Signal<Option<String>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut busy: Signal<bool> = use_signal(|| false);

    use_effect(move || {
        let _ = refresh();
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.list_reasons().await {
                Ok(list) => reasons.set(Some(list)),
                Err(e) => {
                    tracing::error!("admin reasons fetch failed: {}", e);
                    push_toast(toasts, e.user_message(), ToastKind::Error);
                    reasons.set(Some(Vec::new()));
                }
            }
        });
    });

    let mut clear_form = move || {
        order.set(String::new());
        text.set(String::new());
        editing.set(None);
        error.set(None);
    };

    let submit = move |_| {
        if busy() {
            return;
        }
        let rank = match validate_reason_form(&order(), &text()) {
            Ok(rank) => rank,
            Err(e) => {
                error.set(Some(e.user_message()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let body = text().trim().to_string();
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            if let Some(site) = guard.as_ref() {
                let result = match editing() {
                    Some(id) => site.update_reason(&id, rank, &body).await.map(|_| ()),
                    None => site.create_reason(rank, &body).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let message = if editing().is_some() {
                            "Sebep güncellendi"
                        } else {
                            "Sebep eklendi"
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
                    if editing().is_some() { "Sebebi Düzenle" } else { "Yeni Sebep" }
                }
                div { class: "form-group",
                    label { "Sıra" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{order}",
                        oninput: move |e| order.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Sebep" }
                    textarea {
                        value: "{text}",
                        oninput: move |e| text.set(e.value()),
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

            {match reasons() {
                None => rsx! {
                    div { class: "loading-spinner" }
                },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "empty-state", "Henüz sebep eklenmemiş." }
                },
                Some(list) => rsx! {
                    div { class: "item-list",
                        for reason in list.iter() {
                            {
                                let id = reason.id.clone();
                                let data = reason.data.clone();
                                rsx! {
                                    div { key: "{id}", class: "list-item",
                                        div { class: "list-item-body",
                                            span { class: "list-item-order", "#{data.order}" }
                                            p { "{data.text}" }
                                        }
                                        div { class: "list-item-actions",
                                            button {
                                                class: "btn btn-small",
                                                onclick: {
                                                    let id = id.clone();
                                                    let data = data.clone();
                                                    move |_| {
                                                        order.set(data.order.to_string());
                                                        text.set(data.text.clone());
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
                                                            message: "Bu sebebi silmek istediğine emin misin?".to_string(),
                                                            target: DeleteTarget::Reason(id.clone()),
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

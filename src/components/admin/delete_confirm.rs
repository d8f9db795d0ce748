//! Shared delete-confirmation dialog.
//!
//! One slot serves every manager: requesting a delete while the dialog is
//! open replaces the pending request. Nothing is removed until the user
//! confirms.

use dioxus::prelude::*;

use crate::context::{
    bump_refresh, push_toast, use_client, use_pending_delete, use_refresh, use_toasts,
    DeleteTarget, ToastKind,
};

#[component]
pub fn DeleteConfirmDialog() -> Element {
    let client = use_client();
    let toasts = use_toasts();
    let mut pending = use_pending_delete();
    let refresh = use_refresh();
    let mut busy: Signal<bool> = use_signal(|| false);

    let Some(request) = pending() else {
        return rsx! {};
    };

    let target = request.target.clone();
    let confirm = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        let target = target.clone();
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            if let Some(site) = guard.as_ref() {
                let result = match &target {
                    DeleteTarget::TimelineEvent(id) => site.delete_timeline_event(id).await,
                    DeleteTarget::Photo(id) => site.delete_photo(id).await,
                    DeleteTarget::Reason(id) => site.delete_reason(id).await,
                };
                match result {
                    Ok(()) => {
                        push_toast(toasts, "Silindi", ToastKind::Success);
                        bump_refresh(refresh);
                    }
                    Err(e) => push_toast(toasts, e.user_message(), ToastKind::Error),
                }
            }
            pending.set(None);
            busy.set(false);
        });
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-card",
                h3 { "Emin misin?" }
                p { "{request.message}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy(),
                        onclick: move |_| pending.set(None),
                        "İptal"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy(),
                        onclick: confirm,
                        "Sil"
                    }
                }
            }
        }
    }
}

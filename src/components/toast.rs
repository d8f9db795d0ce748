//! Toast notification host. Mounted once per page that pushes toasts.

use dioxus::prelude::*;

use crate::context::{use_toasts, ToastKind};

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toast-container",
            for toast in toasts().iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

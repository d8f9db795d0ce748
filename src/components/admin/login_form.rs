//! Email/password login card for the admin panel.

use dioxus::prelude::*;

use crate::context::use_client;

#[component]
pub fn LoginForm() -> Element {
    let client = use_client();
    let mut email: Signal<String> = use_signal(String::new);
    let mut password: Signal<String> = use_signal(String::new);
    let mut busy: Signal<bool> = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let mut submit = move || {
        if busy() {
            return;
        }
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Lütfen e-posta ve şifre girin".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            if let Some(site) = guard.as_ref() {
                // Success flows back through the auth-state stream; the page
                // swaps to the panel on its own.
                if let Err(e) = site.sign_in(email().trim(), &password()).await {
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "login-card",
            h1 { class: "login-title", "Yönetici Girişi" }
            div { class: "form-group",
                label { "E-posta" }
                input {
                    r#type: "email",
                    value: "{email}",
                    autofocus: true,
                    oninput: move |e| email.set(e.value()),
                }
            }
            div { class: "form-group",
                label { "Şifre" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            button {
                class: "btn btn-primary",
                disabled: busy(),
                onclick: move |_| submit(),
                if busy() { "Giriş yapılıyor..." } else { "Giriş Yap" }
            }
        }
    }
}

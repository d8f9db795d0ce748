//! Full-screen photo viewer opened from the gallery.

use dioxus::prelude::*;

#[component]
pub fn Lightbox(
    src: String,
    caption: String,
    has_prev: bool,
    has_next: bool,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "lightbox-overlay",
            tabindex: "0",
            autofocus: true,
            onclick: move |_| on_close.call(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "lightbox-body",
                // Keep clicks on the photo itself from closing the viewer
                onclick: move |e| e.stop_propagation(),
                img { class: "lightbox-image", src: "{src}", alt: "{caption}" }
                if !caption.is_empty() {
                    p { class: "lightbox-caption", "{caption}" }
                }
                button {
                    class: "lightbox-close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                if has_prev {
                    button {
                        class: "lightbox-nav prev",
                        onclick: move |_| on_prev.call(()),
                        "‹"
                    }
                }
                if has_next {
                    button {
                        class: "lightbox-nav next",
                        onclick: move |_| on_next.call(()),
                        "›"
                    }
                }
            }
        }
    }
}

//! Admin panel page: login card when signed out, the tabbed managers when
//! signed in. Hosts the toast stack and the shared delete dialog.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::admin::{
    DeleteConfirmDialog, GalleryManager, LoginForm, ReasonsManager, SettingsManager,
    TimelineManager,
};
use crate::components::ToastHost;
use crate::context::{use_client, use_session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Timeline,
    Gallery,
    Reasons,
    Settings,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Timeline => "Zaman Tüneli",
            Tab::Gallery => "Galeri",
            Tab::Reasons => "Sebepler",
            Tab::Settings => "Ayarlar",
        }
    }
}

const TABS: [Tab; 4] = [Tab::Timeline, Tab::Gallery, Tab::Reasons, Tab::Settings];

#[component]
pub fn Admin() -> Element {
    let client = use_client();
    let session = use_session();
    let mut tab: Signal<Tab> = use_signal(|| Tab::Timeline);

    let sign_out = move |_| {
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            if let Some(site) = guard.as_ref() {
                site.sign_out();
            }
        });
    };

    rsx! {
        div { class: "admin-page",
            if session().is_none() {
                LoginForm {}
            } else {
                header { class: "admin-header",
                    h1 { "Yönetim Paneli" }
                    div { class: "admin-header-actions",
                        if let Some(active) = session() {
                            span { class: "admin-user-email", "{active.email}" }
                        }
                        Link { class: "btn btn-secondary", to: Route::Home {}, "Siteyi Gör" }
                        button { class: "btn btn-secondary", onclick: sign_out, "Çıkış Yap" }
                    }
                }
                nav { class: "nav-tabs",
                    for entry in TABS {
                        button {
                            class: if tab() == entry { "nav-tab active" } else { "nav-tab" },
                            onclick: move |_| tab.set(entry),
                            {entry.label()}
                        }
                    }
                }
                main { class: "admin-content",
                    {match tab() {
                        Tab::Timeline => rsx! { TimelineManager {} },
                        Tab::Gallery => rsx! { GalleryManager {} },
                        Tab::Reasons => rsx! { ReasonsManager {} },
                        Tab::Settings => rsx! { SettingsManager {} },
                    }}
                }
                DeleteConfirmDialog {}
            }
            ToastHost {}
        }
    }
}

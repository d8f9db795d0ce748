use std::sync::Arc;

use dioxus::prelude::*;
use keepsake_core::{Session, SiteClient};
use tokio::sync::RwLock;

use crate::context::{PendingDelete, RefreshTick, SharedClient, Toast};
use crate::pages::{Admin, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Public anniversary page (gate, counter, timeline, gallery, ...)
/// - `/admin` - Content management panel
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/admin")]
    Admin {},
}

/// Root application component.
///
/// Provides global styles, the shared SiteClient, auth state, toasts and
/// the delete-confirmation slot, then mounts the router.
#[component]
pub fn App() -> Element {
    let client: Signal<SharedClient> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut client_ready: Signal<bool> = use_signal(|| false);
    let mut session: Signal<Option<Session>> = use_signal(|| None);
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);
    let pending_delete: Signal<Option<PendingDelete>> = use_signal(|| None);
    let refresh: Signal<RefreshTick> = use_signal(RefreshTick::default);

    use_context_provider(|| client);
    use_context_provider(|| client_ready);
    use_context_provider(|| session);
    use_context_provider(|| toasts);
    use_context_provider(|| pending_delete);
    use_context_provider(|| refresh);

    // Initialise the client on mount and start mirroring auth-state
    // changes into the session signal.
    use_effect(move || {
        spawn(async move {
            match SiteClient::new(crate::remote_config()) {
                Ok(site) => {
                    let mut auth_rx = site.subscribe_auth();

                    let shared = client();
                    let mut guard = shared.write().await;
                    *guard = Some(site);
                    drop(guard);
                    client_ready.set(true);
                    tracing::info!("SiteClient initialised");

                    spawn(async move {
                        while auth_rx.changed().await.is_ok() {
                            session.set(auth_rx.borrow().clone());
                        }
                    });
                }
                Err(e) => {
                    tracing::error!("failed to initialise SiteClient: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

//! Shared context for the Keepsake app.
//!
//! Provides the SiteClient instance, the auth session, toast notifications
//! and the pending-delete slot to all components via use_context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use keepsake_core::{Session, SiteClient};
use tokio::sync::RwLock;

/// Shared client type for context.
///
/// Wrapped in Arc<RwLock<>> so every component can read it concurrently
/// while startup initialises it once.
pub type SharedClient = Arc<RwLock<Option<SiteClient>>>;

/// Hook to access the SiteClient from context.
pub fn use_client() -> Signal<SharedClient> {
    use_context::<Signal<SharedClient>>()
}

/// Hook to check whether the client finished initialising.
pub fn use_client_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to read the current auth session. Mirrors the auth provider's
/// state-change stream: `None` means signed out.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

// === Toast notifications ===

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

static TOAST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Hook to access the toast stack.
pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}

/// Push a toast and schedule its auto-dismiss after ~3 seconds.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, message: impl Into<String>, kind: ToastKind) {
    let id = TOAST_SEQ.fetch_add(1, Ordering::Relaxed);
    toasts.write().push(Toast {
        id,
        message: message.into(),
        kind,
    });
    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        toasts.write().retain(|t| t.id != id);
    });
}

// === Delete confirmation ===

/// What the confirmation dialog will delete when confirmed.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteTarget {
    TimelineEvent(String),
    Photo(String),
    Reason(String),
}

/// The one pending-delete slot behind the shared confirmation dialog.
///
/// Overwritten, not queued: requesting a new delete while the dialog is
/// already open replaces the previous request (last wins).
#[derive(Clone, Debug, PartialEq)]
pub struct PendingDelete {
    pub message: String,
    pub target: DeleteTarget,
}

/// Hook to access the pending-delete slot.
pub fn use_pending_delete() -> Signal<Option<PendingDelete>> {
    use_context::<Signal<Option<PendingDelete>>>()
}

/// Counter bumped after every successful mutation so list views reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshTick(pub u64);

pub fn use_refresh() -> Signal<RefreshTick> {
    use_context::<Signal<RefreshTick>>()
}

pub fn bump_refresh(mut tick: Signal<RefreshTick>) {
    let next = tick.peek().0 + 1;
    tick.set(RefreshTick(next));
}

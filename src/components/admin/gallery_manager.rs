//! Gallery management: batch upload through the native file picker, listing
//! newest-first, deletes via the shared dialog.

use dioxus::prelude::*;
use keepsake_core::{validate_image, Doc, GalleryPhoto};

use crate::context::{
    bump_refresh, push_toast, use_client, use_pending_delete, use_refresh, use_toasts,
    DeleteTarget, PendingDelete, ToastKind,
};

#[component]
pub fn GalleryManager() -> Element {
    let client = use_client();
    let toasts = use_toasts();
    let mut pending_delete = use_pending_delete();
    let refresh = use_refresh();

    let mut photos: Signal<Option<Vec<Doc<GalleryPhoto>>>> = use_signal(|| None);
    // (uploaded so far, batch size) while a batch is running
    let mut progress: Signal<Option<(usize, usize)>> = use_signal(|| None);

    use_effect(move || {
        let _ = refresh();
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            match site.list_gallery_newest_first().await {
                Ok(list) => photos.set(Some(list)),
                Err(e) => {
                    tracing::error!("admin gallery fetch failed: {}", e);
                    push_toast(toasts, e.user_message(), ToastKind::Error);
                    photos.set(Some(Vec::new()));
                }
            }
        });
    });

    let pick_and_upload = move |_| {
        if progress().is_some() {
            return;
        }
        let shared = client();
        spawn(async move {
            // The native dialog blocks; keep it off the async executor
            let picked = tokio::task::spawn_blocking(|| {
                rfd::FileDialog::new()
                    .add_filter("Resimler", &["png", "jpg", "jpeg", "gif", "webp"])
                    .pick_files()
            })
            .await
            .ok()
            .flatten()
            .unwrap_or_default();
            if picked.is_empty() {
                return;
            }

            progress.set(Some((0, picked.len())));
            let mut uploaded = 0usize;

            let guard = shared.read().await;
            if let Some(site) = guard.as_ref() {
                for (index, path) in picked.iter().enumerate() {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "foto".to_string());

                    let bytes = match tokio::fs::read(path).await {
                        Ok(bytes) => bytes,
                        Err(e) => {
                            tracing::warn!(file = %name, "read failed: {}", e);
                            push_toast(
                                toasts,
                                format!("{} okunamadı", name),
                                ToastKind::Error,
                            );
                            progress.set(Some((index + 1, picked.len())));
                            continue;
                        }
                    };

                    // A bad file skips, the rest of the batch continues
                    if let Err(e) = validate_image(&name, &bytes) {
                        push_toast(toasts, e.user_message(), ToastKind::Error);
                        progress.set(Some((index + 1, picked.len())));
                        continue;
                    }

                    match site.add_photo(&name, bytes).await {
                        Ok(_) => uploaded += 1,
                        Err(e) => push_toast(toasts, e.user_message(), ToastKind::Error),
                    }
                    progress.set(Some((index + 1, picked.len())));
                }
            }

            progress.set(None);
            if uploaded > 0 {
                push_toast(
                    toasts,
                    format!("{} fotoğraf yüklendi", uploaded),
                    ToastKind::Success,
                );
                bump_refresh(refresh);
            }
        });
    };

    let upload_bar = progress().map(|(done, count)| {
        let percent = done * 100 / count.max(1);
        rsx! {
            div { class: "upload-progress",
                div {
                    class: "upload-progress-bar",
                    style: "width: {percent}%;",
                }
                span { "{done} / {count}" }
            }
        }
    });

    rsx! {
        div { class: "manager-panel",
            div { class: "upload-area",
                button {
                    class: "btn btn-primary",
                    disabled: progress().is_some(),
                    onclick: pick_and_upload,
                    "📷 Fotoğraf Yükle"
                }
                {upload_bar}
            }

            {match photos() {
                None => rsx! {
                    div { class: "loading-spinner" }
                },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "empty-state", "Henüz fotoğraf eklenmemiş." }
                },
                Some(list) => rsx! {
                    div { class: "gallery-admin-grid",
                        for photo in list.iter() {
                            {
                                let id = photo.id.clone();
                                rsx! {
                                    div { key: "{id}", class: "gallery-admin-item",
                                        img { src: "{photo.data.url}", alt: "{photo.data.caption}" }
                                        button {
                                            class: "btn btn-small btn-danger",
                                            onclick: move |_| {
                                                pending_delete.set(Some(PendingDelete {
                                                    message: "Bu fotoğrafı silmek istediğine emin misin?".to_string(),
                                                    target: DeleteTarget::Photo(id.clone()),
                                                }));
                                            },
                                            "Sil"
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

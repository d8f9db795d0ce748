//! Masonry photo gallery.
//!
//! The webview gives us no natural-size callback, so each photo is fetched
//! once, its dimensions probed from the bytes, and the image shown from a
//! data URI. Photos enter the layout in completion order: the greedy
//! shortest-column placement runs as each probe finishes, not in list order.

use std::io::Cursor;

use base64::Engine;
use dioxus::desktop::use_window;
use dioxus::prelude::*;
use keepsake_core::{columns_for_width, Doc, GalleryPhoto, MasonryLayout, FALLBACK_ASPECT, ITEM_GAP};
use tokio::task::JoinSet;

use crate::components::lightbox::Lightbox;
use crate::context::use_client;

/// Horizontal padding around the gallery content.
const SECTION_PADDING: f64 = 48.0;
/// The content column never grows past this.
const MAX_CONTENT_WIDTH: f64 = 1200.0;
/// How often the resize watcher re-reads the window size.
const RESIZE_POLL_MS: u64 = 250;

/// One photo whose dimensions are known and which is ready to place.
#[derive(Clone, Debug, PartialEq)]
struct LoadedPhoto {
    id: String,
    caption: String,
    src: String,
    aspect: f64,
}

#[component]
pub fn GallerySection() -> Element {
    let client = use_client();
    let window = use_window();

    let mut total: Signal<Option<usize>> = use_signal(|| None);
    let mut loaded: Signal<Vec<LoadedPhoto>> = use_signal(Vec::new);
    let mut viewport: Signal<f64> = use_signal(|| 1100.0);
    let mut open_photo: Signal<Option<usize>> = use_signal(|| None);
    let mut failed: Signal<bool> = use_signal(|| false);

    // Fetch the photo list, then probe every image concurrently and place
    // each one the moment its aspect ratio is known.
    use_effect(move || {
        let shared = client();
        spawn(async move {
            let guard = shared.read().await;
            let Some(site) = guard.as_ref() else { return };
            let photos = match site.list_gallery().await {
                Ok(photos) => photos,
                Err(e) => {
                    tracing::error!("gallery fetch failed: {}", e);
                    failed.set(true);
                    total.set(Some(0));
                    return;
                }
            };
            drop(guard);
            total.set(Some(photos.len()));

            let http = reqwest::Client::new();
            let mut probes = JoinSet::new();
            for photo in photos {
                probes.spawn(load_photo(http.clone(), photo));
            }
            while let Some(result) = probes.join_next().await {
                if let Ok(photo) = result {
                    loaded.write().push(photo);
                }
            }
        });
    });

    // Poll the window size; a real resize event hook is not worth the
    // plumbing for a 4Hz check. The viewport signal only moves when the
    // width crosses a column breakpoint, so same-breakpoint drags never
    // tear the layout down.
    let mut watcher: Signal<Option<Task>> = use_signal(|| None);
    let watcher_window = window.clone();
    use_effect(move || {
        if let Some(task) = watcher.take() {
            task.cancel();
        }
        let window = watcher_window.clone();
        let scale = window.scale_factor().max(0.1);
        viewport.set(window.inner_size().width as f64 / scale);
        let task = spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_millis(RESIZE_POLL_MS));
            loop {
                interval.tick().await;
                let size = window.inner_size();
                let scale = window.scale_factor().max(0.1);
                let width = size.width as f64 / scale;
                if breakpoint_crossed(*viewport.peek(), width) {
                    viewport.set(width);
                }
            }
        });
        watcher.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = watcher.take() {
            task.cancel();
        }
    });

    // Greedy shortest-column layout, rebuilt whenever a probe lands or the
    // viewport crosses a column breakpoint.
    let layout = use_memo(move || {
        let width = viewport();
        let items = loaded();
        let columns = columns_for_width(width);
        let content = width.min(MAX_CONTENT_WIDTH) - SECTION_PADDING;
        let column_width =
            ((content - (columns as f64 - 1.0) * ITEM_GAP) / columns as f64).max(1.0);

        let mut masonry = MasonryLayout::new(columns, column_width, ITEM_GAP);
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); masonry.column_count()];
        for (index, item) in items.iter().enumerate() {
            buckets[masonry.place(item.aspect)].push(index);
        }
        (buckets, column_width, masonry.clamp_height())
    });

    let items = loaded();
    let all_placed = total().is_some_and(|n| n > 0 && items.len() == n);
    let (buckets, column_width, clamp) = layout();

    let lightbox = open_photo().and_then(|index| {
        items.get(index).cloned().map(|photo| {
            rsx! {
                Lightbox {
                    src: photo.src,
                    caption: photo.caption,
                    has_prev: index > 0,
                    has_next: index + 1 < items.len(),
                    on_close: move |_| open_photo.set(None),
                    on_prev: move |_| open_photo.set(Some(index.saturating_sub(1))),
                    on_next: move |_| open_photo.set(Some(index + 1)),
                }
            }
        })
    });

    rsx! {
        section { class: "gallery-section", id: "gallery",
            h2 { class: "section-title", "Anılarımız" }
            {match total() {
                None => rsx! {
                    div { class: "loading-spinner" }
                },
                Some(0) => rsx! {
                    p { class: "empty-state",
                        if failed() {
                            "Fotoğraflar şu an yüklenemiyor."
                        } else {
                            "Henüz fotoğraf eklenmemiş."
                        }
                    }
                },
                Some(_) => rsx! {
                    div { class: "masonry-grid",
                        for bucket in buckets.iter() {
                            div {
                                class: if all_placed { "masonry-column clamped" } else { "masonry-column" },
                                style: if all_placed {
                                    format!("width: {column_width}px; max-height: {clamp}px;")
                                } else {
                                    format!("width: {column_width}px;")
                                },
                                for &index in bucket.iter() {
                                    {
                                        let item = &items[index];
                                        rsx! {
                                            img {
                                                key: "{item.id}",
                                                class: "masonry-item",
                                                src: "{item.src}",
                                                alt: "{item.caption}",
                                                onclick: move |_| open_photo.set(Some(index)),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}

            {lightbox}
        }
    }
}

/// A resize matters only when it changes how many columns fit.
fn breakpoint_crossed(previous: f64, current: f64) -> bool {
    columns_for_width(previous) != columns_for_width(current)
}

/// Fetch one photo and report its aspect; failures fall back to the hosted
/// URL and a square ratio so the layout never stalls on a broken asset.
async fn load_photo(http: reqwest::Client, photo: Doc<GalleryPhoto>) -> LoadedPhoto {
    match fetch_and_probe(&http, &photo.data.url).await {
        Ok((src, aspect)) => LoadedPhoto {
            id: photo.id,
            caption: photo.data.caption,
            src,
            aspect,
        },
        Err(e) => {
            tracing::warn!("image probe failed for {}: {}", photo.data.url, e);
            LoadedPhoto {
                id: photo.id,
                caption: photo.data.caption,
                src: photo.data.url,
                aspect: FALLBACK_ASPECT,
            }
        }
    }
}

async fn fetch_and_probe(
    http: &reqwest::Client,
    url: &str,
) -> Result<(String, f64), Box<dyn std::error::Error + Send + Sync>> {
    let bytes = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let reader = image::ImageReader::new(Cursor::new(&bytes)).with_guessed_format()?;
    let format = reader.format().ok_or("unrecognised image format")?;
    let (width, height) = reader.into_dimensions()?;
    let aspect = if height == 0 {
        FALLBACK_ASPECT
    } else {
        width as f64 / height as f64
    };

    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok((
        format!("data:{};base64,{}", format.to_mime_type(), encoded),
        aspect,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_breakpoint_resize_keeps_layout() {
        assert!(!breakpoint_crossed(1100.0, 1180.0));
        assert!(!breakpoint_crossed(800.0, 900.0));
        assert!(!breakpoint_crossed(500.0, 700.0));
    }

    #[test]
    fn test_breakpoint_crossing_rebuilds_layout() {
        assert!(breakpoint_crossed(1100.0, 1000.0));
        assert!(breakpoint_crossed(700.0, 800.0));
        assert!(breakpoint_crossed(1030.0, 760.0));
    }
}

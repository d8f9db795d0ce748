//! High-level site client.
//!
//! One facade over the three remote services. The UI holds a single shared
//! `SiteClient` and calls the operation it needs; every method is a thin
//! composition of the service clients plus the timestamps and sort rules
//! the pages expect.

use chrono::Utc;
use tokio::sync::watch;

use crate::auth::{AuthClient, Session};
use crate::config::RemoteConfig;
use crate::error::CoreResult;
use crate::image_host::{ImageHostClient, Uploaded};
use crate::store::{self, Direction, StoreClient};
use crate::types::{Doc, GalleryPhoto, Reason, Settings, SettingsPatch, TimelineEvent};

pub struct SiteClient {
    auth: AuthClient,
    store: StoreClient,
    images: ImageHostClient,
}

impl SiteClient {
    pub fn new(config: RemoteConfig) -> CoreResult<Self> {
        let http = reqwest::Client::builder().build()?;
        let auth = AuthClient::new(http.clone(), config.api_key.clone());
        let store = StoreClient::new(http.clone(), &config, auth.subscribe());
        let images = ImageHostClient::new(http, &config);
        Ok(SiteClient {
            auth,
            store,
            images,
        })
    }

    // === Auth ===

    pub fn subscribe_auth(&self) -> watch::Receiver<Option<Session>> {
        self.auth.subscribe()
    }

    pub fn session(&self) -> Option<Session> {
        self.auth.session()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> CoreResult<Session> {
        self.auth.sign_in(email, password).await
    }

    pub fn sign_out(&self) {
        self.auth.sign_out()
    }

    // === Settings ===

    /// Fetch the settings singleton; an absent document reads as defaults.
    pub async fn load_settings(&self) -> CoreResult<Settings> {
        let doc = self.store.get::<Settings>(store::SETTINGS_DOC).await?;
        Ok(doc.map(|d| d.data).unwrap_or_default())
    }

    /// Merge a partial settings update; untouched fields keep their values.
    pub async fn save_settings(&self, patch: &SettingsPatch) -> CoreResult<()> {
        self.store
            .merge(
                store::SETTINGS,
                store::SETTINGS_DOC,
                store::settings_patch_fields(patch),
            )
            .await
    }

    // === Timeline ===

    pub async fn list_timeline(&self) -> CoreResult<Vec<Doc<TimelineEvent>>> {
        self.store
            .list(Some(("date", Direction::Ascending)))
            .await
    }

    pub async fn create_timeline_event(&self, event: &TimelineEvent) -> CoreResult<Doc<TimelineEvent>> {
        let now = Utc::now();
        let record = TimelineEvent {
            created_at: Some(now),
            updated_at: Some(now),
            ..event.clone()
        };
        self.store.create(&record).await
    }

    pub async fn update_timeline_event(&self, id: &str, event: &TimelineEvent) -> CoreResult<()> {
        let record = TimelineEvent {
            updated_at: Some(Utc::now()),
            ..event.clone()
        };
        self.store.update(id, &record).await
    }

    pub async fn delete_timeline_event(&self, id: &str) -> CoreResult<()> {
        self.store.delete(store::TIMELINE, id).await
    }

    // === Gallery ===

    /// Public-page listing: fetched unordered, then re-sorted client-side by
    /// the numeric display rank.
    pub async fn list_gallery(&self) -> CoreResult<Vec<Doc<GalleryPhoto>>> {
        let mut photos = self.store.list::<GalleryPhoto>(None).await?;
        sort_gallery(&mut photos);
        Ok(photos)
    }

    /// Admin listing: newest upload first, server-side.
    pub async fn list_gallery_newest_first(&self) -> CoreResult<Vec<Doc<GalleryPhoto>>> {
        self.store
            .list(Some(("uploadedAt", Direction::Descending)))
            .await
    }

    /// Upload one image to the host, then record it in the store.
    pub async fn add_photo(&self, file_name: &str, bytes: Vec<u8>) -> CoreResult<Doc<GalleryPhoto>> {
        let Uploaded { url, public_id } = self.images.upload(file_name, bytes).await?;
        let photo = GalleryPhoto {
            url,
            public_id,
            caption: file_name.to_string(),
            uploaded_at: Some(Utc::now()),
            order: None,
        };
        self.store.create(&photo).await
    }

    /// Remove the store record only; the hosted image is left orphaned on
    /// purpose (the host offers no unsigned delete).
    pub async fn delete_photo(&self, id: &str) -> CoreResult<()> {
        self.store.delete(store::GALLERY, id).await
    }

    // === Reasons ===

    pub async fn list_reasons(&self) -> CoreResult<Vec<Doc<Reason>>> {
        self.store
            .list(Some(("order", Direction::Ascending)))
            .await
    }

    pub async fn create_reason(&self, order: i64, text: &str) -> CoreResult<Doc<Reason>> {
        let now = Utc::now();
        self.store
            .create(&Reason {
                order,
                text: text.to_string(),
                created_at: Some(now),
                updated_at: Some(now),
            })
            .await
    }

    pub async fn update_reason(&self, id: &str, order: i64, text: &str) -> CoreResult<()> {
        self.store
            .update(
                id,
                &Reason {
                    order,
                    text: text.to_string(),
                    created_at: None,
                    updated_at: Some(Utc::now()),
                },
            )
            .await
    }

    pub async fn delete_reason(&self, id: &str) -> CoreResult<()> {
        self.store.delete(store::REASONS, id).await
    }
}

/// Stable ascending sort by display rank; photos without a rank sort as 0,
/// keeping their upload order among themselves.
pub fn sort_gallery(photos: &mut [Doc<GalleryPhoto>]) {
    photos.sort_by_key(|doc| doc.data.order.unwrap_or(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, order: Option<i64>) -> Doc<GalleryPhoto> {
        Doc {
            id: id.to_string(),
            data: GalleryPhoto {
                url: String::new(),
                public_id: String::new(),
                caption: String::new(),
                uploaded_at: None,
                order,
            },
        }
    }

    #[test]
    fn test_sort_gallery_by_rank() {
        let mut photos = vec![photo("c", Some(3)), photo("a", Some(1)), photo("b", Some(2))];
        sort_gallery(&mut photos);
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_unranked_photos_sort_first_and_keep_order() {
        let mut photos = vec![photo("x", None), photo("r", Some(1)), photo("y", None)];
        sort_gallery(&mut photos);
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        // None ranks as 0, below 1; x and y keep their relative order
        assert_eq!(ids, ["x", "y", "r"]);
    }
}

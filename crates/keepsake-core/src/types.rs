//! Entity types for the four content collections.
//!
//! Every entity is independently addressable by its store-assigned id; there
//! are no cross-entity foreign keys. A deleted gallery photo leaves its
//! hosted image behind on the image host (no delete API is used there).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A store document: the store-assigned id plus the decoded entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Doc<T> {
    pub id: String,
    pub data: T,
}

/// One event on the public timeline, displayed date-ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One uploaded photo in the gallery.
///
/// `url` points at the image host's CDN; `public_id` is the host's opaque
/// identifier, kept only for reference (deletes are store-only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub url: String,
    pub public_id: String,
    pub caption: String,
    pub uploaded_at: Option<DateTime<Utc>>,
    /// Display rank for the public page; unset photos sort as 0.
    pub order: Option<i64>,
}

/// One flip-card reason, displayed order-ascending. `order` is a display
/// rank and is not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub order: i64,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Site-wide settings, stored as the singleton `settings/general` document.
///
/// All fields are optional: the document may not exist yet, and partial
/// writes only ever touch the fields they carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub start_date: Option<DateTime<Utc>>,
    pub launch_date: Option<DateTime<Utc>>,
    pub spotify_url: Option<String>,
    pub secret_letter: Option<String>,
}

/// A partial update to [`Settings`]. Fields left `None` keep their prior
/// stored value (merge semantics, not overwrite).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub start_date: Option<DateTime<Utc>>,
    pub launch_date: Option<DateTime<Utc>>,
    pub spotify_url: Option<String>,
    pub secret_letter: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.launch_date.is_none()
            && self.spotify_url.is_none()
            && self.secret_letter.is_none()
    }
}

/// Split the secret letter into display paragraphs on blank lines.
/// Windows line endings are tolerated; runs of blank lines collapse.
pub fn letter_paragraphs(letter: &str) -> Vec<String> {
    letter
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_paragraphs_split_on_blank_lines() {
        let letter = "Sevgilim,\n\nSeninle geçen her gün...\n\n\nSeni seviyorum.";
        assert_eq!(
            letter_paragraphs(letter),
            vec!["Sevgilim,", "Seninle geçen her gün...", "Seni seviyorum."]
        );
    }

    #[test]
    fn test_letter_paragraphs_empty_letter() {
        assert!(letter_paragraphs("").is_empty());
        assert!(letter_paragraphs("\n\n  \n\n").is_empty());
    }

    #[test]
    fn test_letter_paragraphs_crlf() {
        assert_eq!(letter_paragraphs("a\r\n\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_settings_default_is_all_absent() {
        let s = Settings::default();
        assert!(s.start_date.is_none());
        assert!(s.launch_date.is_none());
        assert!(s.spotify_url.is_none());
        assert!(s.secret_letter.is_none());
    }

    #[test]
    fn test_patch_emptiness() {
        assert!(SettingsPatch::default().is_empty());
        let patch = SettingsPatch {
            spotify_url: Some("https://open.spotify.com/track/x".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}

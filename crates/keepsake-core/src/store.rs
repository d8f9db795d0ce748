//! Document-store client.
//!
//! Thin REST client over the managed document database. Four collections are
//! used: `timeline`, `gallery`, `reasons` and `settings` (a singleton
//! `general` document). Values cross the wire in the store's typed-value
//! encoding (`stringValue` / `integerValue` / `timestampValue`); the
//! encode/decode half of this module is pure and unit-tested, the HTTP half
//! is a few awaited calls.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use tokio::sync::watch;

use crate::auth::Session;
use crate::config::RemoteConfig;
use crate::error::{CoreError, CoreResult};
use crate::types::{Doc, GalleryPhoto, Reason, Settings, SettingsPatch, TimelineEvent};

pub const TIMELINE: &str = "timeline";
pub const GALLERY: &str = "gallery";
pub const REASONS: &str = "reasons";
pub const SETTINGS: &str = "settings";
/// Id of the singleton settings document.
pub const SETTINGS_DOC: &str = "general";

/// Decoded `fields` map of a wire document.
pub type Fields = Map<String, Value>;

/// Sort direction for server-side ordered list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_wire(self) -> &'static str {
        match self {
            Direction::Ascending => "ASCENDING",
            Direction::Descending => "DESCENDING",
        }
    }
}

/// An entity that maps onto one store collection.
pub trait StoreRecord: Sized {
    const COLLECTION: &'static str;

    fn to_fields(&self) -> Fields;
    fn from_fields(fields: &Fields) -> CoreResult<Self>;
}

// === Typed-value encoding ===

pub fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

pub fn integer_value(i: i64) -> Value {
    // The wire format carries 64-bit integers as strings
    json!({ "integerValue": i.to_string() })
}

pub fn timestamp_value(t: DateTime<Utc>) -> Value {
    json!({ "timestampValue": t.to_rfc3339_opts(SecondsFormat::Millis, true) })
}

pub fn read_string(fields: &Fields, name: &str) -> Option<String> {
    fields
        .get(name)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

pub fn read_integer(fields: &Fields, name: &str) -> Option<i64> {
    let value = fields.get(name)?;
    if let Some(raw) = value.get("integerValue") {
        // Arrives as either a JSON string or a bare number
        return match raw {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        };
    }
    value.get("doubleValue")?.as_f64().map(|f| f as i64)
}

pub fn read_timestamp(fields: &Fields, name: &str) -> Option<DateTime<Utc>> {
    let raw = fields.get(name)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Extract the store-assigned id from a full document resource name.
pub fn doc_id(resource_name: &str) -> String {
    resource_name
        .rsplit('/')
        .next()
        .unwrap_or(resource_name)
        .to_string()
}

// === Record codecs ===

impl StoreRecord for TimelineEvent {
    const COLLECTION: &'static str = TIMELINE;

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("date".into(), timestamp_value(self.date));
        fields.insert("title".into(), string_value(&self.title));
        fields.insert("description".into(), string_value(&self.description));
        if let Some(t) = self.created_at {
            fields.insert("createdAt".into(), timestamp_value(t));
        }
        if let Some(t) = self.updated_at {
            fields.insert("updatedAt".into(), timestamp_value(t));
        }
        fields
    }

    fn from_fields(fields: &Fields) -> CoreResult<Self> {
        Ok(TimelineEvent {
            date: read_timestamp(fields, "date")
                .ok_or_else(|| CoreError::Decode("timeline event without date".into()))?,
            title: read_string(fields, "title").unwrap_or_default(),
            description: read_string(fields, "description").unwrap_or_default(),
            created_at: read_timestamp(fields, "createdAt"),
            updated_at: read_timestamp(fields, "updatedAt"),
        })
    }
}

impl StoreRecord for GalleryPhoto {
    const COLLECTION: &'static str = GALLERY;

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("url".into(), string_value(&self.url));
        fields.insert("publicId".into(), string_value(&self.public_id));
        fields.insert("caption".into(), string_value(&self.caption));
        if let Some(t) = self.uploaded_at {
            fields.insert("uploadedAt".into(), timestamp_value(t));
        }
        if let Some(order) = self.order {
            fields.insert("order".into(), integer_value(order));
        }
        fields
    }

    fn from_fields(fields: &Fields) -> CoreResult<Self> {
        Ok(GalleryPhoto {
            url: read_string(fields, "url").unwrap_or_default(),
            public_id: read_string(fields, "publicId").unwrap_or_default(),
            caption: read_string(fields, "caption").unwrap_or_default(),
            uploaded_at: read_timestamp(fields, "uploadedAt"),
            order: read_integer(fields, "order"),
        })
    }
}

impl StoreRecord for Reason {
    const COLLECTION: &'static str = REASONS;

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("order".into(), integer_value(self.order));
        fields.insert("text".into(), string_value(&self.text));
        if let Some(t) = self.created_at {
            fields.insert("createdAt".into(), timestamp_value(t));
        }
        if let Some(t) = self.updated_at {
            fields.insert("updatedAt".into(), timestamp_value(t));
        }
        fields
    }

    fn from_fields(fields: &Fields) -> CoreResult<Self> {
        Ok(Reason {
            order: read_integer(fields, "order").unwrap_or(0),
            text: read_string(fields, "text").unwrap_or_default(),
            created_at: read_timestamp(fields, "createdAt"),
            updated_at: read_timestamp(fields, "updatedAt"),
        })
    }
}

impl StoreRecord for Settings {
    const COLLECTION: &'static str = SETTINGS;

    fn to_fields(&self) -> Fields {
        settings_patch_fields(&SettingsPatch {
            start_date: self.start_date,
            launch_date: self.launch_date,
            spotify_url: self.spotify_url.clone(),
            secret_letter: self.secret_letter.clone(),
        })
    }

    fn from_fields(fields: &Fields) -> CoreResult<Self> {
        Ok(Settings {
            start_date: read_timestamp(fields, "startDate"),
            launch_date: read_timestamp(fields, "launchDate"),
            spotify_url: read_string(fields, "spotifyUrl"),
            secret_letter: read_string(fields, "secretLetter"),
        })
    }
}

/// Encode only the fields a patch carries; the returned map doubles as the
/// update mask for a merge write.
pub fn settings_patch_fields(patch: &SettingsPatch) -> Fields {
    let mut fields = Fields::new();
    if let Some(t) = patch.start_date {
        fields.insert("startDate".into(), timestamp_value(t));
    }
    if let Some(t) = patch.launch_date {
        fields.insert("launchDate".into(), timestamp_value(t));
    }
    if let Some(url) = &patch.spotify_url {
        fields.insert("spotifyUrl".into(), string_value(url));
    }
    if let Some(letter) = &patch.secret_letter {
        fields.insert("secretLetter".into(), string_value(letter));
    }
    fields
}

// === HTTP client ===

pub struct StoreClient {
    http: reqwest::Client,
    base: String,
    api_key: String,
    session: watch::Receiver<Option<Session>>,
}

impl StoreClient {
    pub(crate) fn new(
        http: reqwest::Client,
        config: &RemoteConfig,
        session: watch::Receiver<Option<Session>>,
    ) -> Self {
        StoreClient {
            http,
            base: config.store_base(),
            api_key: config.api_key.clone(),
            session,
        }
    }

    fn doc_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base, collection, id)
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base, collection)
    }

    /// Attach the API key and, when signed in, the session bearer token.
    fn prepare(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.query(&[("key", self.api_key.as_str())]);
        match self.session.borrow().as_ref() {
            Some(session) => builder.bearer_auth(&session.id_token),
            None => builder,
        }
    }

    async fn check(response: reqwest::Response) -> CoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(CoreError::RemoteStatus {
            status: status.as_u16(),
            body,
        })
    }

    /// List a collection, optionally sorted server-side.
    ///
    /// Documents that fail to decode are skipped with a warning rather than
    /// failing the whole view.
    pub async fn list<T: StoreRecord>(
        &self,
        order_by: Option<(&str, Direction)>,
    ) -> CoreResult<Vec<Doc<T>>> {
        let mut query = json!({ "from": [{ "collectionId": T::COLLECTION }] });
        if let Some((field, direction)) = order_by {
            query["orderBy"] = json!([{
                "field": { "fieldPath": field },
                "direction": direction.as_wire(),
            }]);
        }

        let response = self
            .prepare(self.http.post(format!("{}:runQuery", self.base)))
            .json(&json!({ "structuredQuery": query }))
            .send()
            .await?;
        let results: Vec<Value> = Self::check(response).await?.json().await?;

        let mut docs = Vec::new();
        for result in &results {
            // Result rows without a document carry only a read time
            let Some(document) = result.get("document") else {
                continue;
            };
            match decode_document::<T>(document) {
                Ok(doc) => docs.push(doc),
                Err(e) => {
                    tracing::warn!(collection = T::COLLECTION, "skipping bad document: {}", e)
                }
            }
        }
        Ok(docs)
    }

    /// Fetch one document by id; `Ok(None)` when it does not exist.
    pub async fn get<T: StoreRecord>(&self, id: &str) -> CoreResult<Option<Doc<T>>> {
        let response = self
            .prepare(self.http.get(self.doc_url(T::COLLECTION, id)))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: Value = Self::check(response).await?.json().await?;
        decode_document(&document).map(Some)
    }

    /// Create a document with a store-assigned id.
    pub async fn create<T: StoreRecord>(&self, record: &T) -> CoreResult<Doc<T>> {
        let response = self
            .prepare(self.http.post(self.collection_url(T::COLLECTION)))
            .json(&json!({ "fields": record.to_fields() }))
            .send()
            .await?;
        let document: Value = Self::check(response).await?.json().await?;
        decode_document(&document)
    }

    /// Replace the listed fields of an existing document.
    pub async fn update<T: StoreRecord>(&self, id: &str, record: &T) -> CoreResult<()> {
        self.merge(T::COLLECTION, id, record.to_fields()).await
    }

    /// Field-masked partial write: only the fields present in `fields` are
    /// touched, everything else keeps its stored value. Creates the document
    /// when it does not exist yet (needed for the settings singleton).
    pub async fn merge(&self, collection: &str, id: &str, fields: Fields) -> CoreResult<()> {
        let mask: Vec<(&str, String)> = fields
            .keys()
            .map(|k| ("updateMask.fieldPaths", k.clone()))
            .collect();
        let response = self
            .prepare(self.http.patch(self.doc_url(collection, id)).query(&mask))
            .json(&json!({ "fields": fields }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Delete a document. The hosted image behind a gallery record is left
    /// in place; only the store record goes away.
    pub async fn delete(&self, collection: &str, id: &str) -> CoreResult<()> {
        let response = self
            .prepare(self.http.delete(self.doc_url(collection, id)))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

fn decode_document<T: StoreRecord>(document: &Value) -> CoreResult<Doc<T>> {
    let name = document
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::Decode("document without resource name".into()))?;
    let empty = Fields::new();
    let fields = document
        .get("fields")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    Ok(Doc {
        id: doc_id(name),
        data: T::from_fields(fields)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_timeline_event_roundtrip() {
        let event = TimelineEvent {
            date: ts("2023-06-15T00:00:00Z"),
            title: "İlk buluşma".to_string(),
            description: "Kadıköy'de kahve".to_string(),
            created_at: Some(ts("2024-01-01T10:00:00Z")),
            updated_at: None,
        };
        let decoded = TimelineEvent::from_fields(&event.to_fields()).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_timeline_event_requires_date() {
        let mut fields = Fields::new();
        fields.insert("title".into(), string_value("no date"));
        assert!(TimelineEvent::from_fields(&fields).is_err());
    }

    #[test]
    fn test_reason_defaults_when_fields_absent() {
        let reason = Reason::from_fields(&Fields::new()).unwrap();
        assert_eq!(reason.order, 0);
        assert_eq!(reason.text, "");
    }

    #[test]
    fn test_integer_value_is_stringly_typed() {
        let mut fields = Fields::new();
        fields.insert("order".into(), integer_value(42));
        assert_eq!(fields["order"]["integerValue"], json!("42"));
        assert_eq!(read_integer(&fields, "order"), Some(42));
    }

    #[test]
    fn test_read_integer_accepts_bare_number() {
        let mut fields = Fields::new();
        fields.insert("order".into(), json!({ "integerValue": 7 }));
        assert_eq!(read_integer(&fields, "order"), Some(7));
    }

    #[test]
    fn test_read_integer_accepts_double() {
        let mut fields = Fields::new();
        fields.insert("order".into(), json!({ "doubleValue": 3.0 }));
        assert_eq!(read_integer(&fields, "order"), Some(3));
    }

    #[test]
    fn test_settings_decode_of_partial_document() {
        let mut fields = Fields::new();
        fields.insert("spotifyUrl".into(), string_value("https://open.spotify.com/track/x"));
        let settings = Settings::from_fields(&fields).unwrap();
        assert!(settings.start_date.is_none());
        assert!(settings.launch_date.is_none());
        assert_eq!(
            settings.spotify_url.as_deref(),
            Some("https://open.spotify.com/track/x")
        );
    }

    #[test]
    fn test_settings_patch_encodes_only_present_fields() {
        let patch = SettingsPatch {
            secret_letter: Some("Sevgilim...".to_string()),
            ..Default::default()
        };
        let fields = settings_patch_fields(&patch);
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("secretLetter"));
    }

    #[test]
    fn test_doc_id_takes_last_segment() {
        let name = "projects/p/databases/(default)/documents/timeline/abc123";
        assert_eq!(doc_id(name), "abc123");
    }

    #[test]
    fn test_decode_document_without_fields_uses_defaults() {
        let document = json!({
            "name": "projects/p/databases/(default)/documents/settings/general"
        });
        let doc: Doc<Settings> = decode_document(&document).unwrap();
        assert_eq!(doc.id, "general");
        assert_eq!(doc.data, Settings::default());
    }

    #[test]
    fn test_gallery_photo_roundtrip_with_order() {
        let photo = GalleryPhoto {
            url: "https://res.example.com/img/1.jpg".to_string(),
            public_id: "keepsake/1".to_string(),
            caption: "deniz kenarı".to_string(),
            uploaded_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            order: Some(3),
        };
        let decoded = GalleryPhoto::from_fields(&photo.to_fields()).unwrap();
        assert_eq!(decoded, photo);
    }
}

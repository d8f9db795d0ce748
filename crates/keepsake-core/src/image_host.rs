//! Image-host client.
//!
//! Unsigned multipart uploads to the external image CDN. Only upload is
//! used: deleting a gallery record leaves its hosted image behind (removing
//! it would need a signed server-side call, which is out of scope by
//! design).

use serde::Deserialize;

use crate::config::RemoteConfig;
use crate::error::{CoreError, CoreResult};

/// Free-plan upload ceiling.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Uploaded {
    #[serde(rename = "secure_url")]
    pub url: String,
    pub public_id: String,
}

pub struct ImageHostClient {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl ImageHostClient {
    pub(crate) fn new(http: reqwest::Client, config: &RemoteConfig) -> Self {
        ImageHostClient {
            http,
            upload_url: config.upload_url(),
            upload_preset: config.upload_preset.clone(),
        }
    }

    /// Upload one image. Callers validate with [`validate_image`] first so a
    /// bad file in a batch fails before any network traffic and does not
    /// abort its siblings.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> CoreResult<Uploaded> {
        validate_image(file_name, &bytes)?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part("file", part);

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(file = file_name, %status, %body, "image upload rejected");
            return Err(CoreError::Upload(format!("{} yüklenirken hata oluştu", file_name)));
        }

        let uploaded: Uploaded = response.json().await?;
        tracing::info!(file = file_name, public_id = %uploaded.public_id, "image uploaded");
        Ok(uploaded)
    }
}

/// Client-side checks mirroring the host's own limits: the payload must
/// look like an image and stay under [`MAX_UPLOAD_BYTES`].
pub fn validate_image(file_name: &str, bytes: &[u8]) -> CoreResult<()> {
    if !is_image(bytes) {
        return Err(CoreError::Validation(format!(
            "{} bir resim dosyası değil",
            file_name
        )));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "{} 10MB'dan büyük",
            file_name
        )));
    }
    Ok(())
}

/// Magic-byte sniff for the formats the gallery accepts.
fn is_image(bytes: &[u8]) -> bool {
    bytes.starts_with(b"\x89PNG\r\n\x1a\n")
        || bytes.starts_with(b"\xff\xd8\xff")
        || bytes.starts_with(b"GIF87a")
        || bytes.starts_with(b"GIF89a")
        || (bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_and_jpeg_sniff() {
        assert!(is_image(b"\x89PNG\r\n\x1a\n rest"));
        assert!(is_image(b"\xff\xd8\xff\xe0 jfif"));
    }

    #[test]
    fn test_webp_needs_riff_and_tag() {
        assert!(is_image(b"RIFF\x00\x00\x00\x00WEBPVP8 "));
        assert!(!is_image(b"RIFF\x00\x00\x00\x00WAVEfmt "));
    }

    #[test]
    fn test_non_image_rejected_with_message() {
        let err = validate_image("notes.txt", b"hello").unwrap_err();
        assert_eq!(err.user_message(), "notes.txt bir resim dosyası değil");
    }

    #[test]
    fn test_oversized_image_rejected() {
        let mut big = b"\x89PNG\r\n\x1a\n".to_vec();
        big.resize(MAX_UPLOAD_BYTES + 1, 0);
        let err = validate_image("huge.png", &big).unwrap_err();
        assert_eq!(err.user_message(), "huge.png 10MB'dan büyük");
    }

    #[test]
    fn test_exactly_at_limit_is_fine() {
        let mut img = b"\x89PNG\r\n\x1a\n".to_vec();
        img.resize(MAX_UPLOAD_BYTES, 0);
        assert!(validate_image("limit.png", &img).is_ok());
    }
}

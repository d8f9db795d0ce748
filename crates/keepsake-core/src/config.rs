//! Remote-service configuration.
//!
//! Keepsake persists nothing locally: the document store, auth provider and
//! image host are external managed services, addressed with the credentials
//! loaded here. Config comes from a JSON file, with environment variables
//! taking precedence for each field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Credentials and identifiers for the external services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Document-store project id (collection URLs are derived from it)
    pub project_id: String,
    /// API key sent with store and auth requests
    pub api_key: String,
    /// Image-host account name
    pub cloud_name: String,
    /// Unsigned upload preset for the image host
    pub upload_preset: String,
}

impl RemoteConfig {
    /// Load config from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config: RemoteConfig = serde_json::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("invalid config file: {}", e)))?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Build config from environment variables alone.
    pub fn from_env() -> CoreResult<Self> {
        let mut config = RemoteConfig {
            project_id: String::new(),
            api_key: String::new(),
            cloud_name: String::new(),
            upload_preset: String::new(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("KEEPSAKE_PROJECT_ID") {
            self.project_id = v;
        }
        if let Ok(v) = std::env::var("KEEPSAKE_API_KEY") {
            self.api_key = v;
        }
        if let Ok(v) = std::env::var("KEEPSAKE_CLOUD_NAME") {
            self.cloud_name = v;
        }
        if let Ok(v) = std::env::var("KEEPSAKE_UPLOAD_PRESET") {
            self.upload_preset = v;
        }
    }

    fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("project_id", &self.project_id),
            ("api_key", &self.api_key),
            ("cloud_name", &self.cloud_name),
            ("upload_preset", &self.upload_preset),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Config(format!("missing field: {}", name)));
            }
        }
        Ok(())
    }

    /// Base URL for document paths in the store REST API.
    pub fn store_base(&self) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    /// Upload endpoint on the image host.
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"{
            "project_id": "keepsake-demo",
            "api_key": "key-123",
            "cloud_name": "demo-cloud",
            "upload_preset": "unsigned-preset"
        }"#
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let config = RemoteConfig::load(file.path()).unwrap();
        assert_eq!(config.project_id, "keepsake-demo");
        assert!(config.store_base().contains("keepsake-demo"));
        assert!(config.upload_url().contains("demo-cloud"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = RemoteConfig::load(Path::new("/nonexistent/keepsake.json")).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"project_id":"p","api_key":"","cloud_name":"c","upload_preset":"u"}"#)
            .unwrap();

        let err = RemoteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}

//! Error types for Keepsake

use thiserror::Error;

/// Main error type for Keepsake operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Auth provider rejected the request with a provider error code
    #[error("Auth error: {code}")]
    Auth { code: String },

    /// HTTP transport failure talking to a remote service
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("Remote service returned {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    /// Client-side form validation failed before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Image upload failed
    #[error("Upload error: {0}")]
    Upload(String),

    /// Wire document could not be decoded into an entity
    #[error("Decode error: {0}")]
    Decode(String),

    /// Requested document does not exist in the store
    #[error("Document not found: {0}")]
    MissingDocument(String),

    /// Remote-service configuration is missing or malformed
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// User-facing (Turkish) message for this error.
    ///
    /// Auth codes get the provider-specific mapping; everything else gets a
    /// generic line so raw transport errors never reach the screen.
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Auth { code } => crate::auth::auth_error_message(code).to_string(),
            CoreError::Validation(msg) | CoreError::Upload(msg) => msg.clone(),
            _ => "Bir hata oluştu. Lütfen tekrar deneyin.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::MissingDocument("settings/general".to_string());
        assert_eq!(format!("{}", err), "Document not found: settings/general");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = CoreError::Validation("Lütfen bir tarih seçin".to_string());
        assert_eq!(err.user_message(), "Lütfen bir tarih seçin");
    }

    #[test]
    fn test_unknown_error_gets_generic_message() {
        let err = CoreError::Decode("bad field".to_string());
        assert_eq!(err.user_message(), "Bir hata oluştu. Lütfen tekrar deneyin.");
    }
}

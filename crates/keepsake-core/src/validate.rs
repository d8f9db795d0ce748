//! Client-side form validation.
//!
//! Every check here runs before a network call and blocks submission with an
//! inline, user-facing message on failure.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::embed::is_valid_spotify_url;
use crate::error::{CoreError, CoreResult};

/// Require a non-blank text field.
pub fn require(label: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("Lütfen {} girin", label)));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date input into a UTC instant at midnight.
pub fn parse_form_date(value: &str) -> CoreResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::Validation("Lütfen bir tarih seçin".to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CoreError::Validation("Lütfen bir tarih seçin".to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Timeline form: date and title are required, description may be empty.
pub fn validate_timeline_form(date: &str, title: &str) -> CoreResult<DateTime<Utc>> {
    require("bir başlık", title)?;
    parse_form_date(date)
}

/// Reasons form: text required, order must parse as a positive number.
pub fn validate_reason_form(order: &str, text: &str) -> CoreResult<i64> {
    require("bir sebep", text)?;
    order
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| CoreError::Validation("Geçerli bir sıra numarası girin".to_string()))
}

/// Music-settings form: pattern check before the write.
pub fn validate_music_url(url: &str) -> CoreResult<()> {
    if url.trim().is_empty() {
        return Err(CoreError::Validation(
            "Lütfen bir Spotify linki girin".to_string(),
        ));
    }
    if !is_valid_spotify_url(url) {
        return Err(CoreError::Validation(
            "Geçersiz Spotify linki. Örnek: https://open.spotify.com/track/...".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("bir başlık", "").is_err());
        assert!(require("bir başlık", "   ").is_err());
        assert!(require("bir başlık", "İlk buluşma").is_ok());
    }

    #[test]
    fn test_parse_form_date() {
        let parsed = parse_form_date("2023-06-15").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2023-06-15T00:00:00+00:00");
        assert!(parse_form_date("").is_err());
        assert!(parse_form_date("15.06.2023").is_err());
    }

    #[test]
    fn test_timeline_form_needs_both_fields() {
        assert!(validate_timeline_form("2023-06-15", "başlık").is_ok());
        assert!(validate_timeline_form("", "başlık").is_err());
        assert!(validate_timeline_form("2023-06-15", " ").is_err());
    }

    #[test]
    fn test_reason_form_order_bounds() {
        assert_eq!(validate_reason_form("3", "çünkü").unwrap(), 3);
        assert!(validate_reason_form("0", "çünkü").is_err());
        assert!(validate_reason_form("abc", "çünkü").is_err());
        assert!(validate_reason_form("3", "").is_err());
    }

    #[test]
    fn test_music_url_messages() {
        let empty = validate_music_url(" ").unwrap_err();
        assert_eq!(empty.user_message(), "Lütfen bir Spotify linki girin");

        let bad = validate_music_url("https://youtube.com/x").unwrap_err();
        assert!(bad.user_message().starts_with("Geçersiz Spotify linki"));

        assert!(validate_music_url("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh").is_ok());
    }
}

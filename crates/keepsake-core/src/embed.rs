//! Music-embed URL rewriting.
//!
//! A shared track, album or playlist link is rewritten into the embeddable
//! player URL. Links the rewriter does not recognise render the placeholder
//! state instead of an iframe; nothing here fails the page.

use url::Url;

/// Link kinds the player can embed.
const EMBED_KINDS: [&str; 3] = ["track", "album", "playlist"];

/// Rewrite a Spotify share URL into the embed-player URL.
///
/// Accepted shapes (an optional `intl-xx/` prefix is skipped):
///
/// - `https://open.spotify.com/track/<id>`
/// - `https://open.spotify.com/intl-tr/track/<id>`
/// - `.../album/<id>` and `.../playlist/<id>`
///
/// Returns `None` for anything else, including malformed URLs.
pub fn spotify_embed_url(raw: &str) -> Option<String> {
    let (kind, id) = parse_spotify_url(raw)?;
    Some(format!(
        "https://open.spotify.com/embed/{}/{}?utm_source=generator&theme=0",
        kind, id
    ))
}

/// Whether the admin form should accept this URL.
pub fn is_valid_spotify_url(raw: &str) -> bool {
    parse_spotify_url(raw).is_some()
}

fn parse_spotify_url(raw: &str) -> Option<(String, String)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Shared links sometimes arrive without a scheme
    let parsed = Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{}", trimmed)))
        .ok()?;

    let host = parsed.host_str()?;
    if host != "spotify.com" && !host.ends_with(".spotify.com") {
        return None;
    }

    let mut segments = parsed.path_segments()?.filter(|s| !s.is_empty());
    let mut segment = segments.next()?;
    if is_intl_prefix(segment) {
        segment = segments.next()?;
    }
    if !EMBED_KINDS.contains(&segment) {
        return None;
    }
    let kind = segment.to_string();

    // The id is the leading alphanumeric run; share links may append junk
    let id: String = segments
        .next()?
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if id.is_empty() {
        return None;
    }
    Some((kind, id))
}

/// `intl-tr`, `intl-de`, ... — two lowercase letters after the dash.
fn is_intl_prefix(segment: &str) -> bool {
    match segment.strip_prefix("intl-") {
        Some(lang) => lang.len() == 2 && lang.chars().all(|c| c.is_ascii_lowercase()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_url_converts() {
        assert_eq!(
            spotify_embed_url("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh").as_deref(),
            Some("https://open.spotify.com/embed/track/4iV5W9uYEdYUVa79Axb7Rh?utm_source=generator&theme=0")
        );
    }

    #[test]
    fn test_intl_prefix_is_skipped() {
        assert_eq!(
            spotify_embed_url("https://open.spotify.com/intl-tr/track/3mKROVyu4lbpYoSfJYCJvQ").as_deref(),
            Some("https://open.spotify.com/embed/track/3mKROVyu4lbpYoSfJYCJvQ?utm_source=generator&theme=0")
        );
    }

    #[test]
    fn test_album_and_playlist() {
        assert_eq!(
            spotify_embed_url("https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3").as_deref(),
            Some("https://open.spotify.com/embed/album/1DFixLWuPkv3KT3TnV35m3?utm_source=generator&theme=0")
        );
        assert_eq!(
            spotify_embed_url("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").as_deref(),
            Some("https://open.spotify.com/embed/playlist/37i9dQZF1DXcBWIGoYBM5M?utm_source=generator&theme=0")
        );
    }

    #[test]
    fn test_share_query_string_is_dropped() {
        assert_eq!(
            spotify_embed_url("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh?si=abc123").as_deref(),
            Some("https://open.spotify.com/embed/track/4iV5W9uYEdYUVa79Axb7Rh?utm_source=generator&theme=0")
        );
    }

    #[test]
    fn test_schemeless_link_is_accepted() {
        assert!(is_valid_spotify_url("open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh"));
    }

    #[test]
    fn test_unrelated_urls_yield_none() {
        assert_eq!(spotify_embed_url("https://www.youtube.com/watch?v=abc"), None);
        assert_eq!(spotify_embed_url("https://open.spotify.com/artist/xyz"), None);
        assert_eq!(spotify_embed_url("https://open.spotify.com/track/"), None);
        assert_eq!(spotify_embed_url("not a url at all \u{1f3b5}"), None);
        assert_eq!(spotify_embed_url(""), None);
    }

    #[test]
    fn test_malformed_intl_prefix_rejected() {
        assert!(!is_valid_spotify_url("https://open.spotify.com/intl-tur/track/abc"));
        assert!(!is_valid_spotify_url("https://open.spotify.com/intl-/track/abc"));
    }
}

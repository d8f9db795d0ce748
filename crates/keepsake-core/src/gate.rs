//! Launch gate.
//!
//! On startup the public page sits in `Loading` while the settings document
//! is fetched, then lands in `Open` (show the site) or `Gated` (full-screen
//! countdown). An authenticated session always bypasses the gate, which is
//! how the admin previews the site early. When a running countdown reaches
//! zero the page re-enters `Loading` and evaluates again; there is no
//! transition out of `Open`.
//!
//! Failure policy: a settings fetch error opens the gate. The site must
//! never stay locked because a remote call failed.

use chrono::{DateTime, Utc};

/// Gate states. `Loading` exists only between startup (or countdown expiry)
/// and the settings fetch completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Gated,
    Open,
}

/// Decide the post-fetch state from the configured launch instant, the
/// current wall clock and whether an admin session exists.
pub fn evaluate(
    launch: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    signed_in: bool,
) -> GateState {
    match launch {
        Some(launch) if now < launch => {
            if signed_in {
                GateState::Open
            } else {
                GateState::Gated
            }
        }
        // Absent or already past
        _ => GateState::Open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_absent_launch_opens_regardless_of_auth() {
        let now = ts("2026-02-14T00:00:00Z");
        assert_eq!(evaluate(None, now, false), GateState::Open);
        assert_eq!(evaluate(None, now, true), GateState::Open);
    }

    #[test]
    fn test_past_launch_opens_regardless_of_auth() {
        let launch = ts("2026-02-14T00:00:00Z");
        let now = ts("2026-02-15T00:00:00Z");
        assert_eq!(evaluate(Some(launch), now, false), GateState::Open);
        assert_eq!(evaluate(Some(launch), now, true), GateState::Open);
    }

    #[test]
    fn test_launch_instant_itself_is_open() {
        let launch = ts("2026-02-14T00:00:00Z");
        assert_eq!(evaluate(Some(launch), launch, false), GateState::Open);
    }

    #[test]
    fn test_future_launch_without_session_is_gated() {
        let launch = ts("2026-02-14T00:00:00Z");
        let now = ts("2026-02-13T23:59:59Z");
        assert_eq!(evaluate(Some(launch), now, false), GateState::Gated);
    }

    #[test]
    fn test_session_bypasses_future_launch() {
        let launch = ts("2026-02-14T00:00:00Z");
        let now = ts("2026-01-01T00:00:00Z");
        assert_eq!(evaluate(Some(launch), now, true), GateState::Open);
    }
}

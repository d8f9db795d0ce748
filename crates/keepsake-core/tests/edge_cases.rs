//! Edge case and boundary condition tests
//!
//! Cross-module scenarios: the gate/countdown cycle and the long-press
//! reveal driven with a simulated clock.

use chrono::{DateTime, Duration, Utc};

use keepsake_core::countdown::TimeParts;
use keepsake_core::gate::{evaluate, GateState};
use keepsake_core::hold::{HoldGauge, HoldSample, HOLD_SAMPLE_MS, HOLD_THRESHOLD_MS};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

// ============================================================================
// Gate + countdown cycle
// ============================================================================

/// Drive a gated page through the full countdown: the displayed breakdown
/// strictly decreases, and the re-evaluation at zero lands in `Open`.
#[test]
fn test_gated_countdown_reaches_open() {
    let launch = ts("2026-02-14T00:00:00Z");
    let mut now = ts("2026-02-13T23:58:00Z");

    assert_eq!(evaluate(Some(launch), now, false), GateState::Gated);

    let mut previous = i64::MAX;
    loop {
        match TimeParts::until(now, launch) {
            Some(parts) => {
                assert!(parts.total_seconds() < previous);
                previous = parts.total_seconds();
                now += Duration::seconds(1);
            }
            // Countdown hit zero: the page re-enters Loading and evaluates
            // again, which must now open
            None => break,
        }
    }
    assert_eq!(evaluate(Some(launch), now, false), GateState::Open);
}

/// An admin session sees the open site while visitors still get the gate.
#[test]
fn test_admin_preview_bypasses_gate() {
    let launch = ts("2026-02-14T00:00:00Z");
    let now = ts("2026-02-01T12:00:00Z");

    assert_eq!(evaluate(Some(launch), now, false), GateState::Gated);
    assert_eq!(evaluate(Some(launch), now, true), GateState::Open);
}

/// Countdown display at one second before launch is all zeros except the
/// seconds digit.
#[test]
fn test_final_second_breakdown() {
    let launch = ts("2026-02-14T00:00:00Z");
    let now = launch - Duration::seconds(1);
    let parts = TimeParts::until(now, launch).unwrap();
    assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (0, 0, 0, 1));
}

// ============================================================================
// Long-press reveal
// ============================================================================

/// Simulate the 16 ms sampler the UI runs: a full hold triggers exactly
/// once, and the trigger lands within one sample of the threshold.
#[test]
fn test_sampled_hold_triggers_once_near_threshold() {
    let start = ts("2026-02-14T20:00:00Z");
    let mut gauge = HoldGauge::new();
    gauge.press(start);

    let mut now = start;
    let mut triggered_at = None;
    for _ in 0..300 {
        now += Duration::milliseconds(HOLD_SAMPLE_MS as i64);
        match gauge.sample(now) {
            HoldSample::Triggered => {
                assert!(triggered_at.is_none(), "second trigger");
                triggered_at = Some(now);
            }
            HoldSample::Holding(p) => assert!(p < 100.0),
            HoldSample::Idle => {}
        }
    }

    let triggered_at = triggered_at.expect("hold never triggered");
    let elapsed = triggered_at.signed_duration_since(start).num_milliseconds();
    assert!(elapsed >= HOLD_THRESHOLD_MS);
    assert!(elapsed < HOLD_THRESHOLD_MS + HOLD_SAMPLE_MS as i64);
}

/// Release-and-repress cycles never accumulate: three 2-second holds in a
/// row reveal nothing.
#[test]
fn test_interrupted_holds_do_not_accumulate() {
    let mut now = ts("2026-02-14T20:00:00Z");
    let mut gauge = HoldGauge::new();

    for _ in 0..3 {
        gauge.press(now);
        now += Duration::seconds(2);
        assert!(matches!(gauge.sample(now), HoldSample::Holding(_)));
        gauge.release();
        assert_eq!(gauge.sample(now), HoldSample::Idle);
        now += Duration::seconds(1);
    }
}

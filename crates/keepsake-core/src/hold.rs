//! Long-press gauge for the secret-letter reveal.
//!
//! A press-and-hold gesture accumulates held time toward a 3-second
//! threshold. The UI samples the gauge every ~16 ms to animate a progress
//! bar; releasing early resets to zero with no effect, and crossing the
//! threshold fires exactly once per contact even when mouse and touch
//! events overlap.

use chrono::{DateTime, Utc};

/// Hold duration required to reveal the letter.
pub const HOLD_THRESHOLD_MS: i64 = 3000;

/// Suggested sampling interval for the progress animation.
pub const HOLD_SAMPLE_MS: u64 = 16;

/// Result of one gauge sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldSample {
    /// No press in progress.
    Idle,
    /// Press in progress; progress in percent, clamped to [0, 100].
    Holding(f64),
    /// Threshold just crossed. Returned once; the gauge goes idle after.
    Triggered,
}

/// State of the press-and-hold gesture.
#[derive(Debug, Clone, Default)]
pub struct HoldGauge {
    started: Option<DateTime<Utc>>,
}

impl HoldGauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or restart) a hold. A second press while one is active simply
    /// restarts the clock; there is never more than one run in flight.
    pub fn press(&mut self, now: DateTime<Utc>) {
        self.started = Some(now);
    }

    /// End the hold before the threshold. Progress resets to zero and no
    /// reveal happens.
    pub fn release(&mut self) {
        self.started = None;
    }

    pub fn is_holding(&self) -> bool {
        self.started.is_some()
    }

    /// Progress in percent for display, clamped to [0, 100].
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        match self.started {
            Some(started) => {
                let elapsed = now.signed_duration_since(started).num_milliseconds();
                (elapsed as f64 / HOLD_THRESHOLD_MS as f64 * 100.0).clamp(0.0, 100.0)
            }
            None => 0.0,
        }
    }

    /// Sample the gauge. Crossing the threshold yields `Triggered` exactly
    /// once and stops the run, so a continuing physical press cannot
    /// re-trigger.
    pub fn sample(&mut self, now: DateTime<Utc>) -> HoldSample {
        let Some(started) = self.started else {
            return HoldSample::Idle;
        };
        let elapsed = now.signed_duration_since(started).num_milliseconds();
        if elapsed >= HOLD_THRESHOLD_MS {
            self.started = None;
            HoldSample::Triggered
        } else {
            HoldSample::Holding(self.progress(now))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-02-14T20:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_release_at_2999ms_never_triggers() {
        let mut gauge = HoldGauge::new();
        gauge.press(t0());

        let just_before = t0() + Duration::milliseconds(HOLD_THRESHOLD_MS - 1);
        match gauge.sample(just_before) {
            HoldSample::Holding(p) => assert!(p < 100.0),
            other => panic!("expected Holding, got {:?}", other),
        }

        gauge.release();
        assert_eq!(gauge.progress(just_before), 0.0);
        assert_eq!(gauge.sample(just_before), HoldSample::Idle);
    }

    #[test]
    fn test_threshold_triggers_exactly_once() {
        let mut gauge = HoldGauge::new();
        gauge.press(t0());

        let at = t0() + Duration::milliseconds(HOLD_THRESHOLD_MS);
        assert_eq!(gauge.sample(at), HoldSample::Triggered);

        // The physical press continues; further samples stay idle
        let later = at + Duration::milliseconds(500);
        assert_eq!(gauge.sample(later), HoldSample::Idle);
    }

    #[test]
    fn test_jittered_double_press_triggers_once() {
        let mut gauge = HoldGauge::new();
        // touchstart, then the synthetic mousedown 5 ms later
        gauge.press(t0());
        gauge.press(t0() + Duration::milliseconds(5));

        let mut triggers = 0;
        let mut now = t0();
        for _ in 0..400 {
            now += Duration::milliseconds(HOLD_SAMPLE_MS as i64);
            if gauge.sample(now) == HoldSample::Triggered {
                triggers += 1;
            }
        }
        assert_eq!(triggers, 1);
    }

    #[test]
    fn test_progress_is_clamped_and_monotone_while_holding() {
        let mut gauge = HoldGauge::new();
        gauge.press(t0());

        let mut previous = -1.0;
        for ms in (0..HOLD_THRESHOLD_MS).step_by(100) {
            let p = gauge.progress(t0() + Duration::milliseconds(ms));
            assert!((0.0..=100.0).contains(&p));
            assert!(p >= previous);
            previous = p;
        }
        // Way past the threshold the display value still caps at 100
        assert_eq!(gauge.progress(t0() + Duration::milliseconds(60_000)), 100.0);
    }

    #[test]
    fn test_repress_after_release_starts_fresh() {
        let mut gauge = HoldGauge::new();
        gauge.press(t0());
        gauge.release();

        let restart = t0() + Duration::seconds(10);
        gauge.press(restart);
        let p = gauge.progress(restart + Duration::milliseconds(1500));
        assert!((p - 50.0).abs() < 1.0);
    }
}

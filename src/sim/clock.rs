//! Frame clock
//!
//! Turns animation-frame timestamps into a dimensionless scale factor so the
//! simulation advances at the same rate on 60 Hz and 144 Hz displays.

use crate::config::GameConfig;

/// How much simulation a frame is worth
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Advance by this many reference frames
    Advance(f32),
    /// Gap too large (tab was hidden); run no simulation this frame
    Skip,
}

/// A sampled frame: sanitized wall time plus the simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Last valid timestamp in ms (used for real-time deadlines)
    pub now_ms: f64,
    pub step: Step,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    reference_ms: f64,
    max_gap_ms: f64,
}

impl FrameClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            last_ms: None,
            reference_ms: config.reference_frame_ms,
            max_gap_ms: config.max_frame_gap_ms,
        }
    }

    /// Sample the clock for a frame callback timestamp
    pub fn sample(&mut self, timestamp_ms: f64) -> Frame {
        if !timestamp_ms.is_finite() {
            // Keep the old baseline; a bad sample must not poison physics
            return Frame {
                now_ms: self.last_ms.unwrap_or(0.0),
                step: Step::Advance(1.0),
            };
        }

        let Some(last) = self.last_ms.replace(timestamp_ms) else {
            return Frame {
                now_ms: timestamp_ms,
                step: Step::Advance(1.0),
            };
        };

        let elapsed = timestamp_ms - last;
        let step = if elapsed > self.max_gap_ms {
            log::debug!("Frame gap of {:.0} ms, skipping simulation", elapsed);
            Step::Skip
        } else if elapsed < 0.0 {
            log::debug!("Clock went backwards by {:.1} ms, rebasing", -elapsed);
            Step::Skip
        } else {
            Step::Advance((elapsed / self.reference_ms) as f32)
        };

        Frame {
            now_ms: timestamp_ms,
            step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> FrameClock {
        FrameClock::new(&GameConfig::default())
    }

    #[test]
    fn test_first_frame_defaults_to_one() {
        let mut clock = clock();
        let frame = clock.sample(1234.0);
        assert_eq!(frame.step, Step::Advance(1.0));
        assert_eq!(frame.now_ms, 1234.0);
    }

    #[test]
    fn test_scale_proportional_to_elapsed() {
        let mut clock = clock();
        clock.sample(0.0);
        let Step::Advance(scale) = clock.sample(1000.0 / 60.0).step else {
            panic!("expected advance");
        };
        assert!((scale - 1.0).abs() < 0.0001);

        let Step::Advance(scale) = clock.sample(1000.0 / 60.0 + 1000.0 / 30.0).step else {
            panic!("expected advance");
        };
        assert!((scale - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_large_gap_skips_then_rebases() {
        let mut clock = clock();
        clock.sample(100.0);
        assert_eq!(clock.sample(5100.0).step, Step::Skip);

        // Next frame measures from the skipped frame, not from before the gap
        let Step::Advance(scale) = clock.sample(5100.0 + 1000.0 / 60.0).step else {
            panic!("expected advance");
        };
        assert!((scale - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_nan_timestamp_never_propagates() {
        let mut clock = clock();
        let frame = clock.sample(f64::NAN);
        assert_eq!(frame.step, Step::Advance(1.0));
        assert_eq!(frame.now_ms, 0.0);

        clock.sample(500.0);
        let frame = clock.sample(f64::NAN);
        assert_eq!(frame.step, Step::Advance(1.0));
        assert_eq!(frame.now_ms, 500.0);
    }
}

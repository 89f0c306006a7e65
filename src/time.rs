//! Fixed-cadence scheduling using an accumulator pattern.
//!
//! The host calls `tick()` from whatever timer it owns (a page interval,
//! an animation frame, a test loop) with the current wall clock. The
//! scheduler turns variable deltas into a whole number of evaluations plus
//! a slower refresh flag, so the advisor never reasons about timing itself.

use crate::config::{self, AdvisorConfig};
use crate::error::AdvisorResult;

/// What the host should run after one `tick()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cadence {
    /// Advisor evaluations due now.
    pub evaluations: u32,
    /// Whether the slower refresh (panel redraw, store rescan) is due.
    pub refresh: bool,
}

pub trait Scheduler {
    /// Feed the current timestamp (ms). Returns the work due.
    fn tick(&mut self, now_ms: f64) -> Cadence;
}

pub struct FixedCadence {
    /// Milliseconds per evaluation (e.g. 200ms).
    tick_ms: f64,
    /// Milliseconds per refresh (e.g. 2000ms).
    refresh_ms: f64,
    /// Largest delta credited in one call.
    max_catch_up_ms: f64,
    tick_acc: f64,
    refresh_acc: f64,
    /// Timestamp of the last call, None before the first.
    last_timestamp: Option<f64>,
    immediate: bool,
    /// Total evaluations handed out since creation.
    pub total_evaluations: u64,
}

impl FixedCadence {
    /// All three intervals must be finite and positive; a zero tick would
    /// hand out an unbounded number of evaluations.
    pub fn new(tick_ms: f64, refresh_ms: f64, max_catch_up_ms: f64) -> AdvisorResult<Self> {
        for (field, value) in [
            ("tick_interval_ms", tick_ms),
            ("refresh_interval_ms", refresh_ms),
            ("max_catch_up_ms", max_catch_up_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(config::invalid(field, &format!("must be positive, got {value}")));
            }
        }
        Ok(Self {
            tick_ms,
            refresh_ms,
            max_catch_up_ms,
            tick_acc: 0.0,
            refresh_acc: 0.0,
            last_timestamp: None,
            immediate: false,
            total_evaluations: 0,
        })
    }

    /// Validates `config` first, since its fields are public and may have
    /// been set without going through `AdvisorConfig::from_json`.
    pub fn from_config(config: &AdvisorConfig) -> AdvisorResult<Self> {
        config.validate()?;
        Self::new(
            config.tick_interval_ms as f64,
            config.refresh_interval_ms as f64,
            config.max_catch_up_ms as f64,
        )
    }

    /// Make the next `tick()` run at least one evaluation (state changed).
    pub fn request_immediate(&mut self) {
        self.immediate = true;
    }
}

impl Scheduler for FixedCadence {
    fn tick(&mut self, now_ms: f64) -> Cadence {
        let delta = match self.last_timestamp {
            // Clamp so a backgrounded tab doesn't return with a burst.
            Some(prev) => (now_ms - prev).clamp(0.0, self.max_catch_up_ms),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.tick_acc += delta;
        let mut evaluations = (self.tick_acc / self.tick_ms) as u32;
        self.tick_acc -= evaluations as f64 * self.tick_ms;

        if self.immediate && evaluations == 0 {
            evaluations = 1;
        }
        self.immediate = false;

        self.refresh_acc += delta;
        let refresh = self.refresh_acc >= self.refresh_ms;
        if refresh {
            self.refresh_acc %= self.refresh_ms;
        }

        self.total_evaluations += evaluations as u64;
        Cadence {
            evaluations,
            refresh,
        }
    }
}

// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elapsed-time sources.
//!
//! The frame updater asks a [`ClockSource`] for seconds since start once per
//! tick. Two implementations live here:
//!
//! - [`ElapsedClock`] reads a host `now()` function and measures from the
//!   instant it was created.
//! - [`ManualClock`] is advanced explicitly by the host (simulations,
//!   offline capture, tests).
//!
//! Neither clock can be paused or reset.

use core::fmt;

use crate::time::{HostTime, Timebase};

/// Supplies elapsed seconds since the clock started.
///
/// Implementations must return `0.0` at creation and never decrease.
pub trait ClockSource {
    /// Seconds elapsed since the clock started.
    fn elapsed_seconds(&self) -> f64;
}

/// A clock measuring from its creation instant using a host time function.
///
/// The host supplies `now` (e.g. `orrery_backend_web::now`) and the matching
/// [`Timebase`]. If the host ever reports a time before the start instant,
/// elapsed time saturates at zero.
#[derive(Clone, Copy)]
pub struct ElapsedClock {
    now: fn() -> HostTime,
    timebase: Timebase,
    start: HostTime,
    running: bool,
}

impl ElapsedClock {
    /// Starts a clock at the current host time.
    #[must_use]
    pub fn new(now: fn() -> HostTime, timebase: Timebase) -> Self {
        Self {
            now,
            timebase,
            start: now(),
            running: true,
        }
    }

    /// Returns the host time the clock started at.
    #[must_use]
    pub const fn start(&self) -> HostTime {
        self.start
    }

    /// Returns the timebase used for conversion to seconds.
    #[must_use]
    pub const fn timebase(&self) -> Timebase {
        self.timebase
    }

    /// Returns `true` once the clock has started. There is no way to stop it.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds elapsed between the start instant and `at`.
    #[must_use]
    pub fn elapsed_at(&self, at: HostTime) -> f64 {
        if !self.running {
            return 0.0;
        }
        at.saturating_duration_since(self.start)
            .to_secs_f64(self.timebase)
    }
}

impl ClockSource for ElapsedClock {
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed_at((self.now)())
    }
}

impl fmt::Debug for ElapsedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElapsedClock")
            .field("timebase", &self.timebase)
            .field("start", &self.start)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

/// A clock advanced explicitly by its owner.
///
/// Attempts to move backwards are ignored, so the reported time stays
/// non-decreasing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualClock {
    elapsed: f64,
}

impl ManualClock {
    /// Creates a clock at `0.0` seconds.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Moves the clock to `seconds` if that is later than the current time.
    pub fn advance_to(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds > self.elapsed {
            self.elapsed = seconds;
        }
    }

    /// Moves the clock forward by `delta` seconds.
    ///
    /// Negative and non-finite deltas are ignored.
    pub fn advance_by(&mut self, delta: f64) {
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }
    }
}

impl ClockSource for ManualClock {
    fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_seconds_in() -> HostTime {
        HostTime(5_000_000)
    }

    fn one_microsecond_in() -> HostTime {
        HostTime(1_000)
    }

    #[test]
    fn elapsed_clock_measures_from_creation() {
        let clock = ElapsedClock::new(five_seconds_in, Timebase::MICROS);
        assert!(clock.is_running());
        assert_eq!(clock.start(), HostTime(5_000_000));
        assert_eq!(clock.elapsed_seconds(), 0.0);

        let secs = clock.elapsed_at(HostTime(7_500_000));
        assert!((secs - 2.5).abs() < 1e-12, "expected 2.5s, got {secs}");
    }

    #[test]
    fn elapsed_clock_saturates_before_start() {
        let clock = ElapsedClock::new(one_microsecond_in, Timebase::NANOS);
        assert_eq!(clock.elapsed_at(HostTime(10)), 0.0);
    }

    #[test]
    fn manual_clock_starts_at_zero() {
        assert_eq!(ManualClock::new().elapsed_seconds(), 0.0);
    }

    #[test]
    fn manual_clock_never_moves_backwards() {
        let mut clock = ManualClock::new();
        clock.advance_to(2.0);
        clock.advance_to(1.0);
        assert_eq!(clock.elapsed_seconds(), 2.0);

        clock.advance_by(-0.5);
        clock.advance_by(f64::NAN);
        clock.advance_to(f64::INFINITY);
        assert_eq!(clock.elapsed_seconds(), 2.0);

        clock.advance_by(0.25);
        assert_eq!(clock.elapsed_seconds(), 2.25);
    }
}

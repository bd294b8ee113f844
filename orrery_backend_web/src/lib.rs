// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for orrery.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` frame source
//! - [`PerformanceClock`]: elapsed time from `performance.now()`
//! - [`DomMarkerPresenter`]: one DOM element per marker

#![no_std]

extern crate alloc;

mod presenter;
mod raf;

pub use orrery_core::backend::Presenter;
pub use presenter::{DEFAULT_PIXELS_PER_UNIT, DomMarkerPresenter};
pub use raf::RafLoop;

use orrery_core::clock::{ClockSource, ElapsedClock};
use orrery_core::time::{HostTime, Timebase};

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    ms_to_host_time(raf::performance_now())
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
///
/// `Timebase { numer: 1000, denom: 1 }` means `nanoseconds = ticks × 1000`.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

/// Converts a `DOMHighResTimeStamp` (milliseconds) to microsecond ticks.
///
/// Negative and NaN inputs map to zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "performance.now() returns small positive f64; µs fits in u64"
)]
pub(crate) fn ms_to_host_time(ms: f64) -> HostTime {
    HostTime((ms * 1000.0) as u64)
}

/// Elapsed-time clock over `performance.now()`.
///
/// Starts measuring when constructed.
#[derive(Clone, Copy, Debug)]
pub struct PerformanceClock(ElapsedClock);

impl PerformanceClock {
    /// Creates a clock that starts now.
    #[must_use]
    pub fn new() -> Self {
        Self(ElapsedClock::new(now, timebase()))
    }

    /// The underlying clock.
    #[must_use]
    pub fn inner(&self) -> &ElapsedClock {
        &self.0
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for PerformanceClock {
    fn elapsed_seconds(&self) -> f64 {
        self.0.elapsed_seconds()
    }
}

// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Orrery splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Frame source**: Calls the host's frame callback once per display
//!   refresh (e.g. `requestAnimationFrame`). This is backend-specific and not
//!   abstracted by a trait because setup and lifecycle differ across
//!   platforms.
//!
//! - **Time**: `now() -> HostTime` and `timebase() -> Timebase` free
//!   functions that read the platform's monotonic clock, suitable for an
//!   [`ElapsedClock`](crate::clock::ElapsedClock).
//!
//! - **Presenter**: Implements the [`Presenter`] trait to hand marker
//!   positions to a renderer (GPU lights, DOM elements, a log).
//!
//! # Crate boundaries
//!
//! `orrery_core` owns the marker model, the updater, and this contract
//! module. Backend crates depend on `orrery_core` and provide platform glue.
//! Application code depends on both and wires them together in a frame loop.

use crate::marker::OrbitingMarker;

/// Hands the current marker state to a renderer.
///
/// Implemented by real renderers and by test doubles, so frame loops can be
/// written once.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_frame(now: HostTime) {
///     anchor.animate(clock.elapsed_seconds());
///
///     // Update: recompute markers if the anchor is loaded
///     updater.tick(&SceneState { clock: &clock, anchor: &anchor });
///
///     // Present: draw lights at their new positions
///     presenter.apply(updater.markers());
/// }
/// ```
pub trait Presenter {
    /// Applies the given markers to the presentation. Called once per frame,
    /// including frames where no marker moved.
    fn apply(&mut self, markers: &[OrbitingMarker]);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::clock::ManualClock;
    use crate::point::Point3;
    use crate::rig::OrbitConfig;
    use crate::updater::{FrameUpdater, SceneState};

    #[derive(Default)]
    struct Capture {
        frames: Vec<Vec<Point3>>,
    }

    impl Presenter for Capture {
        fn apply(&mut self, markers: &[OrbitingMarker]) {
            self.frames
                .push(markers.iter().map(OrbitingMarker::position).collect());
        }
    }

    #[test]
    fn presenter_sees_every_frame() {
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        let mut presenter = Capture::default();
        let mut clock = ManualClock::new();
        let mut anchor: Option<Point3> = None;

        for i in 1..=4 {
            if i == 3 {
                anchor = Some(Point3::ORIGIN);
            }
            clock.advance_to(f64::from(i));
            updater.tick(&SceneState {
                clock: &clock,
                anchor: &anchor,
            });
            presenter.apply(updater.markers());
        }

        assert_eq!(presenter.frames.len(), 4);
        assert_eq!(presenter.frames[0], presenter.frames[1]);
        assert_ne!(presenter.frames[1], presenter.frames[2]);
        assert_ne!(presenter.frames[2], presenter.frames[3]);
    }
}

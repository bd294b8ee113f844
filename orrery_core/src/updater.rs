// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame marker recomputation.
//!
//! [`FrameUpdater`] owns the markers and is the only writer of their
//! positions. Each [`tick`](FrameUpdater::tick) reads the clock once, reads
//! the anchor once, and then either recomputes every marker or leaves all of
//! them alone. Positions are a pure function of elapsed time and the anchor,
//! so a tick never accumulates state from the previous one.
//!
//! ```text
//!   host frame callback
//!          │
//!          ▼
//!   SceneState { clock, anchor } ──tick──▶ FrameUpdater
//!                                              │
//!                         anchor present? ─no─▶ skip (markers unchanged)
//!                                              │ yes
//!                                              ▼
//!                          MotionRule::evaluate for each marker
//! ```

use alloc::vec::Vec;

use crate::anchor::AnchorSource;
use crate::clock::ClockSource;
use crate::marker::{MarkerId, OrbitingMarker};
use crate::point::Point3;
use crate::rig::{self, OrbitConfig};
use crate::trace::{AnchorPendingEvent, TickEvent, Tracer};

/// Everything a tick reads from the outside world.
#[derive(Clone, Copy)]
pub struct SceneState<'a> {
    /// Elapsed-time source.
    pub clock: &'a dyn ClockSource,
    /// Current anchor position, if loaded.
    pub anchor: &'a dyn AnchorSource,
}

impl core::fmt::Debug for SceneState<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneState")
            .field("elapsed", &self.clock.elapsed_seconds())
            .field("anchor", &self.anchor.anchor_position())
            .finish()
    }
}

/// What the most recent tick observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRecord {
    /// Ticks before this one.
    pub frame_index: u64,
    /// Elapsed seconds read from the clock.
    pub elapsed: f64,
    /// Anchor position read for the tick, `None` if the tick was skipped.
    pub anchor: Option<Point3>,
}

/// Owns the markers and recomputes them once per frame.
#[derive(Clone, Debug)]
pub struct FrameUpdater {
    markers: Vec<OrbitingMarker>,
    frame_count: u64,
    last: Option<FrameRecord>,
}

impl FrameUpdater {
    /// Creates an updater over an arbitrary set of markers.
    #[must_use]
    pub fn new(markers: Vec<OrbitingMarker>) -> Self {
        Self {
            markers,
            frame_count: 0,
            last: None,
        }
    }

    /// Creates an updater over the six-light rig built from `config`.
    #[must_use]
    pub fn standard(config: &OrbitConfig) -> Self {
        Self::new(rig::standard_markers(config))
    }

    /// Runs one frame.
    ///
    /// Markers are recomputed only when the anchor is available; otherwise
    /// every marker keeps its previous position. The frame counter advances
    /// either way.
    pub fn tick(&mut self, state: &SceneState<'_>) {
        self.tick_traced(state, &mut Tracer::none());
    }

    /// Like [`tick`](Self::tick), reporting what happened to `tracer`.
    pub fn tick_traced(&mut self, state: &SceneState<'_>, tracer: &mut Tracer<'_>) {
        let elapsed = state.clock.elapsed_seconds();
        let anchor = state.anchor.anchor_position();
        let record = FrameRecord {
            frame_index: self.frame_count,
            elapsed,
            anchor,
        };
        self.frame_count += 1;
        self.last = Some(record);

        tracer.tick(&TickEvent::from(&record));

        let Some(anchor) = anchor else {
            tracer.anchor_pending(&AnchorPendingEvent {
                frame_index: record.frame_index,
                elapsed,
            });
            return;
        };

        for marker in &mut self.markers {
            marker.update(elapsed, anchor);
            #[cfg(feature = "trace-rich")]
            tracer.marker_moved(&crate::trace::MarkerMovedEvent {
                frame_index: record.frame_index,
                marker: marker.id(),
                position: marker.position(),
            });
        }
    }

    /// Recomputes every marker for an explicit time and anchor, without
    /// touching the frame counter.
    ///
    /// Returns `false` and leaves the markers unchanged when `anchor` is
    /// `None`.
    pub fn update_at(&mut self, elapsed: f64, anchor: Option<Point3>) -> bool {
        let Some(anchor) = anchor else {
            return false;
        };
        for marker in &mut self.markers {
            marker.update(elapsed, anchor);
        }
        true
    }

    /// All markers, in construction order.
    #[must_use]
    pub fn markers(&self) -> &[OrbitingMarker] {
        &self.markers
    }

    /// Looks up a marker by id.
    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&OrbitingMarker> {
        self.markers.iter().find(|m| m.id() == id)
    }

    /// Current position of a marker, if it exists.
    #[must_use]
    pub fn position(&self, id: MarkerId) -> Option<Point3> {
        self.marker(id).map(OrbitingMarker::position)
    }

    /// Number of ticks run so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Elapsed seconds seen by the most recent tick.
    #[must_use]
    pub fn last_elapsed(&self) -> Option<f64> {
        self.last.map(|r| r.elapsed)
    }

    /// What the most recent tick observed.
    #[must_use]
    pub const fn last_frame(&self) -> Option<FrameRecord> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, TAU};

    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::*;
    use crate::clock::ManualClock;
    use crate::marker::{LightParams, MarkerKind, MotionRule};
    use crate::point::AxisPair;
    use crate::rig::{DIRECTIONAL_B, POINT_A, POINT_B, POINT_C, POINT_D};

    const EPS: f64 = 1e-9;

    fn close(a: Point3, b: Point3) -> bool {
        (a - b).length() < EPS
    }

    fn tick_at(updater: &mut FrameUpdater, elapsed: f64, anchor: Option<Point3>) {
        let mut clock = ManualClock::new();
        clock.advance_to(elapsed);
        updater.tick(&SceneState {
            clock: &clock,
            anchor: &anchor,
        });
    }

    #[test]
    fn missing_anchor_leaves_everything_in_place() {
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        let before: Vec<Point3> = updater.markers().iter().map(|m| m.position()).collect();

        for i in 0..10 {
            tick_at(&mut updater, f64::from(i) * 0.25, None);
        }

        let after: Vec<Point3> = updater.markers().iter().map(|m| m.position()).collect();
        assert_eq!(before, after);
        assert_eq!(updater.frame_count(), 10);
        assert_eq!(updater.last_frame().unwrap().anchor, None);
    }

    #[test]
    fn first_anchored_frame_at_zero() {
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        tick_at(&mut updater, 0.0, Some(Point3::ORIGIN));

        let a = updater.position(POINT_A).unwrap();
        assert!(close(a, Point3::new(3.0, 0.0, 0.0)), "{a:?}");

        // ZY: z = R cos(0), y = R sin(0); x keeps its starting value.
        let b = updater.position(DIRECTIONAL_B).unwrap();
        assert!(close(b, Point3::new(0.0, 0.0, 3.0)), "{b:?}");
    }

    #[test]
    fn point_b_returns_after_full_turn() {
        let anchor = Point3::new(1.0, -4.0, 7.0);
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        tick_at(&mut updater, TAU, Some(anchor));

        // -2 * 0.5 * 2π = -2π.
        let b = updater.position(POINT_B).unwrap();
        assert!((b.x - (anchor.x + 3.0)).abs() < EPS);
        assert!((b.z - anchor.z).abs() < EPS);
    }

    #[test]
    fn radius_divisors_apply() {
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        tick_at(&mut updater, 0.0, Some(Point3::ORIGIN));

        assert!((updater.position(POINT_C).unwrap().x - 6.0).abs() < EPS);
        assert!((updater.position(POINT_D).unwrap().y - 2.0).abs() < EPS);
    }

    #[test]
    fn untouched_axis_keeps_initial_value() {
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        let anchor = Point3::new(10.0, 20.0, 30.0);
        for i in 0..50 {
            tick_at(&mut updater, f64::from(i) * 0.37, Some(anchor));
        }
        // XZ markers keep y; YZ and ZY markers keep x. None of them follow
        // the anchor on that axis.
        assert_eq!(updater.position(POINT_A).unwrap().y, 0.0);
        assert_eq!(updater.position(POINT_B).unwrap().y, 0.0);
        assert_eq!(updater.position(POINT_C).unwrap().y, 0.0);
        assert_eq!(updater.position(POINT_D).unwrap().x, 0.0);
        assert_eq!(updater.position(DIRECTIONAL_B).unwrap().x, 0.0);
    }

    #[test]
    fn same_inputs_same_outputs() {
        let anchor = Some(Point3::new(0.5, 1.5, -2.0));
        let mut once = FrameUpdater::standard(&OrbitConfig::STANDARD);
        tick_at(&mut once, 3.3, anchor);

        let mut twice = FrameUpdater::standard(&OrbitConfig::STANDARD);
        tick_at(&mut twice, 3.3, anchor);
        tick_at(&mut twice, 3.3, anchor);

        assert_eq!(once.markers(), twice.markers());
    }

    #[test]
    fn no_drift_over_many_ticks() {
        let anchor = Some(Point3::new(-1.0, 2.0, 3.0));
        let mut stepped = FrameUpdater::standard(&OrbitConfig::STANDARD);
        let mut clock = ManualClock::new();
        for i in 1..=1000 {
            clock.advance_to(f64::from(i) / 60.0);
            stepped.tick(&SceneState {
                clock: &clock,
                anchor: &anchor,
            });
        }

        let mut direct = FrameUpdater::standard(&OrbitConfig::STANDARD);
        tick_at(&mut direct, 1000.0 / 60.0, anchor);

        for (s, d) in stepped.markers().iter().zip(direct.markers()) {
            assert!(close(s.position(), d.position()), "{} drifted", s.name());
        }
    }

    #[test]
    fn variable_intervals_match_direct_evaluation() {
        let anchor = Some(Point3::ORIGIN);
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        let mut clock = ManualClock::new();
        for dt in [0.016, 0.050, 0.001, 0.200, 0.033, 1.5] {
            clock.advance_by(dt);
            updater.tick(&SceneState {
                clock: &clock,
                anchor: &anchor,
            });
        }

        let t = clock.elapsed_seconds();
        assert_eq!(updater.last_elapsed(), Some(t));
        let expected = Point3::new(3.0 * (0.5 * t).cos(), 0.0, 3.0 * (0.5 * t).sin());
        assert!(close(updater.position(POINT_A).unwrap(), expected));
    }

    #[test]
    fn anchor_appearing_later_starts_motion() {
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        tick_at(&mut updater, 1.0, None);
        tick_at(&mut updater, 2.0, None);
        assert_eq!(
            updater.position(POINT_A).unwrap(),
            Point3::new(2.0, 0.0, 2.0)
        );

        tick_at(&mut updater, PI, Some(Point3::ORIGIN));
        let a = updater.position(POINT_A).unwrap();
        assert!(close(a, Point3::new(0.0, 0.0, 3.0)), "{a:?}");
        assert_eq!(updater.frame_count(), 3);
    }

    #[test]
    fn markers_are_independent() {
        // Changing one marker's radius must not move any other marker.
        let build = |radius_a: f64| {
            FrameUpdater::new(alloc::vec![
                OrbitingMarker::new(
                    MarkerId(0),
                    "a",
                    MarkerKind::Point,
                    LightParams::default(),
                    MotionRule::new(AxisPair::XZ, radius_a, 0.5),
                    Point3::ORIGIN,
                ),
                OrbitingMarker::new(
                    MarkerId(1),
                    "b",
                    MarkerKind::Point,
                    LightParams::default(),
                    MotionRule::new(AxisPair::YZ, 3.0, 0.5).with_angle_coefficient(-2.0),
                    Point3::ORIGIN,
                ),
            ])
        };

        let mut small = build(1.0);
        let mut large = build(9.0);
        tick_at(&mut small, 1.7, Some(Point3::ORIGIN));
        tick_at(&mut large, 1.7, Some(Point3::ORIGIN));

        assert_ne!(small.position(MarkerId(0)), large.position(MarkerId(0)));
        assert_eq!(small.position(MarkerId(1)), large.position(MarkerId(1)));
    }

    #[test]
    fn update_at_is_gated_and_leaves_counter() {
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        assert!(!updater.update_at(1.0, None));
        assert_eq!(
            updater.position(POINT_A).unwrap(),
            Point3::new(2.0, 0.0, 2.0)
        );

        assert!(updater.update_at(0.0, Some(Point3::ORIGIN)));
        assert!(close(
            updater.position(POINT_A).unwrap(),
            Point3::new(3.0, 0.0, 0.0)
        ));
        assert_eq!(updater.frame_count(), 0);
        assert_eq!(updater.last_frame(), None);
    }

    #[test]
    fn unknown_id_is_none() {
        let updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        assert!(updater.marker(MarkerId(99)).is_none());
        assert!(updater.position(MarkerId(99)).is_none());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn traced_tick_reports_pending_and_ticks() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Counts {
            ticks: u32,
            pending: u32,
        }
        impl TraceSink for Counts {
            fn on_tick(&mut self, _: &TickEvent) {
                self.ticks += 1;
            }
            fn on_anchor_pending(&mut self, _: &AnchorPendingEvent) {
                self.pending += 1;
            }
        }

        let mut sink = Counts::default();
        let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
        let clock = ManualClock::new();
        let missing: Option<Point3> = None;
        let present = Some(Point3::ORIGIN);
        {
            let mut tracer = Tracer::new(&mut sink);
            updater.tick_traced(
                &SceneState {
                    clock: &clock,
                    anchor: &missing,
                },
                &mut tracer,
            );
            updater.tick_traced(
                &SceneState {
                    clock: &clock,
                    anchor: &present,
                },
                &mut tracer,
            );
        }
        assert_eq!(sink.ticks, 2);
        assert_eq!(sink.pending, 1);
    }
}

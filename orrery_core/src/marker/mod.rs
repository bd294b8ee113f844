// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbiting light markers.
//!
//! A *marker* stands in for a light source in the host scene. Each one has:
//!
//! - An identity ([`MarkerId`]) and a display name.
//! - A [`MarkerKind`] and [`LightParams`] the renderer uses when building its
//!   light objects.
//! - A fixed [`MotionRule`], set at construction.
//! - A position, the only thing that changes at runtime. It is written by
//!   [`FrameUpdater`](crate::updater::FrameUpdater) and nothing else.

mod id;
mod motion;

pub use id::MarkerId;
pub use motion::MotionRule;

use crate::color::Color;
use crate::point::Point3;
use crate::transform::Transform3d;

/// What kind of light a marker represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Omnidirectional light at the marker position.
    Point,
    /// Parallel light shining from the marker position toward the anchor.
    Directional,
}

/// Light appearance, passed through to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightParams {
    /// Light color.
    pub color: Color,
    /// Light intensity multiplier.
    pub intensity: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 1.0,
        }
    }
}

/// A light marker orbiting the anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitingMarker {
    id: MarkerId,
    name: &'static str,
    kind: MarkerKind,
    light: LightParams,
    rule: MotionRule,
    position: Point3,
}

impl OrbitingMarker {
    /// Creates a marker at its static starting position.
    ///
    /// The marker stays at `initial_position` until the first frame with an
    /// anchor.
    #[must_use]
    pub const fn new(
        id: MarkerId,
        name: &'static str,
        kind: MarkerKind,
        light: LightParams,
        rule: MotionRule,
        initial_position: Point3,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            light,
            rule,
            position: initial_position,
        }
    }

    /// Returns the marker's identity.
    #[must_use]
    pub const fn id(&self) -> MarkerId {
        self.id
    }

    /// Returns the display name (e.g. `"pointA"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the light kind.
    #[must_use]
    pub const fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Returns the light appearance.
    #[must_use]
    pub const fn light(&self) -> LightParams {
        self.light
    }

    /// Returns the motion rule.
    #[must_use]
    pub const fn rule(&self) -> &MotionRule {
        &self.rule
    }

    /// Returns the current position.
    #[must_use]
    pub const fn position(&self) -> Point3 {
        self.position
    }

    /// Returns the current position as a world transform.
    #[must_use]
    pub const fn transform(&self) -> Transform3d {
        Transform3d::from_translation(self.position)
    }

    /// Unit vector from the marker toward `target`, or `None` when the two
    /// coincide.
    ///
    /// Directional markers shine along this vector with the anchor as target.
    #[must_use]
    pub fn direction_to(&self, target: Point3) -> Option<Point3> {
        (target - self.position).normalized()
    }

    /// Recomputes the position for `elapsed` seconds around `anchor`.
    pub(crate) fn update(&mut self, elapsed: f64, anchor: Point3) {
        self.position = self.rule.evaluate(elapsed, anchor, self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::AxisPair;

    fn sample() -> OrbitingMarker {
        OrbitingMarker::new(
            MarkerId(3),
            "sample",
            MarkerKind::Directional,
            LightParams::default(),
            MotionRule::new(AxisPair::XZ, 3.0, 0.5),
            Point3::new(0.0, 5.0, 0.0),
        )
    }

    #[test]
    fn holds_initial_position_until_updated() {
        let mut m = sample();
        assert_eq!(m.position(), Point3::new(0.0, 5.0, 0.0));

        m.update(0.0, Point3::ORIGIN);
        assert_eq!(m.position(), Point3::new(3.0, 5.0, 0.0));
        assert_eq!(m.transform().translation(), m.position());
    }

    #[test]
    fn direction_points_at_target() {
        let m = sample();
        let dir = m.direction_to(Point3::ORIGIN).unwrap();
        assert_eq!(dir, Point3::new(0.0, -1.0, 0.0));
        assert_eq!(m.direction_to(m.position()), None);
    }
}

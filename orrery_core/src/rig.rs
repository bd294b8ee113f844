// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The standard six-light rig.
//!
//! Four point lights and two directional lights orbit the anchor on
//! deliberately unrelated paths:
//!
//! | Marker         | Axes  | Angle   | Radius  |
//! |----------------|-------|---------|---------|
//! | `pointA`       | x, z  | `+ωt`   | R       |
//! | `pointB`       | x, z  | `-2ωt`  | R       |
//! | `pointC`       | x, z  | `+2ωt`  | R / 0.5 |
//! | `pointD`       | y, z  | `-2ωt`  | R / 1.5 |
//! | `directionalA` | z, y  | `-2ωt`  | R       |
//! | `directionalB` | z, y  | `+ωt`   | R       |
//!
//! The coefficients and divisors were tuned by eye and do not follow a
//! common law, so they are spelled out per marker rather than derived.

use alloc::vec::Vec;

use crate::color::Color;
use crate::marker::{LightParams, MarkerId, MarkerKind, MotionRule, OrbitingMarker};
use crate::point::{AxisPair, Point3};

/// Shared orbit parameters for the rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Base orbit radius `R`, in world units.
    pub radius: f64,
    /// Base angular speed `ω`, in radians per second.
    pub angular_speed: f64,
}

impl OrbitConfig {
    /// `R = 3.0`, `ω = 0.5`.
    pub const STANDARD: Self = Self {
        radius: 3.0,
        angular_speed: 0.5,
    };
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// `pointA`.
pub const POINT_A: MarkerId = MarkerId(0);
/// `pointB`.
pub const POINT_B: MarkerId = MarkerId(1);
/// `pointC`.
pub const POINT_C: MarkerId = MarkerId(2);
/// `pointD`.
pub const POINT_D: MarkerId = MarkerId(3);
/// `directionalA`.
pub const DIRECTIONAL_A: MarkerId = MarkerId(4);
/// `directionalB`.
pub const DIRECTIONAL_B: MarkerId = MarkerId(5);

/// Number of markers in the standard rig.
pub const MARKER_COUNT: usize = 6;

/// Builds the six standard markers for `config`.
///
/// Before the anchor is available each marker sits at a fixed starting
/// position around the origin. Each starting position is zero on the axis its
/// orbit leaves untouched, so with the anchor at the origin the markers move
/// in planes through it.
#[must_use]
pub fn standard_markers(config: &OrbitConfig) -> Vec<OrbitingMarker> {
    let r = config.radius;
    let w = config.angular_speed;

    let point = |id: MarkerId, name: &'static str, rgb: u32, rule: MotionRule, at: Point3| {
        OrbitingMarker::new(
            id,
            name,
            MarkerKind::Point,
            LightParams {
                color: Color::from_u32(rgb),
                intensity: 1.0,
            },
            rule,
            at,
        )
    };
    let directional = |id: MarkerId, name: &'static str, rgb: u32, rule: MotionRule, at: Point3| {
        OrbitingMarker::new(
            id,
            name,
            MarkerKind::Directional,
            LightParams {
                color: Color::from_u32(rgb),
                intensity: 0.8,
            },
            rule,
            at,
        )
    };

    let mut markers = Vec::with_capacity(MARKER_COUNT);
    markers.push(point(
        POINT_A,
        "pointA",
        0xff_4040,
        MotionRule::new(AxisPair::XZ, r, w),
        Point3::new(2.0, 0.0, 2.0),
    ));
    markers.push(point(
        POINT_B,
        "pointB",
        0x40_ff40,
        MotionRule::new(AxisPair::XZ, r, w).with_angle_coefficient(-2.0),
        Point3::new(-2.0, 0.0, 2.0),
    ));
    markers.push(point(
        POINT_C,
        "pointC",
        0x40_40ff,
        MotionRule::new(AxisPair::XZ, r, w)
            .with_angle_coefficient(2.0)
            .with_radius_divisor(0.5),
        Point3::new(2.0, 0.0, -2.0),
    ));
    markers.push(point(
        POINT_D,
        "pointD",
        0xff_ff40,
        MotionRule::new(AxisPair::YZ, r, w)
            .with_angle_coefficient(-2.0)
            .with_radius_divisor(1.5),
        Point3::new(0.0, -2.0, 2.0),
    ));
    markers.push(directional(
        DIRECTIONAL_A,
        "directionalA",
        0xff_ffff,
        MotionRule::new(AxisPair::ZY, r, w).with_angle_coefficient(-2.0),
        Point3::new(0.0, 5.0, 5.0),
    ));
    markers.push(directional(
        DIRECTIONAL_B,
        "directionalB",
        0xff_d0a0,
        MotionRule::new(AxisPair::ZY, r, w),
        Point3::new(0.0, -5.0, 5.0),
    ));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        let markers = standard_markers(&OrbitConfig::STANDARD);
        assert_eq!(markers.len(), MARKER_COUNT);
        for (i, m) in markers.iter().enumerate() {
            assert_eq!(m.id().get() as usize, i, "marker {} out of order", m.name());
        }
    }

    #[test]
    fn kinds_split_four_and_two() {
        let markers = standard_markers(&OrbitConfig::STANDARD);
        let points = markers
            .iter()
            .filter(|m| m.kind() == MarkerKind::Point)
            .count();
        assert_eq!(points, 4);
        assert_eq!(markers[4].kind(), MarkerKind::Directional);
        assert_eq!(markers[5].kind(), MarkerKind::Directional);
    }

    #[test]
    fn literal_coefficients() {
        let markers = standard_markers(&OrbitConfig::STANDARD);
        let coeffs: Vec<f64> = markers.iter().map(|m| m.rule().angle_coefficient).collect();
        assert_eq!(coeffs, [1.0, -2.0, 2.0, -2.0, -2.0, 1.0]);

        assert_eq!(markers[2].rule().effective_radius(), 6.0);
        assert_eq!(markers[3].rule().effective_radius(), 2.0);
        assert_eq!(markers[0].rule().effective_radius(), 3.0);
        assert_eq!(markers[3].rule().axes, AxisPair::YZ);
        assert_eq!(markers[4].rule().axes, AxisPair::ZY);
    }

    #[test]
    fn untouched_axis_starts_at_zero() {
        for m in standard_markers(&OrbitConfig::STANDARD) {
            let axis = m.rule().axes.untouched();
            assert_eq!(m.position().get(axis), 0.0, "{} starts off-plane", m.name());
        }
    }
}

// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form orbit rules.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::point::{AxisPair, Point3};

/// Parametric orbit of one marker around the anchor.
///
/// At elapsed time `t` the orbit angle is
/// `angle_coefficient * angular_speed * t` and the effective radius is
/// `radius / radius_divisor` (or `radius` without a divisor). The rule writes
///
/// ```text
/// first  = anchor.first  + radius' * cos(angle)
/// second = anchor.second + radius' * sin(angle)
/// ```
///
/// and leaves the third axis as it was. The result depends only on `t`, the
/// anchor and that third coordinate, never on earlier frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionRule {
    /// Which axes receive the cosine and sine terms.
    pub axes: AxisPair,
    /// Base orbit radius, in world units.
    pub radius: f64,
    /// Base angular speed, in radians per second.
    pub angular_speed: f64,
    /// Signed multiplier on the angular speed.
    pub angle_coefficient: f64,
    /// Optional divisor applied to the radius.
    pub radius_divisor: Option<f64>,
}

impl MotionRule {
    /// Creates a rule with a unit angle coefficient and no radius divisor.
    #[must_use]
    pub const fn new(axes: AxisPair, radius: f64, angular_speed: f64) -> Self {
        Self {
            axes,
            radius,
            angular_speed,
            angle_coefficient: 1.0,
            radius_divisor: None,
        }
    }

    /// Sets the signed angle coefficient.
    #[must_use]
    pub const fn with_angle_coefficient(mut self, coefficient: f64) -> Self {
        self.angle_coefficient = coefficient;
        self
    }

    /// Divides the radius by `divisor`.
    #[must_use]
    pub const fn with_radius_divisor(mut self, divisor: f64) -> Self {
        self.radius_divisor = Some(divisor);
        self
    }

    /// Orbit angle at `elapsed` seconds, in radians.
    #[inline]
    #[must_use]
    pub fn angle_at(&self, elapsed: f64) -> f64 {
        self.angle_coefficient * self.angular_speed * elapsed
    }

    /// Radius after the optional divisor.
    #[inline]
    #[must_use]
    pub fn effective_radius(&self) -> f64 {
        match self.radius_divisor {
            Some(divisor) => self.radius / divisor,
            None => self.radius,
        }
    }

    /// Evaluates the orbit at `elapsed` seconds around `anchor`.
    ///
    /// `current` supplies the coordinate on the untouched axis.
    #[must_use]
    pub fn evaluate(&self, elapsed: f64, anchor: Point3, current: Point3) -> Point3 {
        let angle = self.angle_at(elapsed);
        let radius = self.effective_radius();
        let (s, c) = (angle.sin(), angle.cos());

        let mut out = current;
        out.set(self.axes.first, anchor.get(self.axes.first) + radius * c);
        out.set(self.axes.second, anchor.get(self.axes.second) + radius * s);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Axis;

    const EPS: f64 = 1e-9;

    fn close(a: Point3, b: Point3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn angle_and_radius() {
        let rule = MotionRule::new(AxisPair::XZ, 3.0, 0.5)
            .with_angle_coefficient(-2.0)
            .with_radius_divisor(1.5);
        assert_eq!(rule.angle_at(2.0), -2.0);
        assert_eq!(rule.effective_radius(), 2.0);
    }

    #[test]
    fn quarter_turn_in_xz() {
        let rule = MotionRule::new(AxisPair::XZ, 2.0, 1.0);
        let at = rule.evaluate(
            core::f64::consts::FRAC_PI_2,
            Point3::new(1.0, 1.0, 1.0),
            Point3::ORIGIN,
        );
        assert!(close(at, Point3::new(1.0, 0.0, 3.0)), "got {at:?}");
    }

    #[test]
    fn third_axis_is_preserved() {
        let rule = MotionRule::new(AxisPair::ZY, 3.0, 0.5);
        let current = Point3::new(42.0, -1.0, -1.0);
        let at = rule.evaluate(0.0, Point3::ORIGIN, current);
        assert_eq!(at.get(Axis::X), 42.0);
        assert!(close(at, Point3::new(42.0, 0.0, 3.0)), "got {at:?}");
    }

    #[test]
    fn zero_radius_sits_on_anchor() {
        let rule = MotionRule::new(AxisPair::YZ, 0.0, 0.5);
        let anchor = Point3::new(4.0, 5.0, 6.0);
        let at = rule.evaluate(7.3, anchor, Point3::ORIGIN);
        assert_eq!(at, Point3::new(0.0, 5.0, 6.0));
    }
}

// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3-D points and axis selection.

use core::ops::{Add, Sub};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A point (or offset) in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate (up).
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinate along `axis`.
    #[inline]
    #[must_use]
    pub const fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Overwrites the coordinate along `axis`.
    #[inline]
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// Euclidean length when treated as an offset.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns this offset scaled to unit length, or `None` for a zero or
    /// non-finite offset.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Self::new(self.x / len, self.y / len, self.z / len))
        } else {
            None
        }
    }

    /// Is every coordinate [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns the coordinates as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// One of the three world axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

/// The two axes an orbit moves along.
///
/// `first` receives the cosine term and `second` the sine term. The remaining
/// axis is never written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisPair {
    /// Axis driven by `cos(angle)`.
    pub first: Axis,
    /// Axis driven by `sin(angle)`.
    pub second: Axis,
}

impl AxisPair {
    /// Orbit in the horizontal plane: x ← cos, z ← sin.
    pub const XZ: Self = Self::new(Axis::X, Axis::Z);
    /// Orbit in a vertical plane: y ← cos, z ← sin.
    pub const YZ: Self = Self::new(Axis::Y, Axis::Z);
    /// Orbit in a vertical plane: z ← cos, y ← sin.
    pub const ZY: Self = Self::new(Axis::Z, Axis::Y);

    /// Creates an axis pair.
    ///
    /// # Panics
    ///
    /// Panics if both axes are the same.
    #[must_use]
    pub const fn new(first: Axis, second: Axis) -> Self {
        assert!(
            first as u8 != second as u8,
            "an orbit needs two distinct axes"
        );
        Self { first, second }
    }

    /// The axis this orbit leaves alone.
    #[must_use]
    pub const fn untouched(self) -> Axis {
        match (self.first, self.second) {
            (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Axis::Z,
            (Axis::X, Axis::Z) | (Axis::Z, Axis::X) => Axis::Y,
            _ => Axis::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_by_axis() {
        let mut p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.get(Axis::Y), 2.0);
        p.set(Axis::Z, -4.0);
        assert_eq!(p, Point3::new(1.0, 2.0, -4.0));
    }

    #[test]
    fn untouched_axis() {
        assert_eq!(AxisPair::XZ.untouched(), Axis::Y);
        assert_eq!(AxisPair::YZ.untouched(), Axis::X);
        assert_eq!(AxisPair::ZY.untouched(), Axis::X);
    }

    #[test]
    fn normalized_rejects_zero() {
        assert_eq!(Point3::ORIGIN.normalized(), None);
        let n = Point3::new(0.0, 3.0, 4.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.y - 0.6).abs() < 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Point3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Point3::new(0.5, 1.5, 2.5));
    }
}

// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal column-major 4×4 transform.
//!
//! Covers what the scene hand-off needs (identity, translation, rotation
//! about the up axis, composition) without pulling in a linear-algebra crate.

use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::point::Point3;

/// A column-major 4×4 affine transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column*, matching the layout GPU APIs and CSS
/// `matrix3d()` expect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Returns column `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 4`.
    #[inline]
    #[must_use]
    pub const fn col(self, i: usize) -> [f64; 4] {
        self.cols[i]
    }

    /// Creates a pure translation.
    #[inline]
    #[must_use]
    pub const fn from_translation(p: Point3) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [p.x, p.y, p.z, 1.0],
            ],
        }
    }

    /// Creates a rotation around the Y (up) axis, in radians.
    #[inline]
    #[must_use]
    pub fn from_rotation_y(radians: f64) -> Self {
        let (s, c) = (radians.sin(), radians.cos());
        Self {
            cols: [
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Returns the translation part.
    #[inline]
    #[must_use]
    pub const fn translation(self) -> Point3 {
        let t = self.cols[3];
        Point3::new(t[0], t[1], t[2])
    }

    /// Is every element [finite]?
    ///
    /// [finite]: f64::is_finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|v| v.is_finite())
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        for (j, col) in out.iter_mut().enumerate() {
            for (i, v) in col.iter_mut().enumerate() {
                *v = a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
            }
        }
        Self { cols: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_multiply() {
        let t = Transform3d::from_translation(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(Transform3d::IDENTITY * t, t);
        assert_eq!(t * Transform3d::IDENTITY, t);
    }

    #[test]
    fn translation_round_trips() {
        let p = Point3::new(5.0, -6.0, 7.0);
        assert_eq!(Transform3d::from_translation(p).translation(), p);
    }

    #[test]
    fn rotation_keeps_translation_when_applied_after() {
        let t = Transform3d::from_translation(Point3::new(3.0, 4.0, 0.0));
        let r = Transform3d::from_rotation_y(1.0);
        assert_eq!((t * r).translation(), Point3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn rotation_y_ninety_degrees() {
        let r = Transform3d::from_rotation_y(core::f64::consts::FRAC_PI_2);
        let eps = 1e-9;
        // +X maps to -Z for a right-handed rotation about +Y.
        assert!(r.col(0)[0].abs() < eps);
        assert!((r.col(0)[2] + 1.0).abs() < eps);
        assert!((r.col(2)[0] - 1.0).abs() < eps);
        assert!(r.is_finite());
    }

    #[test]
    fn nan_is_not_finite() {
        let mut t = Transform3d::IDENTITY;
        t.cols[2][1] = f64::NAN;
        assert!(!t.is_finite());
    }
}

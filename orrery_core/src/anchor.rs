// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The central object the markers orbit.
//!
//! The anchor is owned by the host scene. It stays *detached* until the asset
//! loader has produced the mesh. After that it has a position, and a slow spin
//! of its own that the host drives. The frame updater only ever reads it
//! through [`AnchorSource`].

use crate::point::Point3;
use crate::transform::Transform3d;

/// Read access to the anchor position.
pub trait AnchorSource {
    /// Current anchor position, or `None` while the central object is not
    /// loaded yet.
    fn anchor_position(&self) -> Option<Point3>;
}

impl AnchorSource for Option<Point3> {
    fn anchor_position(&self) -> Option<Point3> {
        *self
    }
}

/// Constant-rate rotation about the anchor's up axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinAnimation {
    /// Radians per second.
    pub rate: f64,
}

impl SpinAnimation {
    /// The slow turn the loaded mesh shows in the scene.
    pub const STANDARD: Self = Self { rate: 0.1 };

    /// Rotation angle at `elapsed` seconds.
    #[inline]
    #[must_use]
    pub fn angle_at(self, elapsed: f64) -> f64 {
        self.rate * elapsed
    }
}

impl Default for SpinAnimation {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Host-side anchor state: position once attached, plus its spin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneAnchor {
    position: Option<Point3>,
    spin: SpinAnimation,
    rotation_y: f64,
}

impl SceneAnchor {
    /// Creates a detached anchor with the given spin.
    #[must_use]
    pub const fn new(spin: SpinAnimation) -> Self {
        Self {
            position: None,
            spin,
            rotation_y: 0.0,
        }
    }

    /// Marks the central object as loaded at `position`.
    pub fn attach(&mut self, position: Point3) {
        self.position = Some(position);
    }

    /// Removes the central object (scene teardown or reload).
    pub fn detach(&mut self) {
        self.position = None;
    }

    /// Returns `true` once the central object has been attached.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.position.is_some()
    }

    /// Moves an attached anchor. Ignored while detached.
    pub fn set_position(&mut self, position: Point3) {
        if let Some(p) = &mut self.position {
            *p = position;
        }
    }

    /// Advances the spin to `elapsed` seconds. Ignored while detached.
    pub fn animate(&mut self, elapsed: f64) {
        if self.position.is_some() {
            self.rotation_y = self.spin.angle_at(elapsed);
        }
    }

    /// Current rotation about Y, in radians.
    #[must_use]
    pub const fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    /// World transform of the central object, or `None` while detached.
    #[must_use]
    pub fn transform(&self) -> Option<Transform3d> {
        self.position.map(|p| {
            Transform3d::from_translation(p) * Transform3d::from_rotation_y(self.rotation_y)
        })
    }
}

impl AnchorSource for SceneAnchor {
    fn anchor_position(&self) -> Option<Point3> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_detached() {
        let anchor = SceneAnchor::new(SpinAnimation::STANDARD);
        assert!(!anchor.is_attached());
        assert_eq!(anchor.anchor_position(), None);
        assert_eq!(anchor.transform(), None);
    }

    #[test]
    fn set_position_requires_attach() {
        let mut anchor = SceneAnchor::default();
        anchor.set_position(Point3::new(1.0, 0.0, 0.0));
        assert_eq!(anchor.anchor_position(), None);

        anchor.attach(Point3::ORIGIN);
        anchor.set_position(Point3::new(1.0, 0.0, 0.0));
        assert_eq!(anchor.anchor_position(), Some(Point3::new(1.0, 0.0, 0.0)));

        anchor.detach();
        assert_eq!(anchor.anchor_position(), None);
    }

    #[test]
    fn spin_does_not_move_position() {
        let mut anchor = SceneAnchor::new(SpinAnimation { rate: 0.5 });
        anchor.attach(Point3::new(0.0, 1.0, 0.0));
        anchor.animate(4.0);
        assert_eq!(anchor.rotation_y(), 2.0);
        assert_eq!(anchor.anchor_position(), Some(Point3::new(0.0, 1.0, 0.0)));
        let xf = anchor.transform().unwrap();
        assert_eq!(xf.translation(), Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn option_is_an_anchor_source() {
        let none: Option<Point3> = None;
        assert_eq!(none.anchor_position(), None);
        assert_eq!(
            Some(Point3::ORIGIN).anchor_position(),
            Some(Point3::ORIGIN)
        );
    }
}

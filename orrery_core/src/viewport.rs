// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render target sizing.

/// Upper bound on the device pixel ratio used for the drawing buffer.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Logical size of the render target plus the display's pixel density.
///
/// The host calls [`resize`](Self::resize) from its window resize handler and
/// reads [`aspect`](Self::aspect) for the camera projection and
/// [`drawing_buffer_size`](Self::drawing_buffer_size) for the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    device_pixel_ratio: f64,
}

impl Viewport {
    /// Creates a viewport. Zero dimensions are clamped to 1 and a
    /// non-positive or non-finite pixel ratio is treated as 1.
    #[must_use]
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        let mut viewport = Self {
            width: 1,
            height: 1,
            device_pixel_ratio: 1.0,
        };
        viewport.resize(width, height);
        viewport.set_device_pixel_ratio(device_pixel_ratio);
        viewport
    }

    /// Updates the logical size. Zero dimensions are clamped to 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Updates the display pixel density.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
    }

    /// Logical width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Logical height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Device pixel ratio, capped at [`MAX_PIXEL_RATIO`].
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }

    /// Physical drawing buffer size: logical size times
    /// [`pixel_ratio`](Self::pixel_ratio), rounded.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "inputs are positive and bounded by u32::MAX * MAX_PIXEL_RATIO"
    )]
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let scale = |v: u32| -> u32 {
            let scaled = f64::from(v) * self.pixel_ratio() + 0.5;
            (scaled as u64).min(u64::from(u32::MAX)) as u32
        };
        (scale(self.width), scale(self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_follows_resize() {
        let mut vp = Viewport::default();
        assert!((vp.aspect() - 4.0 / 3.0).abs() < 1e-12);
        vp.resize(1920, 1080);
        assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn zero_size_is_clamped() {
        let vp = Viewport::new(0, 0, 1.0);
        assert_eq!((vp.width(), vp.height()), (1, 1));
        assert_eq!(vp.aspect(), 1.0);
    }

    #[test]
    fn pixel_ratio_is_capped() {
        let vp = Viewport::new(800, 600, 3.0);
        assert_eq!(vp.pixel_ratio(), 2.0);
        assert_eq!(vp.drawing_buffer_size(), (1600, 1200));

        let vp = Viewport::new(801, 601, 1.5);
        assert_eq!(vp.drawing_buffer_size(), (1202, 902));
    }

    #[test]
    fn bad_ratio_falls_back_to_one() {
        assert_eq!(Viewport::new(10, 10, f64::NAN).pixel_ratio(), 1.0);
        assert_eq!(Viewport::new(10, 10, -2.0).pixel_ratio(), 1.0);
    }
}

// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live-tunable material parameters for the central mesh.
//!
//! The host's debug panel writes here; the renderer polls
//! [`MaterialTuning::take_changed`] once per frame and re-uploads only when
//! something actually changed.

use crate::color::{Color, ColorParseError};

/// Mesh material color with change tracking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialTuning {
    color: Color,
    changed: bool,
}

impl MaterialTuning {
    /// Creates tuning state with an initial color. The initial value counts
    /// as a change so the renderer picks it up on the first frame.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            changed: true,
        }
    }

    /// Returns the current color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Sets the color, marking it changed if it differs.
    pub fn set_color(&mut self, color: Color) {
        if color != self.color {
            self.color = color;
            self.changed = true;
        }
    }

    /// Parses and sets the color from a hex string such as `"#ff8800"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if `hex` is not a valid color; the current
    /// color is left unchanged.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        let color = Color::from_hex(hex)?;
        self.set_color(color);
        Ok(())
    }

    /// Returns the color if it changed since the last call.
    pub fn take_changed(&mut self) -> Option<Color> {
        if core::mem::take(&mut self.changed) {
            Some(self.color)
        } else {
            None
        }
    }
}

impl Default for MaterialTuning {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_color_is_reported_once() {
        let mut tuning = MaterialTuning::default();
        assert_eq!(tuning.take_changed(), Some(Color::WHITE));
        assert_eq!(tuning.take_changed(), None);
    }

    #[test]
    fn same_color_is_not_a_change() {
        let mut tuning = MaterialTuning::new(Color::from_u32(0x336699));
        let _ = tuning.take_changed();
        tuning.set_color_hex("#336699").unwrap();
        assert_eq!(tuning.take_changed(), None);

        tuning.set_color_hex("#ff0000").unwrap();
        assert_eq!(tuning.take_changed(), Some(Color::from_rgb8(255, 0, 0)));
    }

    #[test]
    fn bad_hex_keeps_previous_color() {
        let mut tuning = MaterialTuning::new(Color::from_u32(0x00ff00));
        let _ = tuning.take_changed();
        assert!(tuning.set_color_hex("nope").is_err());
        assert_eq!(tuning.color(), Color::from_u32(0x00ff00));
        assert_eq!(tuning.take_changed(), None);
    }
}

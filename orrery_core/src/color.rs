// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RGB colors and hex parsing.

use core::fmt;

/// An RGB color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(0xff, 0xff, 0xff);

    /// Creates a color from 8-bit components.
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Creates a color from a packed `0xRRGGBB` value. Bits above 24 are
    /// ignored.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "each channel is masked to 8 bits before the cast"
    )]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::from_rgb8(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        )
    }

    /// Parses `#rrggbb`, `0xrrggbb`, or bare `rrggbb` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the input is empty, does not have six
    /// hex digits after the prefix, or contains a non-hex character.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorParseError::Length(digits.len()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(bad));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| ColorParseError::Length(digits.len()))
    }

    /// Components as `[r, g, b, 1.0]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Errors from [`Color::from_hex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty.
    Empty,
    /// The input had this many digits instead of six.
    Length(usize),
    /// The input contained a character that is not a hex digit.
    Digit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::Length(n) => write!(f, "expected 6 hex digits, found {n}"),
            Self::Digit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl core::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_prefixes() {
        let expected = Color::from_rgb8(0x12, 0xab, 0xff);
        assert_eq!(Color::from_hex("#12abff"), Ok(expected));
        assert_eq!(Color::from_hex("0x12ABFF"), Ok(expected));
        assert_eq!(Color::from_hex("  12abff "), Ok(expected));
    }

    #[test]
    fn packed_value_matches_bytes() {
        assert_eq!(Color::from_u32(0x00ff_0000), Color::from_rgb8(255, 0, 0));
        assert_eq!(Color::from_u32(0xffff_ffff), Color::WHITE);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Color::from_hex(""), Err(ColorParseError::Empty));
        assert_eq!(Color::from_hex("#fff"), Err(ColorParseError::Length(3)));
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::Digit('g')));
        assert_eq!(Color::from_hex("+12345"), Err(ColorParseError::Digit('+')));
    }

    #[test]
    fn error_messages() {
        use alloc::string::ToString;

        assert_eq!(
            ColorParseError::Length(3).to_string(),
            "expected 6 hex digits, found 3"
        );
    }
}

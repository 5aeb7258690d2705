//! sRGB colors used by the style and chart palettes.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use palette::color_difference::Wcag21RelativeContrast;
use serde::Serialize;

use crate::error::{Error, Result};

/// Minimum WCAG 2.1 AA contrast ratio for normal-size text.
pub const WCAG_AA_TEXT: f32 = 4.5;

/// An opaque 8-bit sRGB color.
///
/// Colors are declared as constants in the palettes and rendered as
/// lowercase `#rrggbb` hex in generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from its 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rgb`, `#rrggbb`, `rgb` or `rrggbb` hex string.
    pub fn parse(hex: &str) -> Result<Self> {
        let parsed = Srgb::<u8>::from_str(hex.trim()).map_err(|e| Error::Color {
            input: hex.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::rgb(parsed.red, parsed.green, parsed.blue))
    }

    /// Returns the lowercase `#rrggbb` representation.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG 2.1 contrast ratio between two colors, in the range 1.0-21.0.
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        self.to_srgb().relative_contrast(other.to_srgb())
    }

    /// Returns true if text in this color on `background` meets WCAG AA.
    pub fn is_legible_on(&self, background: &Color) -> bool {
        self.contrast_ratio(background) >= WCAG_AA_TEXT
    }

    fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

//! Chart palettes and font sizes derived from the accessibility flags.
//!
//! Charts are drawn by an external plotting collaborator. This module only
//! answers which colors, color scales and font sizes it should use. It is the
//! sole consumer of the `color_blind` flag.

use serde::Serialize;

use crate::color::Color;
use crate::config::AccessibilityFlags;

/// Color-blind-safe qualitative palette.
pub const COLOR_BLIND_SAFE: [Color; 11] = [
    Color::rgb(0x88, 0xcc, 0xee),
    Color::rgb(0xcc, 0x66, 0x77),
    Color::rgb(0xdd, 0xcc, 0x77),
    Color::rgb(0x11, 0x77, 0x33),
    Color::rgb(0x33, 0x22, 0x88),
    Color::rgb(0xaa, 0x44, 0x99),
    Color::rgb(0x44, 0xaa, 0x99),
    Color::rgb(0x99, 0x99, 0x33),
    Color::rgb(0x88, 0x22, 0x55),
    Color::rgb(0x66, 0x11, 0x00),
    Color::rgb(0x88, 0x88, 0x88),
];

/// Bright palette for dark chart backgrounds.
pub const HIGH_CONTRAST: [Color; 14] = [
    Color::rgb(0xff, 0x6b, 0x6b),
    Color::rgb(0x4e, 0xcd, 0xc4),
    Color::rgb(0x45, 0xb7, 0xd1),
    Color::rgb(0x96, 0xce, 0xb4),
    Color::rgb(0xff, 0xea, 0xa7),
    Color::rgb(0xdd, 0xa0, 0xdd),
    Color::rgb(0x98, 0xd8, 0xc8),
    Color::rgb(0xf7, 0xdc, 0x6f),
    Color::rgb(0xbb, 0x8f, 0xce),
    Color::rgb(0x85, 0xc1, 0xe9),
    Color::rgb(0xf8, 0xc4, 0x71),
    Color::rgb(0x82, 0xe0, 0xaa),
    Color::rgb(0xf1, 0x94, 0x8a),
    Color::rgb(0xd7, 0xbd, 0xe2),
];

/// Default ten-color qualitative palette.
pub const DEFAULT: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

/// Which qualitative palette was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    ColorBlindSafe,
    HighContrast,
    Default,
}

impl PaletteKind {
    /// `color_blind` takes precedence over `high_contrast`.
    pub fn for_flags(flags: &AccessibilityFlags) -> Self {
        if flags.color_blind {
            Self::ColorBlindSafe
        } else if flags.high_contrast {
            Self::HighContrast
        } else {
            Self::Default
        }
    }

    pub fn colors(self) -> &'static [Color] {
        match self {
            Self::ColorBlindSafe => &COLOR_BLIND_SAFE,
            Self::HighContrast => &HIGH_CONTRAST,
            Self::Default => &DEFAULT,
        }
    }

    /// Named continuous color scale for heatmap-like charts.
    pub fn continuous_scale(self) -> &'static str {
        match self {
            Self::ColorBlindSafe => "viridis",
            Self::HighContrast => "plasma",
            Self::Default => "Blues",
        }
    }

    /// Named colormap for word clouds.
    pub fn wordcloud_colormap(self) -> &'static str {
        match self {
            Self::ColorBlindSafe => "viridis",
            Self::HighContrast => "hot",
            Self::Default => "plasma",
        }
    }
}

/// Font sizes in points, before and after the large-text switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFonts {
    /// Layout font (titles, legends).
    pub title: u8,
    /// Axis tick labels.
    pub ticks: u8,
    /// Data labels drawn on bars and slices.
    pub labels: u8,
    /// Tooltip text.
    pub hover: u8,
}

impl ChartFonts {
    pub fn for_flags(flags: &AccessibilityFlags) -> Self {
        if flags.large_text {
            Self {
                title: 18,
                ticks: 16,
                labels: 16,
                hover: 16,
            }
        } else {
            Self {
                title: 14,
                ticks: 14,
                labels: 12,
                hover: 14,
            }
        }
    }
}

/// Tooltip styling; always black on white for legibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverLabel {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub font_family: &'static str,
    pub font_size: u8,
}

/// Everything a chart collaborator needs to render accessibly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTheme {
    pub palette: PaletteKind,
    colors: &'static [Color],
    pub continuous_scale: &'static str,
    pub wordcloud_colormap: &'static str,
    /// Plot and paper background.
    pub background: Color,
    /// Axis, legend and title text.
    pub text: Color,
    pub fonts: ChartFonts,
    pub hover: HoverLabel,
}

impl ChartTheme {
    /// Selects palette, colors and font sizes for the given flags.
    pub fn for_flags(flags: &AccessibilityFlags) -> Self {
        let palette = PaletteKind::for_flags(flags);
        let fonts = ChartFonts::for_flags(flags);
        let (background, text) = if flags.high_contrast {
            (Color::BLACK, Color::WHITE)
        } else {
            (Color::WHITE, Color::BLACK)
        };

        Self {
            palette,
            colors: palette.colors(),
            continuous_scale: palette.continuous_scale(),
            wordcloud_colormap: palette.wordcloud_colormap(),
            background,
            text,
            fonts,
            hover: HoverLabel {
                background: Color::WHITE,
                text: Color::BLACK,
                border: Color::BLACK,
                font_family: "Arial, sans-serif",
                font_size: fonts.hover,
            },
        }
    }

    /// Qualitative series colors of the selected palette.
    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    /// Color for the `index`-th series, cycling through the palette.
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

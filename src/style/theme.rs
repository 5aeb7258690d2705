//! Base page palettes: the dark high-contrast theme and the light theme.

use super::StyleFragment;
use crate::color::Color;
use crate::config::AccessibilityFlags;
use crate::css::Rule;

// ============================================================================
// ThemePalette
// ============================================================================

/// Colors shared by the rules of one base theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Page background.
    pub background: Color,
    /// Sidebar, table headers and alternate rows.
    pub surface: Color,
    /// Hovered table rows.
    pub highlight: Color,
    /// Body text.
    pub foreground: Color,
    /// Primary button fill.
    pub button: Color,
    /// Primary button label.
    pub button_text: Color,
    /// Text input fill.
    pub input_background: Color,
    /// Text input text.
    pub input_text: Color,
    /// Text input border.
    pub input_border: Color,
}

/// High-contrast dark palette.
pub const DARK_PALETTE: ThemePalette = ThemePalette {
    background: Color::rgb(0x0f, 0x0f, 0x23),
    surface: Color::rgb(0x1a, 0x1a, 0x2e),
    highlight: Color::rgb(0x2a, 0x2a, 0x3e),
    foreground: Color::WHITE,
    button: Color::rgb(0x4a, 0x4a, 0x6a),
    button_text: Color::WHITE,
    input_background: Color::WHITE,
    input_text: Color::BLACK,
    input_border: Color::BLACK,
};

/// Default light palette.
pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    background: Color::WHITE,
    surface: Color::rgb(0xf8, 0xf9, 0xfa),
    highlight: Color::rgb(0xf0, 0xf2, 0xf6),
    foreground: Color::rgb(0x26, 0x27, 0x30),
    button: Color::rgb(0x00, 0x7b, 0xff),
    button_text: Color::WHITE,
    input_background: Color::WHITE,
    input_text: Color::rgb(0x26, 0x27, 0x30),
    input_border: Color::rgb(0xde, 0xe2, 0xe6),
};

const TEXT_SELECTORS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "span", "label"];

const INPUT_SELECTORS: &[&str] = &[
    ".stTextInput > div > div > input",
    ".stTextArea > div > div > textarea",
    ".stSelectbox > div > div > select",
];

const CAPTION_SELECTORS: &[&str] = &[".stCaption", ".stImage caption", "figcaption"];

// ============================================================================
// DarkTheme
// ============================================================================

/// Dark palette with inverted colors and high-contrast controls.
///
/// The file uploader keeps its light styling so the drop zone stays
/// recognizable. Chart text is forced white; tooltips are handled by
/// [`TooltipOverride`](super::TooltipOverride).
pub struct DarkTheme;

impl DarkTheme {
    fn page_rules(p: &ThemePalette) -> Vec<Rule> {
        vec![
            Rule::new(&[".stApp", ".main .block-container"])
                .decl("background-color", p.background)
                .decl("color", p.foreground),
            Rule::new(&["[data-testid=\"stSidebar\"]"]).decl("background-color", p.surface),
            Rule::new(TEXT_SELECTORS).decl("color", p.foreground),
            Rule::new(&[".stText", ".stMarkdown"]).decl("color", p.foreground),
            Rule::new(INPUT_SELECTORS)
                .decl("background-color", p.input_background)
                .decl("color", p.input_text)
                .decl("border", format!("1px solid {}", p.input_border)),
            Rule::new(&[".stButton > button"])
                .decl("background-color", p.button)
                .decl("color", p.button_text),
        ]
    }

    fn uploader_rules() -> Vec<Rule> {
        let text = LIGHT_PALETTE.foreground;
        vec![
            Rule::new(&[
                ".stFileUploader > div > div",
                ".stFileUploader > div > div > div",
                ".stFileUploader > div > div > div > div",
            ])
            .decl("background-color", LIGHT_PALETTE.highlight)
            .decl("border", "1px dashed #cccccc")
            .decl("color", text),
            Rule::new(&[
                ".stFileUploader > div > div:hover",
                ".stFileUploader > div > div > div:hover",
                ".stFileUploader > div > div > div > div:hover",
            ])
            .decl("background-color", "#e6e9ed")
            .decl("border-color", "#999999"),
            Rule::new(&[
                ".stFileUploader .uploadedFile",
                ".stFileUploader .uploadedFile > div",
                ".stFileUploader .uploadedFile > div > div",
                ".stFileUploader button",
                ".stFileUploader button > div",
                ".stFileUploader button > div > div",
            ])
            .decl("background-color", Color::WHITE)
            .decl("color", text)
            .decl("border", "1px solid #cccccc"),
            Rule::new(&[
                ".stFileUploader p",
                ".stFileUploader span",
                ".stFileUploader div",
                ".stFileUploader label",
            ])
            .decl("color", text),
        ]
    }

    fn chart_rules(p: &ThemePalette) -> Vec<Rule> {
        vec![
            Rule::new(&[".js-plotly-plot", ".js-plotly-plot .plotly .main-svg"])
                .decl("background", "transparent"),
            Rule::new(&[
                ".js-plotly-plot .plotly .main-svg text",
                ".js-plotly-plot .plotly .main-svg .legend text",
                ".js-plotly-plot .plotly .main-svg .gtitle text",
                ".js-plotly-plot .plotly .main-svg .xtitle text",
                ".js-plotly-plot .plotly .main-svg .ytitle text",
                ".plotly .textpoint",
                ".plotly .textpoint text",
                ".plotly .legend .legendtext",
            ])
            .decl("fill", p.foreground),
            Rule::new(&[".plotly .legend"]).decl("background-color", "rgba(0, 0, 0, 0.8)"),
            Rule::new(&[".stPyplot"]).decl("background", "transparent"),
            Rule::new(&[".stPyplot svg"]).decl("background", Color::BLACK),
            Rule::new(&[".stPyplot svg text"]).decl("fill", p.foreground),
            Rule::new(CAPTION_SELECTORS)
                .decl("background", "transparent")
                .decl("color", p.foreground),
            Rule::new(&[".stImage"]).decl("background", "transparent"),
        ]
    }

    fn table_rules(p: &ThemePalette) -> Vec<Rule> {
        vec![
            Rule::new(&[
                ".stDataFrame",
                ".stTable",
                "div[data-testid=\"stDataFrame\"]",
                "div[data-testid=\"stTable\"]",
                ".stDataFrame .dataframe-container",
            ])
            .decl("background-color", p.background)
            .decl("border", "none"),
            Rule::new(&[".stDataFrame table", ".stTable table"])
                .decl("background-color", p.background)
                .decl("color", p.foreground)
                .decl("border-collapse", "collapse")
                .decl("width", "100%"),
            Rule::new(&[
                ".stDataFrame th",
                ".stTable th",
                ".stDataFrame .dataframe th",
                "div[data-testid=\"stDataFrame\"] th",
            ])
            .decl("background-color", p.surface)
            .decl("color", p.foreground)
            .decl("border", "none")
            .decl("padding", "8px 12px")
            .decl("font-weight", "bold"),
            Rule::new(&[
                ".stDataFrame td",
                ".stTable td",
                ".stDataFrame .dataframe td",
                "div[data-testid=\"stDataFrame\"] td",
            ])
            .decl("background-color", p.background)
            .decl("color", p.foreground)
            .decl("border", "none")
            .decl("padding", "8px 12px"),
            Rule::new(&[
                ".stDataFrame tr:nth-child(even) td",
                ".stDataFrame .dataframe tr:nth-child(even) td",
            ])
            .decl("background-color", p.surface),
            Rule::new(&[
                ".stDataFrame tr:nth-child(odd) td",
                ".stDataFrame .dataframe tr:nth-child(odd) td",
            ])
            .decl("background-color", p.background),
            Rule::new(&[".stDataFrame tr:hover td", ".stDataFrame .dataframe tr:hover td"])
                .decl("background-color", p.highlight),
            Rule::new(&[".stDataFrame .column-header"])
                .decl("background-color", p.surface)
                .decl("color", p.foreground)
                .decl("border", "none"),
            Rule::new(&[
                ".stDataFrame td span",
                ".stDataFrame th span",
                ".stDataFrame .dataframe td span",
                ".stDataFrame .dataframe th span",
            ])
            .decl("color", p.foreground),
        ]
    }
}

impl StyleFragment for DarkTheme {
    fn name(&self) -> &'static str {
        "high contrast theme"
    }

    fn applies_to(&self, flags: &AccessibilityFlags) -> bool {
        flags.high_contrast
    }

    fn rules(&self) -> Vec<Rule> {
        let p = &DARK_PALETTE;
        let mut rules = Self::page_rules(p);
        rules.extend(Self::uploader_rules());
        rules.extend(Self::chart_rules(p));
        rules.extend(Self::table_rules(p));
        rules
    }
}

// ============================================================================
// LightTheme
// ============================================================================

/// Default light palette.
///
/// Containers, images and captions get transparent backgrounds so the page
/// background shows through. Chart tooltips keep the charting library's
/// defaults.
pub struct LightTheme;

impl StyleFragment for LightTheme {
    fn name(&self) -> &'static str {
        "light theme"
    }

    fn applies_to(&self, flags: &AccessibilityFlags) -> bool {
        !flags.high_contrast
    }

    fn rules(&self) -> Vec<Rule> {
        let p = &LIGHT_PALETTE;
        let mut text = TEXT_SELECTORS.to_vec();
        text.extend(["small", "caption"]);

        vec![
            Rule::new(&["html", "body", ".stApp"])
                .decl("background-color", p.background)
                .decl("color", p.foreground),
            Rule::new(&[
                ".main",
                ".main .block-container",
                ".main .block-container > div",
                ".block-container",
                ".block-container > div",
            ])
            .decl("background", "transparent")
            .decl("background-color", "transparent")
            .decl("background-image", "none")
            .decl("color", p.foreground),
            Rule::new(&["[data-testid=\"stSidebar\"]", "[data-testid=\"stSidebar\"] > div"])
                .decl("background-color", p.surface)
                .decl("border-right", format!("2px solid {}", p.input_border)),
            Rule::new(&text).decl("color", p.foreground),
            Rule::new(&[
                ".stText",
                ".stMarkdown",
                ".stWrite",
                ".stInfo",
                ".stSuccess",
                ".stWarning",
                ".stError",
            ])
            .decl("background", "transparent")
            .decl("color", p.foreground),
            Rule::new(INPUT_SELECTORS)
                .decl("background-color", p.input_background)
                .decl("color", p.input_text)
                .decl("border", format!("1px solid {}", p.input_border)),
            Rule::new(&[".stDataFrame", ".stTable"])
                .decl("background-color", p.background)
                .decl("color", p.foreground),
            Rule::new(CAPTION_SELECTORS)
                .decl("background", "transparent")
                .decl("color", p.foreground),
            Rule::new(&[".stImage", ".js-plotly-plot", ".stPyplot"])
                .decl("background", "transparent"),
            Rule::new(&[".js-plotly-plot .plotly .main-svg text"]).decl("fill", p.foreground),
            Rule::new(&[".stButton > button"])
                .decl("background-color", p.button)
                .decl("color", p.button_text)
                .decl("border", "1px solid #0056b3"),
            Rule::new(&["*", ".main *", ".block-container *"]).decl("background-image", "none"),
        ]
    }
}

//! Enlarged typography overlay.

use super::StyleFragment;
use crate::config::AccessibilityFlags;
use crate::css::Rule;

/// Heading sizes used by the overlay, `h1` first.
pub const HEADING_SIZES: [(&str, &str); 6] = [
    ("h1", "2.5rem"),
    ("h2", "2rem"),
    ("h3", "1.75rem"),
    ("h4", "1.5rem"),
    ("h5", "1.25rem"),
    ("h6", "1.1rem"),
];

/// Body, control and table text size.
pub const BODY_FONT_SIZE: &str = "1.1rem";

/// Body line height.
pub const BODY_LINE_HEIGHT: &str = "1.6";

/// Larger headings, body, controls and tables.
///
/// Composes with either base theme; it only touches sizes, never colors.
pub struct TypographyOverlay;

impl StyleFragment for TypographyOverlay {
    fn name(&self) -> &'static str {
        "large text overlay"
    }

    fn applies_to(&self, flags: &AccessibilityFlags) -> bool {
        flags.large_text
    }

    fn rules(&self) -> Vec<Rule> {
        let mut rules: Vec<Rule> = HEADING_SIZES
            .iter()
            .map(|(heading, size)| Rule::new(&[*heading]).decl("font-size", size))
            .collect();

        rules.push(
            Rule::new(&["p", "div", "span", "label", ".stText", ".stMarkdown"])
                .decl("font-size", BODY_FONT_SIZE)
                .decl("line-height", BODY_LINE_HEIGHT),
        );
        rules.push(
            Rule::new(&[".stSelectbox", ".stTextInput", ".stTextArea", ".stButton"])
                .decl("font-size", BODY_FONT_SIZE),
        );
        rules.push(Rule::new(&[".stDataFrame", ".stTable"]).decl("font-size", BODY_FONT_SIZE));
        rules
    }
}

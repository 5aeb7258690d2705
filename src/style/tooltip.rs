//! Chart tooltip legibility in high-contrast mode.
//!
//! Tooltips are the one fixed exception to the dark palette: they are always
//! black text on a white background with a black border. The static rules
//! cover tooltips present at injection time; the observer script re-applies
//! the same style to charts inserted later, since the charting library sets
//! inline styles that a stylesheet cannot always override.

use std::sync::LazyLock;

use super::StyleFragment;
use crate::color::Color;
use crate::config::AccessibilityFlags;
use crate::css::Rule;

/// Tooltip background.
pub const TOOLTIP_BACKGROUND: Color = Color::WHITE;
/// Tooltip text.
pub const TOOLTIP_TEXT: Color = Color::BLACK;
/// Tooltip border width in pixels.
pub const TOOLTIP_BORDER_PX: u8 = 2;

/// Delay before restyling a freshly inserted chart, in milliseconds.
pub const OBSERVER_DELAY_MS: u32 = 100;

// ============================================================================
// TooltipOverride
// ============================================================================

/// Static black-on-white tooltip rules.
pub struct TooltipOverride;

impl StyleFragment for TooltipOverride {
    fn name(&self) -> &'static str {
        "chart tooltip override"
    }

    fn applies_to(&self, flags: &AccessibilityFlags) -> bool {
        flags.high_contrast
    }

    fn rules(&self) -> Vec<Rule> {
        let border = tooltip_border();
        vec![
            Rule::new(&[
                ".plotly .hovertext",
                ".plotly .hovertext *",
                ".plotly .hoverlabel .hovertext",
                ".plotly .hoverlabel .hovertext *",
                ".plotly .hoverlabel .name",
                ".plotly .hoverlabel .value",
                ".plotly .hoverlabel .text",
            ])
            .decl("fill", TOOLTIP_TEXT)
            .decl("color", TOOLTIP_TEXT),
            Rule::new(&[".plotly .hoverlabel", ".plotly .hoverlabel *"])
                .decl("background-color", TOOLTIP_BACKGROUND)
                .decl("color", TOOLTIP_TEXT)
                .decl("border", border),
            Rule::new(&[
                ".plotly .hoverlabel div",
                ".plotly .hoverlabel span",
                ".plotly .hoverlabel p",
                ".plotly .hoverlabel .extra",
                ".plotly .hoverlabel .extra *",
            ])
            .decl("color", TOOLTIP_TEXT)
            .decl("background-color", TOOLTIP_BACKGROUND),
        ]
    }
}

// ============================================================================
// TooltipObserver
// ============================================================================

/// Observer template; `$`-prefixed tokens are filled from the tooltip constants.
const OBSERVER_TEMPLATE: &str = r#"document.addEventListener('DOMContentLoaded', function() {
    const observer = new MutationObserver(function(mutations) {
        mutations.forEach(function(mutation) {
            if (mutation.type !== 'childList') {
                return;
            }
            mutation.addedNodes.forEach(function(node) {
                if (node.nodeType === 1 && node.classList
                    && node.classList.contains('js-plotly-plot')) {
                    setTimeout(function() {
                        node.querySelectorAll('.hoverlabel').forEach(function(label) {
                            label.style.backgroundColor = '$BACKGROUND';
                            label.style.color = '$TEXT';
                            label.style.border = '$BORDER';
                            label.querySelectorAll('*').forEach(function(el) {
                                el.style.color = '$TEXT';
                                el.style.backgroundColor = '$BACKGROUND';
                            });
                        });
                    }, $DELAY);
                }
            });
        });
    });
    observer.observe(document.body, { childList: true, subtree: true });
});"#;

/// Watches the page for inserted charts and restyles their tooltips.
static OBSERVER_SCRIPT: LazyLock<String> = LazyLock::new(|| {
    OBSERVER_TEMPLATE
        .replace("$BACKGROUND", &TOOLTIP_BACKGROUND.to_hex())
        .replace("$TEXT", &TOOLTIP_TEXT.to_hex())
        .replace("$BORDER", &tooltip_border())
        .replace("$DELAY", &OBSERVER_DELAY_MS.to_string())
});

fn tooltip_border() -> String {
    format!("{TOOLTIP_BORDER_PX}px solid {TOOLTIP_TEXT}")
}

/// Behavior patch applying the tooltip override to late-rendered charts.
pub struct TooltipObserver;

impl StyleFragment for TooltipObserver {
    fn name(&self) -> &'static str {
        "chart tooltip observer"
    }

    fn applies_to(&self, flags: &AccessibilityFlags) -> bool {
        flags.high_contrast
    }

    fn rules(&self) -> Vec<Rule> {
        Vec::new()
    }

    fn behavior(&self) -> Option<&'static str> {
        Some(OBSERVER_SCRIPT.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_forces_black_on_white() {
        let rules = TooltipOverride.rules();
        let label = rules
            .iter()
            .find(|r| r.selectors().contains(&".plotly .hoverlabel"))
            .unwrap();
        assert_eq!(label.value_of("background-color"), Some("#ffffff"));
        assert_eq!(label.value_of("color"), Some("#000000"));
        assert_eq!(label.value_of("border"), Some("2px solid #000000"));
        assert!(TOOLTIP_TEXT.is_legible_on(&TOOLTIP_BACKGROUND));
    }

    #[test]
    fn override_only_in_high_contrast() {
        assert!(TooltipOverride.applies_to(&AccessibilityFlags::new(true, false, false)));
        assert!(!TooltipOverride.applies_to(&AccessibilityFlags::new(false, true, true)));
    }

    #[test]
    fn observer_watches_inserted_charts() {
        let script = TooltipObserver.behavior().unwrap();
        assert!(script.contains("new MutationObserver"));
        assert!(script.contains("classList.contains('js-plotly-plot')"));
        assert!(script.contains("subtree: true"));
        assert!(script.contains(&format!("}}, {OBSERVER_DELAY_MS});")));
        assert!(TooltipObserver.rules().is_empty());
        assert!(TooltipObserver.css().is_empty());
    }

    #[test]
    fn observer_script_follows_tooltip_constants() {
        let script = TooltipObserver.behavior().unwrap();
        assert!(!script.contains('$'));
        assert!(script.contains("label.style.backgroundColor = '#ffffff'"));
        assert!(script.contains("label.style.color = '#000000'"));
        assert!(script.contains(&format!("label.style.border = '{}'", tooltip_border())));
        assert!(script.contains(&format!("}}, {OBSERVER_DELAY_MS});")));
    }

    #[test]
    fn observer_and_override_share_border() {
        let rules = TooltipOverride.rules();
        let label = rules
            .iter()
            .find(|r| r.selectors().contains(&".plotly .hoverlabel"))
            .unwrap();
        let script = TooltipObserver.behavior().unwrap();
        let border = label.value_of("border").unwrap();
        assert!(script.contains(&format!("'{border}'")));
    }
}

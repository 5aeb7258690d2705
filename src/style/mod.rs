//! Style generation for the accessibility settings.
//!
//! The generated payload is assembled from named fragments, each a small
//! self-contained unit implementing [`StyleFragment`]:
//!
//! ```text
//! AccessibilityConfig
//!     │
//!     ▼
//! ┌──────────────────┐   high_contrast
//! │    DarkTheme     │ ◄──────────────  exactly one of the two
//! │    LightTheme    │ ◄── !high_contrast
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ TooltipOverride  │ ◄── high_contrast (rules)
//! │ TooltipObserver  │ ◄── high_contrast (behavior patch)
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │TypographyOverlay │ ◄── large_text, composes with either theme
//! └────────┬─────────┘
//!          ▼
//!     StylePayload
//! ```
//!
//! `color_blind` is deliberately absent: it only selects chart palettes
//! (see [`ChartTheme`](crate::ChartTheme)).

pub mod theme;
pub mod tooltip;
pub mod typography;

pub use theme::{DARK_PALETTE, DarkTheme, LIGHT_PALETTE, LightTheme, ThemePalette};
pub use tooltip::{TooltipObserver, TooltipOverride};
pub use typography::TypographyOverlay;

use std::fmt;

use serde::Serialize;

use crate::config::{AccessibilityConfig, AccessibilityFlags};
use crate::css::{Rule, StyleSheet};

// ============================================================================
// ThemeVariant
// ============================================================================

/// Which base palette a payload was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// The palette is chosen by `high_contrast` alone.
    pub fn for_flags(flags: &AccessibilityFlags) -> Self {
        if flags.high_contrast {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

// ============================================================================
// StyleFragment
// ============================================================================

/// A named, independently testable piece of the style payload.
pub trait StyleFragment: Sync {
    /// Human-readable name, emitted as a comment before the fragment's rules.
    fn name(&self) -> &'static str;

    /// Returns true if this fragment contributes for the given flags.
    fn applies_to(&self, flags: &AccessibilityFlags) -> bool;

    /// The declarative rules of this fragment.
    fn rules(&self) -> Vec<Rule>;

    /// Script patching page behavior that static rules cannot reach.
    fn behavior(&self) -> Option<&'static str> {
        None
    }

    /// Renders the fragment's rules on their own.
    fn css(&self) -> String {
        let mut sheet = StyleSheet::new();
        sheet.rules(self.rules());
        sheet.into_string()
    }
}

/// Fragments in emission order. Later rules win on equal specificity, so the
/// typography overlay comes last.
static FRAGMENTS: &[&dyn StyleFragment] = &[
    &DarkTheme,
    &LightTheme,
    &TooltipOverride,
    &TooltipObserver,
    &TypographyOverlay,
];

/// Names of the fragments that contribute for `flags`, in emission order.
pub fn active_fragments(flags: &AccessibilityFlags) -> Vec<&'static str> {
    FRAGMENTS
        .iter()
        .filter(|fragment| fragment.applies_to(flags))
        .map(|fragment| fragment.name())
        .collect()
}

// ============================================================================
// StyleContext
// ============================================================================

/// Accumulates fragment output while a payload is being generated.
pub struct StyleContext {
    variant: ThemeVariant,
    revision: u64,
    sheet: StyleSheet,
    behavior: Option<String>,
}

impl StyleContext {
    /// Starts a payload; the revision token is written first.
    pub fn new(variant: ThemeVariant, revision: u64) -> Self {
        let mut sheet = StyleSheet::new();
        sheet.comment(&format!("accessibility revision {revision} ({variant} theme)"));
        Self {
            variant,
            revision,
            sheet,
            behavior: None,
        }
    }

    /// Writes one fragment's rules and behavior.
    pub fn write(&mut self, fragment: &dyn StyleFragment) {
        let rules = fragment.rules();
        if !rules.is_empty() {
            self.sheet.comment(fragment.name());
            self.sheet.rules(rules);
        }
        if let Some(script) = fragment.behavior() {
            match self.behavior.as_mut() {
                Some(existing) => {
                    existing.push('\n');
                    existing.push_str(script);
                }
                None => self.behavior = Some(script.to_string()),
            }
        }
    }

    pub fn finish(self) -> StylePayload {
        StylePayload {
            variant: self.variant,
            revision: self.revision,
            rules: self.sheet.into_string(),
            behavior_patch: self.behavior,
        }
    }
}

// ============================================================================
// StylePayload
// ============================================================================

/// Style text handed to the host page for injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePayload {
    /// Base palette the rules were built from.
    pub variant: ThemeVariant,
    /// Change counter the payload was generated for.
    pub revision: u64,
    /// CSS rules, without the surrounding `<style>` element.
    pub rules: String,
    /// Script to run alongside the rules, without `<script>` tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behavior_patch: Option<String>,
}

impl StylePayload {
    /// Renders the payload as HTML for hosts that inject raw markup.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(script) = &self.behavior_patch {
            html.push_str("<script>\n");
            html.push_str(script);
            html.push_str("\n</script>\n");
        }
        html.push_str("<style>\n");
        html.push_str(&self.rules);
        html.push_str("</style>\n");
        html
    }
}

/// Generates the style payload for a configuration.
///
/// Pure and total: the same configuration always yields byte-identical
/// output.
pub fn generate_style(config: &AccessibilityConfig) -> StylePayload {
    let flags = config.flags();
    let mut ctx = StyleContext::new(ThemeVariant::for_flags(&flags), config.change_count());
    for fragment in FRAGMENTS {
        if fragment.applies_to(&flags) {
            ctx.write(*fragment);
        }
    }
    ctx.finish()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        high_contrast: bool,
        large_text: bool,
        color_blind: bool,
        count: u64,
    ) -> AccessibilityConfig {
        AccessibilityConfig::new(
            AccessibilityFlags::new(high_contrast, large_text, color_blind),
            count,
        )
    }

    fn all_configs() -> Vec<AccessibilityConfig> {
        let mut configs = Vec::new();
        for h in [false, true] {
            for l in [false, true] {
                for c in [false, true] {
                    configs.push(config(h, l, c, 7));
                }
            }
        }
        configs
    }

    #[test]
    fn generation_is_deterministic() {
        for config in all_configs() {
            assert_eq!(generate_style(&config), generate_style(&config));
        }
    }

    #[test]
    fn dark_rules_iff_high_contrast() {
        let dark = DarkTheme.css();
        let light = LightTheme.css();
        for config in all_configs() {
            let payload = generate_style(&config);
            assert_eq!(payload.rules.contains(&dark), config.high_contrast());
            assert_eq!(payload.rules.contains(&light), !config.high_contrast());
        }
    }

    #[test]
    fn typography_overlay_iff_large_text() {
        let overlay = TypographyOverlay.css();
        for config in all_configs() {
            let payload = generate_style(&config);
            assert_eq!(payload.rules.contains(&overlay), config.large_text());
        }
    }

    #[test]
    fn tooltip_override_and_patch_iff_high_contrast() {
        let tooltip = TooltipOverride.css();
        for config in all_configs() {
            let payload = generate_style(&config);
            assert_eq!(payload.rules.contains(&tooltip), config.high_contrast());
            assert_eq!(payload.rules.contains(".hoverlabel"), config.high_contrast());
            assert_eq!(payload.behavior_patch.is_some(), config.high_contrast());
        }
    }

    #[test]
    fn color_blind_does_not_change_output() {
        for h in [false, true] {
            for l in [false, true] {
                assert_eq!(
                    generate_style(&config(h, l, false, 3)),
                    generate_style(&config(h, l, true, 3))
                );
            }
        }
    }

    #[test]
    fn four_rule_combinations_are_distinct() {
        let mut outputs: Vec<String> = Vec::new();
        for h in [false, true] {
            for l in [false, true] {
                outputs.push(generate_style(&config(h, l, false, 0)).rules);
            }
        }
        for (i, a) in outputs.iter().enumerate() {
            for b in &outputs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn revision_token_distinguishes_rerenders() {
        let first = generate_style(&config(true, false, false, 1));
        let second = generate_style(&config(true, false, false, 2));
        assert_ne!(first.rules, second.rules);
        assert!(first.rules.starts_with("/* accessibility revision 1 (dark theme) */"));
        assert_eq!(second.revision, 2);
    }

    #[test]
    fn overlay_is_appended_after_theme() {
        let payload = generate_style(&config(true, true, false, 2));
        let theme_at = payload.rules.find(&DarkTheme.css()).unwrap();
        let overlay_at = payload.rules.find(&TypographyOverlay.css()).unwrap();
        assert!(theme_at < overlay_at);
        assert_eq!(payload.variant, ThemeVariant::Dark);
    }

    #[test]
    fn active_fragments_follow_decision_table() {
        let flags = AccessibilityFlags::new(true, true, false);
        assert_eq!(
            active_fragments(&flags),
            vec![
                DarkTheme.name(),
                TooltipOverride.name(),
                TooltipObserver.name(),
                TypographyOverlay.name()
            ]
        );
        let flags = AccessibilityFlags::new(false, false, true);
        assert_eq!(active_fragments(&flags), vec![LightTheme.name()]);
    }

    #[test]
    fn html_wraps_script_before_style() {
        let payload = generate_style(&config(true, false, false, 1));
        let html = payload.to_html();
        assert!(html.starts_with("<script>\n"));
        assert!(html.contains("</script>\n<style>\n"));
        assert!(html.ends_with("</style>\n"));

        let light = generate_style(&config(false, false, false, 1)).to_html();
        assert!(!light.contains("<script>"));
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = generate_style(&config(true, false, false, 4));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["variant"], "dark");
        assert_eq!(json["revision"], 4);
        assert!(json["behaviorPatch"].is_string());

        let light = serde_json::to_value(generate_style(&config(false, false, false, 0))).unwrap();
        assert!(light.get("behaviorPatch").is_none());
    }
}

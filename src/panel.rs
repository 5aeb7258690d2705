//! Bridge between the host page framework and an [`AccessibilitySession`].
//!
//! The host owns the live page: it renders the toggle controls, re-runs the
//! page script and injects raw style text. [`PresentationAdapter`] is the
//! seam to that host; [`AccessibilityPanel`] drives one page cycle through
//! it.

use tracing::debug;

use crate::config::{AccessibilityFlags, Flag, FlagsUpdate};
use crate::session::AccessibilitySession;
use crate::style::StylePayload;

/// Notice shown under the toggles.
pub const WCAG_NOTICE: &str =
    "💡 These options improve the accessibility of the application following WCAG 2.1 AA recommendations.";

/// Description of one accessibility toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleControl {
    /// Flag driven by this control.
    pub flag: Flag,
    /// Stable widget key, so the host keeps its state across re-renders.
    pub key: &'static str,
    pub label: &'static str,
    pub help: &'static str,
}

/// The three toggles, in display order.
pub const TOGGLE_CONTROLS: [ToggleControl; 3] = [
    ToggleControl {
        flag: Flag::HighContrast,
        key: "high_contrast_checkbox",
        label: "🌙 High contrast mode",
        help: "Switches to a dark theme with high contrast for better accessibility",
    },
    ToggleControl {
        flag: Flag::LargeText,
        key: "large_text_checkbox",
        label: "🔍 Larger text",
        help: "Increases text size for better readability",
    },
    ToggleControl {
        flag: Flag::ColorBlind,
        key: "color_blind_checkbox",
        label: "🎨 Color blind mode",
        help: "Uses colors that remain distinguishable for color blind users",
    },
];

/// Returns the control for a flag.
pub fn control_for(flag: Flag) -> &'static ToggleControl {
    match flag {
        Flag::HighContrast => &TOGGLE_CONTROLS[0],
        Flag::LargeText => &TOGGLE_CONTROLS[1],
        Flag::ColorBlind => &TOGGLE_CONTROLS[2],
    }
}

/// Host page framework primitives the panel relies on.
pub trait PresentationAdapter {
    /// Renders `control` and returns its value; `current` is the value the
    /// control should show when the user has not touched it.
    fn toggle_value(&mut self, control: &ToggleControl, current: bool) -> bool;

    /// Asks the host for a full synchronous re-render of the page.
    fn request_rerender(&mut self);

    /// Embeds the payload in the live page.
    fn inject(&mut self, payload: &StylePayload);
}

/// Drives the accessibility controls and style injection for a page.
pub struct AccessibilityPanel;

impl AccessibilityPanel {
    /// Reads the toggles and applies them to the session.
    ///
    /// Requests a re-render when any flag changed.
    pub fn sync<A: PresentationAdapter>(
        session: &mut AccessibilitySession,
        adapter: &mut A,
    ) -> FlagsUpdate {
        let current = session.flags();
        let mut flags = AccessibilityFlags::default();
        for control in &TOGGLE_CONTROLS {
            let value = adapter.toggle_value(control, current.get(control.flag));
            flags = flags.with(control.flag, value);
        }

        let update = session.apply_flags(flags);
        if update.changed {
            debug!(change_count = update.change_count, "requesting re-render");
            adapter.request_rerender();
        }
        update
    }

    /// Injects the session's current style payload.
    pub fn apply_styles<A: PresentationAdapter>(
        session: &mut AccessibilitySession,
        adapter: &mut A,
    ) {
        adapter.inject(session.style());
    }

    /// One page cycle: sync the toggles, then inject styles.
    ///
    /// When the toggles changed, injection is left to the re-render the
    /// sync requested.
    pub fn run<A: PresentationAdapter>(
        session: &mut AccessibilitySession,
        adapter: &mut A,
    ) -> FlagsUpdate {
        let update = Self::sync(session, adapter);
        if !update.changed {
            Self::apply_styles(session, adapter);
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host double: the user's toggle choices plus a log of host calls.
    #[derive(Default)]
    struct FakeHost {
        user: Option<AccessibilityFlags>,
        rendered: Vec<&'static str>,
        rerenders: usize,
        injected: Vec<StylePayload>,
    }

    impl PresentationAdapter for FakeHost {
        fn toggle_value(&mut self, control: &ToggleControl, current: bool) -> bool {
            self.rendered.push(control.key);
            self.user.map_or(current, |flags| flags.get(control.flag))
        }

        fn request_rerender(&mut self) {
            self.rerenders += 1;
        }

        fn inject(&mut self, payload: &StylePayload) {
            self.injected.push(payload.clone());
        }
    }

    #[test]
    fn untouched_controls_keep_current_values() {
        let mut session = AccessibilitySession::new();
        session.apply_flags(AccessibilityFlags::new(false, true, false));
        let mut host = FakeHost::default();

        let update = AccessibilityPanel::sync(&mut session, &mut host);
        assert!(!update.changed);
        assert_eq!(host.rerenders, 0);
        assert_eq!(
            host.rendered,
            vec!["high_contrast_checkbox", "large_text_checkbox", "color_blind_checkbox"]
        );
        assert!(session.flags().large_text);
    }

    #[test]
    fn toggle_requests_rerender_then_injects() {
        let mut session = AccessibilitySession::new();
        let mut host = FakeHost {
            user: Some(AccessibilityFlags::new(true, false, false)),
            ..FakeHost::default()
        };

        // The toggle is detected; the page must re-render before styling.
        let update = AccessibilityPanel::run(&mut session, &mut host);
        assert!(update.changed);
        assert_eq!(host.rerenders, 1);
        assert!(host.injected.is_empty());

        // The re-render settles and injects the new payload.
        let update = AccessibilityPanel::run(&mut session, &mut host);
        assert!(!update.changed);
        assert_eq!(host.rerenders, 1);
        assert_eq!(host.injected.len(), 1);
        assert_eq!(host.injected[0].revision, 1);
        assert!(host.injected[0].behavior_patch.is_some());
    }

    #[test]
    fn apply_styles_injects_current_payload() {
        let mut session = AccessibilitySession::new();
        let mut host = FakeHost::default();
        AccessibilityPanel::apply_styles(&mut session, &mut host);
        assert_eq!(host.injected.len(), 1);
        assert_eq!(host.injected[0].revision, 0);
        assert!(host.injected[0].behavior_patch.is_none());
    }

    #[test]
    fn controls_cover_every_flag() {
        for flag in Flag::ALL {
            assert_eq!(control_for(flag).flag, flag);
        }
        assert!(WCAG_NOTICE.contains("WCAG 2.1 AA"));
    }
}

//! Per-session accessibility context and the store that owns it.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::chart::ChartTheme;
use crate::config::{AccessibilityConfig, AccessibilityFlags, FlagsUpdate};
use crate::profile::AccessibilityProfile;
use crate::style::{StylePayload, generate_style};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from an [`AccessibilityProfile`].
pub trait Configurable {
    /// Applies a profile's settings, reporting whether anything changed.
    fn apply_profile(&mut self, profile: &AccessibilityProfile) -> FlagsUpdate;

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> AccessibilityProfile;
}

// ============================================================================
// AccessibilitySession
// ============================================================================

/// Accessibility state of one user session.
///
/// Owns the [`AccessibilityConfig`] and memoizes the style payload for the
/// current revision. A session is created with default flags and discarded
/// with the user session; nothing is shared between sessions.
///
/// # Example
///
/// ```
/// use dashboard_a11y::{AccessibilityFlags, AccessibilitySession};
///
/// let mut session = AccessibilitySession::new();
///
/// let update = session.apply_flags(AccessibilityFlags::new(true, false, false));
/// assert!(update.changed);
///
/// let style = session.style();
/// assert_eq!(style.revision, 1);
/// assert!(style.behavior_patch.is_some());
/// ```
#[derive(Debug, Default)]
pub struct AccessibilitySession {
    config: AccessibilityConfig,
    style_cache: Option<StylePayload>,
}

impl AccessibilitySession {
    /// Creates a session with all options off and a zero change counter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &AccessibilityConfig {
        &self.config
    }

    pub fn flags(&self) -> AccessibilityFlags {
        self.config.flags()
    }

    pub fn change_count(&self) -> u64 {
        self.config.change_count()
    }

    /// Overwrites the three flags.
    ///
    /// When the returned update reports `changed`, the caller must re-render
    /// the page before processing further input.
    pub fn apply_flags(&mut self, flags: AccessibilityFlags) -> FlagsUpdate {
        let previous = self.config.flags();
        let update = self.config.apply_flags(flags);
        if update.changed {
            debug!(
                changed = ?previous.diff(&flags),
                change_count = update.change_count,
                "accessibility flags changed"
            );
        }
        update
    }

    /// Style payload for the current configuration.
    ///
    /// Regenerated only when the change counter has moved since the last
    /// call; flags never change without the counter moving.
    pub fn style(&mut self) -> &StylePayload {
        let config = &self.config;
        let payload = self.style_cache.get_or_insert_with(|| generate_style(config));
        if payload.revision == config.change_count() {
            trace!(revision = payload.revision, "reusing style payload");
        } else {
            debug!(revision = config.change_count(), "regenerating style payload");
            *payload = generate_style(config);
        }
        payload
    }

    /// Palette and font sizes for charts drawn in this session.
    pub fn chart_theme(&self) -> ChartTheme {
        ChartTheme::for_flags(&self.config.flags())
    }

    /// Drops the memoized style payload.
    pub fn clear_cache(&mut self) {
        self.style_cache = None;
    }
}

impl Configurable for AccessibilitySession {
    /// Applies a profile through [`apply_flags`](AccessibilitySession::apply_flags),
    /// so the change counter ticks exactly as for a UI toggle.
    fn apply_profile(&mut self, profile: &AccessibilityProfile) -> FlagsUpdate {
        self.apply_flags((*profile).into())
    }

    fn export_profile(&self) -> AccessibilityProfile {
        self.config.flags().into()
    }
}

// ============================================================================
// SessionStore
// ============================================================================

/// Accessibility sessions keyed by host session id.
///
/// Sessions are created lazily on first access and live until
/// [`end_session`](Self::end_session). The store is owned by the host's
/// single-threaded page-update loop and needs no locking.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, AccessibilitySession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `id`, creating it with defaults if absent.
    pub fn session(&mut self, id: &str) -> &mut AccessibilitySession {
        self.sessions.entry(id.to_string()).or_insert_with(|| {
            debug!(session = id, "creating accessibility session");
            AccessibilitySession::new()
        })
    }

    /// Returns the configuration for `id`, creating the session if absent.
    pub fn config(&mut self, id: &str) -> &AccessibilityConfig {
        self.session(id).config()
    }

    /// Returns the change counter for `id`, creating the session if absent.
    pub fn change_count(&mut self, id: &str) -> u64 {
        self.session(id).change_count()
    }

    /// Returns an existing session without creating one.
    pub fn get(&self, id: &str) -> Option<&AccessibilitySession> {
        self.sessions.get(id)
    }

    /// Discards a session's state.
    pub fn end_session(&mut self, id: &str) -> Option<AccessibilitySession> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            debug!(session = id, "discarding accessibility session");
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::PaletteKind;
    use crate::style::{DarkTheme, LightTheme, StyleFragment, ThemeVariant, TypographyOverlay};

    #[test]
    fn store_creates_sessions_lazily() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());
        assert!(store.get("alice").is_none());

        let config = *store.config("alice");
        assert_eq!(config, AccessibilityConfig::default());
        assert_eq!(store.len(), 1);

        // Idempotent
        store.config("alice");
        assert_eq!(store.change_count("alice"), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sessions_are_independent() {
        let mut store = SessionStore::new();
        store
            .session("alice")
            .apply_flags(AccessibilityFlags::new(true, false, false));

        assert_eq!(store.change_count("alice"), 1);
        assert_eq!(store.change_count("bob"), 0);
        assert!(!store.config("bob").high_contrast());
    }

    #[test]
    fn ending_a_session_discards_state() {
        let mut store = SessionStore::new();
        store
            .session("alice")
            .apply_flags(AccessibilityFlags::new(false, true, false));

        let ended = store.end_session("alice").unwrap();
        assert_eq!(ended.change_count(), 1);
        assert!(!store.contains("alice"));
        assert!(store.end_session("alice").is_none());

        // A new session with the same id starts fresh.
        assert_eq!(store.change_count("alice"), 0);
    }

    #[test]
    fn toggle_scenario() {
        let mut session = AccessibilitySession::new();
        assert_eq!(session.change_count(), 0);

        // Enable high contrast
        let update = session.apply_flags(AccessibilityFlags::new(true, false, false));
        assert!(update.changed);
        assert_eq!(update.change_count, 1);
        let style = session.style().clone();
        assert_eq!(style.variant, ThemeVariant::Dark);
        assert!(style.rules.contains(&DarkTheme.css()));
        assert!(!style.rules.contains(&TypographyOverlay.css()));
        assert!(style.behavior_patch.is_some());

        // Same flags again
        let update = session.apply_flags(AccessibilityFlags::new(true, false, false));
        assert!(!update.changed);
        assert_eq!(session.change_count(), 1);

        // Add large text
        let update = session.apply_flags(AccessibilityFlags::new(true, true, false));
        assert!(update.changed);
        assert_eq!(update.change_count, 2);
        let style = session.style().clone();
        assert!(style.rules.contains(&DarkTheme.css()));
        assert!(style.rules.contains(&TypographyOverlay.css()));

        // Light theme with color blind palette
        let update = session.apply_flags(AccessibilityFlags::new(false, false, true));
        assert!(update.changed);
        assert_eq!(update.change_count, 3);
        let style = session.style().clone();
        assert!(style.rules.contains(&LightTheme.css()));
        assert!(style.behavior_patch.is_none());
        assert!(!style.rules.contains("color_blind"));
        assert!(!style.rules.contains("color-blind"));
        assert!(session.flags().color_blind);
        assert_eq!(session.chart_theme().palette, PaletteKind::ColorBlindSafe);
    }

    #[test]
    fn style_is_memoized_per_revision() {
        let mut session = AccessibilitySession::new();
        let first = session.style().clone();
        assert_eq!(first.revision, 0);
        assert_eq!(session.style(), &first);

        session.apply_flags(AccessibilityFlags::new(false, true, false));
        let second = session.style().clone();
        assert_eq!(second.revision, 1);
        assert_ne!(first, second);

        session.clear_cache();
        assert_eq!(session.style(), &second);
    }

    #[test]
    fn profile_goes_through_mutator() {
        let mut session = AccessibilitySession::new();
        let profile = AccessibilityProfile::new()
            .with_high_contrast(true)
            .with_large_text(true);

        let update = session.apply_profile(&profile);
        assert!(update.changed);
        assert_eq!(update.change_count, 1);
        assert_eq!(session.export_profile(), profile);

        let update = session.apply_profile(&profile);
        assert!(!update.changed);
        assert_eq!(session.change_count(), 1);
    }
}

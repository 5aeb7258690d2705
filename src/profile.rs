//! Serializable accessibility profile for host/front-end communication.
//!
//! An [`AccessibilityProfile`] captures the three flags in a JSON-friendly
//! form. The change counter is not part of it: the counter belongs to the
//! running session, a profile is only a set of preferences.
//!
//! # Example
//!
//! ```
//! use dashboard_a11y::AccessibilityProfile;
//!
//! let profile = AccessibilityProfile::new().with_high_contrast(true);
//!
//! // Serialize to JSON for the front-end
//! let json = profile.to_json().unwrap();
//! assert_eq!(json, r#"{"highContrast":true,"largeText":false,"colorBlind":false}"#);
//!
//! // Restore it later
//! let restored = AccessibilityProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::AccessibilityFlags;

// ============================================================================
// AccessibilityProfile
// ============================================================================

/// A serializable set of accessibility preferences.
///
/// # JSON Format
///
/// ```json
/// {
///   "highContrast": true,
///   "largeText": false,
///   "colorBlind": false
/// }
/// ```
///
/// Missing fields default to `false`, so `{}` is the default profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityProfile {
    /// Dark, high-contrast page palette.
    pub high_contrast: bool,

    /// Enlarged typography.
    pub large_text: bool,

    /// Color-blind-safe chart palettes.
    pub color_blind: bool,
}

impl AccessibilityProfile {
    /// Creates a profile with every option off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the high contrast option.
    pub fn with_high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// Sets the large text option.
    pub fn with_large_text(mut self, enabled: bool) -> Self {
        self.large_text = enabled;
        self
    }

    /// Sets the color blind option.
    pub fn with_color_blind(mut self, enabled: bool) -> Self {
        self.color_blind = enabled;
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the JSON schema of the profile.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(AccessibilityProfile)
    }
}

impl From<AccessibilityProfile> for AccessibilityFlags {
    fn from(profile: AccessibilityProfile) -> Self {
        AccessibilityFlags::new(profile.high_contrast, profile.large_text, profile.color_blind)
    }
}

impl From<AccessibilityFlags> for AccessibilityProfile {
    fn from(flags: AccessibilityFlags) -> Self {
        Self {
            high_contrast: flags.high_contrast,
            large_text: flags.large_text,
            color_blind: flags.color_blind,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

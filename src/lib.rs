//! dashboard-a11y: accessibility style engine for the classification dashboard
//!
//! This crate keeps the per-session accessibility flags of the dashboard and
//! turns them into the style text, behavior patch and chart theme the host
//! page injects.
//!
//! # Example
//!
//! ```
//! use dashboard_a11y::{AccessibilityFlags, AccessibilitySession, ThemeVariant};
//!
//! let mut session = AccessibilitySession::new();
//!
//! // Toggling a flag bumps the revision
//! let update = session.apply_flags(AccessibilityFlags::new(true, true, false));
//! assert!(update.changed);
//! assert_eq!(update.change_count, 1);
//!
//! // Re-applying the same flags does not
//! assert!(!session.apply_flags(AccessibilityFlags::new(true, true, false)).changed);
//!
//! let style = session.style();
//! assert_eq!(style.variant, ThemeVariant::Dark);
//! assert!(style.rules.contains("accessibility revision 1"));
//! ```
//!
//! # Serializable Profiles
//!
//! Settings travel between processes as an [`AccessibilityProfile`], applied
//! through the [`Configurable`] trait:
//!
//! ```
//! use dashboard_a11y::{AccessibilityProfile, AccessibilitySession, Configurable};
//!
//! let mut session = AccessibilitySession::new();
//!
//! let profile = AccessibilityProfile::from_json(r#"{"largeText": true}"#).unwrap();
//! session.apply_profile(&profile);
//! assert!(session.flags().large_text);
//!
//! let json = session.export_profile().to_json().unwrap();
//! assert!(json.contains("\"largeText\":true"));
//! ```

pub mod chart;
mod color;
mod config;
mod css;
pub mod display;
mod error;
mod panel;
mod profile;
mod session;
pub mod style;

pub use chart::{ChartFonts, ChartTheme, HoverLabel, PaletteKind};
pub use color::{Color, WCAG_AA_TEXT};
pub use config::{AccessibilityConfig, AccessibilityFlags, Flag, FlagsUpdate};
pub use css::{Rule, StyleSheet};
pub use error::{Error, Result};
pub use panel::{
    AccessibilityPanel, PresentationAdapter, TOGGLE_CONTROLS, ToggleControl, WCAG_NOTICE,
    control_for,
};
pub use profile::AccessibilityProfile;
pub use session::{AccessibilitySession, Configurable, SessionStore};
pub use style::{
    StyleContext, StyleFragment, StylePayload, ThemeVariant, active_fragments, generate_style,
};

//! Accessibility flags and the per-session configuration record.

use std::fmt;

// ============================================================================
// Flag
// ============================================================================

/// One of the three independent accessibility settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Dark, high-contrast page palette.
    HighContrast,
    /// Enlarged typography.
    LargeText,
    /// Color-blind-safe chart palette.
    ColorBlind,
}

impl Flag {
    /// All flags, in display order.
    pub const ALL: [Flag; 3] = [Flag::HighContrast, Flag::LargeText, Flag::ColorBlind];

    /// Stable snake_case name of the flag.
    pub fn name(self) -> &'static str {
        match self {
            Flag::HighContrast => "high_contrast",
            Flag::LargeText => "large_text",
            Flag::ColorBlind => "color_blind",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// AccessibilityFlags
// ============================================================================

/// The three accessibility toggles, compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessibilityFlags {
    pub high_contrast: bool,
    pub large_text: bool,
    pub color_blind: bool,
}

impl AccessibilityFlags {
    pub const fn new(high_contrast: bool, large_text: bool, color_blind: bool) -> Self {
        Self {
            high_contrast,
            large_text,
            color_blind,
        }
    }

    /// Returns the value of a single flag.
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::HighContrast => self.high_contrast,
            Flag::LargeText => self.large_text,
            Flag::ColorBlind => self.color_blind,
        }
    }

    /// Returns a copy with one flag replaced.
    pub fn with(mut self, flag: Flag, value: bool) -> Self {
        match flag {
            Flag::HighContrast => self.high_contrast = value,
            Flag::LargeText => self.large_text = value,
            Flag::ColorBlind => self.color_blind = value,
        }
        self
    }

    /// Flags whose value differs between `self` and `other`.
    pub fn diff(&self, other: &Self) -> Vec<Flag> {
        Flag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag) != other.get(*flag))
            .collect()
    }
}

// ============================================================================
// AccessibilityConfig
// ============================================================================

/// Result of applying a full set of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagsUpdate {
    /// True if any flag differs from the previous snapshot. The caller must
    /// trigger a full re-render before accepting more input.
    pub changed: bool,
    /// Change counter after the update.
    pub change_count: u64,
}

/// Accessibility state owned by one user session.
///
/// The change counter ticks once per mutation event that alters at least
/// one flag, however many flags changed in that event. It is only embedded
/// in generated output as a revision token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilityConfig {
    flags: AccessibilityFlags,
    change_count: u64,
}

impl AccessibilityConfig {
    /// Creates a config with the given flags and counter.
    pub fn new(flags: AccessibilityFlags, change_count: u64) -> Self {
        Self {
            flags,
            change_count,
        }
    }

    pub fn flags(&self) -> AccessibilityFlags {
        self.flags
    }

    pub fn high_contrast(&self) -> bool {
        self.flags.high_contrast
    }

    pub fn large_text(&self) -> bool {
        self.flags.large_text
    }

    pub fn color_blind(&self) -> bool {
        self.flags.color_blind
    }

    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    /// Overwrites all three flags.
    ///
    /// The write is unconditional; the counter only moves when the new
    /// flags differ from the previous ones.
    pub fn apply_flags(&mut self, flags: AccessibilityFlags) -> FlagsUpdate {
        let changed = self.flags != flags;
        self.flags = flags;
        if changed {
            self.change_count += 1;
        }
        FlagsUpdate {
            changed,
            change_count: self.change_count,
        }
    }
}

//! Colour themes.

use serde::{Deserialize, Serialize};

/// Accent palette applied across the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Green accent (the default).
    #[default]
    Classic,
    /// Pink accent.
    Sakura,
}

impl Theme {
    /// Returns the identifier used in config files.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Sakura => "sakura",
        }
    }

    /// Returns the accent colour as RGB.
    pub fn accent_rgb(self) -> (u8, u8, u8) {
        match self {
            // #1DB954
            Theme::Classic => (0x1d, 0xb9, 0x54),
            // #ec4899
            Theme::Sakura => (0xec, 0x48, 0x99),
        }
    }

    /// Returns the other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Classic => Theme::Sakura,
            Theme::Sakura => Theme::Classic,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Sakura => "Sakura",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Theme::Classic.toggled(), Theme::Sakura);
        assert_eq!(Theme::Sakura.toggled(), Theme::Classic);
    }

    #[test]
    fn test_accent_colors() {
        assert_eq!(Theme::Classic.accent_rgb(), (29, 185, 84));
        assert_eq!(Theme::Sakura.accent_rgb(), (236, 72, 153));
    }
}

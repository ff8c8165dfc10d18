//! Theme system for consistent UI colors across dark and light modes.
//!
//! The variant follows the persisted config preference rather than OS
//! detection, matching the `"LIGHT"`/`"DARK"` value in the config file.

use crate::config::ThemeMode;
use ratatui::style::Color;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color for rejected drops and failures
    pub error: Color,
    /// Warning state color
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels
    pub text_secondary: Color,
    /// Muted text color for help text and empty seats
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels
    pub surface: Color,

    /// Occupied seat color
    pub occupied: Color,
    /// Seat currently carried by the cursor
    pub grabbed: Color,
}

impl Theme {
    /// Resolves the theme from the persisted preference.
    #[must_use]
    pub const fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            occupied: Color::LightBlue,
            grabbed: Color::Yellow,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Accent colors are darkened so they stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            occupied: Color::Blue,
            grabbed: Color::Rgb(180, 100, 0),
        }
    }
}

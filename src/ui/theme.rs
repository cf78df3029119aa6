//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;
use serde::{Deserialize, Serialize};

use crate::data::SeverityCategory;

/// Which theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Probe the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for excellent/optimal/normal readings.
    pub success: Color,
    /// Color for good readings and goal headings.
    pub primary: Color,
    /// Color for readings that need attention.
    pub warning: Color,
    /// Color for critical readings.
    pub destructive: Color,
    /// Fallback color for unrecognized labels.
    pub secondary: Color,
    /// Foreground for badge text drawn on a severity color.
    pub badge_text: Color,
    /// Color for captions, units and other secondary text.
    pub muted: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Unfilled part of progress bars.
    pub track: Color,
    /// Style for headings.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            success: Color::Green,
            primary: Color::Cyan,
            warning: Color::Yellow,
            destructive: Color::Red,
            secondary: Color::Gray,
            badge_text: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            track: Color::DarkGray,
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            success: Color::Green,
            primary: Color::Blue,
            warning: Color::Yellow,
            destructive: Color::Red,
            secondary: Color::DarkGray,
            badge_text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            track: Color::Gray,
            header: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a [`ThemeMode`]. Only `Auto` touches the terminal.
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::auto_detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Base color for a severity category.
    pub fn severity_color(&self, category: SeverityCategory) -> Color {
        match category {
            SeverityCategory::Success => self.success,
            SeverityCategory::Primary => self.primary,
            SeverityCategory::Warning => self.warning,
            SeverityCategory::Destructive => self.destructive,
            SeverityCategory::Secondary => self.secondary,
        }
    }

    /// Foreground style for text in a severity tone.
    pub fn severity_style(&self, category: SeverityCategory) -> Style {
        let style = Style::default().fg(self.severity_color(category));
        match category {
            SeverityCategory::Destructive => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }

    /// Filled badge style for a severity category.
    pub fn badge_style(&self, category: SeverityCategory) -> Style {
        Style::default()
            .fg(self.badge_text)
            .bg(self.severity_color(category))
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

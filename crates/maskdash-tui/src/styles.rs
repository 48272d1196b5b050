//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use maskdash_assets::AssetState;
use maskdash_core::Rgb;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub muted: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            muted: Color::DarkGray,
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlight for the selected navigation entry.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for an asset's availability marker; `None` while unprobed.
    #[must_use]
    pub fn asset_style(&self, state: Option<&AssetState>) -> Style {
        match state {
            Some(AssetState::Found { .. }) => Style::default().fg(self.success),
            Some(AssetState::Missing | AssetState::Unreadable { .. }) => {
                Style::default().fg(self.error)
            }
            None => self.muted_style(),
        }
    }
}

/// Terminal color for a chart series color.
#[must_use]
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

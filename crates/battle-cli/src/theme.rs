//! Styling rules for the battle-menu panels.

use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct Theme;

impl Theme {
    pub fn border(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn option(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn highlighted_option(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn status(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn help(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
    }

    /// Prefix drawn in front of the highlighted option.
    pub fn cursor_glyph(&self) -> &'static str {
        "> "
    }
}

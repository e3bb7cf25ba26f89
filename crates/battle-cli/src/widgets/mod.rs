//! Ratatui widgets composing the battle-menu screen.

pub mod menu_panel;
pub mod status_bar;

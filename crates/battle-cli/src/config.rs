//! CLI-specific configuration for the terminal battle menu.
use std::env;

/// CLI terminal UI configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_PANEL_WIDTH` - Width of each menu panel in columns (default: 18)
    /// - `CLI_HELP_BAR` - Show the key-binding help bar, 0 to hide (default: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("CLI_PANEL_WIDTH") {
            config.ui.panel_width = width.max(8);
        }
        if let Some(help) = read_env::<u8>("CLI_HELP_BAR") {
            config.ui.show_help_bar = help != 0;
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of one menu panel in columns (including borders).
    pub panel_width: u16,
    /// Whether the bottom help bar is drawn.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            panel_width: 18,
            show_help_bar: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = CliConfig::default();
        assert_eq!(config.ui.panel_width, 18);
        assert!(config.ui.show_help_bar);
    }
}

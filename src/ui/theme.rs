//! Visual theme and styling.

use console::Style;

/// Styles for runner notices.
///
/// Markers are never styled: harnesses match them byte for byte.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for progress notices (magenta).
    pub info: Style,
    /// Style for skip and no-op notices (dim).
    pub dim: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            info: Style::new(),
            dim: Style::new(),
            error: Style::new(),
        }
    }
}

/// Whether to color output, honoring `NO_COLOR` and TTY detection.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = SetupTheme::plain();
        assert_eq!(theme.info.apply_to("hi").to_string(), "hi");
        assert_eq!(theme.error.apply_to("bad").to_string(), "bad");
    }
}

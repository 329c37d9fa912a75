//! Canvas Configuration
//!
//! Startup parameters. Everything is fixed at compile time; there is no
//! config file, command line or environment lookup.

use anyhow::{ensure, Context};

use crate::color::Rgb;
use crate::theme::{Theme, ThemeName};

/// Parameters the canvas is started with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Window title
    pub title: String,
    /// Initial window width in physical pixels
    pub width: u32,
    /// Initial window height in physical pixels
    pub height: u32,
    /// Freehand line width in pixels (round caps)
    pub line_width: u32,
    /// Theme selected at startup
    pub theme: ThemeName,
    /// Right-click stamp size in pixels
    pub stamp_width: u32,
    pub stamp_height: u32,
    /// Right-click stamp fill color
    pub stamp_color: Rgb,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "Draw".to_string(),
            width: 600,
            height: 600,
            line_width: 8,
            theme: ThemeName::Dark,
            stamp_width: 100,
            stamp_height: 100,
            stamp_color: Rgb(0x0000ff),
        }
    }
}

impl CanvasConfig {
    /// Validate that parameters are in acceptable ranges
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.title.is_empty(), "Window title must not be empty");
        ensure!(
            self.width > 0 && self.height > 0,
            "Window size must be positive, got {}x{}",
            self.width,
            self.height
        );
        ensure!(self.line_width > 0, "Line width must be positive");
        ensure!(
            self.stamp_width > 0 && self.stamp_height > 0,
            "Stamp size must be positive, got {}x{}",
            self.stamp_width,
            self.stamp_height
        );
        Ok(())
    }

    /// Resolve the configured theme
    pub fn theme(&self) -> anyhow::Result<Theme> {
        Theme::from_name(self.theme).context("Failed to resolve canvas theme")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_canvas() {
        let config = CanvasConfig::default();
        assert_eq!(config.title, "Draw");
        assert_eq!((config.width, config.height), (600, 600));
        assert_eq!(config.line_width, 8);
        assert_eq!(config.theme, ThemeName::Dark);
        assert_eq!((config.stamp_width, config.stamp_height), (100, 100));
        assert_eq!(config.stamp_color, Rgb(0x0000ff));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_sizes() {
        let config = CanvasConfig {
            width: 0,
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CanvasConfig {
            line_width: 0,
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CanvasConfig {
            stamp_height: 0,
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_title() {
        let config = CanvasConfig {
            title: String::new(),
            ..CanvasConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn theme_error_has_context() {
        let config = CanvasConfig {
            theme: ThemeName::Orange,
            ..CanvasConfig::default()
        };
        let err = config.theme().unwrap_err();
        assert_eq!(err.to_string(), "Failed to resolve canvas theme");
        assert!(format!("{:#}", err).contains("unsupported theme"));
    }
}

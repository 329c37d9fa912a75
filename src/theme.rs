//! Color Themes
//!
//! A theme is picked once at startup; there is no runtime switching.

use anyhow::bail;

use crate::color::Rgb;

/// Named themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Dark,
    Light,
    /// Reserved, no palette yet
    Orange,
}

impl Default for ThemeName {
    fn default() -> Self {
        Self::Dark
    }
}

/// Background/foreground color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Theme {
    /// Resolve a theme name to its palette
    pub fn from_name(name: ThemeName) -> anyhow::Result<Self> {
        match name {
            ThemeName::Dark => Ok(Self {
                background: Rgb(0x101010),
                foreground: Rgb(0xefefef),
            }),
            ThemeName::Light => Ok(Self {
                background: Rgb(0xffffff),
                foreground: Rgb(0x000000),
            }),
            ThemeName::Orange => bail!("unsupported theme: {:?}", name),
        }
    }
}

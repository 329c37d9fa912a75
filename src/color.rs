//! Color Utilities
//!
//! Colors are specified as packed `0xRRGGBB` values in sRGB space.
//!
//! Color workflow:
//! - Theme and stamp colors are sRGB
//! - Canvas texture uses a linear format, so colors are converted before upload
//! - Surface prefers an sRGB format, wgpu handles linear → sRGB on write

/// A packed `0xRRGGBB` sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Opaque sRGB components in 0.0-1.0
    pub fn to_srgb_rgba(self) -> [f32; 4] {
        [
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            1.0,
        ]
    }

    /// Opaque linear components in 0.0-1.0, as stored in the canvas texture
    pub fn to_linear_rgba(self) -> [f32; 4] {
        srgb_to_linear_rgba(self.to_srgb_rgba())
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Convert a single sRGB color component to linear space
///
/// sRGB uses a gamma curve with a linear segment near black.
/// Formula from: https://en.wikipedia.org/wiki/SRGB#From_sRGB_to_CIE_XYZ
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_to_linear`]
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert sRGB color (0.0-1.0) to linear RGB, alpha is passed through
#[inline]
pub fn srgb_to_linear_rgba(srgb: [f32; 4]) -> [f32; 4] {
    [
        srgb_to_linear(srgb[0]),
        srgb_to_linear(srgb[1]),
        srgb_to_linear(srgb[2]),
        srgb[3], // Alpha is already linear
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear() {
        // Test black
        assert_eq!(srgb_to_linear(0.0), 0.0);

        // Test white
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 0.001);

        // Test middle gray (sRGB 0.5 ≈ linear 0.214)
        let linear = srgb_to_linear(0.5);
        assert!((linear - 0.214).abs() < 0.01);
    }

    #[test]
    fn test_linear_to_srgb_inverts() {
        for v in [0.0, 0.002, 0.2, 0.5, 0.9, 1.0] {
            assert!((linear_to_srgb(srgb_to_linear(v)) - v).abs() < 0.0001);
        }
    }

    #[test]
    fn test_channels() {
        let c = Rgb(0x12ab_ef);
        assert_eq!(c.red(), 0x12);
        assert_eq!(c.green(), 0xab);
        assert_eq!(c.blue(), 0xef);
        assert_eq!(c.to_string(), "#12abef");
    }

    #[test]
    fn test_stamp_blue() {
        let linear = Rgb(0x0000ff).to_linear_rgba();
        assert_eq!(linear[0], 0.0);
        assert_eq!(linear[1], 0.0);
        assert!((linear[2] - 1.0).abs() < 0.001);
        assert_eq!(linear[3], 1.0);
    }

    #[test]
    fn test_dark_background_is_near_black() {
        // #101010 is dark gray in sRGB, much darker still in linear
        let srgb = Rgb(0x101010).to_srgb_rgba();
        let linear = Rgb(0x101010).to_linear_rgba();
        assert!(linear[0] < srgb[0]);
        assert!(linear[0] > 0.0 && linear[0] < 0.01);
        assert_eq!(linear[3], 1.0);
    }
}

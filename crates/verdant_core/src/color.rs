//! RGBA colour type used for materials, lights, grid lines and the clear colour.
//!
//! Stored as four `f32` values (0.0 – 1.0).  The palette constants match the
//! classic demo palette so scenes read the same as their reference pictures.
//!
//! # Example
//! ```rust,ignore
//! use verdant_core::Color;
//!
//! let grass = Color::GREEN;
//! let soil = Color::rgba(0.5, 0.4, 0.3, 1.0);
//! let [r, g, b, a] = soil.to_array();
//! ```
//!
//! Configs in `verdant_app` deserialise colours as `[f32; 4]` and convert
//! through `From`.

/// RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    /// Opaque colour from red, green, blue components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour from all four components.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct from 8-bit components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Returns `[r, g, b, a]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to a `wgpu::Color` for use as a clear value.
    #[cfg(feature = "gpu")]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }

    // ── Palette ─────────────────────────────────────────────────────────────

    pub const WHITE:      Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RAY_WHITE:  Self = Self::from_rgb8(245, 245, 245);

    pub const RED:        Self = Self::from_rgb8(230, 41, 55);
    pub const GREEN:      Self = Self::from_rgb8(0, 228, 48);
    pub const BLUE:       Self = Self::from_rgb8(0, 121, 241);
    pub const YELLOW:     Self = Self::from_rgb8(253, 249, 0);
}

impl From<[f32; 4]> for Color {
    fn from(a: [f32; 4]) -> Self {
        Self::rgba(a[0], a[1], a[2], a[3])
    }
}

impl From<[f32; 3]> for Color {
    fn from(a: [f32; 3]) -> Self {
        Self::rgb(a[0], a[1], a[2])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_scales_to_unit_range() {
        let c = Color::from_rgb8(255, 0, 51);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn array_conversions_agree() {
        let c: Color = [0.1, 0.2, 0.3, 0.4].into();
        let back: [f32; 4] = c.into();
        assert_eq!(back, [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Color::from([0.5, 0.5, 0.5]).a, 1.0);
    }
}

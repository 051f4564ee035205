use std::fmt;

use super::convert;
use super::space::ColorSpace;

/// Canonical, fully resolved color.
///
/// Invariants:
/// - channels are straight-alpha sRGB, each clamped to `[0, 1]`
/// - `space` records the color mode that was active when the color was built
///
/// Because the channels are stored already converted to RGB, a color keeps
/// rendering the same way after the sketch switches to another mode.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    rgba: [f32; 4],
    space: ColorSpace,
}

impl Default for Color {
    fn default() -> Self {
        Self::transparent()
    }
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { rgba: [0.0; 4], space: ColorSpace::Rgb }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { rgba: [0.0, 0.0, 0.0, 1.0], space: ColorSpace::Rgb }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { rgba: [1.0; 4], space: ColorSpace::Rgb }
    }

    /// Creates a color from normalized straight RGBA components.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_normalized(ColorSpace::Rgb, [r, g, b, a])
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a color from normalized channels expressed in `space`.
    ///
    /// Components are clamped to `[0, 1]` before conversion; the color records `space`.
    pub fn from_normalized(space: ColorSpace, channels: [f32; 4]) -> Self {
        let unit = channels.map(|c| c.clamp(0.0, 1.0));
        let rgba = match space {
            ColorSpace::Rgb => unit,
            ColorSpace::Hsb => convert::hsba_to_rgba(unit),
            ColorSpace::Hsl => convert::hsla_to_rgba(unit),
        };
        Self { rgba, space }
    }

    /// Same channels, recorded as created under `space`.
    #[inline]
    pub const fn with_space(self, space: ColorSpace) -> Self {
        Self { rgba: self.rgba, space }
    }

    /// Normalized straight RGBA components.
    #[inline]
    pub const fn rgba(self) -> [f32; 4] {
        self.rgba
    }

    #[inline]
    pub const fn alpha(self) -> f32 {
        self.rgba[3]
    }

    /// The color mode this color was created under.
    #[inline]
    pub const fn space(self) -> ColorSpace {
        self.space
    }

    /// Channels rounded to bytes, the way they are written to pixel buffers.
    #[inline]
    pub fn levels(self) -> [u8; 4] {
        self.rgba.map(|c| (c * 255.0).round() as u8)
    }

    /// Normalized `[hue, saturation, brightness, alpha]`.
    #[inline]
    pub fn hsba(self) -> [f32; 4] {
        convert::rgba_to_hsba(self.rgba)
    }

    /// Normalized `[hue, saturation, lightness, alpha]`.
    #[inline]
    pub fn hsla(self) -> [f32; 4] {
        convert::rgba_to_hsla(self.rgba)
    }

    /// Normalized channels expressed in `space`.
    #[inline]
    pub fn normalized_in(self, space: ColorSpace) -> [f32; 4] {
        match space {
            ColorSpace::Rgb => self.rgba,
            ColorSpace::Hsb => self.hsba(),
            ColorSpace::Hsl => self.hsla(),
        }
    }

    /// `rgba(r,g,b,a)` with byte channels and a decimal alpha.
    pub fn to_css_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.levels();
        write!(f, "rgba({},{},{},{})", r, g, b, self.alpha())
    }
}

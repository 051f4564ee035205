use std::fmt;
use std::str::FromStr;

/// Interpretation of a color's three non-alpha channels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Hue, saturation, brightness (a.k.a. HSV).
    Hsb,
    /// Hue, saturation, lightness.
    Hsl,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Rgb, ColorSpace::Hsb, ColorSpace::Hsl];

    /// Dense index, usable for per-space tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ColorSpace::Rgb => 0,
            ColorSpace::Hsb => 1,
            ColorSpace::Hsl => 2,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsb => "hsb",
            ColorSpace::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known color space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorSpace(pub String);

impl fmt::Display for UnknownColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color space {:?}", self.0)
    }
}

impl std::error::Error for UnknownColorSpace {}

impl FromStr for ColorSpace {
    type Err = UnknownColorSpace;

    /// Parses `rgb`, `hsb` or `hsl`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSpace::ALL
            .into_iter()
            .find(|space| s.eq_ignore_ascii_case(space.name()))
            .ok_or_else(|| UnknownColorSpace(s.to_string()))
    }
}

/// Channel maxima `(max1, max2, max3, max_alpha)` for one color space.
///
/// Raw channel arguments are divided by these maxima to obtain the normalized
/// `[0, 1]` values colors are built from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChannelRanges(pub [f32; 4]);

impl ChannelRanges {
    #[inline]
    pub const fn new(max1: f32, max2: f32, max3: f32, max_alpha: f32) -> Self {
        Self([max1, max2, max3, max_alpha])
    }

    /// All four maxima set to `max`.
    #[inline]
    pub const fn uniform(max: f32) -> Self {
        Self([max; 4])
    }

    /// Documented defaults: RGB is `255` everywhere, HSB/HSL are `(360, 100, 100, 1)`.
    #[inline]
    pub const fn default_for(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Rgb => Self::uniform(255.0),
            ColorSpace::Hsb | ColorSpace::Hsl => Self::new(360.0, 100.0, 100.0, 1.0),
        }
    }

    /// Replaces the three color maxima, keeping the alpha maximum.
    #[inline]
    pub const fn with_channels(self, max1: f32, max2: f32, max3: f32) -> Self {
        Self([max1, max2, max3, self.0[3]])
    }

    #[inline]
    pub const fn as_array(self) -> [f32; 4] {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> f32 {
        self.0[3]
    }

    /// Returns true when every maximum is finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.iter().all(|m| m.is_finite() && *m > 0.0)
    }

    /// Divides raw channel values by the maxima.
    #[inline]
    pub fn normalize(self, raw: [f32; 4]) -> [f32; 4] {
        [raw[0] / self.0[0], raw[1] / self.0[1], raw[2] / self.0[2], raw[3] / self.0[3]]
    }

    /// Multiplies normalized channel values by the maxima.
    #[inline]
    pub fn scale(self, unit: [f32; 4]) -> [f32; 4] {
        [unit[0] * self.0[0], unit[1] * self.0[1], unit[2] * self.0[2], unit[3] * self.0[3]]
    }
}

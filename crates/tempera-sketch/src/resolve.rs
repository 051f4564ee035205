use std::fmt;

use csscolorparser::ParseColorError;
use tempera_engine::paint::{ChannelRanges, Color, ColorSpace};

use crate::args::PaintArgs;

/// Failure to turn paint arguments into a color.
#[derive(Debug)]
pub enum ResolveError {
    /// The string is not a recognised CSS color.
    Css(ParseColorError),
    /// Channel arrays must hold three or four values.
    ArrayLength(usize),
    /// A numeric argument was NaN or infinite.
    NonFinite,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Css(err) => write!(f, "invalid color string: {}", err),
            ResolveError::ArrayLength(len) => {
                write!(f, "color arrays need 3 or 4 values, got {}", len)
            }
            ResolveError::NonFinite => f.write_str("color arguments must be finite numbers"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Css(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseColorError> for ResolveError {
    fn from(err: ParseColorError) -> Self {
        ResolveError::Css(err)
    }
}

/// Turns raw paint arguments into a canonical [`Color`].
///
/// Implementations must be pure: the same arguments, space and ranges always
/// produce the same result.
pub trait ColorResolver {
    fn resolve(
        &self,
        args: &PaintArgs,
        space: ColorSpace,
        ranges: ChannelRanges,
    ) -> Result<Color, ResolveError>;
}

/// Default resolver: numeric shapes scaled by channel ranges, strings parsed as CSS.
///
/// Rules:
/// - gray values are divided by the third channel maximum and are always RGB
/// - channel triples are divided by the ranges, clamped, then converted from `space`
/// - CSS strings are parsed by `csscolorparser` and ignore the ranges entirely
/// - every produced color records `space`
#[derive(Debug, Copy, Clone, Default)]
pub struct CssResolver;

impl ColorResolver for CssResolver {
    fn resolve(
        &self,
        args: &PaintArgs,
        space: ColorSpace,
        ranges: ChannelRanges,
    ) -> Result<Color, ResolveError> {
        let raw = match args {
            PaintArgs::Color(color) => return Ok(*color),
            PaintArgs::Css(src) => return Ok(css_color(src)?.with_space(space)),
            PaintArgs::Gray(v) => return gray(*v, None, space, ranges),
            PaintArgs::GrayAlpha(v, a) => return gray(*v, Some(*a), space, ranges),
            PaintArgs::Channels(c1, c2, c3) => [*c1, *c2, *c3, ranges.alpha()],
            PaintArgs::ChannelsAlpha(c1, c2, c3, a) => [*c1, *c2, *c3, *a],
            PaintArgs::Array(values) => match values.as_slice() {
                &[c1, c2, c3] => [c1, c2, c3, ranges.alpha()],
                &[c1, c2, c3, a] => [c1, c2, c3, a],
                other => return Err(ResolveError::ArrayLength(other.len())),
            },
        };

        ensure_finite(&raw)?;
        Ok(Color::from_normalized(space, ranges.normalize(raw)))
    }
}

fn ensure_finite(values: &[f32]) -> Result<(), ResolveError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ResolveError::NonFinite)
    }
}

fn gray(
    value: f32,
    alpha: Option<f32>,
    space: ColorSpace,
    ranges: ChannelRanges,
) -> Result<Color, ResolveError> {
    let alpha = alpha.unwrap_or(ranges.alpha());
    ensure_finite(&[value, alpha])?;

    let [_, _, max3, max_alpha] = ranges.as_array();
    let v = value / max3;
    Ok(Color::from_normalized(ColorSpace::Rgb, [v, v, v, alpha / max_alpha]).with_space(space))
}

/// Parses a CSS color string into straight RGBA.
///
/// `hsb(..)`/`hsba(..)` are read as their `hsv` spellings.
fn css_color(src: &str) -> Result<Color, ParseColorError> {
    let src = src.trim();
    let parsed = match src.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("hsb") => {
            csscolorparser::parse(&format!("hsv{}", &src[3..]))?
        }
        _ => csscolorparser::parse(src)?,
    };
    Ok(Color::from_rgba(parsed.r as f32, parsed.g as f32, parsed.b as f32, parsed.a as f32))
}

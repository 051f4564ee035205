//! Channel accessors and interpolation, scaled by the sketch's current ranges.
//!
//! A color stores straight RGB; these read it back in whichever space and
//! range the sketch is configured with right now, not when the color was made.

use tempera_engine::paint::{Color, ColorSpace};

use crate::sketch::Sketch;

impl<R, C> Sketch<R, C> {
    /// Component `index` of `values` scaled by `space`'s maximum for it.
    #[inline]
    fn scaled(&self, space: ColorSpace, values: [f32; 4], index: usize) -> f32 {
        self.state().mode().ranges(space).scale(values)[index]
    }

    pub fn red(&self, color: Color) -> f32 {
        self.scaled(ColorSpace::Rgb, color.rgba(), 0)
    }

    pub fn green(&self, color: Color) -> f32 {
        self.scaled(ColorSpace::Rgb, color.rgba(), 1)
    }

    pub fn blue(&self, color: Color) -> f32 {
        self.scaled(ColorSpace::Rgb, color.rgba(), 2)
    }

    /// Alpha scaled by the alpha maximum of the space the color was created in.
    pub fn alpha(&self, color: Color) -> f32 {
        self.scaled(color.space(), color.rgba(), 3)
    }

    /// Hue from the HSB decomposition for HSB colors, HSL otherwise.
    pub fn hue(&self, color: Color) -> f32 {
        let space = hue_space(color);
        self.scaled(space, color.normalized_in(space), 0)
    }

    /// Saturation from the HSB decomposition for HSB colors, HSL otherwise.
    pub fn saturation(&self, color: Color) -> f32 {
        let space = hue_space(color);
        self.scaled(space, color.normalized_in(space), 1)
    }

    pub fn brightness(&self, color: Color) -> f32 {
        self.scaled(ColorSpace::Hsb, color.hsba(), 2)
    }

    pub fn lightness(&self, color: Color) -> f32 {
        self.scaled(ColorSpace::Hsl, color.hsla(), 2)
    }

    /// Blends `from` toward `to` in the active color space.
    ///
    /// `amt` is clamped to `[0, 1]`; NaN counts as 0. Hue is interpolated
    /// linearly, without wrapping around the shorter arc.
    pub fn lerp_color(&self, from: Color, to: Color, amt: f32) -> Color {
        let t = if amt.is_nan() { 0.0 } else { amt.clamp(0.0, 1.0) };
        let space = self.color_space();
        let a = from.normalized_in(space);
        let b = to.normalized_in(space);

        let mut mixed = [0.0; 4];
        for (out, (x, y)) in mixed.iter_mut().zip(a.iter().zip(&b)) {
            *out = x + (y - x) * t;
        }
        Color::from_normalized(space, mixed)
    }
}

#[inline]
fn hue_space(color: Color) -> ColorSpace {
    match color.space() {
        ColorSpace::Hsb => ColorSpace::Hsb,
        _ => ColorSpace::Hsl,
    }
}

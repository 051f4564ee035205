use std::borrow::Cow;

use bytemuck::{Pod, Zeroable};
use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::coords::Viewport;
use crate::paint::Color;

use super::{ImageHandle, SurfaceRenderer};

/// Straight-alpha RGBA8 pixel, laid out exactly as four bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8 { r: 0, g: 0, b: 0, a: 0 };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    fn to_unit(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| c as f32 / 255.0)
    }

    #[inline]
    fn from_unit(c: [f32; 4]) -> Self {
        let [r, g, b, a] = c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
        Self { r, g, b, a }
    }

    /// Composites straight-alpha `src` over `self` (source-over).
    fn over(self, src: [f32; 4]) -> Self {
        let sa = src[3];
        if sa >= 1.0 {
            return Self::from_unit(src);
        }
        if sa <= 0.0 {
            return self;
        }

        let dst = self.to_unit();
        let da = dst[3] * (1.0 - sa);
        let out_a = sa + da;
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }

        let mix = |s: f32, d: f32| (s * sa + d * da) / out_a;
        Self::from_unit([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), out_a])
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Role of a surface within a sketch.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SurfaceKind {
    /// The sketch's main, on-screen surface.
    #[default]
    Primary,
    /// A secondary graphics buffer.
    Offscreen,
}

/// CPU pixel buffer implementing [`SurfaceRenderer`].
///
/// Semantics:
/// - pixels start fully transparent
/// - fill defaults to white, stroke to black
/// - backgrounds and images are composited source-over
/// - `clear_surface` zeroes every pixel, on primary and offscreen surfaces alike
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    kind: SurfaceKind,
    pixels: Vec<Rgba8>,
    fill: Color,
    stroke: Color,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32, kind: SurfaceKind) -> Self {
        Self {
            width,
            height,
            kind,
            pixels: vec![Rgba8::TRANSPARENT; width as usize * height as usize],
            fill: Color::white(),
            stroke: Color::black(),
        }
    }

    #[inline]
    pub fn primary(width: u32, height: u32) -> Self {
        Self::new(width, height, SurfaceKind::Primary)
    }

    #[inline]
    pub fn offscreen(width: u32, height: u32) -> Self {
        Self::new(width, height, SurfaceKind::Offscreen)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    /// Color set by the last fill call.
    #[inline]
    pub fn fill_color(&self) -> Color {
        self.fill
    }

    /// Color set by the last stroke call.
    #[inline]
    pub fn stroke_color(&self) -> Color {
        self.stroke
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Copies the buffer into an [`RgbaImage`] (e.g. for PNG export).
    ///
    /// `None` only if the buffer no longer matches `width × height`.
    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl SurfaceRenderer for PixelSurface {
    fn viewport(&self) -> Viewport {
        Viewport::from_pixels(self.width, self.height)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn paint_background(&mut self, color: Color) {
        let src = color.rgba();
        for px in &mut self.pixels {
            *px = px.over(src);
        }
    }

    fn blit_image_as_background(&mut self, image: &ImageHandle, width: f32, height: f32) {
        let w = width.round().max(0.0) as u32;
        let h = height.round().max(0.0) as u32;
        if w == 0 || h == 0 || image.width() == 0 || image.height() == 0 {
            log::debug!("skipping background blit to empty area {}x{}", w, h);
            return;
        }

        let scaled: Cow<'_, RgbaImage> = if (image.width(), image.height()) == (w, h) {
            Cow::Borrowed(image.as_image())
        } else {
            Cow::Owned(imageops::resize(image.as_image(), w, h, FilterType::Triangle))
        };

        let (cols, rows) = (w.min(self.width), h.min(self.height));
        for y in 0..rows {
            for x in 0..cols {
                let src = Rgba8::from(scaled.get_pixel(x, y).0).to_unit();
                let i = self.index(x, y);
                self.pixels[i] = self.pixels[i].over(src);
            }
        }
    }

    fn clear_surface(&mut self) {
        if self.kind == SurfaceKind::Primary {
            log::trace!("clearing primary surface");
        }
        self.pixels.fill(Rgba8::TRANSPARENT);
    }
}

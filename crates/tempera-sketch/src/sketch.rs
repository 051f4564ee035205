use tempera_engine::paint::{ChannelRanges, Color, ColorSpace};
use tempera_engine::render::{PixelSurface, SurfaceRenderer};

use crate::args::{BackgroundArgs, PaintArgs};
use crate::config::SketchConfig;
use crate::mode::RangeSpec;
use crate::resolve::{ColorResolver, CssResolver, ResolveError};
use crate::state::DrawingColorState;

/// A drawing context: color state, a renderer, and the resolver that turns
/// paint arguments into colors.
///
/// Every call mutates through `&mut self` and returns `&mut Self` so calls
/// chain. Calls that resolve a color return `Result<&mut Self, ResolveError>`.
///
/// ```rust
/// use tempera_sketch::prelude::*;
///
/// let mut sketch = Sketch::new(SketchConfig::new(4, 4).offscreen());
/// sketch.color_mode(ColorSpace::Hsb, (360.0, 100.0, 100.0, 1.0));
/// sketch.background((0.0, 100.0, 100.0))?.fill("#00ff00")?.no_stroke();
///
/// assert_eq!(sketch.renderer().pixels()[0], Rgba8::new(255, 0, 0, 255));
/// # Ok::<(), ResolveError>(())
/// ```
#[derive(Debug)]
pub struct Sketch<R = PixelSurface, C = CssResolver> {
    state: DrawingColorState,
    renderer: R,
    resolver: C,
}

impl Sketch {
    /// Sketch drawing into a fresh [`PixelSurface`] described by `config`.
    pub fn new(config: SketchConfig) -> Self {
        let surface = PixelSurface::new(config.width, config.height, config.kind);
        log::debug!("new {:?} sketch {}x{}", config.kind, config.width, config.height);
        Self::with_renderer(surface)
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl<R: SurfaceRenderer> Sketch<R> {
    #[inline]
    pub fn with_renderer(renderer: R) -> Self {
        Self::with_parts(renderer, CssResolver)
    }
}

impl<R: SurfaceRenderer, C: ColorResolver> Sketch<R, C> {
    #[inline]
    pub fn with_parts(renderer: R, resolver: C) -> Self {
        Self { state: DrawingColorState::new(), renderer, resolver }
    }

    // ── color mode ────────────────────────────────────────────────────────

    /// Switches the active color space and optionally its channel maxima.
    ///
    /// `ranges` accepts `()`, a single maximum, three channel maxima, or three
    /// channel maxima plus alpha.
    pub fn color_mode(&mut self, space: ColorSpace, ranges: impl Into<RangeSpec>) -> &mut Self {
        self.state.mode_mut().set_mode(space, ranges.into());
        self
    }

    /// String-keyed [`color_mode`](Self::color_mode).
    ///
    /// Unknown names are ignored. Range counts other than 0, 1, 3 or 4 leave
    /// the ranges alone but still switch the mode.
    pub fn color_mode_str(&mut self, name: &str, values: &[f32]) -> &mut Self {
        self.state.mode_mut().set_mode_named(name, values);
        self
    }

    // ── paint state ───────────────────────────────────────────────────────

    /// Sets the fill color.
    ///
    /// Fill is enabled and marked as explicitly set before the arguments are
    /// resolved, so the flags stay set even when resolution fails.
    pub fn fill(&mut self, args: impl Into<PaintArgs>) -> Result<&mut Self, ResolveError> {
        self.state.enable_fill();
        let color = self.resolve(&args.into())?;
        self.renderer.set_fill_color(color);
        Ok(self)
    }

    /// Sets the stroke color. Flags behave as in [`fill`](Self::fill).
    pub fn stroke(&mut self, args: impl Into<PaintArgs>) -> Result<&mut Self, ResolveError> {
        self.state.enable_stroke();
        let color = self.resolve(&args.into())?;
        self.renderer.set_stroke_color(color);
        Ok(self)
    }

    pub fn no_fill(&mut self) -> &mut Self {
        self.state.disable_fill();
        self
    }

    pub fn no_stroke(&mut self) -> &mut Self {
        self.state.disable_stroke();
        self
    }

    /// Paints the whole surface with a color, or blits an image over it.
    ///
    /// An image is scaled to the viewport and never goes through the resolver;
    /// with an empty or non-finite viewport there is nothing to blit. Fill and
    /// stroke flags are left untouched.
    pub fn background(
        &mut self,
        args: impl Into<BackgroundArgs>,
    ) -> Result<&mut Self, ResolveError> {
        match args.into() {
            BackgroundArgs::Image(image) => {
                let viewport = self.renderer.viewport();
                if !viewport.is_valid() {
                    log::debug!(
                        "skipping background image on {}x{} viewport",
                        viewport.width,
                        viewport.height
                    );
                    return Ok(self);
                }
                log::debug!(
                    "background image {}x{} -> {}x{}",
                    image.width(),
                    image.height(),
                    viewport.width,
                    viewport.height
                );
                self.renderer.blit_image_as_background(&image, viewport.width, viewport.height);
            }
            BackgroundArgs::Paint(paint) => {
                let color = self.resolve(&paint)?;
                self.renderer.paint_background(color);
            }
        }
        Ok(self)
    }

    /// Makes every pixel of the surface fully transparent.
    pub fn clear(&mut self) -> &mut Self {
        self.renderer.clear_surface();
        self
    }

    /// Resolves `args` under the current mode without touching flags or the renderer.
    pub fn color(&self, args: impl Into<PaintArgs>) -> Result<Color, ResolveError> {
        self.resolve(&args.into())
    }

    fn resolve(&self, args: &PaintArgs) -> Result<Color, ResolveError> {
        let space = self.state.active_space();
        let ranges = self.state.current_ranges();
        let color = self.resolver.resolve(args, space, ranges)?;
        log::trace!("resolved {:?} in {} to {}", args, space, color);
        Ok(color)
    }
}

impl<R, C> Sketch<R, C> {
    #[inline]
    pub fn state(&self) -> &DrawingColorState {
        &self.state
    }

    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        self.state.active_space()
    }

    #[inline]
    pub fn current_ranges(&self) -> ChannelRanges {
        self.state.current_ranges()
    }

    #[inline]
    pub fn is_fill_enabled(&self) -> bool {
        self.state.is_fill_enabled()
    }

    #[inline]
    pub fn is_stroke_enabled(&self) -> bool {
        self.state.is_stroke_enabled()
    }

    #[inline]
    pub fn fill_was_set(&self) -> bool {
        self.state.fill_was_set()
    }

    #[inline]
    pub fn stroke_was_set(&self) -> bool {
        self.state.stroke_was_set()
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[inline]
    pub fn resolver(&self) -> &C {
        &self.resolver
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tempera_engine::coords::Viewport;
    use tempera_engine::render::{ImageHandle, Rgba8, SurfaceKind};
    use tempera_engine::scene::{RecordingSurface, SurfaceCmd};

    use super::*;

    /// Delegates to [`CssResolver`] and counts calls.
    #[derive(Default)]
    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl ColorResolver for CountingResolver {
        fn resolve(
            &self,
            args: &PaintArgs,
            space: ColorSpace,
            ranges: ChannelRanges,
        ) -> Result<Color, ResolveError> {
            self.calls.set(self.calls.get() + 1);
            CssResolver.resolve(args, space, ranges)
        }
    }

    fn recording() -> Sketch<RecordingSurface> {
        Sketch::with_renderer(RecordingSurface::new(Viewport::new(8.0, 6.0)))
    }

    // ── color mode ────────────────────────────────────────────────────────

    #[test]
    fn color_mode_chains_and_switches() {
        let mut s = recording();
        s.color_mode(ColorSpace::Hsb, ()).color_mode(ColorSpace::Rgb, 100.0);
        assert_eq!(s.color_space(), ColorSpace::Rgb);
        assert_eq!(s.current_ranges().as_array(), [100.0; 4]);
    }

    #[test]
    fn bogus_mode_name_changes_nothing() {
        let mut s = recording();
        s.color_mode(ColorSpace::Hsl, 50.0);
        let before = s.state().clone();
        s.color_mode_str("bogus", &[50.0]);
        assert_eq!(s.state(), &before);
        assert!(s.renderer().cmds().is_empty());
    }

    // ── fill and stroke ───────────────────────────────────────────────────

    #[test]
    fn gray_fill_equals_channel_fill() {
        let mut s = recording();
        s.fill(51.0).unwrap();
        let gray = s.renderer().last_fill();
        s.fill((51.0, 51.0, 51.0)).unwrap();
        assert_eq!(gray, s.renderer().last_fill());
        assert_eq!(gray.map(Color::levels), Some([51, 51, 51, 255]));
    }

    #[test]
    fn failed_fill_keeps_flags_and_renderer() {
        let mut s = recording();
        s.no_fill();
        assert!(!s.is_fill_enabled());

        let err = s.fill("not-a-real-color").unwrap_err();
        assert!(matches!(err, ResolveError::Css(_)));
        assert!(s.is_fill_enabled());
        assert!(s.fill_was_set());
        assert_eq!(s.renderer().last_fill(), None);
    }

    #[test]
    fn failed_stroke_keeps_flags_and_renderer() {
        let mut s = recording();
        s.no_stroke();
        assert!(s.stroke(vec![1.0, 2.0]).is_err());
        assert!(s.is_stroke_enabled());
        assert!(s.stroke_was_set());
        assert_eq!(s.renderer().last_stroke(), None);
    }

    #[test]
    fn no_fill_keeps_explicit_flag() {
        let mut s = recording();
        s.fill("red").unwrap().no_fill();
        assert!(!s.is_fill_enabled());
        assert!(s.fill_was_set());
        assert!(!s.stroke_was_set());
    }

    #[test]
    fn stroke_forwards_to_renderer() {
        let mut s = recording();
        s.stroke("#0000ff").unwrap().no_fill();
        assert_eq!(s.renderer().last_stroke().map(Color::levels), Some([0, 0, 255, 255]));
        assert_eq!(s.renderer().cmds().len(), 1);
    }

    #[test]
    fn numeric_stroke_forwards_to_renderer() {
        let mut s = recording();
        s.stroke((255.0, 128.0, 0.0, 51.0)).unwrap();
        assert!(s.is_stroke_enabled() && s.stroke_was_set());
        assert_eq!(s.renderer().cmds(), &[SurfaceCmd::SetStroke(Color::from_rgba8(255, 128, 0, 51))]);

        s.color_mode(ColorSpace::Hsl, ()).stroke((240.0, 100.0, 50.0)).unwrap();
        let blue = s.renderer().last_stroke().unwrap();
        assert_eq!(blue.levels(), [0, 0, 255, 255]);
        assert_eq!(blue.space(), ColorSpace::Hsl);
        assert_eq!(s.renderer().last_fill(), None);
    }

    #[test]
    fn hsb_color_survives_mode_switch() {
        let mut s = recording();
        s.color_mode(ColorSpace::Hsb, (360.0, 100.0, 100.0, 1.0));
        let green = s.color((120.0, 100.0, 100.0)).unwrap();

        s.color_mode(ColorSpace::Rgb, 255.0);
        s.fill(green).unwrap();
        let fill = s.renderer().last_fill().unwrap();
        assert_eq!(fill, green);
        assert_eq!(fill.levels(), [0, 255, 0, 255]);
        assert_eq!(fill.space(), ColorSpace::Hsb);
    }

    #[test]
    fn color_does_not_touch_state_or_renderer() {
        let s = recording();
        let c = s.color([255.0, 0.0, 0.0]).unwrap();
        assert_eq!(c.levels(), [255, 0, 0, 255]);
        assert!(!s.fill_was_set());
        assert!(s.renderer().cmds().is_empty());
    }

    // ── background ────────────────────────────────────────────────────────

    #[test]
    fn background_image_blits_without_resolving() {
        let img = ImageHandle::solid(2, 2, [1, 2, 3, 255]);
        let rec = RecordingSurface::new(Viewport::new(8.0, 6.0));
        let mut s = Sketch::with_parts(rec, CountingResolver::default());

        s.background(&img).unwrap();

        assert_eq!(s.resolver().calls.get(), 0);
        assert_eq!(
            s.renderer().cmds(),
            &[SurfaceCmd::BlitImage { image: img, width: 8.0, height: 6.0 }]
        );
    }

    #[test]
    fn background_image_skips_empty_viewport() {
        let img = ImageHandle::solid(2, 2, [1, 2, 3, 255]);
        let mut s = Sketch::with_renderer(RecordingSurface::new(Viewport::new(0.0, 6.0)));
        s.background(&img).unwrap();
        assert!(s.renderer().cmds().is_empty());
    }

    #[test]
    fn background_prebuilt_color_passes_through() {
        let rec = RecordingSurface::new(Viewport::new(8.0, 6.0));
        let mut s = Sketch::with_parts(rec, CountingResolver::default());
        s.color_mode(ColorSpace::Hsb, (360.0, 100.0, 100.0, 1.0));
        let teal = s.color((180.0, 100.0, 50.0, 0.5)).unwrap();

        s.color_mode(ColorSpace::Rgb, 255.0).no_stroke();
        s.background(teal).unwrap();

        assert_eq!(s.renderer().cmds(), &[SurfaceCmd::Background(teal)]);
        assert_eq!(teal.space(), ColorSpace::Hsb);
        assert_eq!(teal.levels(), [0, 128, 128, 128]);
        assert!(s.is_fill_enabled());
        assert!(!s.is_stroke_enabled());
        assert!(!s.fill_was_set() && !s.stroke_was_set());
    }

    #[test]
    fn background_color_resolves_once() {
        let rec = RecordingSurface::new(Viewport::new(8.0, 6.0));
        let mut s = Sketch::with_parts(rec, CountingResolver::default());
        s.background((0.0, 0.0, 0.0)).unwrap();
        assert_eq!(s.resolver().calls.get(), 1);
        assert_eq!(s.renderer().cmds(), &[SurfaceCmd::Background(Color::black())]);
    }

    #[test]
    fn background_leaves_flags_alone() {
        let mut s = recording();
        s.no_fill().background("white").unwrap();
        assert!(!s.is_fill_enabled());
        assert!(!s.fill_was_set());
        assert!(s.is_stroke_enabled());
    }

    #[test]
    fn failed_background_paints_nothing() {
        let mut s = recording();
        assert!(s.background(f32::NAN).is_err());
        assert!(s.renderer().cmds().is_empty());
    }

    #[test]
    fn background_image_fills_pixel_surface() {
        let mut s = Sketch::new(SketchConfig::new(3, 2));
        s.background(ImageHandle::solid(1, 1, [0, 0, 255, 255])).unwrap();
        assert!(s.renderer().pixels().iter().all(|&p| p == Rgba8::new(0, 0, 255, 255)));
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_zeroes_offscreen_alpha() {
        let mut s = Sketch::new(SketchConfig::new(4, 4).offscreen());
        s.background(0.0).unwrap().clear();
        let surface = s.into_renderer();
        assert_eq!(surface.kind(), SurfaceKind::Offscreen);
        assert!(surface.pixels().iter().all(|p| p.a == 0));
    }

    #[test]
    fn clear_on_primary_does_not_fail() {
        let mut s = Sketch::default();
        s.background("black").unwrap().clear();
        assert_eq!(s.renderer().kind(), SurfaceKind::Primary);
    }

    #[test]
    fn clear_is_forwarded_in_order() {
        let mut s = recording();
        s.background(0.0).unwrap().clear();
        assert_eq!(
            s.renderer().cmds(),
            &[SurfaceCmd::Background(Color::black()), SurfaceCmd::Clear]
        );
    }
}

//! Surface rendering contract.
//!
//! Renderers consume canonical colors and image handles produced by the sketch
//! layer. They own their pixel storage; the sketch never touches pixels directly.
//!
//! Convention:
//! - colors arrive fully resolved (straight-alpha sRGB)
//! - background images are composited at the origin, scaled to the given size

mod handle;
mod surface;

pub use handle::ImageHandle;
pub use surface::{PixelSurface, Rgba8, SurfaceKind};

use crate::coords::Viewport;
use crate::paint::Color;

/// Renderer side of a drawing context.
pub trait SurfaceRenderer {
    /// Visible drawing area; background images are scaled to it.
    fn viewport(&self) -> Viewport;

    /// Stores the color used for subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Stores the color used for subsequent strokes.
    fn set_stroke_color(&mut self, color: Color);

    /// Paints `color` over the whole surface.
    fn paint_background(&mut self, color: Color);

    /// Composites `image` at the origin, scaled to `width × height`.
    fn blit_image_as_background(&mut self, image: &ImageHandle, width: f32, height: f32);

    /// Resets every pixel to fully transparent.
    fn clear_surface(&mut self);
}

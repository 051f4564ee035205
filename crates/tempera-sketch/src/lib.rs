//! Tempera sketch layer: color modes and paint state on top of `tempera-engine`.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`ColorModeRegistry`] | active color space plus per-space channel ranges |
//! | [`PaintArgs`] / [`BackgroundArgs`] | the argument shapes `fill`, `stroke` and `background` accept |
//! | [`ColorResolver`] | turns arguments into a canonical [`Color`](tempera_engine::paint::Color) |
//! | [`Sketch`] | the dispatcher: flags, resolution, forwarding to a renderer |
//!
//! # Quick start
//!
//! ```rust
//! use tempera_sketch::prelude::*;
//!
//! let mut sketch = Sketch::new(SketchConfig::new(2, 2));
//! sketch.fill(51.0)?.no_stroke();
//! sketch.background("rgba(0, 0, 255, 1)")?;
//!
//! assert!(sketch.is_fill_enabled());
//! assert_eq!(sketch.renderer().fill_color().levels(), [51, 51, 51, 255]);
//! # Ok::<(), ResolveError>(())
//! ```
//!
//! Any [`SurfaceRenderer`](tempera_engine::render::SurfaceRenderer) can back a
//! sketch; `RecordingSurface` from `tempera_engine::scene` is handy for
//! inspecting the calls a sketch makes.

pub mod args;
mod channels;
pub mod config;
pub mod mode;
pub mod resolve;
pub mod sketch;
pub mod state;

pub use args::{BackgroundArgs, PaintArgs};
pub use config::SketchConfig;
pub use mode::{ColorModeRegistry, RangeSpec};
pub use resolve::{ColorResolver, CssResolver, ResolveError};
pub use sketch::Sketch;
pub use state::DrawingColorState;

/// Everything a sketch needs in one import.
pub mod prelude {
    pub use crate::args::{BackgroundArgs, PaintArgs};
    pub use crate::config::SketchConfig;
    pub use crate::mode::RangeSpec;
    pub use crate::resolve::{ColorResolver, CssResolver, ResolveError};
    pub use crate::sketch::Sketch;

    pub use tempera_engine::coords::Viewport;
    pub use tempera_engine::paint::{ChannelRanges, Color, ColorSpace};
    pub use tempera_engine::render::{
        ImageHandle, PixelSurface, Rgba8, SurfaceKind, SurfaceRenderer,
    };
    pub use tempera_engine::scene::RecordingSurface;
}

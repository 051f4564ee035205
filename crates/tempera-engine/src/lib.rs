//! Tempera engine crate.
//!
//! This crate owns the color model and the surface-side pieces used by the
//! sketch layer: canonical colors, color-space conversion, the renderer
//! contract and two renderers (a CPU pixel buffer and a command recorder).

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;

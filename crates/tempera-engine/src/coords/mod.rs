//! Surface geometry shared between renderers and the sketch layer.
//!
//! Canonical space:
//! - Pixels, origin top-left
//! - +X right, +Y down

mod viewport;

pub use viewport::Viewport;

//! Color model shared between the sketch layer and renderers.
//!
//! Scope:
//! - color spaces and their channel ranges
//! - canonical colors (straight-alpha sRGB, tagged with their creation mode)
//! - RGB / HSB / HSL conversion

pub mod color;
pub mod convert;
pub mod space;

pub use color::Color;
pub use space::{ChannelRanges, ColorSpace, UnknownColorSpace};

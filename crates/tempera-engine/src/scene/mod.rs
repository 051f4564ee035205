//! Recorded surface command stream.
//!
//! Responsibilities:
//! - store renderer calls as plain data, in call order
//! - provide a headless [`SurfaceRenderer`](crate::render::SurfaceRenderer) for
//!   inspection and tests

mod cmd;
mod recorder;

pub use cmd::SurfaceCmd;
pub use recorder::RecordingSurface;

use crate::coords::Viewport;
use crate::paint::Color;
use crate::render::{ImageHandle, SurfaceRenderer};

use super::SurfaceCmd;

/// Renderer that records every call instead of touching pixels.
///
/// `push` order equals call order; nothing is reordered or merged.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    cmds: Vec<SurfaceCmd>,
}

impl RecordingSurface {
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, cmds: Vec::new() }
    }

    /// Recorded commands in call order.
    #[inline]
    pub fn cmds(&self) -> &[SurfaceCmd] {
        &self.cmds
    }

    /// Color of the most recent fill call, if any.
    pub fn last_fill(&self) -> Option<Color> {
        self.cmds.iter().rev().find_map(|cmd| match cmd {
            SurfaceCmd::SetFill(c) => Some(*c),
            _ => None,
        })
    }

    /// Color of the most recent stroke call, if any.
    pub fn last_stroke(&self) -> Option<Color> {
        self.cmds.iter().rev().find_map(|cmd| match cmd {
            SurfaceCmd::SetStroke(c) => Some(*c),
            _ => None,
        })
    }

    #[inline]
    fn push(&mut self, cmd: SurfaceCmd) {
        self.cmds.push(cmd);
    }
}

impl SurfaceRenderer for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_fill_color(&mut self, color: Color) {
        self.push(SurfaceCmd::SetFill(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.push(SurfaceCmd::SetStroke(color));
    }

    fn paint_background(&mut self, color: Color) {
        self.push(SurfaceCmd::Background(color));
    }

    fn blit_image_as_background(&mut self, image: &ImageHandle, width: f32, height: f32) {
        self.push(SurfaceCmd::BlitImage { image: image.clone(), width, height });
    }

    fn clear_surface(&mut self) {
        self.push(SurfaceCmd::Clear);
    }
}

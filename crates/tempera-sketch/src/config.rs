use tempera_engine::render::SurfaceKind;

/// Size and role of the surface a [`Sketch`](crate::Sketch) draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SketchConfig {
    pub width: u32,
    pub height: u32,
    pub kind: SurfaceKind,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self { width: 100, height: 100, kind: SurfaceKind::Primary }
    }
}

impl SketchConfig {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    #[inline]
    pub fn offscreen(self) -> Self {
        Self { kind: SurfaceKind::Offscreen, ..self }
    }
}

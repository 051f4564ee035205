use crate::paint::Color;
use crate::render::ImageHandle;

/// One renderer call, captured as data.
#[derive(Debug, Clone)]
pub enum SurfaceCmd {
    SetFill(Color),
    SetStroke(Color),
    Background(Color),
    BlitImage { image: ImageHandle, width: f32, height: f32 },
    Clear,
}

impl PartialEq for SurfaceCmd {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SurfaceCmd::SetFill(a), SurfaceCmd::SetFill(b))
            | (SurfaceCmd::SetStroke(a), SurfaceCmd::SetStroke(b))
            | (SurfaceCmd::Background(a), SurfaceCmd::Background(b)) => a == b,
            (
                SurfaceCmd::BlitImage { image: ia, width: wa, height: ha },
                SurfaceCmd::BlitImage { image: ib, width: wb, height: hb },
            ) => ia.ptr_eq(ib) && wa == wb && ha == hb,
            (SurfaceCmd::Clear, SurfaceCmd::Clear) => true,
            _ => false,
        }
    }
}

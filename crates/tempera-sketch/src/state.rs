use tempera_engine::paint::{ChannelRanges, ColorSpace};

use crate::mode::ColorModeRegistry;

/// Per-sketch color state: the mode registry plus fill/stroke flags.
///
/// Flag transitions:
/// - `fill`/`stroke` set both the enable and the explicit flag
/// - `no_fill`/`no_stroke` clear the enable flag only
///
/// The explicit flags are never cleared once set. Mode and ranges change only
/// through [`Sketch`](crate::Sketch):
///
/// ```compile_fail
/// let mut state = tempera_sketch::DrawingColorState::new();
/// state.mode_mut().set_mode_named("hsb", &[]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingColorState {
    mode: ColorModeRegistry,
    fill_enabled: bool,
    stroke_enabled: bool,
    fill_set: bool,
    stroke_set: bool,
}

impl Default for DrawingColorState {
    fn default() -> Self {
        Self {
            mode: ColorModeRegistry::default(),
            fill_enabled: true,
            stroke_enabled: true,
            fill_set: false,
            stroke_set: false,
        }
    }
}

impl DrawingColorState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> &ColorModeRegistry {
        &self.mode
    }

    #[inline]
    pub(crate) fn mode_mut(&mut self) -> &mut ColorModeRegistry {
        &mut self.mode
    }

    #[inline]
    pub fn active_space(&self) -> ColorSpace {
        self.mode.active()
    }

    #[inline]
    pub fn current_ranges(&self) -> ChannelRanges {
        self.mode.current_ranges()
    }

    #[inline]
    pub fn is_fill_enabled(&self) -> bool {
        self.fill_enabled
    }

    #[inline]
    pub fn is_stroke_enabled(&self) -> bool {
        self.stroke_enabled
    }

    #[inline]
    pub fn fill_was_set(&self) -> bool {
        self.fill_set
    }

    #[inline]
    pub fn stroke_was_set(&self) -> bool {
        self.stroke_set
    }

    pub(crate) fn enable_fill(&mut self) {
        self.fill_enabled = true;
        self.fill_set = true;
    }

    pub(crate) fn enable_stroke(&mut self) {
        self.stroke_enabled = true;
        self.stroke_set = true;
    }

    pub(crate) fn disable_fill(&mut self) {
        self.fill_enabled = false;
    }

    pub(crate) fn disable_stroke(&mut self) {
        self.stroke_enabled = false;
    }
}

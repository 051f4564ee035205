/// Visible drawing area of a surface, in pixels.
///
/// Background images are scaled to this size before being composited at the origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a `width × height` pixel buffer.
    #[inline]
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_converts() {
        assert_eq!(Viewport::from_pixels(640, 480), Viewport::new(640.0, 480.0));
    }

    #[test]
    fn zero_or_nan_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}

use std::sync::Arc;

use image::RgbaImage;

/// Shared handle to a decoded RGBA8 image.
///
/// Cloning is cheap; all clones refer to the same pixels.
#[derive(Debug, Clone)]
pub struct ImageHandle(Arc<RgbaImage>);

impl ImageHandle {
    #[inline]
    pub fn new(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    /// Wraps raw straight-alpha RGBA8 bytes.
    ///
    /// Returns `None` when `bytes` is shorter than `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, bytes: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, bytes).map(Self::new)
    }

    /// A `width × height` image filled with one straight-alpha RGBA8 value.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.0
    }

    /// Returns true when both handles share the same pixels.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<RgbaImage> for ImageHandle {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}

use tempera_engine::paint::Color;
use tempera_engine::render::ImageHandle;

/// Argument shapes accepted by `fill`, `stroke` and `color`.
///
/// Build these through `From`: `51.0`, `(51.0, 0.5)`, `(255.0, 0.0, 0.0)`,
/// `"#ff8800"`, `[0.0, 128.0, 255.0]`, or an existing [`Color`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintArgs {
    /// Already resolved color, used as-is.
    Color(Color),
    /// CSS color string; alpha can only be given inside the string.
    Css(String),
    /// Three or four explicit channel values.
    Array(Vec<f32>),
    /// Grayscale value.
    Gray(f32),
    /// Grayscale value and alpha.
    GrayAlpha(f32, f32),
    /// Three channels, read in the active color space.
    Channels(f32, f32, f32),
    /// Three channels plus alpha.
    ChannelsAlpha(f32, f32, f32, f32),
}

impl From<Color> for PaintArgs {
    fn from(color: Color) -> Self {
        PaintArgs::Color(color)
    }
}

impl From<&Color> for PaintArgs {
    fn from(color: &Color) -> Self {
        PaintArgs::Color(*color)
    }
}

impl From<&str> for PaintArgs {
    fn from(css: &str) -> Self {
        PaintArgs::Css(css.to_string())
    }
}

impl From<String> for PaintArgs {
    fn from(css: String) -> Self {
        PaintArgs::Css(css)
    }
}

impl From<f32> for PaintArgs {
    fn from(gray: f32) -> Self {
        PaintArgs::Gray(gray)
    }
}

impl From<(f32, f32)> for PaintArgs {
    fn from((gray, alpha): (f32, f32)) -> Self {
        PaintArgs::GrayAlpha(gray, alpha)
    }
}

impl From<(f32, f32, f32)> for PaintArgs {
    fn from((c1, c2, c3): (f32, f32, f32)) -> Self {
        PaintArgs::Channels(c1, c2, c3)
    }
}

impl From<(f32, f32, f32, f32)> for PaintArgs {
    fn from((c1, c2, c3, a): (f32, f32, f32, f32)) -> Self {
        PaintArgs::ChannelsAlpha(c1, c2, c3, a)
    }
}

impl From<[f32; 3]> for PaintArgs {
    fn from(values: [f32; 3]) -> Self {
        PaintArgs::Array(values.to_vec())
    }
}

impl From<[f32; 4]> for PaintArgs {
    fn from(values: [f32; 4]) -> Self {
        PaintArgs::Array(values.to_vec())
    }
}

impl From<&[f32]> for PaintArgs {
    fn from(values: &[f32]) -> Self {
        PaintArgs::Array(values.to_vec())
    }
}

impl From<Vec<f32>> for PaintArgs {
    fn from(values: Vec<f32>) -> Self {
        PaintArgs::Array(values)
    }
}

/// Argument shapes accepted by `background`.
///
/// An image stands alone: there is no variant pairing it with further values.
#[derive(Debug, Clone)]
pub enum BackgroundArgs {
    Image(ImageHandle),
    Paint(PaintArgs),
}

impl From<ImageHandle> for BackgroundArgs {
    fn from(image: ImageHandle) -> Self {
        BackgroundArgs::Image(image)
    }
}

impl From<&ImageHandle> for BackgroundArgs {
    fn from(image: &ImageHandle) -> Self {
        BackgroundArgs::Image(image.clone())
    }
}

impl From<PaintArgs> for BackgroundArgs {
    fn from(args: PaintArgs) -> Self {
        BackgroundArgs::Paint(args)
    }
}

macro_rules! background_from_paint {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for BackgroundArgs {
                fn from(value: $ty) -> Self {
                    BackgroundArgs::Paint(PaintArgs::from(value))
                }
            }
        )*
    };
}

background_from_paint!(
    Color,
    &Color,
    &str,
    String,
    f32,
    (f32, f32),
    (f32, f32, f32),
    (f32, f32, f32, f32),
    [f32; 3],
    [f32; 4],
    &[f32],
    Vec<f32>,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_shapes() {
        assert_eq!(PaintArgs::from(51.0), PaintArgs::Gray(51.0));
        assert_eq!(PaintArgs::from((51.0, 0.5)), PaintArgs::GrayAlpha(51.0, 0.5));
        assert_eq!(PaintArgs::from((1.0, 2.0, 3.0)), PaintArgs::Channels(1.0, 2.0, 3.0));
        assert_eq!(
            PaintArgs::from((1.0, 2.0, 3.0, 4.0)),
            PaintArgs::ChannelsAlpha(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn sequences_become_arrays() {
        assert_eq!(PaintArgs::from([1.0, 2.0, 3.0]), PaintArgs::Array(vec![1.0, 2.0, 3.0]));
        let slice: &[f32] = &[1.0, 2.0];
        assert_eq!(PaintArgs::from(slice), PaintArgs::Array(vec![1.0, 2.0]));
    }

    #[test]
    fn strings_and_colors() {
        assert_eq!(PaintArgs::from("red"), PaintArgs::Css("red".into()));
        assert_eq!(PaintArgs::from(Color::black()), PaintArgs::Color(Color::black()));
    }

    #[test]
    fn background_routes_images_and_paints() {
        let img = ImageHandle::solid(1, 1, [0; 4]);
        assert!(matches!(BackgroundArgs::from(&img), BackgroundArgs::Image(_)));
        assert!(matches!(
            BackgroundArgs::from(0.0),
            BackgroundArgs::Paint(PaintArgs::Gray(_))
        ));
        assert!(matches!(
            BackgroundArgs::from("#000"),
            BackgroundArgs::Paint(PaintArgs::Css(_))
        ));
    }
}

use crate::foundation::error::{TraceGifError, TraceGifResult};

pub use kurbo::{Point, Rect, RoundedRect};

/// 0-based position of a frame inside the output animation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Display duration of one animation frame, in milliseconds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct HoldMs(pub u32);

impl HoldMs {
    /// Raw millisecond value.
    pub fn as_millis(self) -> u32 {
        self.0
    }
}

/// Output raster size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Validate that the canvas is non-empty and fits the rasterizer's `u16` surface limits.
    pub fn validate(self) -> TraceGifResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TraceGifError::validation("canvas width/height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(TraceGifError::validation(
                "canvas width/height must fit in u16",
            ));
        }
        Ok(())
    }

    /// Width and height as the rasterizer's surface dimensions.
    pub fn size_u16(self) -> TraceGifResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| TraceGifError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| TraceGifError::validation("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    /// Canvas bounds as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Expand into opaque RGBA8.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

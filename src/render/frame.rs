use crate::foundation::error::{TraceGifError, TraceGifResult};
use crate::foundation::math::{Fnv1a64, mul_div255_u16};

/// A rendered frame as opaque, straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Build a frame by flattening premultiplied rasterizer output over `bg_rgb`.
    pub fn from_premul(
        width: u32,
        height: u32,
        premul: &[u8],
        bg_rgb: [u8; 3],
    ) -> TraceGifResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if premul.len() != expected {
            return Err(TraceGifError::render(format!(
                "pixel buffer has {} bytes, expected {expected} for {width}x{height}",
                premul.len()
            )));
        }
        let mut data = vec![0u8; premul.len()];
        flatten_premul_over_bg_to_opaque_rgba8(&mut data, premul, bg_rgb);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Content hash of a frame (dimensions plus pixels), stable across runs.
pub fn fingerprint_frame(frame: &FrameRGBA) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u32(frame.width);
    h.write_u32(frame.height);
    h.write_bytes(&frame.data);
    h.finish()
}

fn flatten_premul_over_bg_to_opaque_rgba8(dst: &mut [u8], src_premul: &[u8], bg_rgb: [u8; 3]) {
    let bg_r = bg_rgb[0] as u16;
    let bg_g = bg_rgb[1] as u16;
    let bg_b = bg_rgb[2] as u16;

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = s[3] as u16;
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        let r = s[0] as u16 + mul_div255_u16(bg_r, inv);
        let g = s[1] as u16 + mul_div255_u16(bg_g, inv);
        let b = s[2] as u16 + mul_div255_u16(bg_b, inv);

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }
}

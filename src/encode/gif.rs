use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::encode::sink::{FrameSink, SinkConfig, SinkGuard};
use crate::foundation::core::{FrameIndex, HoldMs};
use crate::foundation::error::{TraceGifError, TraceGifResult};
use crate::render::frame::FrameRGBA;

/// Quantization speed used when none is configured.
pub const DEFAULT_GIF_SPEED: i32 = 10;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Palette quantization speed, 1 (best quality) to 30 (fastest).
    pub speed: i32,
}

impl GifSinkOpts {
    /// Create options for writing a GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            speed: DEFAULT_GIF_SPEED,
        }
    }
}

/// Sink that assembles an infinitely looping animated GIF.
///
/// Frames are buffered and encoded in `end`. The encoded bytes go to a sibling `.partial` file
/// that is renamed over the destination, so a failed run never leaves a truncated GIF behind.
pub struct GifSink {
    opts: GifSinkOpts,
    guard: SinkGuard,
    frames: Vec<image::Frame>,
}

impl GifSink {
    /// Create a new GIF sink.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            guard: SinkGuard::default(),
            frames: Vec::new(),
        }
    }

    /// Destination path.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> TraceGifResult<()> {
        if !(1..=30).contains(&self.opts.speed) {
            return Err(TraceGifError::validation(format!(
                "gif speed must be in 1..=30, got {}",
                self.opts.speed
            )));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(TraceGifError::validation(
                "gif width/height must fit in u16",
            ));
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(TraceGifError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        partial_path(&self.opts.out_path)?;

        self.guard.begin(cfg)?;
        self.frames = Vec::with_capacity(cfg.frame_count);
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        frame: &FrameRGBA,
        hold: HoldMs,
    ) -> TraceGifResult<()> {
        self.guard.check(idx, frame)?;
        let buffer = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| TraceGifError::encode("frame buffer does not match its dimensions"))?;
        let delay = image::Delay::from_numer_denom_ms(hold.as_millis(), 1);
        self.frames
            .push(image::Frame::from_parts(buffer, 0, 0, delay));
        Ok(())
    }

    fn end(&mut self) -> TraceGifResult<()> {
        self.guard.finish()?;
        let frames = std::mem::take(&mut self.frames);
        if frames.is_empty() {
            return Err(TraceGifError::encode("gif needs at least one frame"));
        }
        let frame_count = frames.len();

        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut bytes, self.opts.speed);
            encoder.set_repeat(Repeat::Infinite)?;
            encoder.encode_frames(frames)?;
        }

        ensure_parent_dir(&self.opts.out_path)?;
        let partial = partial_path(&self.opts.out_path)?;
        if let Err(e) = write_then_rename(&bytes, &partial, &self.opts.out_path) {
            let _ = std::fs::remove_file(&partial);
            return Err(e);
        }

        tracing::debug!(
            path = %self.opts.out_path.display(),
            frames = frame_count,
            bytes = bytes.len(),
            "wrote gif"
        );
        Ok(())
    }
}

fn write_then_rename(bytes: &[u8], partial: &Path, out: &Path) -> TraceGifResult<()> {
    std::fs::write(partial, bytes)
        .with_context(|| format!("write gif '{}'", partial.display()))?;
    std::fs::rename(partial, out).with_context(|| {
        format!("move '{}' to '{}'", partial.display(), out.display())
    })?;
    Ok(())
}

fn partial_path(out: &Path) -> TraceGifResult<PathBuf> {
    let name = out.file_name().ok_or_else(|| {
        TraceGifError::validation(format!(
            "output path '{}' has no file name",
            out.display()
        ))
    })?;
    let mut partial = name.to_os_string();
    partial.push(".partial");
    Ok(out.with_file_name(partial))
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> TraceGifResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;

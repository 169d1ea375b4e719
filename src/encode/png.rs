use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, SinkGuard};
use crate::foundation::core::{FrameIndex, HoldMs};
use crate::foundation::error::TraceGifResult;
use crate::render::frame::FrameRGBA;

/// Sink that writes every frame as `frame-NNN.png` into a directory, for inspecting individual
/// frames outside the animation.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    guard: SinkGuard,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Create a sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            guard: SinkGuard::default(),
            written: Vec::new(),
        }
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame-{:03}.png", idx.0))
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> TraceGifResult<()> {
        self.guard.begin(cfg)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create frame dir '{}'", self.dir.display()))?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        frame: &FrameRGBA,
        _hold: HoldMs,
    ) -> TraceGifResult<()> {
        self.guard.check(idx, frame)?;
        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> TraceGifResult<()> {
        self.guard.finish()?;
        Ok(())
    }
}

fn write_png(path: &Path, frame: &FrameRGBA) -> TraceGifResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

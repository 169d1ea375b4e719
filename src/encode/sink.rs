use crate::foundation::core::{FrameIndex, HoldMs};
use crate::foundation::error::{TraceGifError, TraceGifResult};
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frame_count: usize,
}

/// Sink contract for consuming rendered frames in animation order.
///
/// Ordering contract: `push_frame` is called with strictly increasing [`FrameIndex`] values.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> TraceGifResult<()>;
    /// Push one frame together with its display duration.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA, hold: HoldMs)
    -> TraceGifResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> TraceGifResult<()>;
}

/// Shared begin/push bookkeeping for sinks: size checks and index ordering.
#[derive(Debug, Default, Clone)]
pub(crate) struct SinkGuard {
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl SinkGuard {
    pub(crate) fn begin(&mut self, cfg: SinkConfig) -> TraceGifResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(TraceGifError::validation(
                "sink width/height must be non-zero",
            ));
        }
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    pub(crate) fn check(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> TraceGifResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| TraceGifError::encode("sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(TraceGifError::encode("sink received out-of-order frame index"));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(TraceGifError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != (cfg.width as usize) * (cfg.height as usize) * 4 {
            return Err(TraceGifError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        self.last_idx = Some(idx);
        Ok(())
    }

    pub(crate) fn finish(&mut self) -> TraceGifResult<SinkConfig> {
        self.last_idx = None;
        self.cfg
            .take()
            .ok_or_else(|| TraceGifError::encode("sink not started"))
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    guard: SinkGuard,
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, HoldMs, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, HoldMs, FrameRGBA)] {
        &self.frames
    }

    /// Holds of the captured frames.
    pub fn holds(&self) -> Vec<HoldMs> {
        self.frames.iter().map(|(_, hold, _)| *hold).collect()
    }

    /// True once `end` completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TraceGifResult<()> {
        self.guard.begin(cfg)?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        frame: &FrameRGBA,
        hold: HoldMs,
    ) -> TraceGifResult<()> {
        self.guard.check(idx, frame)?;
        self.frames.push((idx, hold, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> TraceGifResult<()> {
        self.guard.finish()?;
        self.finished = true;
        Ok(())
    }
}

use std::path::PathBuf;

use crate::encode::gif::{DEFAULT_GIF_SPEED, GifSink, GifSinkOpts};
use crate::encode::png::PngDirSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::events::reader::{DEFAULT_TOOL_NAME, read_updates};
use crate::foundation::core::{FrameIndex, HoldMs};
use crate::foundation::error::{TraceGifError, TraceGifResult};
use crate::render::frame::{FrameRGBA, fingerprint_frame};
use crate::render::terminal::{TerminalRenderer, TerminalStyle};
use crate::text::font::{FontRequest, MonoFont};
use crate::timeline::hold::HoldPolicy;
use crate::timeline::sample::SamplePolicy;

/// Event log read when no path is given.
pub const DEFAULT_LOG_PATH: &str =
    ".agents/scratchpad/pi-codex-search/2026-02-21-live-progress-counters/logs/smoke-local.jsonl";
/// GIF written when no path is given.
pub const DEFAULT_OUT_PATH: &str = "demos/codex-search-progress.gif";

/// Everything needed to turn one event log into one GIF.
#[derive(Clone, Debug)]
pub struct DemoOpts {
    /// JSON-lines event log.
    pub log_path: PathBuf,
    /// Destination GIF; parent directories are created and an existing file is replaced.
    pub out_path: PathBuf,
    /// Tool whose updates are animated.
    pub tool_name: String,
    /// Frame count bound.
    pub sample: SamplePolicy,
    /// Frame display durations.
    pub holds: HoldPolicy,
    /// Terminal window look.
    pub style: TerminalStyle,
    /// Font lookup.
    pub font: FontRequest,
    /// GIF quantization speed (1..=30).
    pub gif_speed: i32,
    /// Also write every frame as a PNG into this directory.
    pub png_dir: Option<PathBuf>,
}

impl Default for DemoOpts {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            sample: SamplePolicy::default(),
            holds: HoldPolicy::default(),
            style: TerminalStyle::default(),
            font: FontRequest::default(),
            gif_speed: DEFAULT_GIF_SPEED,
            png_dir: None,
        }
    }
}

/// Outcome of [`make_demo`].
#[derive(Clone, Debug)]
pub struct DemoReport {
    /// GIF that was written.
    pub out_path: PathBuf,
    /// Updates extracted from the log before sampling.
    pub updates_read: usize,
    /// Updates that became frames, in order.
    pub updates: Vec<String>,
    /// Hold of every frame.
    pub holds: Vec<HoldMs>,
    /// Content hash of every frame.
    pub fingerprints: Vec<u64>,
    /// Font used for text, if any was available.
    pub font: Option<MonoFont>,
}

/// Read the log, sample, render and write the GIF.
#[tracing::instrument(skip(opts), fields(log = %opts.log_path.display(), out = %opts.out_path.display()))]
pub fn make_demo(opts: &DemoOpts) -> TraceGifResult<DemoReport> {
    let updates = read_updates(&opts.log_path, &opts.tool_name)?;
    let sampled = opts.sample.sample(&updates);
    tracing::info!(
        updates = updates.len(),
        frames = sampled.len(),
        "collected updates"
    );

    let font = opts.font.resolve()?;
    let mut renderer = TerminalRenderer::new(opts.style.clone(), font.as_ref())?;
    let frames = render_frames(&mut renderer, &sampled)?;

    let mut gif = GifSink::new(GifSinkOpts {
        out_path: opts.out_path.clone(),
        overwrite: true,
        speed: opts.gif_speed,
    });
    let holds = assemble(&frames, &opts.holds, &mut gif)?;

    if let Some(dir) = &opts.png_dir {
        assemble(&frames, &opts.holds, &mut PngDirSink::new(dir))?;
    }

    Ok(DemoReport {
        out_path: opts.out_path.clone(),
        updates_read: updates.len(),
        updates: sampled,
        holds,
        fingerprints: frames.iter().map(fingerprint_frame).collect(),
        font,
    })
}

/// Render one frame per update, in order.
pub fn render_frames(
    renderer: &mut TerminalRenderer,
    updates: &[String],
) -> TraceGifResult<Vec<FrameRGBA>> {
    updates
        .iter()
        .enumerate()
        .map(|(i, update)| {
            let frame = renderer.render(update)?;
            tracing::trace!(index = i, fingerprint = fingerprint_frame(&frame), "rendered frame");
            Ok(frame)
        })
        .collect()
}

/// Push `frames` into `sink` with holds from `policy`. Returns the holds used.
pub fn assemble(
    frames: &[FrameRGBA],
    policy: &HoldPolicy,
    sink: &mut dyn FrameSink,
) -> TraceGifResult<Vec<HoldMs>> {
    let first = frames
        .first()
        .ok_or_else(|| TraceGifError::validation("cannot assemble an animation without frames"))?;

    let holds = policy.holds(frames.len());
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        frame_count: frames.len(),
    })?;
    for (i, (frame, hold)) in frames.iter().zip(&holds).enumerate() {
        sink.push_frame(FrameIndex(i as u64), frame, *hold)?;
    }
    sink.end()?;
    Ok(holds)
}

//! tracegif turns a tool-execution trace into an animated terminal-style GIF.
//!
//! The pipeline is a single synchronous pass:
//!
//! - Read a JSON-lines event log into an ordered list of updates ([`read_updates`])
//! - Bound the frame count ([`SamplePolicy`])
//! - Draw each update as a terminal window ([`TerminalRenderer`])
//! - Stream the frames with their holds into a [`FrameSink`] such as [`GifSink`]
//!
//! [`make_demo`] runs all of it from one [`DemoOpts`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frame sinks: GIF, PNG directory and in-memory.
pub mod encode;
/// Event log parsing.
pub mod events;
/// End-to-end demo generation.
pub mod pipeline;
/// Frame rasterization.
pub mod render;
/// Font discovery, shaping and wrapping.
pub mod text;
/// Frame sampling and hold durations.
pub mod timeline;

pub use crate::foundation::core::{Canvas, FrameIndex, HoldMs, Point, Rect, Rgb8};
pub use crate::foundation::error::{TraceGifError, TraceGifResult};

pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::png::PngDirSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::events::reader::{ScanStats, UpdateCollector, collect_updates, read_updates};
pub use crate::pipeline::{DemoOpts, DemoReport, assemble, make_demo, render_frames};
pub use crate::render::frame::{FrameRGBA, fingerprint_frame};
pub use crate::render::terminal::{TerminalRenderer, TerminalStyle};
pub use crate::text::font::{FontOrigin, FontRequest, MonoFont};
pub use crate::text::wrap::wrap_lines;
pub use crate::timeline::hold::HoldPolicy;
pub use crate::timeline::sample::{SamplePolicy, sample_updates};

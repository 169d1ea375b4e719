//! Frame sinks.
//!
//! Sinks consume rendered frames in animation order, each paired with its hold duration.

/// Animated GIF output.
pub mod gif;
/// Per-frame PNG output.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;

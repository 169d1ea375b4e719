//! Frame selection and timing.

/// Per-frame hold durations.
pub mod hold;
/// Bounded downsampling of long update sequences.
pub mod sample;

//! CPU rasterization of terminal frames (vello_cpu).

/// Rendered frame buffers.
pub mod frame;
/// Terminal window style and renderer.
pub mod terminal;

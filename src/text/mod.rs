//! Font discovery, shaping and column wrapping for terminal text.

/// Font lookup with graceful fallback.
pub mod font;
/// Parley-backed line shaping.
pub mod layout;
/// Greedy column word-wrap.
pub mod wrap;

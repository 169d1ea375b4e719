//! JSON-lines event log parsing.

/// Borrowed accessors over a single log event.
pub mod model;
/// Update-sequence extraction from a whole log.
pub mod reader;

use std::path::Path;

use anyhow::Context as _;

use crate::events::model::ToolEvent;
use crate::foundation::error::{TraceGifError, TraceGifResult};

/// Tool whose progress is animated when none is configured.
pub const DEFAULT_TOOL_NAME: &str = "codex_search";
/// Lines of the end-event text kept in the closing frame.
pub const SUMMARY_MAX_LINES: usize = 7;
/// First line of the closing update.
pub const SUMMARY_MARKER: &str = "Done.";

/// Counters gathered while scanning a log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines seen, blank ones included.
    pub lines: u64,
    /// Lines that were empty after trimming.
    pub blank: u64,
    /// Lines that did not parse as JSON.
    pub malformed: u64,
    /// Update events for the target tool.
    pub update_events: u64,
    /// End events for the target tool.
    pub end_events: u64,
    /// Updates dropped because they repeated the previous one.
    pub duplicates: u64,
}

/// Incremental builder for the update sequence of one tool.
#[derive(Clone, Debug)]
pub struct UpdateCollector {
    tool_name: String,
    updates: Vec<String>,
    final_summary: Option<String>,
    stats: ScanStats,
}

impl UpdateCollector {
    /// Start collecting updates emitted by `tool_name`.
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            updates: Vec::new(),
            final_summary: None,
            stats: ScanStats::default(),
        }
    }

    /// Feed one raw log line. Blank and malformed lines are counted and skipped.
    pub fn push_line(&mut self, raw_line: &str) {
        self.stats.lines += 1;
        let line = raw_line.trim();
        if line.is_empty() {
            self.stats.blank += 1;
            return;
        }
        let Some(value) = ToolEvent::parse_line(line) else {
            self.stats.malformed += 1;
            return;
        };
        self.push_event(ToolEvent::new(&value));
    }

    /// Feed one parsed event.
    pub fn push_event(&mut self, event: ToolEvent<'_>) {
        if event.is_update_for(&self.tool_name) {
            self.stats.update_events += 1;
            let Some(text) = event.partial_text().map(str::trim) else {
                return;
            };
            if text.is_empty() {
                return;
            }
            if self.updates.last().is_some_and(|last| last == text) {
                self.stats.duplicates += 1;
                return;
            }
            self.updates.push(text.to_string());
        } else if event.is_end_for(&self.tool_name) {
            self.stats.end_events += 1;
            let Some(text) = event.result_text().map(str::trim) else {
                return;
            };
            if !text.is_empty() {
                let summary: Vec<&str> = text.lines().take(SUMMARY_MAX_LINES).collect();
                self.final_summary = Some(summary.join("\n"));
            }
        }
    }

    /// Updates recorded so far, without the closing summary.
    pub fn updates(&self) -> &[String] {
        &self.updates
    }

    /// Summary captured from the most recent end event.
    pub fn final_summary(&self) -> Option<&str> {
        self.final_summary.as_deref()
    }

    /// Scan counters.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Close the scan, appending the summary as the last update when one was captured.
    pub fn finish(self) -> Vec<String> {
        let mut updates = self.updates;
        if let Some(summary) = self.final_summary {
            updates.push(format!("{SUMMARY_MARKER}\n{summary}"));
        }
        updates
    }
}

/// Collect the update sequence for `tool_name` from in-memory log text.
///
/// Returns an empty vector when nothing matched; [`read_updates`] turns that into an error.
pub fn collect_updates(text: &str, tool_name: &str) -> Vec<String> {
    let mut collector = UpdateCollector::new(tool_name);
    for line in text.lines() {
        collector.push_line(line);
    }
    collector.finish()
}

/// Read the log at `path` and return the ordered, de-duplicated update sequence for `tool_name`.
///
/// Fails with [`TraceGifError::NoUpdates`] when the log yields nothing to animate.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_updates(path: &Path, tool_name: &str) -> TraceGifResult<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read event log '{}'", path.display()))?;

    let mut collector = UpdateCollector::new(tool_name);
    for line in text.lines() {
        collector.push_line(line);
    }
    let stats = collector.stats();
    tracing::debug!(
        lines = stats.lines,
        malformed = stats.malformed,
        update_events = stats.update_events,
        end_events = stats.end_events,
        duplicates = stats.duplicates,
        updates = collector.updates().len(),
        has_summary = collector.final_summary().is_some(),
        "scanned event log"
    );

    let updates = collector.finish();
    if updates.is_empty() {
        return Err(TraceGifError::no_updates(path));
    }
    Ok(updates)
}

#[cfg(test)]
#[path = "../../tests/unit/events/reader.rs"]
mod tests;

use serde_json::Value;

/// `type` tag of a streamed progress event.
pub const TOOL_EXECUTION_UPDATE: &str = "tool_execution_update";
/// `type` tag of the event that closes a tool invocation.
pub const TOOL_EXECUTION_END: &str = "tool_execution_end";

/// Borrowed view over one parsed log line.
///
/// Every accessor reads exactly one path through the JSON value and returns `None` when any step
/// is absent or has the wrong JSON type, so an odd event never poisons the rest of the log.
#[derive(Clone, Copy, Debug)]
pub struct ToolEvent<'a> {
    raw: &'a Value,
}

impl<'a> ToolEvent<'a> {
    /// Wrap an already-parsed JSON value.
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    /// Parse one log line. Returns `None` for malformed JSON.
    pub fn parse_line(line: &str) -> Option<Value> {
        serde_json::from_str::<Value>(line).ok()
    }

    /// The `type` tag.
    pub fn kind(&self) -> Option<&'a str> {
        self.raw.get("type").and_then(Value::as_str)
    }

    /// The `toolName` field.
    pub fn tool_name(&self) -> Option<&'a str> {
        self.raw.get("toolName").and_then(Value::as_str)
    }

    /// `partialResult.content[0].text`.
    pub fn partial_text(&self) -> Option<&'a str> {
        first_content_text(self.raw.get("partialResult")?)
    }

    /// `result.content[0].text`.
    pub fn result_text(&self) -> Option<&'a str> {
        first_content_text(self.raw.get("result")?)
    }

    /// True when this event is an update for `tool`.
    pub fn is_update_for(&self, tool: &str) -> bool {
        self.kind() == Some(TOOL_EXECUTION_UPDATE) && self.tool_name() == Some(tool)
    }

    /// True when this event ends an invocation of `tool`.
    pub fn is_end_for(&self, tool: &str) -> bool {
        self.kind() == Some(TOOL_EXECUTION_END) && self.tool_name() == Some(tool)
    }
}

fn first_content_text(payload: &Value) -> Option<&str> {
    payload
        .get("content")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(|item| item.get("text"))
        .and_then(Value::as_str)
}

use super::*;

fn update(tool: &str, text: &str) -> String {
    serde_json::json!({
        "type": "tool_execution_update",
        "toolName": tool,
        "partialResult": { "content": [{ "type": "text", "text": text }] }
    })
    .to_string()
}

fn end(tool: &str, text: &str) -> String {
    serde_json::json!({
        "type": "tool_execution_end",
        "toolName": tool,
        "result": { "content": [{ "type": "text", "text": text }] }
    })
    .to_string()
}

#[test]
fn collapses_consecutive_duplicates_and_appends_summary() {
    let log = [
        update("codex_search", "searching..."),
        update("codex_search", "searching... (2 files)"),
        update("codex_search", "searching... (2 files)"),
        end("codex_search", "found 1 match\nin file.py"),
    ]
    .join("\n");

    let updates = collect_updates(&log, "codex_search");
    assert_eq!(
        updates,
        vec![
            "searching...".to_string(),
            "searching... (2 files)".to_string(),
            "Done.\nfound 1 match\nin file.py".to_string(),
        ]
    );
}

#[test]
fn non_adjacent_repeats_are_kept() {
    let log = [
        update("codex_search", "a"),
        update("codex_search", "b"),
        update("codex_search", "a"),
    ]
    .join("\n");
    assert_eq!(collect_updates(&log, "codex_search"), vec!["a", "b", "a"]);
}

#[test]
fn text_is_trimmed_before_comparison() {
    let log = [
        update("codex_search", "  step 1\n"),
        update("codex_search", "step 1"),
        update("codex_search", "   "),
    ]
    .join("\n");
    let mut c = UpdateCollector::new("codex_search");
    for line in log.lines() {
        c.push_line(line);
    }
    assert_eq!(c.updates(), ["step 1".to_string()]);
    assert_eq!(c.stats().duplicates, 1);
    assert_eq!(c.stats().update_events, 3);
}

#[test]
fn other_tools_and_kinds_are_ignored() {
    let log = [
        update("web_fetch", "fetching"),
        r#"{"type":"tool_execution_start","toolName":"codex_search"}"#.to_string(),
        update("codex_search", "kept"),
    ]
    .join("\n");
    assert_eq!(collect_updates(&log, "codex_search"), vec!["kept"]);
}

#[test]
fn malformed_and_blank_lines_are_skipped() {
    let log = format!(
        "\n   \n{{broken\n{}\n[1,2]\n{}",
        update("codex_search", "one"),
        r#"{"type":"tool_execution_update","toolName":"codex_search","partialResult":{}}"#
    );
    let mut c = UpdateCollector::new("codex_search");
    for line in log.lines() {
        c.push_line(line);
    }
    let stats = c.stats();
    assert_eq!(stats.blank, 2);
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.update_events, 2);
    assert_eq!(c.finish(), vec!["one"]);
}

#[test]
fn only_last_end_event_summary_survives_and_is_capped() {
    let long: Vec<String> = (1..=10).map(|i| format!("line {i}")).collect();
    let log = [
        update("codex_search", "working"),
        end("codex_search", "first result"),
        end("codex_search", &long.join("\n")),
    ]
    .join("\n");

    let updates = collect_updates(&log, "codex_search");
    assert_eq!(updates.len(), 2);
    let last = updates.last().unwrap();
    assert!(last.starts_with("Done.\nline 1\n"));
    assert!(last.ends_with("line 7"));
    assert_eq!(last.lines().count(), 1 + SUMMARY_MAX_LINES);
}

#[test]
fn blank_end_text_keeps_previous_summary() {
    let log = [
        end("codex_search", "kept summary"),
        end("codex_search", "   "),
    ]
    .join("\n");
    assert_eq!(
        collect_updates(&log, "codex_search"),
        vec!["Done.\nkept summary"]
    );
}

#[test]
fn read_updates_fails_when_nothing_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.jsonl");
    std::fs::write(
        &path,
        "\n\n{\"type\":\"session_start\",\"toolName\":\"codex_search\"}\n\n",
    )
    .unwrap();

    let err = read_updates(&path, "codex_search").unwrap_err();
    assert!(matches!(err, TraceGifError::NoUpdates { .. }));
    assert!(err.to_string().contains("empty.jsonl"));
}

#[test]
fn read_updates_propagates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_updates(&dir.path().join("nope.jsonl"), "codex_search").unwrap_err();
    assert!(matches!(err, TraceGifError::Other(_)));
}

#[test]
fn latest_end_event_provides_the_summary() {
    let log = [
        update("codex_search", "searching..."),
        end("codex_search", "first pass"),
        end("codex_search", "   "),
        end("codex_search", "found 2 matches\nin a.py\nin b.py"),
    ]
    .join("\n");
    let mut c = UpdateCollector::new("codex_search");
    for line in log.lines() {
        c.push_line(line);
    }

    assert_eq!(c.final_summary(), Some("found 2 matches\nin a.py\nin b.py"));
    assert_eq!(c.stats().end_events, 3);
    assert_eq!(
        c.finish().last().map(String::as_str),
        Some("Done.\nfound 2 matches\nin a.py\nin b.py")
    );
}

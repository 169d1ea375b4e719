use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TraceGifError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TraceGifError::font("x").to_string().contains("font error:"));
    assert!(
        TraceGifError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        TraceGifError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn no_updates_names_the_log_path() {
    let err = TraceGifError::no_updates("logs/smoke-local.jsonl");
    let msg = err.to_string();
    assert!(msg.contains("no update events found"));
    assert!(msg.contains("logs/smoke-local.jsonl"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TraceGifError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

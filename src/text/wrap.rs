/// Body text column limit of the terminal frame.
pub const WRAP_COLUMNS: usize = 64;

/// Split `text` on newlines and greedily word-wrap each line to `columns`.
///
/// Lines break at ASCII spaces and after hyphens only, and width is a character count. Empty
/// source lines (and empty text) survive as one empty output line. Words wider than `columns` are
/// split so no output line exceeds the limit.
pub fn wrap_lines(text: &str, columns: usize) -> Vec<String> {
    let opts = textwrap::Options::new(columns.max(1))
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .break_words(true);

    let mut out = Vec::new();
    let mut saw_line = false;
    for line in text.lines() {
        saw_line = true;
        let wrapped = textwrap::wrap(line, &opts);
        if wrapped.iter().all(|w| w.is_empty()) {
            out.push(String::new());
            continue;
        }
        out.extend(wrapped.into_iter().map(|w| w.into_owned()));
    }
    if !saw_line {
        out.push(String::new());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;

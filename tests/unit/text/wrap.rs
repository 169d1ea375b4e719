use super::*;

#[test]
fn short_lines_are_untouched() {
    assert_eq!(
        wrap_lines("Done.\nfound 1 match\nin file.py", WRAP_COLUMNS),
        vec!["Done.", "found 1 match", "in file.py"]
    );
}

#[test]
fn long_line_breaks_only_at_whitespace() {
    let words: Vec<String> = (0..40).map(|i| format!("word{i:02}")).collect();
    let line = words.join(" ");
    assert!(line.chars().count() > WRAP_COLUMNS);

    let wrapped = wrap_lines(&line, WRAP_COLUMNS);
    assert!(wrapped.len() > 1);
    for l in &wrapped {
        assert!(l.chars().count() <= WRAP_COLUMNS, "too wide: {l:?}");
        assert!(!l.starts_with(' ') && !l.ends_with(' '));
    }

    let rejoined: Vec<&str> = wrapped.iter().flat_map(|l| l.split(' ')).collect();
    assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn greedy_fill_packs_each_line() {
    // five 12-char words plus four spaces fill exactly 64 columns
    let word = "abcdefghijkl";
    let line = vec![word; 6].join(" ");
    let wrapped = wrap_lines(&line, WRAP_COLUMNS);
    assert_eq!(wrapped.len(), 2);
    assert_eq!(wrapped[0].chars().count(), 64);
    assert_eq!(wrapped[1], word);
}

#[test]
fn overlong_word_is_split_at_the_limit() {
    let word = "x".repeat(150);
    let wrapped = wrap_lines(&word, WRAP_COLUMNS);
    assert_eq!(wrapped.len(), 3);
    assert!(wrapped.iter().all(|l| l.chars().count() <= WRAP_COLUMNS));
    assert_eq!(wrapped.concat(), word);
}

#[test]
fn empty_lines_are_preserved() {
    assert_eq!(wrap_lines("", WRAP_COLUMNS), vec![String::new()]);
    assert_eq!(wrap_lines("a\n\nb", WRAP_COLUMNS), vec!["a", "", "b"]);
    assert_eq!(wrap_lines("a\n   \nb", WRAP_COLUMNS), vec!["a", "", "b"]);
}

#[test]
fn paths_move_to_the_next_line_whole() {
    let path = "src/components/very/long/nested/directory/structure/file.py";
    let line = format!("searching for matches in {path} now");

    let wrapped = wrap_lines(&line, WRAP_COLUMNS);

    assert_eq!(
        wrapped,
        vec![
            "searching for matches in".to_string(),
            format!("{path} now"),
        ]
    );
}

#[test]
fn width_counts_characters_not_display_columns() {
    let line = "漢字漢字 ".repeat(12);
    let wrapped = wrap_lines(line.trim_end(), WRAP_COLUMNS);

    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].chars().count(), 59);
}

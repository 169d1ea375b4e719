use super::*;
use crate::text::font::FontRequest;

fn chrome_only() -> TerminalRenderer {
    TerminalRenderer::new(TerminalStyle::default(), None).unwrap()
}

fn any_font() -> Option<MonoFont> {
    FontRequest::default().resolve().ok().flatten()
}

#[test]
fn body_lines_start_below_prompt_and_advance() {
    let style = TerminalStyle::default();
    let lines = style.body_lines("first\nsecond");
    assert_eq!(
        lines,
        vec![("first".to_string(), 92.0), ("second".to_string(), 116.0)]
    );
}

#[test]
fn body_lines_truncate_at_bottom_margin() {
    let style = TerminalStyle::default();
    let text: Vec<String> = (0..40).map(|i| format!("line {i}")).collect();
    let lines = style.body_lines(&text.join("\n"));

    // y = 92 + 24k must stay <= 560 - 36
    assert_eq!(lines.len(), 19);
    assert_eq!(lines.last().unwrap().1, 524.0);
    assert_eq!(lines.last().unwrap().0, "line 18");
}

#[test]
fn body_lines_wrap_long_updates() {
    let style = TerminalStyle::default();
    let long = vec!["lorem"; 30].join(" ");
    let lines = style.body_lines(&long);
    assert!(lines.len() >= 3);
    assert!(lines.iter().all(|(l, _)| l.chars().count() <= 64));
}

#[test]
fn chrome_colors_land_where_expected() {
    let mut r = chrome_only();
    let f = r.render("ignored without a font").unwrap();
    assert_eq!((f.width, f.height), (980, 560));
    assert_eq!(f.data.len(), 980 * 560 * 4);

    assert_eq!(f.pixel(0, 0), Some([12, 14, 18, 255]));
    assert_eq!(f.pixel(979, 559), Some([12, 14, 18, 255]));
    assert_eq!(f.pixel(500, 30), Some([33, 37, 45, 255]));
    assert_eq!(f.pixel(500, 300), Some([19, 22, 28, 255]));
    assert_eq!(f.pixel(11, 300), Some([46, 51, 63, 255]));
}

#[test]
fn every_pixel_is_opaque() {
    let f = chrome_only().render("x").unwrap();
    assert!(f.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn rendering_is_deterministic() {
    let font = any_font();
    let mut a = TerminalRenderer::new(TerminalStyle::default(), font.as_ref()).unwrap();
    let mut b = TerminalRenderer::new(TerminalStyle::default(), font.as_ref()).unwrap();

    let text = "searching... (2 files)\nDone.";
    let f1 = a.render(text).unwrap();
    let _ = a.render("something else in between").unwrap();
    let f2 = a.render(text).unwrap();
    let f3 = b.render(text).unwrap();
    assert_eq!(f1, f2);
    assert_eq!(f1, f3);
}

#[test]
fn body_text_changes_pixels_when_a_font_is_available() {
    let Some(font) = any_font() else {
        return;
    };
    let mut r = TerminalRenderer::new(TerminalStyle::default(), Some(&font)).unwrap();
    assert!(r.family_name().is_some());

    let blank = r.render("").unwrap();
    let text = r.render("searching...").unwrap();
    assert_ne!(blank, text);

    // prompt and caption are drawn regardless of body text
    let chrome = chrome_only().render("").unwrap();
    assert_ne!(blank, chrome);
}

#[test]
fn rejects_empty_canvas() {
    let style = TerminalStyle {
        canvas: Canvas {
            width: 0,
            height: 10,
        },
        ..TerminalStyle::default()
    };
    assert!(TerminalRenderer::new(style, None).is_err());
}

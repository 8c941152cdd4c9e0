//! UI-related tests for fuzzy-filer
//!
//! These tests focus on the rendered frame: the list-only and split layouts, column widths and
//! the fixed header and footer lines.
//!
//! These tests create temporary directories and files to simulate different UI scenarios.
//! These temporary resources are automatically cleaned up after the tests complete.

use fuzzy_filer::app::Session;
use fuzzy_filer::config::Config;
use fuzzy_filer::ui::render::{COLUMN_SEPARATOR, NO_MATCHES, render, split_widths};
use fuzzy_filer::utils::fit_to_exact_width;

use ratatui::text::{Line, Text};
use unicode_width::UnicodeWidthStr;

use std::error;
use std::fs;
use tempfile::{TempDir, tempdir};

fn line_str(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn lines(text: &Text) -> Vec<String> {
    text.lines.iter().map(line_str).collect()
}

fn fixture(preview_rows: usize) -> Result<TempDir, Box<dyn error::Error>> {
    let dir = tempdir()?;
    let body: String = (0..preview_rows).map(|i| format!("row {}\n", i)).collect();
    fs::write(dir.path().join("a_notes.txt"), body)?;
    fs::create_dir(dir.path().join("docs"))?;
    fs::write(dir.path().join("docs").join("guide.md"), "guide\n")?;
    Ok(dir)
}

fn config_from(toml: &str) -> Result<Config, Box<dyn error::Error>> {
    Ok(Config::from_toml(toml)?)
}

#[test]
fn test_ui_sanitization_and_exact_width() {
    let pane_width = 10;

    let cases = vec![
        ("short.txt", 10),
        ("very_long_filename.txt", 10),
        ("🦀_crab.rs", 10),
        ("\t_tab", 10),
    ];

    for (input, expected_width) in cases {
        let result = fit_to_exact_width(input, pane_width);
        let actual_width = UnicodeWidthStr::width(result.as_str());

        assert_eq!(
            actual_width, expected_width,
            "Failed to produce exact width for input: '{}'. Result was: '{}' (width: {})",
            input, result, actual_width
        );

        assert!(
            !result.chars().any(|c| c.is_control()),
            "Result contains control characters: {:?}",
            result
        );
    }
}

#[test]
fn list_layout_without_preview() -> Result<(), Box<dyn error::Error>> {
    let config = config_from("[display]\npreview = false")?;
    let dir = fixture(3)?;
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(120, 30);

    let out = lines(&render(&session));

    assert!(out[0].ends_with(" [3 files]"));
    assert_eq!(out[1], "> ");
    assert_eq!(out[2], "─".repeat(80));
    assert_eq!(out[3], "> 📄 a_notes.txt");
    assert_eq!(out[4], "  📁 docs");
    assert_eq!(out[5], "  📄 docs/guide.md");
    assert_eq!(out[6], "");
    assert!(out[7].contains("Enter: select"));
    assert_eq!(out.len(), 8);
    assert!(!out.iter().any(|l| l.contains(COLUMN_SEPARATOR)));
    Ok(())
}

#[test]
fn narrow_separator_follows_viewport() -> Result<(), Box<dyn error::Error>> {
    let config = config_from("[display]\npreview = false")?;
    let dir = fixture(1)?;
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(30, 20);

    let out = lines(&render(&session));
    assert_eq!(out[2], "─".repeat(30));
    Ok(())
}

#[test]
fn split_layout_columns_have_exact_widths() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let dir = fixture(6)?;
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(100, 40);

    let text = render(&session);
    let (left_w, right_w) = split_widths(100);
    assert_eq!((left_w, right_w), (49, 50));

    // 3 entries, 6 preview lines: the preview column decides the row count
    let body = &text.lines[3..9];
    for (i, line) in body.iter().enumerate() {
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content.width(), left_w);
        assert_eq!(line.spans[1].content, COLUMN_SEPARATOR);
        assert_eq!(line.spans[2].content, format!("row {}", i));
    }
    assert!(line_str(&body[0]).starts_with("> 📄 a_notes.txt"));
    assert_eq!(body[5].spans[0].content, " ".repeat(left_w));

    let out = lines(&text);
    assert_eq!(out[9], "");
    assert_eq!(out.len(), 11);
    Ok(())
}

#[test]
fn split_layout_pads_short_preview() -> Result<(), Box<dyn error::Error>> {
    let config = config_from("[display]\npreview_lines = 3")?;
    let dir = tempdir()?;
    for i in 0..6 {
        fs::write(dir.path().join(format!("file{}.txt", i)), "only line\n")?;
    }
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(60, 40);

    let text = render(&session);
    let body = &text.lines[3..9];
    assert_eq!(body[0].spans[2].content, "only line");
    for line in &body[1..] {
        assert_eq!(line.spans[2].content, "");
        assert_eq!(line.spans[0].content.width(), split_widths(60).0);
    }
    assert_eq!(line_str(&text.lines[9]), "");
    Ok(())
}

#[test]
fn long_entries_get_ellipsis_in_split_layout() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let dir = tempdir()?;
    let long_name = format!("{}.txt", "x".repeat(60));
    fs::write(dir.path().join(&long_name), "content\n")?;
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(40, 20);

    let text = render(&session);
    let left = &text.lines[3].spans[0].content;
    assert_eq!(left.width(), split_widths(40).0);
    assert!(left.ends_with('…'));
    Ok(())
}

#[test]
fn no_matches_row_and_list_layout() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let dir = fixture(2)?;
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(80, 24);
    for unit in "qqq".chars() {
        session.handle_input(unit);
    }

    let out = lines(&render(&session));
    assert_eq!(out[1], "> qqq");
    assert_eq!(out[3], NO_MATCHES);
    assert_eq!(out.len(), 6);
    Ok(())
}

#[test]
fn nerd_font_icons_replace_markers() -> Result<(), Box<dyn error::Error>> {
    let config = config_from("[display]\npreview = false\nicons = true")?;
    let dir = fixture(1)?;
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(80, 24);

    let out = lines(&render(&session));
    assert!(!out.iter().any(|l| l.contains('📁') || l.contains('📄')));
    assert!(out[4].ends_with(" docs"));
    Ok(())
}

#[test]
fn long_preview_is_capped_to_keep_footer_visible() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let dir = fixture(30)?;
    let mut session = Session::new(&config, dir.path())?;
    session.set_viewport(80, 12);

    let text = render(&session);
    assert!(session.preview_lines().len() > 7);

    // 12 rows: 3 header rows, 7 body rows, blank line and footer
    let out = lines(&text);
    assert_eq!(out.len(), 12);
    assert_eq!(text.lines[9].spans[2].content, "row 6");
    assert_eq!(out[10], "");
    assert!(out[11].contains("Enter: select"));
    Ok(())
}

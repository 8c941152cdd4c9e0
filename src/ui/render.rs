//! UI renderer implementation.
//!
//! [render] turns a [Session] into one full-screen frame of styled text. It is a pure function
//! of the session: the terminal loop hands the result to the terminal session to draw.
//!
//! Two layouts exist. The list-only layout shows the ranked entries under the query line. The
//! split layout, used whenever preview is enabled and the selection has preview lines, puts the
//! same entry lines into a left column of fixed width and the preview into the right column.

use crate::app::Session;
use crate::config::Keys;
use crate::core::Entry;
use crate::ui::icons::entry_icon;
use crate::utils::helpers::{clip_to_width, fit_to_exact_width, shorten_home_path};

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

/// Separator lines never grow past this width.
pub const MAX_SEPARATOR_WIDTH: usize = 80;
pub const NO_MATCHES: &str = "[No matches]";
pub const COLUMN_SEPARATOR: &str = "│";

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// Header, query and separator lines above the body.
const TOP_ROWS: usize = 3;
/// Blank line and footer below the body.
const BOTTOM_ROWS: usize = 2;

/// Styles used by the renderer.
struct Styles {
    dim: Style,
    dir: Style,
    selected: Style,
    notice: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            dim: Style::new().add_modifier(Modifier::DIM),
            dir: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            notice: Style::new().fg(Color::Red),
        }
    }
}

/// Renders the whole frame for the current session state.
pub fn render(session: &Session<'_>) -> Text<'static> {
    let styles = Styles::default();
    let viewport = session.viewport();
    let width = viewport.width as usize;
    let height = viewport.height as usize;

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(height.max(TOP_ROWS + BOTTOM_ROWS));

    lines.push(Line::from(vec![
        Span::raw(shorten_home_path(session.current_dir())),
        Span::styled(
            format!(" [{} files]", session.entries().len()),
            styles.dim,
        ),
    ]));
    lines.push(Line::raw(format!("> {}", session.query())));
    lines.push(Line::styled(
        "─".repeat(width.min(MAX_SEPARATOR_WIDTH)),
        styles.dim,
    ));

    let entry_rows = entry_rows(session);
    let display = session.config().display();
    let preview = session.preview_lines();

    if display.preview() && !preview.is_empty() {
        let notice_rows = usize::from(session.notice().is_some());
        let available = height.saturating_sub(TOP_ROWS + BOTTOM_ROWS + notice_rows);
        render_split(&mut lines, &entry_rows, preview, width, available, &styles);
    } else {
        for row in entry_rows {
            let style = row_style(&row, &styles);
            lines.push(Line::styled(clip_to_width(&row.text, width), style));
        }
    }

    if let Some(notice) = session.notice() {
        lines.push(Line::styled(clip_to_width(notice, width), styles.notice));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        clip_to_width(&footer_hint(session.config().keys()), width),
        styles.dim,
    ));

    Text::from(lines)
}

/// Left and right column widths of the split layout, separator excluded.
pub fn split_widths(width: usize) -> (usize, usize) {
    let left = (width / 2).saturating_sub(1);
    let right = width.saturating_sub(left + 1);
    (left, right)
}

/// The key hint line, listing the first configured key of each action.
pub fn footer_hint(keys: &Keys) -> String {
    format!(
        "{}/{}: move  {}: select  {}: erase  {}: quit",
        Keys::label(keys.up()),
        Keys::label(keys.down()),
        Keys::label(keys.confirm()),
        Keys::label(keys.erase()),
        Keys::label(keys.quit()),
    )
}

/// One line of the entry column before it is fitted to a width.
struct EntryRow {
    text: String,
    is_dir: bool,
    selected: bool,
}

fn entry_rows(session: &Session<'_>) -> Vec<EntryRow> {
    let filtered = session.filtered();
    if filtered.is_empty() {
        return vec![EntryRow {
            text: NO_MATCHES.to_string(),
            is_dir: false,
            selected: false,
        }];
    }

    let icons = session.config().display().icons();
    filtered
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let selected = idx == session.cursor();
            EntryRow {
                text: entry_line(entry, selected, icons),
                is_dir: entry.is_dir(),
                selected,
            }
        })
        .collect()
}

/// Marker, icon and display path of one entry.
pub fn entry_line(entry: &Entry, selected: bool, nerd_font: bool) -> String {
    let marker = if selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };
    format!(
        "{}{} {}",
        marker,
        entry_icon(entry, nerd_font),
        entry.display_path()
    )
}

fn row_style(row: &EntryRow, styles: &Styles) -> Style {
    let base = if row.is_dir {
        styles.dir
    } else {
        Style::default()
    };
    if row.selected {
        base.patch(styles.selected)
    } else {
        base
    }
}

/// Two-column body. The taller column decides the row count; the preview is cut to the rows
/// left on screen but never below the entry column.
fn render_split(
    lines: &mut Vec<Line<'static>>,
    entry_rows: &[EntryRow],
    preview: &[String],
    width: usize,
    available: usize,
    styles: &Styles,
) {
    let (left_w, right_w) = split_widths(width);
    let rows = entry_rows.len().max(preview.len().min(available));

    for i in 0..rows {
        let (left, left_style) = match entry_rows.get(i) {
            Some(row) => (fit_to_exact_width(&row.text, left_w), row_style(row, styles)),
            None => (" ".repeat(left_w), Style::default()),
        };
        let right = preview
            .get(i)
            .map(|l| clip_to_width(l, right_w))
            .unwrap_or_default();

        lines.push(Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(COLUMN_SEPARATOR, styles.dim),
            Span::raw(right),
        ]));
    }
}

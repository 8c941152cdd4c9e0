//! Helpers for fuzzy-filer.
//!
//! Text fitting for fixed-width columns and path display helpers:
//! - Fitting a line to an exact display width, with an optional ellipsis
//! - Clipping a line to a maximum display width
//! - Expanding tabs and truncating long preview lines
//! - Displaying home directories as "~" in file paths
//!
//! Widths are display columns as measured by `unicode-width`, not bytes or chars.

use unicode_width::UnicodeWidthChar;

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Marker appended to text that was cut short.
pub const ELLIPSIS: char = '…';

/// Number of spaces a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// Returns the home directory of the current user if available.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Shortens the home directory prefix of `path` to `~`.
/// Is used by the header line of the renderer.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

/// Lexically removes `.` and `..` components from `path` without touching the filesystem.
/// `..` at the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Replaces every tab with [TAB_WIDTH] spaces.
pub fn expand_tabs(line: &str) -> String {
    if line.contains('\t') {
        line.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        line.to_string()
    }
}

/// Keeps at most `max_chars` characters, appending [ELLIPSIS] when anything was cut.
pub fn truncate_chars(line: &str, max_chars: usize) -> String {
    match line.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + ELLIPSIS.len_utf8());
            out.push_str(&line[..byte_idx]);
            out.push(ELLIPSIS);
            out
        }
        None => line.to_string(),
    }
}

/// Writes the visible part of `line` into a new string, at most `max_width` columns wide.
///
/// Control characters are dropped and tabs expand to the next multiple of [TAB_WIDTH].
/// Returns the string, its display width and whether anything was cut.
fn sanitize_into(line: &str, max_width: usize) -> (String, usize, bool) {
    let mut out = String::with_capacity(max_width);
    let mut current_w = 0;
    let mut cut = false;

    for ch in line.chars() {
        if ch == '\t' {
            let space_count = TAB_WIDTH - (current_w % TAB_WIDTH);
            if current_w + space_count > max_width {
                cut = true;
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_w + w > max_width {
            cut = true;
            break;
        }

        out.push(ch);
        current_w += w;
    }

    (out, current_w, cut)
}

/// Clips `line` to at most `max_width` display columns. No padding, no ellipsis.
pub fn clip_to_width(line: &str, max_width: usize) -> String {
    sanitize_into(line, max_width).0
}

/// Fits `line` to exactly `width` display columns.
///
/// Lines that overflow are cut and end with [ELLIPSIS]; shorter lines are padded with spaces.
pub fn fit_to_exact_width(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let (mut out, mut current_w, cut) = sanitize_into(line, width);
    if cut {
        // make room for the ellipsis
        let (trimmed, trimmed_w, _) = sanitize_into(&out, width - 1);
        out = trimmed;
        out.push(ELLIPSIS);
        current_w = trimmed_w + 1;
    }

    if current_w < width {
        out.push_str(&" ".repeat(width - current_w));
    }

    out
}

//! Preview generation for the currently selected entry.
//!
//! [preview] turns a path into a bounded list of display lines: a short listing for
//! directories, the first lines of text files, or a one/two line notice for files that are
//! missing, too large or binary. Nothing here ever fails; errors become preview lines.

use crate::utils::helpers::{expand_tabs, truncate_chars};

use humansize::{BINARY, format_size};

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Maximum file size allowed for preview (1 MiB)
pub const MAX_PREVIEW_SIZE: u64 = 1024 * 1024;
/// Bytes sniffed from the file start for binary detection
const BINARY_PEEK_BYTES: usize = 512;
/// Preview lines longer than this are cut
pub const MAX_LINE_CHARS: usize = 80;

pub const EMPTY_MARKER: &str = "(empty)";
pub const MORE_MARKER: &str = "…more";
pub const BINARY_MARKER: &str = "Binary file";

const DIR_ICON: &str = "📁";
const FILE_ICON: &str = "📄";

/// Extensions that are always treated as binary without reading the file.
const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "dylib", "o", "a", "pyc", "class", "wasm", "zip", "tar", "gz", "bz2", "xz",
    "7z", "rar", "jpg", "jpeg", "png", "gif", "bmp", "ico", "webp", "mp3", "mp4", "avi", "mov",
    "mkv", "wav", "flac", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
];

/// Builds the preview for `path`, at most `max_lines` lines of content.
///
/// A stat failure yields a single error line.
pub fn preview(path: &Path, max_lines: usize) -> Vec<String> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => return vec![format!("Error: {}", e)],
    };

    if meta.is_dir() {
        preview_directory(path, max_lines)
    } else {
        preview_file(path, max_lines, meta.len())
    }
}

/// Lists a directory: an item count header, a blank line, then one marked line per entry.
///
/// Never returns more than `max_lines` lines; when entries do not fit, the last slot holds a
/// "... and N more" summary.
pub fn preview_directory(path: &Path, max_lines: usize) -> Vec<String> {
    let read = match fs::read_dir(path) {
        Ok(r) => r,
        Err(e) => return vec![format!("Error: {}", e)],
    };

    let mut items: Vec<(String, bool)> = read
        .filter_map(|e| e.ok())
        .map(|e| {
            let is_dir = e.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            (e.file_name().to_string_lossy().into_owned(), is_dir)
        })
        .collect();
    items.sort_by(|a, b| a.0.cmp(&b.0));

    let total = items.len();
    let mut lines = Vec::with_capacity(max_lines.min(total + 2));
    lines.push(format!("Directory: {} items", total));
    lines.push(String::new());

    let slots = max_lines.saturating_sub(2);
    let shown = if total > slots {
        slots.saturating_sub(1)
    } else {
        total
    };

    for (name, is_dir) in items.iter().take(shown) {
        let icon = if *is_dir { DIR_ICON } else { FILE_ICON };
        lines.push(format!("{} {}", icon, name));
    }

    if shown < total && slots > 0 {
        lines.push(format!("... and {} more", total - shown));
    }

    lines.truncate(max_lines.max(1));
    lines
}

/// Previews a regular file of `size` bytes.
pub fn preview_file(path: &Path, max_lines: usize, size: u64) -> Vec<String> {
    if size > MAX_PREVIEW_SIZE {
        return vec![
            format!("File too large: {}", format_size(size, BINARY)),
            format!(
                "(Preview disabled for files > {})",
                format_size(MAX_PREVIEW_SIZE, BINARY)
            ),
        ];
    }

    if has_binary_extension(path) {
        return vec![BINARY_MARKER.to_string()];
    }

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return vec![format!("Error: {}", e)],
    };

    let mut head = [0u8; BINARY_PEEK_BYTES];
    let n = match read_head(&mut file, &mut head) {
        Ok(n) => n,
        Err(e) => return vec![format!("Error: {}", e)],
    };
    if !looks_like_text(&head[..n]) {
        return vec![BINARY_MARKER.to_string()];
    }

    let mut reader = BufReader::new((&head[..n]).chain(file));
    read_text_lines(&mut reader, max_lines)
}

/// Reads up to `max_lines` display lines. Appends [MORE_MARKER] when data remains.
fn read_text_lines<R: BufRead>(reader: &mut R, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(max_lines);
    let mut buf = Vec::with_capacity(256);

    while lines.len() < max_lines {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
                let raw = String::from_utf8_lossy(&buf);
                lines.push(truncate_chars(&expand_tabs(&raw), MAX_LINE_CHARS));
            }
            Err(e) => {
                tracing::debug!(error = %e, "preview read stopped");
                lines.push(format!("Error reading file: {}", e));
                return lines;
            }
        }
    }

    if lines.len() == max_lines && reader.fill_buf().is_ok_and(|rest| !rest.is_empty()) {
        lines.push(MORE_MARKER.to_string());
    }

    if lines.is_empty() {
        lines.push(EMPTY_MARKER.to_string());
    }

    lines
}

/// Fills `buf` as far as the file allows.
fn read_head(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            BINARY_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// True when `head` is NUL-free UTF-8. A multibyte sequence cut off at the end of the sniffed
/// window still counts as text.
fn looks_like_text(head: &[u8]) -> bool {
    if head.contains(&0) {
        return false;
    }
    match std::str::from_utf8(head) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn missing_path_is_single_error_line() {
        let lines = preview(Path::new("/path/does/not/exist"), 10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error:"));
    }

    #[test]
    fn large_file_reports_too_large() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("big.txt");
        let file = File::create(&path)?;
        file.set_len(2 * 1024 * 1024)?;

        for max_lines in [1, 5, 50] {
            let lines = preview(&path, max_lines);
            assert_eq!(lines.len(), 2);
            assert_eq!(lines[0], "File too large: 2 MiB");
            assert_eq!(lines[1], "(Preview disabled for files > 1 MiB)");
        }
        Ok(())
    }

    #[test]
    fn binary_by_extension_and_content() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let png = dir.path().join("image.PNG");
        std::fs::write(&png, "not really an image")?;
        assert_eq!(preview(&png, 10), vec![BINARY_MARKER.to_string()]);

        let blob = dir.path().join("blob.dat");
        std::fs::write(&blob, [0x66u8, 0x6f, 0x00, 0xff, 0xfe])?;
        assert_eq!(preview(&blob, 10), vec![BINARY_MARKER.to_string()]);
        Ok(())
    }

    #[test]
    fn utf8_cut_at_sniff_boundary_is_text() {
        let mut head = vec![b'a'; BINARY_PEEK_BYTES - 1];
        head.push(0xc3); // first byte of 'ä'
        assert!(looks_like_text(&head));
        assert!(!looks_like_text(&[0xff, b'a', b'b']));
    }

    #[test]
    fn text_file_lines_are_capped_and_marked() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        let mut file = File::create(&path)?;
        for i in 0..10 {
            writeln!(file, "line {}", i)?;
        }

        let lines = preview(&path, 3);
        assert_eq!(lines, vec!["line 0", "line 1", "line 2", MORE_MARKER]);

        let all = preview(&path, 10);
        assert_eq!(all.len(), 10);
        assert_eq!(all[9], "line 9");
        Ok(())
    }

    #[test]
    fn tabs_expand_and_long_lines_truncate() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("code.rs");
        let long = "x".repeat(120);
        std::fs::write(&path, format!("\tfn main() {{}}\r\n{}\n", long))?;

        let lines = preview(&path, 10);
        assert_eq!(lines[0], "    fn main() {}");
        assert_eq!(lines[1].chars().count(), MAX_LINE_CHARS + 1);
        assert!(lines[1].ends_with('…'));
        Ok(())
    }

    #[test]
    fn empty_file_has_marker() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.txt");
        File::create(&path)?;
        assert_eq!(preview(&path, 10), vec![EMPTY_MARKER.to_string()]);
        Ok(())
    }

    #[test]
    fn directory_listing_fits_line_budget() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        std::fs::create_dir(dir.path().join("a_dir"))?;
        for i in 0..8 {
            File::create(dir.path().join(format!("file{}.txt", i)))?;
        }

        let full = preview(dir.path(), 20);
        assert_eq!(full[0], "Directory: 9 items");
        assert_eq!(full[1], "");
        assert_eq!(full[2], format!("{} a_dir", DIR_ICON));
        assert_eq!(full[3], format!("{} file0.txt", FILE_ICON));
        assert_eq!(full.len(), 11);

        let short = preview(dir.path(), 5);
        assert_eq!(short.len(), 5);
        assert_eq!(short[4], "... and 7 more");
        Ok(())
    }
}

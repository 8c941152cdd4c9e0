//! Module for mapping entries to list icons.
//!
//! By default the list uses plain emoji markers. With `display.icons` enabled, [entry_icon]
//! picks a Nerd Font glyph by special name, then by extension.

use crate::core::Entry;

use phf::phf_map;

pub const PLAIN_DIR_ICON: &str = "📁";
pub const PLAIN_FILE_ICON: &str = "📄";

const NERD_DIR_ICON: &str = "\u{e5ff}";
const NERD_FILE_ICON: &str = "\u{f0f6}";

/// File extension to icon mapping
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "rs" => "\u{e7a8}",
    "py" => "\u{e606}",
    "js" => "\u{e74e}",
    "ts" => "\u{e628}",
    "go" => "\u{e627}",
    "md" => "\u{f48a}",
    "html" => "\u{e736}",
    "css" => "\u{e749}",
    "json" => "\u{e60b}",
    "sh" => "\u{e795}",
    "java" => "\u{e738}",
    "c" => "\u{e61e}",
    "cpp" => "\u{e61d}",
    "h" => "\u{f0fd}",
    "rb" => "\u{e791}",
    "lua" => "\u{e620}",
    "toml" => "\u{f013}",
    "yml" => "\u{f013}",
    "yaml" => "\u{f013}",
    "ini" => "\u{f013}",
    "xml" => "\u{f013}",
    "lock" => "\u{f023}",
    "zip" => "\u{f1c6}",
    "tar" => "\u{f1c6}",
    "gz" => "\u{f1c6}",
    "png" => "\u{f03e}",
    "jpg" => "\u{f03e}",
    "jpeg" => "\u{f03e}",
    "gif" => "\u{f03e}",
    "svg" => "\u{f03e}",
    "pdf" => "\u{f1c1}",
    "txt" => "\u{f0f6}",
    "log" => "\u{f1ea}",
};

/// Special file names
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "Cargo.lock" => "\u{f023}",
    "Dockerfile" => "\u{e7b0}",
    "README" => "\u{f48a}",
    ".gitignore" => "\u{e702}",
};

/// Special directory names
static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "bin" => "\u{f471}",
    "lib" => "\u{f487}",
    "src" => "\u{f121}",
    "node_modules" => "\u{e5fa}",
    ".github" => "\u{e5fd}",
    ".config" => "\u{e5fc}",
};

/// Icon shown in front of an entry in the result list.
pub fn entry_icon(entry: &Entry, nerd_font: bool) -> &'static str {
    if !nerd_font {
        return if entry.is_dir() {
            PLAIN_DIR_ICON
        } else {
            PLAIN_FILE_ICON
        };
    }
    nerd_font_icon(entry.name(), entry.is_dir())
}

fn nerd_font_icon(name: &str, is_dir: bool) -> &'static str {
    if is_dir {
        return SPECIAL_DIR_ICON_MAP
            .get(name)
            .copied()
            .unwrap_or(NERD_DIR_ICON);
    }

    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name) {
        return icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
    {
        let ext = &name[dot_idx + 1..];
        if let Some(icon) = EXT_ICON_MAP.get(ext) {
            return icon;
        }
        if let Some(icon) = EXT_ICON_MAP.get(ext.to_ascii_lowercase().as_str()) {
            return icon;
        }
    }

    NERD_FILE_ICON
}

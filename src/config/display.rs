//! Display configuration options for fuzzy-filer
//!
//! This module defines the `[display]` table of the config file: whether the preview pane is
//! shown, how many lines it may hold and which icon set the entry list uses.

use crate::config::general::clamp_at_least;

use serde::Deserialize;

/// Default number of preview content lines.
pub const DEFAULT_PREVIEW_LINES: usize = 20;
/// Smallest useful preview: a directory header, a blank line and one entry.
pub const MIN_PREVIEW_LINES: usize = 3;
pub const MAX_PREVIEW_LINES: usize = 500;

/// Display configuration options
///
/// Default values are provided for all options so a partial `[display]` table is valid.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    preview: bool,
    preview_lines: usize,
    icons: bool,
}

/// Public methods for accessing display configuration options
impl Display {
    #[inline]
    pub fn preview(&self) -> bool {
        self.preview
    }

    #[inline]
    pub fn preview_lines(&self) -> usize {
        self.preview_lines
    }

    #[inline]
    pub fn icons(&self) -> bool {
        self.icons
    }

    pub(crate) fn set_preview(&mut self, enabled: bool) {
        self.preview = enabled;
    }

    /// Applies the valid range to values read from the file.
    pub(crate) fn clamped(mut self) -> Self {
        let lines = clamp_at_least("preview_lines", self.preview_lines, MIN_PREVIEW_LINES);
        if lines > MAX_PREVIEW_LINES {
            tracing::warn!(
                value = lines,
                max = MAX_PREVIEW_LINES,
                "preview_lines above maximum, clamped"
            );
        }
        self.preview_lines = lines.min(MAX_PREVIEW_LINES);
        self
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            preview: true,
            preview_lines: DEFAULT_PREVIEW_LINES,
            icons: false,
        }
    }
}

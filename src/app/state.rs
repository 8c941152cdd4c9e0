//! Session state and main controller module for fuzzy-filer.
//!
//! This module defines the [Session] struct, which holds everything the picker knows while it is
//! running:
//! - Configuration and the keymap built from it
//! - The current scan root and the entries found below it
//! - The query, the ranked result list and the cursor into it
//! - The cached preview of the selected entry
//! - A transient notice (failed drill-down) and the current viewport size
//!
//! The session is driven one input unit at a time through [Session::handle_input], which fully
//! processes the unit (ranking, rescanning, preview generation) before returning a [Step].

use crate::app::keymap::{Action, Keymap};
use crate::config::Config;
use crate::core::preview::preview;
use crate::core::rank::rank;
use crate::core::scan::{Entry, scan};
use crate::error::Result;
use crate::utils::normalize_path;

use std::path::{Path, PathBuf};

/// Outcome of processing one input unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The user aborted, nothing is emitted.
    Quit,
    /// A file was confirmed. Holds its absolute path.
    Selected(PathBuf),
}

/// Size of the drawable area in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Main struct which holds the state of one picker session.
///
/// `cursor` is always a valid index into `filtered`, or 0 when `filtered` is empty.
/// `preview` always belongs to `filtered[cursor]` in `current_dir`.
pub struct Session<'a> {
    config: &'a Config,
    keymap: Keymap,
    viewport: Viewport,

    current_dir: PathBuf,
    entries: Vec<Entry>,
    filtered: Vec<Entry>,
    query: String,
    cursor: usize,

    preview: Vec<String>,
    notice: Option<String>,
}

impl<'a> Session<'a> {
    /// Scans `start` and builds the initial state.
    ///
    /// Fails when `start` cannot be resolved or is not a scannable directory.
    pub fn new(config: &'a Config, start: &Path) -> Result<Self> {
        let current_dir = normalize_path(&std::path::absolute(start)?);
        let entries = scan(&current_dir, config.general().scan_limits())?;
        tracing::info!(
            dir = %current_dir.display(),
            entries = entries.len(),
            "session started"
        );

        let mut session = Self {
            config,
            keymap: Keymap::from_keys(config.keys()),
            viewport: Viewport::default(),
            current_dir,
            entries,
            filtered: Vec::new(),
            query: String::new(),
            cursor: 0,
            preview: Vec::new(),
            notice: None,
        };
        session.refilter();
        Ok(session)
    }

    /// Processes a single input unit.
    ///
    /// A pending notice is cleared by any input. Units that are neither bound nor printable
    /// leave the state unchanged.
    pub fn handle_input(&mut self, unit: char) -> Step {
        self.notice = None;

        match self.keymap.lookup(unit) {
            Some(Action::Quit) => return Step::Quit,
            Some(Action::Up) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.refresh_preview();
                }
            }
            Some(Action::Down) => {
                if self.cursor + 1 < self.filtered.len() {
                    self.cursor += 1;
                    self.refresh_preview();
                }
            }
            Some(Action::Confirm) => return self.confirm(),
            Some(Action::Erase) => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            None if is_printable(unit) => {
                self.query.push(unit);
                self.refilter();
            }
            None => {}
        }
        Step::Continue
    }

    /// Updates the viewport before the next render.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }

    /// Drills into a selected directory or finishes with a selected file.
    fn confirm(&mut self) -> Step {
        let Some(entry) = self.filtered.get(self.cursor) else {
            return Step::Continue;
        };
        let target = self.current_dir.join(entry.path());

        if !entry.is_dir() {
            tracing::info!(path = %target.display(), "entry selected");
            return Step::Selected(target);
        }

        match scan(&target, self.config.general().scan_limits()) {
            Ok(entries) => {
                tracing::info!(
                    dir = %target.display(),
                    entries = entries.len(),
                    "drilled into directory"
                );
                self.current_dir = target;
                self.entries = entries;
                self.query.clear();
                self.cursor = 0;
                self.refilter();
            }
            Err(e) => {
                tracing::warn!(dir = %target.display(), error = %e, "drill-down failed");
                self.notice = Some(format!("Error: {}", e));
            }
        }
        Step::Continue
    }

    /// Re-ranks against the current query and recomputes the preview. The cursor keeps its
    /// index unless the new list is shorter.
    fn refilter(&mut self) {
        self.filtered = rank(&self.entries, &self.query);
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
        self.preview = match self.filtered.get(self.cursor) {
            Some(entry) if self.config.display().preview() => preview(
                &self.current_dir.join(entry.path()),
                self.config.display().preview_lines(),
            ),
            _ => Vec::new(),
        };
    }

    // Accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn filtered(&self) -> &[Entry] {
        &self.filtered
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn selected(&self) -> Option<&Entry> {
        self.filtered.get(self.cursor)
    }

    #[inline]
    pub fn preview_lines(&self) -> &[String] {
        &self.preview
    }

    #[inline]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

/// Printable ASCII, the only units appended to the query.
#[inline]
fn is_printable(unit: char) -> bool {
    matches!(unit, ' '..='~')
}

//! The general (scan) configuration settings for fuzzy-filer.
//!
//! This module defines the [General] struct for deserializing the `[general]` table of the
//! config file and the [InternalGeneral] struct used at runtime, which holds the parsed
//! [ScanLimits].

use crate::core::scan::ScanLimits;

use serde::Deserialize;

/// Default traversal depth below the scan root.
pub const DEFAULT_MAX_DEPTH: usize = 10;
/// Default cap on entries collected by one scan.
pub const DEFAULT_MAX_FILES: usize = 100_000;

/// Exclude patterns used when the config does not list any.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "target",
    "dist",
    "build",
    "*.log",
    ".DS_Store",
    "__pycache__",
    ".pytest_cache",
    ".venv",
    "venv",
];

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    exclude_patterns: Vec<String>,
    max_depth: usize,
    max_files: usize,
}

impl Default for General {
    fn default() -> Self {
        General {
            exclude_patterns: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    exclude_patterns: Vec<String>,
    limits: ScanLimits,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let max_depth = clamp_at_least("max_depth", g.max_depth, 1);
        let max_files = clamp_at_least("max_files", g.max_files, 1);
        let limits = ScanLimits::new(max_depth, max_files, &g.exclude_patterns);
        Self {
            exclude_patterns: g.exclude_patterns,
            limits,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn exclude_patterns(&self) -> &[String] {
        &self.exclude_patterns
    }

    #[inline]
    pub fn scan_limits(&self) -> &ScanLimits {
        &self.limits
    }
}

/// Raises `value` to `min`, warning when that changes it.
pub(crate) fn clamp_at_least(field: &str, value: usize, min: usize) -> usize {
    if value < min {
        tracing::warn!(field, value, min, "config value below minimum, clamped");
        min
    } else {
        value
    }
}

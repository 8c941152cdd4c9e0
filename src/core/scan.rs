//! Bounded directory scanning for fuzzy-filer.
//!
//! Provides the [Entry] struct which is used throughout fuzzy-filer, the [ScanLimits] that bound
//! a walk and the [scan] function itself.
//!
//! The walk is pre-order and sorted by file name. Every node is handed to a [ScanPolicy] which
//! decides a [Disposition] for it, so the filtering rules (depth, excludes, hidden names and the
//! entry cap) live in one place and can be tested without touching the filesystem.

use crate::error::{Error, Result};

use walkdir::WalkDir;

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Represents a single node found during a scan.
///
/// `path` is relative to the scan root and unique within one scan result.
/// `parent` is the relative path of the containing directory, `"."` for root-level entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    parent: PathBuf,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, is_dir: bool) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Entry {
            path,
            name,
            is_dir,
            parent,
        }
    }

    // Accessors

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn parent(&self) -> &Path {
        &self.parent
    }

    #[inline]
    pub fn is_root_level(&self) -> bool {
        self.parent == Path::new(".")
    }

    /// The path shown in the list: the bare name at the scan root, `parent/name` below it.
    pub fn display_path(&self) -> Cow<'_, str> {
        if self.is_root_level() {
            Cow::Borrowed(&self.name)
        } else {
            Cow::Owned(self.parent.join(&self.name).to_string_lossy().into_owned())
        }
    }
}

/// A single exclude rule.
///
/// `*.ext` patterns match as a suffix of the relative path, everything else as a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcludePattern {
    Substring(String),
    Suffix(String),
}

impl ExcludePattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_prefix('*') {
            Some(ext) if ext.starts_with('.') => ExcludePattern::Suffix(ext.to_string()),
            _ => ExcludePattern::Substring(pattern.to_string()),
        }
    }

    pub fn matches(&self, rel_path: &str) -> bool {
        match self {
            ExcludePattern::Substring(s) => rel_path.contains(s.as_str()),
            ExcludePattern::Suffix(s) => rel_path.ends_with(s.as_str()),
        }
    }
}

/// Bounds applied to a single scan.
#[derive(Debug, Clone)]
pub struct ScanLimits {
    max_depth: usize,
    max_entries: usize,
    excludes: Vec<ExcludePattern>,
}

impl ScanLimits {
    pub fn new<S: AsRef<str>>(max_depth: usize, max_entries: usize, excludes: &[S]) -> Self {
        Self {
            max_depth,
            max_entries,
            excludes: excludes
                .iter()
                .map(|p| ExcludePattern::parse(p.as_ref()))
                .collect(),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn is_excluded(&self, rel_path: &str) -> bool {
        self.excludes.iter().any(|p| p.matches(rel_path))
    }
}

/// What the walk should do with a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Include,
    Skip,
    PruneSubtree,
    StopAll,
}

/// Per-scan visitor deciding the [Disposition] of each node.
///
/// Rules are checked in order: depth, exclude patterns, hidden names, entry cap.
/// A rejected directory prunes its whole subtree.
pub struct ScanPolicy<'a> {
    limits: &'a ScanLimits,
    accepted: usize,
}

impl<'a> ScanPolicy<'a> {
    pub fn new(limits: &'a ScanLimits) -> Self {
        Self {
            limits,
            accepted: 0,
        }
    }

    #[inline]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn visit(&mut self, rel_path: &Path, name: &OsStr, is_dir: bool) -> Disposition {
        let reject = if is_dir {
            Disposition::PruneSubtree
        } else {
            Disposition::Skip
        };

        if rel_path.components().count() > self.limits.max_depth {
            return reject;
        }

        if self.limits.is_excluded(&rel_path.to_string_lossy()) {
            return reject;
        }

        if name.as_encoded_bytes().first() == Some(&b'.') {
            return reject;
        }

        if self.accepted >= self.limits.max_entries {
            return Disposition::StopAll;
        }

        self.accepted += 1;
        Disposition::Include
    }
}

/// Walks `root` once and returns the entries accepted by the [ScanPolicy].
///
/// Nodes that fail to read are skipped. Only a root that cannot be stat'ed or is not a
/// directory is an error. Reaching the entry cap ends the walk and returns what was collected.
pub fn scan(root: &Path, limits: &ScanLimits) -> Result<Vec<Entry>> {
    let meta = fs::metadata(root).map_err(|source| Error::ScanRoot {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    tracing::debug!(root = %root.display(), max_depth = limits.max_depth(), "scan started");

    let mut policy = ScanPolicy::new(limits);
    let mut entries = Vec::with_capacity(256);
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .max_depth(limits.max_depth().max(1))
        .sort_by_file_name()
        .into_iter();

    let mut truncated = false;
    while let Some(next) = walker.next() {
        let dent = match next {
            Ok(d) => d,
            Err(e) => {
                tracing::trace!(error = %e, "skipping unreadable node");
                continue;
            }
        };

        let Ok(rel) = dent.path().strip_prefix(root) else {
            continue;
        };
        let is_dir = dent.file_type().is_dir();

        match policy.visit(rel, dent.file_name(), is_dir) {
            Disposition::Include => entries.push(Entry::new(rel, is_dir)),
            Disposition::Skip => {}
            Disposition::PruneSubtree => walker.skip_current_dir(),
            Disposition::StopAll => {
                truncated = true;
                break;
            }
        }
    }

    tracing::debug!(
        root = %root.display(),
        entries = entries.len(),
        truncated,
        "scan finished"
    );
    Ok(entries)
}

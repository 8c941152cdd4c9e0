//! Incremental ranking of scanned entries against the query.
//!
//! The score is a small heuristic over the entry's base name, falling back to its parent
//! directories. It is not a general fuzzy matcher; matches are always contiguous substrings.
//!
//! Score tiers, highest first:
//! - exact base-name match on a directory
//! - base-name prefix match (directories get a bonus)
//! - base-name substring match, decreasing with the match offset (directories get a bonus)
//! - substring match in a parent directory, decreasing with its distance from the entry
//!
//! Entries that score 0 or less are dropped. [rank] is pure: same inputs, same output.

use crate::core::scan::Entry;

use std::cmp::Ordering;

/// The number of results shown in the list.
pub const MAX_RESULTS: usize = 10;

const EXACT_DIR_SCORE: i64 = 10_000;
const PREFIX_SCORE: i64 = 1_000;
const PREFIX_DIR_BONUS: i64 = 500;
const SUBSTRING_SCORE: i64 = 500;
const SUBSTRING_OFFSET_PENALTY: i64 = 10;
const SUBSTRING_DIR_BONUS: i64 = 200;
const PARENT_SCORE: i64 = 100;
const PARENT_DISTANCE_PENALTY: i64 = 20;

/// An entry paired with its score while ranking.
#[derive(Debug, Clone, Copy)]
pub struct ScoredEntry<'a> {
    entry: &'a Entry,
    score: i64,
}

impl<'a> ScoredEntry<'a> {
    pub fn entry(&self) -> &'a Entry {
        self.entry
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Orders by descending score, then directories before files, then ascending name.
fn compare_scored(a: &ScoredEntry, b: &ScoredEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.entry.is_dir().cmp(&a.entry.is_dir()))
        .then_with(|| a.entry.name().cmp(b.entry.name()))
}

/// Returns up to [MAX_RESULTS] scored matches, best first.
pub fn rank_scored<'a>(entries: &'a [Entry], query: &str) -> Vec<ScoredEntry<'a>> {
    let query = query.to_lowercase();
    let mut scored: Vec<ScoredEntry> = entries
        .iter()
        .filter_map(|entry| {
            let score = score(entry, &query);
            (score > 0).then_some(ScoredEntry { entry, score })
        })
        .collect();

    scored.sort_by(compare_scored);
    scored.truncate(MAX_RESULTS);
    scored
}

/// Ranks `entries` against `query`.
///
/// An empty query returns the first [MAX_RESULTS] entries in scan order.
pub fn rank(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return entries.iter().take(MAX_RESULTS).cloned().collect();
    }

    rank_scored(entries, query)
        .into_iter()
        .map(|s| s.entry.clone())
        .collect()
}

/// Scores one entry. `query` must already be lowercase.
pub fn score(entry: &Entry, query: &str) -> i64 {
    let name = entry.name().to_lowercase();

    if entry.is_dir() && name == query {
        return EXACT_DIR_SCORE;
    }

    if name.starts_with(query) {
        let bonus = if entry.is_dir() { PREFIX_DIR_BONUS } else { 0 };
        return PREFIX_SCORE + bonus;
    }

    if let Some(byte_idx) = name.find(query) {
        let offset = name[..byte_idx].chars().count() as i64;
        let bonus = if entry.is_dir() { SUBSTRING_DIR_BONUS } else { 0 };
        return SUBSTRING_SCORE - offset * SUBSTRING_OFFSET_PENALTY + bonus;
    }

    if entry.is_root_level() {
        return 0;
    }

    // innermost directory first
    let segments: Vec<_> = entry.parent().components().collect();
    for (distance, segment) in segments.iter().rev().enumerate() {
        let segment = segment.as_os_str().to_string_lossy().to_lowercase();
        if segment.contains(query) {
            return PARENT_SCORE - distance as i64 * PARENT_DISTANCE_PENALTY;
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn file(path: &str) -> Entry {
        Entry::new(path, false)
    }

    fn dir(path: &str) -> Entry {
        Entry::new(path, true)
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn empty_query_returns_scan_order_prefix() {
        let entries: Vec<Entry> = (0..25).map(|i| file(&format!("f{i:02}"))).collect();
        let ranked = rank(&entries, "");
        assert_eq!(ranked.len(), MAX_RESULTS);
        assert_eq!(ranked[..], entries[..MAX_RESULTS]);
    }

    #[test]
    fn score_tiers_keep_their_order() {
        let exact_dir = score(&dir("src"), "src");
        let prefix_dir = score(&dir("srcs"), "src");
        let prefix_file = score(&file("src.rs"), "src");
        let substring_dir = score(&dir("mysrc"), "src");
        let substring_file = score(&file("mysrc.rs"), "src");
        let parent = score(&file("src/lib.rs"), "src");

        assert_eq!(exact_dir, EXACT_DIR_SCORE);
        assert!(exact_dir > prefix_dir);
        assert!(prefix_dir > prefix_file);
        assert!(prefix_file > substring_dir);
        assert!(substring_dir > substring_file);
        assert!(substring_file > parent);
        assert!(parent > 0);
    }

    #[test]
    fn exact_name_on_file_is_only_a_prefix_match() {
        assert_eq!(score(&file("readme"), "readme"), PREFIX_SCORE);
    }

    #[test]
    fn substring_score_drops_with_offset() {
        let near = score(&file("xread.txt"), "read");
        let far = score(&file("xxxxread.txt"), "read");
        assert_eq!(near, SUBSTRING_SCORE - SUBSTRING_OFFSET_PENALTY);
        assert!(near > far);
    }

    #[test]
    fn parent_match_prefers_closest_directory() {
        let path = Path::new("alpha").join("beta").join("gamma").join("file.txt");
        let entry = Entry::new(path, false);
        assert_eq!(score(&entry, "gamma"), PARENT_SCORE);
        assert_eq!(score(&entry, "beta"), PARENT_SCORE - PARENT_DISTANCE_PENALTY);
        assert_eq!(
            score(&entry, "alpha"),
            PARENT_SCORE - 2 * PARENT_DISTANCE_PENALTY
        );
        assert_eq!(score(&entry, "zzz"), 0);
    }

    #[test]
    fn query_is_case_insensitive() {
        let ranked = rank(&[file("README.md")], "ReAd");
        assert_eq!(names(&ranked), vec!["README.md"]);
    }

    #[test]
    fn prefix_matches_rank_above_unrelated() {
        let entries = vec![dir("src"), file("README.md"), file("reader.txt"), file("notes.txt")];
        let ranked = rank(&entries, "read");
        assert_eq!(names(&ranked), vec!["README.md", "reader.txt"]);
    }

    #[test]
    fn ties_break_dirs_first_then_name() {
        let entries = vec![file("b_log"), dir("z_log"), file("a_log"), dir("c_log")];
        let ranked = rank(&entries, "_log");
        assert_eq!(names(&ranked), vec!["c_log", "z_log", "a_log", "b_log"]);
    }

    #[test]
    fn results_are_capped() {
        let entries: Vec<Entry> = (0..30).map(|i| file(&format!("match{i:02}"))).collect();
        let ranked = rank(&entries, "match");
        assert_eq!(ranked.len(), MAX_RESULTS);
        assert_eq!(ranked[0].name(), "match00");
    }

    #[test]
    fn zero_scores_are_dropped() {
        let entries = vec![file("alpha"), file("beta")];
        assert!(rank(&entries, "gamma").is_empty());
    }
}

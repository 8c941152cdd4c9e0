//! Miscellaneous utility functions for fuzzy-filer.
//!
//! - [cli]: command line parsing and the reference texts printed by `--config-help` and
//!   `--keybinds`.
//! - [helpers]: home directory handling and the width/tab helpers shared by preview and
//!   renderer.

pub mod cli;
pub mod helpers;

pub use helpers::{
    clip_to_width, expand_tabs, fit_to_exact_width, get_home, normalize_path, shorten_home_path,
    truncate_chars,
};

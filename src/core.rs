//! Core runtime logic for fuzzy-filer.
//!
//! This module contains the non-UI "engine" pieces used by the session:
//! - [scan]: bounded directory traversal (see [scan()], [Entry], [ScanLimits]).
//! - [rank]: heuristic scoring of entries against the query (see [rank()]).
//! - [preview]: bounded previews of the selected file or directory.
//! - [terminal]: the terminal session abstraction, its crossterm implementation and the loop.
//!
//! Most callers will import [scan()], [rank()], [Entry] and [ScanLimits] from this module.

pub mod preview;
pub mod rank;
pub mod scan;
pub mod terminal;

pub use preview::preview;
pub use rank::{MAX_RESULTS, rank};
pub use scan::{Disposition, Entry, ExcludePattern, ScanLimits, ScanPolicy, scan};
pub use terminal::{CrosstermSession, Input, TerminalSession, run, run_terminal};

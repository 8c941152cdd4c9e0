//! Error types for fuzzy-filer.
//!
//! Only failures that stop something from starting surface here: a scan root that cannot be
//! walked or a config file that cannot be parsed. Everything that happens while the picker is
//! running (unreadable nodes, preview failures, failed drill-downs) is handled in place.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot scan '{}': {source}", path.display())]
    ScanRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid config at '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

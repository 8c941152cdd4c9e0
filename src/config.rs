//! Configuration for fuzzy-filer.
//!
//! The config file is a TOML document with three optional tables:
//! - `[general]` ([General]): exclude patterns and scan limits.
//! - `[display]` ([Display]): preview pane and icon options.
//! - `[keys]` ([Keys]): key specs for every session action.
//!
//! [load] reads the file into a [RawConfig] and converts it into the runtime [Config].

pub mod display;
pub mod general;
pub mod input;
pub mod load;

pub use display::Display;
pub use general::{General, InternalGeneral};
pub use input::Keys;
pub use load::{Config, RawConfig};

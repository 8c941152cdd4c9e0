//! Application state for fuzzy-filer.
//!
//! - [state]: the [Session] state machine driven by one input unit at a time.
//! - [keymap]: key spec parsing and the input unit to [keymap::Action] mapping.

pub mod keymap;
pub mod state;

pub use keymap::{Action, Keymap};
pub use state::{Session, Step, Viewport};

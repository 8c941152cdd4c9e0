//! Rendering for fuzzy-filer.
//!
//! [render] builds the full frame from the session; [icons] holds the entry icon sets.

pub mod icons;
pub mod render;

pub use render::render;

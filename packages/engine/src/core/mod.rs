//! Core helpers shared by every engine layer.
//!
//! Declared first in `lib.rs` so the exported macros are visible everywhere.

#[macro_use]
pub mod utils;

//! Rock - a circular body that moves and spins as a unit
//!
//! Position and velocity are in canvas pixels (y grows downward),
//! one frame is one unit of time.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{Rock, RockId};

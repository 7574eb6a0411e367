//! RockSystem - owns every rock and advances them one frame at a time
//!
//! Per rock, in collection order:
//! - gravity, air drag, Euler integration, spin
//! - wall bounce against the canvas edges
//! - collision against every later rock (i < j), so each pair is
//!   resolved at most once per frame
//!
//! Pairs are resolved while the outer loop is still integrating, so rock `j`
//! is tested at its previous-frame position and earlier rocks' corrections
//! carry into later pairs. Output depends on collection order.

mod collision;
mod forces;
mod system;
mod walls;

pub use collision::resolve_pair;
pub use forces::{apply_air_drag, apply_gravity, integrate};
pub use system::{RockSystem, StepCounters};
pub use walls::{keep_in_bounds, resolve_walls, Bounds, WallHits};

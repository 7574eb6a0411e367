//! Rockfall Engine - rock launching physics for the canvas toy, in WASM
//!
//! Architecture:
//! - core/       - console logging, numeric helpers
//! - domain/     - material catalog, physics settings
//! - systems/    - rocks and the per-frame stepper
//! - simulation/ - owned state, commands, perf, render extract, JS facade

// Macros must be declared before any module that logs
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::materials;
pub use domain::settings;
pub use systems::rock;
pub use systems::rock_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🪨 Rockfall WASM Engine v{} initialized!", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::materials::Material;
pub use domain::settings::PhysicsSettings;
pub use rock::{Rock, RockId, Vec2};
pub use simulation::{PerfStats, Simulation, SimulationCore, RENDER_STRIDE};

// Export material constants for JS
#[wasm_bindgen]
pub fn mat_granite() -> u8 { materials::MAT_GRANITE }
#[wasm_bindgen]
pub fn mat_marble() -> u8 { materials::MAT_MARBLE }
#[wasm_bindgen]
pub fn mat_obsidian() -> u8 { materials::MAT_OBSIDIAN }
#[wasm_bindgen]
pub fn mat_sandstone() -> u8 { materials::MAT_SANDSTONE }

#[wasm_bindgen]
pub fn material_count() -> usize { materials::MATERIAL_COUNT }

/// 0xRRGGBB fill color for a material index, 0 when unknown
#[wasm_bindgen]
pub fn material_color(index: u8) -> u32 {
    Material::from_index(index).map(Material::color).unwrap_or(0)
}

#[wasm_bindgen]
pub fn materials_manifest_json() -> String {
    materials::manifest_json()
}

/// f32 values per rock in the render buffer
#[wasm_bindgen]
pub fn render_stride() -> usize { RENDER_STRIDE }

//! Simulation - the state the app root owns for the whole session
//!
//! `SimulationCore` holds the rocks, the running flag, settings and perf
//! counters; `facade::Simulation` wraps it for JS. Every frame the host
//! calls `step(width, height)` once and then reads the render extract.
//! Spawn/clear requests arrive between frames, never mid-step.

use crate::domain::materials::Material;
use crate::domain::settings::PhysicsSettings;
use crate::rock::{Rock, RockId};
use crate::rock_system::RockSystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;
pub use render_extract::{outline_points, RENDER_STRIDE};

use perf_timer::PerfTimer;

/// The simulation state
pub struct SimulationCore {
    rocks: RockSystem,
    settings: PhysicsSettings,

    // State
    running: bool,
    frame: u64,
    cap_reported: bool,

    // Render extract, rebuilt on demand
    render_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a running simulation seeded from the clock
    pub fn new() -> Self {
        init::create_simulation_core(random::entropy_seed())
    }

    /// Create a running simulation with a fixed seed (repeatable spawns)
    pub fn new_with_seed(seed: u64) -> Self {
        init::create_simulation_core(seed)
    }

    // === ROCK COMMANDS ===

    /// Spawn a rock with random radius/material at (x, y) moving at (vx, vy)
    pub fn spawn(&mut self, x: f32, y: f32, vx: f32, vy: f32) -> RockId {
        commands::spawn(self, x, y, vx, vy)
    }

    /// Spawn a rock with explicit radius and material
    pub fn spawn_with(&mut self, x: f32, y: f32, vx: f32, vy: f32, radius: f32, material: Material) -> RockId {
        commands::spawn_with(self, x, y, vx, vy, radius, material)
    }

    /// Same as `spawn_with`, material given by catalog index
    pub fn spawn_with_index(
        &mut self,
        x: f32,
        y: f32,
        vx: f32,
        vy: f32,
        radius: f32,
        material: u8,
    ) -> Result<RockId, String> {
        commands::spawn_with_index(self, x, y, vx, vy, radius, material)
    }

    /// "Drop rock" button: falls in from above the canvas at a random x
    pub fn drop_rock(&mut self, canvas_width: f32) -> RockId {
        commands::drop_rock(self, canvas_width)
    }

    /// Drag-release: rock appears at the drag start and flies away from the release point
    pub fn launch(&mut self, start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> RockId {
        commands::launch(self, start_x, start_y, end_x, end_y)
    }

    /// Remove every rock
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn count(&self) -> usize {
        self.rocks.count()
    }

    /// Read-only view for renderers, in collection order
    pub fn rocks(&self) -> &[Rock] {
        self.rocks.rocks()
    }

    pub fn rock(&self, id: RockId) -> Option<&Rock> {
        self.rocks.get(id)
    }

    // === RUN STATE ===

    /// Step the simulation forward one frame. No-op while paused.
    pub fn step(&mut self, canvas_width: f32, canvas_height: f32) {
        step::step(self, canvas_width, canvas_height);
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip running/paused, returns the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames actually stepped since creation or the last clear
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // === SETTINGS ===

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        settings::settings_json(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), String> {
        settings::set_gravity(self, gravity)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === RENDER EXTRACT ===

    /// Pack every rock into the render buffer, returns the rock count
    pub fn extract_render_data(&mut self) -> usize {
        render_extract::extract_render_data(self)
    }

    /// Pointer to the packed render buffer (for a JS Float32Array view)
    pub fn render_ptr(&self) -> *const f32 {
        self.render_buffer.as_ptr()
    }

    /// Render buffer length in f32 elements
    pub fn render_len(&self) -> usize {
        self.render_buffer.len()
    }

    pub fn render_data(&self) -> &[f32] {
        &self.render_buffer
    }

    /// Jittered outline of one rock, `[x0, y0, x1, y1, ...]` relative to its center
    pub fn rock_outline(&self, id: RockId, segments: u32) -> Vec<f32> {
        render_extract::rock_outline(self, id, segments)
    }
}

impl Default for SimulationCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// JS handle to one simulation. The page keeps a single instance and drives
/// it from its `requestAnimationFrame` loop.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a running simulation seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulationCore::new(),
        }
    }

    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            core: SimulationCore::new_with_seed(seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn rock_count(&self) -> usize { self.core.count() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    // === ROCK API ===

    /// Spawn a rock at (x, y) with velocity (vx, vy). Returns its id.
    pub fn spawn(&mut self, x: f32, y: f32, vx: f32, vy: f32) -> u32 {
        self.core.spawn(x, y, vx, vy)
    }

    /// Spawn a rock with explicit radius and material index
    pub fn spawn_with(&mut self, x: f32, y: f32, vx: f32, vy: f32, radius: f32, material: u8) -> Result<u32, JsValue> {
        self.core
            .spawn_with_index(x, y, vx, vy, radius, material)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// "Drop rock" button
    pub fn drop_rock(&mut self, canvas_width: f32) -> u32 {
        self.core.drop_rock(canvas_width)
    }

    /// Drag-release gesture, canvas coordinates of pointer down and up
    pub fn launch(&mut self, start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> u32 {
        self.core.launch(start_x, start_y, end_x, end_y)
    }

    /// Clear all rocks
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn count(&self) -> usize {
        self.core.count()
    }

    // === RUN STATE ===

    /// Step the simulation forward one frame (no-op while paused)
    pub fn step(&mut self, canvas_width: f32, canvas_height: f32) {
        self.core.step(canvas_width, canvas_height);
    }

    pub fn set_running(&mut self, running: bool) {
        self.core.set_running(running);
    }

    pub fn toggle_running(&mut self) -> bool {
        self.core.toggle_running()
    }

    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    // === SETTINGS ===

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.core
            .set_gravity(gravity)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER API ===

    /// Refresh the packed render buffer, returns the rock count
    pub fn extract_render_data(&mut self) -> usize {
        self.core.extract_render_data()
    }

    /// Get pointer to the render buffer (RENDER_STRIDE f32 per rock)
    pub fn render_ptr(&self) -> *const f32 {
        self.core.render_ptr()
    }

    /// Render buffer length in f32 elements
    pub fn render_len(&self) -> usize {
        self.core.render_len()
    }

    pub fn render_len_bytes(&self) -> usize {
        self.core.render_len() * std::mem::size_of::<f32>()
    }

    /// Outline polygon for a rock, empty when the id is unknown
    pub fn rock_outline(&self, id: u32, segments: u32) -> Vec<f32> {
        self.core.rock_outline(id, segments)
    }
}

impl Simulation {
    /// Read-only access for native hosts and tests
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

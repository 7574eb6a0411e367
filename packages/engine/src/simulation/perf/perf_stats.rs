use wasm_bindgen::prelude::*;

use crate::rock_system::StepCounters;

/// Snapshot of the last executed step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) rock_count: u32,
    pub(super) frame: u64,
    pub(super) pair_checks: u32,
    pub(super) pair_collisions: u32,
    pub(super) wall_hits: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record(&mut self, step_ms: f64, rock_count: usize, frame: u64, counters: &StepCounters) {
        self.step_ms = step_ms;
        self.rock_count = rock_count.min(u32::MAX as usize) as u32;
        self.frame = frame;
        self.pair_checks = counters.pair_checks;
        self.pair_collisions = counters.pair_collisions;
        self.wall_hits = counters.wall_hits;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn rock_count(&self) -> u32 { self.rock_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn pair_collisions(&self) -> u32 { self.pair_collisions }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
}

use crate::rock_system::Bounds;

use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore, canvas_width: f32, canvas_height: f32) {
    // Paused: rocks stay exactly where they are
    if !sim.running {
        return;
    }

    let perf_on = sim.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let counters = sim
        .rocks
        .update(Bounds::new(canvas_width, canvas_height), &sim.settings);
    sim.frame += 1;

    if let Some(t0) = step_start {
        sim.perf_stats.record(t0.elapsed_ms(), sim.rocks.count(), sim.frame, &counters);
    }
}

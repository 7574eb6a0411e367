use crate::domain::settings::PhysicsSettings;
use crate::rock_system::RockSystem;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(seed: u64) -> SimulationCore {
    SimulationCore {
        rocks: RockSystem::with_seed(seed),
        settings: PhysicsSettings::default(),
        running: true,
        frame: 0,
        cap_reported: false,
        render_buffer: Vec::with_capacity(256),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

use crate::domain::settings::PhysicsSettings;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn load_settings_json(sim: &mut SimulationCore, json: &str) -> Result<(), String> {
    let settings = PhysicsSettings::from_json(json)?;
    apply(sim, settings);
    console_log!("settings loaded: {}", sim.settings.to_json());
    Ok(())
}

pub(super) fn settings_json(sim: &SimulationCore) -> String {
    sim.settings.to_json()
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f32) -> Result<(), String> {
    let mut settings = sim.settings.clone();
    settings.gravity = gravity;
    settings.validate()?;
    apply(sim, settings);
    Ok(())
}

fn apply(sim: &mut SimulationCore, settings: PhysicsSettings) {
    sim.settings = settings;
    sim.cap_reported = false;
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

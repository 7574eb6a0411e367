use crate::domain::materials::Material;
use crate::rock::{RockId, Vec2};

use super::SimulationCore;

pub(super) fn spawn(sim: &mut SimulationCore, x: f32, y: f32, vx: f32, vy: f32) -> RockId {
    make_room(sim);
    sim.rocks.spawn(Vec2::new(x, y), Vec2::new(vx, vy), &sim.settings)
}

pub(super) fn spawn_with(
    sim: &mut SimulationCore,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: f32,
    material: Material,
) -> RockId {
    make_room(sim);
    sim.rocks
        .spawn_with(Vec2::new(x, y), Vec2::new(vx, vy), radius, material, &sim.settings)
}

pub(super) fn spawn_with_index(
    sim: &mut SimulationCore,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: f32,
    material: u8,
) -> Result<RockId, String> {
    let Some(material) = Material::from_index(material) else {
        return Err(format!("unknown material index {}", material));
    };
    Ok(spawn_with(sim, x, y, vx, vy, radius, material))
}

pub(super) fn drop_rock(sim: &mut SimulationCore, canvas_width: f32) -> RockId {
    make_room(sim);
    sim.rocks.spawn_dropped(canvas_width, &sim.settings)
}

pub(super) fn launch(sim: &mut SimulationCore, start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> RockId {
    let power = sim.settings.launch_power;
    let velocity = (Vec2::new(start_x, start_y) - Vec2::new(end_x, end_y)) * power;
    spawn(sim, start_x, start_y, velocity.x, velocity.y)
}

pub(super) fn clear(sim: &mut SimulationCore) {
    let removed = sim.rocks.count();
    sim.rocks.clear();
    sim.render_buffer.clear();
    sim.frame = 0;
    sim.cap_reported = false;
    console_log!("cleared {} rocks", removed);
}

/// Enforce `max_rocks` (0 = unbounded) by dropping the oldest rocks.
fn make_room(sim: &mut SimulationCore) {
    let cap = sim.settings.max_rocks;
    if cap == 0 {
        return;
    }
    let evicted = sim.rocks.evict_oldest(cap - 1);
    if evicted > 0 && !sim.cap_reported {
        sim.cap_reported = true;
        console_log!("rock cap of {} reached, dropping oldest rocks", cap);
    }
}

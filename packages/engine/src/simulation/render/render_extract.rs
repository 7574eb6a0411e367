use std::f32::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::rock::{Rock, RockId};

use super::SimulationCore;

/// f32 values per rock in the render buffer:
/// `id_lo, id_hi, x, y, radius, rotation, material_index`.
///
/// The id is split into 16-bit halves so every u32 survives the f32 slot;
/// JS rebuilds it as `id_lo + id_hi * 65536`.
pub const RENDER_STRIDE: usize = 7;

const OUTLINE_MIN_SEGMENTS: u32 = 3;
const OUTLINE_MAX_SEGMENTS: u32 = 64;
/// Outline vertices sit between this fraction of the radius and the radius
const OUTLINE_MIN_SCALE: f32 = 0.82;

pub(super) fn extract_render_data(sim: &mut SimulationCore) -> usize {
    let count = sim.rocks.count();
    sim.render_buffer.clear();
    sim.render_buffer.reserve(count * RENDER_STRIDE);

    for rock in sim.rocks.iter() {
        let [id_lo, id_hi] = id_halves(rock.id());
        sim.render_buffer.extend_from_slice(&[
            id_lo,
            id_hi,
            rock.pos.x,
            rock.pos.y,
            rock.radius(),
            rock.angle,
            rock.material().index() as f32,
        ]);
    }

    count
}

#[inline]
pub(super) fn id_halves(id: RockId) -> [f32; 2] {
    [(id & 0xFFFF) as f32, (id >> 16) as f32]
}

pub(super) fn rock_outline(sim: &SimulationCore, id: RockId, segments: u32) -> Vec<f32> {
    match sim.rocks.get(id) {
        Some(rock) => outline_points(rock, segments),
        None => Vec::new(),
    }
}

/// Irregular polygon for drawing a rock, in rock-local unrotated space.
///
/// The jitter is seeded by the rock id, so a rock keeps its shape for its
/// whole life. Rotation is applied by the renderer.
pub fn outline_points(rock: &Rock, segments: u32) -> Vec<f32> {
    let segments = segments.clamp(OUTLINE_MIN_SEGMENTS, OUTLINE_MAX_SEGMENTS);
    let mut rng = SmallRng::seed_from_u64(u64::from(rock.id()));
    let mut points = Vec::with_capacity(segments as usize * 2);

    for k in 0..segments {
        let u: f32 = rng.gen();
        let r = rock.radius() * (OUTLINE_MIN_SCALE + (1.0 - OUTLINE_MIN_SCALE) * u);
        let (sin, cos) = (k as f32 / segments as f32 * TAU).sin_cos();
        points.push(r * cos);
        points.push(r * sin);
    }

    points
}

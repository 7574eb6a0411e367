use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::utils::finite_or;
use crate::domain::materials::{Material, MATERIAL_COUNT};
use crate::domain::settings::{PhysicsSettings, SPIN_LIMIT};
use crate::rock::{Rock, RockId, Vec2};

use super::collision::resolve_pair;
use super::forces::{apply_air_drag, apply_gravity, integrate};
use super::walls::{keep_in_bounds, resolve_walls, Bounds};

/// Manages all rocks in the simulation.
///
/// The random source is a type parameter so tests can inject a fixed
/// generator; the engine uses a seeded `SmallRng`.
pub struct RockSystem<R = SmallRng> {
    rocks: Vec<Rock>,
    next_id: RockId,
    rng: R,
}

/// Work done by one `update` pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub pair_checks: u32,
    pub pair_collisions: u32,
    pub wall_hits: u32,
}

impl RockSystem<SmallRng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RockSystem<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rocks: Vec::new(),
            next_id: 1,
            rng,
        }
    }

    /// Spawn a rock with random radius, material and spin.
    pub fn spawn(&mut self, pos: Vec2, velocity: Vec2, settings: &PhysicsSettings) -> RockId {
        let radius = self.random_radius(settings);
        let material = Material::ALL[self.rng.gen_range(0..MATERIAL_COUNT)];
        self.spawn_with(pos, velocity, radius, material, settings)
    }

    /// Spawn a rock with explicit radius and material. Spin is still random.
    ///
    /// A non-positive or non-finite radius falls back to `min_radius`.
    pub fn spawn_with(
        &mut self,
        pos: Vec2,
        velocity: Vec2,
        radius: f32,
        material: Material,
        settings: &PhysicsSettings,
    ) -> RockId {
        let radius = if radius.is_finite() && radius > 0.0 {
            radius
        } else {
            settings.min_radius
        };
        let spin = self.random_spin(settings);

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        self.rocks.push(Rock::new(id, pos, velocity, radius, material, spin));
        id
    }

    /// Spawn a resting rock just above the visible area at a random x.
    pub fn spawn_dropped(&mut self, canvas_width: f32, settings: &PhysicsSettings) -> RockId {
        let margin = settings.max_radius;
        let x = if canvas_width.is_finite() && canvas_width > 2.0 * margin {
            self.rng.gen_range(margin..canvas_width - margin)
        } else {
            finite_or(canvas_width * 0.5, margin)
        };
        self.spawn(Vec2::new(x, -margin), Vec2::zero(), settings)
    }

    fn random_radius(&mut self, settings: &PhysicsSettings) -> f32 {
        let span = settings.max_radius - settings.min_radius;
        if span.is_finite() && span > 0.0 {
            self.rng.gen_range(settings.min_radius..settings.max_radius)
        } else {
            settings.min_radius
        }
    }

    fn random_spin(&mut self, settings: &PhysicsSettings) -> f32 {
        let max = settings.max_spin.abs();
        if max > 0.0 {
            let max = max.min(SPIN_LIMIT);
            self.rng.gen_range(-max..=max)
        } else {
            0.0
        }
    }

    /// Drop the oldest rocks until at most `keep` remain. Returns how many went.
    pub fn evict_oldest(&mut self, keep: usize) -> usize {
        let excess = self.rocks.len().saturating_sub(keep);
        self.rocks.drain(..excess);
        excess
    }

    /// Remove every rock. Ids keep counting up.
    pub fn clear(&mut self) {
        self.rocks.clear();
    }

    pub fn count(&self) -> usize {
        self.rocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rocks.is_empty()
    }

    pub fn rocks(&self) -> &[Rock] {
        &self.rocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rock> {
        self.rocks.iter()
    }

    pub fn get(&self, id: RockId) -> Option<&Rock> {
        self.rocks.iter().find(|r| r.id() == id)
    }

    /// Advance every rock by one frame.
    pub fn update(&mut self, bounds: Bounds, settings: &PhysicsSettings) -> StepCounters {
        let mut counters = StepCounters::default();

        for i in 0..self.rocks.len() {
            let (head, tail) = self.rocks.split_at_mut(i + 1);
            let rock = &mut head[i];

            apply_gravity(rock, settings.gravity);
            apply_air_drag(rock, settings.air_drag);
            integrate(rock);
            counters.wall_hits += resolve_walls(rock, bounds, settings).count();

            for other in tail.iter_mut() {
                counters.pair_checks += 1;
                if resolve_pair(rock, other, settings.collision_damping) {
                    counters.pair_collisions += 1;
                    // `rock` already had its wall pass this frame
                    keep_in_bounds(rock, bounds);
                }
            }
        }

        counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn settings() -> PhysicsSettings {
        PhysicsSettings::default()
    }

    #[test]
    fn spawned_rocks_respect_catalog_ranges() {
        let s = settings();
        let mut system = RockSystem::with_seed(42);
        let mut seen = [false; MATERIAL_COUNT];
        for i in 0..500 {
            system.spawn(Vec2::new(i as f32, 0.0), Vec2::zero(), &s);
        }
        for rock in system.iter() {
            assert!(rock.radius() >= 15.0 && rock.radius() < 40.0);
            assert!(rock.angular_vel.abs() <= 0.05);
            assert_eq!(rock.mass(), rock.radius() * rock.material().density());
            seen[rock.material().index() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every material should show up in 500 spawns");
    }

    #[test]
    fn injected_generator_controls_spawn() {
        let s = settings();
        let mut system = RockSystem::with_rng(StepRng::new(0, 0));
        let id = system.spawn(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), &s);
        let rock = system.get(id).unwrap();
        assert_eq!(rock.radius(), 15.0);
        assert_eq!(rock.material(), Material::Granite);
        assert_eq!(rock.angular_vel, -0.05);
        assert_eq!(rock.pos, Vec2::new(1.0, 2.0));
        assert_eq!(rock.velocity, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn ids_are_unique_and_survive_clear() {
        let s = settings();
        let mut system = RockSystem::with_seed(1);
        let a = system.spawn(Vec2::zero(), Vec2::zero(), &s);
        let b = system.spawn(Vec2::zero(), Vec2::zero(), &s);
        system.clear();
        assert_eq!(system.count(), 0);
        assert!(system.is_empty());
        let c = system.spawn(Vec2::zero(), Vec2::zero(), &s);
        assert!(a < b && b < c);
    }

    #[test]
    fn spawn_with_rejects_degenerate_radius() {
        let s = settings();
        let mut system = RockSystem::with_seed(3);
        let id = system.spawn_with(Vec2::zero(), Vec2::zero(), -4.0, Material::Marble, &s);
        assert_eq!(system.get(id).unwrap().radius(), s.min_radius);
        let id = system.spawn_with(Vec2::zero(), Vec2::zero(), f32::NAN, Material::Marble, &s);
        assert!(system.get(id).unwrap().mass() > 0.0);
    }

    #[test]
    fn dropped_rocks_start_above_canvas_at_rest() {
        let s = settings();
        let mut system = RockSystem::with_seed(9);
        for _ in 0..50 {
            system.spawn_dropped(600.0, &s);
        }
        for rock in system.iter() {
            assert!(rock.pos.x >= 40.0 && rock.pos.x < 560.0);
            assert_eq!(rock.pos.y, -40.0);
            assert_eq!(rock.velocity, Vec2::zero());
        }

        let id = system.spawn_dropped(50.0, &s);
        assert_eq!(system.get(id).unwrap().pos.x, 25.0);

        let id = system.spawn_dropped(f32::INFINITY, &s);
        assert_eq!(system.get(id).unwrap().pos.x, s.max_radius);
        let id = system.spawn_dropped(f32::NAN, &s);
        assert_eq!(system.get(id).unwrap().pos.x, s.max_radius);
    }

    #[test]
    fn unchecked_settings_never_break_sampling() {
        let mut s = settings();
        s.max_spin = 3e38;
        s.min_radius = -3e38;
        s.max_radius = 3e38;
        let mut system = RockSystem::with_seed(4);
        let id = system.spawn(Vec2::zero(), Vec2::zero(), &s);
        let rock = system.get(id).unwrap();
        assert!(rock.angular_vel.abs() <= SPIN_LIMIT);

        s.max_spin = f32::INFINITY;
        let id = system.spawn(Vec2::zero(), Vec2::zero(), &s);
        assert!(system.get(id).unwrap().angular_vel.is_finite());
    }

    #[test]
    fn evict_oldest_keeps_newest() {
        let s = settings();
        let mut system = RockSystem::with_seed(5);
        for _ in 0..5 {
            system.spawn(Vec2::zero(), Vec2::zero(), &s);
        }
        assert_eq!(system.evict_oldest(3), 2);
        let ids: Vec<RockId> = system.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(system.evict_oldest(10), 0);
    }

    #[test]
    fn update_on_empty_system_does_nothing() {
        let mut system = RockSystem::with_seed(0);
        let counters = system.update(Bounds::new(400.0, 400.0), &settings());
        assert_eq!(counters, StepCounters::default());
    }

    #[test]
    fn every_unordered_pair_is_checked_once() {
        let s = settings();
        let mut system = RockSystem::with_seed(11);
        for i in 0..6 {
            system.spawn(Vec2::new(60.0 + 90.0 * i as f32, 100.0), Vec2::zero(), &s);
        }
        let counters = system.update(Bounds::new(800.0, 400.0), &s);
        assert_eq!(counters.pair_checks, 15);
        assert_eq!(counters.pair_collisions, 0);
    }

    #[test]
    fn later_rock_is_tested_at_its_previous_position() {
        let s = settings();
        let mut system = RockSystem::with_seed(2);
        // Rock 1 falls first; rock 2 sits 40.2 below it, so the pair only
        // touches after rock 1 has moved this frame.
        let a = system.spawn_with(Vec2::new(200.0, 100.0), Vec2::new(0.0, 1.0), 20.0, Material::Granite, &s);
        let b = system.spawn_with(Vec2::new(200.0, 140.2), Vec2::zero(), 20.0, Material::Granite, &s);
        let counters = system.update(Bounds::new(400.0, 400.0), &s);
        assert_eq!(counters.pair_collisions, 1);

        let ra = system.get(a).unwrap();
        let rb = system.get(b).unwrap();
        // a handed its downward velocity to b
        assert!(ra.velocity.y.abs() < 1e-5);
        assert!(rb.velocity.y > 1.0);
    }
}

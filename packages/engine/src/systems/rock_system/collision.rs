use crate::rock::{Rock, Vec2};

/// Separation axis used when two centers coincide exactly
const COINCIDENT_AXIS: Vec2 = Vec2::new(1.0, 0.0);

/// Resolve one rock-rock contact. Returns `false` when the circles do not overlap.
///
/// Overlap is split evenly between both rocks along the center line.
/// Velocities go through the 1-D elastic exchange on each raw axis (not the
/// contact normal), then both are scaled by `damping`.
pub fn resolve_pair(a: &mut Rock, b: &mut Rock, damping: f32) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if distance.is_nan() || distance >= min_distance {
        return false;
    }

    let normal = if distance > 0.0 {
        delta * (1.0 / distance)
    } else {
        COINCIDENT_AXIS
    };
    let push = normal * ((min_distance - distance) * 0.5);
    a.pos -= push;
    b.pos += push;

    let (m1, m2) = (a.mass(), b.mass());
    let (ax, bx) = elastic_1d(a.velocity.x, b.velocity.x, m1, m2);
    let (ay, by) = elastic_1d(a.velocity.y, b.velocity.y, m1, m2);
    a.velocity = Vec2::new(ax, ay) * damping;
    b.velocity = Vec2::new(bx, by) * damping;

    true
}

/// Head-on elastic collision of two point masses on one axis
#[inline]
fn elastic_1d(v1: f32, v2: f32, m1: f32, m2: f32) -> (f32, f32) {
    let total = m1 + m2;
    (
        (v1 * (m1 - m2) + 2.0 * m2 * v2) / total,
        (v2 * (m2 - m1) + 2.0 * m1 * v1) / total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::materials::Material;
    use approx::assert_relative_eq;

    fn rock(id: u32, x: f32, y: f32, vx: f32, vy: f32, radius: f32, material: Material) -> Rock {
        Rock::new(id, Vec2::new(x, y), Vec2::new(vx, vy), radius, material, 0.0)
    }

    #[test]
    fn separated_rocks_are_ignored() {
        let mut a = rock(1, 0.0, 0.0, 1.0, 0.0, 20.0, Material::Granite);
        let mut b = rock(2, 50.0, 0.0, -1.0, 0.0, 20.0, Material::Granite);
        assert!(!resolve_pair(&mut a, &mut b, 0.8));
        assert_eq!(a.velocity.x, 1.0);
        assert_eq!(b.pos.x, 50.0);
    }

    #[test]
    fn touching_rocks_are_not_a_collision() {
        let mut a = rock(1, 0.0, 0.0, 1.0, 0.0, 20.0, Material::Marble);
        let mut b = rock(2, 40.0, 0.0, -1.0, 0.0, 20.0, Material::Marble);
        assert!(!resolve_pair(&mut a, &mut b, 0.8));

        b.pos.x = 39.0;
        assert!(resolve_pair(&mut a, &mut b, 0.8));
    }

    #[test]
    fn overlap_is_split_evenly() {
        let mut a = rock(1, 100.0, 100.0, 0.0, 0.0, 20.0, Material::Granite);
        let mut b = rock(2, 130.0, 100.0, 0.0, 0.0, 20.0, Material::Granite);
        assert!(resolve_pair(&mut a, &mut b, 0.8));
        assert_relative_eq!(a.pos.x, 95.0, epsilon = 1e-4);
        assert_relative_eq!(b.pos.x, 135.0, epsilon = 1e-4);
        assert_relative_eq!((b.pos - a.pos).length(), 40.0, epsilon = 1e-4);
    }

    #[test]
    fn equal_masses_swap_velocities_then_damp() {
        let mut a = rock(1, 100.0, 100.0, 4.0, 1.0, 20.0, Material::Granite);
        let mut b = rock(2, 130.0, 100.0, -2.0, 0.0, 20.0, Material::Granite);
        resolve_pair(&mut a, &mut b, 0.8);
        assert_relative_eq!(a.velocity.x, -1.6, epsilon = 1e-5);
        assert_relative_eq!(a.velocity.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(b.velocity.x, 3.2, epsilon = 1e-5);
        assert_relative_eq!(b.velocity.y, 0.8, epsilon = 1e-5);
    }

    #[test]
    fn coincident_centers_separate_along_x_without_nan() {
        let mut a = rock(1, 200.0, 200.0, 1.0, -1.0, 20.0, Material::Obsidian);
        let mut b = rock(2, 200.0, 200.0, 0.0, 0.0, 30.0, Material::Marble);
        assert!(resolve_pair(&mut a, &mut b, 0.8));

        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert_relative_eq!(a.pos.x, 175.0, epsilon = 1e-4);
        assert_relative_eq!(b.pos.x, 225.0, epsilon = 1e-4);
        assert_eq!(a.pos.y, 200.0);
        assert_eq!(b.pos.y, 200.0);
    }

    #[test]
    fn nan_position_is_skipped() {
        let mut a = rock(1, f32::NAN, 0.0, 0.0, 0.0, 20.0, Material::Granite);
        let mut b = rock(2, 0.0, 0.0, 1.0, 0.0, 20.0, Material::Granite);
        assert!(!resolve_pair(&mut a, &mut b, 0.8));
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn collisions_never_add_energy() {
        let cases = [
            (3.0, -2.0, -4.0, 1.5, 15.0, 39.0, Material::Granite, Material::Sandstone),
            (0.0, 0.0, 10.0, 10.0, 25.0, 25.0, Material::Marble, Material::Obsidian),
            (-8.0, 6.0, 0.5, -0.5, 39.9, 15.1, Material::Obsidian, Material::Granite),
            (1.0, 1.0, 1.0, 1.0, 20.0, 30.0, Material::Sandstone, Material::Sandstone),
        ];
        for (avx, avy, bvx, bvy, ra, rb, ma, mb) in cases {
            let mut a = rock(1, 100.0, 100.0, avx, avy, ra, ma);
            let mut b = rock(2, 110.0, 95.0, bvx, bvy, rb, mb);
            let before = a.kinetic_energy() + b.kinetic_energy();
            assert!(resolve_pair(&mut a, &mut b, 0.8));
            let after = a.kinetic_energy() + b.kinetic_energy();
            assert!(after <= before + 1e-3, "energy grew: {} -> {}", before, after);
        }
    }

    #[test]
    fn elastic_exchange_conserves_momentum() {
        let (v1, v2) = elastic_1d(3.0, -1.0, 2.0, 5.0);
        assert_relative_eq!(2.0 * 3.0 + 5.0 * -1.0, 2.0 * v1 + 5.0 * v2, epsilon = 1e-5);
    }
}

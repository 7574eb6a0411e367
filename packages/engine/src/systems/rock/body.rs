use crate::domain::materials::Material;

use super::vec2::Vec2;

pub type RockId = u32;

/// Rock - simulated circular body
///
/// Radius, mass and material are fixed at creation; motion state is public
/// so the stepper can integrate it in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Rock {
    // === Physics State ===
    /// Center position
    pub pos: Vec2,
    /// Velocity vector (pixels per frame)
    pub velocity: Vec2,
    /// Rotation angle (radians, accumulates without wrapping)
    pub angle: f32,
    /// Angular velocity (radians per frame)
    pub angular_vel: f32,

    // === Fixed at creation ===
    id: RockId,
    radius: f32,
    mass: f32,
    material: Material,
}

impl Rock {
    /// Create a rock. `radius` must be positive; mass is `radius × density`.
    pub fn new(id: RockId, pos: Vec2, velocity: Vec2, radius: f32, material: Material, angular_vel: f32) -> Self {
        debug_assert!(radius > 0.0, "rock radius must be positive");
        Self {
            pos,
            velocity,
            angle: 0.0,
            angular_vel,
            id,
            radius,
            mass: radius * material.density(),
            material,
        }
    }

    #[inline]
    pub fn id(&self) -> RockId {
        self.id
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.material
    }

    /// Wall restitution of this rock's material
    #[inline]
    pub fn bounce(&self) -> f32 {
        self.material.bounce()
    }

    /// Translational kinetic energy, ½·m·|v|²
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_is_radius_times_density() {
        let rock = Rock::new(1, Vec2::new(10.0, 10.0), Vec2::zero(), 20.0, Material::Granite, 0.0);
        assert_eq!(rock.mass(), 20.0 * Material::Granite.density());
        assert_eq!(rock.bounce(), 0.6);
        assert_eq!(rock.angle, 0.0);
    }

    #[test]
    fn kinetic_energy_uses_both_axes() {
        let rock = Rock::new(1, Vec2::zero(), Vec2::new(3.0, 4.0), 10.0, Material::Sandstone, 0.0);
        assert_eq!(rock.kinetic_energy(), 0.5 * rock.mass() * 25.0);
    }
}

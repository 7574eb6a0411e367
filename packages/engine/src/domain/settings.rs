use serde::{Deserialize, Serialize};

/// Upper bound for `max_spin`, in radians per frame
pub const SPIN_LIMIT: f32 = std::f32::consts::PI;

/// Tunable physics constants.
///
/// Defaults reproduce the stock toy. Missing JSON fields fall back to the
/// default value, so a host can override only what it cares about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Added to vy every frame
    pub gravity: f32,
    /// Multiplies both velocity components every frame
    pub air_drag: f32,
    /// Scales both velocities after a rock-rock collision
    pub collision_damping: f32,
    /// Multiplies vx on floor contact
    pub floor_friction: f32,
    /// Multiplies rotation speed on floor contact
    pub floor_spin_damping: f32,
    /// Multiplies rotation speed on side-wall contact
    pub wall_spin_factor: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Spawned rotation speed is drawn from [-max_spin, max_spin]
    pub max_spin: f32,
    /// Drag distance to launch velocity
    pub launch_power: f32,
    /// 0 = unbounded
    pub max_rocks: usize,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        PhysicsSettings {
            gravity: 0.5,
            air_drag: 0.999,
            collision_damping: 0.8,
            floor_friction: 0.98,
            floor_spin_damping: 0.9,
            wall_spin_factor: -0.5,
            min_radius: 15.0,
            max_radius: 40.0,
            max_spin: 0.05,
            launch_power: 0.15,
            max_rocks: 0,
        }
    }
}

impl PhysicsSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: PhysicsSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values that would break the "energy never increases" and
    /// "radius, mass > 0" guarantees.
    pub fn validate(&self) -> Result<(), String> {
        let floats = [
            ("gravity", self.gravity),
            ("air_drag", self.air_drag),
            ("collision_damping", self.collision_damping),
            ("floor_friction", self.floor_friction),
            ("floor_spin_damping", self.floor_spin_damping),
            ("wall_spin_factor", self.wall_spin_factor),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("max_spin", self.max_spin),
            ("launch_power", self.launch_power),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }

        unit_range("air_drag", self.air_drag)?;
        unit_range("collision_damping", self.collision_damping)?;
        unit_range("floor_friction", self.floor_friction)?;
        unit_range("floor_spin_damping", self.floor_spin_damping)?;

        if self.wall_spin_factor.abs() > 1.0 {
            return Err(format!(
                "wall_spin_factor must be within [-1, 1], got {}",
                self.wall_spin_factor
            ));
        }
        if self.min_radius <= 0.0 {
            return Err(format!("min_radius must be positive, got {}", self.min_radius));
        }
        if self.max_radius <= self.min_radius {
            return Err(format!(
                "max_radius ({}) must exceed min_radius ({})",
                self.max_radius, self.min_radius
            ));
        }
        if !(0.0..=SPIN_LIMIT).contains(&self.max_spin) {
            return Err(format!(
                "max_spin must be within [0, {}], got {}",
                SPIN_LIMIT, self.max_spin
            ));
        }
        if self.launch_power < 0.0 {
            return Err(format!("launch_power must not be negative, got {}", self.launch_power));
        }
        Ok(())
    }
}

fn unit_range(name: &str, value: f32) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be within [0, 1], got {}", name, value))
    }
}

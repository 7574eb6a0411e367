use crate::core::utils::keep_inside;
use crate::domain::settings::PhysicsSettings;
use crate::rock::Rock;

/// Canvas size for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Which edges a rock touched during one wall pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub floor: bool,
}

impl WallHits {
    pub fn count(&self) -> u32 {
        self.left as u32 + self.right as u32 + self.top as u32 + self.floor as u32
    }
}

/// Bounce a rock off the canvas edges. Axes are handled independently;
/// left/top win when the canvas is narrower than the rock.
pub fn resolve_walls(rock: &mut Rock, bounds: Bounds, settings: &PhysicsSettings) -> WallHits {
    let r = rock.radius();
    let bounce = rock.bounce();
    let mut hits = WallHits::default();

    if rock.pos.x - r < 0.0 {
        rock.pos.x = r;
        rock.velocity.x = -rock.velocity.x * bounce;
        rock.angular_vel *= settings.wall_spin_factor;
        hits.left = true;
    } else if rock.pos.x + r > bounds.width {
        rock.pos.x = bounds.width - r;
        rock.velocity.x = -rock.velocity.x * bounce;
        rock.angular_vel *= settings.wall_spin_factor;
        hits.right = true;
    }

    if rock.pos.y - r < 0.0 {
        rock.pos.y = r;
        rock.velocity.y = -rock.velocity.y * bounce;
        hits.top = true;
    } else if rock.pos.y + r > bounds.height {
        rock.pos.y = bounds.height - r;
        rock.velocity.y = -rock.velocity.y * bounce;
        rock.velocity.x *= settings.floor_friction;
        rock.angular_vel *= settings.floor_spin_damping;
        hits.floor = true;
    }

    hits
}

/// Pull the center back inside the canvas. Position only, velocity untouched.
pub fn keep_in_bounds(rock: &mut Rock, bounds: Bounds) {
    let r = rock.radius();
    rock.pos.x = keep_inside(rock.pos.x, r, bounds.width - r);
    rock.pos.y = keep_inside(rock.pos.y, r, bounds.height - r);
}

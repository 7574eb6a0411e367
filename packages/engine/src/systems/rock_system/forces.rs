use crate::rock::Rock;

/// vy += g
#[inline(always)]
pub fn apply_gravity(rock: &mut Rock, gravity: f32) {
    rock.velocity.y += gravity;
}

/// Multiplicative per-frame drag, not normalized for frame rate
#[inline(always)]
pub fn apply_air_drag(rock: &mut Rock, drag: f32) {
    rock.velocity = rock.velocity * drag;
}

/// Explicit Euler step of position and rotation over one frame
#[inline(always)]
pub fn integrate(rock: &mut Rock) {
    rock.pos += rock.velocity;
    rock.angle += rock.angular_vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::materials::Material;
    use crate::rock::Vec2;

    #[test]
    fn gravity_then_drag_then_move() {
        let mut rock = Rock::new(1, Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), 20.0, Material::Granite, 0.1);
        apply_gravity(&mut rock, 0.5);
        apply_air_drag(&mut rock, 0.5);
        integrate(&mut rock);
        assert_eq!(rock.velocity, Vec2::new(1.0, 0.25));
        assert_eq!(rock.pos, Vec2::new(1.0, 0.25));
        assert_eq!(rock.angle, 0.1);
    }

    #[test]
    fn rotation_accumulates_without_wrapping() {
        let mut rock = Rock::new(1, Vec2::zero(), Vec2::zero(), 20.0, Material::Granite, 1.0);
        for _ in 0..10 {
            integrate(&mut rock);
        }
        assert_eq!(rock.angle, 10.0);
    }
}

//! The player entity
//!
//! One `update` call is one tick: morph, platform ride, input and gravity,
//! vertical then horizontal collision resolution, particles.

use glam::Vec2;
use rand::Rng;

use super::collision::{resolve_horizontal, resolve_vertical};
use super::rect::Rect;
use super::state::{Obstacle, Particle, Rgb, Shape, ShapeProps};
use crate::consts::*;
use crate::{lerp, smoothstep};

/// Movement controls sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Centre of the collision box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Shape used for physics
    pub shape: Shape,
    /// Shape being morphed into
    pub target_shape: Shape,
    /// Morph progress in [0, 1]; 1 means `shape == target_shape`
    pub morph: f32,
    pub grounded: bool,
    /// Index of the obstacle currently supporting the player
    pub riding: Option<usize>,
    /// Owned particles, oldest first
    pub particles: Vec<Particle>,
    /// Set when the last update performed a jump
    pub jumped: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            shape: Shape::Square,
            target_shape: Shape::Square,
            morph: 1.0,
            grounded: false,
            riding: None,
            particles: Vec::new(),
            jumped: false,
        }
    }

    #[inline]
    pub fn props(&self) -> &'static ShapeProps {
        self.shape.props()
    }

    /// Collision box (active shape, not the morphing display size)
    pub fn rect(&self) -> Rect {
        Rect::centered(self.pos, self.props().size)
    }

    /// Half-size to draw at, eased between the active and target shape
    pub fn display_size(&self) -> f32 {
        let t = smoothstep(self.morph);
        lerp(self.shape.props().size, self.target_shape.props().size, t)
    }

    /// Request a morph. Ignored if `shape` is already the target; otherwise
    /// restarts interpolation from the active shape toward the new target.
    /// Returns whether the request took effect.
    pub fn change_shape(&mut self, shape: Shape) -> bool {
        if shape == self.target_shape {
            return false;
        }
        self.target_shape = shape;
        self.morph = 0.0;
        true
    }

    /// Advance one tick. Returns `false` once the player has fallen out of
    /// the level and it must be restarted.
    pub fn update<R: Rng>(&mut self, input: MoveInput, obstacles: &[Obstacle], rng: &mut R) -> bool {
        self.jumped = false;
        self.advance_morph();
        self.ride(obstacles);

        let props = self.props();
        self.vel.x = if input.left {
            -props.speed
        } else if input.right {
            props.speed
        } else {
            0.0
        };

        if input.jump && self.grounded {
            self.vel.y = -props.jump_power;
            self.grounded = false;
            self.riding = None;
            self.jumped = true;
            self.spawn_jump_particles(rng);
        }

        self.vel.y += GRAVITY;

        self.grounded = false;
        self.riding = None;
        let half = props.size;
        if let Some(index) = resolve_vertical(&mut self.pos, &mut self.vel, half, obstacles) {
            self.grounded = true;
            self.riding = Some(index);
        }
        resolve_horizontal(&mut self.pos, self.vel.x, half, obstacles);

        self.update_particles();

        self.is_alive()
    }

    /// Still within the fall margin below the level floor
    pub fn is_alive(&self) -> bool {
        self.pos.y <= FLOOR_DATUM + FALL_MARGIN
    }

    fn advance_morph(&mut self) {
        if self.morph < 1.0 {
            self.morph = (self.morph + MORPH_SPEED).min(1.0);
            if self.morph >= 1.0 {
                self.shape = self.target_shape;
            }
        }
    }

    /// Carry the player along with the supporting obstacle
    fn ride(&mut self, obstacles: &[Obstacle]) {
        if !self.grounded {
            return;
        }
        let Some(obstacle) = self.riding.and_then(|i| obstacles.get(i)) else {
            return;
        };
        self.pos.x += obstacle.delta.x * RIDE_TRANSFER;
        self.pos.y = obstacle.rect.top() - self.props().size;
        self.vel.y = 0.0;
    }

    fn spawn_jump_particles<R: Rng>(&mut self, rng: &mut R) {
        let feet = Vec2::new(self.pos.x, self.pos.y + self.props().size);
        let color = self.props().color;
        for _ in 0..JUMP_PARTICLES {
            let vel = Vec2::new(rng.random_range(-3.0..=3.0), rng.random_range(-6.0..=-2.0));
            self.particles
                .push(Particle::new(feet, vel, JUMP_PARTICLE_RADIUS, color, JUMP_PARTICLE_LIFE));
        }
    }

    /// Radial burst of particles (e.g. star pickup) owned by the player
    pub fn spawn_burst<R: Rng>(&mut self, at: Vec2, count: usize, color: Rgb, life: u32, rng: &mut R) {
        for _ in 0..count {
            let vel = Vec2::new(rng.random_range(-4.0..=4.0), rng.random_range(-4.0..=4.0));
            let radius = rng.random_range(3..=6) as f32;
            self.particles.push(Particle::new(at, vel, radius, color, life));
        }
    }

    fn update_particles(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.update();
        }
        self.particles.retain(|p| p.is_alive());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Axis;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn floor() -> Obstacle {
        Obstacle::fixed(Rect::new(0.0, 600.0, 1500.0, 80.0))
    }

    #[test]
    fn test_falls_and_settles_on_floor() {
        let obstacles = [floor()];
        let mut player = Player::new(Vec2::new(100.0, 300.0));
        let mut rng = rng();

        for _ in 0..120 {
            assert!(player.update(MoveInput::default(), &obstacles, &mut rng));
        }
        assert!(player.grounded);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.pos.y, 600.0 - Shape::Square.props().size);
        assert_eq!(player.riding, Some(0));
    }

    #[test]
    fn test_jump_spawns_dust_and_leaves_ground() {
        let obstacles = [floor()];
        let mut player = Player::new(Vec2::new(100.0, 572.0));
        let mut rng = rng();
        player.update(MoveInput::default(), &obstacles, &mut rng);
        assert!(player.grounded);

        let jump = MoveInput {
            jump: true,
            ..Default::default()
        };
        player.update(jump, &obstacles, &mut rng);
        assert!(player.jumped);
        assert!(!player.grounded);
        assert_eq!(player.riding, None);
        assert_eq!(player.vel.y, -13.0 + GRAVITY);
        assert_eq!(player.particles.len(), JUMP_PARTICLES);
        for p in &player.particles {
            assert_eq!(p.color, Shape::Square.props().color);
            assert_eq!(p.life, JUMP_PARTICLE_LIFE - 1);
        }
    }

    #[test]
    fn test_cannot_jump_midair() {
        let mut player = Player::new(Vec2::new(0.0, 0.0));
        let jump = MoveInput {
            jump: true,
            ..Default::default()
        };
        player.update(jump, &[], &mut rng());
        assert!(!player.jumped);
        assert_eq!(player.vel.y, GRAVITY);
        assert!(player.particles.is_empty());
    }

    #[test]
    fn test_horizontal_velocity_follows_input() {
        let obstacles = [floor()];
        let mut player = Player::new(Vec2::new(100.0, 572.0));
        let mut rng = rng();

        let both = MoveInput {
            left: true,
            right: true,
            jump: false,
        };
        player.update(both, &obstacles, &mut rng);
        assert_eq!(player.vel.x, -6.0);
        assert_eq!(player.pos.x, 94.0);

        player.update(MoveInput::default(), &obstacles, &mut rng);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.pos.x, 94.0);
    }

    #[test]
    fn test_head_bump_zeroes_velocity() {
        let ceiling = Obstacle::fixed(Rect::new(0.0, 350.0, 200.0, 20.0));
        let mut player = Player::new(Vec2::new(100.0, 405.0));
        player.vel.y = -15.0;
        player.update(MoveInput::default(), &[ceiling.clone()], &mut rng());
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.rect().top(), ceiling.rect.bottom());
    }

    #[test]
    fn test_morph_completes_after_nine_ticks() {
        let mut player = Player::new(Vec2::ZERO);
        assert!(player.change_shape(Shape::Triangle));
        assert!(!player.change_shape(Shape::Triangle));
        assert_eq!(player.morph, 0.0);

        let mut rng = rng();
        for _ in 0..8 {
            player.update(MoveInput::default(), &[], &mut rng);
            assert_eq!(player.shape, Shape::Square);
        }
        player.update(MoveInput::default(), &[], &mut rng);
        assert_eq!(player.morph, 1.0);
        assert_eq!(player.shape, Shape::Triangle);
        assert_eq!(player.display_size(), 34.0);
    }

    #[test]
    fn test_physics_uses_active_shape_during_morph() {
        let mut player = Player::new(Vec2::new(50.0, 50.0));
        player.change_shape(Shape::Triangle);
        player.update(MoveInput::default(), &[], &mut rng());
        assert!(player.morph > 0.0 && player.morph < 1.0);
        assert_eq!(player.rect().w, 56.0);
        assert!(player.display_size() > 28.0 && player.display_size() < 34.0);
    }

    #[test]
    fn test_rides_moving_platform_with_double_transfer() {
        let mut platform = Obstacle::moving(Rect::new(1600.0, 400.0, 100.0, 20.0), Axis::X, 100.0, 0.04);
        let mut player = Player::new(Vec2::new(1650.0, 372.0));
        let mut rng = rng();

        // First tick lands the player on the platform
        platform.update();
        player.update(MoveInput::default(), std::slice::from_ref(&platform), &mut rng);
        assert!(player.grounded);
        assert_eq!(player.riding, Some(0));

        let x_before = player.pos.x;
        platform.update();
        let delta = platform.delta.x;
        player.update(MoveInput::default(), std::slice::from_ref(&platform), &mut rng);
        assert!((player.pos.x - (x_before + delta * RIDE_TRANSFER)).abs() < 1e-4);
        assert!(player.grounded);
        assert_eq!(player.pos.y, 372.0);
    }

    #[test]
    fn test_falls_out_of_level() {
        let mut player = Player::new(Vec2::new(0.0, 1090.0));
        player.vel.y = 20.0;
        assert!(!player.update(MoveInput::default(), &[], &mut rng()));
    }

    #[test]
    fn test_particles_expire() {
        let mut player = Player::new(Vec2::ZERO);
        let mut rng = rng();
        player.spawn_burst(Vec2::ZERO, STAR_PARTICLES, STAR_COLOR, STAR_PARTICLE_LIFE, &mut rng);
        assert_eq!(player.particles.len(), STAR_PARTICLES);
        for p in &player.particles {
            assert!((3.0..=6.0).contains(&p.radius));
        }
        for _ in 0..STAR_PARTICLE_LIFE {
            player.update(MoveInput::default(), &[], &mut rng);
        }
        assert!(player.particles.is_empty());
    }

    proptest! {
        #[test]
        fn prop_morph_monotone_and_clamped(ticks in 1usize..40, shape_idx in 0usize..3) {
            let mut player = Player::new(Vec2::ZERO);
            player.change_shape(Shape::ALL[shape_idx]);
            let mut rng = rng();
            let mut last = player.morph;
            for _ in 0..ticks {
                player.update(MoveInput::default(), &[], &mut rng);
                prop_assert!(player.morph >= last);
                prop_assert!(player.morph <= 1.0);
                if player.morph == 1.0 {
                    prop_assert_eq!(player.shape, player.target_shape);
                }
                last = player.morph;
            }
        }
    }
}

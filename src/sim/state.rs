//! Core simulation types
//!
//! Leaf entities (shapes, particles, obstacles, hazards, stars), the small
//! enums shared by the player and the controller, and `GameState` itself.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::level::Level;
use super::player::Player;
use super::rect::Rect;
use crate::consts::*;
use crate::error::LevelError;
use crate::settings::Settings;

/// RGB color, consumed only by the render layer
pub type Rgb = [u8; 3];

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Goal reached, waiting for confirm
    Won,
}

/// Player shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Square,
    Circle,
    Triangle,
}

/// Fixed movement properties of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeProps {
    /// Horizontal speed (units/tick)
    pub speed: f32,
    /// Initial upward velocity of a jump (units/tick)
    pub jump_power: f32,
    /// Collision half-size
    pub size: f32,
    pub color: Rgb,
}

const SQUARE_PROPS: ShapeProps = ShapeProps {
    speed: 6.0,
    jump_power: 13.0,
    size: 28.0,
    color: [90, 190, 255],
};

const CIRCLE_PROPS: ShapeProps = ShapeProps {
    speed: 8.5,
    jump_power: 10.0,
    size: 22.0,
    color: [255, 120, 120],
};

const TRIANGLE_PROPS: ShapeProps = ShapeProps {
    speed: 4.5,
    jump_power: 18.0,
    size: 34.0,
    color: [120, 255, 150],
};

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Square, Shape::Circle, Shape::Triangle];

    pub fn props(self) -> &'static ShapeProps {
        match self {
            Shape::Square => &SQUARE_PROPS,
            Shape::Circle => &CIRCLE_PROPS,
            Shape::Triangle => &TRIANGLE_PROPS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Square => "Square",
            Shape::Circle => "Circle",
            Shape::Triangle => "Triangle",
        }
    }
}

/// A short-lived visual particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Remaining lifetime in ticks
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgb, life: u32) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            life,
            max_life: life,
        }
    }

    /// Advance one tick: gravity, motion, age
    pub fn update(&mut self) {
        self.vel.y += PARTICLE_GRAVITY;
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Fade factor in [0, 1] derived from remaining life
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.life as f32 / self.max_life as f32
    }
}

/// Axis driven by a moving obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Obstacle variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Never moves
    Static,
    /// Oscillates along one axis: `base + amplitude * sin(phase)`
    Moving {
        base: Vec2,
        axis: Axis,
        amplitude: f32,
        /// Phase advance per tick (radians)
        speed: f32,
        phase: f32,
    },
}

/// A solid rectangle the player collides with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
    /// Displacement applied by the last `update`
    pub delta: Vec2,
}

impl Obstacle {
    pub fn fixed(rect: Rect) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Static,
            delta: Vec2::ZERO,
        }
    }

    pub fn moving(rect: Rect, axis: Axis, amplitude: f32, speed: f32) -> Self {
        Self {
            rect,
            kind: ObstacleKind::Moving {
                base: Vec2::new(rect.x, rect.y),
                axis,
                amplitude,
                speed,
                phase: 0.0,
            },
            delta: Vec2::ZERO,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.kind, ObstacleKind::Moving { .. })
    }

    /// Advance one tick and record the displacement
    pub fn update(&mut self) {
        match &mut self.kind {
            ObstacleKind::Static => {
                self.delta = Vec2::ZERO;
            }
            ObstacleKind::Moving {
                base,
                axis,
                amplitude,
                speed,
                phase,
            } => {
                *phase += *speed;
                let offset = *amplitude * phase.sin();
                match axis {
                    Axis::X => {
                        let new_x = base.x + offset;
                        self.delta = Vec2::new(new_x - self.rect.x, 0.0);
                        self.rect.x = new_x;
                    }
                    Axis::Y => {
                        let new_y = base.y + offset;
                        self.delta = Vec2::new(0.0, new_y - self.rect.y);
                        self.rect.y = new_y;
                    }
                }
            }
        }
    }

    /// Restore the initial phase and position
    pub fn reset(&mut self) {
        if let ObstacleKind::Moving { base, phase, .. } = &mut self.kind {
            *phase = 0.0;
            self.rect.x = base.x;
            self.rect.y = base.y;
        }
        self.delta = Vec2::ZERO;
    }
}

/// Touching a hazard restarts the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    /// Points down instead of up (render only)
    #[serde(default)]
    pub flipped: bool,
}

/// A collectible star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    pub collected: bool,
}

impl Collectible {
    /// Star whose box has its top-left corner at `pos`
    pub fn at(pos: Vec2) -> Self {
        Self {
            rect: Rect::new(pos.x, pos.y, STAR_SIZE, STAR_SIZE),
            collected: false,
        }
    }
}

/// Stars collected out of the level total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub collected: u32,
    pub total: u32,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.collected, self.total)
    }
}

/// Discrete things that happened during a tick (for audio/UI layers)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: usize },
    Jumped { shape: Shape },
    ShapeChanged { shape: Shape },
    StarCollected { collected: u32, total: u32 },
    Died,
    LevelComplete { score: Score },
    ReturnedToMenu,
}

/// Complete game state: level set, progress, player, camera
#[derive(Debug, Clone)]
pub struct GameState {
    pub levels: Vec<Level>,
    /// Index into `levels` of the level being played or shown
    pub level_index: usize,
    pub phase: GamePhase,
    pub player: Player,
    pub camera: Camera,
    /// Stars collected in the current attempt
    pub collected: u32,
    /// Set on entering `Won`
    pub final_score: Option<Score>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub viewport_width: f32,
    pub particles_enabled: bool,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
    /// Seeded, so particle bursts replay identically
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start at the menu with the first level loaded behind it
    pub fn new(levels: Vec<Level>, settings: &Settings) -> Result<Self, LevelError> {
        let Some(first) = levels.first() else {
            return Err(LevelError::NoLevels);
        };
        let player = Player::new(first.start);

        let mut state = Self {
            levels,
            level_index: 0,
            phase: GamePhase::Menu,
            player,
            camera: Camera::default(),
            collected: 0,
            final_score: None,
            time_ticks: 0,
            viewport_width: settings.viewport_width,
            particles_enabled: settings.particles,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(settings.seed),
        };
        state.reset_level();
        Ok(state)
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    /// Rebuild all per-attempt state of the current level in one step: fresh
    /// player at the start, stars back, obstacles at phase zero, camera home.
    /// Any ride handle dies with the old player.
    pub fn reset_level(&mut self) {
        let level = &mut self.levels[self.level_index];
        level.reset();
        self.player = Player::new(level.start);
        self.collected = 0;
        self.final_score = None;
        self.camera.reset();
    }

    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_shape_table() {
        assert_eq!(Shape::Square.props().size, 28.0);
        assert_eq!(Shape::Circle.props().speed, 8.5);
        assert_eq!(Shape::Triangle.props().jump_power, 18.0);
    }

    #[test]
    fn test_particle_lifetime() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, -2.0), 4.0, [0, 0, 0], 2);
        assert_eq!(p.alpha(), 1.0);
        p.update();
        assert!(p.is_alive());
        assert!((p.vel.y - (-1.7)).abs() < 1e-6);
        assert!((p.pos.y - (-1.7)).abs() < 1e-6);
        assert_eq!(p.pos.x, 1.0);
        assert_eq!(p.alpha(), 0.5);
        p.update();
        assert!(!p.is_alive());
    }

    #[test]
    fn test_static_obstacle_has_no_delta() {
        let mut o = Obstacle::fixed(Rect::new(0.0, 600.0, 100.0, 80.0));
        for _ in 0..10 {
            o.update();
            assert_eq!(o.delta, Vec2::ZERO);
        }
        assert_eq!(o.rect, Rect::new(0.0, 600.0, 100.0, 80.0));
    }

    #[test]
    fn test_moving_obstacle_follows_sine() {
        let mut o = Obstacle::moving(Rect::new(1600.0, 400.0, 100.0, 20.0), Axis::X, 100.0, 0.04);
        // Phase 0: nothing has moved yet
        assert_eq!(o.delta, Vec2::ZERO);

        // Advance until the phase reaches roughly π/2
        let ticks = (FRAC_PI_2 / 0.04).round() as usize;
        for _ in 0..ticks {
            o.update();
        }
        let ObstacleKind::Moving { phase, .. } = o.kind else {
            panic!("expected moving obstacle");
        };
        assert!((o.rect.x - (1600.0 + 100.0 * phase.sin())).abs() < 1e-3);
        assert!(o.delta.x != 0.0);
        assert_eq!(o.delta.y, 0.0);
        assert_eq!(o.rect.y, 400.0);
    }

    #[test]
    fn test_moving_obstacle_y_axis_delta() {
        let mut o = Obstacle::moving(Rect::new(850.0, 540.0, 150.0, 20.0), Axis::Y, 150.0, 0.04);
        let before = o.rect.y;
        o.update();
        assert_eq!(o.delta.x, 0.0);
        assert!((o.delta.y - (o.rect.y - before)).abs() < 1e-6);
        assert!(o.delta.y > 0.0);
    }

    #[test]
    fn test_moving_obstacle_reset() {
        let mut o = Obstacle::moving(Rect::new(10.0, 20.0, 5.0, 5.0), Axis::X, 50.0, 0.1);
        for _ in 0..7 {
            o.update();
        }
        o.reset();
        assert_eq!(o.rect.x, 10.0);
        assert_eq!(o.delta, Vec2::ZERO);
        assert!(matches!(o.kind, ObstacleKind::Moving { phase, .. } if phase == 0.0));
    }

    #[test]
    fn test_collectible_box() {
        let star = Collectible::at(Vec2::new(685.0, 300.0));
        assert_eq!(star.rect, Rect::new(685.0, 300.0, 25.0, 25.0));
        assert!(!star.collected);
    }

    #[test]
    fn test_score_display() {
        let score = Score { collected: 2, total: 3 };
        assert_eq!(score.to_string(), "2 / 3");
    }
}

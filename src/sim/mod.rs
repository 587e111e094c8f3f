//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` is one frame)
//! - Seeded RNG only
//! - Stable iteration order (level-declaration order)
//! - No rendering, audio or platform dependencies

pub mod camera;
pub mod collision;
pub mod level;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{VerticalContact, resolve_horizontal, resolve_vertical};
pub use level::Level;
pub use player::{MoveInput, Player};
pub use rect::Rect;
pub use snapshot::FrameSnapshot;
pub use state::{
    Axis, Collectible, GameEvent, GamePhase, GameState, Hazard, Obstacle, ObstacleKind, Particle,
    Score, Shape, ShapeProps,
};
pub use tick::{TickInput, tick};

//! Shape Shifter - a shape-morphing platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, collisions, game state)
//! - `levels`: Level authoring data, validation and the built-in levels
//! - `settings`: Runtime configuration
//! - `error`: Load-time error types
//!
//! Rendering, audio and windowing live outside this crate and consume
//! [`sim::FrameSnapshot`] / [`sim::GameEvent`].

pub mod error;
pub mod levels;
pub mod settings;
pub mod sim;

pub use error::{LevelError, SettingsError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 1100.0;
    pub const VIEWPORT_HEIGHT: f32 = 700.0;

    /// Player gravity (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Morph progress added per tick
    pub const MORPH_SPEED: f32 = 0.12;
    /// Horizontal transfer factor when riding a platform
    pub const RIDE_TRANSFER: f32 = 2.0;
    /// Vertical slack ignored by horizontal resolution (floor/ceiling contact)
    pub const FLOOR_CONTACT_MARGIN: f32 = 3.0;

    /// Level floor datum and how far below it the player may fall before dying
    pub const FLOOR_DATUM: f32 = 700.0;
    pub const FALL_MARGIN: f32 = 400.0;

    /// Particle gravity (units/tick²)
    pub const PARTICLE_GRAVITY: f32 = 0.3;
    /// Jump dust burst
    pub const JUMP_PARTICLES: usize = 12;
    pub const JUMP_PARTICLE_RADIUS: f32 = 4.0;
    pub const JUMP_PARTICLE_LIFE: u32 = 30;
    /// Star collect burst
    pub const STAR_PARTICLES: usize = 15;
    pub const STAR_PARTICLE_LIFE: u32 = 30;
    pub const STAR_COLOR: [u8; 3] = [255, 215, 0];

    /// Collectible star box size
    pub const STAR_SIZE: f32 = 25.0;

    /// Camera smoothing factor (fraction of remaining distance per tick)
    pub const CAMERA_SMOOTHING: f32 = 0.1;
}

/// Hermite smoothstep `t²(3 - 2t)` for `t` in [0, 1]
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

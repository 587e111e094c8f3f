//! Read-only view of one frame for the render layer
//!
//! Everything a renderer needs, copied out of `GameState` so drawing code
//! never touches simulation state.

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use super::state::{GamePhase, GameState, Rgb, Score, Shape};

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub shape: Shape,
    pub target_shape: Shape,
    pub morph: f32,
    /// Eased half-size to draw at
    pub display_size: f32,
    pub grounded: bool,
    /// Sign gives facing direction for the eyes
    pub vel_x: f32,
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HazardView {
    pub rect: Rect,
    pub flipped: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StarView {
    pub rect: Rect,
    pub collected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub level_index: usize,
    pub level_count: usize,
    pub level_name: String,
    pub camera_offset: f32,
    pub player: PlayerView,
    pub obstacles: Vec<Rect>,
    pub hazards: Vec<HazardView>,
    pub stars: Vec<StarView>,
    pub goal: Rect,
    pub collected: u32,
    pub total: u32,
    /// Present in `Won`
    pub final_score: Option<Score>,
}

impl GameState {
    pub fn snapshot(&self) -> FrameSnapshot {
        let level = self.level();
        let player = &self.player;

        FrameSnapshot {
            phase: self.phase,
            tick: self.time_ticks,
            level_index: self.level_index,
            level_count: self.levels.len(),
            level_name: level.name.clone(),
            camera_offset: self.camera.offset,
            player: PlayerView {
                pos: player.pos,
                shape: player.shape,
                target_shape: player.target_shape,
                morph: player.morph,
                display_size: player.display_size(),
                grounded: player.grounded,
                vel_x: player.vel.x,
                particles: player
                    .particles
                    .iter()
                    .map(|p| ParticleView {
                        pos: p.pos,
                        radius: p.radius,
                        color: p.color,
                        alpha: p.alpha(),
                    })
                    .collect(),
            },
            obstacles: level.obstacles.iter().map(|o| o.rect).collect(),
            hazards: level
                .hazards
                .iter()
                .map(|h| HazardView {
                    rect: h.rect,
                    flipped: h.flipped,
                })
                .collect(),
            stars: level
                .collectibles
                .iter()
                .map(|c| StarView {
                    rect: c.rect,
                    collected: c.collected,
                })
                .collect(),
            goal: level.goal,
            collected: self.collected,
            total: level.total_collectibles(),
            final_score: self.final_score,
        }
    }
}

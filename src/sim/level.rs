//! Runtime level: geometry plus the per-run mutable state it owns
//! (moving obstacle phases, collected flags).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Collectible, Hazard, Obstacle};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Solid geometry, in declaration order (resolution order)
    pub obstacles: Vec<Obstacle>,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    /// Player spawn (centre of the player box)
    pub start: Vec2,
    /// Touching this completes the level
    pub goal: Rect,
}

impl Level {
    /// Put every obstacle back at phase zero and every star back in play
    pub fn reset(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.reset();
        }
        for star in &mut self.collectibles {
            star.collected = false;
        }
    }

    /// Advance every obstacle by one tick
    pub fn update_obstacles(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.update();
        }
    }

    pub fn hazard_hit(&self, body: &Rect) -> bool {
        self.hazards.iter().any(|h| body.overlaps(&h.rect))
    }

    pub fn reached_goal(&self, body: &Rect) -> bool {
        body.overlaps(&self.goal)
    }

    pub fn collected_count(&self) -> u32 {
        self.collectibles.iter().filter(|c| c.collected).count() as u32
    }

    pub fn total_collectibles(&self) -> u32 {
        self.collectibles.len() as u32
    }
}

//! Horizontal camera follow

use serde::{Deserialize, Serialize};

use crate::consts::CAMERA_SMOOTHING;

/// Side-scrolling camera: a single horizontal offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: f32,
}

impl Camera {
    /// Where the camera wants to be: the player sits one third into the view
    pub fn target_for(player_x: f32, viewport_width: f32) -> f32 {
        player_x - viewport_width / 3.0
    }

    /// Move a fixed fraction of the remaining distance toward the target
    pub fn follow(&mut self, player_x: f32, viewport_width: f32) {
        let target = Self::target_for(player_x, viewport_width);
        self.offset += (target - self.offset) * CAMERA_SMOOTHING;
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

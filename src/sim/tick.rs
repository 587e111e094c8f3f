//! Fixed timestep simulation tick
//!
//! Discrete input events are handled first, then the continuous update for
//! the (possibly new) phase: obstacles, player, hazards, stars, camera, goal.

use serde::{Deserialize, Serialize};

use super::player::MoveInput;
use super::state::{GameEvent, GamePhase, GameState, Score, Shape};
use crate::consts::*;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Shape select triggers (keys 1/2/3)
    pub select_square: bool,
    pub select_circle: bool,
    pub select_triangle: bool,
    /// Start / next level (Enter)
    pub confirm: bool,
    /// Ends the run loop; ignored by `tick` itself
    pub quit: bool,
}

impl TickInput {
    pub fn movement(&self) -> MoveInput {
        MoveInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
        }
    }

    /// Requested shapes in key order
    fn shape_requests(&self) -> impl Iterator<Item = Shape> {
        [
            (self.select_square, Shape::Square),
            (self.select_circle, Shape::Circle),
            (self.select_triangle, Shape::Triangle),
        ]
        .into_iter()
        .filter_map(|(pressed, shape)| pressed.then_some(shape))
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                state.level_index = 0;
                start_level(state);
            }
        }
        GamePhase::Playing => {
            for shape in input.shape_requests() {
                if state.player.change_shape(shape) {
                    log::debug!("Morphing to {}", shape.as_str());
                    state.events.push(GameEvent::ShapeChanged { shape });
                }
            }
        }
        GamePhase::Won => {
            if input.confirm {
                if state.is_last_level() {
                    log::info!("All levels complete, back to menu");
                    state.phase = GamePhase::Menu;
                    state.events.push(GameEvent::ReturnedToMenu);
                } else {
                    state.level_index += 1;
                    start_level(state);
                }
            }
        }
    }

    match state.phase {
        GamePhase::Playing => update_playing(state, input),
        GamePhase::Won => state.camera.follow(state.player.pos.x, state.viewport_width),
        GamePhase::Menu => {}
    }
}

/// Reset the current level and enter `Playing`
fn start_level(state: &mut GameState) {
    state.reset_level();
    state.phase = GamePhase::Playing;
    log::info!(
        "Starting level {} ({})",
        state.level_index + 1,
        state.level().name
    );
    state.events.push(GameEvent::LevelStarted {
        level: state.level_index,
    });
}

fn update_playing(state: &mut GameState, input: &TickInput) {
    let level = &mut state.levels[state.level_index];
    level.update_obstacles();

    let alive = state
        .player
        .update(input.movement(), &level.obstacles, &mut state.rng);
    if state.player.jumped {
        state.events.push(GameEvent::Jumped {
            shape: state.player.shape,
        });
    }

    let body = state.player.rect();
    if !alive || level.hazard_hit(&body) {
        log::debug!(
            "Player died at ({:.1}, {:.1}) on tick {}",
            state.player.pos.x,
            state.player.pos.y,
            state.time_ticks
        );
        state.reset_level();
        state.camera.follow(state.player.pos.x, state.viewport_width);
        state.events.push(GameEvent::Died);
        return;
    }

    let total = level.total_collectibles();
    for star in level.collectibles.iter_mut().filter(|c| !c.collected) {
        if !body.overlaps(&star.rect) {
            continue;
        }
        star.collected = true;
        state.collected += 1;
        state.player.spawn_burst(
            star.rect.center(),
            STAR_PARTICLES,
            STAR_COLOR,
            STAR_PARTICLE_LIFE,
            &mut state.rng,
        );
        log::debug!("Star collected ({}/{})", state.collected, total);
        state.events.push(GameEvent::StarCollected {
            collected: state.collected,
            total,
        });
    }

    if !state.particles_enabled {
        state.player.particles.clear();
    }

    state.camera.follow(state.player.pos.x, state.viewport_width);

    if level.reached_goal(&body) {
        let score = Score {
            collected: state.collected,
            total,
        };
        log::info!("Level {} complete, stars {}", state.level_index + 1, score);
        state.final_score = Some(score);
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::LevelComplete { score });
    }
}

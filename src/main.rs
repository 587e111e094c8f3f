//! Shape Shifter headless runner
//!
//! Drives the simulation at a fixed tick with a simple scripted pilot and
//! logs what happens. A windowed front end would replace the pilot with
//! sampled keyboard state and draw `FrameSnapshot`s.
//!
//! Usage: `shape-shifter [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result};

#[cfg(not(target_arch = "wasm32"))]
use shape_shifter::levels::{build_levels, builtin_levels, load_levels_from_path};
#[cfg(not(target_arch = "wasm32"))]
use shape_shifter::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
#[cfg(not(target_arch = "wasm32"))]
use shape_shifter::{Settings, consts};

/// Scripted input: run right, hop every so often, cycle shapes, confirm
/// whenever a screen is waiting
#[cfg(not(target_arch = "wasm32"))]
fn pilot(state: &GameState, max_ticks: u64) -> TickInput {
    let t = state.time_ticks;
    match state.phase {
        GamePhase::Menu | GamePhase::Won => TickInput {
            confirm: true,
            quit: t >= max_ticks,
            ..Default::default()
        },
        GamePhase::Playing => TickInput {
            right: true,
            jump: t % 45 == 0,
            select_square: t % 600 == 0,
            select_circle: t % 600 == 200,
            select_triangle: t % 600 == 400,
            quit: t >= max_ticks,
            ..Default::default()
        },
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::init();
    log::info!("Shape Shifter (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load_from_path(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let levels = match &settings.levels_path {
        Some(path) => load_levels_from_path(path)
            .with_context(|| format!("loading levels from {}", path.display()))?,
        None => build_levels(&builtin_levels())?,
    };

    let mut state = GameState::new(levels, &settings)?;
    log::info!(
        "Game initialized with {} levels, seed {}, {} ticks at {} Hz",
        state.levels.len(),
        settings.seed,
        settings.max_ticks,
        consts::TICK_RATE
    );

    let mut deaths = 0u32;
    let mut completed = 0u32;
    loop {
        let input = pilot(&state, settings.max_ticks);
        if input.quit {
            break;
        }
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::Died => deaths += 1,
                GameEvent::LevelComplete { .. } => completed += 1,
                _ => {}
            }
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
    }

    if log::log_enabled!(log::Level::Trace) {
        let snapshot = serde_json::to_string_pretty(&state.snapshot())?;
        log::trace!("Final frame: {}", snapshot);
    }

    println!(
        "Ran {} ticks: {} levels completed, {} deaths, now {:?} on level {}",
        state.time_ticks,
        completed,
        deaths,
        state.phase,
        state.level_index + 1
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web target
}

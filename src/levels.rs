//! Level authoring data
//!
//! Levels are described as plain data (`LevelDesc`), validated once and turned
//! into runtime [`Level`]s before the simulation starts. The three stock
//! levels ship built in; custom sets can be loaded from JSON.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::sim::level::Level;
use crate::sim::rect::Rect;
use crate::sim::state::{Axis, Collectible, Hazard, Obstacle};

/// One obstacle as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObstacleDesc {
    Static {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Moving {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        axis: Axis,
        amplitude: f32,
        speed: f32,
    },
}

impl ObstacleDesc {
    fn rect(&self) -> Rect {
        match *self {
            ObstacleDesc::Static { x, y, w, h } | ObstacleDesc::Moving { x, y, w, h, .. } => {
                Rect::new(x, y, w, h)
            }
        }
    }
}

/// One hazard as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardDesc {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(default)]
    pub flipped: bool,
}

/// A complete level as authored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDesc {
    #[serde(default)]
    pub name: String,
    pub obstacles: Vec<ObstacleDesc>,
    #[serde(default)]
    pub hazards: Vec<HazardDesc>,
    /// Top-left corners of the star boxes
    #[serde(default)]
    pub stars: Vec<(f32, f32)>,
    pub start: (f32, f32),
    pub goal: Rect,
}

impl LevelDesc {
    /// Validate and build the runtime level. `index` is only used for
    /// error messages.
    pub fn build(&self, index: usize) -> Result<Level, LevelError> {
        let (sx, sy) = self.start;
        if !sx.is_finite() || !sy.is_finite() {
            return Err(LevelError::NonFinite {
                level: index,
                what: "start position",
            });
        }
        if !self.goal.is_well_formed() {
            return Err(LevelError::InvalidRect {
                level: index,
                what: "goal",
                index: 0,
            });
        }

        let mut obstacles = Vec::with_capacity(self.obstacles.len());
        for (i, desc) in self.obstacles.iter().enumerate() {
            let rect = desc.rect();
            if !rect.is_well_formed() {
                return Err(LevelError::InvalidRect {
                    level: index,
                    what: "obstacle",
                    index: i,
                });
            }
            let obstacle = match *desc {
                ObstacleDesc::Static { .. } => Obstacle::fixed(rect),
                ObstacleDesc::Moving {
                    axis,
                    amplitude,
                    speed,
                    ..
                } => {
                    if !amplitude.is_finite() || !speed.is_finite() {
                        return Err(LevelError::InvalidMotion { level: index, index: i });
                    }
                    if amplitude == 0.0 || speed == 0.0 {
                        log::warn!("level {index}: moving obstacle #{i} never moves");
                    }
                    Obstacle::moving(rect, axis, amplitude, speed)
                }
            };
            obstacles.push(obstacle);
        }

        let mut hazards = Vec::with_capacity(self.hazards.len());
        for (i, desc) in self.hazards.iter().enumerate() {
            let rect = Rect::new(desc.x, desc.y, desc.w, desc.h);
            if !rect.is_well_formed() {
                return Err(LevelError::InvalidRect {
                    level: index,
                    what: "hazard",
                    index: i,
                });
            }
            hazards.push(Hazard {
                rect,
                flipped: desc.flipped,
            });
        }

        let mut collectibles = Vec::with_capacity(self.stars.len());
        for &(x, y) in &self.stars {
            if !x.is_finite() || !y.is_finite() {
                return Err(LevelError::NonFinite {
                    level: index,
                    what: "star position",
                });
            }
            collectibles.push(Collectible::at(Vec2::new(x, y)));
        }

        let name = if self.name.is_empty() {
            format!("Level {}", index + 1)
        } else {
            self.name.clone()
        };

        Ok(Level {
            name,
            obstacles,
            hazards,
            collectibles,
            start: Vec2::new(sx, sy),
            goal: self.goal,
        })
    }
}

/// Validate and build a whole level set
pub fn build_levels(descs: &[LevelDesc]) -> Result<Vec<Level>, LevelError> {
    if descs.is_empty() {
        return Err(LevelError::NoLevels);
    }
    descs.iter().enumerate().map(|(i, d)| d.build(i)).collect()
}

/// Parse a JSON array of levels
pub fn load_levels_from_str(json: &str) -> Result<Vec<Level>, LevelError> {
    let descs: Vec<LevelDesc> = serde_json::from_str(json)?;
    let levels = build_levels(&descs)?;
    log::info!("Loaded {} levels", levels.len());
    Ok(levels)
}

pub fn load_levels_from_path(path: &Path) -> Result<Vec<Level>, LevelError> {
    let json = std::fs::read_to_string(path)?;
    load_levels_from_str(&json)
}

fn fixed(x: f32, y: f32, w: f32, h: f32) -> ObstacleDesc {
    ObstacleDesc::Static { x, y, w, h }
}

fn moving(x: f32, y: f32, w: f32, h: f32, axis: Axis, amplitude: f32, speed: f32) -> ObstacleDesc {
    ObstacleDesc::Moving {
        x,
        y,
        w,
        h,
        axis,
        amplitude,
        speed,
    }
}

fn spike(x: f32, y: f32, w: f32, h: f32, flipped: bool) -> HazardDesc {
    HazardDesc { x, y, w, h, flipped }
}

/// The stock level set
pub fn builtin_levels() -> Vec<LevelDesc> {
    vec![
        LevelDesc {
            name: "First Steps".into(),
            obstacles: vec![
                fixed(0.0, 600.0, 1500.0, 80.0),
                fixed(600.0, 350.0, 200.0, 20.0),
                fixed(1600.0, -60.0, 40.0, 520.0),
                fixed(1600.0, 510.0, 40.0, 200.0),
                fixed(1750.0, 600.0, 1000.0, 80.0),
            ],
            hazards: vec![],
            stars: vec![(685.0, 300.0), (1150.0, 400.0), (2000.0, 450.0)],
            start: (100.0, 520.0),
            goal: Rect::new(2600.0, 490.0, 90.0, 110.0),
        },
        LevelDesc {
            name: "Moving Parts".into(),
            obstacles: vec![
                fixed(0.0, 600.0, 500.0, 50.0),
                fixed(600.0, 0.0, 40.0, 540.0),
                fixed(600.0, 590.0, 150.0, 50.0),
                moving(850.0, 540.0, 150.0, 20.0, Axis::Y, 150.0, 0.04),
                fixed(1000.0, 350.0, 200.0, 20.0),
                fixed(1300.0, 500.0, 200.0, 20.0),
                fixed(1300.0, 200.0, 200.0, 20.0),
                moving(1600.0, 400.0, 100.0, 20.0, Axis::X, 100.0, 0.04),
                fixed(1900.0, 10.0, 40.0, 450.0),
                fixed(1900.0, 510.0, 40.0, 150.0),
                fixed(2050.0, 550.0, 40.0, 120.0),
                fixed(2200.0, 600.0, 600.0, 50.0),
            ],
            hazards: vec![],
            stars: vec![
                (670.0, 500.0),
                (900.0, 100.0),
                (1350.0, 450.0),
                (1350.0, 150.0),
                (2150.0, 400.0),
            ],
            start: (50.0, 520.0),
            goal: Rect::new(2500.0, 490.0, 80.0, 110.0),
        },
        LevelDesc {
            name: "Spikes".into(),
            obstacles: vec![
                fixed(0.0, 600.0, 1000.0, 50.0),
                moving(1050.0, 400.0, 200.0, 20.0, Axis::Y, 150.0, 0.04),
                fixed(1400.0, 600.0, 600.0, 50.0),
                fixed(1400.0, 250.0, 600.0, 20.0),
                fixed(2200.0, 450.0, 200.0, 20.0),
                fixed(2500.0, 300.0, 200.0, 20.0),
                fixed(2800.0, 600.0, 600.0, 50.0),
            ],
            hazards: vec![
                spike(400.0, 560.0, 150.0, 40.0, false),
                spike(1550.0, 500.0, 60.0, 100.0, false),
                spike(1800.0, 500.0, 60.0, 100.0, false),
                spike(1650.0, 270.0, 60.0, 30.0, true),
                spike(2810.0, 500.0, 60.0, 100.0, false),
            ],
            stars: vec![
                (470.0, 250.0),
                (1150.0, 150.0),
                (1600.0, 50.0),
                (1900.0, 400.0),
                (2600.0, 250.0),
            ],
            start: (50.0, 520.0),
            goal: Rect::new(3100.0, 490.0, 80.0, 110.0),
        },
    ]
}

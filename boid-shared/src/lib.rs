#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Represents a 2D position in world coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

/// Drawable state of one boid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidState {
    pub flock: usize,
    pub position: Position,
    pub velocity: Position,
    /// Direction of travel in radians, derived from the velocity
    pub heading: f32,
}

impl BoidState {
    pub fn new(flock: usize, position: Position, velocity: Position) -> Self {
        Self {
            flock,
            position,
            velocity,
            heading: libm::atan2f(velocity.y, velocity.x),
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.distance_to(&Position::default())
    }
}

/// Everything the presentation layer needs to draw one tick
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub target: Option<Position>,
    pub boids: Vec<BoidState>,
}

/// Behavior switches as sent by a UI
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToggleFlags {
    pub seek: bool,
    pub wander: bool,
    pub bounds: bool,
    pub flock: bool,
    pub separation: bool,
    pub alignment: bool,
    pub cohesion: bool,
    pub avoid_obstacles: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ObstacleSettings {
    pub position: Position,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WanderSettings {
    pub distance: f32,
    pub radius: f32,
    pub change: f32,
}

impl Default for WanderSettings {
    fn default() -> Self {
        Self {
            distance: 50.0,
            radius: 25.0,
            change: 0.3,
        }
    }
}

/// Boid simulation configuration, as stored in a settings file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub width: f32,
    pub height: f32,
    pub flock_sizes: Vec<usize>,
    pub max_speed: f32,
    pub max_force: f32,
    pub spawn_speed: f32,
    pub slowing_radius: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub seek_weight: f32,
    pub wander: WanderSettings,
    pub bounds_margin: f32,
    pub bounds_amplification: f32,
    pub avoid_radius: f32,
    pub avoid_amplification: f32,
    /// `None` keeps the built-in obstacle layout
    pub obstacles: Option<Vec<ObstacleSettings>>,
    pub seed: Option<u64>,
    pub toggles: ToggleFlags,
    pub target: Option<Position>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            flock_sizes: vec![10],
            max_speed: 2.0,
            max_force: 0.05,
            spawn_speed: 2.0,
            slowing_radius: 100.0,
            separation_radius: 25.0,
            alignment_radius: 50.0,
            cohesion_radius: 50.0,
            separation_weight: 1.0,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            seek_weight: 1.0,
            wander: WanderSettings::default(),
            bounds_margin: 50.0,
            bounds_amplification: 1.5,
            avoid_radius: 30.0,
            avoid_amplification: 1.5,
            obstacles: None,
            seed: None,
            toggles: ToggleFlags::default(),
            target: None,
        }
    }
}

#[cfg(feature = "std")]
impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(feature = "std")]
impl FrameSnapshot {
    /// Single-line JSON, for streaming one frame per line
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

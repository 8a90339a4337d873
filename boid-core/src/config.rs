use alloc::vec;
use alloc::vec::Vec;

use crate::error::{non_negative, ConfigError};
use crate::{Bounds, Obstacle, Vector2D};

/// Shape of the wander random walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderConfig {
    /// How far ahead of the boid the wander circle sits.
    pub distance: f32,
    pub radius: f32,
    /// Largest change of the wander angle per tick, in radians.
    pub change: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            distance: 50.0,
            radius: 25.0,
            change: 0.3,
        }
    }
}

impl WanderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("wander distance", self.distance)?;
        non_negative("wander radius", self.radius)?;
        non_negative("wander change", self.change)?;
        Ok(())
    }
}

/// Tuning shared by every steering behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorConfig {
    /// Seek slows down linearly inside this distance of its target.
    pub slowing_radius: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub seek_weight: f32,
    pub wander: WanderConfig,
    pub bounds_margin: f32,
    pub bounds_amplification: f32,
    /// Clearance kept around each obstacle's own radius.
    pub avoid_radius: f32,
    pub avoid_amplification: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            slowing_radius: 100.0,
            separation_radius: 25.0,
            alignment_radius: 50.0,
            cohesion_radius: 50.0,
            separation_weight: 1.0,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            seek_weight: 1.0,
            wander: WanderConfig::default(),
            bounds_margin: 50.0,
            bounds_amplification: 1.5,
            avoid_radius: 30.0,
            avoid_amplification: 1.5,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("slowing_radius", self.slowing_radius)?;
        non_negative("separation_radius", self.separation_radius)?;
        non_negative("alignment_radius", self.alignment_radius)?;
        non_negative("cohesion_radius", self.cohesion_radius)?;
        non_negative("separation_weight", self.separation_weight)?;
        non_negative("alignment_weight", self.alignment_weight)?;
        non_negative("cohesion_weight", self.cohesion_weight)?;
        non_negative("seek_weight", self.seek_weight)?;
        non_negative("bounds_margin", self.bounds_margin)?;
        non_negative("bounds_amplification", self.bounds_amplification)?;
        non_negative("avoid_radius", self.avoid_radius)?;
        non_negative("avoid_amplification", self.avoid_amplification)?;
        self.wander.validate()
    }

    /// Widest radius any flocking behavior looks at.
    pub fn neighbor_radius(&self) -> f32 {
        self.separation_radius
            .max(self.alignment_radius)
            .max(self.cohesion_radius)
    }
}

/// Everything needed to build (and rebuild on reset) a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// World bounds; boids spawn anywhere inside them.
    pub bounds: Bounds,
    /// One entry per flock: how many boids it spawns with.
    pub flock_sizes: Vec<usize>,
    pub max_speed: f32,
    pub max_force: f32,
    /// Spawn velocity components are drawn from `[-spawn_speed, spawn_speed]`.
    pub spawn_speed: f32,
    pub obstacles: Vec<Obstacle>,
    pub behavior: BehaviorConfig,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            flock_sizes: vec![10],
            max_speed: 2.0,
            max_force: 0.05,
            spawn_speed: 2.0,
            obstacles: default_obstacles(),
            behavior: BehaviorConfig::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Bounds::new(self.bounds.width(), self.bounds.height())?;
        non_negative("max_speed", self.max_speed)?;
        non_negative("max_force", self.max_force)?;
        non_negative("spawn_speed", self.spawn_speed)?;
        for obstacle in &self.obstacles {
            Obstacle::new(obstacle.position(), obstacle.radius())?;
        }
        self.behavior.validate()
    }

    pub fn boid_count(&self) -> usize {
        self.flock_sizes.iter().sum()
    }
}

/// Fixed layout used when no obstacles are configured explicitly.
pub fn default_obstacles() -> Vec<Obstacle> {
    [
        (Vector2D::new(200.0, 300.0), 40.0),
        (Vector2D::new(400.0, 150.0), 30.0),
        (Vector2D::new(600.0, 400.0), 50.0),
    ]
    .into_iter()
    .filter_map(|(position, radius)| Obstacle::new(position, radius).ok())
    .collect()
}

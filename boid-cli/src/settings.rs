use anyhow::{Context, Result};
use boid_core::{
    default_obstacles, BehaviorConfig, Bounds, Obstacle, SimConfig, Toggles, Vector2D,
    WanderConfig,
};
use boid_shared::{ObstacleSettings, Position, SimulationSettings, ToggleFlags};
use std::path::Path;

/// Read settings from a JSON file, or fall back to the defaults.
pub fn load(path: Option<&Path>) -> Result<SimulationSettings> {
    let Some(path) = path else {
        log::info!("No settings file given, using defaults");
        return Ok(SimulationSettings::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = SimulationSettings::from_json(&json)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn vector(position: Position) -> Vector2D {
    Vector2D::new(position.x, position.y)
}

pub fn position(vector: Vector2D) -> Position {
    Position::new(vector.x, vector.y)
}

fn obstacle(settings: &ObstacleSettings) -> Result<Obstacle> {
    Obstacle::new(vector(settings.position), settings.radius).with_context(|| {
        format!(
            "Invalid obstacle at ({}, {})",
            settings.position.x, settings.position.y
        )
    })
}

/// Build a validated core config from file settings.
pub fn sim_config(settings: &SimulationSettings) -> Result<SimConfig> {
    let obstacles = match &settings.obstacles {
        Some(list) => list.iter().map(obstacle).collect::<Result<Vec<_>>>()?,
        None => default_obstacles(),
    };

    let config = SimConfig {
        bounds: Bounds::new(settings.width, settings.height).context("Invalid world size")?,
        flock_sizes: settings.flock_sizes.clone(),
        max_speed: settings.max_speed,
        max_force: settings.max_force,
        spawn_speed: settings.spawn_speed,
        obstacles,
        behavior: BehaviorConfig {
            slowing_radius: settings.slowing_radius,
            separation_radius: settings.separation_radius,
            alignment_radius: settings.alignment_radius,
            cohesion_radius: settings.cohesion_radius,
            separation_weight: settings.separation_weight,
            alignment_weight: settings.alignment_weight,
            cohesion_weight: settings.cohesion_weight,
            seek_weight: settings.seek_weight,
            wander: WanderConfig {
                distance: settings.wander.distance,
                radius: settings.wander.radius,
                change: settings.wander.change,
            },
            bounds_margin: settings.bounds_margin,
            bounds_amplification: settings.bounds_amplification,
            avoid_radius: settings.avoid_radius,
            avoid_amplification: settings.avoid_amplification,
        },
        seed: settings.seed,
    };

    config.validate().context("Invalid simulation settings")?;
    Ok(config)
}

pub fn toggles(flags: &ToggleFlags) -> Toggles {
    Toggles {
        seek: flags.seek,
        wander: flags.wander,
        bounds: flags.bounds,
        flock: flags.flock,
        separation: flags.separation,
        alignment: flags.alignment,
        cohesion: flags.cohesion,
        avoid_obstacles: flags.avoid_obstacles,
    }
}

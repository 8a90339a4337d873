use crate::error::{finite_vector, non_negative, ConfigError};
use crate::Vector2D;

/// A static circular region boids steer around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    position: Vector2D,
    radius: f32,
}

impl Obstacle {
    pub fn new(position: Vector2D, radius: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            position: finite_vector("obstacle position", position)?,
            radius: non_negative("obstacle radius", radius)?,
        })
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Bounds of the simulated world: `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(ConfigError::InvalidBounds { width, height })
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn contains(&self, point: Vector2D) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

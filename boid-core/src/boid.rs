use crate::error::{finite_vector, non_negative, ConfigError};
use crate::{Bounds, Vector2D};

/// Identifies the flock a boid belongs to. Boids only flock with boids that
/// share the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FlockId(pub usize);

impl core::fmt::Display for FlockId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "flock-{}", self.0)
    }
}

/// A single boid: a point mass with bounded speed that integrates whatever
/// steering forces were accumulated during the current tick.
#[derive(Debug, Clone)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Force accumulator, cleared by every [`Boid::update`].
    pub acceleration: Vector2D,
    /// Phase of the wander random walk.
    pub wander_angle: f32,
    max_speed: f32,
    max_force: f32,
    flock: FlockId,
}

impl Boid {
    pub fn new(
        position: Vector2D,
        velocity: Vector2D,
        max_speed: f32,
        max_force: f32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            position: finite_vector("position", position)?,
            velocity: finite_vector("velocity", velocity)?,
            acceleration: Vector2D::zero(),
            wander_angle: 0.0,
            max_speed: non_negative("max_speed", max_speed)?,
            max_force: non_negative("max_force", max_force)?,
            flock: FlockId::default(),
        })
    }

    /// Random position inside `width` x `height` and a velocity with each
    /// component drawn from `[-spawn_speed, spawn_speed]`.
    pub fn random<R: rand::Rng + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        spawn_speed: f32,
        max_speed: f32,
        max_force: f32,
    ) -> Result<Self, ConfigError> {
        Bounds::new(width, height)?;
        non_negative("spawn_speed", spawn_speed)?;
        non_negative("max_speed", max_speed)?;
        non_negative("max_force", max_force)?;
        Ok(Self::spawn(rng, width, height, spawn_speed, max_speed, max_force))
    }

    /// [`Boid::random`] without validation, for already checked configs.
    pub(crate) fn spawn<R: rand::Rng + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        spawn_speed: f32,
        max_speed: f32,
        max_force: f32,
    ) -> Self {
        let position = Vector2D::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height));
        let velocity = Vector2D::new(
            rng.gen_range(-spawn_speed..=spawn_speed),
            rng.gen_range(-spawn_speed..=spawn_speed),
        );
        Self {
            position,
            velocity,
            acceleration: Vector2D::zero(),
            wander_angle: 0.0,
            max_speed,
            max_force,
            flock: FlockId::default(),
        }
    }

    pub fn with_flock(mut self, flock: FlockId) -> Self {
        self.flock = flock;
        self
    }

    pub fn flock(&self) -> FlockId {
        self.flock
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn max_force(&self) -> f32 {
        self.max_force
    }

    /// Direction of travel in radians. Derived for drawing, never stored.
    pub fn heading(&self) -> f32 {
        self.velocity.heading()
    }

    pub fn apply_force(&mut self, force: Vector2D) {
        self.acceleration += force;
    }

    /// Integrate one tick: fold the accumulated force into the velocity, cap
    /// the speed, move, then clear the accumulator.
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vector2D::zero();
    }
}

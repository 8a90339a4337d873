use alloc::vec::Vec;

use rand::Rng;

use crate::boid::{Boid, FlockId};
use crate::config::SimConfig;

/// A group of boids that only flock with each other.
#[derive(Debug, Clone)]
pub struct Flock {
    id: FlockId,
    boids: Vec<Boid>,
}

impl Flock {
    pub fn new(id: FlockId) -> Self {
        Self {
            id,
            boids: Vec::new(),
        }
    }

    /// `count` boids placed uniformly inside the configured bounds. The
    /// config must already be validated.
    pub(crate) fn spawn<R: Rng + ?Sized>(
        id: FlockId,
        count: usize,
        config: &SimConfig,
        rng: &mut R,
    ) -> Self {
        let bounds = config.bounds;
        let boids = (0..count)
            .map(|_| {
                Boid::spawn(
                    rng,
                    bounds.width(),
                    bounds.height(),
                    config.spawn_speed,
                    config.max_speed,
                    config.max_force,
                )
                .with_flock(id)
            })
            .collect();

        Self { id, boids }
    }

    pub fn id(&self) -> FlockId {
        self.id
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    /// Add a boid, moving it into this flock.
    pub fn add_boid(&mut self, boid: Boid) {
        self.boids.push(boid.with_flock(self.id));
    }

    pub fn clear(&mut self) {
        self.boids.clear();
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }
}

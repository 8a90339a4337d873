use alloc::vec::Vec;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::behavior;
use crate::boid::{Boid, FlockId};
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::flock::Flock;
use crate::neighbors::{BruteForce, NeighborSearch};
use crate::toggles::{Flocking, Toggles};
use crate::{Bounds, Obstacle, Vector2D};

/// Runs every flock forward one tick at a time.
///
/// Within a tick all forces are computed from the tick-start state of every
/// boid and only then integrated, so the result does not depend on the order
/// boids are visited in.
pub struct Simulation<S: NeighborSearch = BruteForce> {
    config: SimConfig,
    flocks: Vec<Flock>,
    search: S,
    rng: StdRng,
    // Scratch buffers reused across ticks.
    forces: Vec<Vector2D>,
    candidates: Vec<usize>,
    tick: u64,
}

impl Simulation<BruteForce> {
    /// Seeded from `config.seed`, or from OS entropy when unset.
    #[cfg(feature = "std")]
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_search(config, BruteForce, rng)
    }

    /// Same seed, same run. Overrides `config.seed`.
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_search(config, BruteForce, StdRng::seed_from_u64(seed))
    }
}

impl<S: NeighborSearch> Simulation<S> {
    pub fn with_search(config: SimConfig, search: S, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let flocks = spawn_flocks(&config, &mut rng);

        log::debug!(
            "simulation ready: {} flocks, {} boids, {} obstacles, {} neighbor search",
            flocks.len(),
            config.boid_count(),
            config.obstacles.len(),
            search.name()
        );

        Ok(Self {
            config,
            flocks,
            search,
            rng,
            forces: Vec::new(),
            candidates: Vec::new(),
            tick: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.config.obstacles
    }

    pub fn flocks(&self) -> &[Flock] {
        &self.flocks
    }

    pub fn flocks_mut(&mut self) -> &mut [Flock] {
        &mut self.flocks
    }

    pub fn flock(&self, id: FlockId) -> Option<&Flock> {
        self.flocks.iter().find(|f| f.id() == id)
    }

    /// Number of completed ticks since construction or the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn boid_count(&self) -> usize {
        self.flocks.iter().map(Flock::len).sum()
    }

    /// Every boid with its flock, in flock order, for drawing.
    pub fn states(&self) -> impl Iterator<Item = (FlockId, &Boid)> + '_ {
        self.flocks
            .iter()
            .flat_map(|flock| flock.boids().iter().map(move |b| (flock.id(), b)))
    }

    /// Throw every boid away and spawn a fresh set from the config. The
    /// caller's toggles are switched off as part of the reset.
    pub fn reset(&mut self, toggles: &mut Toggles) {
        self.flocks = spawn_flocks(&self.config, &mut self.rng);
        self.tick = 0;
        toggles.clear();
        log::debug!("simulation reset: {} boids", self.boid_count());
    }

    /// Advance one tick with the given behaviors and optional seek target.
    /// Seek is skipped when no target is given or the target is not finite.
    pub fn step(&mut self, toggles: &Toggles, target: Option<Vector2D>) {
        let target = target.filter(|t| t.is_finite());
        let Self {
            config,
            flocks,
            search,
            rng,
            forces,
            candidates,
            ..
        } = self;

        for flock in flocks.iter_mut() {
            let boids = flock.boids_mut();

            // The wander angle is private to each boid, so advancing it here
            // cannot leak into anyone else's forces.
            if toggles.wander {
                for boid in boids.iter_mut() {
                    behavior::advance_wander(boid, config.behavior.wander.change, rng);
                }
            }

            let snapshot: &[Boid] = boids;
            search.rebuild(snapshot);
            forces.clear();
            for index in 0..snapshot.len() {
                candidates.clear();
                let force = steering_force(config, toggles, target, snapshot, index, search, candidates);
                forces.push(force);
            }

            for (boid, force) in boids.iter_mut().zip(forces.iter()) {
                boid.apply_force(*force);
                boid.update();
            }
        }

        self.tick += 1;
        log::trace!("tick {} done", self.tick);
    }
}

fn spawn_flocks(config: &SimConfig, rng: &mut StdRng) -> Vec<Flock> {
    config
        .flock_sizes
        .iter()
        .enumerate()
        .map(|(id, &count)| Flock::spawn(FlockId(id), count, config, rng))
        .collect()
}

/// Sum of every enabled behavior for `boids[index]`, in a fixed order:
/// bounds, seek, flocking, wander, obstacle avoidance. Each behavior is
/// capped on its own; the sum is not.
fn steering_force<S: NeighborSearch>(
    config: &SimConfig,
    toggles: &Toggles,
    target: Option<Vector2D>,
    boids: &[Boid],
    index: usize,
    search: &S,
    candidates: &mut Vec<usize>,
) -> Vector2D {
    let boid = &boids[index];
    let tuning = &config.behavior;
    let mut force = Vector2D::zero();

    if toggles.bounds {
        force += behavior::stay_in_bounds(
            boid,
            &config.bounds,
            tuning.bounds_margin,
            tuning.bounds_amplification,
        );
    }

    if let (true, Some(target)) = (toggles.seek, target) {
        force += behavior::seek(boid, target, tuning.slowing_radius) * tuning.seek_weight;
    }

    let flocking = toggles.flocking();
    if flocking != Flocking::Off {
        search.candidates(boids, index, tuning.neighbor_radius(), candidates);
        let neighbors = candidates.iter().map(|&j| &boids[j]);

        match flocking {
            Flocking::Combined => force += behavior::flock(boid, neighbors, tuning),
            Flocking::Individual {
                separation,
                alignment,
                cohesion,
            } => {
                if separation {
                    force += behavior::separation(boid, neighbors.clone(), tuning.separation_radius)
                        * tuning.separation_weight;
                }
                if alignment {
                    force += behavior::alignment(boid, neighbors.clone(), tuning.alignment_radius)
                        * tuning.alignment_weight;
                }
                if cohesion {
                    force += behavior::cohesion(
                        boid,
                        neighbors,
                        tuning.cohesion_radius,
                        tuning.slowing_radius,
                    ) * tuning.cohesion_weight;
                }
            }
            Flocking::Off => {}
        }
    }

    if toggles.wander {
        force += behavior::wander_force(boid, &tuning.wander);
    }

    if toggles.avoid_obstacles {
        force += behavior::avoid_obstacles(
            boid,
            &config.obstacles,
            tuning.avoid_radius,
            tuning.avoid_amplification,
        );
    }

    force
}

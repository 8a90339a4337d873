use anyhow::{Context, Result};
use boid_core::{Simulation, Toggles, Vector2D};
use boid_shared::{BoidState, FrameSnapshot, SimulationSettings};
use std::io::Write;
use std::time::Instant;

use crate::settings;

/// Totals reported after a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub frames_written: u64,
    pub boids: usize,
    pub elapsed_secs: f64,
}

/// Drives a simulation on behalf of a presentation layer: owns the toggles
/// and target point and hands them to every tick.
pub struct Runner {
    sim: Simulation,
    toggles: Toggles,
    target: Option<Vector2D>,
}

impl Runner {
    pub fn new(settings: &SimulationSettings, seed: Option<u64>) -> Result<Self> {
        let config = settings::sim_config(settings)?;
        let seed = seed.or(config.seed);
        let sim = match seed {
            Some(seed) => Simulation::with_seed(config, seed),
            None => Simulation::new(config),
        }
        .context("Failed to build simulation")?;

        log::info!(
            "Simulation ready: {} boids in {} flock(s), seed {:?}",
            sim.boid_count(),
            sim.flocks().len(),
            seed
        );

        Ok(Self {
            sim,
            toggles: settings::toggles(&settings.toggles),
            target: settings.target.map(settings::vector),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }

    pub fn toggles_mut(&mut self) -> &mut Toggles {
        &mut self.toggles
    }

    pub fn set_target(&mut self, target: Option<Vector2D>) {
        self.target = target;
    }

    pub fn step(&mut self) {
        self.sim.step(&self.toggles, self.target);
    }

    /// Fresh boids, every toggle off.
    pub fn reset(&mut self) {
        self.sim.reset(&mut self.toggles);
        log::info!("Simulation reset, {} boids", self.sim.boid_count());
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.sim.tick(),
            target: self.target.map(settings::position),
            boids: self
                .sim
                .states()
                .map(|(flock, boid)| {
                    BoidState::new(
                        flock.0,
                        settings::position(boid.position),
                        settings::position(boid.velocity),
                    )
                })
                .collect(),
        }
    }

    /// Run `ticks` ticks, writing a JSON line after every `every`-th one.
    /// `every == 0` writes only the final frame.
    pub fn run<W: Write>(&mut self, ticks: u64, every: u64, out: &mut W) -> Result<RunSummary> {
        let enabled: Vec<_> = self.toggles.enabled().map(|b| b.name()).collect();
        log::info!("Running {} ticks with behaviors {:?}", ticks, enabled);

        let start = Instant::now();
        let mut frames_written = 0;

        // Counted per call, so a runner can be driven by several runs.
        for done in 1..=ticks {
            self.step();
            let due = if every == 0 { done == ticks } else { done % every == 0 };
            if due {
                self.write_frame(out)?;
                frames_written += 1;
            }
        }
        out.flush().context("Failed to flush output")?;

        let summary = RunSummary {
            ticks,
            frames_written,
            boids: self.sim.boid_count(),
            elapsed_secs: start.elapsed().as_secs_f64(),
        };
        log::debug!("Run summary: {:?}", summary);
        Ok(summary)
    }

    fn write_frame<W: Write>(&self, out: &mut W) -> Result<()> {
        let line = self
            .snapshot()
            .to_json_line()
            .context("Failed to encode frame")?;
        writeln!(out, "{}", line).context("Failed to write frame")?;
        Ok(())
    }
}

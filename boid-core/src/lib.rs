#![cfg_attr(not(feature = "std"), no_std)]
//! Steering and flocking for autonomous 2D agents.
//!
//! A [`Simulation`] owns one or more [`Flock`]s and a fixed set of
//! [`Obstacle`]s. Each call to [`Simulation::step`] takes the caller's
//! [`Toggles`] and an optional seek target, sums the enabled steering forces
//! for every boid from the tick-start state, then integrates.

extern crate alloc;

pub mod behavior;
mod boid;
mod config;
mod error;
mod flock;
mod math;
mod neighbors;
mod obstacle;
mod simulation;
mod toggles;
mod vector;

pub use boid::{Boid, FlockId};
pub use config::{default_obstacles, BehaviorConfig, SimConfig, WanderConfig};
pub use error::{ConfigError, UnknownBehavior};
pub use flock::Flock;
pub use neighbors::{BruteForce, NeighborSearch};
pub use obstacle::{Bounds, Obstacle};
pub use simulation::Simulation;
pub use toggles::{Behavior, Flocking, Toggles};
pub use vector::Vector2D;

//! Headless driver for the boid simulation: loads settings, owns the
//! behavior toggles and target point, and streams frames as JSON lines.

pub mod runner;
pub mod settings;

pub use runner::{RunSummary, Runner};

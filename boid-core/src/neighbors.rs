use alloc::vec::Vec;

use crate::Boid;

/// A pluggable neighbor query that can be swapped without touching the
/// steering logic.
///
/// Implementations may return a superset of the boids inside `radius`; the
/// behaviors apply their own strict radius test, so a coarser index never
/// changes the result of a tick.
pub trait NeighborSearch {
    /// Rebuild internal structures from the tick-start positions.
    fn rebuild(&mut self, boids: &[Boid]);

    /// Push indices of candidate neighbors of `index` into `out`. Never
    /// includes `index` itself.
    fn candidates(&self, boids: &[Boid], index: usize, radius: f32, out: &mut Vec<usize>);

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;
}

/// Checks every pair. O(n^2) per flock, fine for a few hundred boids.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl NeighborSearch for BruteForce {
    fn rebuild(&mut self, _boids: &[Boid]) {}

    fn candidates(&self, boids: &[Boid], index: usize, radius: f32, out: &mut Vec<usize>) {
        let Some(me) = boids.get(index) else {
            return;
        };
        // Same distance computation as the behaviors, so nothing they would
        // count is dropped to rounding.
        for (j, other) in boids.iter().enumerate() {
            if j == index {
                continue;
            }
            if me.position.distance(&other.position) <= radius {
                out.push(j);
            }
        }
    }

    fn name(&self) -> &'static str {
        "BruteForce"
    }
}

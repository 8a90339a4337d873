//! Steering behaviors.
//!
//! Every behavior returns a force capped at the boid's `max_force` (obstacle
//! avoidance is then amplified on top of that cap). Callers add the result to
//! the boid's acceleration; the sum of several behaviors is never re-capped.
//!
//! Neighbor iterators must not contain the boid being steered.

use rand::Rng;

use crate::config::{BehaviorConfig, WanderConfig};
use crate::{Boid, Bounds, Obstacle, Vector2D};

/// Reynolds steering: desired velocity minus current velocity, capped.
fn steer(boid: &Boid, desired: Vector2D) -> Vector2D {
    (desired - boid.velocity).limit(boid.max_force())
}

/// Mean of unit vectors pointing away from each `source` strictly closer than
/// its reach, weighted by inverse distance. Coincident points have no
/// direction and are skipped.
fn repulsion<I>(position: Vector2D, sources: I) -> Option<Vector2D>
where
    I: IntoIterator<Item = (Vector2D, f32)>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for (source, reach) in sources {
        let distance = position.distance(&source);
        if distance > 0.0 && distance < reach {
            sum += (position - source).normalize() / distance;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    let average = sum / count as f32;
    if average.is_zero() {
        None
    } else {
        Some(average)
    }
}

/// Speed seek aims for at `distance` from its target.
pub fn arrival_speed(distance: f32, max_speed: f32, slowing_radius: f32) -> f32 {
    if distance < slowing_radius {
        max_speed * distance / slowing_radius
    } else {
        max_speed
    }
}

/// Head for `target`, slowing linearly inside `slowing_radius`.
///
/// A target on the boid, or one with no finite offset from it, gives no force.
pub fn seek(boid: &Boid, target: Vector2D, slowing_radius: f32) -> Vector2D {
    let offset = target - boid.position;
    let distance = offset.magnitude();
    if distance == 0.0 || !distance.is_finite() {
        return Vector2D::zero();
    }

    let speed = arrival_speed(distance, boid.max_speed(), slowing_radius);
    steer(boid, offset / distance * speed)
}

/// Advance the boid's wander angle by a uniform step in `[-change, change]`.
///
/// Returns `false` without touching the angle when the boid is not moving.
pub fn advance_wander<R: Rng + ?Sized>(boid: &mut Boid, change: f32, rng: &mut R) -> bool {
    if boid.velocity.is_zero() {
        return false;
    }
    boid.wander_angle += rng.gen_range(-change..=change);
    true
}

/// Steer toward the point at the boid's wander angle on a circle projected
/// ahead of it. Reads the angle as-is.
pub fn wander_force(boid: &Boid, config: &WanderConfig) -> Vector2D {
    if boid.velocity.is_zero() {
        return Vector2D::zero();
    }

    let center = boid.position + boid.velocity.normalize() * config.distance;
    let offset = Vector2D::from_angle(boid.heading() + boid.wander_angle) * config.radius;
    let desired = (center + offset - boid.position).with_magnitude(boid.max_speed());
    steer(boid, desired)
}

/// One wander step: move the random walk along, then steer toward it.
pub fn wander<R: Rng + ?Sized>(boid: &mut Boid, config: &WanderConfig, rng: &mut R) -> Vector2D {
    if !advance_wander(boid, config.change, rng) {
        return Vector2D::zero();
    }
    wander_force(boid, config)
}

/// Push back toward the interior when within `margin` of an edge. Each axis
/// is corrected on its own; near a corner both corrections add up.
pub fn stay_in_bounds(boid: &Boid, bounds: &Bounds, margin: f32, amplification: f32) -> Vector2D {
    let mut correction = Vector2D::zero();
    let p = boid.position;

    if p.x <= margin {
        correction.x += 1.0;
    } else if p.x >= bounds.width() - margin {
        correction.x -= 1.0;
    }

    if p.y <= margin {
        correction.y += 1.0;
    } else if p.y >= bounds.height() - margin {
        correction.y -= 1.0;
    }

    if correction.is_zero() {
        return Vector2D::zero();
    }
    (correction.normalize() * amplification).limit(boid.max_force())
}

/// Move away from neighbors strictly inside `radius`, closer ones counting more.
pub fn separation<'a, I>(boid: &Boid, others: I, radius: f32) -> Vector2D
where
    I: IntoIterator<Item = &'a Boid>,
{
    match repulsion(boid.position, others.into_iter().map(|o| (o.position, radius))) {
        Some(away) => steer(boid, away.with_magnitude(boid.max_speed())),
        None => Vector2D::zero(),
    }
}

/// Match the average velocity of neighbors strictly inside `radius`.
pub fn alignment<'a, I>(boid: &Boid, others: I, radius: f32) -> Vector2D
where
    I: IntoIterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in others {
        if boid.position.distance(&other.position) < radius {
            sum += other.velocity;
            count += 1;
        }
    }

    if count == 0 {
        return Vector2D::zero();
    }
    let average = sum / count as f32;
    steer(boid, average.with_magnitude(boid.max_speed()))
}

/// Seek the centroid of neighbors strictly inside `radius`.
pub fn cohesion<'a, I>(boid: &Boid, others: I, radius: f32, slowing_radius: f32) -> Vector2D
where
    I: IntoIterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in others {
        if boid.position.distance(&other.position) < radius {
            sum += other.position;
            count += 1;
        }
    }

    if count == 0 {
        return Vector2D::zero();
    }
    seek(boid, sum / count as f32, slowing_radius)
}

/// Separation + alignment + cohesion, each capped on its own and weighted.
pub fn flock<'a, I>(boid: &Boid, others: I, config: &BehaviorConfig) -> Vector2D
where
    I: IntoIterator<Item = &'a Boid> + Clone,
{
    separation(boid, others.clone(), config.separation_radius) * config.separation_weight
        + alignment(boid, others.clone(), config.alignment_radius) * config.alignment_weight
        + cohesion(boid, others, config.cohesion_radius, config.slowing_radius)
            * config.cohesion_weight
}

/// Repel from obstacles closer than `obstacle.radius + avoid_radius`. The
/// capped force is scaled by `amplification` so it outweighs flocking.
pub fn avoid_obstacles(
    boid: &Boid,
    obstacles: &[Obstacle],
    avoid_radius: f32,
    amplification: f32,
) -> Vector2D {
    let sources = obstacles
        .iter()
        .map(|o| (o.position(), o.radius() + avoid_radius));

    match repulsion(boid.position, sources) {
        Some(away) => steer(boid, away.with_magnitude(boid.max_speed())) * amplification,
        None => Vector2D::zero(),
    }
}

use boid_core::behavior;
use boid_core::{
    Behavior, Boid, Bounds, Obstacle, SimConfig, Simulation, Toggles, Vector2D, WanderConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-4;

fn config_without_boids() -> SimConfig {
    SimConfig {
        flock_sizes: vec![0],
        obstacles: Vec::new(),
        ..SimConfig::default()
    }
}

fn at(x: f32, y: f32, vx: f32, vy: f32) -> Boid {
    Boid::new(Vector2D::new(x, y), Vector2D::new(vx, vy), 2.0, 0.05).unwrap()
}

fn everything_on() -> Toggles {
    let mut toggles = Toggles::default();
    for behavior in Behavior::ALL {
        toggles.set(behavior, true);
    }
    toggles
}

#[test]
fn test_speed_never_exceeds_max() {
    let config = SimConfig {
        flock_sizes: vec![40, 25],
        ..SimConfig::default()
    };
    let mut sim = Simulation::with_seed(config, 2024).unwrap();
    let toggles = everything_on();

    for tick in 0..300 {
        let target = Vector2D::new(400.0 + (tick as f32).sin() * 200.0, 300.0);
        sim.step(&toggles, Some(target));
        for (_, boid) in sim.states() {
            assert!(boid.velocity.magnitude() <= boid.max_speed() + EPS);
            assert!(boid.position.is_finite());
            assert_eq!(boid.acceleration, Vector2D::zero());
        }
    }
}

#[test]
fn test_neighbor_behaviors_zero_at_radius() {
    let me = at(0.0, 0.0, 1.0, 0.0);
    let on_edge = at(30.0, 0.0, 0.0, 2.0);

    assert_eq!(behavior::separation(&me, [&on_edge], 30.0), Vector2D::zero());
    assert_eq!(behavior::alignment(&me, [&on_edge], 30.0), Vector2D::zero());
    assert_eq!(behavior::cohesion(&me, [&on_edge], 30.0, 100.0), Vector2D::zero());

    let obstacle = Obstacle::new(Vector2D::new(20.0, 0.0), 5.0).unwrap();
    // 20 == 5 + 15
    assert_eq!(
        behavior::avoid_obstacles(&me, &[obstacle], 15.0, 1.5),
        Vector2D::zero()
    );

    // Just inside, every one of them reacts.
    assert_ne!(behavior::separation(&me, [&on_edge], 30.5), Vector2D::zero());
    assert_ne!(behavior::alignment(&me, [&on_edge], 30.5), Vector2D::zero());
    assert_ne!(behavior::cohesion(&me, [&on_edge], 30.5, 100.0), Vector2D::zero());
    assert_ne!(
        behavior::avoid_obstacles(&me, &[obstacle], 15.5, 1.5),
        Vector2D::zero()
    );
}

#[test]
fn test_seek_on_target_keeps_acceleration_clean() {
    let mut sim = Simulation::with_seed(config_without_boids(), 1).unwrap();
    sim.flocks_mut()[0].add_boid(at(250.0, 250.0, 0.0, 0.0));

    let toggles = Toggles::default().with(Behavior::Seek);
    sim.step(&toggles, Some(Vector2D::new(250.0, 250.0)));

    let boid = &sim.flocks()[0].boids()[0];
    assert!(boid.velocity.is_finite());
    assert_eq!(boid.position, Vector2D::new(250.0, 250.0));
}

#[test]
fn test_identical_seeds_give_identical_wander_trajectories() {
    let run = || {
        let mut sim = Simulation::with_seed(config_without_boids(), 77).unwrap();
        sim.flocks_mut()[0].add_boid(at(400.0, 300.0, 1.0, 0.0));
        let toggles = Toggles::default().with(Behavior::Wander);
        (0..100)
            .map(|_| {
                sim.step(&toggles, None);
                sim.flocks()[0].boids()[0].position
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_wander_twins_stay_together() {
    let config = WanderConfig::default();
    let mut a = at(100.0, 100.0, 0.5, 0.5);
    let mut b = at(100.0, 100.0, 0.5, 0.5);
    let mut rng_a = StdRng::seed_from_u64(5);
    let mut rng_b = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let fa = behavior::wander(&mut a, &config, &mut rng_a);
        let fb = behavior::wander(&mut b, &config, &mut rng_b);
        a.apply_force(fa);
        b.apply_force(fb);
        a.update();
        b.update();
    }

    assert_eq!(a.position, b.position);
    assert_eq!(a.wander_angle, b.wander_angle);
}

#[test]
fn test_seek_arrival_curve() {
    let boid = Boid::new(Vector2D::zero(), Vector2D::new(1.0, 0.0), 2.0, 100.0).unwrap();
    let target = Vector2D::new(10.0, 0.0);

    let force = behavior::seek(&boid, target, 100.0);
    let desired = force + boid.velocity;
    let direction = desired.normalize();

    assert!((direction.x - 1.0).abs() < EPS);
    assert!(direction.y.abs() < EPS);
    assert!((desired.magnitude() - 2.0 * 10.0 / 100.0).abs() < EPS);

    let mut previous = 0.0;
    for d in [1.0, 10.0, 40.0, 70.0, 99.0] {
        let speed = (behavior::seek(&boid, Vector2D::new(d, 0.0), 100.0) + boid.velocity).x;
        assert!((speed - 2.0 * d / 100.0).abs() < EPS);
        assert!(speed > previous);
        previous = speed;
    }
}

#[test]
fn test_cluster_at_rest_spreads_apart() {
    let mut sim = Simulation::with_seed(config_without_boids(), 1).unwrap();
    let center = Vector2D::new(400.0, 300.0);
    for k in 0..3 {
        let angle = k as f32 * std::f32::consts::TAU / 3.0;
        let p = center + Vector2D::from_angle(angle) * 8.0;
        sim.flocks_mut()[0].add_boid(at(p.x, p.y, 0.0, 0.0));
    }

    let pairwise = |boids: &[Boid]| {
        vec![
            boids[0].position.distance(&boids[1].position),
            boids[1].position.distance(&boids[2].position),
            boids[0].position.distance(&boids[2].position),
        ]
    };
    let mean = |boids: &[Boid]| boids.iter().map(|b| b.position).sum::<Vector2D>() / 3.0;

    let before = pairwise(sim.flocks()[0].boids());
    let mean_before = mean(sim.flocks()[0].boids());
    let radial_before: Vec<f32> = sim.flocks()[0]
        .boids()
        .iter()
        .map(|b| b.position.distance(&mean_before))
        .collect();

    sim.step(&Toggles::default().with(Behavior::Separation), None);

    let boids = sim.flocks()[0].boids();
    let after = pairwise(boids);
    for (b, a) in before.iter().zip(after.iter()) {
        assert!(a > b, "pairwise distance should grow: {b} -> {a}");
    }
    for (boid, r) in boids.iter().zip(radial_before.iter()) {
        assert!(boid.position.distance(&mean_before) > *r);
    }
}

#[test]
fn test_boid_on_margin_is_pushed_inside() {
    let bounds = Bounds::new(800.0, 600.0).unwrap();
    let mut sim = Simulation::with_seed(config_without_boids(), 1).unwrap();
    sim.flocks_mut()[0].add_boid(at(0.0, 300.0, 0.0, 0.0));
    sim.flocks_mut()[0].add_boid(at(50.0, 300.0, 0.0, 0.0));

    for boid in sim.flocks()[0].boids() {
        let force = behavior::stay_in_bounds(boid, &bounds, 50.0, 1.5);
        assert!(force.x > 0.0);
        assert_eq!(force.y, 0.0);
    }

    let before: Vec<f32> = sim.flocks()[0].boids().iter().map(|b| b.position.x).collect();
    sim.step(&Toggles::default().with(Behavior::Bounds), None);
    for (boid, x) in sim.flocks()[0].boids().iter().zip(before) {
        assert!(boid.position.x > x);
    }
}

#[test]
fn test_stacked_behaviors_may_exceed_single_cap() {
    // Several capped behaviors firing together are summed without a second
    // cap; only the speed limit in `update` bounds the result.
    let boid = at(10.0, 10.0, 0.0, 0.0);
    let neighbor = at(0.0, 0.0, 0.0, 0.0);
    let bounds = Bounds::new(800.0, 600.0).unwrap();

    let total = behavior::stay_in_bounds(&boid, &bounds, 50.0, 1.5)
        + behavior::separation(&boid, [&neighbor], 25.0);
    assert!(total.magnitude() > boid.max_force());
}

#[test]
fn test_reset_round_trip() {
    let config = SimConfig {
        flock_sizes: vec![12, 8],
        ..SimConfig::default()
    };
    let mut sim = Simulation::with_seed(config, 8).unwrap();
    let mut toggles = everything_on();
    for _ in 0..20 {
        sim.step(&toggles, Some(Vector2D::new(10.0, 10.0)));
    }
    sim.flocks_mut()[1].clear();
    assert_eq!(sim.boid_count(), 12);

    sim.reset(&mut toggles);

    assert_eq!(sim.boid_count(), 20);
    assert_eq!(toggles, Toggles::default());
    assert_eq!(toggles.enabled().count(), 0);
    for (_, boid) in sim.states() {
        assert!(sim.bounds().contains(boid.position));
    }
}

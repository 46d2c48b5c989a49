use criterion::{black_box, criterion_group, Criterion};
use planets_orbit::physics::orbits::solar_system::SolarSystem;
use planets_orbit::physics::util::vectors::ScreenCoord;

/// Ticks a solar system whose trails are already full, so every push also evicts
fn bench_tick_full_trails(c: &mut Criterion) {
    let center = ScreenCoord::new(500.0, 500.0);
    let mut solar_system = SolarSystem::default();
    for _ in 0..1000 {
        solar_system.tick(center);
    }
    c.bench_function("tick_full_trails", |b| {
        b.iter(|| solar_system.tick(black_box(center)))
    });
}

criterion_group!(benches, bench_tick_full_trails);

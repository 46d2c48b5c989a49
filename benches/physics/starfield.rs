use criterion::{black_box, criterion_group, Criterion};
use planets_orbit::entities::starfield::Starfield;
use planets_orbit::physics::util::vectors::ScreenSize;
use rand::{rngs::StdRng, SeedableRng};

fn bench_regenerate_starfield(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut starfield = Starfield::default();
    c.bench_function("regenerate_starfield", |b| {
        b.iter(|| starfield.regenerate(black_box(ScreenSize::new(1920.0, 1080.0)), &mut rng))
    });
}

criterion_group!(benches, bench_regenerate_starfield);

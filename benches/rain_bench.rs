use criterion::{black_box, criterion_group, criterion_main, Criterion};
use downpour::rain::{fall_step, spawn, RainVolume};

fn fall_step_benchmark(c: &mut Criterion) {
    let volume = RainVolume {
        half_extent: 100.0,
        ceiling: 100.0,
        floor: 0.0,
    };

    let mut group = c.benchmark_group("fall_step");
    for count in [1_000usize, 15_000, 100_000] {
        let mut positions = spawn(count, &volume);
        let _ = group.bench_function(format!("{count}_particles"), |b| {
            b.iter(|| {
                fall_step(
                    black_box(&mut positions),
                    black_box(2.0),
                    volume.floor,
                    volume.ceiling,
                );
            });
        });
    }
    group.finish();
}

criterion_group!(benches, fall_step_benchmark);
criterion_main!(benches);

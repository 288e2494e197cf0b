use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio::animation::{ChannelParams, TransformAnimator};
use folio::util::smoothing::smoothing_alpha;

fn smoothing_alpha_benchmark(c: &mut Criterion) {
    c.bench_function("smoothing_alpha", |b| {
        b.iter(|| black_box(smoothing_alpha(black_box(0.12), black_box(0.016))))
    });
}

fn animator_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_update");

    for count in [6, 32, 128].iter() {
        let mut animator = TransformAnimator::new();
        let names: Vec<String> =
            (0..*count).map(|i| format!("channel_{i}")).collect();
        for name in &names {
            animator.track(name, 0.0, ChannelParams::new(0.12, 1e-3));
            animator.set_target(name, 100.0);
        }

        let mut flip = false;
        group.bench_function(format!("{count}_channels"), |b| {
            b.iter(|| {
                // Alternate targets so the channels never converge and
                // every iteration does real smoothing work.
                flip = !flip;
                let target = if flip { 100.0 } else { 0.0 };
                for name in &names {
                    animator.set_target(name, target);
                }
                black_box(animator.update(black_box(1.0 / 60.0)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, smoothing_alpha_benchmark, animator_update_benchmark);
criterion_main!(benches);

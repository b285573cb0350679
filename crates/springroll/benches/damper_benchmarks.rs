use criterion::{Criterion, black_box, criterion_group, criterion_main};
use springroll::{
    Motion, critical_spring_damper, critical_spring_damper_stationary, damper,
    double_spring_damper, fast_negexp, fps, spring_damper,
};

fn bench_negexp(c: &mut Criterion) {
    let mut group = c.benchmark_group("springroll/negexp");

    group.bench_function("fast_negexp", |b| {
        b.iter(|| black_box(fast_negexp(black_box(0.3))));
    });

    group.bench_function("std_exp", |b| {
        b.iter(|| black_box((-black_box(0.3f64)).exp()));
    });

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("springroll/step");
    let dt = fps(60);

    group.bench_function("damper", |b| {
        b.iter(|| black_box(damper(black_box(0.0), 10.0, 0.5, dt)));
    });

    group.bench_function("spring_damper_under", |b| {
        b.iter(|| black_box(spring_damper(black_box(0.0), 0.0, 10.0, 0.0, 2.0, 0.5, dt)));
    });

    group.bench_function("spring_damper_over", |b| {
        b.iter(|| black_box(spring_damper(black_box(0.0), 0.0, 10.0, 0.0, 0.1, 0.1, dt)));
    });

    group.bench_function("critical_spring_damper", |b| {
        b.iter(|| black_box(critical_spring_damper(black_box(0.0), 0.0, 10.0, 1.0, 0.5, dt)));
    });

    group.bench_function("critical_spring_damper_stationary", |b| {
        b.iter(|| {
            black_box(critical_spring_damper_stationary(
                black_box(0.0),
                0.0,
                10.0,
                0.5,
                dt,
            ))
        });
    });

    group.bench_function("double_spring_damper", |b| {
        let motion = Motion::at_rest(0.0);
        let damped_goal = Motion::at_rest(0.0);
        b.iter(|| {
            black_box(double_spring_damper(
                black_box(motion),
                damped_goal,
                10.0,
                0.5,
                dt,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_negexp, bench_step);
criterion_main!(benches);

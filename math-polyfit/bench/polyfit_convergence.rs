use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_audio_polyfit::{
    Bounds, Objective, PolyFitConfigBuilder, Polynomial, SampleSet, differential_evolution,
    linspace,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn noisy_samples() -> SampleSet {
    let target: Polynomial = "5 -20 5 50 -20 -40".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    SampleSet::from_polynomial(&target, linspace(-3.0, 3.0, 40)).with_uniform_noise(2.0, &mut rng)
}

fn bench_objective(c: &mut Criterion) {
    let samples = noisy_samples();
    let objective = Objective::new(&samples).unwrap();
    let coeffs = ndarray::array![4.0, -18.0, 6.0, 45.0, -21.0, -38.0];

    c.bench_function("mae_40_points_degree_5", |b| {
        b.iter(|| black_box(objective.fitness(black_box(coeffs.view()))))
    });
}

fn bench_fit(c: &mut Criterion) {
    let samples = noisy_samples();
    let mut group = c.benchmark_group("fit_degree_5");
    group.sample_size(10);

    for popsize in [20usize, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(popsize), &popsize, |b, &n| {
            b.iter(|| {
                let config = PolyFitConfigBuilder::new()
                    .popsize(n)
                    .maxiter(100)
                    .dimension(6)
                    .bounds(Bounds::symmetric(50.0).unwrap())
                    .disp(false)
                    .seed(42)
                    .build()
                    .unwrap();
                black_box(differential_evolution(&samples, config).unwrap().fun)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_objective, bench_fit);
criterion_main!(benches);

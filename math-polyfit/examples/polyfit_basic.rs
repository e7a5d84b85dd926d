use math_audio_polyfit::{
    Bounds, FitRun, PolyFitConfigBuilder, Polynomial, Progress, SampleSet, linspace,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    // 0.5x^3 - 2x^2 + x + 3 sampled with +/-1 noise
    let target: Polynomial = "0.5 -2 1 3".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let samples =
        SampleSet::from_polynomial(&target, linspace(-2.0, 4.0, 30)).with_uniform_noise(2.0, &mut rng);

    let config = PolyFitConfigBuilder::new()
        .dimension(target.dimension())
        .bounds(Bounds::symmetric(10.0).unwrap())
        .popsize(60)
        .maxiter(400)
        .recombination(0.9)
        .scale_factor(0.6)
        .progress_every(50)
        .seed(42)
        .build()
        .unwrap();

    for progress in FitRun::new(&samples, config).unwrap() {
        match progress {
            Progress::Snapshot(s) => {
                eprintln!("iter {:4}  best_f={:.6e}", s.generation, s.fun);
            }
            Progress::Completed(report) => {
                println!("target: {target}");
                println!("fitted: {}", report.polynomial());
                println!(
                    "mae={:.4} nit={} nfev={} best_generation={:?}",
                    report.fun, report.nit, report.nfev, report.best_generation
                );
            }
        }
    }
}

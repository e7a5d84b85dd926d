use clap::Parser;
use math_audio_polyfit::{
    Bounds, FitReport, FitRun, PolyFitConfigBuilder, Polynomial, Progress, SampleSet, linspace,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::Write as FmtWrite;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "run_polyfit",
    about = "Fit a polynomial to noisy samples with differential evolution"
)]
struct Cli {
    /// Coefficients of the target polynomial, highest degree first
    #[arg(long, default_value = "5 -20 5 50 -20 -40", allow_hyphen_values = true)]
    coeffs: String,

    /// Coefficient bounds as "low high"
    #[arg(long, default_value = "-50 50", allow_hyphen_values = true)]
    bounds: String,

    /// Noise scale s; samples get uniform noise in [floor(-s/2), floor(s/2))
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    noise: f64,

    /// Number of sample points
    #[arg(long, default_value_t = 40)]
    points: usize,

    /// First sample abscissa
    #[arg(long, default_value_t = -3.0, allow_hyphen_values = true)]
    x_min: f64,

    /// Last sample abscissa
    #[arg(long, default_value_t = 3.0, allow_hyphen_values = true)]
    x_max: f64,

    /// Population size (>= 4)
    #[arg(long, default_value_t = 100)]
    population: usize,

    /// Crossover probability in [0, 1]
    #[arg(long, default_value_t = 0.8)]
    recombination: f64,

    /// Mutation scale factor
    #[arg(long, default_value_t = 0.5)]
    scale_factor: f64,

    /// Number of generations
    #[arg(long, default_value_t = 300)]
    maxiter: usize,

    /// Print a snapshot every N generations (>= 1)
    #[arg(long, default_value_t = 20)]
    progress_every: usize,

    /// Optional random seed for reproducibility (noise and optimizer)
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final result
    #[arg(long)]
    quiet: bool,

    /// Print progress and result as JSON lines
    #[arg(long)]
    json: bool,
}

fn format_vector<'a>(values: impl IntoIterator<Item = &'a f64>) -> String {
    let mut buffer = String::new();
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            buffer.push_str(", ");
        }
        let _ = write!(&mut buffer, "{value:.6}");
    }
    buffer
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => eprintln!("Warning: failed to serialize output: {e}"),
    }
}

fn print_report(report: &FitReport, target: &Polynomial, elapsed: std::time::Duration) {
    println!("\nFit completed in {:.2?}", elapsed);
    println!(
        "Generations: {} | Evaluations: {} | Non-finite: {}",
        report.nit, report.nfev, report.non_finite
    );
    println!("Best error (MAE): {:.6e}", report.fun);
    println!("Target coefficients: [{}]", format_vector(target.coefficients()));
    println!("Fitted coefficients: [{}]", format_vector(report.x.iter()));
    println!("Fitted polynomial: {}", report.polynomial());
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    let target: Polynomial = args.coeffs.parse().unwrap_or_else(|err| {
        eprintln!("Error: --coeffs: {err}");
        process::exit(2);
    });
    let bounds: Bounds = args.bounds.parse().unwrap_or_else(|err| {
        eprintln!("Error: --bounds: {err}");
        process::exit(2);
    });

    if args.points == 0 {
        eprintln!("Error: --points must be at least 1.");
        process::exit(2);
    }

    let mut noise_rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let samples = SampleSet::from_polynomial(&target, linspace(args.x_min, args.x_max, args.points))
        .with_uniform_noise(args.noise, &mut noise_rng);

    let mut builder = PolyFitConfigBuilder::new()
        .popsize(args.population)
        .recombination(args.recombination)
        .scale_factor(args.scale_factor)
        .maxiter(args.maxiter)
        .bounds(bounds)
        .dimension(target.dimension())
        .disp(!args.quiet)
        .progress_every(args.progress_every);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed.wrapping_add(1));
    }
    let config = builder.build().unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(2);
    });

    if !args.json {
        println!(
            "Fitting {} coefficients to {} samples of {} ...",
            target.dimension(),
            samples.len(),
            target
        );
    }

    let start = Instant::now();
    let run = FitRun::new(&samples, config).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(2);
    });

    for progress in run {
        if args.json {
            print_json(&progress);
            continue;
        }
        match progress {
            Progress::Snapshot(snap) => {
                println!(
                    "iter {:>5} | best = {:>12.6e} | x = [{}]",
                    snap.generation,
                    snap.fun,
                    format_vector(snap.x.iter())
                );
                if let Some(issue) = snap.numeric_issue() {
                    println!("            warning: {issue}");
                }
            }
            Progress::Completed(report) => print_report(&report, &target, start.elapsed()),
        }
    }
}

//! u-orienteering CLI: batch ACO solving of team orienteering instances.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use u_orienteering::aco::{AcoConfig, AcoRunner, BestTracking};
use u_orienteering::distance::DistanceMatrix;
use u_orienteering::evaluation::RouteEvaluator;
use u_orienteering::models::RouteResult;
use u_orienteering::parser::read_instance;

#[derive(Parser)]
#[command(name = "u-orienteering")]
#[command(about = "Solve team orienteering instances with Ant Colony Optimization")]
#[command(version)]
struct Cli {
    /// Instance files, or folders whose *.txt files are solved
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// JSON file with ACO parameters (flags override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pheromone influence (0-5)
    #[arg(long)]
    alpha: Option<f64>,

    /// Heuristic influence (0-10)
    #[arg(long)]
    beta: Option<f64>,

    /// Evaporation rate (0-1)
    #[arg(long)]
    evaporation_rate: Option<f64>,

    /// Reinforcement scale Q
    #[arg(long)]
    q: Option<f64>,

    /// Lower bound kept after evaporation
    #[arg(long)]
    min_pheromone: Option<f64>,

    /// Iterations per run
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Independent runs per file (best is kept)
    #[arg(short, long)]
    runs: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Let vehicles visit the same node within an iteration
    #[arg(long)]
    independent_vehicles: bool,

    /// Best-route bookkeeping
    #[arg(long, value_enum)]
    best: Option<TrackingArg>,

    /// Write per-file reports as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TrackingArg {
    PerVehicle,
    Global,
}

impl From<TrackingArg> for BestTracking {
    fn from(arg: TrackingArg) -> Self {
        match arg {
            TrackingArg::PerVehicle => BestTracking::PerVehicle,
            TrackingArg::Global => BestTracking::Global,
        }
    }
}

#[derive(Serialize)]
struct FileReport {
    file: String,
    seed: Option<u64>,
    best_score: Option<u64>,
    best_distance: Option<f64>,
    routes: Vec<RouteResult>,
    run_scores: Vec<u64>,
    duration_ms: f64,
    warnings: Vec<String>,
    error: Option<String>,
}

impl FileReport {
    fn failed(file: String, warnings: Vec<String>, error: String) -> Self {
        Self {
            file,
            seed: None,
            best_score: None,
            best_distance: None,
            routes: Vec::new(),
            run_scores: Vec::new(),
            duration_ms: 0.0,
            warnings,
            error: Some(error),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(cli)?;
    config.validate()?;

    let files = collect_files(&cli.paths)?;
    if files.is_empty() {
        return Err("no .txt instance files found".into());
    }

    println!("Solving {} instance(s)", files.len());
    println!(
        "alpha={} beta={} evaporation={} q={} iterations={} runs={} exclusion={} best={:?}",
        config.alpha,
        config.beta,
        config.evaporation_rate,
        config.q,
        config.max_iterations,
        config.runs_per_instance,
        config.shared_node_exclusion,
        config.best_tracking,
    );
    println!();

    let reports: Vec<FileReport> = files.iter().map(|f| solve_file(f, &config)).collect();

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    println!();
    println!("Done: {} solved, {} failed", reports.len() - failed, failed);

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&reports)?;
        std::fs::write(path, json)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<AcoConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => AcoConfig::default(),
    };

    if let Some(v) = cli.alpha {
        config.alpha = v;
    }
    if let Some(v) = cli.beta {
        config.beta = v;
    }
    if let Some(v) = cli.evaporation_rate {
        config.evaporation_rate = v;
    }
    if let Some(v) = cli.q {
        config.q = v;
    }
    if let Some(v) = cli.min_pheromone {
        config.min_pheromone = Some(v);
    }
    if let Some(v) = cli.iterations {
        config.max_iterations = v;
    }
    if let Some(v) = cli.runs {
        config.runs_per_instance = v;
    }
    if let Some(v) = cli.seed {
        config.seed = Some(v);
    }
    if cli.independent_vehicles {
        config.shared_node_exclusion = false;
    }
    if let Some(v) = cli.best {
        config.best_tracking = v.into();
    }
    Ok(config)
}

/// Expands folders into their `*.txt` files, sorted by name.
fn collect_files(paths: &[PathBuf]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn solve_file(path: &Path, config: &AcoConfig) -> FileReport {
    let name = path.display().to_string();

    let parsed = match read_instance(path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("  {name}: {e}");
            return FileReport::failed(name, Vec::new(), e.to_string());
        }
    };
    let warnings: Vec<String> = parsed.warnings.iter().map(ToString::to_string).collect();
    for w in &warnings {
        eprintln!("  {name}: warning: {w}");
    }

    let instance = parsed.instance;
    let start = Instant::now();
    let batch = match AcoRunner::run_batch(&instance, config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("  {name}: {e}");
            return FileReport::failed(name, warnings, e.to_string());
        }
    };
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let distances = DistanceMatrix::from_nodes(instance.nodes());
    let evaluator = RouteEvaluator::new(&instance, &distances);
    for route in &batch.best.routes {
        let (eval, totals_match) = evaluator.verify(route, 1e-9);
        if !eval.is_feasible() || !totals_match {
            eprintln!(
                "  {name}: vehicle {} route failed verification: {:?}",
                route.vehicle_index, eval.violations
            );
        }
    }

    let best = &batch.best;
    println!(
        "{:<32} seed={:<20} score={:<8} distance={:<10.2} {:>10.2}ms",
        name,
        best.seed,
        best.total_score(),
        best.total_distance(),
        duration_ms
    );
    for route in &best.routes {
        println!(
            "    vehicle {:<3} visits={:<4} score={:<6} distance={:<9.2} route={:?}",
            route.vehicle_index,
            route.num_visits(),
            route.score,
            route.distance,
            route.route
        );
    }

    FileReport {
        file: name,
        seed: Some(best.seed),
        best_score: Some(best.total_score()),
        best_distance: Some(best.total_distance()),
        routes: best.routes.clone(),
        run_scores: batch.runs.iter().map(|r| r.score).collect(),
        duration_ms,
        warnings,
        error: None,
    }
}

//! opt_eval: agent evaluation harness for a fixed convex program.
//!
//! Subcommands:
//! - `baseline [out.json]`            solve the reference problem and persist it
//! - `run`                            evaluate the configured model under both styles
//! - `compare <baseline> [polite] [strict]`  score output files against a baseline

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use opt_eval::config::{EvalConfig, TaskSpec};
use opt_eval::eval::compare_files;
use opt_eval::problem::build_problem;
use opt_eval::runner::run_eval;
use opt_eval::solver::{ReferenceOracle, SolutionCache};
use opt_eval::storage;

fn usage() -> ! {
    eprintln!("Usage: opt_eval <baseline [out.json] | run | compare <baseline> [polite] [strict]>");
    std::process::exit(1)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("baseline") => cmd_baseline(args.get(1).map(PathBuf::from)),
        Some("run") => cmd_run().await,
        Some("compare") => cmd_compare(&args[1..]),
        _ => usage(),
    }
}

/// Solve the reference problem and write the baseline solution file.
fn cmd_baseline(out: Option<PathBuf>) -> Result<()> {
    let out = out.unwrap_or_else(|| PathBuf::from("baseline_solution.json"));
    let config = EvalConfig::from_env();
    let problem = build_problem();

    let oracle = ReferenceOracle::default().with_cache(SolutionCache::new(&config.cache_dir));
    let solution = oracle.solve_reference(&problem)?;
    storage::write_solution(&out, &solution)?;

    println!("{}", serde_json::to_string_pretty(&solution)?);
    Ok(())
}

/// Evaluate the configured model under both prompt styles and print the
/// comparison report.
async fn cmd_run() -> Result<()> {
    let config = EvalConfig::from_env();
    let problem = build_problem();
    let provider = config.build_provider();
    let oracle = ReferenceOracle::default().with_cache(SolutionCache::new(&config.cache_dir));

    let report = run_eval(provider.as_ref(), &config, &problem, &oracle).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Score previously produced output files against a baseline file.
fn cmd_compare(args: &[String]) -> Result<()> {
    let baseline = match args.first() {
        Some(path) => Path::new(path),
        None => usage(),
    };
    let polite = args.get(1).map(Path::new);
    let strict = args.get(2).map(Path::new);

    let spec = TaskSpec::load_or_default(Path::new("task_spec.yaml"));
    let report = compare_files(baseline, polite, strict, spec.output_format.x_length);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

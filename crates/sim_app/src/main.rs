//! # sim_app
//!
//! Runs the three independent computations and renders their results:
//!
//! 1. Integrate the Lorenz system for the configured `rho`.
//! 2. Process the queue trace and compute its summary.
//! 3. Compare the baseline and scaled M/M/1 rate scenarios.
//!
//! Each step takes explicit inputs and returns structured data. Output is
//! printed as text and, with `--export`, written as JSON for plotting.

mod config;
mod export;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use sim_lorenz::LorenzIntegrator;
use sim_queue::{QueueTraceProcessor, RateComparison};

use config::SimulationConfig;
use export::{LorenzSeries, SimulationOutput};

#[derive(Parser)]
#[command(name = "sim_app", about = "Lorenz attractor and single-server queue analysis")]
struct Args {
    /// JSON config file; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lorenz control parameter (overrides the config file)
    #[arg(long)]
    rho: Option<f64>,

    /// Number of Euler steps (overrides the config file)
    #[arg(long)]
    steps: Option<usize>,

    /// Write all results as JSON to this path
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print only the queue summary, not the per-customer table
    #[arg(long)]
    quiet_table: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sim_app=info".parse()?)
                .add_directive("sim_lorenz=info".parse()?)
                .add_directive("sim_queue=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(rho) = args.rho {
        config = config.with_rho(rho);
    }
    if let Some(steps) = args.steps {
        config = config.with_num_steps(steps);
    }

    let run_id = Uuid::new_v4();
    info!(%run_id, "simulation run starting");

    let integrator = LorenzIntegrator::new(config.lorenz);
    let rho = integrator.config().parameters.rho;
    let trajectory = integrator.generate()?;

    let processor = QueueTraceProcessor::new(config.queue);
    info!(records = processor.config().records.len(), "queue trace loaded");
    let queue = processor.process()?;
    let rates = RateComparison::compute(&config.rates)?;

    println!("{}", report::render_lorenz_summary(rho, &trajectory));
    println!();
    println!("{}", report::render_queue_report(&queue, !args.quiet_table));
    println!("{}", report::render_rate_comparison(&rates));

    if let Some(path) = &args.export {
        let output = SimulationOutput::new(run_id, LorenzSeries::new(rho, &trajectory), queue, rates);
        output.write_json(path)?;
        info!(path = %path.display(), "results exported");
    }

    info!(%run_id, "simulation run complete");
    Ok(())
}

use crate::config::LoadTestConfig;
use crate::plan;
use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

/// Command-line interface for previewing the storefront load test
///
/// Nothing here talks to the backend; use `storefront-load` for a real run.
#[derive(Parser)]
#[command(name = "storefront-plan")]
#[command(about = "Preview the storefront load test task mix", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available preview commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the task table with weights and expected traffic shares
    Table,
    /// Draw weighted task selections and build their requests
    Sample {
        /// Number of task selections to draw
        #[arg(short, long, default_value_t = 10_000)]
        count: usize,

        /// Seed for a reproducible draw (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// How many of the drawn requests to print
        #[arg(long, default_value_t = 10)]
        show: usize,
    },
}

/// Parse the process arguments and run the selected command on stdout.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = LoadTestConfig::load().context("failed to load load-test configuration")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Run `cli` against `config`, writing the report to `out`.
pub fn execute(cli: &Cli, config: &LoadTestConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Table => write_table(config, out),
        Commands::Sample { count, seed, show } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_os_rng(),
            };
            let sample = plan::sample(*count, *show, &config.credentials, &mut rng)?;
            write_sample(&sample, out)
        }
    }
}

fn write_table(config: &LoadTestConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "host: {}", config.host)?;
    writeln!(
        out,
        "think time: {}-{}s",
        config.wait_min_secs, config.wait_max_secs
    )?;
    writeln!(out, "{:<28} {:>6} {:>7}", "task", "weight", "share")?;
    for share in plan::weight_shares() {
        writeln!(
            out,
            "{:<28} {:>6} {:>6.1}%",
            share.task,
            share.weight,
            share.share * 100.0
        )?;
    }
    Ok(())
}

fn write_sample(sample: &plan::PlanSample, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{} selections", sample.total)?;
    writeln!(
        out,
        "{:<28} {:>8} {:>9} {:>9}",
        "task", "count", "observed", "expected"
    )?;
    for share in plan::weight_shares() {
        let observed = sample.observed_share(share.task).unwrap_or(0.0);
        writeln!(
            out,
            "{:<28} {:>8} {:>8.1}% {:>8.1}%",
            share.task,
            sample.count(share.task),
            observed * 100.0,
            share.share * 100.0
        )?;
    }
    if !sample.requests.is_empty() {
        writeln!(out)?;
        for (task, request) in &sample.requests {
            writeln!(out, "{task}: {request}")?;
        }
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use u_assign::greedy::{self, AssignConfig, TieBreaker};
use u_assign::io;

#[derive(Parser)]
#[command(
    name = "u-assign",
    about = "Assign material samples to tools by fit score and preference",
    version
)]
struct Cli {
    /// Input file with `T` (tool) and `M` (sample) records
    #[arg(short, long, default_value = "sample_input.txt")]
    input: PathBuf,

    /// Output file, one line per tool
    #[arg(short, long, default_value = "tool_assignment_output.txt")]
    output: PathBuf,

    /// Order for candidates with equal score and preference rank
    #[arg(long, value_enum, default_value_t = TieBreakArg::InputOrder)]
    tie_breaker: TieBreakArg,

    /// Scan candidates in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Replay the decision log and check the result before exiting
    #[arg(long)]
    verify: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    InputOrder,
    SampleId,
}

impl From<TieBreakArg> for TieBreaker {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::InputOrder => TieBreaker::InputOrder,
            TieBreakArg::SampleId => TieBreaker::SampleId,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("u_assign=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    if cli.parallel && !cfg!(feature = "parallel") {
        warn!("built without the `parallel` feature, scanning sequentially");
    }

    let config = AssignConfig::default()
        .with_tie_breaker(cli.tie_breaker.into())
        .with_parallel(cli.parallel);

    let assignment = io::solve_file(&cli.input, &cli.output, &config)
        .with_context(|| format!("failed to solve {}", cli.input.display()))?;

    if !assignment.unassigned.is_empty() {
        info!(samples = ?assignment.unassigned, "left unassigned");
    }

    if cli.verify {
        let instance = io::read_instance(&cli.input)?;
        greedy::verify(&instance, &assignment, &config).context("assignment audit failed")?;
        info!(decisions = assignment.decisions.len(), "audit passed");
    }

    Ok(())
}

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convenience_core::ConvenienceConfig;

#[derive(Parser, Debug)]
#[command(name = "convenience")]
#[command(version)]
#[command(about = "Convenience score for paying extra to save time, stress, or risk")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML engine configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one option and print every factor
    Evaluate {
        /// Scenario file (.json or .toml)
        #[arg(short, long)]
        scenario: PathBuf,
        /// Override the scenario's financial weight
        #[arg(long)]
        w_financial: Option<f64>,
    },
    /// Monte Carlo over the scenario's field distributions.
    ///
    /// A scenario without distributions still runs and reports a
    /// zero-spread summary of its deterministic score.
    Simulate {
        #[arg(short, long)]
        scenario: PathBuf,
        #[arg(long)]
        runs: Option<usize>,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Finite-difference sensitivity of the score to option fields
    Sensitivity {
        #[arg(short, long)]
        scenario: PathBuf,
        /// Option field to perturb, e.g. extra_cost
        #[arg(long, conflicts_with = "all", required_unless_present = "all")]
        field: Option<String>,
        /// Report every numeric field
        #[arg(long)]
        all: bool,
        /// Stencil half-width
        #[arg(long)]
        delta: Option<f64>,
    },
    /// Run the built-in taxi-versus-bus scenario
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        ConvenienceConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.to_lowercase();
        config.validate().context("invalid --log-level")?;
    }
    convenience_observability::init_tracing(&config.observability);

    let format = if cli.json {
        output::Format::Json
    } else {
        output::Format::Table
    };

    match cli.command {
        Commands::Evaluate {
            scenario,
            w_financial,
        } => commands::evaluate::run(&config, &scenario, w_financial, format),
        Commands::Simulate {
            scenario,
            runs,
            seed,
        } => commands::simulate::run(&config, &scenario, runs, seed, format),
        Commands::Sensitivity {
            scenario,
            field,
            all,
            delta,
        } => {
            let target = if all {
                commands::sensitivity::Target::All
            } else {
                // clap guarantees --field when --all is absent
                commands::sensitivity::Target::Field(field.unwrap_or_default())
            };
            commands::sensitivity::run(&config, &scenario, target, delta, format)
        }
        Commands::Demo => commands::demo::run(&config, format),
    }
}

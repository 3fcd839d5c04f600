//! Auscult CLI - dataset generation for the auscult synthesis backend.
//!
//! This binary is presentation glue around the core `generate` call: it
//! lists the condition catalogue, generates repeated series with derived
//! seeds, serializes them to four-column CSV, and can sketch a quick
//! terminal preview of the signal.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

mod commands;

/// Auscult - physiological sound dataset generator
#[derive(Parser)]
#[command(name = "auscult")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the condition catalogue
    List,

    /// Generate a dataset for one condition
    Generate {
        /// Condition id (unknown ids fall back to normal-heart)
        #[arg(short, long)]
        condition: String,

        /// Samples per series
        #[arg(short = 'n', long, default_value_t = 2000)]
        samples: usize,

        /// Cardiac or respiratory cycles to span
        #[arg(long, default_value_t = 10)]
        cycles: u32,

        /// Base seed; each series derives its own stream from it
        #[arg(long, default_value_t = 42)]
        seed: u32,

        /// Number of series (dataset repetitions)
        #[arg(long, default_value_t = 1)]
        series: usize,

        /// Linear amplitude scale applied per series
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Extra uniform display noise added per series
        #[arg(long, default_value_t = 0.0)]
        extra_noise: f64,

        /// Output CSV path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Sketch the first series on stderr
        #[arg(long)]
        preview: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => commands::list(),
        Commands::Generate {
            condition,
            samples,
            cycles,
            seed,
            series,
            scale,
            extra_noise,
            output,
            preview,
        } => commands::generate_dataset(&commands::GenerateRequest {
            condition,
            samples,
            cycles,
            seed,
            series,
            scale,
            extra_noise,
            output,
            preview,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

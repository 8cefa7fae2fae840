mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kinesync", about = "Skeleton recording alignment tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show skeleton recording metadata
    Info(commands::info::InfoArgs),
    /// List the top trajectory peaks of one recording
    Peaks(commands::peaks::PeaksArgs),
    /// Print the offset-vs-score curve of the angle scan
    Angles(commands::angles::AnglesArgs),
    /// Align two recordings with both methods
    Align(commands::align::AlignArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Peaks(args) => commands::peaks::run(args),
        Commands::Angles(args) => commands::angles::run(args),
        Commands::Align(args) => commands::align::run(args),
    }
}

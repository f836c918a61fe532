//! CLI Adapter.

mod generate;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "exportgen")]
#[command(version)]
#[command(
    about = "Generate Microsoft365DSC export scripts",
    long_about = None
)]
struct Cli {
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an export script
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// List supported authentication modes
    #[clap(visible_alias = "m")]
    Modes,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Modes => run_modes(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_modes() -> Result<(), AppError> {
    println!("Available authentication modes:");
    for mode in crate::app::api::modes() {
        println!("  {} - {} ({})", mode.name, mode.description, mode.variables.join(", "));
    }
    Ok(())
}

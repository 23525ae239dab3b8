use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cmd::{self, summary::SummaryArgs, validate::ValidateArgs, wilayah::WilayahCommand};

#[derive(Parser, Debug)]
#[command(
    name = "ppdb-form",
    about = "Toolkit for PPDB registration records",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a registration record and print per-step status
    Validate(ValidateArgs),
    /// Render the printable registration summary
    Summary(SummaryArgs),
    /// Query the region reference dataset
    #[command(subcommand)]
    Wilayah(WilayahCommand),
}

pub fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate(args) => cmd::validate::run(args),
        Commands::Summary(args) => cmd::summary::run(args),
        Commands::Wilayah(command) => cmd::wilayah::run(command),
    }
}

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cmd;
use crate::summary::render_text;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Registration record JSON file
    pub record: PathBuf,
    /// Write the summary to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn run(args: SummaryArgs) -> Result<()> {
    let record = cmd::load_record(&args.record)?;
    let text = render_text(&record);
    match args.out {
        Some(path) => {
            fs::write(&path, text + "\n")
                .with_context(|| format!("failed to write summary to {}", path.display()))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

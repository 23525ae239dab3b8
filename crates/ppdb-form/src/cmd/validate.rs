use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use ppdb_schema::validate_record;

use crate::cmd;
use crate::steps::{Step, validate_step};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Registration record JSON file
    pub record: PathBuf,
    /// Emit the full validation result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let record = cmd::load_record(&args.record)?;
    let result = validate_record(&record);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for step in Step::ALL {
            let step_result = validate_step(step, &record);
            let status = if step_result.valid { "ok   " } else { "GAGAL" };
            println!("[{status}] langkah {}: {}", step.nomor(), step.judul());
            for error in &step_result.errors {
                println!("        {}: {}", error.path, error.message);
            }
            for path in &step_result.missing_required {
                println!("        {path}: wajib diisi");
            }
        }
        if result.valid {
            println!("record valid");
        }
    }

    if !result.valid {
        bail!(
            "record tidak valid ({} kesalahan, {} field wajib kosong)",
            result.errors.len(),
            result.missing_required.len()
        );
    }
    Ok(())
}

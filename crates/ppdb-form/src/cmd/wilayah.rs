use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ppdb_wilayah::{HttpSource, RegionSource, StaticSource};
use url::Url;

#[derive(Subcommand, Debug)]
pub enum WilayahCommand {
    /// List provinces
    Provinces(SourceArgs),
    /// List regencies of a province
    Regencies(ParentArgs),
    /// List districts of a regency
    Districts(ParentArgs),
    /// List villages of a district
    Villages(ParentArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Base URL of a region API; defaults to the bundled dataset
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<Url>,
}

#[derive(Args, Debug)]
pub struct ParentArgs {
    /// Parent region code
    pub kode: String,
    #[command(flatten)]
    pub source: SourceArgs,
}

fn source_for(args: &SourceArgs) -> Box<dyn RegionSource> {
    match &args.base_url {
        Some(base) => Box::new(HttpSource::new(base.clone())),
        None => Box::new(StaticSource::bundled()),
    }
}

pub fn run(command: WilayahCommand) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    runtime.block_on(async {
        match command {
            WilayahCommand::Provinces(args) => {
                for region in source_for(&args).provinces().await? {
                    println!("{}  {}", region.code, region.name);
                }
            }
            WilayahCommand::Regencies(args) => {
                for region in source_for(&args.source).regencies(&args.kode).await? {
                    println!("{}  {}", region.code, region.name);
                }
            }
            WilayahCommand::Districts(args) => {
                for region in source_for(&args.source).districts(&args.kode).await? {
                    println!("{}  {}", region.code, region.name);
                }
            }
            WilayahCommand::Villages(args) => {
                for village in source_for(&args.source).villages(&args.kode).await? {
                    match &village.postal_code {
                        Some(kode_pos) => {
                            println!("{}  {} ({})", village.code, village.name, kode_pos);
                        }
                        None => println!("{}  {}", village.code, village.name),
                    }
                }
            }
        }
        Ok(())
    })
}

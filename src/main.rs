use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use dto_generator::{DtoGenerator, GenerationReport, GeneratorConfig};

/// Generate Create/Read/Update DTO classes from entity sources
#[derive(Debug, Parser)]
#[command(name = "dto_generator", version, about)]
struct Cli {
    /// Folder containing the entity source files (scanned top level only)
    source_dir: PathBuf,

    /// Folder the generated DTO files are placed under; must belong to a
    /// project (a .csproj in the folder or an ancestor)
    target_dir: PathBuf,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON generation report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    let generator = DtoGenerator::new(config);
    let result = generator.run(&cli.source_dir, &cli.target_dir)?;

    info!(
        "Wrote {} artifacts ({} skipped as existing)",
        result.stats.artifacts_written, result.stats.artifacts_skipped_existing
    );

    if let Some(report_path) = &cli.report {
        GenerationReport::new(&result).save(report_path)?;
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

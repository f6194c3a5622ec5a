use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use genesearch::{config::RunConfig, runner};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// Runs a tab-separated command script (search, diff, mode) against a protein table
/// and writes a numbered transcript.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// JSON run configuration; explicit flags take precedence
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Tab-separated protein, organism, amino-acid table
    #[arg(short = 'd', long = "dataset")]
    dataset: Option<PathBuf>,

    /// Tab-separated command script
    #[arg(short = 'i', long = "commands")]
    commands: Option<PathBuf>,

    /// Transcript output path
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print a JSON run summary to stdout
    #[arg(long = "summary")]
    summary: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_from_path(path)
                .with_context(|| format!("Could not load config '{}'", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(path) = &self.dataset {
            config.dataset_path = path.clone();
        }
        if let Some(path) = &self.commands {
            config.commands_path = path.clone();
        }
        if let Some(path) = &self.output {
            config.output_path = path.clone();
        }
        Ok(config)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Could not serialize JSON output")?;
    println!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Running genesearch version {}", env!("CARGO_PKG_VERSION"));

    let config = args.resolve_config()?;
    let summary = runner::run(&config).with_context(|| {
        format!(
            "Could not process commands from '{}'",
            config.commands_path.display()
        )
    })?;
    if args.summary {
        print_json(&summary)?;
    }
    Ok(())
}

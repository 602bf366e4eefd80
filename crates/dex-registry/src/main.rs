//! `dex-registry` - generates the dex registry index.
//!
//! Scans `build/*.tar.gz` and prints `registry.json` to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use dex_registry::{LatestPolicy, RegistryConfig, config, emit, generate_registry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dex-registry", version)]
#[command(about = "Generate the dex registry index from packaged tarballs", long_about = None)]
struct Cli {
    /// Directory containing <name>-<version>.tar.gz archives [default: ../build next to the executable's directory]
    #[arg(short, long)]
    build_dir: Option<PathBuf>,

    /// Write the index to this file (or to registry.json inside this directory) instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How each package's latest version is chosen
    #[arg(long, value_enum, default_value_t = LatestPolicy::LastSeen)]
    latest: LatestPolicy,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the index.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let build_dir = match cli.build_dir {
        Some(dir) => dir,
        None => config::default_build_dir().context("Failed to resolve the build directory")?,
    };
    let config = RegistryConfig::new(build_dir).with_latest(cli.latest);

    let registry = generate_registry(&config)
        .with_context(|| format!("Failed to index {}", config.build_dir.display()))?;

    match cli.output {
        Some(path) => {
            emit::write_file(&path, &registry).context("Failed to write registry")?;
        }
        None => emit::write_stdout(&registry).context("Failed to write registry")?,
    }

    Ok(())
}

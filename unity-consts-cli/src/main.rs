//! Unity Consts CLI
//!
//! Generates `R.cs` for a Unity project.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use unity_consts::{GeneratorConfig, generate};

#[derive(Parser)]
#[command(name = "unity-consts")]
#[command(about = "Generate C# constants for Unity tags, layers, scenes, prefabs and animator parameters")]
#[command(version)]
struct Cli {
    /// Unity project root (the directory holding Assets/ and ProjectSettings/)
    project_dir: PathBuf,

    /// Directory the generated file is written to
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            cli.output_dir.display()
        )
    })?;

    let config = GeneratorConfig::new(&cli.project_dir, &cli.output_dir);
    let report = generate(&config).with_context(|| {
        format!(
            "Failed to generate constants for {}",
            cli.project_dir.display()
        )
    })?;

    for group in &report.groups {
        info!(
            "{}: {} members ({} invalid)",
            group.name(),
            group.len(),
            group.invalid_members().count()
        );
    }
    info!(
        "Wrote {} ({} emitted, {} skipped)",
        report.output_path.display(),
        report.emitted,
        report.skipped
    );
    Ok(())
}

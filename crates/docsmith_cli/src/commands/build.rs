//! Build command - run every job in a build configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use docsmith_core::{BuildOrchestrator, ConfigLoader, RunContext};

#[derive(Args)]
pub struct BuildArgs {
    /// Build configuration file
    #[arg(short, long)]
    config: PathBuf,

    /// Base directory that data, template, and output paths resolve against
    #[arg(short, long, default_value = ".")]
    base: PathBuf,
}

pub fn execute(args: BuildArgs) -> Result<()> {
    let config = ConfigLoader::load(&args.config)?;
    let ctx = RunContext::new(args.base);

    info!("Executing build for config {:?}", args.config);
    let summary = BuildOrchestrator::new(&ctx).run(&config)?;

    if summary.failed > 0 {
        info!(
            "Completed with partial output: {} of {} build attempts failed",
            summary.failed,
            summary.built + summary.failed
        );
    }
    Ok(())
}

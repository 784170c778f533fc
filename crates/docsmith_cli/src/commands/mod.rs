//! CLI command definitions.
//!
//! This module defines the command structure for the docsmith CLI. Each
//! subcommand maps to one workflow: a full configuration-driven build, a
//! single ad-hoc render, or an asset copy.

use clap::{Parser, Subcommand};

pub mod build;
pub mod copy_assets;
pub mod render;

/// docsmith - data-driven document generation
#[derive(Parser)]
#[command(name = "docsmith")]
#[command(version, about = "docsmith - data-driven document generation")]
#[command(long_about = r#"
docsmith feeds semi-structured data (YAML, JSON, XML, CSV, or free-form
text matched by a regular expression) through text templates, according
to a declarative build configuration.

WORKFLOWS:
  build       -> Run every compile and publish job in a config file
  render      -> Render one data file through one template, no config
  copy-assets -> Copy images and other assets into an output directory

EXIT CODES:
  0 - Success (including runs with logged per-build failures)
  1 - General error
  2 - Invalid arguments
  3 - Config error
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every job in a build configuration
    Build(build::BuildArgs),

    /// Render a single data file through a single template
    Render(render::RenderArgs),

    /// Copy assets into an output directory
    #[command(name = "copy-assets")]
    CopyAssets(copy_assets::CopyAssetsArgs),
}

//! Render command - one data file through one template, no config file.
//!
//! Unlike configuration runs, any failure here is fatal: with a single
//! build there is nothing to isolate it from.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use docsmith_core::{CoreError, OutputWriter};
use docsmith_data::{normalize, DataSource};
use docsmith_render::TemplateRenderer;

#[derive(Args)]
pub struct RenderArgs {
    /// Semi-structured data source path
    #[arg(short, long)]
    data: PathBuf,

    /// Template path
    #[arg(short, long)]
    template: PathBuf,

    /// Output file path
    #[arg(short, long, required_unless_present = "stdout")]
    output: Option<PathBuf>,

    /// Explicit data type (yaml, json, xml, csv, regex)
    #[arg(long = "type")]
    data_type: Option<String>,

    /// Extraction pattern for regex data sources
    #[arg(long)]
    pattern: Option<String>,

    /// Print rendered output to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let source = DataSource::resolve(
        args.data.clone(),
        args.data_type.as_deref(),
        args.pattern.clone(),
    )?;
    let data = normalize(&source)?;

    let renderer = TemplateRenderer::new();
    let rendered = renderer.render_file(&args.template, &data)?;

    match (&args.output, args.stdout) {
        (Some(output), false) => {
            if !OutputWriter::write(&rendered, output) {
                return Err(CoreError::WriteFailure {
                    path: output.clone(),
                    message: "output file missing after write".to_string(),
                }
                .into());
            }
        }
        _ => OutputWriter::write_stdout(&rendered, &args.template),
    }
    Ok(())
}

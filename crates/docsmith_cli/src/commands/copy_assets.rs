//! Copy-assets command - copy images and other assets into an output
//! directory for HTML operations.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use docsmith_core::copy_assets;

#[derive(Args)]
pub struct CopyAssetsArgs {
    /// Directory to copy assets from
    #[arg(short, long)]
    from: PathBuf,

    /// Directory to copy assets into
    #[arg(short, long)]
    to: PathBuf,

    /// Mirror the source directory inside the destination
    #[arg(short, long)]
    recursive: bool,
}

pub fn execute(args: CopyAssetsArgs) -> Result<()> {
    copy_assets(&args.from, &args.to, args.recursive);
    Ok(())
}

//! docsmith CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success, including runs that completed with logged per-build failures
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Config error
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};
use docsmith_core::CoreError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("docsmith={}", level).parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Build(args) => commands::build::execute(args),
        Commands::Render(args) => commands::render::execute(args),
        Commands::CopyAssets(args) => commands::copy_assets::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<CoreError>() {
        Some(
            CoreError::ConfigNotFound(_) | CoreError::ConfigParse { .. } | CoreError::ConfigShape,
        ) => ExitCodes::CONFIG_ERROR,
        Some(CoreError::TemplateRender { .. }) => ExitCodes::TEMPLATE_ERROR,
        Some(_) | None => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_map_to_config_exit_code() {
        let e = anyhow::Error::from(CoreError::ConfigShape);
        assert_eq!(categorize_error(&e), ExitCodes::CONFIG_ERROR);
    }

    #[test]
    fn test_template_errors_map_to_template_exit_code() {
        let e = anyhow::Error::from(CoreError::TemplateRender {
            template: "greeting.txt".into(),
            source: docsmith_render::RenderError::Syntax("unexpected end of block".to_string()),
        });
        assert_eq!(categorize_error(&e), ExitCodes::TEMPLATE_ERROR);
    }

    #[test]
    fn test_other_errors_are_general() {
        let e = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&e), ExitCodes::GENERAL_ERROR);
    }
}

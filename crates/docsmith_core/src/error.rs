//! Error types for the core module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading a configuration or running builds.
///
/// Config errors and template render errors are fatal to the run.
/// Everything else is handled inside the orchestrator loop: logged, the
/// offending build skipped, and the run continued.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Problem loading config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config file must have at least one top-level section named 'publish:' or 'compile:'")]
    ConfigShape,

    #[error("Malformed {section} entry: {message}")]
    MalformedEntry { section: &'static str, message: String },

    #[error(transparent)]
    Data(#[from] docsmith_data::DataError),

    #[error("Problem rendering template {template}: {source}")]
    TemplateRender {
        template: PathBuf,
        #[source]
        source: docsmith_render::RenderError,
    },

    #[error("Failed to save output to {path}: {message}")]
    WriteFailure { path: PathBuf, message: String },

    #[error("Error during publish action: {0}")]
    Publish(String),
}

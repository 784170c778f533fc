//! Error types for the render module.

use thiserror::Error;

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while compiling or rendering a template.
///
/// All of these are fatal to the run: a broken template indicates an
/// author error that would recur on every build target using it.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template syntax error: {0}")]
    Syntax(String),

    #[error("Problem rendering template: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => RenderError::Syntax(err.to_string()),
            _ => RenderError::Render(err.to_string()),
        }
    }
}

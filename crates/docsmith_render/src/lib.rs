//! # docsmith_render
//!
//! Template rendering for docsmith.
//!
//! Delegates substitution, loops, conditionals, and filter invocation to
//! minijinja and layers docsmith's text-manipulation filters on top. The
//! renderer consumes template sources as opaque strings and renders them
//! against the canonical data tree produced by `docsmith_data`.

pub mod error;
pub mod filters;
pub mod renderer;

pub use error::{RenderError, RenderResult};
pub use renderer::TemplateRenderer;

//! # docsmith_core
//!
//! Build configuration and orchestration for docsmith.
//!
//! This crate loads a declarative build configuration, then drives the
//! normalize -> render -> write pipeline once per declared build target,
//! with per-build failure isolation:
//!
//! - config load failures and template render failures terminate the run;
//! - data parse and write failures are logged and the run continues, so a
//!   configuration batching many independent conversions still produces
//!   partial output.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docsmith_core::{BuildOrchestrator, ConfigLoader, RunContext};
//!
//! let config = ConfigLoader::load("_configs/build.yml").unwrap();
//! let ctx = RunContext::new(".");
//! let summary = BuildOrchestrator::new(&ctx).run(&config).unwrap();
//! println!("{} built", summary.built);
//! ```

pub mod assets;
pub mod config;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod publish;

pub use assets::copy_assets;
pub use config::{
    BuildConfig, BuildTarget, CompileJob, ConfigLoader, DataSourceRef, PublishBuild, PublishJob,
};
pub use context::RunContext;
pub use error::{CoreError, CoreResult};
pub use orchestrator::{BuildOrchestrator, RunSummary};
pub use output::{OutputWriter, STDOUT_SENTINEL};
pub use publish::{NoopPublisher, Publisher};

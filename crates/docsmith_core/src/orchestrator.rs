//! Build orchestration.
//!
//! Drives normalize -> render -> write for every build target in the
//! configuration, in document order, isolating per-build failures so one
//! bad data file cannot abort a whole configuration run. Template render
//! failures are the exception: a broken template would recur on every
//! target that uses it, so the run stops immediately.

use serde_json::Value;
use tracing::{error, info, warn};

use docsmith_data::normalize;
use docsmith_render::TemplateRenderer;

use crate::config::{BuildConfig, BuildTarget, CompileJob, PublishJob};
use crate::context::RunContext;
use crate::error::{CoreError, CoreResult};
use crate::output::OutputWriter;
use crate::publish::{NoopPublisher, Publisher};

/// Counts for the end-of-run summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Build targets rendered and delivered.
    pub built: usize,
    /// Publish builds skipped because they were disabled.
    pub skipped: usize,
    /// Build attempts abandoned after a logged failure.
    pub failed: usize,
}

/// Orchestrator for one configuration run.
pub struct BuildOrchestrator<'a> {
    ctx: &'a RunContext,
    renderer: TemplateRenderer,
    publisher: Box<dyn Publisher>,
}

impl<'a> BuildOrchestrator<'a> {
    pub fn new(ctx: &'a RunContext) -> Self {
        Self {
            ctx,
            renderer: TemplateRenderer::new(),
            publisher: Box::new(NoopPublisher),
        }
    }

    /// Inject a publish toolkit in place of the default placeholder.
    pub fn with_publisher(mut self, publisher: Box<dyn Publisher>) -> Self {
        self.publisher = publisher;
        self
    }

    /// Run every compile and publish job in the configuration, in
    /// document order.
    pub fn run(&self, config: &BuildConfig) -> CoreResult<RunSummary> {
        let mut summary = RunSummary::default();

        for entry in config.compile_entries() {
            match CompileJob::from_entry(entry) {
                Ok(job) => self.run_compile_job(&job, &mut summary)?,
                Err(e) => {
                    error!("{}", e);
                    summary.failed += 1;
                }
            }
        }
        for entry in config.publish_entries() {
            match PublishJob::from_entry(entry) {
                Ok(job) => self.run_publish_job(&job, &mut summary),
                Err(e) => {
                    error!("{}", e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Run complete: {} built, {} skipped, {} failed",
            summary.built, summary.skipped, summary.failed
        );
        Ok(summary)
    }

    /// Resolve and normalize the job's data source once, then render and
    /// write every build target against it.
    ///
    /// A recoverable parse failure downgrades the data to an empty
    /// context; the targets still render. Any other data failure
    /// abandons the job's targets and the run moves on.
    fn run_compile_job(&self, job: &CompileJob, summary: &mut RunSummary) -> CoreResult<()> {
        let source = match job.data.resolve(self.ctx) {
            Ok(source) => source,
            Err(e) => {
                error!("{}", e);
                summary.failed += job.builds.len();
                return Ok(());
            }
        };

        let data = match normalize(&source) {
            Ok(data) => data,
            Err(e) if e.is_recoverable() => {
                error!("{}", e);
                Value::Object(serde_json::Map::new())
            }
            Err(e) => {
                error!("{}", e);
                summary.failed += job.builds.len();
                return Ok(());
            }
        };

        for target in &job.builds {
            self.run_build_target(target, &data, summary)?;
        }
        Ok(())
    }

    /// One build attempt: render the template, deliver the output.
    /// Render failures propagate and terminate the run; write failures
    /// are logged by the writer and only counted here.
    fn run_build_target(
        &self,
        target: &BuildTarget,
        data: &Value,
        summary: &mut RunSummary,
    ) -> CoreResult<()> {
        let template_path = self.ctx.resolve(&target.template);
        let rendered = self
            .renderer
            .render_file(&template_path, data)
            .map_err(|e| CoreError::TemplateRender {
                template: template_path.clone(),
                source: e,
            })?;

        if target.is_stdout() {
            OutputWriter::write_stdout(&rendered, &template_path);
            summary.built += 1;
        } else if OutputWriter::write(&rendered, &self.ctx.resolve(&target.output)) {
            summary.built += 1;
        } else {
            summary.failed += 1;
        }
        Ok(())
    }

    /// Hand enabled publish builds to the toolkit; disabled builds are
    /// skipped with a warning naming them. Toolkit errors are isolated.
    fn run_publish_job(&self, job: &PublishJob, summary: &mut RunSummary) {
        for build in &job.builds {
            if !build.publish {
                warn!(
                    "Publish build for '{}' backend '{}' disabled",
                    build.index.as_deref().unwrap_or("unnamed"),
                    build.backend.as_deref().unwrap_or("default")
                );
                summary.skipped += 1;
                continue;
            }
            match self.publisher.publish(job, build) {
                Ok(()) => summary.built += 1,
                Err(e) => {
                    error!("Error during publish action: {}", e);
                    summary.failed += 1;
                }
            }
        }
    }
}

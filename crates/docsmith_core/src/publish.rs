//! Publish seam.
//!
//! Post-processing through an external document toolkit is not part of
//! the core; the orchestrator calls through this trait so a real toolkit
//! can be injected. Publisher failures are isolated exactly like other
//! build attempts.

use tracing::warn;

use crate::config::{PublishBuild, PublishJob};
use crate::error::CoreResult;

/// Entry point for the external publish toolkit.
pub trait Publisher {
    fn publish(&self, job: &PublishJob, build: &PublishBuild) -> CoreResult<()>;
}

/// Placeholder publisher that warns and does nothing.
#[derive(Debug, Default)]
pub struct NoopPublisher;

impl Publisher for NoopPublisher {
    fn publish(&self, _job: &PublishJob, _build: &PublishBuild) -> CoreResult<()> {
        warn!("Publish actions not yet implemented");
        Ok(())
    }
}

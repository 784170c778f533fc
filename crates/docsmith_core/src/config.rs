//! Build configuration model and loader.
//!
//! Only the top-level shape is validated at load time: the document must
//! parse and carry a `compile:` or `publish:` section. Job entries are
//! kept as raw values and decoded when the orchestrator reaches them, so
//! a malformed nested field surfaces as a build-execution failure for
//! that one job rather than a load failure for the whole run.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use docsmith_data::{DataResult, DataSource};

use crate::context::RunContext;
use crate::error::{CoreError, CoreResult};

/// Root build configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Compile jobs, in document order.
    #[serde(default)]
    pub compile: Option<Vec<serde_yaml::Value>>,
    /// Publish jobs, in document order.
    #[serde(default)]
    pub publish: Option<Vec<serde_yaml::Value>>,
}

impl BuildConfig {
    pub fn compile_entries(&self) -> &[serde_yaml::Value] {
        self.compile.as_deref().unwrap_or(&[])
    }

    pub fn publish_entries(&self) -> &[serde_yaml::Value] {
        self.publish.as_deref().unwrap_or(&[])
    }
}

/// One data source paired with one or more build targets.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileJob {
    pub data: DataSourceRef,
    pub builds: Vec<BuildTarget>,
}

impl CompileJob {
    /// Decode a raw compile entry, at execution time.
    pub fn from_entry(entry: &serde_yaml::Value) -> CoreResult<Self> {
        serde_yaml::from_value(entry.clone()).map_err(|e| CoreError::MalformedEntry {
            section: "compile",
            message: e.to_string(),
        })
    }
}

/// Reference to a data source: either a bare file path, or a mapping with
/// the file, an optional explicit type, and (for regex sources) the
/// extraction pattern.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DataSourceRef {
    Path(String),
    Detailed {
        file: String,
        #[serde(rename = "type", default)]
        declared_type: Option<String>,
        #[serde(default)]
        pattern: Option<String>,
    },
}

impl DataSourceRef {
    pub fn file(&self) -> &str {
        match self {
            Self::Path(file) => file,
            Self::Detailed { file, .. } => file,
        }
    }

    pub fn declared_type(&self) -> Option<&str> {
        match self {
            Self::Path(_) => None,
            Self::Detailed { declared_type, .. } => declared_type.as_deref(),
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Path(_) => None,
            Self::Detailed { pattern, .. } => pattern.as_deref(),
        }
    }

    /// Resolve this reference into a data source against the base dir.
    pub fn resolve(&self, ctx: &RunContext) -> DataResult<DataSource> {
        DataSource::resolve(
            ctx.resolve(self.file()),
            self.declared_type(),
            self.pattern().map(str::to_string),
        )
    }
}

/// One (template, output) pair within a compile job.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildTarget {
    /// Template path, relative to the base directory.
    pub template: String,
    /// Output path relative to the base directory, or the stdout sentinel.
    pub output: String,
}

impl BuildTarget {
    /// Whether output goes to the console instead of a file.
    pub fn is_stdout(&self) -> bool {
        self.output.eq_ignore_ascii_case(crate::output::STDOUT_SENTINEL)
    }
}

/// A post-processing job handed to the external publish toolkit.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishJob {
    #[serde(default)]
    pub builds: Vec<PublishBuild>,
}

impl PublishJob {
    /// Decode a raw publish entry, at execution time.
    pub fn from_entry(entry: &serde_yaml::Value) -> CoreResult<Self> {
        serde_yaml::from_value(entry.clone()).map_err(|e| CoreError::MalformedEntry {
            section: "publish",
            message: e.to_string(),
        })
    }
}

/// One publish build descriptor. Disabled builds are skipped with a
/// warning, never attempted.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishBuild {
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub backend: Option<String>,
}

/// Loader for build configuration documents.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and shape-check a build configuration.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<BuildConfig> {
        let path = path.as_ref();
        debug!("Using config file {:?}", path);

        if !path.exists() {
            return Err(CoreError::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: BuildConfig =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if config.compile.is_none() && config.publish.is_none() {
            return Err(CoreError::ConfigShape);
        }
        Ok(config)
    }
}

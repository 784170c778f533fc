//! Supported data-source formats.

use crate::error::{DataError, DataResult};

/// Format of a data source.
///
/// A closed set: an unsupported format is rejected at resolution time,
/// before any file I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
    Xml,
    Csv,
    Regex,
}

impl DataFormat {
    /// Resolve an explicit `type:` declaration, case-insensitively.
    /// `yaml` and `yml` are synonyms.
    pub fn from_declared(declared: &str) -> DataResult<Self> {
        match declared.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            "regex" => Ok(Self::Regex),
            other => Err(DataError::UnrecognizedType(other.to_string())),
        }
    }

    /// Infer the format from a file extension (without the leading dot).
    ///
    /// Regex sources can never be inferred; they require an explicit
    /// declaration, as does anything outside the `.yml`/`.json`/`.xml`/
    /// `.csv` set.
    pub fn from_extension(ext: &str) -> DataResult<Self> {
        match ext {
            "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            other => Err(DataError::UnknownExtension(format!(".{}", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
            Self::Regex => "regex",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Resolved data-source descriptors.

use std::path::PathBuf;

use crate::error::{DataError, DataResult};
use crate::format::DataFormat;

/// A fully resolved data source: the file to read, the format to read it
/// as, and the extraction pattern for regex sources.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub path: PathBuf,
    pub format: DataFormat,
    pub pattern: Option<String>,
}

impl DataSource {
    /// Resolve a source from a path, an optional declared type, and an
    /// optional extraction pattern.
    ///
    /// An explicit declaration always wins over extension inference. An
    /// extension-less file with no declared type can never resolve.
    pub fn resolve(
        path: impl Into<PathBuf>,
        declared: Option<&str>,
        pattern: Option<String>,
    ) -> DataResult<Self> {
        let path = path.into();
        let format = match declared {
            Some(declared) => DataFormat::from_declared(declared)?,
            None => {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                DataFormat::from_extension(ext)?
            }
        };
        if format == DataFormat::Regex && pattern.is_none() {
            return Err(DataError::MissingPattern(path));
        }
        Ok(Self {
            path,
            format,
            pattern,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_wins_over_extension() {
        let source = DataSource::resolve("notes.txt", Some("yml"), None).unwrap();
        assert_eq!(source.format, DataFormat::Yaml);
    }

    #[test]
    fn test_extension_inference_without_declaration() {
        let source = DataSource::resolve("rows.csv", None, None).unwrap();
        assert_eq!(source.format, DataFormat::Csv);
    }

    #[test]
    fn test_extensionless_file_never_resolves() {
        let err = DataSource::resolve("Makefile", None, None).unwrap_err();
        assert!(matches!(err, DataError::UnknownExtension(_)));
    }

    #[test]
    fn test_regex_requires_pattern() {
        let err = DataSource::resolve("log.txt", Some("regex"), None).unwrap_err();
        assert!(matches!(err, DataError::MissingPattern(_)));

        let source = DataSource::resolve(
            "log.txt",
            Some("regex"),
            Some(r"(?<id>\d+)".to_string()),
        )
        .unwrap();
        assert_eq!(source.format, DataFormat::Regex);
    }
}

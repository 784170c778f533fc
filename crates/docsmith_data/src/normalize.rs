//! Data-source normalization.
//!
//! Every supported format is reduced to one canonical in-memory shape: a
//! `serde_json::Value` tree. Object-shaped sources (YAML, JSON, XML) keep
//! their parsed structure; row-shaped sources (CSV, regex) become a
//! single-key mapping `{"data": [row, ...]}` so templates can rely on a
//! stable `data` collection regardless of the origin format.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::format::DataFormat;
use crate::freeform;
use crate::source::DataSource;
use crate::xml;

/// Normalize a resolved data source into the canonical value tree.
pub fn normalize(source: &DataSource) -> DataResult<Value> {
    debug!("Normalizing {:?} as {}", source.path, source.format);
    match source.format {
        DataFormat::Yaml => parse_yaml(&source.path),
        DataFormat::Json => parse_json(&source.path),
        DataFormat::Xml => xml::parse_xml(&source.path),
        DataFormat::Csv => parse_csv(&source.path),
        DataFormat::Regex => {
            let pattern = source
                .pattern
                .as_deref()
                .ok_or_else(|| DataError::MissingPattern(source.path.clone()))?;
            freeform::parse_freeform(&source.path, pattern)
        }
    }
}

/// Wrap a sequence of row mappings in the canonical `{"data": rows}` shape.
pub(crate) fn wrap_rows(rows: Vec<Value>) -> Value {
    let mut out = Map::new();
    out.insert("data".to_string(), Value::Array(rows));
    Value::Object(out)
}

pub(crate) fn parse_error(path: &Path, message: impl std::fmt::Display) -> DataError {
    DataError::Parse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn read_source(path: &Path) -> DataResult<String> {
    fs::read_to_string(path).map_err(|e| parse_error(path, e))
}

fn parse_yaml(path: &Path) -> DataResult<Value> {
    let content = read_source(path)?;
    serde_yaml::from_str(&content).map_err(|e| parse_error(path, e))
}

fn parse_json(path: &Path) -> DataResult<Value> {
    let content = read_source(path)?;
    serde_json::from_str(&content).map_err(|e| parse_error(path, e))
}

/// Read a CSV file with the first record as header. Every subsequent
/// non-blank record becomes a header-to-cell mapping, accumulated in file
/// order. Ragged records fail the whole file.
fn parse_csv(path: &Path) -> DataResult<Value> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| parse_error(path, e))?;
    let headers = reader.headers().map_err(|e| parse_error(path, e))?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let mut row = Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::String(cell.to_string()));
        }
        rows.push(Value::Object(row));
    }
    Ok(wrap_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_yaml_tree_shape() {
        let temp = tempdir().unwrap();
        let path = write_file(temp.path(), "data.yml", "name: Ada\nlangs:\n  - en\n  - fr\n");
        let source = DataSource::resolve(path, None, None).unwrap();
        let value = normalize(&source).unwrap();

        assert_eq!(value["name"], "Ada");
        assert_eq!(value["langs"][1], "fr");
    }

    #[test]
    fn test_json_tree_shape() {
        let temp = tempdir().unwrap();
        let path = write_file(temp.path(), "data.json", r#"{"name": "Ada", "n": 3}"#);
        let source = DataSource::resolve(path, None, None).unwrap();
        let value = normalize(&source).unwrap();

        assert_eq!(value["name"], "Ada");
        assert_eq!(value["n"], 3);
    }

    #[test]
    fn test_csv_row_shape() {
        let temp = tempdir().unwrap();
        let path = write_file(temp.path(), "rows.csv", "a,b\n1,2\n");
        let source = DataSource::resolve(path, None, None).unwrap();
        let value = normalize(&source).unwrap();

        let rows = value["data"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
    }

    #[test]
    fn test_csv_blank_rows_skipped() {
        let temp = tempdir().unwrap();
        let path = write_file(temp.path(), "rows.csv", "a,b\n1,2\n,\n3,4\n");
        let source = DataSource::resolve(path, None, None).unwrap();
        let value = normalize(&source).unwrap();

        let rows = value["data"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["a"], "3");
    }

    #[test]
    fn test_ragged_csv_is_recoverable_parse_error() {
        let temp = tempdir().unwrap();
        let path = write_file(temp.path(), "rows.csv", "a,b\n1,2,3\n");
        let source = DataSource::resolve(path, None, None).unwrap();
        let err = normalize(&source).unwrap_err();

        assert!(matches!(err, DataError::Parse { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_yaml_is_recoverable_parse_error() {
        let temp = tempdir().unwrap();
        let path = write_file(temp.path(), "bad.yml", "name: [unclosed\n");
        let source = DataSource::resolve(path, None, None).unwrap();
        let err = normalize(&source).unwrap_err();

        assert!(err.is_recoverable());
    }

    #[test]
    fn test_missing_file_is_recoverable_parse_error() {
        let temp = tempdir().unwrap();
        let source = DataSource::resolve(temp.path().join("absent.yml"), None, None).unwrap();
        let err = normalize(&source).unwrap_err();

        assert!(err.is_recoverable());
    }

    #[test]
    fn test_declared_yaml_on_txt_extension() {
        let temp = tempdir().unwrap();
        let path = write_file(temp.path(), "data.txt", "name: Ada\n");
        let source = DataSource::resolve(path, Some("yml"), None).unwrap();
        let value = normalize(&source).unwrap();

        assert_eq!(value["name"], "Ada");
    }
}

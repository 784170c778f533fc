//! Free-form text extraction.
//!
//! Applies a user-supplied regular expression with named capture groups
//! to each line of a text file, accumulating the matched lines as rows
//! under the canonical `{"data": rows}` shape.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::normalize::wrap_rows;

/// Parse a free-form text file with a named-group pattern.
///
/// Lines of 3 characters or fewer are inherently invalid and skipped
/// before the pattern is tried; longer lines that do not match are
/// silently skipped as well. Every named group appears in each row, with
/// unmatched optional groups as null.
pub fn parse_freeform(path: &Path, pattern: &str) -> DataResult<Value> {
    let re = Regex::new(pattern).map_err(|e| DataError::BadPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    let groups: Vec<&str> = re.capture_names().flatten().collect();
    debug!("Using regular expression {} to parse data file", pattern);

    let file = File::open(path).map_err(|e| DataError::FreeformRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| DataError::FreeformRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.len() <= 3 {
            continue;
        }
        if let Some(captures) = re.captures(&line) {
            let mut row = Map::new();
            for name in &groups {
                let value = captures
                    .name(name)
                    .map(|m| Value::String(m.as_str().to_string()))
                    .unwrap_or(Value::Null);
                row.insert((*name).to_string(), value);
            }
            rows.push(Value::Object(row));
        }
    }
    Ok(wrap_rows(rows))
}

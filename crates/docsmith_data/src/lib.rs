//! # docsmith_data
//!
//! Data-source ingestion and normalization for docsmith.
//!
//! This crate turns a semi-structured data file of heterogeneous format
//! (YAML, JSON, XML, CSV, or free-form text matched by a regular
//! expression) into one canonical in-memory structure, so the renderer
//! never needs to know where the data came from:
//!
//! - object-shaped sources keep their mapping/sequence/scalar tree;
//! - row-shaped sources (CSV, regex) become `{"data": [row, ...]}`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docsmith_data::{normalize, DataSource};
//!
//! let source = DataSource::resolve("people.csv", None, None).unwrap();
//! let data = normalize(&source).unwrap();
//! assert!(data["data"].is_array());
//! ```

pub mod error;
pub mod format;
pub mod freeform;
pub mod normalize;
pub mod source;
pub mod xml;

pub use error::{DataError, DataResult};
pub use format::DataFormat;
pub use freeform::parse_freeform;
pub use normalize::normalize;
pub use source::DataSource;

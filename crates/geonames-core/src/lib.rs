// crates/geonames-core/src/lib.rs

//! geonames-core
//! =============
//!
//! Downloads the GeoNames countries, admin1 regions and cities5000 dumps and
//! compiles them into compact structures, serialized as minimal JSON or as a
//! JS module (`export default{...}`).
//!
//! ```rust
//! use geonames_core::{compile, parse_text, to_json, CompileOptions, DatasetKind};
//!
//! let text = "header\n3041563\tZug\tZug\t\t47.17\t8.51\tP\tPPLA\tCH\t\tZG\n";
//! let records = parse_text(text);
//! let cities = compile(DatasetKind::Cities, &records, &CompileOptions::default()).unwrap();
//! assert_eq!(to_json(&cities).unwrap(), r#"[["Zug","ZG","CH",47.17,8.51]]"#);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod archive;
pub mod common;
pub mod compile;
pub mod error;
pub mod fetch;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod records;
pub mod serialize;
pub mod source;
pub mod writer;

// Re-exports
pub use crate::common::RunStats;
pub use crate::compile::{compile, Compiler};
pub use crate::error::{GeoNamesError, Result};
#[cfg(feature = "fetch")]
pub use crate::fetch::HttpFetcher;
pub use crate::fetch::Fetch;
pub use crate::model::{CityEntries, CityRow, CompiledDataset, OutputDocument};
pub use crate::options::{CompileOptions, OutputFormat, OutputOptions};
pub use crate::pipeline::{load_dataset, output_path, run};
pub use crate::records::{parse_bytes, parse_text, RawRecord};
pub use crate::serialize::{render, to_js, to_json};
pub use crate::source::DatasetKind;

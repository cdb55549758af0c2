// crates/geonames-core/src/pipeline.rs

//! # Pipeline
//!
//! fetch -> unzip -> parse -> compile for each dataset in turn, then write.
//! Strictly sequential; the first error ends the run. In individual-file
//! mode each file is written as soon as its dataset is compiled, so files
//! written before a failure are left in place.

use crate::archive::extract_if_zip;
use crate::common::RunStats;
use crate::compile::compile;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::model::{CompiledDataset, OutputDocument};
use crate::options::{CompileOptions, OutputOptions};
use crate::records::parse_bytes;
use crate::serialize::render;
use crate::source::{is_zip_url, DatasetKind, OUTPUT_FILE_NAME};
use crate::writer::write_output;
use log::{debug, info};
use std::path::PathBuf;

/// Fetches, extracts, parses and compiles a single dataset.
pub fn load_dataset<F: Fetch + ?Sized>(
    fetcher: &F,
    kind: DatasetKind,
    options: &CompileOptions,
) -> Result<CompiledDataset> {
    let url = kind.url();
    info!("Downloading {kind} from {url}");

    let content = fetcher.fetch(url)?;
    let content = extract_if_zip(content, is_zip_url(url))?;
    let records = parse_bytes(kind, &content)?;
    debug!("{kind}: {} records", records.len());

    let dataset = compile(kind, &records, options)?;
    debug!("{kind}: {} entries", dataset.len());
    Ok(dataset)
}

/// Target file for one dataset (`Some(kind)`) or for the combined document (`None`).
pub fn output_path(output: &OutputOptions, kind: Option<DatasetKind>) -> PathBuf {
    let stem = match kind {
        Some(kind) => kind.file_stem(),
        None => OUTPUT_FILE_NAME.to_string(),
    };
    output
        .output_dir
        .join(format!("{stem}.{}", output.format.extension()))
}

/// Runs the whole conversion for all three datasets.
pub fn run<F: Fetch + ?Sized>(
    fetcher: &F,
    compile_options: &CompileOptions,
    output: &OutputOptions,
) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let mut datasets = Vec::with_capacity(DatasetKind::ALL.len());

    for kind in DatasetKind::ALL {
        let dataset = load_dataset(fetcher, kind, compile_options)?;
        stats.record(&dataset);

        if output.individual_files {
            let path = output_path(output, Some(kind));
            let text = render(&OutputDocument::Single(&dataset), output.format)?;
            write_output(&path, &text)?;
            stats.written.push(path);
        } else {
            datasets.push(dataset);
        }
    }

    if !output.individual_files {
        let path = output_path(output, None);
        let text = render(&OutputDocument::Combined(&datasets), output.format)?;
        write_output(&path, &text)?;
        stats.written.push(path);
    }

    Ok(stats)
}

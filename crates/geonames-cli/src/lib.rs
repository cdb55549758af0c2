//! geonames-cli
//! ============
//!
//! Command-line front end for [`geonames-core`]: downloads the GeoNames
//! countries, regions and cities dumps and writes them as compact JS modules
//! or JSON files.
//!
//! This crate primarily provides a binary (`geonames2js`). The library target
//! holds the argument model and the run/report glue so they can be driven
//! with any [`Fetch`] source.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geonames-cli
//! geonames2js --help
//! geonames2js                                  # geoNames.js
//! geonames2js --format JSON --individual-files # geoNamesCountries.json, ...
//! ```
//!
//! Flags
//! -----
//! - `--format {JS,JSON}`: `export default{...}` or plain JSON (default JS)
//! - `--individual-files`: one file per dataset
//! - `--include-ids`: key cities by GeoNames id
//! - `--exclude-locations`: drop latitude/longitude from cities
//! - `--output-dir <DIR>`: where to write (default `.`)
//! - `-v`, `-vv`: info/debug logging on stderr
//!
//! [`geonames-core`]: https://docs.rs/geonames-core
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::CliArgs;
use geonames_core::{run, Fetch, RunStats};
use log::info;
use std::io::Write;

/// Runs the conversion described by `args`, pulling data through `fetcher`.
pub fn convert<F: Fetch + ?Sized>(args: &CliArgs, fetcher: &F) -> anyhow::Result<RunStats> {
    let compile_options = args.compile_options();
    let output_options = args.output_options();

    let stats = run(fetcher, &compile_options, &output_options)?;

    info!(
        "Compiled {} countries, {} regions, {} cities",
        stats.countries, stats.regions, stats.cities
    );
    for path in &stats.written {
        info!("  {}", path.display());
    }
    Ok(stats)
}

/// Process exit status for `result`. A failure is reported as one line on `stderr`.
pub fn exit_status<T, W: Write>(result: &anyhow::Result<T>, stderr: &mut W) -> u8 {
    match result {
        Ok(_) => 0,
        Err(err) => {
            let _ = writeln!(stderr, "{err}");
            1
        }
    }
}

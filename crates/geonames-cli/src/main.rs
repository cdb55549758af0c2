//! geonames2js — GeoNames dumps to compact JS/JSON
//!
//! Downloads `countryInfo.txt`, `admin1CodesASCII.txt` and `cities5000.zip`
//! from download.geonames.org, keeps the few fields a front end needs, and
//! writes them as `export default{...}` modules or plain JSON.
//!
//! Usage examples
//! --------------
//!
//! - One combined JS module in the working directory
//!   $ geonames2js
//!
//! - Separate JSON files, cities keyed by GeoNames id, without coordinates
//!   $ geonames2js --format JSON --individual-files --include-ids --exclude-locations
//!
//! Any failure prints a single line to stderr and exits with status 1.
use clap::Parser;
use geonames_cli::args::CliArgs;
use geonames_cli::{convert, exit_status};
use geonames_core::HttpFetcher;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .format_timestamp(None)
        .init();

    let result = convert(&args, &HttpFetcher::new());
    ExitCode::from(exit_status(&result, &mut std::io::stderr()))
}

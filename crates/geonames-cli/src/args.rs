use clap::{ArgAction, Parser, ValueEnum};
use geonames_core::{CompileOptions, OutputFormat, OutputOptions};
use std::path::PathBuf;

/// CLI arguments for geonames2js
#[derive(Debug, Parser)]
#[command(
    name = "geonames2js",
    version,
    about = "Download and save GeoNames data as JS or JSON files."
)]
pub struct CliArgs {
    /// Output format (JS or JSON). Default is JS.
    #[arg(long, value_enum, default_value_t = Format::Js)]
    pub format: Format,

    /// Save countries, regions, and cities to individual files as opposed to a single file.
    #[arg(long)]
    pub individual_files: bool,

    /// Include GeoNames IDs in the city data.
    #[arg(long)]
    pub include_ids: bool,

    /// Don't include locations in the city data.
    #[arg(long)]
    pub exclude_locations: bool,

    /// Directory the output files are written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[value(name = "JS")]
    Js,
    #[value(name = "JSON")]
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Js => OutputFormat::Js,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl CliArgs {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            include_ids: self.include_ids,
            exclude_locations: self.exclude_locations,
        }
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.format.into(),
            individual_files: self.individual_files,
            output_dir: self.output_dir.clone(),
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

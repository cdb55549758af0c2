// crates/geonames-core/src/options.rs
use std::path::PathBuf;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `export default` followed by compact JSON.
    #[default]
    Js,
    /// Compact JSON only.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Js => "js",
            OutputFormat::Json => "json",
        }
    }
}

/// Switches that change how city rows are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    /// Key city rows by GeoNames id instead of emitting a plain list.
    pub include_ids: bool,
    /// Drop latitude/longitude from city rows.
    pub exclude_locations: bool,
}

/// Where and how compiled datasets are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// One file per dataset instead of a single combined file.
    pub individual_files: bool,
    pub output_dir: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            individual_files: false,
            output_dir: PathBuf::from("."),
        }
    }
}

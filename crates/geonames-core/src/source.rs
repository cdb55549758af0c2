// crates/geonames-core/src/source.rs

//! # Sources
//!
//! The fixed set of GeoNames dumps this crate knows how to compile, and the
//! names their outputs are written under.

use std::fmt;

pub const COUNTRIES_URL: &str = "https://download.geonames.org/export/dump/countryInfo.txt";
pub const REGIONS_URL: &str = "https://download.geonames.org/export/dump/admin1CodesASCII.txt";
pub const CITIES_URL: &str = "https://download.geonames.org/export/dump/cities5000.zip";

/// Base name of every output file. Camel-cased because the consumers are JS modules.
pub const OUTPUT_FILE_NAME: &str = "geoNames";

/// One of the three GeoNames datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetKind {
    Countries,
    Regions,
    Cities,
}

impl DatasetKind {
    /// Processing order of a run.
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Countries,
        DatasetKind::Regions,
        DatasetKind::Cities,
    ];

    /// Key used for this dataset inside a combined document.
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Countries => "countries",
            DatasetKind::Regions => "regions",
            DatasetKind::Cities => "cities",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            DatasetKind::Countries => COUNTRIES_URL,
            DatasetKind::Regions => REGIONS_URL,
            DatasetKind::Cities => CITIES_URL,
        }
    }

    /// File stem used in individual-file mode, e.g. `geoNamesCities`.
    pub fn file_stem(self) -> String {
        let label = match self {
            DatasetKind::Countries => "Countries",
            DatasetKind::Regions => "Regions",
            DatasetKind::Cities => "Cities",
        };
        format!("{OUTPUT_FILE_NAME}{label}")
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a URL points at a ZIP archive (case-insensitive `.zip` suffix).
pub fn is_zip_url(url: &str) -> bool {
    url.to_ascii_lowercase().ends_with(".zip")
}

// crates/geonames-core/src/compile.rs

//! # Dataset Compiler
//!
//! Raw records -> compact structures, one compiler per [`DatasetKind`].
//! Field positions follow the GeoNames dump layout and must not move:
//!
//! | kind      | fields used                                              |
//! |-----------|----------------------------------------------------------|
//! | countries | 0 = ISO code, 4 = name                                   |
//! | regions   | 0 = admin1 code, 1 = name                                |
//! | cities    | 0 = id, 1 = name, 4 = lat, 5 = lng, 8 = country, 10 = admin1 |

use crate::error::{GeoNamesError, Result};
use crate::model::{CityEntries, CityRow, CompiledDataset};
use crate::options::CompileOptions;
use crate::records::RawRecord;
use crate::source::DatasetKind;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Signature shared by every dataset compiler.
pub type Compiler = fn(&[RawRecord], &CompileOptions) -> Result<CompiledDataset>;

mod cities_idx {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const LATITUDE: usize = 4;
    pub const LONGITUDE: usize = 5;
    pub const COUNTRY: usize = 8;
    pub const REGION: usize = 10;
}

impl DatasetKind {
    /// The compiler responsible for this dataset.
    pub fn compiler(self) -> Compiler {
        match self {
            DatasetKind::Countries => compile_countries,
            DatasetKind::Regions => compile_regions,
            DatasetKind::Cities => compile_cities,
        }
    }
}

/// Compiles `records` with the compiler registered for `kind`.
pub fn compile(
    kind: DatasetKind,
    records: &[RawRecord],
    options: &CompileOptions,
) -> Result<CompiledDataset> {
    (kind.compiler())(records, options)
}

/// Code -> name map; later duplicates overwrite earlier ones.
fn code_to_name(
    kind: DatasetKind,
    records: &[RawRecord],
    name_index: usize,
) -> Result<BTreeMap<String, String>> {
    let mut entries = BTreeMap::new();
    for record in records {
        let code = record.field(kind, 0)?;
        let name = record.field(kind, name_index)?;
        entries.insert(code.to_string(), name.to_string());
    }
    Ok(entries)
}

pub fn compile_countries(
    records: &[RawRecord],
    _options: &CompileOptions,
) -> Result<CompiledDataset> {
    code_to_name(DatasetKind::Countries, records, 4).map(CompiledDataset::Countries)
}

pub fn compile_regions(
    records: &[RawRecord],
    _options: &CompileOptions,
) -> Result<CompiledDataset> {
    code_to_name(DatasetKind::Regions, records, 1).map(CompiledDataset::Regions)
}

pub fn compile_cities(
    records: &[RawRecord],
    options: &CompileOptions,
) -> Result<CompiledDataset> {
    let mut indexed = Vec::new();
    let mut keyed = BTreeMap::new();

    for record in records {
        let (id, row) = city_row(record, options)?;
        if options.include_ids {
            keyed.insert(id, row);
        } else {
            indexed.push(row);
        }
    }

    let entries = if options.include_ids {
        CityEntries::KeyedRows(keyed)
    } else {
        CityEntries::IndexedRows(indexed)
    };
    Ok(CompiledDataset::Cities(entries))
}

fn city_row(record: &RawRecord, options: &CompileOptions) -> Result<(i64, CityRow)> {
    use cities_idx::*;
    let kind = DatasetKind::Cities;

    let id: i64 = parse_field(record, ID, "integer id")?;
    let latitude: f64 = parse_field(record, LATITUDE, "latitude")?;
    let longitude: f64 = parse_field(record, LONGITUDE, "longitude")?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(malformed(
            record,
            format!("non-finite location {latitude},{longitude}"),
        ));
    }

    let row = CityRow {
        name: record.field(kind, NAME)?.to_string(),
        region: record.field(kind, REGION)?.to_string(),
        country: record.field(kind, COUNTRY)?.to_string(),
        location: (!options.exclude_locations).then_some((latitude, longitude)),
    };
    Ok((id, row))
}

fn parse_field<T: FromStr>(record: &RawRecord, index: usize, what: &str) -> Result<T> {
    let raw = record.field(DatasetKind::Cities, index)?;
    raw.parse()
        .map_err(|_| malformed(record, format!("field {index} is not a valid {what}: {raw:?}")))
}

fn malformed(record: &RawRecord, reason: String) -> GeoNamesError {
    GeoNamesError::MalformedRecord {
        kind: DatasetKind::Cities,
        line: record.line,
        reason,
    }
}

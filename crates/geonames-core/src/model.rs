// crates/geonames-core/src/model.rs

//! Compact output structures.
//!
//! Everything here is built once by [`crate::compile`] and only read
//! afterwards. The JSON shape is part of the output contract: city rows are
//! positional arrays, not objects.

use crate::source::DatasetKind;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Country code -> country name.
pub type CountryEntries = BTreeMap<String, String>;

/// Region code (e.g. `CH.ZG`) -> region name.
pub type RegionEntries = BTreeMap<String, String>;

/// A city, serialized as `[name, region, country]` or
/// `[name, region, country, latitude, longitude]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRow {
    pub name: String,
    pub region: String,
    pub country: String,
    /// `(latitude, longitude)` in degrees. Both or neither.
    pub location: Option<(f64, f64)>,
}

impl Serialize for CityRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.location.is_some() { 5 } else { 3 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.name)?;
        seq.serialize_element(&self.region)?;
        seq.serialize_element(&self.country)?;
        if let Some((lat, lng)) = self.location {
            seq.serialize_element(&lat)?;
            seq.serialize_element(&lng)?;
        }
        seq.end()
    }
}

/// City rows, either in source order or keyed by GeoNames id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CityEntries {
    IndexedRows(Vec<CityRow>),
    KeyedRows(BTreeMap<i64, CityRow>),
}

impl CityEntries {
    pub fn len(&self) -> usize {
        match self {
            CityEntries::IndexedRows(rows) => rows.len(),
            CityEntries::KeyedRows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The compiled form of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompiledDataset {
    Countries(CountryEntries),
    Regions(RegionEntries),
    Cities(CityEntries),
}

impl CompiledDataset {
    pub fn kind(&self) -> DatasetKind {
        match self {
            CompiledDataset::Countries(_) => DatasetKind::Countries,
            CompiledDataset::Regions(_) => DatasetKind::Regions,
            CompiledDataset::Cities(_) => DatasetKind::Cities,
        }
    }

    /// Number of top-level entries (countries, regions or city rows).
    pub fn len(&self) -> usize {
        match self {
            CompiledDataset::Countries(entries) | CompiledDataset::Regions(entries) => {
                entries.len()
            }
            CompiledDataset::Cities(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What ends up in one output file.
#[derive(Debug, Clone, Copy)]
pub enum OutputDocument<'a> {
    /// Individual-file mode: the dataset itself.
    Single(&'a CompiledDataset),
    /// Combined mode: `{ "countries": .., "regions": .., "cities": .. }`, in the given order.
    Combined(&'a [CompiledDataset]),
}

impl Serialize for OutputDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OutputDocument::Single(dataset) => dataset.serialize(serializer),
            OutputDocument::Combined(datasets) => {
                let mut map = serializer.serialize_map(Some(datasets.len()))?;
                for dataset in datasets.iter() {
                    map.serialize_entry(dataset.kind().name(), dataset)?;
                }
                map.end()
            }
        }
    }
}

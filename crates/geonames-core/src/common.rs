// crates/geonames-core/src/common.rs
use crate::model::CompiledDataset;
use crate::source::DatasetKind;
use std::path::PathBuf;

/// Summary of a finished run.
///
/// Returned by [`crate::pipeline::run`]; counts are top-level entries of each
/// compiled dataset (city rows after id de-duplication when ids are included).
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub countries: usize,
    pub regions: usize,
    pub cities: usize,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

impl RunStats {
    pub fn record(&mut self, dataset: &CompiledDataset) {
        let count = dataset.len();
        match dataset.kind() {
            DatasetKind::Countries => self.countries = count,
            DatasetKind::Regions => self.regions = count,
            DatasetKind::Cities => self.cities = count,
        }
    }
}

//! geonames-rs
//! ===========
//!
//! Workspace host for [`geonames_core`] and the `geonames2js` CLI. Re-exports
//! the core API so the demos under `demos/` and downstream users can depend on
//! a single crate.

pub use geonames_core::*;

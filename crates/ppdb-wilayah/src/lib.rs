//! Administrative region (wilayah) reference data for PPDB address entry.
//!
//! The crate provides the [`RegionSource`] lookup contract with a bundled
//! static dataset and an optional HTTP backend, plus the [`RegionCascade`]
//! resolver that owns the province → regency → district → village selection
//! chain, including postal-code auto-fill and the staleness gate for
//! superseded fetches.

pub mod cascade;
pub mod dataset;
#[cfg(feature = "http")]
pub mod http;
pub mod region;
pub mod source;

pub use cascade::{FetchTicket, Loading, RegionCascade, Selection};
pub use dataset::StaticSource;
#[cfg(feature = "http")]
pub use http::HttpSource;
pub use region::{Level, Region, Village};
pub use source::{RegionError, RegionSource};

use async_trait::async_trait;
use thiserror::Error;

use crate::region::{Region, Village};

/// Errors raised by region lookups.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("region dataset is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[cfg(feature = "http")]
    #[error("region request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "http")]
    #[error("invalid region endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Lookup contract for the region reference dataset.
///
/// Results are keyed by the immediate parent code only; an unknown or empty
/// parent yields `Ok` with an empty list rather than an error. Whether the
/// data lives in memory or behind an HTTP cache is the implementation's
/// business, including any timeout or retry policy.
#[async_trait]
pub trait RegionSource: Send + Sync {
    async fn provinces(&self) -> Result<Vec<Region>, RegionError>;
    async fn regencies(&self, province_code: &str) -> Result<Vec<Region>, RegionError>;
    async fn districts(&self, regency_code: &str) -> Result<Vec<Region>, RegionError>;
    async fn villages(&self, district_code: &str) -> Result<Vec<Village>, RegionError>;
}

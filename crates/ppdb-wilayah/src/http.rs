//! HTTP-backed region source.

use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::region::{Region, Village};
use crate::source::{RegionError, RegionSource};

/// Region source backed by a static-file HTTP API (`provinces.json`,
/// `regencies/{code}.json`, ...), the layout public Indonesian region
/// mirrors serve.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: Url) -> Self {
        Self::with_client(base, reqwest::Client::new())
    }

    /// Use a preconfigured client; timeout and retry policy belong to the
    /// caller.
    pub fn with_client(base: Url, client: reqwest::Client) -> Self {
        Self { base, client }
    }

    async fn fetch<T>(&self, path: &str) -> Result<Vec<T>, RegionError>
    where
        T: DeserializeOwned,
    {
        let endpoint = self.base.join(path)?;
        let response = self
            .client
            .get(endpoint)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

fn segment(code: &str) -> String {
    utf8_percent_encode(code, NON_ALPHANUMERIC).to_string()
}

#[async_trait]
impl RegionSource for HttpSource {
    async fn provinces(&self) -> Result<Vec<Region>, RegionError> {
        self.fetch("provinces.json").await
    }

    async fn regencies(&self, province_code: &str) -> Result<Vec<Region>, RegionError> {
        if province_code.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(&format!("regencies/{}.json", segment(province_code)))
            .await
    }

    async fn districts(&self, regency_code: &str) -> Result<Vec<Region>, RegionError> {
        if regency_code.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(&format!("districts/{}.json", segment(regency_code)))
            .await
    }

    async fn villages(&self, district_code: &str) -> Result<Vec<Village>, RegionError> {
        if district_code.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(&format!("villages/{}.json", segment(district_code)))
            .await
    }
}

//! Static, parent-code-indexed region dataset.

use std::collections::BTreeMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::region::{Region, Village};
use crate::source::{RegionError, RegionSource};

const BUNDLED_JSON: &str = include_str!("../assets/wilayah.json");

static BUNDLED: Lazy<StaticSource> =
    Lazy::new(|| StaticSource::from_json_str(BUNDLED_JSON).unwrap_or_default());

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetVillage {
    code: String,
    name: String,
    #[serde(default)]
    postal_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetDistrict {
    code: String,
    name: String,
    #[serde(default)]
    villages: Vec<DatasetVillage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetRegency {
    code: String,
    name: String,
    #[serde(default)]
    districts: Vec<DatasetDistrict>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetProvince {
    code: String,
    name: String,
    #[serde(default)]
    regencies: Vec<DatasetRegency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    provinces: Vec<DatasetProvince>,
}

/// In-memory [`RegionSource`] built from a nested JSON dataset and indexed
/// by the immediate parent code.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    provinces: Vec<Region>,
    regencies: BTreeMap<String, Vec<Region>>,
    districts: BTreeMap<String, Vec<Region>>,
    villages: BTreeMap<String, Vec<Village>>,
}

impl StaticSource {
    pub fn from_json_str(raw: &str) -> Result<Self, RegionError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        let mut source = StaticSource::default();
        for provinsi in dataset.provinces {
            let mut regencies = Vec::new();
            for kabupaten in provinsi.regencies {
                let mut districts = Vec::new();
                for kecamatan in kabupaten.districts {
                    let villages = kecamatan
                        .villages
                        .into_iter()
                        .map(|desa| Village {
                            code: desa.code,
                            name: desa.name,
                            postal_code: desa.postal_code,
                        })
                        .collect();
                    source.villages.insert(kecamatan.code.clone(), villages);
                    districts.push(Region {
                        code: kecamatan.code,
                        name: kecamatan.name,
                    });
                }
                source.districts.insert(kabupaten.code.clone(), districts);
                regencies.push(Region {
                    code: kabupaten.code,
                    name: kabupaten.name,
                });
            }
            source.regencies.insert(provinsi.code.clone(), regencies);
            source.provinces.push(Region {
                code: provinsi.code,
                name: provinsi.name,
            });
        }
        Ok(source)
    }

    /// Dataset embedded at compile time (a small Jawa Timur subtree) for
    /// offline use, demos, and tests.
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }
}

#[async_trait]
impl RegionSource for StaticSource {
    async fn provinces(&self) -> Result<Vec<Region>, RegionError> {
        Ok(self.provinces.clone())
    }

    async fn regencies(&self, province_code: &str) -> Result<Vec<Region>, RegionError> {
        Ok(self
            .regencies
            .get(province_code)
            .cloned()
            .unwrap_or_default())
    }

    async fn districts(&self, regency_code: &str) -> Result<Vec<Region>, RegionError> {
        Ok(self.districts.get(regency_code).cloned().unwrap_or_default())
    }

    async fn villages(&self, district_code: &str) -> Result<Vec<Village>, RegionError> {
        Ok(self.villages.get(district_code).cloned().unwrap_or_default())
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Student home address, including the selected region-code chain.
///
/// The region codes are plain strings here; whether they resolve against the
/// reference dataset is the resolver's concern, not the schema's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Alamat {
    pub jalan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dusun: Option<String>,
    pub rt_rw: String,
    pub kode_provinsi: String,
    pub kode_kabupaten: String,
    pub kode_kecamatan: String,
    pub kode_desa: String,
    pub kode_pos: String,
}

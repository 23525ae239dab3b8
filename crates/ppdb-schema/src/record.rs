use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::orang_tua::{OrangTua, Wali};
use crate::siswa::Siswa;

/// The aggregate entity built up across the five wizard steps.
///
/// Created empty at wizard start, mutated field by field, optionally
/// mirrored into a draft slot for the print view, and discarded after
/// submission. There is no backing store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    pub siswa: Siswa,
    pub ayah: OrangTua,
    pub ibu: OrangTua,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wali: Option<Wali>,
}

impl RegistrationRecord {
    /// The guardian section becomes mandatory exactly when both parents are
    /// marked deceased.
    pub fn wali_wajib(&self) -> bool {
        self.ayah.sudah_meninggal && self.ibu.sudah_meninggal
    }

    /// True when a guardian section exists and at least one field is set.
    pub fn wali_terisi(&self) -> bool {
        self.wali.as_ref().is_some_and(|wali| !wali.is_kosong())
    }
}

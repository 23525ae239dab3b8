use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Enumerated selection with a free-text "Lainnya" (other) escape hatch.
///
/// The override text only exists inside the [`Pilihan::Lainnya`] variant, so
/// switching back to a listed value cannot leave a stale detail string
/// behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Pilihan<T> {
    Baku(T),
    Lainnya { lainnya: String },
}

impl<T> Pilihan<T> {
    pub fn lainnya(keterangan: impl Into<String>) -> Self {
        Pilihan::Lainnya {
            lainnya: keterangan.into(),
        }
    }

    /// True when the selection is `Lainnya` with a blank detail text.
    pub fn keterangan_kosong(&self) -> bool {
        matches!(self, Pilihan::Lainnya { lainnya } if lainnya.trim().is_empty())
    }
}

impl<T> From<T> for Pilihan<T> {
    fn from(value: T) -> Self {
        Pilihan::Baku(value)
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pilihan::Pilihan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Pendidikan {
    TidakSekolah,
    Sd,
    Smp,
    Sma,
    D1,
    D2,
    D3,
    S1,
    S2,
    S3,
}

impl Pendidikan {
    pub fn label(self) -> &'static str {
        match self {
            Pendidikan::TidakSekolah => "Tidak sekolah",
            Pendidikan::Sd => "SD / sederajat",
            Pendidikan::Smp => "SMP / sederajat",
            Pendidikan::Sma => "SMA / sederajat",
            Pendidikan::D1 => "D1",
            Pendidikan::D2 => "D2",
            Pendidikan::D3 => "D3",
            Pendidikan::S1 => "S1",
            Pendidikan::S2 => "S2",
            Pendidikan::S3 => "S3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Pekerjaan {
    TidakBekerja,
    Pns,
    TniPolri,
    KaryawanSwasta,
    Wiraswasta,
    Petani,
    Nelayan,
    Buruh,
    PedagangKecil,
}

impl Pekerjaan {
    pub fn label(self) -> &'static str {
        match self {
            Pekerjaan::TidakBekerja => "Tidak bekerja",
            Pekerjaan::Pns => "PNS",
            Pekerjaan::TniPolri => "TNI / Polri",
            Pekerjaan::KaryawanSwasta => "Karyawan swasta",
            Pekerjaan::Wiraswasta => "Wiraswasta",
            Pekerjaan::Petani => "Petani",
            Pekerjaan::Nelayan => "Nelayan",
            Pekerjaan::Buruh => "Buruh",
            Pekerjaan::PedagangKecil => "Pedagang kecil",
        }
    }
}

/// Monthly income bracket, as asked on the paper form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Penghasilan {
    #[serde(rename = "kurang_dari_500_ribu")]
    KurangDari500Ribu,
    #[serde(rename = "antara_500_ribu_sampai_1_juta")]
    Antara500RibuSampai1Juta,
    #[serde(rename = "antara_1_juta_sampai_2_juta")]
    Antara1JutaSampai2Juta,
    #[serde(rename = "lebih_dari_2_juta")]
    LebihDari2Juta,
}

impl Penghasilan {
    pub fn label(self) -> &'static str {
        match self {
            Penghasilan::KurangDari500Ribu => "Kurang dari Rp500.000",
            Penghasilan::Antara500RibuSampai1Juta => "Rp500.000 - Rp1.000.000",
            Penghasilan::Antara1JutaSampai2Juta => "Rp1.000.000 - Rp2.000.000",
            Penghasilan::LebihDari2Juta => "Lebih dari Rp2.000.000",
        }
    }
}

/// Father or mother section. The deceased flag relaxes the name requirement
/// and removes occupation, income, and phone from validation entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OrangTua {
    pub nama: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tahun_lahir: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pendidikan: Option<Pendidikan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pekerjaan: Option<Pilihan<Pekerjaan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penghasilan: Option<Penghasilan>,
    pub nomor_telepon: String,
    pub sudah_meninggal: bool,
}

/// Guardian section: same shape as a parent, nullable as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Wali {
    pub nama: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tahun_lahir: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pendidikan: Option<Pendidikan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pekerjaan: Option<Pilihan<Pekerjaan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penghasilan: Option<Penghasilan>,
    pub nomor_telepon: String,
}

impl Wali {
    /// True when no field of the section has been touched. An untouched
    /// guardian section reads as "not filled in", not as an invalid one.
    pub fn is_kosong(&self) -> bool {
        self.nama.trim().is_empty()
            && self.nik.is_none()
            && self.tahun_lahir.is_none()
            && self.pendidikan.is_none()
            && self.pekerjaan.is_none()
            && self.penghasilan.is_none()
            && self.nomor_telepon.trim().is_empty()
    }
}

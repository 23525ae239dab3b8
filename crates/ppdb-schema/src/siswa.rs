use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;

use crate::alamat::Alamat;
use crate::pilihan::Pilihan;

time::serde::format_description!(tanggal, Date, "[year]-[month]-[day]");

static TANGGAL_FMT: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Renders a date the way the wire format stores it (`YYYY-MM-DD`).
pub fn tanggal_ke_teks(tanggal: Date) -> String {
    tanggal.format(&TANGGAL_FMT).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum JenisKelamin {
    #[serde(rename = "L")]
    LakiLaki,
    #[serde(rename = "P")]
    Perempuan,
}

impl JenisKelamin {
    pub fn label(self) -> &'static str {
        match self {
            JenisKelamin::LakiLaki => "Laki-laki",
            JenisKelamin::Perempuan => "Perempuan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Agama {
    Islam,
    Kristen,
    Katolik,
    Hindu,
    Buddha,
    Khonghucu,
}

impl Agama {
    pub fn label(self) -> &'static str {
        match self {
            Agama::Islam => "Islam",
            Agama::Kristen => "Kristen",
            Agama::Katolik => "Katolik",
            Agama::Hindu => "Hindu",
            Agama::Buddha => "Buddha",
            Agama::Khonghucu => "Khonghucu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TempatTinggal {
    BersamaOrangTua,
    BersamaWali,
    Kos,
    Asrama,
    PantiAsuhan,
}

impl TempatTinggal {
    pub fn label(self) -> &'static str {
        match self {
            TempatTinggal::BersamaOrangTua => "Bersama orang tua",
            TempatTinggal::BersamaWali => "Bersama wali",
            TempatTinggal::Kos => "Kos",
            TempatTinggal::Asrama => "Asrama",
            TempatTinggal::PantiAsuhan => "Panti asuhan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Transportasi {
    JalanKaki,
    KendaraanPribadi,
    AntarJemputSekolah,
    AngkutanUmum,
    Ojek,
    Sepeda,
}

impl Transportasi {
    pub fn label(self) -> &'static str {
        match self {
            Transportasi::JalanKaki => "Jalan kaki",
            Transportasi::KendaraanPribadi => "Kendaraan pribadi",
            Transportasi::AntarJemputSekolah => "Antar jemput sekolah",
            Transportasi::AngkutanUmum => "Angkutan umum",
            Transportasi::Ojek => "Ojek",
            Transportasi::Sepeda => "Sepeda",
        }
    }
}

/// Student identity and address section of the registration record.
///
/// Every field starts out empty; required-ness is a validation concern so a
/// half-filled form stays representable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Siswa {
    pub nama: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis_kelamin: Option<JenisKelamin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nisn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<String>,
    pub tempat_lahir: String,
    #[serde(with = "tanggal::option", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub tanggal_lahir: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agama: Option<Pilihan<Agama>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anak_ke: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jumlah_saudara: Option<u8>,
    pub alamat: Alamat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempat_tinggal: Option<Pilihan<TempatTinggal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportasi: Option<Pilihan<Transportasi>>,
}

//! Data model and validation rules for PPDB (new student admission)
//! registration records.
//!
//! The crate is deliberately UI-free: it defines the typed
//! [`RegistrationRecord`] aggregate, per-field format validators, and the
//! aggregate schema used at submission time. Step-wise orchestration lives
//! in `ppdb-form`.

pub mod alamat;
pub mod field;
pub mod orang_tua;
pub mod pilihan;
pub mod record;
pub mod siswa;
pub mod validate;

pub use alamat::Alamat;
pub use field::{
    FieldError, kode_pos_valid, nik_valid, nisn_valid, rt_rw_valid, tahun_lahir_valid,
    telepon_valid,
};
pub use orang_tua::{OrangTua, Pekerjaan, Pendidikan, Penghasilan, Wali};
pub use pilihan::Pilihan;
pub use record::RegistrationRecord;
pub use siswa::{Agama, JenisKelamin, Siswa, TempatTinggal, Transportasi, tanggal_ke_teks};
pub use validate::{
    ParentRules, ValidationResult, validate_kontak, validate_orang_tua, validate_record,
    validate_siswa, validate_wali,
};

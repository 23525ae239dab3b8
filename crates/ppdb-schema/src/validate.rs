//! Aggregate validation: per-section rules plus the full submission schema.
//!
//! Validation failure is data, not an error: every function returns a
//! [`ValidationResult`] listing format violations and missing required
//! fields, addressed by JSON-pointer style paths into the wire format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alamat::Alamat;
use crate::field::{
    FieldError, kode_pos_valid, nik_valid, nisn_valid, rt_rw_valid, tahun_lahir_valid,
    telepon_valid,
};
use crate::orang_tua::{OrangTua, Wali};
use crate::pilihan::Pilihan;
use crate::record::RegistrationRecord;
use crate::siswa::Siswa;

/// Result returned by the record and section validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_required: Vec<String>,
}

/// Rule variant applied to a parent section.
///
/// Step validation uses `require_nama: true`: the name is the one field a
/// parent step insists on (unless the parent is deceased), everything else
/// is optional but format-checked when filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRules {
    pub require_nama: bool,
}

#[derive(Debug, Default)]
struct Report {
    errors: Vec<FieldError>,
    missing: Vec<String>,
}

impl Report {
    fn missing(&mut self, path: &str) {
        self.missing.push(path.to_string());
    }

    fn error(&mut self, path: &str, message: &str, code: &str) {
        self.errors.push(FieldError::new(path, message, code));
    }

    fn into_result(self) -> ValidationResult {
        ValidationResult {
            valid: self.errors.is_empty() && self.missing.is_empty(),
            errors: self.errors,
            missing_required: self.missing,
        }
    }
}

fn kosong(value: &str) -> bool {
    value.trim().is_empty()
}

fn wajib_teks(report: &mut Report, path: &str, value: &str) {
    if kosong(value) {
        report.missing(path);
    }
}

fn pilihan_rule<T>(report: &mut Report, path: &str, pilihan: Option<&Pilihan<T>>, wajib: bool) {
    match pilihan {
        None => {
            if wajib {
                report.missing(path);
            }
        }
        Some(pilihan) => {
            if pilihan.keterangan_kosong() {
                report.error(
                    path,
                    "keterangan untuk pilihan Lainnya wajib diisi",
                    "lainnya_kosong",
                );
            }
        }
    }
}

fn siswa_rules(siswa: &Siswa, report: &mut Report) {
    wajib_teks(report, "/siswa/nama", &siswa.nama);
    if siswa.jenis_kelamin.is_none() {
        report.missing("/siswa/jenisKelamin");
    }
    if let Some(nisn) = &siswa.nisn
        && !kosong(nisn)
        && !nisn_valid(nisn.trim())
    {
        report.error("/siswa/nisn", "NISN harus 10 digit angka", "nisn_format");
    }
    if let Some(nik) = &siswa.nik
        && !kosong(nik)
        && !nik_valid(nik.trim())
    {
        report.error("/siswa/nik", "NIK harus 16 digit angka", "nik_format");
    }
    wajib_teks(report, "/siswa/tempatLahir", &siswa.tempat_lahir);
    if siswa.tanggal_lahir.is_none() {
        report.missing("/siswa/tanggalLahir");
    }
    pilihan_rule(report, "/siswa/agama", siswa.agama.as_ref(), true);
    match siswa.anak_ke {
        None => report.missing("/siswa/anakKe"),
        Some(0) => report.error("/siswa/anakKe", "anak ke berapa minimal 1", "anak_ke_range"),
        Some(_) => {}
    }
    if siswa.jumlah_saudara.is_none() {
        report.missing("/siswa/jumlahSaudara");
    }
    alamat_rules(&siswa.alamat, report);
    pilihan_rule(
        report,
        "/siswa/tempatTinggal",
        siswa.tempat_tinggal.as_ref(),
        true,
    );
    pilihan_rule(
        report,
        "/siswa/transportasi",
        siswa.transportasi.as_ref(),
        true,
    );
}

fn alamat_rules(alamat: &Alamat, report: &mut Report) {
    wajib_teks(report, "/siswa/alamat/jalan", &alamat.jalan);
    if kosong(&alamat.rt_rw) {
        report.missing("/siswa/alamat/rtRw");
    } else if !rt_rw_valid(alamat.rt_rw.trim()) {
        report.error(
            "/siswa/alamat/rtRw",
            "format RT/RW harus angka/angka",
            "rt_rw_format",
        );
    }
    wajib_teks(report, "/siswa/alamat/kodeProvinsi", &alamat.kode_provinsi);
    wajib_teks(report, "/siswa/alamat/kodeKabupaten", &alamat.kode_kabupaten);
    wajib_teks(report, "/siswa/alamat/kodeKecamatan", &alamat.kode_kecamatan);
    wajib_teks(report, "/siswa/alamat/kodeDesa", &alamat.kode_desa);
    if kosong(&alamat.kode_pos) {
        report.missing("/siswa/alamat/kodePos");
    } else if !kode_pos_valid(alamat.kode_pos.trim()) {
        report.error(
            "/siswa/alamat/kodePos",
            "kode pos harus 5 digit angka",
            "kode_pos_format",
        );
    }
}

fn orang_tua_rules(prefix: &str, orang_tua: &OrangTua, rules: ParentRules, report: &mut Report) {
    if rules.require_nama && !orang_tua.sudah_meninggal {
        wajib_teks(report, &format!("{prefix}/nama"), &orang_tua.nama);
    }
    if let Some(nik) = &orang_tua.nik
        && !kosong(nik)
        && !nik_valid(nik.trim())
    {
        report.error(
            &format!("{prefix}/nik"),
            "NIK harus 16 digit angka",
            "nik_format",
        );
    }
    if let Some(tahun) = orang_tua.tahun_lahir
        && !tahun_lahir_valid(tahun)
    {
        report.error(
            &format!("{prefix}/tahunLahir"),
            "tahun lahir di luar rentang yang masuk akal",
            "tahun_lahir_range",
        );
    }
    // Occupation, income, and phone are shown as "almarhum/ah" for a
    // deceased parent and stay out of validation entirely.
    if !orang_tua.sudah_meninggal {
        pilihan_rule(
            report,
            &format!("{prefix}/pekerjaan"),
            orang_tua.pekerjaan.as_ref(),
            false,
        );
    }
}

fn wali_section_rules(wali: &Wali, report: &mut Report) {
    wajib_teks(report, "/wali/nama", &wali.nama);
    if let Some(nik) = &wali.nik
        && !kosong(nik)
        && !nik_valid(nik.trim())
    {
        report.error("/wali/nik", "NIK harus 16 digit angka", "nik_format");
    }
    if let Some(tahun) = wali.tahun_lahir
        && !tahun_lahir_valid(tahun)
    {
        report.error(
            "/wali/tahunLahir",
            "tahun lahir di luar rentang yang masuk akal",
            "tahun_lahir_range",
        );
    }
    pilihan_rule(report, "/wali/pekerjaan", wali.pekerjaan.as_ref(), false);
}

fn wali_rules(record: &RegistrationRecord, report: &mut Report) {
    let wajib = record.wali_wajib();
    match &record.wali {
        None => {
            if wajib {
                report.missing("/wali/nama");
            }
        }
        Some(wali) if wali.is_kosong() => {
            if wajib {
                report.missing("/wali/nama");
            }
        }
        Some(wali) => wali_section_rules(wali, report),
    }
}

fn kontak_rules(record: &RegistrationRecord, report: &mut Report) {
    let mut kandidat: Vec<(&str, &str)> = Vec::new();
    if !record.ayah.sudah_meninggal {
        kandidat.push(("/ayah/nomorTelepon", record.ayah.nomor_telepon.as_str()));
    }
    if !record.ibu.sudah_meninggal {
        kandidat.push(("/ibu/nomorTelepon", record.ibu.nomor_telepon.as_str()));
    }
    if let Some(wali) = &record.wali {
        kandidat.push(("/wali/nomorTelepon", wali.nomor_telepon.as_str()));
    }

    let mut ada_nomor = false;
    for (path, nomor) in kandidat {
        if kosong(nomor) {
            continue;
        }
        ada_nomor = true;
        if !telepon_valid(nomor.trim()) {
            report.error(path, "nomor telepon tidak valid", "telepon_format");
        }
    }
    if !ada_nomor {
        report.error(
            "/kontak",
            "minimal satu nomor telepon (ayah, ibu, atau wali) wajib diisi",
            "telepon_wajib",
        );
    }
}

/// Student + address section, including the active-"Lainnya" checks.
pub fn validate_siswa(siswa: &Siswa) -> ValidationResult {
    let mut report = Report::default();
    siswa_rules(siswa, &mut report);
    report.into_result()
}

/// Parent section under the given rule variant. `prefix` is the record
/// path of the section (`/ayah` or `/ibu`).
pub fn validate_orang_tua(
    prefix: &str,
    orang_tua: &OrangTua,
    rules: ParentRules,
) -> ValidationResult {
    let mut report = Report::default();
    orang_tua_rules(prefix, orang_tua, rules, &mut report);
    report.into_result()
}

/// Guardian section. Needs the whole record because the requirement is
/// contextual: an untouched section only fails when both parents are
/// deceased.
pub fn validate_wali(record: &RegistrationRecord) -> ValidationResult {
    let mut report = Report::default();
    wali_rules(record, &mut report);
    report.into_result()
}

/// Contact rule: at least one phone among father, mother, and guardian,
/// each well-formed when present. Deceased parents do not contribute
/// candidates.
pub fn validate_kontak(record: &RegistrationRecord) -> ValidationResult {
    let mut report = Report::default();
    kontak_rules(record, &mut report);
    report.into_result()
}

/// The full submission schema: every section plus the cross-field
/// refinements. Submission is all-or-nothing against this result.
pub fn validate_record(record: &RegistrationRecord) -> ValidationResult {
    let mut report = Report::default();
    siswa_rules(&record.siswa, &mut report);
    orang_tua_rules("/ayah", &record.ayah, ParentRules { require_nama: true }, &mut report);
    orang_tua_rules("/ibu", &record.ibu, ParentRules { require_nama: true }, &mut report);
    wali_rules(record, &mut report);
    kontak_rules(record, &mut report);
    report.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pilihan::Pilihan;
    use crate::siswa::{Agama, JenisKelamin, TempatTinggal, Transportasi};
    use time::macros::date;

    fn siswa_lengkap() -> Siswa {
        Siswa {
            nama: "MUHAMMAD ZIDAN AL-FARISI".into(),
            jenis_kelamin: Some(JenisKelamin::LakiLaki),
            nisn: Some("0123456789".into()),
            nik: Some("3524123456789001".into()),
            tempat_lahir: "Lamongan".into(),
            tanggal_lahir: Some(date!(2012 - 07 - 17)),
            agama: Some(Pilihan::Baku(Agama::Islam)),
            anak_ke: Some(1),
            jumlah_saudara: Some(2),
            alamat: Alamat {
                jalan: "Jl. Veteran No. 12".into(),
                dusun: Some("Krajan".into()),
                rt_rw: "3/12".into(),
                kode_provinsi: "35".into(),
                kode_kabupaten: "3524".into(),
                kode_kecamatan: "352411".into(),
                kode_desa: "3524110001".into(),
                kode_pos: "62212".into(),
            },
            tempat_tinggal: Some(Pilihan::Baku(TempatTinggal::BersamaOrangTua)),
            transportasi: Some(Pilihan::Baku(Transportasi::AntarJemputSekolah)),
        }
    }

    fn record_lengkap() -> RegistrationRecord {
        RegistrationRecord {
            siswa: siswa_lengkap(),
            ayah: OrangTua {
                nama: "AHMAD SUBAGIYO".into(),
                nik: Some("3524123456780002".into()),
                tahun_lahir: Some(1980),
                pendidikan: Some(crate::orang_tua::Pendidikan::Sma),
                pekerjaan: Some(Pilihan::Baku(crate::orang_tua::Pekerjaan::Wiraswasta)),
                penghasilan: Some(crate::orang_tua::Penghasilan::Antara1JutaSampai2Juta),
                nomor_telepon: "081234567890".into(),
                sudah_meninggal: false,
            },
            ibu: OrangTua {
                nama: "SITI MAIMUNAH".into(),
                nomor_telepon: String::new(),
                ..OrangTua::default()
            },
            wali: None,
        }
    }

    #[test]
    fn complete_record_passes_the_full_schema() {
        let result = validate_record(&record_lengkap());
        assert!(result.valid, "unexpected failures: {result:?}");
    }

    #[test]
    fn lainnya_without_detail_invalidates_the_student_section() {
        let mut siswa = siswa_lengkap();
        siswa.agama = Some(Pilihan::lainnya(""));
        let result = validate_siswa(&siswa);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.path == "/siswa/agama"));
    }

    #[test]
    fn parent_step_only_insists_on_the_name() {
        let ayah = OrangTua {
            nama: "AHMAD SUBAGIYO".into(),
            ..OrangTua::default()
        };
        let result = validate_orang_tua("/ayah", &ayah, ParentRules { require_nama: true });
        assert!(result.valid);

        let tanpa_nama = OrangTua::default();
        let result = validate_orang_tua("/ayah", &tanpa_nama, ParentRules { require_nama: true });
        assert_eq!(result.missing_required, vec!["/ayah/nama".to_string()]);
    }

    #[test]
    fn filled_optional_fields_still_obey_their_format() {
        let ayah = OrangTua {
            nama: "AHMAD".into(),
            nik: Some("12345".into()),
            ..OrangTua::default()
        };
        let result = validate_orang_tua("/ayah", &ayah, ParentRules { require_nama: true });
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.path == "/ayah/nik"));
    }

    #[test]
    fn deceased_parent_needs_neither_name_nor_occupation() {
        let almarhum = OrangTua {
            sudah_meninggal: true,
            ..OrangTua::default()
        };
        let result = validate_orang_tua("/ayah", &almarhum, ParentRules { require_nama: true });
        assert!(result.valid, "unexpected failures: {result:?}");
    }

    #[test]
    fn guardian_becomes_mandatory_when_both_parents_are_deceased() {
        let mut record = record_lengkap();
        record.ayah.sudah_meninggal = true;
        record.ibu.sudah_meninggal = true;
        record.wali = None;
        let result = validate_wali(&record);
        assert_eq!(result.missing_required, vec!["/wali/nama".to_string()]);

        record.wali = Some(Wali {
            nama: "BUDI HARTONO".into(),
            nomor_telepon: "081234500011".into(),
            ..Wali::default()
        });
        assert!(validate_wali(&record).valid);
    }

    #[test]
    fn empty_guardian_passes_when_not_contextually_required() {
        let mut record = record_lengkap();
        record.wali = Some(Wali::default());
        assert!(validate_wali(&record).valid);
    }

    #[test]
    fn partially_filled_guardian_requires_the_name() {
        let mut record = record_lengkap();
        record.wali = Some(Wali {
            nomor_telepon: "081234500011".into(),
            ..Wali::default()
        });
        let result = validate_wali(&record);
        assert_eq!(result.missing_required, vec!["/wali/nama".to_string()]);
    }

    #[test]
    fn contact_needs_at_least_one_phone() {
        let mut record = record_lengkap();
        record.ayah.nomor_telepon = String::new();
        record.ibu.nomor_telepon = String::new();
        let result = validate_kontak(&record);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.path == "/kontak"));
    }

    #[test]
    fn every_filled_phone_must_be_well_formed() {
        let mut record = record_lengkap();
        record.ibu.nomor_telepon = "not-a-number".into();
        let result = validate_kontak(&record);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.path == "/ibu/nomorTelepon"));
    }

    #[test]
    fn a_deceased_parents_phone_does_not_count_as_contact() {
        let mut record = record_lengkap();
        record.ibu.sudah_meninggal = true;
        record.ibu.nomor_telepon = "081111111111".into();
        record.ayah.nomor_telepon = String::new();
        let result = validate_kontak(&record);
        assert!(!result.valid, "only a deceased parent's phone was filled");
    }

    #[test]
    fn removing_the_fathers_name_fails_the_full_schema() {
        let mut record = record_lengkap();
        record.ayah.nama = String::new();
        let result = validate_record(&record);
        assert!(!result.valid);
        assert!(result.missing_required.contains(&"/ayah/nama".to_string()));
    }
}

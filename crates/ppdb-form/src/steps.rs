use ppdb_schema::{
    ParentRules, RegistrationRecord, ValidationResult, validate_kontak, validate_orang_tua,
    validate_siswa, validate_wali,
};
use serde::{Deserialize, Serialize};

/// Wizard steps in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Siswa,
    Ayah,
    Ibu,
    Wali,
    Kontak,
}

impl Step {
    pub const ALL: [Step; 5] = [Step::Siswa, Step::Ayah, Step::Ibu, Step::Wali, Step::Kontak];

    /// One-based position, as shown on the step chips.
    pub fn nomor(self) -> u8 {
        match self {
            Step::Siswa => 1,
            Step::Ayah => 2,
            Step::Ibu => 3,
            Step::Wali => 4,
            Step::Kontak => 5,
        }
    }

    pub fn dari_nomor(nomor: u8) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.nomor() == nomor)
    }

    pub fn judul(self) -> &'static str {
        match self {
            Step::Siswa => "Data Siswa",
            Step::Ayah => "Data Ayah",
            Step::Ibu => "Data Ibu",
            Step::Wali => "Data Wali",
            Step::Kontak => "Kontak",
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::dari_nomor(self.nomor() + 1)
    }

    pub fn prev(self) -> Option<Step> {
        self.nomor().checked_sub(1).and_then(Step::dari_nomor)
    }
}

/// The per-step aggregate rule: field validation for exactly the fields the
/// step owns, plus the step's own composed check.
pub fn validate_step(step: Step, record: &RegistrationRecord) -> ValidationResult {
    match step {
        Step::Siswa => validate_siswa(&record.siswa),
        Step::Ayah => {
            validate_orang_tua("/ayah", &record.ayah, ParentRules { require_nama: true })
        }
        Step::Ibu => validate_orang_tua("/ibu", &record.ibu, ParentRules { require_nama: true }),
        Step::Wali => validate_wali(record),
        Step::Kontak => validate_kontak(record),
    }
}

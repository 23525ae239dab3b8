//! Format rules for individual fields.

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static NIK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{16}$").expect("NIK pattern"));
static NISN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("NISN pattern"));
static KODE_POS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("kode pos pattern"));
static RT_RW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}/[0-9]{1,3}$").expect("RT/RW pattern"));
static TELEPON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^08[0-9]{8,11}$").expect("telepon pattern"));

/// NIK: national identity number, exactly 16 digits.
pub fn nik_valid(value: &str) -> bool {
    NIK_RE.is_match(value)
}

/// NISN: national student number, exactly 10 digits.
pub fn nisn_valid(value: &str) -> bool {
    NISN_RE.is_match(value)
}

/// Postal code, exactly 5 digits.
pub fn kode_pos_valid(value: &str) -> bool {
    KODE_POS_RE.is_match(value)
}

/// RT/RW pair, `digits/digits`.
pub fn rt_rw_valid(value: &str) -> bool {
    RT_RW_RE.is_match(value)
}

/// Indonesian mobile number: `08` followed by 8 to 11 digits.
pub fn telepon_valid(value: &str) -> bool {
    TELEPON_RE.is_match(value)
}

/// Birth year sanity range for parents and guardians.
pub fn tahun_lahir_valid(tahun: u16) -> bool {
    (1900..=2099).contains(&tahun)
}

/// Single field failure, addressed by a JSON-pointer style path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub path: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>, code: &str) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digit_rules_reject_wrong_lengths() {
        assert!(nik_valid("3524123456789001"));
        assert!(!nik_valid("352412345678900"));
        assert!(!nik_valid("35241234567890012"));
        assert!(nisn_valid("0123456789"));
        assert!(!nisn_valid("123456789"));
        assert!(kode_pos_valid("62212"));
        assert!(!kode_pos_valid("6221"));
    }

    #[test]
    fn rt_rw_requires_the_separator() {
        assert!(rt_rw_valid("3/12"));
        assert!(rt_rw_valid("003/012"));
        assert!(!rt_rw_valid("312"));
        assert!(!rt_rw_valid("3/12/1"));
        assert!(!rt_rw_valid("rt/rw"));
    }

    #[test]
    fn telepon_accepts_common_mobile_lengths() {
        assert!(telepon_valid("081234567890"));
        assert!(telepon_valid("0812345678"));
        assert!(!telepon_valid("62812345678"));
        assert!(!telepon_valid("08123"));
    }

    proptest! {
        #[test]
        fn any_sixteen_digit_string_is_a_valid_nik(digits in "[0-9]{16}") {
            prop_assert!(nik_valid(&digits));
        }

        #[test]
        fn non_digit_input_never_passes_nik(value in "[0-9]{0,15}[a-zA-Z ][0-9a-zA-Z ]{0,4}") {
            prop_assert!(!nik_valid(&value));
        }

        #[test]
        fn postal_codes_shorter_or_longer_than_five_fail(digits in "[0-9]{1,10}") {
            prop_assert_eq!(kode_pos_valid(&digits), digits.len() == 5);
        }
    }
}

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// Why a PESEL number was rejected. Checked in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeselError {
    #[error("Invalid PESEL format")]
    InvalidFormat,

    #[error("Invalid birth date")]
    InvalidDate,

    #[error("Invalid checksum")]
    InvalidChecksum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeselDetails {
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

/// Outcome of validating one PESEL number.
///
/// Either both decoded fields are present or an error is, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    outcome: Result<PeselDetails, PeselError>,
}

impl ValidationResult {
    pub fn valid_with(birth_date: NaiveDate, gender: Gender) -> Self {
        Self {
            outcome: Ok(PeselDetails { birth_date, gender }),
        }
    }

    pub fn invalid(error: PeselError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    pub fn valid(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.outcome.as_ref().ok().map(|d| d.birth_date)
    }

    pub fn gender(&self) -> Option<Gender> {
        self.outcome.as_ref().ok().map(|d| d.gender)
    }

    pub fn error(&self) -> Option<PeselError> {
        self.outcome.err()
    }

    pub fn into_result(self) -> Result<PeselDetails, PeselError> {
        self.outcome
    }
}

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    birth_date: Option<NaiveDate>,
    gender: Option<Gender>,
    error: Option<String>,
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ValidationReport {
            valid: self.valid(),
            birth_date: self.birth_date(),
            gender: self.gender(),
            error: self.error().map(|e| e.to_string()),
        }
        .serialize(serializer)
    }
}

/// Summary of one scramble run.
#[derive(Debug, Clone)]
pub struct ScrambleReport {
    /// Where the scrambled text was written, if it was written at all.
    pub output: Option<String>,
    pub words: usize,
    pub scrambled_words: usize,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_result_hides_decoded_fields() {
        let result = ValidationResult::invalid(PeselError::InvalidChecksum);

        assert!(!result.valid());
        assert_eq!(result.birth_date(), None);
        assert_eq!(result.gender(), None);
        assert_eq!(result.error(), Some(PeselError::InvalidChecksum));
    }

    #[test]
    fn test_serializes_to_flat_object() {
        let date = NaiveDate::from_ymd_opt(1944, 5, 14).unwrap();
        let json = serde_json::to_value(ValidationResult::valid_with(date, Gender::Male)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "valid": true,
                "birth_date": "1944-05-14",
                "gender": "Male",
                "error": null
            })
        );

        let json = serde_json::to_value(ValidationResult::invalid(PeselError::InvalidFormat)).unwrap();
        assert_eq!(json["error"], "Invalid PESEL format");
        assert_eq!(json["birth_date"], serde_json::Value::Null);
    }
}

use crate::domain::model::{Gender, PeselError, ValidationResult};
use chrono::NaiveDate;
use std::ops::RangeInclusive;

pub const PESEL_LENGTH: usize = 11;

const CHECKSUM_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Coded month range, century base, month offset. The ranges do not overlap.
const CENTURIES: [(RangeInclusive<u32>, i32, u32); 5] = [
    (1..=12, 1900, 0),
    (21..=32, 2000, 20),
    (41..=52, 2100, 40),
    (61..=72, 2200, 60),
    (81..=92, 1800, 80),
];

/// Exactly 11 ASCII digits, nothing else.
pub fn check_format(code: &str) -> bool {
    code.len() == PESEL_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

fn digit(code: &str, index: usize) -> u32 {
    u32::from(code.as_bytes()[index] - b'0')
}

fn two_digits(code: &str, index: usize) -> u32 {
    digit(code, index) * 10 + digit(code, index + 1)
}

/// Expected value of the check digit.
///
/// # Panics
///
/// Panics if `code` does not pass [`check_format`].
pub fn compute_checksum(code: &str) -> u8 {
    debug_assert!(check_format(code), "unchecked PESEL passed to compute_checksum");
    let total: u32 = CHECKSUM_WEIGHTS
        .iter()
        .enumerate()
        .map(|(i, weight)| digit(code, i) * weight)
        .sum();

    ((10 - total % 10) % 10) as u8
}

/// Even serial digit means female.
///
/// # Panics
///
/// Panics if `code` does not pass [`check_format`].
pub fn decode_gender(code: &str) -> Gender {
    debug_assert!(check_format(code), "unchecked PESEL passed to decode_gender");
    if digit(code, 9) % 2 == 0 {
        Gender::Female
    } else {
        Gender::Male
    }
}

/// Birth date encoded in the first six digits, or `None` when the month code
/// falls outside every century range or the date does not exist.
///
/// # Panics
///
/// Panics if `code` does not pass [`check_format`].
pub fn decode_birth_date(code: &str) -> Option<NaiveDate> {
    debug_assert!(check_format(code), "unchecked PESEL passed to decode_birth_date");
    let year_digits = two_digits(code, 0);
    let month_coded = two_digits(code, 2);
    let day = two_digits(code, 4);

    let (century, offset) = CENTURIES
        .iter()
        .find(|(range, _, _)| range.contains(&month_coded))
        .map(|(_, century, offset)| (*century, *offset))?;

    NaiveDate::from_ymd_opt(century + year_digits as i32, month_coded - offset, day)
}

/// Validates a PESEL number. Format is checked first, then the birth date,
/// then the check digit; the first failure is reported.
pub fn validate(code: &str) -> ValidationResult {
    match decode(code) {
        Ok(result) => result,
        Err(error) => {
            // The number itself is personal data and stays out of the logs.
            tracing::debug!(reason = %error, "Rejected PESEL number");
            ValidationResult::invalid(error)
        }
    }
}

fn decode(code: &str) -> Result<ValidationResult, PeselError> {
    if !check_format(code) {
        return Err(PeselError::InvalidFormat);
    }

    let birth_date = decode_birth_date(code).ok_or(PeselError::InvalidDate)?;

    if compute_checksum(code) != digit(code, 10) as u8 {
        return Err(PeselError::InvalidChecksum);
    }

    Ok(ValidationResult::valid_with(birth_date, decode_gender(code)))
}

//! CNPJ (Cadastro Nacional de Pessoa Jurídica) validation.
//!
//! A CNPJ is the Brazilian company taxpayer registry number: 14 digits,
//! where the last two are check digits. The algorithm is the same
//! mod-11 family as CPF, but over a 12-digit base with fixed weight
//! vectors instead of a simple descending sequence.
//!
//! # Example
//!
//! ```
//! use brdoc::cnpj;
//!
//! assert!(cnpj::is_valid("12.345.678/0001-95"));
//! assert!(!cnpj::is_valid("11.111.111/1111-11"));
//! ```

use crate::error::ValidationError;
use crate::normalize::{digit_values, is_repeated, normalize};

/// Number of digits in a CNPJ.
pub const CNPJ_DIGITS: usize = 14;

/// Weights for the first check digit, applied over the first 12 digits.
pub(crate) const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied over the first 13 digits
/// (including the first check digit).
pub(crate) const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Quickly checks whether a CNPJ is valid.
///
/// Accepts formatted or bare input. Never panics; any invalid input,
/// including the empty string, returns `false`.
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Validates a CNPJ, reporting the first rule that failed.
///
/// Rules are applied in the same order as [`crate::cpf::validate`]:
/// empty input, wrong length (≠ 14), non-digit guard, repeated digits,
/// check digits.
///
/// # Example
///
/// ```
/// use brdoc::{cnpj, ValidationError};
///
/// assert!(cnpj::validate("12.345.678/0001-95").is_ok());
/// assert_eq!(
///     cnpj::validate("12.345.678/0001-96"),
///     Err(ValidationError::InvalidCheckDigit)
/// );
/// ```
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let digits = normalize(input);

    if digits.len() != CNPJ_DIGITS {
        return Err(ValidationError::WrongLength {
            length: digits.len(),
            expected: CNPJ_DIGITS,
        });
    }

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NonDigit);
    }

    let values = digit_values(&digits);

    if is_repeated(&values) {
        return Err(ValidationError::RepeatedDigits);
    }

    if !check_digits_match(&values) {
        return Err(ValidationError::InvalidCheckDigit);
    }

    Ok(())
}

/// Verifies both check digits of a full 14-digit CNPJ.
fn check_digits_match(values: &[u8]) -> bool {
    check_digit(values, &FIRST_WEIGHTS) == values[12]
        && check_digit(values, &SECOND_WEIGHTS) == values[13]
}

/// Computes one CNPJ check digit from the leading digits and a weight vector.
///
/// Same mod-11 mapping as CPF: remainder below 2 gives 0, anything else
/// gives `11 - remainder`.
pub(crate) fn check_digit(values: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = values
        .iter()
        .zip(weights)
        .map(|(&d, &weight)| u32::from(d) * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

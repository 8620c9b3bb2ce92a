//! CPF (Cadastro de Pessoa Física) validation.
//!
//! A CPF is the Brazilian individual taxpayer registry number: 11 digits,
//! where the last two are check digits computed from the preceding digits
//! via a weighted sum modulo 11.
//!
//! # Example
//!
//! ```
//! use brdoc::cpf;
//!
//! assert!(cpf::is_valid("529.982.247-25"));
//! assert!(cpf::is_valid("52998224725"));
//! assert!(!cpf::is_valid("111.111.111-11"));
//! ```

use crate::error::ValidationError;
use crate::normalize::{digit_values, is_repeated, normalize};

/// Number of digits in a CPF.
pub const CPF_DIGITS: usize = 11;

/// Quickly checks whether a CPF is valid.
///
/// Accepts formatted or bare input. Never panics; any invalid input,
/// including the empty string, returns `false`.
///
/// # Example
///
/// ```
/// use brdoc::cpf;
///
/// assert!(cpf::is_valid("529.982.247-25"));
/// assert!(!cpf::is_valid("529.982.247-26"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Validates a CPF, reporting the first rule that failed.
///
/// Rules are applied in order:
/// 1. Empty or blank input → [`ValidationError::Empty`]
/// 2. Normalized length ≠ 11 → [`ValidationError::WrongLength`]
/// 3. Residual non-digit → [`ValidationError::NonDigit`]
/// 4. All digits identical → [`ValidationError::RepeatedDigits`]
/// 5. Check digits do not match → [`ValidationError::InvalidCheckDigit`]
///
/// # Example
///
/// ```
/// use brdoc::{cpf, ValidationError};
///
/// assert!(cpf::validate("529.982.247-25").is_ok());
/// assert_eq!(
///     cpf::validate("111.111.111-11"),
///     Err(ValidationError::RepeatedDigits)
/// );
/// ```
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let digits = normalize(input);

    if digits.len() != CPF_DIGITS {
        return Err(ValidationError::WrongLength {
            length: digits.len(),
            expected: CPF_DIGITS,
        });
    }

    // Normalization already strips non-digits; this guards the invariant
    // the checksum code depends on.
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

/// Verifies both check digits of a full 11-digit CPF.
fn check_digits_match(values: &[u8]) -> bool {
    check_digit(values, 10) == values[9] && check_digit(values, 11) == values[10]
}

/// Computes one CPF check digit.
///
/// `first_weight` is 10 for the first check digit (over digits 0..9) and
/// 11 for the second (over digits 0..10, including the first check digit).
/// Weights descend from `first_weight` to 2; the weighted sum is reduced
/// modulo 11 and mapped to a digit: remainder below 2 gives 0, anything
/// else gives `11 - remainder`.
pub(crate) fn check_digit(values: &[u8], first_weight: u32) -> u8 {
    let count = (first_weight - 1) as usize;
    let sum: u32 = values[..count]
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpfs() {
        assert!(is_valid("52998224725"));
        assert!(is_valid("529.982.247-25"));
        assert!(is_valid("12345678909"));
        assert!(is_valid("123.456.789-09"));
    }

    #[test]
    fn test_bad_check_digits() {
        assert_eq!(
            validate("52998224726"),
            Err(ValidationError::InvalidCheckDigit)
        );
        assert_eq!(
            validate("52998224735"),
            Err(ValidationError::InvalidCheckDigit)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
        assert_eq!(validate("   "), Err(ValidationError::Empty));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            validate("5299822472"),
            Err(ValidationError::WrongLength {
                length: 10,
                expected: 11
            })
        );
        assert_eq!(
            validate("529982247251"),
            Err(ValidationError::WrongLength {
                length: 12,
                expected: 11
            })
        );
        // Letters are stripped, so the failure surfaces as a length error
        assert_eq!(
            validate("abc"),
            Err(ValidationError::WrongLength {
                length: 0,
                expected: 11
            })
        );
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in b'0'..=b'9' {
            let cpf: String = std::iter::repeat(d as char).take(11).collect();
            assert_eq!(
                validate(&cpf),
                Err(ValidationError::RepeatedDigits),
                "CPF {} should be rejected",
                cpf
            );
        }
        assert_eq!(
            validate("111.111.111-11"),
            Err(ValidationError::RepeatedDigits)
        );
    }

    #[test]
    fn test_repeated_digits_would_pass_checksum() {
        // Every repeated-digit CPF satisfies the mod-11 formula: the weight
        // sums (54 and 65) are both congruent to -1 mod 11, so the expected
        // digit collapses back to the repeated digit itself. The explicit
        // rejection above is what keeps them out.
        for d in 0u8..=9 {
            let values = [d; 11];
            assert!(
                check_digits_match(&values),
                "repdigit {} unexpectedly fails the raw checksum",
                d
            );
        }
    }

    #[test]
    fn test_check_digit_computation() {
        // 529982247 -> check digits 2, 5
        let values = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];
        assert_eq!(check_digit(&values, 10), 2);
        assert_eq!(check_digit(&values, 11), 5);

        // 123456789 -> check digits 0, 9
        let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 9];
        assert_eq!(check_digit(&values, 10), 0);
        assert_eq!(check_digit(&values, 11), 9);
    }

    #[test]
    fn test_formatted_and_bare_agree() {
        assert_eq!(is_valid("529.982.247-25"), is_valid("52998224725"));
        assert_eq!(is_valid("529.982.247-26"), is_valid("52998224726"));
    }
}

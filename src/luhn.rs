//! Luhn checksum for payment card numbers.
//!
//! The Luhn ("mod 10") algorithm scans the digits right to left, doubling
//! every second digit and reducing doubled values above 9 by subtracting 9,
//! then requires the total to be divisible by 10. It detects every
//! single-digit transcription error.

/// Doubled-digit lookup: `DOUBLED[d]` is `2*d`, minus 9 when that exceeds 9.
const DOUBLED: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit sequence against the Luhn checksum.
///
/// The empty sequence is invalid.
///
/// # Example
///
/// ```
/// use brdoc::luhn;
///
/// let valid = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];
/// assert!(luhn::validate(&valid));
///
/// let invalid = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 7];
/// assert!(!luhn::validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && checksum(digits) % 10 == 0
}

/// Computes the Luhn running total for a sequence of digits.
///
/// The rightmost digit is taken as the check-digit position (not doubled);
/// doubling alternates from there leftward.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    let mut sum = 0;
    let mut double = false;

    for &digit in digits.iter().rev() {
        sum += if double {
            DOUBLED[digit as usize]
        } else {
            u32::from(digit)
        };
        double = !double;
    }

    sum
}

/// Computes the check digit that completes a partial number.
///
/// The partial number is everything except the final digit. In the completed
/// number the appended check digit occupies the undoubled rightmost slot, so
/// the alternation here starts with a doubled digit.
///
/// # Example
///
/// ```
/// use brdoc::luhn;
///
/// let partial = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6];
/// assert_eq!(luhn::check_digit(&partial), 6);
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0;
    let mut double = true;

    for &digit in digits.iter().rev() {
        sum += if double {
            DOUBLED[digit as usize]
        } else {
            u32::from(digit)
        };
        double = !double;
    }

    ((10 - sum % 10) % 10) as u8
}

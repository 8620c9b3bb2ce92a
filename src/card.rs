//! Payment card number validation.
//!
//! Combines normalization, length checks, the Luhn checksum, and brand
//! classification into a single pass. A successful validation yields a
//! [`ValidatedCard`] whose digits live in a fixed-size array that is
//! zeroed on drop; `Debug` and `Display` only ever show a masked number.

use std::fmt;

use zeroize::Zeroize;

use crate::brand::CardBrand;
use crate::detect::classify_digits;
use crate::error::ValidationError;
use crate::luhn;
use crate::normalize::{digit_values, normalize};

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 12;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Quickly checks whether a card number is valid.
///
/// Never panics; any invalid input, including the empty string, returns
/// `false`.
///
/// # Example
///
/// ```
/// use brdoc::card;
///
/// assert!(card::is_valid("4532015112830366"));
/// assert!(!card::is_valid("4532015112830367"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Validates a card number, reporting the first rule that failed.
///
/// Rules are applied in order:
/// 1. Empty or blank input → [`ValidationError::Empty`]
/// 2. No digits after stripping formatting → [`ValidationError::NonDigit`]
/// 3. Fewer than 12 digits → [`ValidationError::TooShort`]
/// 4. More than 19 digits → [`ValidationError::TooLong`]
/// 5. Luhn checksum failure → [`ValidationError::InvalidChecksum`]
/// 6. No brand table matches → [`ValidationError::UnknownBrand`]
///
/// # Example
///
/// ```
/// use brdoc::{card, CardBrand, ValidationError};
///
/// let validated = card::validate("4532 0151 1283 0366").unwrap();
/// assert_eq!(validated.brand(), CardBrand::Visa);
/// assert_eq!(validated.last_four(), "0366");
///
/// let err = card::validate("4532015112830367").unwrap_err();
/// assert_eq!(err, ValidationError::InvalidChecksum);
/// ```
pub fn validate(input: &str) -> Result<ValidatedCard, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let digits = normalize(input);

    if digits.is_empty() {
        return Err(ValidationError::NonDigit);
    }

    if digits.len() < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length: digits.len(),
            minimum: MIN_CARD_DIGITS,
        });
    }

    if digits.len() > MAX_CARD_DIGITS {
        return Err(ValidationError::TooLong {
            length: digits.len(),
            maximum: MAX_CARD_DIGITS,
        });
    }

    let values = digit_values(&digits);

    if !luhn::validate(&values) {
        return Err(ValidationError::InvalidChecksum);
    }

    let brand = classify_digits(&digits).ok_or(ValidationError::UnknownBrand)?;

    let mut fixed = [0u8; MAX_CARD_DIGITS];
    fixed[..values.len()].copy_from_slice(&values);

    Ok(ValidatedCard::new(brand, fixed, values.len() as u8))
}

/// A card number that passed all validation rules.
///
/// The digits are held in a fixed-size array zeroed on drop, and the
/// `Debug`/`Display` impls never expose the full number.
#[derive(Clone)]
pub struct ValidatedCard {
    brand: CardBrand,
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl ValidatedCard {
    #[inline]
    pub(crate) fn new(brand: CardBrand, digits: [u8; MAX_CARD_DIGITS], digit_count: u8) -> Self {
        Self {
            brand,
            digits,
            digit_count,
        }
    }

    /// Returns the classified card brand.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits, safe for logging and display.
    #[inline]
    pub fn last_four(&self) -> String {
        let len = self.length();
        let start = len.saturating_sub(4);
        self.digits[start..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the full card number as a bare digit string.
    ///
    /// This exposes the complete number; never log the result. Use
    /// [`masked`](Self::masked) for display.
    #[inline]
    pub fn number(&self) -> String {
        self.digits[..self.length()]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the number in canonical display form, grouped in fours.
    #[inline]
    pub fn formatted(&self) -> String {
        crate::format::format_card(&self.number())
    }

    /// Returns the number masked for safe display: first six and last four
    /// digits visible, the rest replaced by `*`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(&self.number())
    }
}

impl fmt::Debug for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCard")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}

impl Drop for ValidatedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

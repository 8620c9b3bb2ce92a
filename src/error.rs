//! Error types shared by the CPF, CNPJ, and card validators.
//!
//! Each validator reports the first rule that failed, in the fixed order
//! documented on its `validate` function.

use std::fmt;

/// Errors that can occur while validating a document or card number.
///
/// `is_valid` wrappers discard this; `validate` functions return the first
/// applicable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// The input string was empty or contained only whitespace.
    Empty,

    /// After stripping formatting, the digit count does not match the
    /// document's fixed length (11 for CPF, 14 for CNPJ).
    WrongLength {
        /// The actual number of digits found.
        length: usize,
        /// The number of digits the document requires.
        expected: usize,
    },

    /// The input contains no usable digits.
    NonDigit,

    /// The card number has too few digits.
    TooShort {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum required digits (12).
        minimum: usize,
    },

    /// The card number has too many digits.
    TooLong {
        /// The actual number of digits provided.
        length: usize,
        /// The maximum allowed digits (19).
        maximum: usize,
    },

    /// Every digit in the document is identical.
    ///
    /// Repeated-digit CPFs and CNPJs are rejected outright, even where the
    /// check-digit formula alone would accept them.
    RepeatedDigits,

    /// One of the two mod-11 check digits does not match its computed value.
    InvalidCheckDigit,

    /// The Luhn checksum over the card number failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum,

    /// The card's prefix and length do not match any known brand.
    UnknownBrand,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "input is empty"),

            Self::WrongLength { length, expected } => {
                write!(f, "wrong length: got {} digits, expected {}", length, expected)
            }

            Self::NonDigit => write!(f, "input contains no digits"),

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }

            Self::RepeatedDigits => {
                write!(f, "all digits are identical - known invalid pattern")
            }

            Self::InvalidCheckDigit => {
                write!(f, "check digits do not match the computed values")
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }

            Self::UnknownBrand => {
                write!(f, "unrecognized card brand - check the card number prefix")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

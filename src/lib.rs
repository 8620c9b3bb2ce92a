//! # brdoc
//!
//! Validation and canonical formatting for Brazilian taxpayer documents
//! (CPF, CNPJ) and payment card numbers.
//!
//! All validators are pure functions over strings: they accept formatted or
//! bare input, strip punctuation, and check the real arithmetic - the mod-11
//! check digits for CPF/CNPJ and the Luhn checksum plus prefix/length brand
//! classification for cards. Nothing here talks to a registry; a document
//! can be arithmetically valid without being issued to anyone.
//!
//! ## Quick start
//!
//! ```rust
//! use brdoc::{cpf, cnpj, card, classify_brand, CardBrand};
//!
//! // CPF: 11 digits, two mod-11 check digits
//! assert!(cpf::is_valid("529.982.247-25"));
//! assert!(!cpf::is_valid("111.111.111-11")); // repeated digits
//!
//! // CNPJ: 14 digits, distinct weight vectors
//! assert!(cnpj::is_valid("12.345.678/0001-95"));
//!
//! // Cards: Luhn checksum plus brand classification
//! let validated = card::validate("4532 0151 1283 0366").unwrap();
//! assert_eq!(validated.brand(), CardBrand::Visa);
//! assert_eq!(validated.last_four(), "0366");
//! assert_eq!(classify_brand("378282246310005"), Some(CardBrand::Amex));
//! ```
//!
//! ## Detailed errors
//!
//! `is_valid` gives a yes/no answer; `validate` reports the first rule that
//! failed:
//!
//! ```rust
//! use brdoc::{cpf, ValidationError};
//!
//! assert_eq!(cpf::validate(""), Err(ValidationError::Empty));
//! assert_eq!(
//!     cpf::validate("111.111.111-11"),
//!     Err(ValidationError::RepeatedDigits)
//! );
//! assert_eq!(
//!     cpf::validate("529.982.247-26"),
//!     Err(ValidationError::InvalidCheckDigit)
//! );
//! ```
//!
//! ## Formatting
//!
//! ```rust
//! use brdoc::format::{format_cpf, format_cnpj, format_card};
//!
//! assert_eq!(format_cpf("12345678909"), "123.456.789-09");
//! assert_eq!(format_cnpj("12345678000195"), "12.345.678/0001-95");
//! assert_eq!(format_card("4532015112830366"), "4532 0151 1283 0366");
//! ```
//!
//! ## Test fixtures
//!
//! Deterministic generators are always available; random ones live behind
//! the `generate` feature:
//!
//! ```rust
//! use brdoc::{cpf, generate::generate_cpf_deterministic};
//!
//! assert!(cpf::is_valid(&generate_cpf_deterministic()));
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `generate` | Random document/card generation (pulls `rand`) |
//! | `serde` | `Serialize`/`Deserialize` for [`CardBrand`] and [`ValidationError`] |
//!
//! ## Security
//!
//! Validated card numbers are held in fixed-size arrays zeroed on drop, and
//! their `Debug`/`Display` output is always masked.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod card;
pub mod cnpj;
pub mod cpf;
pub mod detect;
pub mod error;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod normalize;

// Re-export main types at crate root
pub use brand::CardBrand;
pub use card::{ValidatedCard, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use cnpj::CNPJ_DIGITS;
pub use cpf::CPF_DIGITS;
pub use detect::classify_brand;
pub use error::ValidationError;
pub use normalize::normalize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_literals() {
        assert!(cpf::is_valid("529.982.247-25"));
        assert!(!cpf::is_valid("111.111.111-11"));
        assert!(cnpj::is_valid("12.345.678/0001-95"));
        assert!(card::is_valid("4532015112830366"));
        assert_eq!(
            classify_brand("4532015112830366"),
            Some(CardBrand::Visa)
        );
        assert!(!card::is_valid("4532015112830367"));
        assert_eq!(format::format_cpf("12345678909"), "123.456.789-09");
    }

    #[test]
    fn test_validators_are_independent() {
        // A valid CPF is not a valid card and vice versa
        assert!(cpf::is_valid("52998224725"));
        assert!(!card::is_valid("52998224725"));
        assert!(card::is_valid("4532015112830366"));
        assert!(!cpf::is_valid("4532015112830366"));
    }

    #[test]
    fn test_lengths() {
        assert_eq!(CPF_DIGITS, 11);
        assert_eq!(CNPJ_DIGITS, 14);
        assert_eq!(MIN_CARD_DIGITS, 12);
        assert_eq!(MAX_CARD_DIGITS, 19);
    }
}

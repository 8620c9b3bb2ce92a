//! Canonical display formatting for CPF, CNPJ, and card numbers.
//!
//! Formatting is pure rendering and never fails: input whose digit count
//! does not match the document type is returned unchanged, and the empty
//! string maps to the empty string. No validation is performed - an
//! arithmetically invalid CPF still formats.
//!
//! # Conventions
//!
//! - **CPF**: `XXX.XXX.XXX-XX`
//! - **CNPJ**: `XX.XXX.XXX/XXXX-XX`
//! - **Card**: digits grouped in fours, separated by single spaces

use crate::card::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::cnpj::CNPJ_DIGITS;
use crate::cpf::CPF_DIGITS;
use crate::normalize::normalize;

/// Formats a CPF as `XXX.XXX.XXX-XX`.
///
/// Anything that does not normalize to exactly 11 digits is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use brdoc::format::format_cpf;
///
/// assert_eq!(format_cpf("12345678909"), "123.456.789-09");
/// assert_eq!(format_cpf("123.456.789-09"), "123.456.789-09");
/// assert_eq!(format_cpf("12345"), "12345");
/// assert_eq!(format_cpf(""), "");
/// ```
pub fn format_cpf(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let digits = normalize(input);
    if digits.len() != CPF_DIGITS {
        return input.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Formats a CNPJ as `XX.XXX.XXX/XXXX-XX`.
///
/// Anything that does not normalize to exactly 14 digits is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use brdoc::format::format_cnpj;
///
/// assert_eq!(format_cnpj("12345678000195"), "12.345.678/0001-95");
/// assert_eq!(format_cnpj(""), "");
/// ```
pub fn format_cnpj(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let digits = normalize(input);
    if digits.len() != CNPJ_DIGITS {
        return input.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

/// Formats a card number in groups of four digits separated by spaces.
///
/// Anything outside the 12-19 digit card range is returned unchanged.
///
/// # Example
///
/// ```
/// use brdoc::format::format_card;
///
/// assert_eq!(format_card("4532015112830366"), "4532 0151 1283 0366");
/// assert_eq!(format_card("30569309025904"), "3056 9309 0259 04");
/// assert_eq!(format_card("123"), "123");
/// ```
pub fn format_card(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let digits = normalize(input);
    if digits.len() < MIN_CARD_DIGITS || digits.len() > MAX_CARD_DIGITS {
        return input.to_string();
    }

    let mut formatted = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("12345678909"), "123.456.789-09");
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn test_format_cpf_already_formatted() {
        assert_eq!(format_cpf("123.456.789-09"), "123.456.789-09");
        // Partial punctuation gets rebuilt
        assert_eq!(format_cpf("123456.78909"), "123.456.789-09");
    }

    #[test]
    fn test_format_cpf_wrong_length_unchanged() {
        assert_eq!(format_cpf("12345"), "12345");
        assert_eq!(format_cpf("123456789012"), "123456789012");
        assert_eq!(format_cpf("abc"), "abc");
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(format_cnpj("12345678000195"), "12.345.678/0001-95");
        assert_eq!(format_cnpj("12.345.678/0001-95"), "12.345.678/0001-95");
    }

    #[test]
    fn test_format_cnpj_wrong_length_unchanged() {
        assert_eq!(format_cnpj("123456780001"), "123456780001");
        assert_eq!(format_cnpj("not a cnpj"), "not a cnpj");
    }

    #[test]
    fn test_format_card() {
        assert_eq!(format_card("4532015112830366"), "4532 0151 1283 0366");
        assert_eq!(format_card("378282246310005"), "3782 8224 6310 005");
        assert_eq!(format_card("4111111111111111111"), "4111 1111 1111 1111 111");
    }

    #[test]
    fn test_format_card_out_of_range_unchanged() {
        assert_eq!(format_card("123"), "123");
        assert_eq!(format_card("41111111111111111111"), "41111111111111111111");
    }

    #[test]
    fn test_empty_maps_to_empty() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cnpj(""), "");
        assert_eq!(format_card(""), "");
    }

    #[test]
    fn test_format_is_idempotent() {
        let cpf = format_cpf("12345678909");
        assert_eq!(format_cpf(&cpf), cpf);

        let cnpj = format_cnpj("12345678000195");
        assert_eq!(format_cnpj(&cnpj), cnpj);

        let card = format_card("4532015112830366");
        assert_eq!(format_card(&card), card);
    }

    #[test]
    fn test_round_trip_with_normalize() {
        assert_eq!(normalize(&format_cpf("12345678909")), "12345678909");
        assert_eq!(
            normalize(&format_cnpj("12345678000195")),
            "12345678000195"
        );
        assert_eq!(
            normalize(&format_card("4532015112830366")),
            "4532015112830366"
        );
    }
}

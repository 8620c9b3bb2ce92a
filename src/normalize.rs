//! Input normalization shared by every validator.
//!
//! All validators accept formatted input (`"529.982.247-25"`,
//! `"4111 1111 1111 1111"`) and strip it down to bare digits before any
//! analysis. Normalization never rejects anything; validity is judged
//! downstream.

/// Removes every character outside `0`-`9` from the input.
///
/// The result may be empty. Punctuation, letters, and whitespace are all
/// dropped silently.
///
/// # Example
///
/// ```
/// use brdoc::normalize::normalize;
///
/// assert_eq!(normalize("529.982.247-25"), "52998224725");
/// assert_eq!(normalize("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(normalize("abc"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Converts a normalized digit string into numeric values (0-9).
///
/// Callers must pass output of [`normalize`]; non-digit bytes would wrap.
pub(crate) fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

/// Returns true if every digit in the slice equals the first one.
///
/// Repeated-digit sequences ("00000000000" through "99999999999") are the
/// known-invalid set for CPF and CNPJ.
pub(crate) fn is_repeated(values: &[u8]) -> bool {
    match values.first() {
        Some(&first) => values.iter().all(|&d| d == first),
        None => false,
    }
}

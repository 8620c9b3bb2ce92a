//! Masked rendering of card numbers for safe display.

use crate::normalize::normalize;

/// Shown when a number is too short to mask meaningfully.
const FULL_MASK: &str = "**** **** **** ****";

/// Masks a card number for display, keeping the first six and last four
/// digits visible: `453201 ****** 0366`.
///
/// Inputs with fewer than 8 digits cannot expose a safe window and map to a
/// fully masked placeholder.
///
/// # Example
///
/// ```
/// use brdoc::mask::mask_card;
///
/// assert_eq!(mask_card("4532015112830366"), "453201 ****** 0366");
/// assert_eq!(mask_card("1234567"), "**** **** **** ****");
/// ```
pub fn mask_card(input: &str) -> String {
    let digits = normalize(input);

    if digits.len() < 8 {
        return FULL_MASK.to_string();
    }

    let first_six = &digits[..6];
    let last_four = &digits[digits.len() - 4..];
    let stars = "*".repeat(digits.len().saturating_sub(10));

    format!("{} {} {}", first_six, stars, last_four)
}

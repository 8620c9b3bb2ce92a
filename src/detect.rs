//! Card brand classification from prefix and length.
//!
//! A brand matches when the digit count appears in its length table AND the
//! number starts with one of its prefixes. Brands are tried in
//! [`CardBrand::PRIORITY`] order and the first match wins; the tables are
//! kept mutually exclusive, so the order is only a tie-break.

use crate::brand::CardBrand;
use crate::normalize::normalize;

/// Classifies a card number into a brand.
///
/// Formatting is stripped first. Returns `None` when no brand's prefix and
/// length tables match. Classification is purely structural; it does not
/// run the Luhn check.
///
/// # Example
///
/// ```
/// use brdoc::{classify_brand, CardBrand};
///
/// assert_eq!(classify_brand("4532015112830366"), Some(CardBrand::Visa));
/// assert_eq!(classify_brand("3782 822463 10005"), Some(CardBrand::Amex));
/// assert_eq!(classify_brand("9999999999999999"), None);
/// ```
pub fn classify_brand(input: &str) -> Option<CardBrand> {
    let digits = normalize(input);
    classify_digits(&digits)
}

/// Classifies an already-normalized digit string.
pub(crate) fn classify_digits(digits: &str) -> Option<CardBrand> {
    if digits.is_empty() {
        return None;
    }

    CardBrand::PRIORITY
        .into_iter()
        .find(|brand| matches_brand(digits, *brand))
}

/// Tests one brand's structural rules: length first, then prefix.
fn matches_brand(digits: &str, brand: CardBrand) -> bool {
    brand.is_valid_length(digits.len())
        && brand
            .prefixes()
            .iter()
            .any(|prefix| digits.starts_with(prefix))
}

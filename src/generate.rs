//! Generation of valid documents and card numbers for testing.
//!
//! Random generators require the `generate` feature (which enables the
//! `rand` dependency). Deterministic variants are always available and
//! produce the same output for the same input, which keeps fixture data
//! stable across runs.
//!
//! # Example
//!
//! ```
//! use brdoc::generate::generate_cpf_deterministic;
//! use brdoc::cpf;
//!
//! let fixture = generate_cpf_deterministic();
//! assert!(cpf::is_valid(&fixture));
//! ```
//!
//! Generated values are mathematically valid but synthetic; they do not
//! correspond to registered taxpayers or real card accounts.

use crate::brand::CardBrand;
use crate::cnpj;
use crate::cpf;
use crate::format::{format_cnpj, format_cpf};
use crate::luhn;
use crate::normalize::is_repeated;

#[cfg(feature = "generate")]
use rand::Rng;

/// Attempt budget before a random generator falls back to nudging a digit.
/// An adversarial RNG could return repeated digits forever; the loop is
/// bounded so generation always terminates.
#[cfg(feature = "generate")]
const MAX_ATTEMPTS: usize = 16;

/// Prefix used when generating a card for each brand.
const fn generation_prefix(brand: CardBrand) -> &'static [u8] {
    match brand {
        CardBrand::Visa => &[4],
        CardBrand::Mastercard => &[5, 5],
        CardBrand::Amex => &[3, 4],
        CardBrand::DinersClub => &[3, 6],
        CardBrand::Discover => &[6, 0, 1, 1],
        CardBrand::Jcb => &[3, 5, 2, 8],
    }
}

/// Length used when generating a card for each brand.
const fn generation_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::Amex => 15,
        CardBrand::DinersClub => 14,
        _ => 16,
    }
}

fn values_to_string(values: &[u8]) -> String {
    values.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Appends both CPF check digits to a 9-digit base.
fn complete_cpf(mut values: Vec<u8>) -> Vec<u8> {
    let first = cpf::check_digit(&values, 10);
    values.push(first);
    let second = cpf::check_digit(&values, 11);
    values.push(second);
    values
}

/// Appends both CNPJ check digits to a 12-digit base.
fn complete_cnpj(mut values: Vec<u8>) -> Vec<u8> {
    let first = cnpj::check_digit(&values, &cnpj::FIRST_WEIGHTS);
    values.push(first);
    let second = cnpj::check_digit(&values, &cnpj::SECOND_WEIGHTS);
    values.push(second);
    values
}

/// Generates a random valid CPF, formatted as `XXX.XXX.XXX-XX`.
///
/// Requires the `generate` feature.
///
/// # Example
///
/// ```
/// use brdoc::{cpf, generate::generate_cpf};
///
/// let generated = generate_cpf();
/// assert!(cpf::is_valid(&generated));
/// ```
#[cfg(feature = "generate")]
pub fn generate_cpf() -> String {
    generate_cpf_with_rng(&mut rand::thread_rng())
}

/// Generates a random valid CPF using the provided RNG.
///
/// Useful for reproducible fixtures with a seeded RNG. The result is never
/// a repeated-digit sequence: the base is re-drawn a bounded number of
/// times and, failing that, one digit is nudged.
#[cfg(feature = "generate")]
pub fn generate_cpf_with_rng<R: Rng>(rng: &mut R) -> String {
    let mut values = Vec::new();
    for _ in 0..MAX_ATTEMPTS {
        let base: Vec<u8> = (0..9).map(|_| rng.gen_range(0..10)).collect();
        values = complete_cpf(base);
        if !is_repeated(&values) {
            return format_cpf(&values_to_string(&values));
        }
    }
    values[8] = (values[8] + 1) % 10;
    values.truncate(9);
    format_cpf(&values_to_string(&complete_cpf(values)))
}

/// Generates the same valid CPF on every call: `123.456.789-09`.
///
/// Available without the `generate` feature.
pub fn generate_cpf_deterministic() -> String {
    let values = complete_cpf(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    format_cpf(&values_to_string(&values))
}

/// Generates a random valid CNPJ, formatted as `XX.XXX.XXX/XXXX-XX`.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cnpj() -> String {
    generate_cnpj_with_rng(&mut rand::thread_rng())
}

/// Generates a random valid CNPJ using the provided RNG.
#[cfg(feature = "generate")]
pub fn generate_cnpj_with_rng<R: Rng>(rng: &mut R) -> String {
    let mut values = Vec::new();
    for _ in 0..MAX_ATTEMPTS {
        let base: Vec<u8> = (0..12).map(|_| rng.gen_range(0..10)).collect();
        values = complete_cnpj(base);
        if !is_repeated(&values) {
            return format_cnpj(&values_to_string(&values));
        }
    }
    values[11] = (values[11] + 1) % 10;
    values.truncate(12);
    format_cnpj(&values_to_string(&complete_cnpj(values)))
}

/// Generates the same valid CNPJ on every call: `12.345.678/0001-95`.
///
/// Available without the `generate` feature.
pub fn generate_cnpj_deterministic() -> String {
    let values = complete_cnpj(vec![1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 1]);
    format_cnpj(&values_to_string(&values))
}

/// Generates a random valid card number for the given brand.
///
/// Returns bare digits; apply [`crate::format::format_card`] for display.
/// Requires the `generate` feature.
///
/// # Example
///
/// ```
/// use brdoc::{card, classify_brand, CardBrand, generate::generate_card};
///
/// let number = generate_card(CardBrand::Visa);
/// assert!(card::is_valid(&number));
/// assert_eq!(classify_brand(&number), Some(CardBrand::Visa));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    generate_card_with_rng(brand, &mut rand::thread_rng())
}

/// Generates a random valid card number using the provided RNG.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(brand: CardBrand, rng: &mut R) -> String {
    let length = generation_length(brand);
    let mut values = generation_prefix(brand).to_vec();

    while values.len() < length - 1 {
        values.push(rng.gen_range(0..10));
    }
    values.push(luhn::check_digit(&values));

    values_to_string(&values)
}

/// Generates the same valid card number for a brand on every call.
///
/// Fills the digits after the brand prefix with zeros and appends the Luhn
/// check digit. Available without the `generate` feature.
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    let length = generation_length(brand);
    let mut values = generation_prefix(brand).to_vec();

    values.resize(length - 1, 0);
    values.push(luhn::check_digit(&values));

    values_to_string(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, classify_brand, cnpj, cpf};

    #[test]
    fn test_deterministic_cpf() {
        let generated = generate_cpf_deterministic();
        assert_eq!(generated, "123.456.789-09");
        assert!(cpf::is_valid(&generated));
        assert_eq!(generated, generate_cpf_deterministic());
    }

    #[test]
    fn test_deterministic_cnpj() {
        let generated = generate_cnpj_deterministic();
        assert_eq!(generated, "12.345.678/0001-95");
        assert!(cnpj::is_valid(&generated));
    }

    #[test]
    fn test_deterministic_cards_valid_and_classified() {
        for brand in CardBrand::PRIORITY {
            let number = generate_card_deterministic(brand);
            assert!(card::is_valid(&number), "{:?} card invalid: {}", brand, number);
            assert_eq!(
                classify_brand(&number),
                Some(brand),
                "wrong brand for {}",
                number
            );
        }
    }

    #[test]
    fn test_deterministic_card_lengths() {
        assert_eq!(generate_card_deterministic(CardBrand::Visa).len(), 16);
        assert_eq!(generate_card_deterministic(CardBrand::Amex).len(), 15);
        assert_eq!(generate_card_deterministic(CardBrand::DinersClub).len(), 14);
    }

    #[cfg(feature = "generate")]
    mod random_tests {
        use super::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        #[test]
        fn test_generated_cpfs_are_valid() {
            for _ in 0..100 {
                let generated = generate_cpf();
                assert!(cpf::is_valid(&generated), "invalid CPF: {}", generated);
            }
        }

        #[test]
        fn test_generated_cnpjs_are_valid() {
            for _ in 0..100 {
                let generated = generate_cnpj();
                assert!(cnpj::is_valid(&generated), "invalid CNPJ: {}", generated);
            }
        }

        #[test]
        fn test_generated_cards_valid_for_all_brands() {
            for brand in CardBrand::PRIORITY {
                for _ in 0..20 {
                    let number = generate_card(brand);
                    assert!(card::is_valid(&number), "invalid card: {}", number);
                    assert_eq!(classify_brand(&number), Some(brand));
                }
            }
        }

        #[test]
        fn test_seeded_generation_is_reproducible() {
            let a = generate_cpf_with_rng(&mut StdRng::seed_from_u64(7));
            let b = generate_cpf_with_rng(&mut StdRng::seed_from_u64(7));
            assert_eq!(a, b);

            let a = generate_card_with_rng(CardBrand::Visa, &mut StdRng::seed_from_u64(7));
            let b = generate_card_with_rng(CardBrand::Visa, &mut StdRng::seed_from_u64(7));
            assert_eq!(a, b);
        }

        #[test]
        fn test_generated_cpf_is_formatted() {
            let generated = generate_cpf();
            assert_eq!(generated.len(), 14);
            assert_eq!(&generated[3..4], ".");
            assert_eq!(&generated[7..8], ".");
            assert_eq!(&generated[11..12], "-");
        }
    }
}

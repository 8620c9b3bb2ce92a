//! Fuzz target for card validation and brand classification.

#![no_main]

use brdoc::{card, classify_brand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = card::validate(data);
    assert_eq!(card::is_valid(data), result.is_ok());

    // A validated card always carries the brand the classifier reports
    if let Ok(validated) = result {
        assert_eq!(classify_brand(data), Some(validated.brand()));
        assert_eq!(validated.last_four().len(), 4);
    }
});

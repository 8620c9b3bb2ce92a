//! Fuzz target for the Luhn checksum.
//!
//! Checks that check-digit generation always produces a digit that
//! completes the sequence.

#![no_main]

use brdoc::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp bytes to the digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    if digits.is_empty() {
        return;
    }

    let _ = luhn::validate(&digits);

    let check = luhn::check_digit(&digits);
    assert!(check <= 9);

    let mut completed = digits.clone();
    completed.push(check);
    assert!(luhn::validate(&completed));
});

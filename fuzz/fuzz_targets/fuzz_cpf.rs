//! Fuzz target for CPF validation.
//!
//! Checks that validation never panics and that `is_valid` agrees with
//! `validate` on arbitrary input.

#![no_main]

use brdoc::cpf;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = cpf::validate(data);
    assert_eq!(cpf::is_valid(data), result.is_ok());

    // Formatting a valid CPF must not change its validity
    if result.is_ok() {
        let formatted = brdoc::format::format_cpf(data);
        assert!(cpf::is_valid(&formatted));
    }
});

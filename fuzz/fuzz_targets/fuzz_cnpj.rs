//! Fuzz target for CNPJ validation.

#![no_main]

use brdoc::cnpj;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = cnpj::validate(data);
    assert_eq!(cnpj::is_valid(data), result.is_ok());

    if result.is_ok() {
        let formatted = brdoc::format::format_cnpj(data);
        assert!(cnpj::is_valid(&formatted));
    }
});

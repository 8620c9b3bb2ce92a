//! Fuzz target for formatting and normalization.
//!
//! Formatting never panics, is idempotent, and round-trips through
//! normalization for well-sized input.

#![no_main]

use brdoc::format::{format_card, format_cnpj, format_cpf};
use brdoc::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = normalize(data);

    for format in [
        format_cpf as fn(&str) -> String,
        format_cnpj as fn(&str) -> String,
        format_card as fn(&str) -> String,
    ] {
        let once = format(data);
        let twice = format(&once);

        // Idempotence holds whenever the first pass produced canonical form,
        // i.e. whenever the digit count matched the document type
        if normalize(&once) == digits {
            assert_eq!(twice, once);
        }
    }

    assert_eq!(normalize(&format_cpf(&digits)), digits);
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Fuzz filename matching - this should never panic
        if let Ok(pattern) = iconpack::IconNamePattern::new("svg") {
            let _ = pattern.clean_name(name);
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use varcase::{FixConfig, check_fixed, dump, fix_tokens};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz dump decoding
        if let Ok(mut tokens) = dump::from_json(s) {
            // If decoding succeeds, fuzz the fixer
            let config = FixConfig::new().with_allow_risky(true);
            let len = tokens.len();
            if fix_tokens(&mut tokens, &config).is_ok() {
                assert_eq!(tokens.len(), len);
                assert_eq!(check_fixed(&tokens, &config).ok(), Some(true));
            }
        }
    }
});

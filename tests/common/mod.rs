//! Shared helpers for integration tests.

#![allow(dead_code)]

use varcase::FixConfig;

pub use varcase_syntax::test_support::php;

pub fn risky() -> FixConfig {
    FixConfig::new().with_allow_risky(true)
}

/// Fix `parts` with risky fixers allowed and render the result.
pub fn fixed(parts: &[&str]) -> String {
    let mut tokens = php(parts);
    varcase::fix_tokens(&mut tokens, &risky()).expect("risky fixers are allowed");
    tokens.render()
}

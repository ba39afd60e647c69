//! Provide shared, pure vocabulary and naming helpers for the varcase fixer.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the syntax crate uses to give operator/punctuation tokens stable IDs, and
//! - the fixer uses to classify and rename identifiers.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no token types.
//! - Current scope: PHP vocabulary registries (operators, punctuation, superglobals, doc annotations) and the
//!   camelCase name normalizer.

pub mod lang;
pub mod naming;

pub use naming::{VARIABLE_SIGIL, camel_case, is_valid_name, is_word_char};

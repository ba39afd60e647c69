#![forbid(unsafe_code)]
//! varcase: context-sensitive camelCase renaming for PHP token streams
//!
//! Renames snake_case (and other non-camelCase) variables, property references and `@param`/`@var` doc
//! annotations in an already-lexed token sequence, leaving every other byte untouched.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (an empty token from the lexer, a pattern that fails to
//!   compile), use `.expect("INVARIANT: reason")` / `assert!` with a clear explanation.

pub mod cli;
pub mod fixer;

pub use varcase_syntax::dump;
pub use varcase_syntax::{SuperglobalAnalyzer, SuperglobalOracle, Token, TokenKind, Tokens};

pub use fixer::{
    AnnotationScope, CamelCaseVariableFixer, CollisionPolicy, FixConfig, FixError, FixReport, Fixer, TokenEdit,
    apply_fixer, check_fixed, fix_diff, fix_tokens,
};

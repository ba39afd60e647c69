//! Shared token model for varcase: tokens, the token sequence with its meaningful-token cursor, the
//! superglobal analyzer, and the JSON token dump format.
//!
//! This crate does not tokenize PHP source. Token sequences come from an external lexer, either built in
//! memory or decoded from a dump.
//!
//! ## Notes
//! - Operator and punctuation tokens carry stable IDs from `varcase_core::lang`.
//! - Tokens are immutable values; a sequence changes by replacing whole tokens.
//!
//! ## Examples
//! ```rust
//! use varcase_syntax::{Token, TokenKind, Tokens};
//! use varcase_core::lang::punctuation::PunctuationId;
//!
//! let tokens = Tokens::from(vec![
//!     Token::new(TokenKind::Variable, "$a"),
//!     Token::new(TokenKind::Whitespace, " "),
//!     Token::new(TokenKind::Punctuation(PunctuationId::Semicolon), ";"),
//! ]);
//! assert_eq!(tokens.next_meaningful(0), Some(2));
//! assert_eq!(tokens.render(), "$a ;");
//! ```

pub mod analyzer;
pub mod dump;
pub mod sequence;
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_support;
pub mod token_helpers;
pub mod tokens;

pub use analyzer::{SuperglobalAnalyzer, SuperglobalOracle};
pub use sequence::Tokens;
pub use tokens::{Token, TokenKind};

//! Token-sequence builder for tests.
//!
//! Each part becomes exactly one token; the kind is inferred from its spelling, close enough to what a PHP
//! lexer produces for short snippets. Enabled by the `test-support` feature.

use varcase_core::lang::{operators, punctuation};

use crate::sequence::Tokens;
use crate::tokens::{Token, TokenKind};

const KEYWORDS: &[&str] = &[
    "echo", "class", "private", "public", "protected", "readonly", "var", "function", "return", "new", "static",
];

/// Build a token sequence from pre-split parts.
///
/// ## Panics
/// - If a part is empty.
pub fn php(parts: &[&str]) -> Tokens {
    parts.iter().map(|part| Token::new(infer_kind(part), *part)).collect()
}

/// Guess the token kind of one part.
pub fn infer_kind(part: &str) -> TokenKind {
    if part.starts_with("<?php") {
        TokenKind::OpenTag
    } else if part.starts_with("/**") {
        TokenKind::DocComment
    } else if part.starts_with("/*") || part.starts_with("//") {
        TokenKind::Comment
    } else if part.chars().all(char::is_whitespace) {
        TokenKind::Whitespace
    } else if part.starts_with('$') {
        TokenKind::Variable
    } else if let Some(id) = operators::from_str(part) {
        TokenKind::Operator(id)
    } else if let Some(id) = punctuation::from_str(part) {
        TokenKind::Punctuation(id)
    } else if part.starts_with('\'') || part.starts_with('"') || part.contains(' ') {
        TokenKind::StringLiteral
    } else if part.chars().all(|c| c.is_ascii_digit()) {
        TokenKind::NumberLiteral
    } else if KEYWORDS.contains(&part) {
        TokenKind::Keyword
    } else {
        TokenKind::Ident
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varcase_core::lang::operators::OperatorId;
    use varcase_core::lang::punctuation::PunctuationId;

    #[test]
    fn test_infer_kind() {
        assert_eq!(infer_kind("<?php "), TokenKind::OpenTag);
        assert_eq!(infer_kind("/** @var int $a */"), TokenKind::DocComment);
        assert_eq!(infer_kind("// note"), TokenKind::Comment);
        assert_eq!(infer_kind("\n  "), TokenKind::Whitespace);
        assert_eq!(infer_kind("$a_b"), TokenKind::Variable);
        assert_eq!(infer_kind("?->"), TokenKind::Operator(OperatorId::NullsafeObjectAccess));
        assert_eq!(infer_kind("?"), TokenKind::Punctuation(PunctuationId::Question));
        assert_eq!(infer_kind("'x'"), TokenKind::StringLiteral);
        assert_eq!(infer_kind("Print variable: "), TokenKind::StringLiteral);
        assert_eq!(infer_kind("42"), TokenKind::NumberLiteral);
        assert_eq!(infer_kind("readonly"), TokenKind::Keyword);
        assert_eq!(infer_kind("test_variable"), TokenKind::Ident);
    }

    #[test]
    fn test_php_keeps_parts_verbatim() {
        let parts = ["<?php ", "$this", "->", "a_b", ";"];
        let tokens = php(&parts);
        assert_eq!(tokens.len(), parts.len());
        assert_eq!(tokens.render(), parts.concat());
    }
}

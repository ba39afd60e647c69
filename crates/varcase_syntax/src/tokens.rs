//! Token types.
//!
//! The token vocabulary is closed: every token the external lexer produces maps onto one [`TokenKind`].
//! Operators and punctuation are **registry-backed**:
//! - `Operator(OperatorId)` for operators, including `->` and `?->`
//! - `Punctuation(PunctuationId)` for single-character structural tokens
//!
//! ## Notes
//! - Token content is the exact source text, including the `$` sigil of variables.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use varcase_core::lang::operators::OperatorId;
use varcase_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Document structure ==========
    OpenTag,
    CloseTag,
    InlineHtml,

    // ========== Names ==========
    /// `$name`, including inside interpolated strings.
    Variable,
    /// A bare name: function, constant, class, method or property name.
    Ident,
    Keyword,

    // ========== Trivia ==========
    /// `/** ... */`
    DocComment,
    /// `// ...`, `# ...`, `/* ... */`
    Comment,
    Whitespace,

    // ========== Registry-backed ==========
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Literals ==========
    StringLiteral,
    NumberLiteral,

    /// Anything the fixer has no use for (casts, heredoc markers, attributes, ...).
    Other,
}

/// A token: kind plus exact source text.
///
/// Tokens are immutable. To change a token, build a new one (see [`Token::with_content`]) and replace the slot
/// in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    content: String,
}

impl Token {
    /// Construct a new token.
    ///
    /// ## Panics
    /// - If `content` is empty. Empty tokens come from a broken lexer and would silently corrupt output.
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.is_empty(), "INVARIANT: token content must not be empty ({kind:?})");
        Self { kind, content }
    }

    /// Return the token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Return the exact source text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Build a token of the same kind with different content.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self::new(self.kind, content)
    }
}

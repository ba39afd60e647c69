//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with
//! ID-based tokens.

use crate::tokens::{Token, TokenKind};
use varcase_core::lang::operators::{self, OperatorId};
use varcase_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for `->` and `?->`.
    pub fn is_object_access(&self) -> bool {
        self.operator_id().is_some_and(operators::is_object_access)
    }

    /// Return `true` for whitespace and comments (doc comments included).
    ///
    /// Everything else is "meaningful" for cursor lookups.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind().operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind().operator_id()
    }

    /// Convenience wrapper for `self.kind().punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind().punctuation_id()
    }

    /// Convenience wrapper for `self.kind() == kind`.
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }
}

//! The token sequence and its meaningful-token cursor.
//!
//! `Tokens` owns every token of one source file in lexical order. Identity is positional: a token is addressed
//! by its index, and changing it means overwriting that slot with a new value.
//!
//! ## Notes
//! - [`Tokens::replace`] never changes the length, so indices stay valid across replacements.
//! - [`Tokens::insert_at`] shifts every index at or after the insertion point. Passes that insert should walk
//!   the sequence back to front so indices they have not visited yet are unaffected.

use std::ops::Index;

use crate::tokens::{Token, TokenKind};

/// An ordered, randomly indexable sequence of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Return `true` if the sequence holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Return the token at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over tokens in lexical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Append a token at the end.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Overwrite the token at `index`.
    ///
    /// ## Returns
    /// - (`Token`): the token previously stored in the slot.
    ///
    /// ## Panics
    /// - If `index` is out of bounds.
    pub fn replace(&mut self, index: usize, token: Token) -> Token {
        std::mem::replace(&mut self.tokens[index], token)
    }

    /// Insert a token at `index`, shifting the token at `index` and everything after it one slot right.
    ///
    /// ## Panics
    /// - If `index > len`.
    pub fn insert_at(&mut self, index: usize, token: Token) {
        self.tokens.insert(index, token);
    }

    /// Return `true` if any token has the given kind.
    pub fn is_kind_found(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|t| t.kind() == kind)
    }

    /// Return `true` if any token has one of the given kinds.
    pub fn is_any_kind_found(&self, kinds: &[TokenKind]) -> bool {
        self.tokens.iter().any(|t| kinds.contains(&t.kind()))
    }

    /// Index of the closest token before `index` that is not whitespace or a comment.
    pub fn prev_meaningful(&self, index: usize) -> Option<usize> {
        let end = index.min(self.tokens.len());
        self.tokens[..end].iter().rposition(|t| !t.kind().is_trivia())
    }

    /// Index of the closest token after `index` that is not whitespace or a comment.
    pub fn next_meaningful(&self, index: usize) -> Option<usize> {
        let start = index.checked_add(1)?;
        if start >= self.tokens.len() {
            return None;
        }
        self.tokens[start..]
            .iter()
            .position(|t| !t.kind().is_trivia())
            .map(|offset| start + offset)
    }

    /// Concatenate all token contents back into source text.
    pub fn render(&self) -> String {
        self.tokens.iter().map(Token::content).collect()
    }

    /// Consume the sequence and return the underlying tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Tokens {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

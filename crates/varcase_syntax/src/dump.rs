//! JSON token dump format.
//!
//! A dump is how an external lexer hands a token stream to varcase, and how the fixed stream goes back:
//!
//! ```json
//! [
//!   {"kind": "open_tag", "content": "<?php "},
//!   {"kind": "variable", "content": "$test_variable"},
//!   {"kind": "operator", "content": "="}
//! ]
//! ```
//!
//! ## Notes
//! - Operator and punctuation IDs are not serialized; they are resolved from the content spelling.
//! - Every validation error carries the index of the offending token.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use varcase_core::lang::{operators, punctuation};
use varcase_core::naming::VARIABLE_SIGIL;

use crate::sequence::Tokens;
use crate::tokens::{Token, TokenKind};

/// Errors produced while decoding or encoding a dump.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("malformed token dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token {index}: content must not be empty")]
    EmptyContent { index: usize },

    #[error("token {index}: unknown operator `{spelling}`")]
    UnknownOperator { index: usize, spelling: String },

    #[error("token {index}: unknown punctuation `{spelling}`")]
    UnknownPunctuation { index: usize, spelling: String },

    #[error("token {index}: variable `{content}` is missing the `$` sigil")]
    MissingSigil { index: usize, content: String },
}

/// Serialized token kind, without registry IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DumpKind {
    OpenTag,
    CloseTag,
    InlineHtml,
    Variable,
    Identifier,
    Keyword,
    DocComment,
    Comment,
    Whitespace,
    Operator,
    Punctuation,
    StringLiteral,
    NumberLiteral,
    Other,
}

/// One serialized token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpedToken {
    pub kind: DumpKind,
    pub content: String,
}

impl From<TokenKind> for DumpKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::OpenTag => DumpKind::OpenTag,
            TokenKind::CloseTag => DumpKind::CloseTag,
            TokenKind::InlineHtml => DumpKind::InlineHtml,
            TokenKind::Variable => DumpKind::Variable,
            TokenKind::Ident => DumpKind::Identifier,
            TokenKind::Keyword => DumpKind::Keyword,
            TokenKind::DocComment => DumpKind::DocComment,
            TokenKind::Comment => DumpKind::Comment,
            TokenKind::Whitespace => DumpKind::Whitespace,
            TokenKind::Operator(_) => DumpKind::Operator,
            TokenKind::Punctuation(_) => DumpKind::Punctuation,
            TokenKind::StringLiteral => DumpKind::StringLiteral,
            TokenKind::NumberLiteral => DumpKind::NumberLiteral,
            TokenKind::Other => DumpKind::Other,
        }
    }
}

impl From<&Token> for DumpedToken {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind().into(),
            content: token.content().to_string(),
        }
    }
}

impl DumpedToken {
    /// Validate and convert into a [`Token`].
    ///
    /// ## Parameters
    /// - `index`: position in the dump, used for error reporting.
    pub fn into_token(self, index: usize) -> Result<Token, DumpError> {
        if self.content.is_empty() {
            return Err(DumpError::EmptyContent { index });
        }
        let kind = match self.kind {
            DumpKind::OpenTag => TokenKind::OpenTag,
            DumpKind::CloseTag => TokenKind::CloseTag,
            DumpKind::InlineHtml => TokenKind::InlineHtml,
            DumpKind::Variable => {
                if !self.content.starts_with(VARIABLE_SIGIL) {
                    return Err(DumpError::MissingSigil {
                        index,
                        content: self.content,
                    });
                }
                TokenKind::Variable
            }
            DumpKind::Identifier => TokenKind::Ident,
            DumpKind::Keyword => TokenKind::Keyword,
            DumpKind::DocComment => TokenKind::DocComment,
            DumpKind::Comment => TokenKind::Comment,
            DumpKind::Whitespace => TokenKind::Whitespace,
            DumpKind::Operator => match operators::from_str(&self.content) {
                Some(id) => TokenKind::Operator(id),
                None => {
                    return Err(DumpError::UnknownOperator {
                        index,
                        spelling: self.content,
                    });
                }
            },
            DumpKind::Punctuation => match punctuation::from_str(&self.content) {
                Some(id) => TokenKind::Punctuation(id),
                None => {
                    return Err(DumpError::UnknownPunctuation {
                        index,
                        spelling: self.content,
                    });
                }
            },
            DumpKind::StringLiteral => TokenKind::StringLiteral,
            DumpKind::NumberLiteral => TokenKind::NumberLiteral,
            DumpKind::Other => TokenKind::Other,
        };
        Ok(Token::new(kind, self.content))
    }
}

/// Decode a JSON dump into a token sequence.
#[tracing::instrument(skip_all, fields(dump_len = json.len()))]
pub fn from_json(json: &str) -> Result<Tokens, DumpError> {
    let dumped: Vec<DumpedToken> = serde_json::from_str(json)?;
    let tokens = dumped
        .into_iter()
        .enumerate()
        .map(|(index, t)| t.into_token(index))
        .collect::<Result<Tokens, _>>()?;
    tracing::debug!(token_count = tokens.len(), "decoded token dump");
    Ok(tokens)
}

/// Encode a token sequence as a pretty-printed JSON dump.
pub fn to_json(tokens: &Tokens) -> Result<String, DumpError> {
    let dumped: Vec<DumpedToken> = tokens.iter().map(DumpedToken::from).collect();
    Ok(serde_json::to_string_pretty(&dumped)?)
}

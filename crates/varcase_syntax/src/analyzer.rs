//! Superglobal analysis.
//!
//! The fixer asks "is the variable at index *i* a reserved superglobal?" through the [`SuperglobalOracle`]
//! trait, so hosts and tests can swap the answer without touching a global table.

use varcase_core::lang::superglobals;

use crate::sequence::Tokens;
use crate::tokens::TokenKind;

/// Answer whether a variable name is reserved by the runtime.
pub trait SuperglobalOracle {
    /// Return `true` if `name` (with `$` sigil) must never be renamed.
    fn is_reserved_name(&self, name: &str) -> bool;

    /// Return `true` if the token at `index` is a variable naming a reserved superglobal.
    fn is_superglobal(&self, tokens: &Tokens, index: usize) -> bool {
        tokens
            .get(index)
            .is_some_and(|t| t.kind() == TokenKind::Variable && self.is_reserved_name(t.content()))
    }
}

/// Default oracle: the PHP superglobal registry plus caller-supplied names.
#[derive(Debug, Clone, Default)]
pub struct SuperglobalAnalyzer {
    extra_reserved: Vec<String>,
}

impl SuperglobalAnalyzer {
    /// Create an analyzer backed by the superglobal registry only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve additional names (with or without the `$` sigil).
    pub fn with_reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_reserved.extend(names.into_iter().map(|n| {
            let n = n.as_ref();
            if n.starts_with('$') { n.to_string() } else { format!("${n}") }
        }));
        self
    }

    /// Names reserved on top of the registry, normalized to carry the sigil.
    pub fn extra_reserved(&self) -> &[String] {
        &self.extra_reserved
    }
}

impl SuperglobalOracle for SuperglobalAnalyzer {
    fn is_reserved_name(&self, name: &str) -> bool {
        superglobals::is_superglobal(name) || self.extra_reserved.iter().any(|r| r == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Token;

    fn tokens() -> Tokens {
        Tokens::from(vec![
            Token::new(TokenKind::Variable, "$_GET"),
            Token::new(TokenKind::Variable, "$request_id"),
            Token::new(TokenKind::Ident, "_GET"),
        ])
    }

    #[test]
    fn test_registry_names_are_superglobals() {
        let analyzer = SuperglobalAnalyzer::new();
        let tokens = tokens();
        assert!(analyzer.is_superglobal(&tokens, 0));
        assert!(!analyzer.is_superglobal(&tokens, 1));
    }

    #[test]
    fn test_only_variables_are_superglobals() {
        let analyzer = SuperglobalAnalyzer::new();
        assert!(!analyzer.is_superglobal(&tokens(), 2));
        assert!(!analyzer.is_superglobal(&tokens(), 99));
    }

    #[test]
    fn test_extra_reserved_names_get_a_sigil() {
        let analyzer = SuperglobalAnalyzer::new().with_reserved_names(["request_id", "$wp_query"]);
        assert_eq!(analyzer.extra_reserved(), ["$request_id", "$wp_query"]);
        assert!(analyzer.is_superglobal(&tokens(), 1));
        assert!(analyzer.is_reserved_name("$wp_query"));
    }
}

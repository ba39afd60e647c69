//! The `camel_case_variable` fixer and its rewrite driver.
//!
//! Walks the token sequence from the last index to the first, classifies every token, and replaces the ones
//! whose camelCase spelling differs from the original. Replacement tokens keep their kind; the sequence length
//! never changes.

use std::collections::HashSet;

use varcase_core::naming::{camel_case, is_valid_name, strip_sigil};
use varcase_syntax::{SuperglobalAnalyzer, SuperglobalOracle, TokenKind, Tokens};

use super::classify::{AnnotationName, RenameContext, annotated_names, classify};
use super::config::{CollisionPolicy, FixConfig};
use super::{CodeSample, Fixer, FixerDefinition};

/// Renames variables, property references and doc annotations to camelCase.
#[derive(Debug, Clone)]
pub struct CamelCaseVariableFixer<O = SuperglobalAnalyzer> {
    config: FixConfig,
    oracle: O,
}

impl CamelCaseVariableFixer {
    /// Create the fixer with the registry-backed superglobal analyzer.
    pub fn new(config: FixConfig) -> Self {
        let oracle = SuperglobalAnalyzer::new().with_reserved_names(&config.reserved_names);
        Self { config, oracle }
    }
}

impl<O: SuperglobalOracle> CamelCaseVariableFixer<O> {
    /// Create the fixer with a custom superglobal oracle.
    ///
    /// `config.reserved_names` is ignored here; the oracle alone decides what is reserved.
    pub fn with_oracle(config: FixConfig, oracle: O) -> Self {
        Self { config, oracle }
    }

    pub fn config(&self) -> &FixConfig {
        &self.config
    }
}

impl<O: SuperglobalOracle> Fixer for CamelCaseVariableFixer<O> {
    fn name(&self) -> &'static str {
        "camel_case_variable"
    }

    fn definition(&self) -> FixerDefinition {
        FixerDefinition {
            summary: "Variables must be camel case.",
            samples: &[CodeSample {
                code: "<?php $first_name = 'Raffaele';\n",
            }],
            description: Some(
                "Renames `$variables`, properties accessed through `->` or `?->`, and the variable named by \
                 the first `@param`/`@var` annotation of each doc comment. Method calls and superglobals are \
                 left untouched.",
            ),
            risky_description: Some("Some uses of instance variables may elude analysis."),
        }
    }

    /// Must run after doc-comment line-span normalization.
    fn priority(&self) -> i32 {
        0
    }

    fn is_candidate(&self, tokens: &Tokens) -> bool {
        tokens.is_any_kind_found(&[TokenKind::DocComment, TokenKind::Variable, TokenKind::Ident])
    }

    fn is_risky(&self) -> bool {
        true
    }

    fn apply_fix(&self, tokens: &mut Tokens) {
        rewrite(tokens, &self.oracle, &self.config);
    }
}

/// Rename every applicable token in place.
///
/// ## Parameters
/// - `tokens`: the sequence to fix; only token contents change.
/// - `oracle`: decides which variables are reserved.
/// - `config`: annotation scope and collision policy.
///
/// ## Notes
/// - Traversal is back to front, so an index not visited yet is never affected by an edit already made.
/// - Tokens whose camelCase spelling equals the original are left as they are; running the driver on
///   conformant input is an identity.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn rewrite(tokens: &mut Tokens, oracle: &dyn SuperglobalOracle, config: &FixConfig) {
    let names = NameIndex::build(tokens);
    let mut renamed = 0usize;

    for index in (0..tokens.len()).rev() {
        let Some(content) = resolve(tokens, index, oracle, config, &names) else {
            continue;
        };
        let token = tokens[index].with_content(content);
        tokens.replace(index, token);
        renamed += 1;
    }

    tracing::debug!(renamed, "camel_case_variable pass finished");
}

/// Compute the new content for the token at `index`, or `None` to leave it alone.
fn resolve(
    tokens: &Tokens,
    index: usize,
    oracle: &dyn SuperglobalOracle,
    config: &FixConfig,
    names: &NameIndex,
) -> Option<String> {
    let policy = config.collision_policy;
    match classify(tokens, index, oracle, config.annotation_scope) {
        RenameContext::NotApplicable => None,
        RenameContext::LocalVariable(raw) => rename(index, raw, &names.variables, policy),
        RenameContext::PropertyReference(raw) => rename(index, raw, &names.identifiers, policy),
        RenameContext::DocAnnotationName(found) => {
            rename_in_doc_comment(index, tokens[index].content(), &found, &names.variables, policy)
        }
    }
}

/// Splice renamed annotation names into the doc comment, leaving the rest of the text untouched.
fn rename_in_doc_comment(
    index: usize,
    content: &str,
    found: &[AnnotationName<'_>],
    taken: &HashSet<String>,
    policy: CollisionPolicy,
) -> Option<String> {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut changed = false;

    for annotation in found {
        out.push_str(&content[last..annotation.span.start]);
        match rename(index, annotation.name, taken, policy) {
            Some(new_name) => {
                out.push_str(&new_name);
                changed = true;
            }
            None => out.push_str(annotation.name),
        }
        last = annotation.span.end;
    }
    out.push_str(&content[last..]);

    changed.then_some(out)
}

/// Normalize one name; `None` when nothing changes or the rename must not happen.
fn rename(index: usize, raw: &str, taken: &HashSet<String>, policy: CollisionPolicy) -> Option<String> {
    let renamed = camel_case(raw);
    if renamed == raw {
        return None;
    }
    if !is_valid_name(strip_sigil(&renamed)) {
        tracing::debug!(index, from = raw, to = %renamed, "normalized name is not a valid name; leaving token untouched");
        return None;
    }
    if taken.contains(&renamed) {
        tracing::warn!(index, from = raw, to = %renamed, ?policy, "rename target already names another identifier");
        if policy == CollisionPolicy::Skip {
            return None;
        }
    }
    tracing::debug!(index, from = raw, to = %renamed, "renamed identifier");
    Some(renamed)
}

/// Names present in the sequence before the pass starts, used for collision checks.
///
/// Built once, so every occurrence of a name gets the same decision regardless of traversal order.
struct NameIndex {
    /// `$variable` spellings and doc-annotation names, sigil included.
    variables: HashSet<String>,
    /// Bare identifier spellings.
    identifiers: HashSet<String>,
}

impl NameIndex {
    fn build(tokens: &Tokens) -> Self {
        let mut variables = HashSet::new();
        let mut identifiers = HashSet::new();
        for token in tokens {
            match token.kind() {
                TokenKind::Variable => {
                    variables.insert(token.content().to_string());
                }
                TokenKind::Ident => {
                    identifiers.insert(token.content().to_string());
                }
                TokenKind::DocComment => {
                    variables.extend(annotated_names(token.content()).map(str::to_string));
                }
                _ => {}
            }
        }
        Self { variables, identifiers }
    }
}

//! Token-stream fixers
//!
//! A fixer inspects an already-lexed token sequence and rewrites tokens in place. The rule host decides which
//! fixers run and in what order (by [`Fixer::priority`]); this module provides the trait the host drives plus
//! the `camel_case_variable` fixer.
//!
//! Host helpers mirror each other:
//! - [`fix_tokens`] applies the fixer and reports the edits
//! - [`check_fixed`] tells whether anything would change
//! - [`fix_diff`] renders the would-be edits

mod camel_case_variable;
mod classify;
mod config;

pub use camel_case_variable::{CamelCaseVariableFixer, rewrite};
pub use classify::{AnnotationName, RenameContext, classify};
pub use config::{AnnotationScope, CollisionPolicy, FixConfig};

use thiserror::Error;
use varcase_syntax::Tokens;

/// Errors reported by the fixer host helpers.
///
/// Fixers themselves never fail; they skip what they cannot handle.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("fixer `{fixer}` is risky; enable risky fixers to run it")]
    RiskyNotAllowed { fixer: &'static str },
}

/// A code sample shown in a fixer definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub code: &'static str,
}

/// Human-facing description of a fixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixerDefinition {
    pub summary: &'static str,
    pub samples: &'static [CodeSample],
    pub description: Option<&'static str>,
    /// Why the fixer is risky, for risky fixers.
    pub risky_description: Option<&'static str>,
}

/// A rule that rewrites a token sequence in place.
pub trait Fixer {
    /// Stable rule name.
    fn name(&self) -> &'static str;

    fn definition(&self) -> FixerDefinition;

    /// Higher priorities run first.
    fn priority(&self) -> i32 {
        0
    }

    /// Cheap pre-check: `false` means [`Fixer::apply_fix`] cannot change anything.
    fn is_candidate(&self, tokens: &Tokens) -> bool;

    /// Risky fixers may change behavior and must be enabled explicitly.
    fn is_risky(&self) -> bool {
        false
    }

    fn apply_fix(&self, tokens: &mut Tokens);
}

/// A single token content change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEdit {
    pub index: usize,
    pub before: String,
    pub after: String,
}

/// Edits made by one fixer run, in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    pub edits: Vec<TokenEdit>,
}

impl FixReport {
    /// Compare two snapshots of the same sequence slot by slot.
    ///
    /// Only meaningful for fixers that replace tokens without inserting or removing any.
    pub fn between(before: &Tokens, after: &Tokens) -> Self {
        debug_assert_eq!(before.len(), after.len(), "fixer changed the token count");
        let edits = before
            .iter()
            .zip(after.iter())
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(index, (old, new))| TokenEdit {
                index,
                before: old.content().to_string(),
                after: new.content().to_string(),
            })
            .collect();
        Self { edits }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }
}

/// Run `fixer` over `tokens`, honoring the risky opt-in.
pub fn apply_fixer(fixer: &dyn Fixer, tokens: &mut Tokens, config: &FixConfig) -> Result<FixReport, FixError> {
    if fixer.is_risky() && !config.allow_risky {
        return Err(FixError::RiskyNotAllowed { fixer: fixer.name() });
    }
    if !fixer.is_candidate(tokens) {
        tracing::debug!(fixer = fixer.name(), "not a candidate; skipping");
        return Ok(FixReport::default());
    }

    let before = tokens.clone();
    fixer.apply_fix(tokens);
    let report = FixReport::between(&before, tokens);
    tracing::info!(fixer = fixer.name(), edits = report.len(), "fixer applied");
    Ok(report)
}

/// Apply the `camel_case_variable` fixer with the given configuration.
pub fn fix_tokens(tokens: &mut Tokens, config: &FixConfig) -> Result<FixReport, FixError> {
    let fixer = CamelCaseVariableFixer::new(config.clone());
    apply_fixer(&fixer, tokens, config)
}

/// Check whether `tokens` already satisfy the fixer.
pub fn check_fixed(tokens: &Tokens, config: &FixConfig) -> Result<bool, FixError> {
    let mut scratch = tokens.clone();
    Ok(fix_tokens(&mut scratch, config)?.is_empty())
}

/// Get the edits the fixer would make, one `-`/`+` line pair per changed token.
///
/// Token contents are escaped so multi-line doc comments stay on one line.
pub fn fix_diff(tokens: &Tokens, config: &FixConfig) -> Result<Option<String>, FixError> {
    let mut scratch = tokens.clone();
    let report = fix_tokens(&mut scratch, config)?;
    if report.is_empty() {
        return Ok(None);
    }

    let mut diff = String::new();
    for edit in &report.edits {
        diff.push_str(&format!("-{:5} | {}\n", edit.index, edit.before.escape_debug()));
        diff.push_str(&format!("+{:5} | {}\n", edit.index, edit.after.escape_debug()));
    }
    Ok(Some(diff))
}

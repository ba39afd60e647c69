//! PHP vocabulary registries.
//!
//! This module is the “front door” for the language-level vocabulary the fixer cares about: operators,
//! punctuation, reserved superglobal variables, and doc-comment annotation tags.
//!
//! Callers work with **stable IDs** (e.g. `OperatorId`, `SuperglobalId`) and look up spellings and metadata via
//! registry tables instead of scattering string comparisons across the fixer.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The external lexer decides what a token is; registries only map spellings to IDs.
//!
//! ## Examples
//! ```rust
//! use varcase_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("?->"), Some(OperatorId::NullsafeObjectAccess));
//! assert_eq!(operators::as_str(OperatorId::Coalesce), "??");
//! ```

pub mod annotations;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod superglobals;

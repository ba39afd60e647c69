//! Shareable metadata for `varcase_core::lang` registries.
//!
//! Every registry is a `const` table of small `Copy` info structs. This submodule holds the metadata types
//! reused across them.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; the lexer still decides what a token is.

use std::fmt;

/// Identify the PHP version a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use varcase_core::lang::registry::Since;
///
/// assert!(Since(8, 0) > Since(7, 4));
/// assert_eq!(Since(8, 0).to_string(), "PHP 8.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u8, pub u8);

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PHP {}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Examples
/// ```rust
/// use varcase_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

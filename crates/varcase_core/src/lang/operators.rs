//! Operator vocabulary.
//!
//! This module defines the PHP operators the fixer needs to recognize by identity, most importantly the
//! object-member access operators (`->`, `?->`) and the operators that can legitimately follow a property name
//! (`=`, `??`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators (`and`, `or`, `xor`, `instanceof`) are matched case-sensitively here; a lexer that preserves
//!   source casing should emit them as keywords instead.
//!
//! ## Examples
//! ```rust
//! use varcase_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("->"), Some(OperatorId::ObjectAccess));
//! assert_eq!(operators::category(OperatorId::NullsafeObjectAccess), OperatorCategory::Access);
//! ```

use super::registry::{Since, Stability};

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// `=` and compound assignments.
    Assignment,
    /// Member/static access: `->`, `?->`, `::`.
    Access,
    Arithmetic,
    Comparison,
    Logical,
    /// `.` and `.=`.
    Concatenation,
    /// `??` and `??=`.
    Coalesce,
    /// `++` and `--`.
    Increment,
    /// `=>` in arrays, `match` arms and `foreach`.
    Arrow,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ConcatAssign,
    CoalesceAssign,

    // Access
    ObjectAccess,
    NullsafeObjectAccess,
    StaticAccess,

    // Arithmetic
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Equal,
    NotEqual,
    Identical,
    NotIdentical,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Spaceship,

    // Logical
    BooleanAnd,
    BooleanOr,
    Not,
    LogicalAnd,
    LogicalOr,
    LogicalXor,

    // Misc
    Concat,
    Coalesce,
    Increment,
    Decrement,
    DoubleArrow,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    /// Accepted spellings; the first one is canonical.
    pub spellings: &'static [&'static str],
    pub category: OperatorCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Assign, &["="], OperatorCategory::Assignment, Since(4, 0)),
    op(OperatorId::PlusAssign, &["+="], OperatorCategory::Assignment, Since(4, 0)),
    op(OperatorId::MinusAssign, &["-="], OperatorCategory::Assignment, Since(4, 0)),
    op(OperatorId::MulAssign, &["*="], OperatorCategory::Assignment, Since(4, 0)),
    op(OperatorId::DivAssign, &["/="], OperatorCategory::Assignment, Since(4, 0)),
    op(OperatorId::ModAssign, &["%="], OperatorCategory::Assignment, Since(4, 0)),
    op(OperatorId::ConcatAssign, &[".="], OperatorCategory::Concatenation, Since(4, 0)),
    op(OperatorId::CoalesceAssign, &["??="], OperatorCategory::Coalesce, Since(7, 4)),
    // Access
    op(OperatorId::ObjectAccess, &["->"], OperatorCategory::Access, Since(4, 0)),
    op(OperatorId::NullsafeObjectAccess, &["?->"], OperatorCategory::Access, Since(8, 0)),
    op(OperatorId::StaticAccess, &["::"], OperatorCategory::Access, Since(5, 0)),
    // Arithmetic
    op(OperatorId::Plus, &["+"], OperatorCategory::Arithmetic, Since(4, 0)),
    op(OperatorId::Minus, &["-"], OperatorCategory::Arithmetic, Since(4, 0)),
    op(OperatorId::Mul, &["*"], OperatorCategory::Arithmetic, Since(4, 0)),
    op(OperatorId::Div, &["/"], OperatorCategory::Arithmetic, Since(4, 0)),
    op(OperatorId::Mod, &["%"], OperatorCategory::Arithmetic, Since(4, 0)),
    op(OperatorId::Pow, &["**"], OperatorCategory::Arithmetic, Since(5, 6)),
    // Comparison
    op(OperatorId::Equal, &["=="], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::NotEqual, &["!=", "<>"], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::Identical, &["==="], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::NotIdentical, &["!=="], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::Less, &["<"], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::LessEqual, &["<="], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::Greater, &[">"], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::GreaterEqual, &[">="], OperatorCategory::Comparison, Since(4, 0)),
    op(OperatorId::Spaceship, &["<=>"], OperatorCategory::Comparison, Since(7, 0)),
    // Logical
    op(OperatorId::BooleanAnd, &["&&"], OperatorCategory::Logical, Since(4, 0)),
    op(OperatorId::BooleanOr, &["||"], OperatorCategory::Logical, Since(4, 0)),
    op(OperatorId::Not, &["!"], OperatorCategory::Logical, Since(4, 0)),
    op(OperatorId::LogicalAnd, &["and"], OperatorCategory::Logical, Since(4, 0)),
    op(OperatorId::LogicalOr, &["or"], OperatorCategory::Logical, Since(4, 0)),
    op(OperatorId::LogicalXor, &["xor"], OperatorCategory::Logical, Since(4, 0)),
    // Misc
    op(OperatorId::Concat, &["."], OperatorCategory::Concatenation, Since(4, 0)),
    op(OperatorId::Coalesce, &["??"], OperatorCategory::Coalesce, Since(7, 0)),
    op(OperatorId::Increment, &["++"], OperatorCategory::Increment, Since(4, 0)),
    op(OperatorId::Decrement, &["--"], OperatorCategory::Increment, Since(4, 0)),
    op(OperatorId::DoubleArrow, &["=>"], OperatorCategory::Arrow, Since(4, 0)),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings[0]
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return `true` for the object-member access operators (`->` and `?->`).
pub fn is_object_access(id: OperatorId) -> bool {
    matches!(id, OperatorId::ObjectAccess | OperatorId::NullsafeObjectAccess)
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&spelling)
        })
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    category: OperatorCategory,
    since: Since,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        category,
        since,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_spelling_round_trips() {
        for info in OPERATORS {
            for spelling in info.spellings {
                assert_eq!(from_str(spelling), Some(info.id), "spelling {spelling:?}");
            }
            assert_eq!(as_str(info.id), info.spellings[0]);
        }
    }

    #[test]
    fn test_spellings_are_unique() {
        let mut seen = HashSet::new();
        for info in OPERATORS {
            for spelling in info.spellings {
                assert!(seen.insert(*spelling), "duplicate operator spelling {spelling:?}");
            }
        }
    }

    #[test]
    fn test_object_access_operators() {
        assert!(is_object_access(OperatorId::ObjectAccess));
        assert!(is_object_access(OperatorId::NullsafeObjectAccess));
        assert!(!is_object_access(OperatorId::StaticAccess));
        assert_eq!(info_for(OperatorId::NullsafeObjectAccess).since, Since(8, 0));
    }

    #[test]
    fn test_unknown_spelling() {
        assert_eq!(from_str("=>>"), None);
        assert_eq!(from_str("AND"), None);
    }
}

//! Doc-comment annotation tags that name a variable.
//!
//! `@param Type $name` and `@var Type $name` refer to a variable by spelling, so renaming the variable means
//! renaming the annotation too.
//!
//! ## Examples
//! ```rust
//! use varcase_core::lang::annotations::{self, AnnotationId};
//!
//! assert_eq!(annotations::from_str("@var"), Some(AnnotationId::Var));
//! assert_eq!(annotations::tag_alternation(), "param|var");
//! ```

/// Stable identifier for annotation tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationId {
    Param,
    Var,
}

/// Metadata for an annotation tag.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationInfo {
    pub id: AnnotationId,
    /// Spelling including the leading `@`.
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of all variable-naming annotation tags.
pub const ANNOTATIONS: &[AnnotationInfo] = &[
    AnnotationInfo {
        id: AnnotationId::Param,
        canonical: "@param",
        description: "Documents a function or method parameter.",
    },
    AnnotationInfo {
        id: AnnotationId::Var,
        canonical: "@var",
        description: "Documents the type of a variable or property.",
    },
];

/// Return the canonical spelling (with `@`) for a tag.
pub fn as_str(id: AnnotationId) -> &'static str {
    ANNOTATIONS
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.canonical)
        .expect("annotation info missing")
}

/// Resolve a tag spelling (with `@`) to its identifier.
pub fn from_str(s: &str) -> Option<AnnotationId> {
    ANNOTATIONS.iter().find(|a| a.canonical == s).map(|a| a.id)
}

/// Return the tag names without `@`, joined by `|`, for building match patterns.
pub fn tag_alternation() -> String {
    ANNOTATIONS
        .iter()
        .map(|a| a.canonical.trim_start_matches('@'))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for a in ANNOTATIONS {
            assert_eq!(from_str(a.canonical), Some(a.id));
            assert_eq!(as_str(a.id), a.canonical);
        }
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(from_str("@return"), None);
        assert_eq!(from_str("param"), None);
    }
}

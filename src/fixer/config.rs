//! Fixer configuration
//!
//! Defaults match the behavior of the stock `camel_case_variable` rule; every knob is opt-in.

/// Fixer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixConfig {
    /// Whether risky fixers may run. Renaming can break reflection-based access by name, so this is off by
    /// default and the host must opt in.
    pub allow_risky: bool,
    /// Which `@param`/`@var` annotations of a doc comment are renamed
    pub annotation_scope: AnnotationScope,
    /// What to do when a rename target already exists as a separate name
    pub collision_policy: CollisionPolicy,
    /// Extra variable names (with or without `$`) that are never renamed, on top of the superglobals
    pub reserved_names: Vec<String>,
}

/// Which doc-comment annotations are renamed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnnotationScope {
    /// Only the first `@param`/`@var` annotation of each doc comment
    #[default]
    First,
    /// Every `@param`/`@var` annotation of each doc comment
    All,
}

/// Collision handling
///
/// A collision is a rename whose target spelling already appears in the original token sequence, e.g.
/// `$foo_bar` next to an existing `$fooBar`. Renaming would merge the two names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Rename anyway and log a warning
    #[default]
    Rename,
    /// Leave every occurrence of the colliding name untouched
    Skip,
}

impl FixConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow or forbid risky fixers
    pub fn with_allow_risky(mut self, allow: bool) -> Self {
        self.allow_risky = allow;
        self
    }

    /// Set the doc-comment annotation scope
    pub fn with_annotation_scope(mut self, scope: AnnotationScope) -> Self {
        self.annotation_scope = scope;
        self
    }

    /// Set the collision policy
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Reserve an extra variable name
    pub fn with_reserved_name(mut self, name: impl Into<String>) -> Self {
        self.reserved_names.push(name.into());
        self
    }
}

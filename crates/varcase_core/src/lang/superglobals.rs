//! Reserved superglobal variables.
//!
//! Superglobals are implicitly scoped variables provided by the PHP runtime. Their names belong to the
//! language, not to the program, so the fixer must never rename them.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **ASCII case-insensitive** and expects the `$` sigil.
//!
//! ## Examples
//! ```rust
//! use varcase_core::lang::superglobals::{self, SuperglobalId};
//!
//! assert_eq!(superglobals::from_str("$_SERVER"), Some(SuperglobalId::Server));
//! assert!(superglobals::is_superglobal("$_server"));
//! assert!(!superglobals::is_superglobal("_SERVER"));
//! ```

/// Stable identifier for every superglobal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuperglobalId {
    Globals,
    Server,
    Get,
    Post,
    Files,
    Cookie,
    Session,
    Request,
    Env,
}

/// Metadata for a superglobal.
#[derive(Debug, Clone, Copy)]
pub struct SuperglobalInfo {
    pub id: SuperglobalId,
    /// Spelling including the `$` sigil.
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of all superglobals.
pub const SUPERGLOBALS: &[SuperglobalInfo] = &[
    info(SuperglobalId::Globals, "$GLOBALS", "References all variables available in global scope."),
    info(SuperglobalId::Server, "$_SERVER", "Server and execution environment information."),
    info(SuperglobalId::Get, "$_GET", "Query string variables."),
    info(SuperglobalId::Post, "$_POST", "Form variables from an HTTP POST request."),
    info(SuperglobalId::Files, "$_FILES", "Uploaded files."),
    info(SuperglobalId::Cookie, "$_COOKIE", "HTTP cookies."),
    info(SuperglobalId::Session, "$_SESSION", "Session variables."),
    info(SuperglobalId::Request, "$_REQUEST", "Union of GET, POST and COOKIE input."),
    info(SuperglobalId::Env, "$_ENV", "Environment variables."),
];

/// Return the canonical spelling (with sigil) for a superglobal.
pub fn as_str(id: SuperglobalId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a superglobal.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SuperglobalId) -> &'static SuperglobalInfo {
    SUPERGLOBALS
        .iter()
        .find(|s| s.id == id)
        .expect("superglobal info missing")
}

/// Resolve a variable spelling (with sigil) to a superglobal.
pub fn from_str(name: &str) -> Option<SuperglobalId> {
    SUPERGLOBALS
        .iter()
        .find(|s| s.canonical.eq_ignore_ascii_case(name))
        .map(|s| s.id)
}

/// Return `true` if `name` (with sigil) is a reserved superglobal.
pub fn is_superglobal(name: &str) -> bool {
    from_str(name).is_some()
}

const fn info(id: SuperglobalId, canonical: &'static str, description: &'static str) -> SuperglobalInfo {
    SuperglobalInfo {
        id,
        canonical,
        description,
    }
}

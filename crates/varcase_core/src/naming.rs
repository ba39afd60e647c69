//! Define the camelCase name normalizer.
//!
//! The normalizer is a pure string transform shared by every renaming context (local variables, property
//! references and doc-comment annotations).
//!
//! ## Notes
//! - Case mapping is **ASCII-only**: a word starting with a non-ASCII letter keeps its first letter as written.
//!   Full Unicode case mapping can change the length of a string (`ß` → `SS`), which would break idempotence.
//! - Word characters are Unicode letters and digits plus `_` (see [`is_word_char`]).
//! - The transform never fails. An input without word characters collapses to `""` (or `"$"` with a sigil);
//!   callers decide whether such a result is usable.

/// Sigil that marks a variable reference (`$name`).
pub const VARIABLE_SIGIL: char = '$';

/// Characters that start a new word when capitalizing (besides the `_` separators themselves).
const WORD_DELIMITERS: [char; 6] = [' ', '\t', '\r', '\n', '\x0C', '\x0B'];

/// Check whether a character survives normalization.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert an identifier to camelCase.
///
/// ## Parameters
/// - `raw`: identifier spelling, optionally prefixed with the `$` sigil.
///
/// ## Returns
/// - (`String`): the camelCase spelling; identical to `raw` when no change is needed.
///
/// ## Notes
/// - A leading `$` is stripped before the transform and put back afterwards.
/// - `_` and whitespace split words; each word after the first gets an upper-case first letter.
/// - Non-word characters are dropped, then the first surviving character is lower-cased.
/// - `camel_case(camel_case(x)) == camel_case(x)` for every input.
///
/// ## Examples
/// ```rust
/// use varcase_core::naming::camel_case;
///
/// assert_eq!(camel_case("test_variable"), "testVariable");
/// assert_eq!(camel_case("$test_variable"), "$testVariable");
/// assert_eq!(camel_case("testVariable"), "testVariable");
/// assert_eq!(camel_case("$_test_variable"), "$testVariable");
/// ```
pub fn camel_case(raw: &str) -> String {
    let (sigil, name) = match raw.strip_prefix(VARIABLE_SIGIL) {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let mut joined = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c == '_' || WORD_DELIMITERS.contains(&c) {
            at_word_start = true;
            continue;
        }
        joined.push(if at_word_start { c.to_ascii_uppercase() } else { c });
        at_word_start = false;
    }

    let mut out = String::with_capacity(joined.len() + 1);
    if sigil {
        out.push(VARIABLE_SIGIL);
    }
    let mut first = true;
    for c in joined.chars().filter(|c| is_word_char(*c)) {
        out.push(if first { c.to_ascii_lowercase() } else { c });
        first = false;
    }
    out
}

/// Check whether an identifier is already in camelCase form.
///
/// ## Examples
/// ```rust
/// use varcase_core::naming::is_camel_case;
///
/// assert!(is_camel_case("$fooBar"));
/// assert!(!is_camel_case("foo_bar"));
/// ```
pub fn is_camel_case(raw: &str) -> bool {
    camel_case(raw) == raw
}

/// Check whether a name (without sigil) can be used as a PHP variable or property name.
///
/// Normalization can produce names PHP rejects: `$_` collapses to `$`, `$_1` to `$1`.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| !c.is_ascii_digit())
}

/// Return the name without its sigil, if any.
pub fn strip_sigil(raw: &str) -> &str {
    raw.strip_prefix(VARIABLE_SIGIL).unwrap_or(raw)
}

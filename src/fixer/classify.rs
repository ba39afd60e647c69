//! Identifier classification.
//!
//! Decides, from a token and its meaningful neighbours, whether the token names a local variable, a property
//! being read or written, or a variable documented in a doc comment. Everything else (method calls,
//! superglobals, doc comments without a matching annotation) is [`RenameContext::NotApplicable`].

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use varcase_core::lang::annotations;
use varcase_core::lang::operators::OperatorId;
use varcase_core::lang::punctuation::PunctuationId;
use varcase_syntax::{SuperglobalOracle, TokenKind, Tokens};

use super::config::AnnotationScope;

/// `@param`/`@var`, whitespace, free-form type text, whitespace, `$name`.
///
/// The type text is matched lazily and never crosses a line break, so each match names the first variable
/// after its tag.
static DOC_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"@(?:{tags})[ \t]+[^\n]*?[ \t](?P<name>\$[A-Za-z_\x80-\x{{10FFFF}}][A-Za-z0-9_\x80-\x{{10FFFF}}]*)",
        tags = annotations::tag_alternation(),
    );
    Regex::new(&pattern).expect("INVARIANT: doc annotation pattern compiles")
});

/// How a token would be renamed, if at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameContext<'a> {
    /// A `$variable` token; carries the full content including the sigil.
    LocalVariable(&'a str),
    /// A bare name read or written through `->` / `?->`.
    PropertyReference(&'a str),
    /// Annotated variable names inside a doc comment, in source order.
    DocAnnotationName(Vec<AnnotationName<'a>>),
    NotApplicable,
}

/// A `$name` found in a doc comment annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationName<'a> {
    /// The name including its sigil.
    pub name: &'a str,
    /// Byte range of `name` inside the doc comment content.
    pub span: Range<usize>,
}

/// Classify the token at `index`.
///
/// ## Parameters
/// - `tokens`: the sequence being fixed.
/// - `index`: position of the candidate token.
/// - `oracle`: decides which variables are reserved.
/// - `scope`: which doc-comment annotations to report.
///
/// ## Returns
/// - (`RenameContext`): borrowed from `tokens`; `NotApplicable` for anything that must not be renamed.
pub fn classify<'a>(
    tokens: &'a Tokens,
    index: usize,
    oracle: &dyn SuperglobalOracle,
    scope: AnnotationScope,
) -> RenameContext<'a> {
    let Some(token) = tokens.get(index) else {
        return RenameContext::NotApplicable;
    };

    match token.kind() {
        TokenKind::DocComment => classify_doc_comment(tokens, index, token.content(), oracle, scope),
        TokenKind::Variable => {
            if oracle.is_superglobal(tokens, index) {
                RenameContext::NotApplicable
            } else {
                RenameContext::LocalVariable(token.content())
            }
        }
        TokenKind::Ident if is_property_reference(tokens, index) => RenameContext::PropertyReference(token.content()),
        _ => RenameContext::NotApplicable,
    }
}

fn classify_doc_comment<'a>(
    tokens: &Tokens,
    index: usize,
    content: &'a str,
    oracle: &dyn SuperglobalOracle,
    scope: AnnotationScope,
) -> RenameContext<'a> {
    if oracle.is_superglobal(tokens, index) {
        return RenameContext::NotApplicable;
    }

    let limit = match scope {
        AnnotationScope::First => 1,
        AnnotationScope::All => usize::MAX,
    };
    let names: Vec<AnnotationName<'a>> = annotation_matches(content)
        .take(limit)
        .filter(|m| !oracle.is_reserved_name(m.as_str()))
        .map(|m| AnnotationName {
            name: m.as_str(),
            span: m.range(),
        })
        .collect();

    if names.is_empty() {
        RenameContext::NotApplicable
    } else {
        RenameContext::DocAnnotationName(names)
    }
}

/// Every annotated `$name` in a doc comment, in source order.
fn annotation_matches(content: &str) -> impl Iterator<Item = regex::Match<'_>> {
    DOC_ANNOTATION.captures_iter(content).filter_map(|caps| caps.name("name"))
}

/// Every annotated `$name` in a doc comment, regardless of scope or reserved names.
pub(crate) fn annotated_names(content: &str) -> impl Iterator<Item = &str> {
    annotation_matches(content).map(|m| m.as_str())
}

/// A bare name is a property reference when it follows `->`/`?->` and is not being called.
fn is_property_reference(tokens: &Tokens, index: usize) -> bool {
    let follows_access = tokens
        .prev_meaningful(index)
        .is_some_and(|prev| tokens[prev].kind().is_object_access());
    if !follows_access {
        return false;
    }

    tokens
        .next_meaningful(index)
        .is_some_and(|next| ends_property_reference(tokens[next].kind()))
}

/// Tokens that may follow a property name. `(` is absent on purpose: `->name(` is a method call.
fn ends_property_reference(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Whitespace => true,
        TokenKind::Operator(id) => matches!(
            id,
            OperatorId::ObjectAccess | OperatorId::NullsafeObjectAccess | OperatorId::Assign | OperatorId::Coalesce
        ),
        TokenKind::Punctuation(id) => matches!(
            id,
            PunctuationId::Semicolon
                | PunctuationId::Colon
                | PunctuationId::RParen
                | PunctuationId::RBrace
                | PunctuationId::Question
                | PunctuationId::LBracket
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varcase_syntax::test_support::php;
    use varcase_syntax::SuperglobalAnalyzer;

    fn classify_at(tokens: &Tokens, index: usize) -> RenameContext<'_> {
        classify(tokens, index, &SuperglobalAnalyzer::new(), AnnotationScope::First)
    }

    // ========================================
    // Variables
    // ========================================

    #[test]
    fn test_variable_is_local_variable() {
        let tokens = php(&["<?php ", "$test_variable", " ", "=", " ", "1", ";"]);
        assert_eq!(classify_at(&tokens, 1), RenameContext::LocalVariable("$test_variable"));
    }

    #[test]
    fn test_superglobal_is_not_applicable() {
        let tokens = php(&["<?php ", "$_SERVER", "[", "'x'", "]", ";"]);
        assert_eq!(classify_at(&tokens, 1), RenameContext::NotApplicable);
    }

    #[test]
    fn test_custom_reserved_variable_is_not_applicable() {
        let tokens = php(&["<?php ", "$wp_query", ";"]);
        let oracle = SuperglobalAnalyzer::new().with_reserved_names(["wp_query"]);
        assert_eq!(
            classify(&tokens, 1, &oracle, AnnotationScope::First),
            RenameContext::NotApplicable
        );
    }

    // ========================================
    // Property references
    // ========================================

    #[test]
    fn test_property_assignment_is_property_reference() {
        let tokens = php(&["<?php ", "$this", "->", "test_variable", " ", "=", " ", "1", ";"]);
        assert_eq!(classify_at(&tokens, 3), RenameContext::PropertyReference("test_variable"));
    }

    #[test]
    fn test_method_call_is_not_applicable() {
        let tokens = php(&["<?php ", "$this", "->", "test_variable", "(", ")", ";"]);
        assert_eq!(classify_at(&tokens, 3), RenameContext::NotApplicable);
    }

    #[test]
    fn test_property_before_nullsafe_access() {
        let tokens = php(&["<?php ", "$this", "->", "test_variable", "?->", "method", "(", ")", ";"]);
        assert_eq!(classify_at(&tokens, 3), RenameContext::PropertyReference("test_variable"));
        assert_eq!(classify_at(&tokens, 5), RenameContext::NotApplicable);
    }

    #[test]
    fn test_property_after_nullsafe_access() {
        let tokens = php(&["<?php ", "$user", "?->", "first_name", ";"]);
        assert_eq!(classify_at(&tokens, 3), RenameContext::PropertyReference("first_name"));
    }

    #[test]
    fn test_property_terminators() {
        for terminator in ["->", "?->", "=", ";", ":", ")", "}", "?", "??", "["] {
            let tokens = php(&["<?php ", "$this", "->", "some_name", terminator]);
            assert_eq!(
                classify_at(&tokens, 3),
                RenameContext::PropertyReference("some_name"),
                "terminator {terminator:?}"
            );
        }
    }

    #[test]
    fn test_property_terminator_after_comment() {
        let tokens = php(&["<?php ", "$this", "->", "some_name", " ", "/* why */", " ", ";"]);
        assert_eq!(classify_at(&tokens, 3), RenameContext::PropertyReference("some_name"));
    }

    #[test]
    fn test_non_terminators_are_not_applicable() {
        for follower in ["(", ",", ".", "+", "]"] {
            let tokens = php(&["<?php ", "$this", "->", "some_name", follower]);
            assert_eq!(classify_at(&tokens, 3), RenameContext::NotApplicable, "follower {follower:?}");
        }
    }

    #[test]
    fn test_static_access_is_not_applicable() {
        let tokens = php(&["<?php ", "Foo", "::", "some_const", ";"]);
        assert_eq!(classify_at(&tokens, 3), RenameContext::NotApplicable);
    }

    #[test]
    fn test_property_at_end_of_stream_is_not_applicable() {
        let tokens = php(&["<?php ", "$this", "->", "some_name"]);
        assert_eq!(classify_at(&tokens, 3), RenameContext::NotApplicable);
    }

    #[test]
    fn test_bare_identifier_without_access_is_not_applicable() {
        let tokens = php(&["<?php ", "some_function", "(", ")", ";"]);
        assert_eq!(classify_at(&tokens, 1), RenameContext::NotApplicable);
    }

    // ========================================
    // Doc comments
    // ========================================

    #[test]
    fn test_var_annotation() {
        let tokens = php(&["<?php ", "/** @var string $test_variable */"]);
        assert_eq!(
            classify_at(&tokens, 1),
            RenameContext::DocAnnotationName(vec![AnnotationName {
                name: "$test_variable",
                span: 16..30,
            }])
        );
    }

    #[test]
    fn test_param_annotation_with_description() {
        let tokens = php(&["/**\n * @param int|null $row_count Number of $rows_seen\n */"]);
        match classify_at(&tokens, 0) {
            RenameContext::DocAnnotationName(names) => {
                assert_eq!(names.len(), 1);
                assert_eq!(names[0].name, "$row_count");
            }
            other => panic!("expected doc annotation, got {other:?}"),
        }
    }

    #[test]
    fn test_first_scope_reports_one_annotation() {
        let doc = "/**\n * @param int $first_arg\n * @param int $second_arg\n */";
        let tokens = php(&[doc]);
        let RenameContext::DocAnnotationName(names) = classify_at(&tokens, 0) else {
            panic!("expected doc annotation");
        };
        assert_eq!(names.iter().map(|n| n.name).collect::<Vec<_>>(), ["$first_arg"]);
    }

    #[test]
    fn test_all_scope_reports_every_annotation() {
        let doc = "/**\n * @param int $first_arg\n * @param int $second_arg\n */";
        let tokens = php(&[doc]);
        let RenameContext::DocAnnotationName(names) =
            classify(&tokens, 0, &SuperglobalAnalyzer::new(), AnnotationScope::All)
        else {
            panic!("expected doc annotation");
        };
        assert_eq!(
            names.iter().map(|n| n.name).collect::<Vec<_>>(),
            ["$first_arg", "$second_arg"]
        );
        for n in &names {
            assert_eq!(&doc[n.span.clone()], n.name);
        }
    }

    #[test]
    fn test_doc_comment_without_type_is_not_applicable() {
        let tokens = php(&["/** @var $test_variable */"]);
        assert_eq!(classify_at(&tokens, 0), RenameContext::NotApplicable);
    }

    #[test]
    fn test_doc_comment_without_annotation_is_not_applicable() {
        let tokens = php(&["/** Holds $some_value. @return int */"]);
        assert_eq!(classify_at(&tokens, 0), RenameContext::NotApplicable);
    }

    #[test]
    fn test_doc_comment_naming_superglobal_is_not_applicable() {
        let tokens = php(&["/** @var array $_SERVER */"]);
        assert_eq!(classify_at(&tokens, 0), RenameContext::NotApplicable);
    }

    #[test]
    fn test_name_cannot_start_with_delete() {
        let tokens = php(&["/** @var int $\u{7f}some_value */"]);
        assert_eq!(classify_at(&tokens, 0), RenameContext::NotApplicable);
    }

    #[test]
    fn test_name_may_contain_high_characters() {
        let tokens = php(&["/** @var int $\u{e9}t\u{e9}_value */"]);
        let RenameContext::DocAnnotationName(names) = classify_at(&tokens, 0) else {
            panic!("expected doc annotation");
        };
        assert_eq!(names[0].name, "$\u{e9}t\u{e9}_value");
    }

    #[test]
    fn test_annotated_names_ignores_scope() {
        let doc = "/**\n * @param int $first_arg\n * @var array $_GET\n */";
        assert_eq!(annotated_names(doc).collect::<Vec<_>>(), ["$first_arg", "$_GET"]);
    }

    #[test]
    fn test_similar_tags_do_not_match() {
        let tokens = php(&["/** @variable string $some_value */"]);
        assert_eq!(classify_at(&tokens, 0), RenameContext::NotApplicable);
    }

    // ========================================
    // Other kinds
    // ========================================

    #[test]
    fn test_other_kinds_are_not_applicable() {
        let tokens = php(&["<?php ", "echo", " ", "'some_text'", ";", "// $a_b"]);
        for index in 0..tokens.len() {
            assert_eq!(classify_at(&tokens, index), RenameContext::NotApplicable);
        }
        assert_eq!(classify_at(&tokens, 99), RenameContext::NotApplicable);
    }
}

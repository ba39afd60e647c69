//! End-to-end fixer cases on lexer-shaped token sequences.
//!
//! Every case fixes the input, compares the rendered source, then fixes the result again and expects no
//! further change.

mod common;

use common::{fixed, php, risky};
use varcase::{check_fixed, fix_tokens};

fn assert_fix(parts: &[&str], expected: &str) {
    assert_eq!(fixed(parts), expected);

    let mut tokens = php(parts);
    fix_tokens(&mut tokens, &risky()).unwrap();
    assert!(check_fixed(&tokens, &risky()).unwrap(), "second pass changed {expected:?}");
}

// ========================================
// Local variables
// ========================================

#[test]
fn test_assignment() {
    assert_fix(&["<?php ", "$test_variable", " ", "=", " ", "1", ";"], "<?php $testVariable = 1;");
}

#[test]
fn test_coalesce() {
    assert_fix(&["<?php ", "$test_variable", " ", "??", " ", "1", ";"], "<?php $testVariable ?? 1;");
}

#[test]
fn test_ternary() {
    assert_fix(
        &["<?php ", "$test_variable", " ", "?", " ", "-", "1", " ", ":", " ", "1", ";"],
        "<?php $testVariable ? -1 : 1;",
    );
}

#[test]
fn test_variable_method_call() {
    assert_fix(
        &["<?php ", "$test_variable", "->", "method", "(", ")", ";"],
        "<?php $testVariable->method();",
    );
    assert_fix(
        &["<?php ", "$test_variable", "?->", "method", "(", ")", ";"],
        "<?php $testVariable?->method();",
    );
}

#[test]
fn test_interpolated_variable() {
    assert_fix(
        &["<?php ", "echo", " ", "\"", "Print variable: ", "{", "$test_variable", "}", "\"", ";"],
        "<?php echo \"Print variable: {$testVariable}\";",
    );
}

#[test]
fn test_array_append() {
    assert_fix(&["<?php ", "$test_variable", "[", "]", " ", "=", " ", "1", ";"], "<?php $testVariable[] = 1;");
}

// ========================================
// Property references
// ========================================

#[test]
fn test_property_assignment() {
    assert_fix(
        &["<?php ", "$this", "->", "test_variable", " ", "=", " ", "1", ";"],
        "<?php $this->testVariable = 1;",
    );
}

#[test]
fn test_property_chained_call() {
    assert_fix(
        &["<?php ", "$this", "->", "test_variable", "->", "method", "(", ")", ";"],
        "<?php $this->testVariable->method();",
    );
    assert_fix(
        &["<?php ", "$this", "->", "test_variable", "?->", "method", "(", ")", ";"],
        "<?php $this->testVariable?->method();",
    );
}

#[test]
fn test_property_coalesce_and_ternary() {
    assert_fix(
        &["<?php ", "$this", "->", "test_variable", " ", "??", " ", "-", "1", ";"],
        "<?php $this->testVariable ?? -1;",
    );
    assert_fix(
        &["<?php ", "$this", "->", "test_variable", " ", "?", " ", "-", "1", " ", ":", " ", "1", ";"],
        "<?php $this->testVariable ? -1 : 1;",
    );
}

#[test]
fn test_interpolated_property() {
    assert_fix(
        &["<?php ", "echo", " ", "\"", "Print variable: ", "{", "$this", "->", "test_variable", "}", "\"", ";"],
        "<?php echo \"Print variable: {$this->testVariable}\";",
    );
}

#[test]
fn test_property_array_append() {
    assert_fix(
        &["<?php ", "$this", "->", "test_variable", "[", "]", " ", "=", " ", "1", ";"],
        "<?php $this->testVariable[] = 1;",
    );
}

#[test]
fn test_method_call_is_left_alone() {
    assert_fix(
        &["<?php ", "$this", "->", "do_something", "(", ")", ";"],
        "<?php $this->do_something();",
    );
}

#[test]
fn test_static_access_is_left_alone() {
    assert_fix(&["<?php ", "Foo", "::", "some_const", ";"], "<?php Foo::some_const;");
}

// ========================================
// Doc comments
// ========================================

#[test]
fn test_var_annotation() {
    assert_fix(&["<?php ", "/** @var string $test_variable */"], "<?php /** @var string $testVariable */");
}

#[test]
fn test_param_annotation() {
    assert_fix(&["<?php ", "/** @param string $test_variable */"], "<?php /** @param string $testVariable */");
}

#[test]
fn test_annotation_without_type_is_left_alone() {
    assert_fix(&["<?php ", "/** @var $test_variable */"], "<?php /** @var $test_variable */");
}

#[test]
fn test_plain_comment_is_left_alone() {
    assert_fix(&["<?php ", "/* @var string $test_variable */"], "<?php /* @var string $test_variable */");
}

// ========================================
// Class properties
// ========================================

#[test]
fn test_readonly_typed_property() {
    assert_fix(
        &["<?php ", "class", " ", "Foo", " ", "{", " ", "private", " ", "readonly", " ", "string", " ", "$test_variable", ";", " ", "}"],
        "<?php class Foo { private readonly string $testVariable; }",
    );
}

#[test]
fn test_typed_property() {
    assert_fix(
        &["<?php ", "class", " ", "Foo", " ", "{", " ", "private", " ", "string", " ", "$test_variable", ";", " ", "}"],
        "<?php class Foo { private string $testVariable; }",
    );
}

#[test]
fn test_untyped_property() {
    assert_fix(
        &["<?php ", "class", " ", "Foo", " ", "{", " ", "private", " ", "$test_variable", ";", " ", "}"],
        "<?php class Foo { private $testVariable; }",
    );
}

#[test]
fn test_var_property_with_leading_underscore() {
    assert_fix(
        &["<?php ", "class", " ", "Foo", " ", "{", " ", "var", " ", "$_test_variable", ";", " ", "}"],
        "<?php class Foo { var $testVariable; }",
    );
}

// ========================================
// Superglobals
// ========================================

#[test]
fn test_superglobals_are_left_alone() {
    assert_fix(
        &["<?php ", "$_SERVER", "[", "'REQUEST_URI'", "]", ";", " ", "$_post", ";", " ", "$GLOBALS", ";"],
        "<?php $_SERVER['REQUEST_URI']; $_post; $GLOBALS;",
    );
}

#[test]
fn test_superglobal_annotation_is_left_alone() {
    assert_fix(&["<?php ", "/** @var array $_GET */"], "<?php /** @var array $_GET */");
}

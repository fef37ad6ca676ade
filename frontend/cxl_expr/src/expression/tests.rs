use super::ExpressionUnderCursor;
use cxl_ir::LanguageFeatures;
use pretty_assertions::assert_eq;

fn expr_with(features: LanguageFeatures, source: &str) -> Option<String> {
    match ExpressionUnderCursor::new(features).expression_at(source, source.len()) {
        Ok(found) => found,
        Err(err) => panic!("query failed: {err}"),
    }
}

fn expr(source: &str) -> Option<String> {
    expr_with(LanguageFeatures::all(), source)
}

fn call_start(source: &str) -> Option<usize> {
    let resolver = ExpressionUnderCursor::new(LanguageFeatures::all());
    match resolver.start_of_function_call(source, source.len()) {
        Ok(found) => found,
        Err(err) => panic!("query failed: {err}"),
    }
}

// === Basic boundaries ===

#[test]
fn empty_source_has_no_expression() {
    assert_eq!(expr(""), None);
    assert_eq!(expr("   "), None);
}

#[test]
fn lone_identifier() {
    assert_eq!(expr("foo"), Some("foo".to_owned()));
}

#[test]
fn argument_in_open_call_is_its_own_expression() {
    assert_eq!(expr("foo(bar, baz"), Some("baz".to_owned()));
}

#[test]
fn literals_stand_alone() {
    assert_eq!(expr("f(42"), Some("42".to_owned()));
    assert_eq!(expr("s = \"hi\""), Some("\"hi\"".to_owned()));
    assert_eq!(expr("return this"), Some("this".to_owned()));
}

#[test]
fn operators_are_hard_boundaries() {
    assert_eq!(expr("a + b"), Some("b".to_owned()));
    assert_eq!(expr("x = y"), Some("y".to_owned()));
}

// === Member access and qualified names ===

#[test]
fn member_chain_is_absorbed_whole() {
    assert_eq!(expr("a.b->c.d"), Some("a.b->c.d".to_owned()));
}

#[test]
fn pointer_to_member_chains() {
    assert_eq!(expr("obj.*ptr"), Some("obj.*ptr".to_owned()));
    assert_eq!(expr("p->*ptr"), Some("p->*ptr".to_owned()));
}

#[test]
fn qualified_name_with_template_segment() {
    assert_eq!(
        expr("std::vector<int>::size"),
        Some("std::vector<int>::size".to_owned())
    );
}

#[test]
fn chain_does_not_cross_a_statement() {
    assert_eq!(expr("x; a.b"), Some("a.b".to_owned()));
}

#[test]
fn completed_subscript_chains_into_member_access() {
    assert_eq!(expr("a[0].x"), Some("a[0].x".to_owned()));
}

#[test]
fn open_subscript_takes_only_the_index() {
    assert_eq!(expr("array[i"), Some("i".to_owned()));
}

#[test]
fn ternary_colon_takes_only_the_arm() {
    assert_eq!(expr("cond ? a : b"), Some("b".to_owned()));
}

// === Destructor names ===

#[test]
fn destructor_after_member_access_absorbs_the_object() {
    assert_eq!(expr("p->~Foo"), Some("p->~Foo".to_owned()));
    assert_eq!(expr("x.~Foo"), Some("x.~Foo".to_owned()));
}

#[test]
fn bare_destructor_name_starts_at_the_tilde() {
    assert_eq!(expr("~Foo"), Some("~Foo".to_owned()));
}

// === Template angle groups ===

#[test]
fn template_id_is_read_as_one_name() {
    assert_eq!(expr("foo<int>"), Some("foo<int>".to_owned()));
}

#[test]
fn comparison_is_not_a_template() {
    // No identifier heads the angle group, so `>` stays a comparison.
    assert_eq!(expr("a > b"), Some("b".to_owned()));
}

#[test]
fn named_cast_absorbs_the_keyword() {
    assert_eq!(
        expr("static_cast<Foo*>(x)->y"),
        Some("static_cast<Foo*>(x)->y".to_owned())
    );
}

#[test]
fn template_call_chains_through_the_callee() {
    assert_eq!(
        expr("obj.get<int>()->next"),
        Some("obj.get<int>()->next".to_owned())
    );
}

// === Call and bracket groups ===

#[test]
fn call_result_chains_into_member_access() {
    assert_eq!(expr("f(x).y"), Some("f(x).y".to_owned()));
}

#[test]
fn unmatched_closer_yields_no_expression() {
    assert_eq!(expr("x + y)"), None);
    assert_eq!(expr(")"), None);
}

#[test]
fn lone_opener_yields_no_expression() {
    assert_eq!(expr("("), None);
}

// === Lambdas ===

#[test]
fn immediately_invoked_lambda_starts_at_the_capture_list() {
    assert_eq!(expr("[](){}()"), Some("[](){}()".to_owned()));
    assert_eq!(
        expr("[x](int y){ return y; }(42)"),
        Some("[x](int y){ return y; }(42)".to_owned())
    );
}

#[test]
fn lambda_with_throw_specifier() {
    assert_eq!(
        expr("[]() throw() {}()"),
        Some("[]() throw() {}()".to_owned())
    );
}

// === Qt signal/slot comma jump ===

#[test]
fn signal_jumps_one_comma_to_the_receiver() {
    assert_eq!(expr("connect(obj, SIGNAL"), Some("obj, SIGNAL".to_owned()));
}

#[test]
fn slot_jumps_one_comma_to_the_receiver() {
    assert_eq!(expr("connect(obj, SLOT"), Some("obj, SLOT".to_owned()));
}

#[test]
fn signal_without_preceding_comma_stands_alone() {
    assert_eq!(expr("SIGNAL"), Some("SIGNAL".to_owned()));
}

#[test]
fn signal_is_a_plain_identifier_without_qt_keywords() {
    assert_eq!(
        expr_with(LanguageFeatures::default(), "connect(obj, SIGNAL"),
        Some("SIGNAL".to_owned())
    );
}

// === Objective-C message sends ===

#[test]
fn message_send_absorbs_the_receiver() {
    assert_eq!(
        expr_with(LanguageFeatures::OBJC, "[receiver message"),
        Some("[receiver message".to_owned())
    );
}

#[test]
fn message_send_rule_is_off_without_objc() {
    assert_eq!(
        expr_with(LanguageFeatures::default(), "[receiver message"),
        Some("message".to_owned())
    );
}

#[test]
fn selector_colon_takes_only_the_argument() {
    assert_eq!(
        expr_with(LanguageFeatures::OBJC, "[receiver param:id"),
        Some("id".to_owned())
    );
}

// === Query mechanics ===

#[test]
fn cursor_mid_source_ignores_trailing_text() {
    let resolver = ExpressionUnderCursor::new(LanguageFeatures::default());
    let found = match resolver.expression_at("foo.bar = 1;", 7) {
        Ok(found) => found,
        Err(err) => panic!("query failed: {err}"),
    };
    assert_eq!(found, Some("foo.bar".to_owned()));
}

#[test]
fn resolution_is_idempotent() {
    let first = match expr("q->widget().geometry") {
        Some(text) => text,
        None => panic!("expected an expression"),
    };
    assert_eq!(expr(&first), Some(first.clone()));
}

#[test]
fn result_is_a_suffix_of_the_scanned_text() {
    // The scan only moves backward, so whatever it returns must end
    // exactly at the cursor.
    let sources = [
        "a.b->c.d",
        "foo(bar, baz",
        "static_cast<Foo*>(x)->y",
        "connect(obj, SIGNAL",
        "std::vector<int>::size",
        "[x](int y){ return y; }(42)",
    ];
    for source in sources {
        let Some(text) = expr(source) else {
            panic!("expected an expression for {source:?}");
        };
        assert!(
            source.ends_with(&text),
            "{text:?} is not a suffix of {source:?}"
        );
    }
}

#[test]
fn out_of_bounds_cursor_is_an_error() {
    let resolver = ExpressionUnderCursor::new(LanguageFeatures::default());
    assert!(resolver.expression_at("abc", 4).is_err());
}

// === Function-call start ===

#[test]
fn finds_the_open_paren_of_the_enclosing_call() {
    assert_eq!(call_start("foo(bar, baz"), Some(3));
}

#[test]
fn skips_balanced_inner_groups() {
    assert_eq!(call_start("f(g(x), h(y"), Some(9));
    assert_eq!(call_start("f(g(x), y"), Some(1));
}

#[test]
fn finds_a_brace_initializer() {
    assert_eq!(call_start("Foo{1, 2"), Some(3));
}

#[test]
fn balanced_source_has_no_enclosing_call() {
    assert_eq!(call_start("f(x)"), None);
    assert_eq!(call_start("x + y"), None);
}

#[test]
fn unmatched_closer_aborts_the_search() {
    assert_eq!(call_start("x)"), None);
}

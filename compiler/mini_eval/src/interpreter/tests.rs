#![allow(clippy::unwrap_used)]

use super::*;
use crate::errors::EvalErrorKind;
use crate::{buffer_handler, silent_handler};
use pretty_assertions::assert_eq;

fn capturing() -> Interpreter {
    InterpreterBuilder::new().print_handler(buffer_handler()).build()
}

fn program(statements: Vec<Node>) -> Node {
    let mut list = None;
    for stmt in statements.into_iter().rev() {
        list = Some(Node::statement_list(stmt, list));
    }
    list.unwrap()
}

fn int(n: i64) -> Node {
    Node::int(1, n)
}

fn ident(name: &str) -> Node {
    Node::ident(1, name)
}

fn assign(name: &str, value: Node) -> Node {
    Node::assignment(1, ident(name), value)
}

fn print(expr: Node) -> Node {
    Node::print(1, expr)
}

// === Statements ===

#[test]
fn assign_then_conditional_print() {
    let mut interp = capturing();
    let tree = program(vec![
        assign("x", int(3)),
        Node::if_statement(
            1,
            Node::binary(1, BinaryOp::Lt, ident("x"), int(5)),
            print(ident("x")),
        ),
    ]);
    interp.run(&tree).unwrap();
    assert_eq!(interp.print_handler().output(), "3\n");
    assert_eq!(interp.env().get("x"), Some(&Value::Int(3)));
    assert_eq!(interp.env().len(), 1);
}

#[test]
fn false_condition_skips_body() {
    let mut interp = capturing();
    let tree = Node::if_statement(1, Node::bool(1, false), print(int(1)));
    assert_eq!(interp.eval(&tree).unwrap(), Value::default());
    assert_eq!(interp.print_handler().output(), "");
}

#[test]
fn true_condition_returns_body_result() {
    let mut interp = capturing();
    let tree = Node::if_statement(1, Node::bool(1, true), int(9));
    assert_eq!(interp.eval(&tree).unwrap(), Value::Int(9));
}

#[test]
fn non_boolean_condition_is_fatal() {
    let mut interp = capturing();
    let tree = Node::if_statement(4, int(1), print(int(1)));
    let err = interp.eval(&tree).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::NonBooleanCondition);
    assert_eq!(err.line(), Some(4));
    assert_eq!(interp.print_handler().output(), "");
}

#[test]
fn string_and_undefined_conditions_are_fatal() {
    let mut interp = capturing();
    interp.run(&assign("u", assign("v", int(0)))).unwrap();
    for condition in [Node::string(2, "true"), ident("u")] {
        let tree = Node::if_statement(2, condition, print(int(1)));
        let err = interp.eval(&tree).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::NonBooleanCondition);
    }
    assert_eq!(interp.print_handler().output(), "");
}

#[test]
fn reassignment_may_change_kind() {
    let mut interp = capturing();
    let tree = program(vec![
        assign("x", int(1)),
        assign("x", Node::string(1, "one")),
    ]);
    interp.run(&tree).unwrap();
    assert_eq!(interp.env().get("x"), Some(&Value::from("one")));
}

#[test]
fn assignment_target_must_be_identifier() {
    let mut interp = capturing();
    let tree = Node::assignment(2, int(1), print(Node::string(2, "side effect")));
    let err = interp.eval(&tree).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::InvalidAssignmentTarget);
    // The value side never ran.
    assert_eq!(interp.print_handler().output(), "");
}

#[test]
fn statements_evaluate_to_undefined() {
    let mut interp = capturing();
    assert_eq!(interp.eval(&assign("x", int(1))).unwrap(), Value::default());
    assert_eq!(interp.eval(&print(int(1))).unwrap(), Value::default());
}

#[test]
fn printing_undefined_renders_type_error() {
    let mut interp = capturing();
    let tree = program(vec![
        assign("a", assign("b", int(4))),
        print(ident("a")),
        print(ident("b")),
    ]);
    interp.run(&tree).unwrap();
    assert_eq!(interp.print_handler().output(), "TYPE ERROR\n4\n");
}

// === Fatal errors ===

#[test]
fn undefined_identifier_halts_program() {
    let mut interp = capturing();
    let tree = program(vec![
        print(int(1)),
        Node::print(2, Node::ident(2, "y")),
        print(int(3)),
    ]);
    let err = interp.run(&tree).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "y".to_owned()
        }
    );
    assert_eq!(err.line(), Some(2));
    assert_eq!(interp.print_handler().output(), "1\n");
}

#[test]
fn operator_error_carries_operand_line() {
    let mut interp = capturing();
    let tree = Node::binary(6, BinaryOp::Divide, int(1), int(0));
    let err = interp.eval(&tree).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.line(), Some(6));
}

// === Expressions ===

#[test]
fn arithmetic_and_strings() {
    let mut interp = capturing();
    let tree = program(vec![
        print(Node::binary(
            1,
            BinaryOp::Plus,
            int(1),
            Node::binary(1, BinaryOp::Times, int(2), int(3)),
        )),
        print(Node::binary(1, BinaryOp::Times, int(2), Node::string(1, "ab"))),
        print(Node::binary(1, BinaryOp::GEq, int(2), int(3))),
    ]);
    interp.run(&tree).unwrap();
    assert_eq!(interp.print_handler().output(), "7\nabab\nFalse\n");
}

#[test]
fn logic_operators_evaluate_right_operand_first() {
    for op in [BinaryOp::LogicAnd, BinaryOp::LogicOr] {
        let mut interp = capturing();
        // `(x = true) op y`: if the left ran first, `x` would be bound when
        // `y` fails; right-first means `y` fails before `x` is ever bound.
        let tree = Node::binary(1, op, assign("x", Node::bool(1, true)), ident("y"));
        let err = interp.eval(&tree).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::UndefinedVariable { .. }));
        assert!(!interp.env().contains("x"), "left operand ran before right for {op}");
    }
}

#[test]
fn logic_operators_run_both_sides() {
    let env: Environment = [("f", Value::Bool(false))].into_iter().collect();
    let mut interp = InterpreterBuilder::new()
        .env(env)
        .print_handler(silent_handler())
        .build();
    // false && (undefined) still evaluates the right side and fails.
    let tree = Node::binary(1, BinaryOp::LogicAnd, ident("f"), ident("missing"));
    assert!(interp.eval(&tree).is_err());
}

#[test]
fn logic_or_rejects_one_non_boolean() {
    let mut interp = capturing();
    let tree = Node::binary(1, BinaryOp::LogicOr, Node::bool(1, true), int(1));
    assert!(matches!(
        interp.eval(&tree).unwrap_err().kind,
        EvalErrorKind::BinaryTypeMismatch { .. }
    ));
}

#[test]
fn negation_idiom() {
    let mut interp = capturing();
    let tree = Node::binary(1, BinaryOp::Times, int(-1), Node::bool(1, true));
    assert_eq!(interp.eval(&tree).unwrap(), Value::Bool(false));
}

// === Builder ===

#[test]
fn builder_seeds_bindings() {
    let env: Environment = [("greeting", Value::from("hi"))].into_iter().collect();
    let mut interp = InterpreterBuilder::new()
        .env(env)
        .print_handler(buffer_handler())
        .build();
    interp.run(&program(vec![print(ident("greeting"))])).unwrap();
    assert_eq!(interp.print_handler().output(), "hi\n");
}

#[test]
fn independent_interpreters_do_not_share_bindings() {
    let mut first = capturing();
    first.run(&program(vec![assign("x", int(1))])).unwrap();
    let second = capturing();
    assert!(second.env().is_empty());
    assert_eq!(first.into_env().get("x"), Some(&Value::Int(1)));
}

// === Depth ===

#[test]
fn deep_expression_tree() {
    let mut tree = int(0);
    for _ in 0..20_000 {
        tree = Node::binary(1, BinaryOp::Plus, tree, int(1));
    }
    let mut interp = capturing();
    assert_eq!(interp.eval(&tree).unwrap(), Value::Int(20_000));
}

#[test]
fn long_program() {
    let statements = (0..50_000).map(|i| assign("x", int(i))).collect();
    let mut interp = capturing();
    interp.run(&program(statements)).unwrap();
    assert_eq!(interp.env().get("x"), Some(&Value::Int(49_999)));
}

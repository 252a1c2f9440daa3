#![allow(clippy::unwrap_used)]

use super::*;
use mini_eval::buffer_handler;
use pretty_assertions::assert_eq;

/// Run in default mode; returns (status, program output, report).
fn run(source: &str) -> (i32, String, String) {
    let handler = buffer_handler();
    let mut report = Vec::new();
    let status = run_program(source.as_bytes(), handler.clone(), &mut report).unwrap();
    (status, handler.output(), String::from_utf8(report).unwrap())
}

fn tokens(source: &str) -> (i32, String) {
    let mut out = Vec::new();
    let status = print_tokens(source.as_bytes(), &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn stats(source: &str) -> (i32, String) {
    let mut out = Vec::new();
    let status = print_stats(source.as_bytes(), &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

// === Default mode ===

#[test]
fn runs_program() {
    assert_eq!(
        run("x = 3; if x < 5 then print x;"),
        (EXIT_SUCCESS, "3\n".to_owned(), String::new())
    );
}

#[test]
fn empty_program_succeeds_silently() {
    assert_eq!(run(""), (EXIT_SUCCESS, String::new(), String::new()));
}

#[test]
fn runtime_error_uses_line_zero() {
    let (status, output, report) = run("print 1;\n\nprint y;\nprint 2;");
    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(output, "1\n");
    assert_eq!(report, "0: RUNTIME ERROR undefined identifier y\n");
}

#[test]
fn parse_error_reports_line_and_skips_evaluation() {
    let (status, output, report) = run("print 1;\nprint 2\nprint 3;");
    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(output, "");
    assert_eq!(report, "3: missing `;` after statement, found PRINT\n");
}

#[test]
fn check_discards_output_but_reports_errors() {
    let mut report = Vec::new();
    let status = check_program("print 1; print 1 / 0;".as_bytes(), &mut report).unwrap();
    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(
        String::from_utf8(report).unwrap(),
        "0: RUNTIME ERROR division by zero\n"
    );

    let mut report = Vec::new();
    let status = check_program("print 1;".as_bytes(), &mut report).unwrap();
    assert_eq!(status, EXIT_SUCCESS);
    assert!(report.is_empty());
}

// === --tokens ===

#[test]
fn token_dump() {
    assert_eq!(
        tokens("if 1 < 2 then print \"hi\";"),
        (
            EXIT_SUCCESS,
            "IF\nICONST(1)\nLT\nICONST(2)\nTHEN\nPRINT\nSCONST(hi)\nSC\nDONE\n".to_owned()
        )
    );
}

#[test]
fn token_dump_stops_at_error() {
    assert_eq!(
        tokens("a & b;"),
        (EXIT_FAILURE, "IDENT(a)\nERR(&)\n".to_owned())
    );
}

// === --stats ===

#[test]
fn stats_report() {
    let (status, out) = stats("x = \"a\"; y = x + \"b\"; print x;");
    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(
        out,
        "LEAF COUNT: 6\nSTRING COUNT: 2\nIDENT COUNT: 2\nx, y\n"
    );
}

#[test]
fn stats_never_evaluates() {
    // Would be a runtime error if evaluated.
    let (status, out) = stats("print undefined / 0;");
    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(out, "LEAF COUNT: 2\nSTRING COUNT: 0\nIDENT COUNT: 1\nundefined\n");
}

#[test]
fn stats_for_empty_program() {
    assert_eq!(
        stats("# nothing"),
        (
            EXIT_SUCCESS,
            "LEAF COUNT: 0\nSTRING COUNT: 0\nIDENT COUNT: 0\n".to_owned()
        )
    );
}

#[test]
fn stats_reports_parse_error() {
    let (status, out) = stats("x = ;");
    assert_eq!(status, EXIT_FAILURE);
    assert_eq!(out, "1: expected an expression, found SC\n");
}

// === Input ===

#[test]
fn missing_file_message() {
    let err = open_input(Some("/definitely/not/here.mini")).err().unwrap();
    assert_eq!(err, "COULD NOT OPEN /definitely/not/here.mini");
}

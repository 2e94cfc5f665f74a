use std::fs;

use scicalc::{
    error::{EvalErrorKind, ParseErrorKind},
    evaluate,
    interpreter::parser::core::parse,
    math::angle::AngleUnit,
    session::CalculatorState,
};
use walkdir::WalkDir;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

#[test]
fn case_files_pass() {
    init_logger();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut state = CalculatorState::new();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            match line {
                "# mode: radians" => state.set_angle_unit(AngleUnit::Radians),
                "# mode: degrees" => state.set_angle_unit(AngleUnit::Degrees),
                _ if line.is_empty() || line.starts_with('#') => {},
                _ => {
                    count += 1;
                    check_case(&mut state, line)
                        .unwrap_or_else(|msg| panic!("{path:?} line {}: {line}\n{msg}", i + 1));
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Checks one `expression => expected` line, where `expected` is a number or
/// `!Kind` naming the parse error the expression must fail with.
fn check_case(state: &mut CalculatorState, line: &str) -> Result<(), String> {
    let (expression, expected) = line.rsplit_once(" => ")
                                     .ok_or_else(|| "missing ' => '".to_string())?;

    if let Some(kind) = expected.strip_prefix('!') {
        let err = parse(expression, state).err()
                                          .ok_or_else(|| format!("expected {kind}, got a value"))?;
        if format!("{:?}", err.kind) != kind {
            return Err(format!("expected {kind}, got {:?} ({})", err.kind, err.message));
        }

        let before = state.last_result();
        let outer = state.evaluate(expression)
                         .err()
                         .ok_or_else(|| "session accepted a failing expression".to_string())?;
        if outer.kind != EvalErrorKind::ParseError || state.last_result() != before {
            return Err(format!("session reported {:?}", outer.kind));
        }
        return Ok(());
    }

    let expected: f64 = expected.parse()
                                .map_err(|e| format!("bad expected value {expected:?}: {e}"))?;
    let actual = state.evaluate(expression)
                      .map_err(|e| format!("expected {expected}, got {e} ({})", e.message))?;
    if close(actual, expected) {
        Ok(())
    } else {
        Err(format!("expected {expected}, got {actual}"))
    }
}

fn assert_value(state: &mut CalculatorState, src: &str, expected: f64) {
    match state.evaluate(src) {
        Ok(v) => assert!(close(v, expected), "{src} = {v}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e} ({})", e.message),
    }
}

fn assert_failure(src: &str, kind: ParseErrorKind) {
    let state = CalculatorState::new();
    match parse(src, &state) {
        Ok(v) => panic!("{src} = {v}, expected {kind:?}"),
        Err(e) => assert_eq!(e.kind, kind, "{src}: {}", e.message),
    }

    let mut state = CalculatorState::new();
    let err = evaluate(src, &mut state).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ParseError);
}

#[test]
fn standard_precedence() {
    init_logger();
    let mut state = CalculatorState::new();
    assert_value(&mut state, "2+3*4", 14.0);
    assert_value(&mut state, "(2+3)*4", 20.0);
    assert_value(&mut state, "2^3^2", 64.0);
}

#[test]
fn domain_and_division_failures() {
    assert_failure("10/0", ParseErrorKind::DivisionByZero);
    assert_failure("sqrt(-1)", ParseErrorKind::DomainError);
    assert_failure("factorial(171)", ParseErrorKind::DomainError);
}

#[test]
fn factorial_at_the_limit() {
    let mut state = CalculatorState::new();
    let value = state.evaluate("factorial(170)").unwrap();
    assert!(value.is_finite());
}

#[test]
fn angle_mode_changes_trigonometry() {
    let mut state = CalculatorState::new();
    assert_value(&mut state, "sin(90)", 1.0);

    state.set_angle_unit(AngleUnit::Radians);
    assert_value(&mut state, "sin(90)", 0.893_996_663_600_558);
}

#[test]
fn memory_round_trip() {
    init_logger();
    let mut state = CalculatorState::new();
    state.memory_store(5.0);
    assert_value(&mut state, "M", 5.0);
    assert_value(&mut state, "mem*3", 15.0);

    state.memory_add(1.0);
    assert_value(&mut state, "M", 6.0);
    state.memory_subtract(2.0);
    assert_value(&mut state, "M", 4.0);

    state.memory_clear();
    assert_value(&mut state, "M", 0.0);
    assert_eq!(state.memory_recall(), 0.0);
}

#[test]
fn last_answer() {
    let mut state = CalculatorState::new();
    assert_value(&mut state, "3+4", 7.0);
    assert_value(&mut state, "ans", 7.0);
    assert_eq!(state.last_result(), 7.0);
    assert_eq!(state.last_expression(), "ans");
}

#[test]
fn evaluation_is_idempotent() {
    let mut state = CalculatorState::new();
    state.memory_store(2.5);
    let first = state.evaluate("sin(30) * M + comb(10, 3)").unwrap();
    let second = state.evaluate("sin(30) * M + comb(10, 3)").unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_input_collapses_to_parse_error() {
    assert_failure("2+(3", ParseErrorKind::MismatchedParentheses);
    assert_failure("foo(1)", ParseErrorKind::InvalidFunction);
    assert_failure("2+2 3", ParseErrorKind::InvalidSyntax);
}

#[test]
fn failure_leaves_session_usable() {
    let mut state = CalculatorState::new();
    assert_value(&mut state, "6*7", 42.0);

    let err = state.evaluate("2+(3").unwrap_err();
    assert_eq!(err.to_string(), "ERROR: Parse error");
    assert_eq!(err.expression, "2+(3");
    assert_eq!(err.message, "Expected ')'");
    assert_eq!(state.last_expression(), "2+(3");
    assert_eq!(state.last_result(), 42.0);

    assert_value(&mut state, "ans+1", 43.0);
}

#[test]
fn empty_expression_is_invalid_input() {
    let mut state = CalculatorState::new();
    let err = state.evaluate("").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::InvalidInput);
    assert_eq!(err.to_string(), "ERROR: Invalid input");

    let err = state.evaluate(" ").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ParseError);
}

#[test]
fn combinatorics_and_number_theory() {
    let mut state = CalculatorState::new();
    assert_value(&mut state, "comb(5,2)", 10.0);
    assert_value(&mut state, "perm(5,2)", 20.0);
    assert_value(&mut state, "gcd(12,18)", 6.0);
    assert_value(&mut state, "lcm(4,6)", 12.0);
}

#[test]
fn formatting_uses_session_precision() {
    let mut state = CalculatorState::new();
    let third = state.evaluate("1/3").unwrap();
    assert_eq!(state.format(third), "0.3333333333");

    state.set_precision(3);
    assert_eq!(state.format(third), "0.333");
    let big = state.evaluate("2^40").unwrap();
    assert_eq!(state.format(big), "1099511627776");
    let sci = state.evaluate("2^0.5*1e12").unwrap();
    assert_eq!(state.format(sci), "1.414e+12");
}

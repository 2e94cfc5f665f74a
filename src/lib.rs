//! # scicalc
//!
//! scicalc is a scientific-calculator expression evaluator written in Rust.
//! It tokenizes and evaluates expressions in a single recursive-descent pass,
//! with support for operator precedence, named constants, trigonometric,
//! logarithmic and combinatorial functions, a memory register and the last
//! answer.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::EvalError, session::CalculatorState};

/// Provides both error taxonomies.
///
/// This module defines the fine-grained parse error kinds raised inside the
/// parser and dispatcher, and the evaluation error kinds used by the numeric
/// primitives and the session facade.
///
/// # Responsibilities
/// - Defines `ParseErrorKind` and `EvalErrorKind` with their display strings.
/// - Attaches the source offset to parse errors and the expression text to
///   evaluation errors.
/// - Narrows primitive failures into parse error kinds.
pub mod error;
/// Turns expression text into a value.
///
/// This module ties together the lexer, the recursive-descent parser and the
/// function dispatcher.
///
/// # Responsibilities
/// - Coordinates tokenizing, parsing and function dispatch.
/// - Provides the parser entry point used by the session.
pub mod interpreter;
/// Guarded numeric primitives.
///
/// Every primitive returns a `MathResult` and never hands back NaN or
/// infinity as a successful value.
///
/// # Responsibilities
/// - Arithmetic, roots and powers with zero and domain checks.
/// - Trigonometric, hyperbolic, logarithmic and exponential functions.
/// - Factorial, gamma, combinatorics, gcd and lcm.
/// - Complex numbers.
pub mod math;
/// The calculator session.
///
/// Holds the memory register, last result, angle unit and precision, and
/// exposes the evaluation entry point and result formatting.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert parser doubles into integers for integer-valued primitives.
/// - Convert integer results back into `f64` only when the value is exact.
pub mod util;

/// Evaluates `expression` against `state`.
///
/// This is the same as [`CalculatorState::evaluate`].
///
/// # Examples
/// ```
/// use scicalc::{error::EvalErrorKind, evaluate, session::CalculatorState};
///
/// let mut state = CalculatorState::new();
/// assert_eq!(evaluate("2^3^2", &mut state), Ok(64.0));
///
/// let err = evaluate("10/0", &mut state).unwrap_err();
/// assert_eq!(err.kind, EvalErrorKind::ParseError);
/// assert_eq!(state.last_result(), 64.0);
/// ```
pub fn evaluate(expression: &str, state: &mut CalculatorState) -> Result<f64, EvalError> {
    state.evaluate(expression)
}

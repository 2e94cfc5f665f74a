/// Parse context and the top-level entry point.
///
/// Holds the lexer, the lookahead token and the session being evaluated
/// against, and checks that a complete expression consumes all input.
pub mod core;

/// Additive and multiplicative levels plus exponentiation.
///
/// Implements `expression`, `term` and `factor`, all left-associative.
pub mod binary;

/// Primary expressions.
///
/// Numbers, constants, signs, grouping, function calls and the memory and
/// last-answer pseudo-variables.
pub mod unary;

/// Function-call helpers.
pub mod utils;

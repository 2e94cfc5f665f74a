/// Named constants.
///
/// The fixed table of constants such as `pi` and `φ` recognized by the lexer.
pub mod constant;

/// Function evaluation.
///
/// The builtin function tables and the dispatcher that applies them.
pub mod function;

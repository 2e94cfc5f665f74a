/// Builtin function identifiers.
///
/// Generates the one-argument and two-argument function tables and the
/// name lookups used by the lexer.
pub mod builtin;

/// Function dispatch.
///
/// Checks the argument count of a call and forwards it to the matching
/// numeric primitive.
pub mod core;

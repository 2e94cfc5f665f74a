/// The evaluator module resolves builtin names and applies them.
///
/// It holds the closed tables of builtin functions and named constants, and
/// the dispatcher that maps a function identifier and its argument values onto
/// the numeric primitives.
///
/// # Responsibilities
/// - Defines the `Function` and `Constant` identifiers resolved by the lexer.
/// - Checks arity and converts angles according to the session's unit.
/// - Narrows primitive failures into parse error kinds.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw source text and produces tokens for numbers,
/// operators, parentheses, commas and identifiers. Identifiers are classified
/// as functions, constants or variables as they are read.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offset.
/// - Never fails: unknown characters become `Unknown` tokens and exhausted
///   input yields `End`.
pub mod lexer;
/// The parser module evaluates expressions by recursive descent.
///
/// Each grammar rule computes its value directly as it consumes tokens, so no
/// syntax tree is built. The first failure stops evaluation.
///
/// # Responsibilities
/// - Implements operator precedence and grouping.
/// - Collects function arguments and hands them to the dispatcher.
/// - Reports failures with the offset of the token being examined.
pub mod parser;

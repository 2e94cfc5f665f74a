use thiserror::Error;

/// Represents all errors that can occur while parsing and evaluating an
/// expression inside the parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A character that starts no token was found.
    #[error("Invalid character")]
    InvalidCharacter,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    /// The function is unknown or cannot be applied to its arguments.
    #[error("Invalid function")]
    InvalidFunction,
    /// The token stream does not match the grammar.
    #[error("Invalid syntax")]
    InvalidSyntax,
    /// Division or modulo by exactly zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// An operation produced a value outside the real numbers.
    #[error("Domain error")]
    DomainError,
    /// A function call supplied more arguments than allowed.
    #[error("Too many arguments")]
    TooManyArguments,
    /// A function call supplied fewer arguments than required.
    #[error("Too few arguments")]
    TooFewArguments,
}

/// A parse failure together with the place it happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error at offset {position}: {message}")]
pub struct ParseError {
    /// The kind of failure.
    pub kind:     ParseErrorKind,
    /// Byte offset of the parse cursor when the failure was raised.
    pub position: usize,
    /// Details about the failure.
    pub message:  String,
}

impl ParseError {
    /// Creates an error whose message is the kind's own description.
    ///
    /// # Example
    /// ```
    /// use scicalc::error::{ParseError, ParseErrorKind};
    ///
    /// let err = ParseError::new(ParseErrorKind::InvalidSyntax, 3);
    /// assert_eq!(err.to_string(), "Error at offset 3: Invalid syntax");
    /// ```
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind,
               position,
               message: kind.to_string() }
    }

    /// Creates an error with a more specific message.
    #[must_use]
    pub fn with_message(kind: ParseErrorKind, position: usize, message: impl Into<String>) -> Self {
        Self { kind,
               position,
               message: message.into() }
    }
}

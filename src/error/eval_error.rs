use thiserror::Error;

use crate::error::ParseErrorKind;

/// Represents every way an evaluation can fail.
///
/// Numeric primitives report their failures with these kinds, and the session
/// facade uses them for its public error descriptor. Parser failures of any
/// kind collapse into [`EvalErrorKind::ParseError`] once they cross the facade.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalErrorKind {
    /// The expression was empty or otherwise unusable.
    #[error("Invalid input")]
    InvalidInput,
    /// A divisor or reciprocand was exactly zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// An argument was outside the function's domain.
    #[error("Domain error")]
    DomainError,
    /// A result was not a finite number.
    #[error("Overflow error")]
    Overflow,
    /// A result was too small to be represented.
    #[error("Underflow error")]
    Underflow,
    /// The calculator state could not be allocated or accessed.
    #[error("Memory error")]
    MemoryError,
    /// A function could not be applied.
    #[error("Invalid function")]
    InvalidFunction,
    /// The expression could not be parsed or evaluated by the parser.
    #[error("Parse error")]
    ParseError,
}

impl EvalErrorKind {
    /// Narrows a primitive failure into the parser's error taxonomy.
    ///
    /// Domain, overflow and underflow failures all become
    /// [`ParseErrorKind::DomainError`], division by zero stays division by
    /// zero, and anything else is reported as an invalid function.
    ///
    /// # Example
    /// ```
    /// use scicalc::error::{EvalErrorKind, ParseErrorKind};
    ///
    /// assert_eq!(EvalErrorKind::Overflow.to_parse_kind(), ParseErrorKind::DomainError);
    /// assert_eq!(EvalErrorKind::MemoryError.to_parse_kind(),
    ///            ParseErrorKind::InvalidFunction);
    /// ```
    #[must_use]
    pub const fn to_parse_kind(self) -> ParseErrorKind {
        match self {
            Self::DivisionByZero => ParseErrorKind::DivisionByZero,
            Self::DomainError | Self::Overflow | Self::Underflow => ParseErrorKind::DomainError,
            _ => ParseErrorKind::InvalidFunction,
        }
    }
}

/// The error descriptor handed back to whoever called the session facade.
///
/// Carries the coarse error kind, a human-readable message and the expression
/// text that was being evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("ERROR: {kind}")]
pub struct EvalError {
    /// What went wrong.
    pub kind:       EvalErrorKind,
    /// Details about the failure, suitable for display.
    pub message:    String,
    /// The expression that was being evaluated.
    pub expression: String,
}

impl EvalError {
    /// Creates a descriptor whose message is the kind's own description.
    #[must_use]
    pub fn new(kind: EvalErrorKind, expression: &str) -> Self {
        Self { kind,
               message: kind.to_string(),
               expression: expression.to_string() }
    }

    /// Creates a descriptor with a custom message.
    #[must_use]
    pub fn with_message(kind: EvalErrorKind, message: impl Into<String>, expression: &str) -> Self {
        Self { kind,
               message: message.into(),
               expression: expression.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_displays_kind() {
        let err = EvalError::new(EvalErrorKind::DivisionByZero, "1/0");
        assert_eq!(err.to_string(), "ERROR: Division by zero");
        assert_eq!(err.message, "Division by zero");
        assert_eq!(err.expression, "1/0");
    }

    #[test]
    fn primitive_failures_narrow_into_parse_kinds() {
        assert_eq!(EvalErrorKind::DivisionByZero.to_parse_kind(),
                   ParseErrorKind::DivisionByZero);
        assert_eq!(EvalErrorKind::DomainError.to_parse_kind(), ParseErrorKind::DomainError);
        assert_eq!(EvalErrorKind::Underflow.to_parse_kind(), ParseErrorKind::DomainError);
        assert_eq!(EvalErrorKind::InvalidInput.to_parse_kind(),
                   ParseErrorKind::InvalidFunction);
    }
}

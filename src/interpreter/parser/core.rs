use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::binary::parse_expression,
    },
    session::CalculatorState,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Mutable state threaded through every grammar rule during one evaluation.
///
/// The lexer and the lookahead token are the only things that change; the
/// session is read for memory, the last result and the angle unit.
pub struct ParseContext<'a> {
    lexer:   Lexer<'a>,
    state:   &'a CalculatorState,
    current: Token<'a>,
}

impl<'a> ParseContext<'a> {
    /// Creates a context positioned on the first token of `source`.
    pub fn new(source: &'a str, state: &'a CalculatorState) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer, state, current }
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current(&self) -> Token<'a> {
        self.current
    }

    /// Replaces the lookahead with the next token from the lexer.
    pub fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Byte offset just past the lookahead token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.lexer.position()
    }

    #[must_use]
    pub const fn state(&self) -> &'a CalculatorState {
        self.state
    }

    /// An error of `kind` at the lookahead token.
    #[must_use]
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current.offset)
    }

    /// An error of `kind` at the lookahead token with a specific message.
    #[must_use]
    pub fn error_with(&self, kind: ParseErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::with_message(kind, self.current.offset, message)
    }
}

/// Parses and evaluates a complete expression.
///
/// This is the entry point for expression parsing. Exactly one expression
/// must make up the whole input.
///
/// Grammar: `input := expression End`
///
/// # Errors
/// - `InvalidSyntax` for empty input or tokens left after the expression.
/// - Anything raised while evaluating the expression itself.
///
/// # Example
/// ```
/// use scicalc::{
///     error::ParseErrorKind, interpreter::parser::core::parse, session::CalculatorState,
/// };
///
/// let state = CalculatorState::new();
/// assert_eq!(parse("2 + 3 * 4", &state), Ok(14.0));
/// assert_eq!(parse("2+2 3", &state).unwrap_err().kind, ParseErrorKind::InvalidSyntax);
/// ```
pub fn parse(source: &str, state: &CalculatorState) -> ParseResult<f64> {
    let mut ctx = ParseContext::new(source, state);

    if ctx.current().kind == TokenKind::End {
        return Err(ctx.error_with(ParseErrorKind::InvalidSyntax, "Empty expression"));
    }

    let value = parse_expression(&mut ctx)?;

    if ctx.current().kind != TokenKind::End {
        let message = format!("Unexpected '{}' after expression", ctx.current().text);
        return Err(ctx.error_with(ParseErrorKind::InvalidSyntax, message));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(source: &str) -> ParseErrorKind {
        parse(source, &CalculatorState::new()).unwrap_err().kind
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(kind_of("   "), ParseErrorKind::InvalidSyntax);
    }

    #[test]
    fn trailing_tokens_are_rejected_at_their_offset() {
        let err = parse("2+2 3", &CalculatorState::new()).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
        assert_eq!(err.position, 4);

        assert_eq!(kind_of("(1))"), ParseErrorKind::InvalidSyntax);
    }

    #[test]
    fn context_tracks_the_cursor() {
        let state = CalculatorState::new();
        let mut ctx = ParseContext::new("12 + 3", &state);
        assert_eq!(ctx.current().text, "12");
        assert_eq!(ctx.position(), 2);
        ctx.advance();
        assert_eq!(ctx.current().offset, 3);
        ctx.advance();
        ctx.advance();
        assert_eq!(ctx.current().kind, TokenKind::End);
        assert_eq!(ctx.position(), 6);
    }
}

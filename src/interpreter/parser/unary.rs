use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::{Operator, TokenKind},
        parser::{
            binary::parse_expression,
            core::{ParseContext, ParseResult},
            utils::{expect_closing_paren, parse_call},
        },
    },
};

/// Parses a primary expression.
///
/// A sign applies to the primary that follows it, before any `^`, so `-2^2`
/// is `(-2)^2 = 4`.
///
/// Grammar:
/// ```text
///     primary := NUMBER | CONSTANT
///              | ('+' | '-') primary
///              | '(' expression ')'
///              | FUNCTION '(' [expression (',' expression)*] ')'
///              | 'M' | 'mem' | 'ans' | 'ANS'
/// ```
///
/// # Errors
/// - `InvalidSyntax` for a number with no digits, an unknown variable or a
///   token that cannot start a primary.
/// - `InvalidCharacter` for a character the lexer did not recognize.
/// - `InvalidFunction` for an unknown name used as a function.
/// - `MismatchedParentheses` when a group is not closed.
pub fn parse_primary(ctx: &mut ParseContext<'_>) -> ParseResult<f64> {
    let token = ctx.current();

    match token.kind {
        TokenKind::Number(value) => {
            if !token.text.bytes().any(|b| b.is_ascii_digit()) {
                let message = format!("Malformed number '{}'", token.text);
                return Err(ctx.error_with(ParseErrorKind::InvalidSyntax, message));
            }
            if !value.is_finite() {
                let message = format!("Number '{}' is out of range", token.text);
                return Err(ctx.error_with(ParseErrorKind::DomainError, message));
            }
            ctx.advance();
            Ok(value)
        },
        TokenKind::Constant(constant) => {
            ctx.advance();
            Ok(constant.value())
        },
        TokenKind::Operator(Operator::Sub) => {
            ctx.advance();
            Ok(-parse_primary(ctx)?)
        },
        TokenKind::Operator(Operator::Add) => {
            ctx.advance();
            parse_primary(ctx)
        },
        TokenKind::LeftParen => {
            ctx.advance();
            let value = parse_expression(ctx)?;
            expect_closing_paren(ctx)?;
            Ok(value)
        },
        TokenKind::Function(function) => parse_call(ctx, function),
        TokenKind::Variable => parse_variable(ctx),
        TokenKind::Unknown => {
            let message = format!("Invalid character '{}'", token.text);
            Err(ctx.error_with(ParseErrorKind::InvalidCharacter, message))
        },
        TokenKind::End => {
            Err(ctx.error_with(ParseErrorKind::InvalidSyntax, "Unexpected end of expression"))
        },
        TokenKind::Operator(_) | TokenKind::RightParen | TokenKind::Comma => {
            let message = format!("Unexpected '{}'", token.text);
            Err(ctx.error_with(ParseErrorKind::InvalidSyntax, message))
        },
    }
}

/// Parses one of the session pseudo-variables.
///
/// `M` and `mem` recall the memory register; `ans` and `ANS` give the last
/// successful result.
fn parse_variable(ctx: &mut ParseContext<'_>) -> ParseResult<f64> {
    let token = ctx.current();

    let value = match token.text {
        "M" | "mem" => Some(ctx.state().memory_recall()),
        "ans" | "ANS" => Some(ctx.state().last_result()),
        _ => None,
    };
    if let Some(value) = value {
        ctx.advance();
        return Ok(value);
    }

    ctx.advance();
    if ctx.current().kind == TokenKind::LeftParen {
        return Err(ParseError::with_message(ParseErrorKind::InvalidFunction,
                                            token.offset,
                                            format!("Unknown function '{}'", token.text)));
    }
    Err(ParseError::with_message(ParseErrorKind::InvalidSyntax,
                                 token.offset,
                                 format!("Unknown variable '{}'", token.text)))
}

use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::{
        evaluator::function::{builtin::Function, core::evaluate_function},
        lexer::TokenKind,
        parser::{
            binary::parse_expression,
            core::{ParseContext, ParseResult},
        },
    },
};

/// Most arguments a single function call may supply.
pub const MAX_ARGUMENTS: usize = 10;

/// Consumes a `)` or fails with `MismatchedParentheses`.
pub fn expect_closing_paren(ctx: &mut ParseContext<'_>) -> ParseResult<()> {
    if ctx.current().kind != TokenKind::RightParen {
        return Err(ctx.error_with(ParseErrorKind::MismatchedParentheses, "Expected ')'"));
    }
    ctx.advance();
    Ok(())
}

/// Parses a function call and evaluates it.
///
/// The lookahead must be the function name. Dispatcher failures are reported
/// at the name's offset.
///
/// Grammar: `call := FUNCTION '(' arguments`
pub fn parse_call(ctx: &mut ParseContext<'_>, function: Function) -> ParseResult<f64> {
    let offset = ctx.current().offset;
    ctx.advance();

    if ctx.current().kind != TokenKind::LeftParen {
        let message = format!("Expected '(' after '{function}'");
        return Err(ctx.error_with(ParseErrorKind::InvalidSyntax, message));
    }
    ctx.advance();

    let args = parse_arguments(ctx)?;

    evaluate_function(function, &args, ctx.state()).map_err(|kind| {
        ParseError::with_message(kind, offset, format!("{kind} in '{function}'"))
    })
}

/// Parses a comma-separated argument list, including the closing `)`.
///
/// An immediately closing parenthesis yields no arguments. More than
/// [`MAX_ARGUMENTS`] arguments fail with `TooManyArguments` as soon as the
/// extra one is reached.
///
/// Grammar: `arguments := ')' | expression (',' expression)* ')'`
pub fn parse_arguments(ctx: &mut ParseContext<'_>) -> ParseResult<Vec<f64>> {
    let mut args = Vec::new();

    if ctx.current().kind == TokenKind::RightParen {
        ctx.advance();
        return Ok(args);
    }

    loop {
        if args.len() >= MAX_ARGUMENTS {
            let message = format!("At most {MAX_ARGUMENTS} arguments are allowed");
            return Err(ctx.error_with(ParseErrorKind::TooManyArguments, message));
        }
        args.push(parse_expression(ctx)?);

        match ctx.current().kind {
            TokenKind::Comma => ctx.advance(),
            _ => {
                expect_closing_paren(ctx)?;
                return Ok(args);
            },
        }
    }
}

use crate::{
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::{Operator, TokenKind},
        parser::{
            core::{ParseContext, ParseResult},
            unary::parse_primary,
        },
    },
    math::{MathResult, arith},
};

/// Parses additive expressions.
///
/// Handles the `+` and `-` operators, left-associatively.
///
/// Grammar: `expression := term (('+' | '-') term)*`
///
/// # Errors
/// Any error raised by an operand, or a narrowed primitive failure at the
/// operator's offset.
pub fn parse_expression(ctx: &mut ParseContext<'_>) -> ParseResult<f64> {
    let mut value = parse_term(ctx)?;

    while let TokenKind::Operator(op @ (Operator::Add | Operator::Sub)) = ctx.current().kind {
        let offset = ctx.current().offset;
        ctx.advance();
        let rhs = parse_term(ctx)?;

        value = apply(op, value, rhs, offset)?;
    }

    Ok(value)
}

/// Parses multiplicative expressions.
///
/// Handles `*`, `/` and `%`, left-associatively. A zero divisor fails
/// immediately with `DivisionByZero`.
///
/// Grammar: `term := factor (('*' | '/' | '%') factor)*`
pub fn parse_term(ctx: &mut ParseContext<'_>) -> ParseResult<f64> {
    let mut value = parse_factor(ctx)?;

    while let TokenKind::Operator(op @ (Operator::Mul | Operator::Div | Operator::Mod)) =
        ctx.current().kind
    {
        let offset = ctx.current().offset;
        ctx.advance();
        let rhs = parse_factor(ctx)?;

        value = apply(op, value, rhs, offset)?;
    }

    Ok(value)
}

/// Parses exponentiation.
///
/// Each right operand is a `primary`, so `^` chains apply left to right:
/// `2^3^2` is `(2^3)^2 = 64`. A non-finite power is a `DomainError`.
///
/// Grammar: `factor := primary ('^' primary)*`
pub fn parse_factor(ctx: &mut ParseContext<'_>) -> ParseResult<f64> {
    let mut value = parse_primary(ctx)?;

    while ctx.current().kind == TokenKind::Operator(Operator::Pow) {
        let offset = ctx.current().offset;
        ctx.advance();
        let exponent = parse_primary(ctx)?;

        value = value.powf(exponent);
        if !value.is_finite() {
            return Err(ParseError::new(ParseErrorKind::DomainError, offset));
        }
    }

    Ok(value)
}

/// Applies an additive or multiplicative operator through the guarded
/// primitives.
fn apply(op: Operator, lhs: f64, rhs: f64, offset: usize) -> ParseResult<f64> {
    let result: MathResult<f64> = match op {
        Operator::Add => arith::add(lhs, rhs),
        Operator::Sub => arith::subtract(lhs, rhs),
        Operator::Mul => arith::multiply(lhs, rhs),
        Operator::Div => arith::divide(lhs, rhs),
        Operator::Mod => arith::modulo(lhs, rhs),
        Operator::Pow => arith::power(lhs, rhs),
    };

    result.map_err(|kind| ParseError::new(kind.to_parse_kind(), offset))
}

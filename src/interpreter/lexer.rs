use std::fmt::Display;

use log::trace;
use logos::Logos;

use crate::interpreter::evaluator::{constant::Constant, function::builtin::Function};

/// The classification of a lexical token.
///
/// Variants without a pattern are produced by callbacks (`Function`,
/// `Constant`) or by the [`Lexer`] wrapper (`End`, `Unknown`).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `2.75`, `.5`, `2.` or `2.1e-10`.
    ///
    /// A lone `.` is still a number token; the parser rejects it.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]*([eE][+-]?[0-9]*)?", parse_number)]
    Number(f64),
    /// One of `+ - * / ^ %`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    #[token("%", |_| Operator::Mod)]
    Operator(Operator),
    /// A builtin function name.
    Function(Function),
    /// A named constant such as `pi` or `φ`.
    Constant(Constant),
    /// Any other identifier. Only `M`, `mem`, `ans` and `ANS` mean something.
    #[regex(r"[a-zA-Z_√πφ][a-zA-Z0-9_√πφ]*", classify_identifier)]
    Variable,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input.
    End,
    /// A character no other rule matches.
    Unknown,
}

/// A binary or sign operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl Operator {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses the captured literal the way `strtod` would.
///
/// An exponent marker with no digits after it (`2e`, `1e+`) is ignored, and
/// a literal with no digits at all evaluates to `0`.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> f64 {
    let text = lex.slice();
    text.parse()
        .ok()
        .or_else(|| {
            text.find(['e', 'E'])
                .and_then(|exponent| text[..exponent].parse().ok())
        })
        .unwrap_or(0.0)
}

/// Resolves an identifier against the function table, then the constant
/// table, falling back to a variable.
fn classify_identifier(lex: &logos::Lexer<TokenKind>) -> TokenKind {
    let name = lex.slice();
    if let Some(function) = Function::from_name(name) {
        TokenKind::Function(function)
    } else if let Some(constant) = Constant::from_name(name) {
        TokenKind::Constant(constant)
    } else {
        TokenKind::Variable
    }
}

/// A classified lexical unit with its source text and byte offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// What the token is.
    pub kind:   TokenKind,
    /// The source text the token was produced from. Empty for `End`.
    pub text:   &'a str,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

impl Token<'_> {
    /// The numeric value carried by `Number` and `Constant` tokens.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            TokenKind::Constant(constant) => Some(constant.value()),
            _ => None,
        }
    }
}

/// A total, pull-based tokenizer.
///
/// Every call to [`Lexer::next_token`] returns a token: unmatched characters
/// become `Unknown` and exhausted input yields `End` indefinitely.
///
/// # Example
/// ```
/// use scicalc::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("2 ^ x");
/// assert_eq!(lexer.next_token().kind, TokenKind::Number(2.0));
/// lexer.next_token();
/// assert_eq!(lexer.next_token().kind, TokenKind::Variable);
/// assert_eq!(lexer.next_token().kind, TokenKind::End);
/// assert_eq!(lexer.next_token().kind, TokenKind::End);
/// ```
pub struct Lexer<'a> {
    source:   &'a str,
    inner:    logos::Lexer<'a, TokenKind>,
    position: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source,
               inner: TokenKind::lexer(source),
               position: 0,
               finished: false }
    }

    /// Pulls the next token and advances the cursor past it.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = match self.inner.next() {
            Some(result) => {
                let span = self.inner.span();
                self.position = span.end;
                Token { kind:   result.unwrap_or(TokenKind::Unknown),
                        text:   self.inner.slice(),
                        offset: span.start, }
            },
            None => {
                self.position = self.source.len();
                Token { kind:   TokenKind::End,
                        text:   "",
                        offset: self.source.len(), }
            },
        };

        trace!("token {:?} {:?} at {}", token.kind, token.text, token.offset);
        token
    }

    /// Byte offset just past the most recently returned token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token including the final `End`, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::End;
        Some(token)
    }
}

/// Tokenizes an entire source string, ending with an `End` token.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::function::builtin::{BinaryFunction, UnaryFunction};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn numbers() {
        assert_eq!(kinds("2.75"), vec![TokenKind::Number(2.75), TokenKind::End]);
        assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5), TokenKind::End]);
        assert_eq!(kinds("2."), vec![TokenKind::Number(2.0), TokenKind::End]);
        assert_eq!(kinds("2.5e-3"), vec![TokenKind::Number(0.0025), TokenKind::End]);
        assert_eq!(kinds("1E3"), vec![TokenKind::Number(1000.0), TokenKind::End]);
    }

    #[test]
    fn dangling_exponent_and_bare_dot() {
        assert_eq!(kinds("2e"), vec![TokenKind::Number(2.0), TokenKind::End]);
        assert_eq!(kinds("1e+"), vec![TokenKind::Number(1.0), TokenKind::End]);

        let tokens = tokenize(".");
        assert_eq!(tokens[0].kind, TokenKind::Number(0.0));
        assert_eq!(tokens[0].text, ".");
    }

    #[test]
    fn second_decimal_point_starts_a_new_number() {
        assert_eq!(kinds("1.2.3"),
                   vec![TokenKind::Number(1.2), TokenKind::Number(0.3), TokenKind::End]);
    }

    #[test]
    fn operators_and_punctuation() {
        assert_eq!(kinds("+-*/^%(),"),
                   vec![TokenKind::Operator(Operator::Add),
                        TokenKind::Operator(Operator::Sub),
                        TokenKind::Operator(Operator::Mul),
                        TokenKind::Operator(Operator::Div),
                        TokenKind::Operator(Operator::Pow),
                        TokenKind::Operator(Operator::Mod),
                        TokenKind::LeftParen,
                        TokenKind::RightParen,
                        TokenKind::Comma,
                        TokenKind::End]);
    }

    #[test]
    fn identifiers_are_classified() {
        assert_eq!(kinds("sin gcd pi √2 φ M foo"),
                   vec![TokenKind::Function(Function::Unary(UnaryFunction::Sin)),
                        TokenKind::Function(Function::Binary(BinaryFunction::Gcd)),
                        TokenKind::Constant(Constant::Pi),
                        TokenKind::Constant(Constant::Sqrt2),
                        TokenKind::Constant(Constant::Phi),
                        TokenKind::Variable,
                        TokenKind::Variable,
                        TokenKind::End]);
    }

    #[test]
    fn identifier_runs_are_maximal() {
        let tokens = tokenize("sinh2");
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(tokens[0].text, "sinh2");
    }

    #[test]
    fn unknown_characters_do_not_stop_the_lexer() {
        let tokens = tokenize("2 $ 3");
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].offset, 2);
        assert_eq!(tokens[2].kind, TokenKind::Number(3.0));
    }

    #[test]
    fn offsets_skip_whitespace() {
        let tokens = tokenize("  12 +\t\n7 ");
        assert_eq!(tokens[0].offset, 2);
        assert_eq!(tokens[1].offset, 5);
        assert_eq!(tokens[2].offset, 8);
        assert_eq!(tokens[3].offset, 10);
        assert_eq!(tokens[3].kind, TokenKind::End);
    }

    #[test]
    fn constant_tokens_carry_values() {
        let tokens = tokenize("e");
        assert_eq!(tokens[0].value(), Some(std::f64::consts::E));
        assert_eq!(tokens[1].value(), None);
    }
}

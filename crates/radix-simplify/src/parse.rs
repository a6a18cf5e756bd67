//! Infix expression parser.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! sum     := product (("+" | "-") product)*
//! product := unary (("*" | "/") unary)*
//! unary   := "-" unary | power
//! power   := atom (("**" | "^") unary)?
//! atom    := number | name | name "(" sum ")" | "(" sum ")"
//! ```
//!
//! Numbers are exact: `0.25` is read as `1/4`.

use egg::{Id, RecExpr, Symbol};
use radix_integers::{Integer, Rational};
use thiserror::Error;

use crate::language::RadixLang;

/// Errors from [`parse_expr`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("unexpected character {ch:?} at offset {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset in the input.
        pos: usize,
    },
    /// A token in a position where it is not allowed.
    #[error("unexpected {token} at offset {pos}")]
    UnexpectedToken {
        /// Rendered token.
        token: String,
        /// Byte offset in the input.
        pos: usize,
    },
    /// Input ended in the middle of an expression.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A function other than `sqrt`.
    #[error("unknown function {0:?}")]
    UnknownFunction(String),
    /// A malformed numeric literal.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Num(Rational),
    Name(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Num(n) => write!(f, "number {n}"),
            Token::Name(s) => write!(f, "name {s:?}"),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Caret => write!(f, "'**'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

fn number(text: &str) -> Result<Rational, ParseError> {
    let invalid = || ParseError::InvalidNumber(text.to_string());
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    let digits = format!("{whole}{frac}");
    let num: Integer = digits.parse().map_err(|_| invalid())?;
    let scale = Integer::new(10).pow(u32::try_from(frac.len()).map_err(|_| invalid())?);
    Ok(Rational::new(num, scale))
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some(&(pos, ch)) = chars.peek() {
        let single = match ch {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '/' => Some(Token::Slash),
            '^' => Some(Token::Caret),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            '*' => {
                chars.next();
                if chars.peek().is_some_and(|&(_, c)| c == '*') {
                    chars.next();
                    tokens.push((Token::Caret, pos));
                } else {
                    tokens.push((Token::Star, pos));
                }
                continue;
            }
            _ => None,
        };
        if let Some(tok) = single {
            chars.next();
            tokens.push((tok, pos));
            continue;
        }

        let mut end = pos;
        if ch.is_ascii_digit() || ch == '.' {
            while let Some(&(i, c)) = chars.peek() {
                if !(c.is_ascii_digit() || c == '.') {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            tokens.push((Token::Num(number(&input[pos..end])?), pos));
        } else if ch.is_alphabetic() || ch == '_' {
            while let Some(&(i, c)) = chars.peek() {
                if !(c.is_alphanumeric() || c == '_') {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            tokens.push((Token::Name(input[pos..end].to_string()), pos));
        } else {
            return Err(ParseError::UnexpectedChar { ch, pos });
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    at: usize,
    expr: RecExpr<RadixLang>,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.at).map(|(t, _)| t)
    }

    fn next(&mut self) -> Result<(Token, usize), ParseError> {
        let tok = self.tokens.get(self.at).cloned().ok_or(ParseError::UnexpectedEnd)?;
        self.at += 1;
        Ok(tok)
    }

    fn expect(&mut self, want: &Token) -> Result<(), ParseError> {
        let (tok, pos) = self.next()?;
        if tok == *want {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                token: tok.to_string(),
                pos,
            })
        }
    }

    fn add(&mut self, node: RadixLang) -> Id {
        self.expr.add(node)
    }

    fn sum(&mut self) -> Result<Id, ParseError> {
        let mut lhs = self.product()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.at += 1;
                    let rhs = self.product()?;
                    lhs = self.add(RadixLang::Add([lhs, rhs]));
                }
                Some(Token::Minus) => {
                    self.at += 1;
                    let rhs = self.product()?;
                    lhs = self.add(RadixLang::Sub([lhs, rhs]));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn product(&mut self) -> Result<Id, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.at += 1;
                    let rhs = self.unary()?;
                    lhs = self.add(RadixLang::Mul([lhs, rhs]));
                }
                Some(Token::Slash) => {
                    self.at += 1;
                    let rhs = self.unary()?;
                    lhs = self.add(RadixLang::Div([lhs, rhs]));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Id, ParseError> {
        if self.peek() == Some(&Token::Minus) {
            self.at += 1;
            // Literals absorb the sign so that `-3` is a single number.
            if let Some(Token::Num(n)) = self.peek().cloned() {
                if self.tokens.get(self.at + 1).map(|(t, _)| t) != Some(&Token::Caret) {
                    self.at += 1;
                    return Ok(self.add(RadixLang::Num(-n)));
                }
            }
            let inner = self.unary()?;
            return Ok(self.add(RadixLang::Neg(inner)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Id, ParseError> {
        let base = self.atom()?;
        if self.peek() == Some(&Token::Caret) {
            self.at += 1;
            let exp = self.unary()?;
            return Ok(self.add(RadixLang::Pow([base, exp])));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Id, ParseError> {
        let (tok, pos) = self.next()?;
        match tok {
            Token::Num(n) => Ok(self.add(RadixLang::Num(n))),
            Token::Name(name) => {
                if self.peek() != Some(&Token::LParen) {
                    return Ok(self.add(RadixLang::Symbol(Symbol::from(name.as_str()))));
                }
                if name != "sqrt" {
                    return Err(ParseError::UnknownFunction(name));
                }
                self.at += 1;
                let arg = self.sum()?;
                self.expect(&Token::RParen)?;
                Ok(self.add(RadixLang::Sqrt(arg)))
            }
            Token::LParen => {
                let inner = self.sum()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            other => Err(ParseError::UnexpectedToken {
                token: other.to_string(),
                pos,
            }),
        }
    }
}

/// Parses an infix expression such as `x*y - 2*y` or `sqrt(2)*x**2 + 1/3`.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed input, trailing tokens or
/// functions other than `sqrt`.
pub fn parse_expr(input: &str) -> Result<RecExpr<RadixLang>, ParseError> {
    let mut parser = Parser {
        tokens: tokenize(input)?,
        at: 0,
        expr: RecExpr::default(),
    };
    parser.sum()?;
    if let Some((tok, pos)) = parser.tokens.get(parser.at) {
        return Err(ParseError::UnexpectedToken {
            token: tok.to_string(),
            pos: *pos,
        });
    }
    Ok(parser.expr)
}

//! Parsing of player numbers answers
//!
//! Two written forms are accepted:
//! - an infix expression with parentheses, e.g. `(3 + 5) * 2`
//! - a list of steps separated by commas, semicolons or newlines, e.g.
//!   `3 * 5 = 15, 15 + 2 = 17`; the `= result` part is optional
//!
//! `x`, `×` and `÷` are read as `*` and `/`.

use super::error::ParseError;
use super::expr::{Expr, Op};

/// A step as written by the player, before any rule checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenStep {
    pub left: u32,
    pub op: Op,
    pub right: u32,
    /// Result claimed after `=`, if any
    pub stated: Option<u32>,
}

/// A parsed numbers answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumbersAnswer {
    Expression(Expr),
    Steps(Vec<WrittenStep>),
}

impl NumbersAnswer {
    /// Parse an answer, choosing the step form when the text contains `=`
    ///
    /// # Errors
    /// Returns `ParseError` if the text is empty or malformed.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::NumbersAnswer;
    ///
    /// assert!(matches!(NumbersAnswer::parse("3*5+2"), Ok(NumbersAnswer::Expression(_))));
    /// assert!(matches!(NumbersAnswer::parse("3*5=15, 15+2=17"), Ok(NumbersAnswer::Steps(_))));
    /// assert!(NumbersAnswer::parse("3 +").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        if text.contains('=') {
            parse_steps(text).map(Self::Steps)
        } else {
            parse_expression(text).map(Self::Expression)
        }
    }
}

/// Parse a single infix expression
///
/// # Errors
/// Returns `ParseError` on unexpected characters, unbalanced parentheses,
/// trailing input, or numbers that do not fit in a `u32`.
pub fn parse_expression(text: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(text);
    let expr = parser.expression()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(expr),
        Some((offset, found)) => Err(ParseError::UnexpectedChar { found, offset }),
    }
}

/// Parse a list of written steps
///
/// # Errors
/// Returns `ParseError` if any step is not `number op number [= number]`.
pub fn parse_steps(text: &str) -> Result<Vec<WrittenStep>, ParseError> {
    let mut parser = Parser::new(text);
    let mut steps = Vec::new();

    loop {
        parser.skip_separators();
        if parser.peek().is_none() {
            break;
        }

        let left = parser.number()?;
        parser.skip_whitespace();
        let op = parser.operator(&[Op::Add, Op::Sub, Op::Mul, Op::Div])?;
        let right = parser.number()?;
        parser.skip_whitespace();
        let stated = if parser.eat('=') {
            Some(parser.number()?)
        } else {
            None
        };
        steps.push(WrittenStep {
            left,
            op,
            right,
            stated,
        });

        parser.skip_whitespace();
        match parser.peek() {
            None => break,
            Some((_, ',' | ';' | '\n')) => {}
            Some((offset, found)) => return Err(ParseError::UnexpectedChar { found, offset }),
        }
    }

    if steps.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(steps)
}

struct Parser {
    chars: Vec<(usize, char)>,
    pos: usize,
    len: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Self {
            chars: text.char_indices().collect(),
            pos: 0,
            len: text.len(),
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.len, |(offset, _)| offset)
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.peek() {
            if c.is_whitespace() && c != '\n' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn skip_separators(&mut self) {
        while let Some((_, c)) = self.peek() {
            if c.is_whitespace() || c == ',' || c == ';' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if matches!(self.peek(), Some((_, c)) if c == expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume an operator from `allowed`
    fn operator(&mut self, allowed: &[Op]) -> Result<Op, ParseError> {
        let Some((offset, c)) = self.peek() else {
            return Err(ParseError::UnexpectedEnd);
        };
        let op = match c {
            '+' => Op::Add,
            '-' | '−' => Op::Sub,
            '*' | 'x' | 'X' | '×' => Op::Mul,
            '/' | '÷' => Op::Div,
            _ => {
                return Err(ParseError::Expected {
                    expected: "an operator",
                    offset,
                });
            }
        };
        if !allowed.contains(&op) {
            return Err(ParseError::Expected {
                expected: "an operator",
                offset,
            });
        }
        self.pos += 1;
        Ok(op)
    }

    fn number(&mut self) -> Result<u32, ParseError> {
        self.skip_whitespace();
        let start = self.offset();
        let mut value: u32 = 0;
        let mut digits = 0;

        while let Some((_, c)) = self.peek() {
            let Some(digit) = c.to_digit(10) else { break };
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or(ParseError::Overflow(start))?;
            digits += 1;
            self.pos += 1;
        }

        if digits == 0 {
            return match self.peek() {
                None => Err(ParseError::UnexpectedEnd),
                Some(_) => Err(ParseError::Expected {
                    expected: "a number",
                    offset: start,
                }),
            };
        }
        Ok(value)
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.term()?;
        loop {
            self.skip_whitespace();
            let Ok(op) = self.try_operator(&[Op::Add, Op::Sub]) else {
                return Ok(left);
            };
            let right = self.term()?;
            left = Expr::apply(op, left, right);
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.factor()?;
        loop {
            self.skip_whitespace();
            let Ok(op) = self.try_operator(&[Op::Mul, Op::Div]) else {
                return Ok(left);
            };
            let right = self.factor()?;
            left = Expr::apply(op, left, right);
        }
    }

    // factor := number | '(' expression ')'
    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.skip_whitespace();
        if self.eat('(') {
            let inner = self.expression()?;
            self.skip_whitespace();
            if !self.eat(')') {
                return Err(match self.peek() {
                    None => ParseError::UnexpectedEnd,
                    Some((offset, _)) => ParseError::Expected {
                        expected: "')'",
                        offset,
                    },
                });
            }
            return Ok(inner);
        }
        self.number().map(Expr::Number)
    }

    /// Like `operator`, but leaves the position untouched on failure
    fn try_operator(&mut self, allowed: &[Op]) -> Result<Op, ParseError> {
        let saved = self.pos;
        self.operator(allowed).inspect_err(|_| self.pos = saved)
    }
}

//! Arithmetic expressions over drawn numbers
//!
//! Expressions are binary trees whose every node, leaves included, carries a
//! positive integer. [`Op::apply`] is the single place the round's arithmetic
//! rules live: subtraction must stay positive and division must be exact.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// One of the four permitted operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// All operators in canonical order
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Whether swapping the operands leaves the result unchanged
    #[must_use]
    pub const fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Apply the operator under the round's rules
    ///
    /// Returns `None` when the result would not be a positive integer: a
    /// subtraction reaching zero or below, an inexact division, or overflow.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::Op;
    ///
    /// assert_eq!(Op::Sub.apply(7, 3), Some(4));
    /// assert_eq!(Op::Sub.apply(3, 3), None);
    /// assert_eq!(Op::Div.apply(12, 4), Some(3));
    /// assert_eq!(Op::Div.apply(12, 5), None);
    /// ```
    #[must_use]
    pub fn apply(self, left: u32, right: u32) -> Option<u32> {
        let result = match self {
            Self::Add => left.checked_add(right)?,
            Self::Sub => left.checked_sub(right)?,
            Self::Mul => left.checked_mul(right)?,
            Self::Div => {
                if right == 0 || left % right != 0 {
                    return None;
                }
                left / right
            }
        };
        (result > 0).then_some(result)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary expression tree
///
/// The derived ordering is the canonical ordering used to break ties between
/// equally good solutions: leaves sort before operations, leaves by value,
/// operations by operator then left operand then right operand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expr {
    Number(u32),
    Apply {
        op: Op,
        left: Arc<Expr>,
        right: Arc<Expr>,
    },
}

/// A single evaluated operation, as a player would write it down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub left: u32,
    pub op: Op,
    pub right: u32,
    pub result: u32,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.left, self.op, self.right, self.result)
    }
}

/// An operation that breaks the positive-integer rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalStep {
    pub left: u32,
    pub op: Op,
    pub right: u32,
}

impl fmt::Display for IllegalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl Expr {
    #[must_use]
    pub fn apply(op: Op, left: Self, right: Self) -> Self {
        Self::Apply {
            op,
            left: Arc::new(left),
            right: Arc::new(right),
        }
    }

    /// Number of operators in the tree
    #[must_use]
    pub fn operations(&self) -> usize {
        match self {
            Self::Number(_) => 0,
            Self::Apply { left, right, .. } => 1 + left.operations() + right.operations(),
        }
    }

    /// The drawn numbers used, left to right
    #[must_use]
    pub fn leaves(&self) -> Vec<u32> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, out: &mut Vec<u32>) {
        match self {
            Self::Number(n) => out.push(*n),
            Self::Apply { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Evaluate under the round's rules
    ///
    /// # Errors
    /// Returns the first operation (in evaluation order) whose result is not a
    /// positive integer.
    pub fn evaluate(&self) -> Result<u32, IllegalStep> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Apply { op, left, right } => {
                let l = left.evaluate()?;
                let r = right.evaluate()?;
                op.apply(l, r).ok_or(IllegalStep {
                    left: l,
                    op: *op,
                    right: r,
                })
            }
        }
    }

    /// Flatten into the operations a player would write, innermost first
    ///
    /// # Errors
    /// Returns the first illegal operation, as [`Expr::evaluate`] does.
    ///
    /// # Examples
    /// ```
    /// use countdown_solver::core::{Expr, Op};
    ///
    /// let expr = Expr::apply(
    ///     Op::Add,
    ///     Expr::apply(Op::Mul, Expr::Number(3), Expr::Number(5)),
    ///     Expr::Number(2),
    /// );
    /// let steps: Vec<String> = expr.steps().unwrap().iter().map(ToString::to_string).collect();
    /// assert_eq!(steps, ["3 * 5 = 15", "15 + 2 = 17"]);
    /// ```
    pub fn steps(&self) -> Result<Vec<Step>, IllegalStep> {
        let mut steps = Vec::with_capacity(self.operations());
        self.collect_steps(&mut steps)?;
        Ok(steps)
    }

    fn collect_steps(&self, out: &mut Vec<Step>) -> Result<u32, IllegalStep> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Apply { op, left, right } => {
                let l = left.collect_steps(out)?;
                let r = right.collect_steps(out)?;
                let result = op.apply(l, r).ok_or(IllegalStep {
                    left: l,
                    op: *op,
                    right: r,
                })?;
                out.push(Step {
                    left: l,
                    op: *op,
                    right: r,
                    result,
                });
                Ok(result)
            }
        }
    }

    const fn precedence(&self) -> u8 {
        match self {
            Self::Number(_) => u8::MAX,
            Self::Apply { op, .. } => op.precedence(),
        }
    }

    fn write_operand(
        f: &mut fmt::Formatter<'_>,
        child: &Self,
        parent: Op,
        right_side: bool,
    ) -> fmt::Result {
        let needs_parens = child.precedence() < parent.precedence()
            || (right_side
                && child.precedence() == parent.precedence()
                && matches!(parent, Op::Sub | Op::Div));
        if needs_parens {
            write!(f, "({child})")
        } else {
            write!(f, "{child}")
        }
    }
}

impl fmt::Display for Expr {
    /// Infix rendering with the minimum parentheses needed to read back
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Apply { op, left, right } => {
                Self::write_operand(f, left, *op, false)?;
                write!(f, " {op} ")?;
                Self::write_operand(f, right, *op, true)
            }
        }
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//! Expression evaluation.
//!
//! Turns a matched `a <op> b` into numbers and an [`Operator`], then hands
//! the two operands to the matching function in [`crate::arithmetic`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::detection::{RawExpression, Syntax, match_expression};
use crate::arithmetic;
use crate::error::CalcError;

/// A binary operator the evaluator can dispatch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol this operator is written as.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator to a sequence of operands.
    pub fn apply(self, operands: &[f64]) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(arithmetic::add(operands)),
            Self::Subtract => arithmetic::subtract(operands),
            Self::Multiply => Ok(arithmetic::multiply(operands)),
            Self::Divide => arithmetic::divide(operands),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(CalcError::UnrecognizedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A fully parsed two-operand expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedExpression {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
}

impl ParsedExpression {
    /// Compute the value of the expression.
    pub fn evaluate(&self) -> Result<f64, CalcError> {
        self.operator.apply(&[self.lhs, self.rhs])
    }
}

impl TryFrom<RawExpression<'_>> for ParsedExpression {
    type Error = CalcError;

    fn try_from(raw: RawExpression<'_>) -> Result<Self, Self::Error> {
        let lhs = parse_operand(raw.lhs)?;
        let rhs = parse_operand(raw.rhs)?;
        let operator = raw.operator.parse()?;
        Ok(Self { lhs, operator, rhs })
    }
}

// Operands are unsigned digit runs, so a non-finite value can only come
// from overflow.
fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let value: f64 = text.parse().map_err(|source| CalcError::NumberFormat {
        input: text.to_string(),
        source,
    })?;
    if !value.is_finite() {
        return Err(CalcError::NumberOutOfRange {
            input: text.to_string(),
        });
    }
    Ok(value)
}

/// Evaluates single-operation expressions with a fixed operator set.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    syntax: Syntax,
}

impl Evaluator {
    /// Evaluator accepting `+`, `-` and `*`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator that additionally accepts `/`.
    pub fn with_division() -> Self {
        Self {
            syntax: Syntax::WithDivision,
        }
    }

    /// Pick the operator set from a config flag.
    pub fn from_division_flag(division: bool) -> Self {
        if division {
            Self::with_division()
        } else {
            Self::new()
        }
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Match and parse `input` without computing it.
    pub fn parse(&self, input: &str) -> Result<ParsedExpression, CalcError> {
        let raw = match_expression(input, self.syntax)?;
        debug!(lhs = raw.lhs, operator = raw.operator, rhs = raw.rhs, "matched expression");
        ParsedExpression::try_from(raw)
    }

    /// Evaluate `input`, using only its first `a <op> b` occurrence.
    pub fn evaluate(&self, input: &str) -> Result<f64, CalcError> {
        self.parse(input)?.evaluate()
    }
}

/// Match and parse `input` with the default operator set.
pub fn parse_expression(input: &str) -> Result<ParsedExpression, CalcError> {
    Evaluator::new().parse(input)
}

/// Evaluate a two-operand expression such as `"2 + 2"`.
///
/// Surrounding whitespace is ignored and any text after the first match
/// is discarded, so `"1+2+3"` yields 3. Division is not part of the
/// default operator set: `"8/0"` fails with [`CalcError::Parse`]. Use
/// [`Evaluator::with_division`] to accept `/`.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    Evaluator::new().evaluate(input)
}

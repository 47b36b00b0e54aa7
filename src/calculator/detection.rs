//! Expression matching for the calculator.
//!
//! An expression is exactly two unsigned decimal operands around a single
//! operator character. Operand digits are ASCII only. The pattern is not anchored, so only the first
//! `a <op> b` occurrence in the input is used.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::CalcError;

lazy_static! {
    /// Default pattern. The operator class admits `+`, `-`, `*` and a stray
    /// literal backslash, but not `/`.
    static ref EXPRESSION: Regex = Regex::new(
        r"\s*(?P<operand1>[0-9]+(\.[0-9]+)*)\s*(?P<operator>[+\-\\*])\s*(?P<operand2>[0-9]+(\.[0-9]+)*)\s*"
    ).unwrap();

    /// Same shape with `/` in place of the backslash.
    static ref EXPRESSION_WITH_DIVISION: Regex = Regex::new(
        r"\s*(?P<operand1>[0-9]+(\.[0-9]+)*)\s*(?P<operator>[+\-*/])\s*(?P<operand2>[0-9]+(\.[0-9]+)*)\s*"
    ).unwrap();
}

/// The pieces of a matched expression, borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawExpression<'a> {
    /// First operand text.
    pub lhs: &'a str,
    /// Operator text, always a single character.
    pub operator: &'a str,
    /// Second operand text.
    pub rhs: &'a str,
}

/// Which operator set the matcher accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Syntax {
    /// `+`, `-`, `*` and backslash.
    #[default]
    Standard,
    /// `+`, `-`, `*` and `/`.
    WithDivision,
}

impl Syntax {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Standard => &EXPRESSION,
            Self::WithDivision => &EXPRESSION_WITH_DIVISION,
        }
    }
}

/// Find the first `a <op> b` in `input`.
pub fn match_expression(input: &str, syntax: Syntax) -> Result<RawExpression<'_>, CalcError> {
    let captures = syntax
        .pattern()
        .captures(input)
        .ok_or_else(|| CalcError::Parse(input.to_string()))?;

    Ok(RawExpression {
        lhs: group(&captures, "operand1"),
        operator: group(&captures, "operator"),
        rhs: group(&captures, "operand2"),
    })
}

// All three groups are mandatory in both patterns.
fn group<'a>(captures: &Captures<'a>, name: &str) -> &'a str {
    captures.name(name).map_or("", |m| m.as_str())
}

/// Check if input contains something the evaluator can match.
///
/// This is a fast pre-check before attempting actual evaluation.
pub fn looks_like_expression(input: &str, syntax: Syntax) -> bool {
    syntax.pattern().is_match(input)
}

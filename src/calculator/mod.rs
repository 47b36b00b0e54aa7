//! Calculator module for evaluating two-operand expressions.
//!
//! This module provides functionality to:
//! - Match input against the supported `a <op> b` shape
//! - Evaluate the matched expression with the arithmetic operations
//! - Format results for output

mod detection;
mod evaluation;
mod format;

pub use detection::{RawExpression, Syntax, looks_like_expression, match_expression};
pub use evaluation::{Evaluator, Operator, ParsedExpression, evaluate, parse_expression};
pub use format::{format_display, format_plain};

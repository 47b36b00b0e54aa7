//! Basic arithmetic operations and a single-operation expression evaluator.

pub mod arithmetic;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use arithmetic::{add, divide, multiply, sqrt, subtract};
pub use calculator::{Evaluator, evaluate};
pub use error::CalcError;

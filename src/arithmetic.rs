//! Basic arithmetic over one or more `f64` inputs.
//!
//! The variadic operations take a slice and fold it left to right.
//! Operations with an identity element (`add`, `multiply`) accept an empty
//! slice; the ones that start from the first element do not.

use tracing::trace;

use crate::error::CalcError;

/// Sum all inputs, starting from 0.
pub fn add(inputs: &[f64]) -> f64 {
    inputs.iter().fold(0.0, |acc, x| acc + x)
}

/// Subtract every subsequent input from the first, in order.
///
/// `subtract(&[a, b, c])` is `(a - b) - c`.
pub fn subtract(inputs: &[f64]) -> Result<f64, CalcError> {
    let (first, rest) = inputs
        .split_first()
        .ok_or_else(|| CalcError::empty_input("subtract"))?;
    trace!(operands = inputs.len(), "subtract");

    Ok(rest.iter().fold(*first, |acc, x| acc - x))
}

/// Multiply all inputs, starting from 1.
pub fn multiply(inputs: &[f64]) -> f64 {
    inputs.iter().fold(1.0, |acc, x| acc * x)
}

/// Divide the first input by every subsequent input, in order.
///
/// Fails with [`CalcError::DivisionByZero`] as soon as a divisor equals
/// zero, whichever its sign.
pub fn divide(inputs: &[f64]) -> Result<f64, CalcError> {
    let (first, rest) = inputs
        .split_first()
        .ok_or_else(|| CalcError::empty_input("divide"))?;
    trace!(operands = inputs.len(), "divide");

    rest.iter().try_fold(*first, |acc, &divisor| {
        if divisor == 0.0 {
            return Err(CalcError::DivisionByZero {
                dividend: acc,
                divisor,
            });
        }
        Ok(acc / divisor)
    })
}

/// Non-negative square root of `x`.
///
/// Negative inputs are rejected. `NaN` is not negative and passes through.
pub fn sqrt(x: f64) -> Result<f64, CalcError> {
    if x < 0.0 {
        return Err(CalcError::InvalidArgument(format!(
            "{x:.6} (cannot take square root of negative number)"
        )));
    }
    Ok(x.sqrt())
}

#[cfg(test)]
pub(crate) fn close_enough(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

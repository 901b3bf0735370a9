//! Integer helpers used by the solvers.

use thiserror::Error;

/// Errors raised by the numeric helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// `gcd` is only defined here for strictly positive operands.
    #[error("gcd operands must be positive, got {0} and {1}")]
    NonPositive(i64, i64),

    /// Integer division by zero.
    #[error("division of {0} by zero")]
    DivisionByZero(i64),

    /// Result of combining the two operands does not fit in an `i64`.
    #[error("combining {0} and {1} overflows i64")]
    Overflow(i64, i64),
}

/// `a + b`
pub fn add(a: i64, b: i64) -> Result<i64, NumericError> {
    a.checked_add(b).ok_or(NumericError::Overflow(a, b))
}

/// `a - b`
pub fn sub(a: i64, b: i64) -> Result<i64, NumericError> {
    a.checked_sub(b).ok_or(NumericError::Overflow(a, b))
}

/// `a * b`
pub fn mul(a: i64, b: i64) -> Result<i64, NumericError> {
    a.checked_mul(b).ok_or(NumericError::Overflow(a, b))
}

/// `a / b`, truncating toward zero.
pub fn div(a: i64, b: i64) -> Result<i64, NumericError> {
    if b == 0 {
        return Err(NumericError::DivisionByZero(a));
    }
    a.checked_div(b).ok_or(NumericError::Overflow(a, b))
}

/// `a + b0 + b1 + ...`
pub fn add_n(a: i64, bs: &[i64]) -> Result<i64, NumericError> {
    bs.iter().try_fold(a, |acc, &b| add(acc, b))
}

/// `a - b0 - b1 - ...`
pub fn sub_n(a: i64, bs: &[i64]) -> Result<i64, NumericError> {
    bs.iter().try_fold(a, |acc, &b| sub(acc, b))
}

/// `a * b0 * b1 * ...`
pub fn mul_n(a: i64, bs: &[i64]) -> Result<i64, NumericError> {
    bs.iter().try_fold(a, |acc, &b| mul(acc, b))
}

/// `a / b0 / b1 / ...`, stopping at the first zero divisor.
pub fn div_n(a: i64, bs: &[i64]) -> Result<i64, NumericError> {
    bs.iter().try_fold(a, |acc, &b| div(acc, b))
}

/// Greatest common divisor by Euclid's algorithm.
///
/// Both operands must be at least 1.
pub fn gcd(a: i64, b: i64) -> Result<i64, NumericError> {
    if a < 1 || b < 1 {
        return Err(NumericError::NonPositive(a, b));
    }
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    Ok(a)
}

/// Least common multiple; zero if either operand is zero.
pub fn lcm(a: i64, b: i64) -> Result<i64, NumericError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let divisor = gcd(a, b)?;
    (a / divisor)
        .checked_mul(b)
        .ok_or(NumericError::Overflow(a, b))
}

/// `gcd` folded over `a, b0, b1, ...`
pub fn gcd_all(a: i64, bs: &[i64]) -> Result<i64, NumericError> {
    bs.iter().try_fold(a, |acc, &b| gcd(acc, b))
}

/// `lcm` folded over `a, b0, b1, ...`
pub fn lcm_all(a: i64, bs: &[i64]) -> Result<i64, NumericError> {
    bs.iter().try_fold(a, |acc, &b| lcm(acc, b))
}

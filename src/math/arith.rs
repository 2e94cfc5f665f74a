use crate::{
    error::EvalErrorKind,
    math::{MathResult, checked, is_integer},
};

/// Adds two numbers, failing with `Overflow` on a non-finite sum.
pub const fn add(a: f64, b: f64) -> MathResult<f64> {
    checked(a + b)
}

/// Subtracts `b` from `a`, failing with `Overflow` on a non-finite result.
pub const fn subtract(a: f64, b: f64) -> MathResult<f64> {
    checked(a - b)
}

/// Multiplies two numbers, failing with `Overflow` on a non-finite product.
pub const fn multiply(a: f64, b: f64) -> MathResult<f64> {
    checked(a * b)
}

/// Divides `a` by `b`.
///
/// A zero divisor is rejected before dividing.
///
/// # Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::arith::divide};
///
/// assert_eq!(divide(1.0, 4.0), Ok(0.25));
/// assert_eq!(divide(1.0, 0.0), Err(EvalErrorKind::DivisionByZero));
/// ```
pub const fn divide(a: f64, b: f64) -> MathResult<f64> {
    if b == 0.0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    checked(a / b)
}

/// Floating-point remainder of `a / b`, with the sign of `a`.
pub fn modulo(a: f64, b: f64) -> MathResult<f64> {
    if b == 0.0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    checked(a % b)
}

/// Raises `base` to `exponent`.
///
/// - A zero base with a negative exponent is a division by zero.
/// - A negative base needs an integral exponent.
/// - Results that do not fit in an `f64` overflow.
///
/// # Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::arith::power};
///
/// assert_eq!(power(2.0, 10.0), Ok(1024.0));
/// assert_eq!(power(-8.0, 1.0 / 3.0), Err(EvalErrorKind::DomainError));
/// assert_eq!(power(0.0, -1.0), Err(EvalErrorKind::DivisionByZero));
/// ```
pub fn power(base: f64, exponent: f64) -> MathResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    if base < 0.0 && !is_integer(exponent) {
        return Err(EvalErrorKind::DomainError);
    }
    checked(base.powf(exponent))
}

/// Square root of a non-negative number.
pub fn sqrt(x: f64) -> MathResult<f64> {
    if x < 0.0 {
        return Err(EvalErrorKind::DomainError);
    }
    checked(x.sqrt())
}

/// Cube root, defined for every real number.
pub fn cbrt(x: f64) -> MathResult<f64> {
    checked(x.cbrt())
}

/// The `n`-th root of `x`.
///
/// Even roots of negative numbers are a domain error; odd roots keep the sign
/// of `x`, so `nth_root(-8.0, 3)` is `-2`.
///
/// # Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::arith::nth_root};
///
/// assert!((nth_root(81.0, 4).unwrap() - 3.0).abs() < 1e-12);
/// assert!((nth_root(-8.0, 3).unwrap() + 2.0).abs() < 1e-12);
/// assert_eq!(nth_root(-16.0, 2), Err(EvalErrorKind::DomainError));
/// assert_eq!(nth_root(5.0, 0), Err(EvalErrorKind::DivisionByZero));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn nth_root(x: f64, n: i64) -> MathResult<f64> {
    if n == 0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    if n % 2 == 0 && x < 0.0 {
        return Err(EvalErrorKind::DomainError);
    }

    let exponent = 1.0 / n as f64;
    let root = if x < 0.0 {
        -(-x).powf(exponent)
    } else {
        x.powf(exponent)
    };
    checked(root)
}

/// Absolute value.
pub fn abs(x: f64) -> MathResult<f64> {
    checked(x.abs())
}

/// Largest integer not greater than `x`.
pub fn floor(x: f64) -> MathResult<f64> {
    checked(x.floor())
}

/// Smallest integer not less than `x`.
pub fn ceil(x: f64) -> MathResult<f64> {
    checked(x.ceil())
}

/// Nearest integer, rounding half-way cases away from zero.
pub fn round(x: f64) -> MathResult<f64> {
    checked(x.round())
}

/// The smaller of two numbers. A NaN operand is ignored.
pub fn min(a: f64, b: f64) -> MathResult<f64> {
    checked(a.min(b))
}

/// The larger of two numbers. A NaN operand is ignored.
pub fn max(a: f64, b: f64) -> MathResult<f64> {
    checked(a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations_reject_non_finite_results() {
        assert_eq!(add(f64::MAX, f64::MAX), Err(EvalErrorKind::Overflow));
        assert_eq!(subtract(-f64::MAX, f64::MAX), Err(EvalErrorKind::Overflow));
        assert_eq!(multiply(1e200, 1e200), Err(EvalErrorKind::Overflow));
        assert_eq!(divide(1e300, 1e-300), Err(EvalErrorKind::Overflow));
        assert_eq!(add(2.0, 3.0), Ok(5.0));
    }

    #[test]
    fn modulo_follows_dividend_sign() {
        assert_eq!(modulo(7.0, 3.0), Ok(1.0));
        assert_eq!(modulo(-7.0, 3.0), Ok(-1.0));
        assert_eq!(modulo(7.5, 2.0), Ok(1.5));
        assert_eq!(modulo(1.0, 0.0), Err(EvalErrorKind::DivisionByZero));
    }

    #[test]
    fn negative_base_with_integer_exponent_is_allowed() {
        assert_eq!(power(-2.0, 3.0), Ok(-8.0));
        assert_eq!(power(-2.0, -2.0), Ok(0.25));
        assert_eq!(power(10.0, 400.0), Err(EvalErrorKind::Overflow));
    }

    #[test]
    fn roots_guard_their_domain() {
        assert_eq!(sqrt(16.0), Ok(4.0));
        assert_eq!(sqrt(-1.0), Err(EvalErrorKind::DomainError));
        assert_eq!(cbrt(-27.0), Ok(-3.0));
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round(2.5), Ok(3.0));
        assert_eq!(round(-2.5), Ok(-3.0));
        assert_eq!(floor(-1.5), Ok(-2.0));
        assert_eq!(ceil(-1.5), Ok(-1.0));
        assert_eq!(abs(-4.0), Ok(4.0));
        assert_eq!(min(3.0, -1.0), Ok(-1.0));
        assert_eq!(max(3.0, -1.0), Ok(3.0));
    }
}

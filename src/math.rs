use crate::error::EvalErrorKind;

/// Angle units and conversions.
///
/// Trigonometric primitives take an [`angle::AngleUnit`] and convert their
/// input (or, for inverse functions, their output) accordingly.
pub mod angle;
/// Guarded arithmetic.
///
/// Addition, subtraction, multiplication, division, modulo, powers and roots,
/// plus the rounding and comparison helpers exposed as calculator functions.
pub mod arith;
/// Complex numbers.
///
/// A plain value type with arithmetic operators, magnitude and phase. Complex
/// operations have no error channel.
pub mod complex;
/// Logarithms and exponentials.
pub mod logarithm;
/// Factorial, gamma, combinatorics and number theory.
pub mod special;
/// Trigonometric and hyperbolic functions with their inverses.
pub mod trig;

/// Result type used by every numeric primitive.
///
/// A primitive either yields a finite `f64` or the kind of failure that
/// prevented it from doing so.
pub type MathResult<T> = Result<T, EvalErrorKind>;

/// Reciprocands with a smaller magnitude than this are treated as zero by
/// `sec`, `csc` and `cot`, and `tan` rejects inputs this close to a pole.
pub const POLE_TOLERANCE: f64 = 1e-15;

/// Returns `true` if `x` is neither infinite nor NaN.
#[must_use]
pub const fn is_finite(x: f64) -> bool {
    x.is_finite()
}

/// Returns `true` if `x` has no fractional part.
///
/// Infinite values are never integers.
///
/// # Example
/// ```
/// use scicalc::math::is_integer;
///
/// assert!(is_integer(-3.0));
/// assert!(!is_integer(2.5));
/// ```
#[must_use]
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x == x.floor()
}

/// Converts a raw floating-point result into a primitive outcome.
///
/// Non-finite values become [`EvalErrorKind::Overflow`]; NaN and infinity are
/// never handed back to callers as successful results.
///
/// # Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::checked};
///
/// assert_eq!(checked(1.5), Ok(1.5));
/// assert_eq!(checked(f64::INFINITY), Err(EvalErrorKind::Overflow));
/// assert_eq!(checked(f64::NAN), Err(EvalErrorKind::Overflow));
/// ```
pub const fn checked(x: f64) -> MathResult<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(EvalErrorKind::Overflow)
    }
}

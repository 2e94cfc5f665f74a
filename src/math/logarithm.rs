use crate::{
    error::EvalErrorKind,
    math::{MathResult, checked},
};

const fn require_positive(x: f64) -> MathResult<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(EvalErrorKind::DomainError)
    }
}

/// Natural logarithm of a strictly positive number.
pub fn ln(x: f64) -> MathResult<f64> {
    checked(require_positive(x)?.ln())
}

/// Base-10 logarithm of a strictly positive number.
pub fn log10(x: f64) -> MathResult<f64> {
    checked(require_positive(x)?.log10())
}

/// Base-2 logarithm of a strictly positive number.
pub fn log2(x: f64) -> MathResult<f64> {
    checked(require_positive(x)?.log2())
}

/// Logarithm of `x` in an arbitrary `base`, computed as `ln(x) / ln(base)`.
///
/// Both `x` and `base` must be strictly positive, and `base` must not be `1`.
///
/// # Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::logarithm::logb};
///
/// assert!((logb(8.0, 2.0).unwrap() - 3.0).abs() < 1e-12);
/// assert_eq!(logb(8.0, 1.0), Err(EvalErrorKind::DomainError));
/// assert_eq!(logb(-8.0, 2.0), Err(EvalErrorKind::DomainError));
/// ```
pub fn logb(x: f64, base: f64) -> MathResult<f64> {
    if base == 1.0 {
        return Err(EvalErrorKind::DomainError);
    }
    let numerator = require_positive(x)?.ln();
    let denominator = require_positive(base)?.ln();
    checked(numerator / denominator)
}

/// `e^x`.
pub fn exp(x: f64) -> MathResult<f64> {
    checked(x.exp())
}

/// `10^x`.
pub fn exp10(x: f64) -> MathResult<f64> {
    checked(10.0_f64.powf(x))
}

/// `2^x`.
pub fn exp2(x: f64) -> MathResult<f64> {
    checked(x.exp2())
}

use crate::{error::EvalErrorKind, math::MathResult};

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use scicalc::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Integer-valued primitives such as factorial or gcd accept doubles from the
/// parser and drop the fractional part, so `factorial(4.9)` is `factorial(4)`.
///
/// ## Errors
/// - `DomainError` for NaN or infinite input.
/// - `Overflow` if the truncated value is not exactly representable.
///
/// ## Example
/// ```
/// use scicalc::{error::EvalErrorKind, util::num::truncate_to_i64};
///
/// assert_eq!(truncate_to_i64(4.9), Ok(4));
/// assert_eq!(truncate_to_i64(-2.5), Ok(-2));
/// assert_eq!(truncate_to_i64(f64::NAN), Err(EvalErrorKind::DomainError));
/// assert_eq!(truncate_to_i64(1e300), Err(EvalErrorKind::Overflow));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn truncate_to_i64(value: f64) -> MathResult<i64> {
    if !value.is_finite() {
        return Err(EvalErrorKind::DomainError);
    }
    let truncated = value.trunc();
    if truncated.abs() > MAX_SAFE_I64_INT as f64 {
        return Err(EvalErrorKind::Overflow);
    }
    Ok(truncated as i64)
}

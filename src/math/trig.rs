use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    error::EvalErrorKind,
    math::{MathResult, POLE_TOLERANCE, angle::AngleUnit, checked},
};

/// Sine of `x`, interpreted in `unit`.
pub fn sin(x: f64, unit: AngleUnit) -> MathResult<f64> {
    checked(unit.to_radians(x).sin())
}

/// Cosine of `x`, interpreted in `unit`.
pub fn cos(x: f64, unit: AngleUnit) -> MathResult<f64> {
    checked(unit.to_radians(x).cos())
}

/// Tangent of `x`, interpreted in `unit`.
///
/// Inputs within [`POLE_TOLERANCE`] of an odd multiple of π/2 are rejected
/// even though the floating-point tangent there is finite.
///
/// # Example
/// ```
/// use scicalc::{
///     error::EvalErrorKind,
///     math::{angle::AngleUnit, trig::tan},
/// };
///
/// assert!((tan(45.0, AngleUnit::Degrees).unwrap() - 1.0).abs() < 1e-12);
/// assert_eq!(tan(90.0, AngleUnit::Degrees), Err(EvalErrorKind::DomainError));
/// ```
pub fn tan(x: f64, unit: AngleUnit) -> MathResult<f64> {
    let x = unit.to_radians(x);

    let normalized = x % PI;
    if (normalized - FRAC_PI_2).abs() < POLE_TOLERANCE
       || (normalized + FRAC_PI_2).abs() < POLE_TOLERANCE
    {
        return Err(EvalErrorKind::DomainError);
    }

    checked(x.tan())
}

/// Takes the reciprocal of a trigonometric value, rejecting values that are
/// zero within [`POLE_TOLERANCE`].
fn reciprocal(value: f64) -> MathResult<f64> {
    if value.abs() < POLE_TOLERANCE {
        return Err(EvalErrorKind::DomainError);
    }
    checked(1.0 / value)
}

/// Secant, `1 / cos(x)`.
pub fn sec(x: f64, unit: AngleUnit) -> MathResult<f64> {
    reciprocal(cos(x, unit)?)
}

/// Cosecant, `1 / sin(x)`.
pub fn csc(x: f64, unit: AngleUnit) -> MathResult<f64> {
    reciprocal(sin(x, unit)?)
}

/// Cotangent, `1 / tan(x)`.
pub fn cot(x: f64, unit: AngleUnit) -> MathResult<f64> {
    reciprocal(tan(x, unit)?)
}

/// Arcsine, with the result expressed in `unit`.
pub fn asin(x: f64, unit: AngleUnit) -> MathResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(EvalErrorKind::DomainError);
    }
    checked(unit.from_radians(x.asin()))
}

/// Arccosine, with the result expressed in `unit`.
pub fn acos(x: f64, unit: AngleUnit) -> MathResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(EvalErrorKind::DomainError);
    }
    checked(unit.from_radians(x.acos()))
}

/// Arctangent, with the result expressed in `unit`.
pub fn atan(x: f64, unit: AngleUnit) -> MathResult<f64> {
    checked(unit.from_radians(x.atan()))
}

/// Four-quadrant arctangent of `y / x`, with the result expressed in `unit`.
pub fn atan2(y: f64, x: f64, unit: AngleUnit) -> MathResult<f64> {
    checked(unit.from_radians(y.atan2(x)))
}

/// Arcsecant, `acos(1 / x)` for `|x| >= 1`.
pub fn asec(x: f64, unit: AngleUnit) -> MathResult<f64> {
    if x.abs() < 1.0 {
        return Err(EvalErrorKind::DomainError);
    }
    acos(1.0 / x, unit)
}

/// Arccosecant, `asin(1 / x)` for `|x| >= 1`.
pub fn acsc(x: f64, unit: AngleUnit) -> MathResult<f64> {
    if x.abs() < 1.0 {
        return Err(EvalErrorKind::DomainError);
    }
    asin(1.0 / x, unit)
}

/// Arccotangent, `atan(1 / x)`, with `acot(0)` a right angle.
pub fn acot(x: f64, unit: AngleUnit) -> MathResult<f64> {
    if x == 0.0 {
        return checked(unit.from_radians(FRAC_PI_2));
    }
    atan(1.0 / x, unit)
}

/// Hyperbolic sine.
pub fn sinh(x: f64) -> MathResult<f64> {
    checked(x.sinh())
}

/// Hyperbolic cosine.
pub fn cosh(x: f64) -> MathResult<f64> {
    checked(x.cosh())
}

/// Hyperbolic tangent.
pub fn tanh(x: f64) -> MathResult<f64> {
    checked(x.tanh())
}

/// Hyperbolic secant, `1 / cosh(x)`.
pub fn sech(x: f64) -> MathResult<f64> {
    checked(1.0 / cosh(x)?)
}

/// Hyperbolic cosecant, `1 / sinh(x)`. Undefined at zero.
pub fn csch(x: f64) -> MathResult<f64> {
    if x == 0.0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    checked(1.0 / sinh(x)?)
}

/// Hyperbolic cotangent, `1 / tanh(x)`. Undefined at zero.
pub fn coth(x: f64) -> MathResult<f64> {
    if x == 0.0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    checked(1.0 / x.tanh())
}

/// Inverse hyperbolic sine.
pub fn asinh(x: f64) -> MathResult<f64> {
    checked(x.asinh())
}

/// Inverse hyperbolic cosine, defined for `x >= 1`.
pub fn acosh(x: f64) -> MathResult<f64> {
    if x < 1.0 {
        return Err(EvalErrorKind::DomainError);
    }
    checked(x.acosh())
}

/// Inverse hyperbolic tangent, defined for `|x| < 1`.
pub fn atanh(x: f64) -> MathResult<f64> {
    if x.abs() >= 1.0 {
        return Err(EvalErrorKind::DomainError);
    }
    checked(x.atanh())
}

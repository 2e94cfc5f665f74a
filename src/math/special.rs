use std::f64::consts::{PI, TAU};

use crate::{
    error::EvalErrorKind,
    math::{MathResult, checked, is_integer},
    util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked},
};

/// Largest `n` whose factorial fits in an `f64`.
pub const MAX_FACTORIAL: i64 = 170;

/// Computes `n!` as an iterative product.
///
/// ## Errors
/// - `DomainError` for negative `n`.
/// - `Overflow` for `n > 170`, since `171!` exceeds the `f64` range.
///
/// ## Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::special::factorial};
///
/// assert_eq!(factorial(5), Ok(120.0));
/// assert_eq!(factorial(0), Ok(1.0));
/// assert!(factorial(170).is_ok());
/// assert_eq!(factorial(171), Err(EvalErrorKind::Overflow));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn factorial(n: i64) -> MathResult<f64> {
    if n < 0 {
        return Err(EvalErrorKind::DomainError);
    }
    if n > MAX_FACTORIAL {
        return Err(EvalErrorKind::Overflow);
    }

    let mut result = 1.0;
    for i in 2..=n {
        result *= i as f64;
    }
    Ok(result)
}

/// Computes the gamma function Γ(z) using the Lanczos approximation.
///
/// Uses the standard 9-term coefficients (`g = 7`). For `z < 0.5` the
/// reflection formula is applied:
///
/// `Γ(z) = π / (sin(πz) * Γ(1 − z))`
///
/// ## Errors
/// - `DomainError` at the poles (zero and the negative integers).
/// - `Overflow` when Γ(z) exceeds the `f64` range.
///
/// ## Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::special::gamma};
///
/// // Γ(5) = 4! = 24
/// assert!((gamma(5.0).unwrap() - 24.0).abs() < 1e-12);
/// assert_eq!(gamma(-3.0), Err(EvalErrorKind::DomainError));
/// ```
pub fn gamma(z: f64) -> MathResult<f64> {
    if z <= 0.0 && is_integer(z) {
        return Err(EvalErrorKind::DomainError);
    }
    checked(lanczos(z))
}

fn lanczos(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        return PI / ((PI * z).sin() * lanczos(1.0 - z));
    }

    let z_minus_1 = z - 1.0;
    let mut x = COEFFS[0];
    for (i, &c) in (1_u32..).zip(COEFFS.iter().skip(1)) {
        x += c / (z_minus_1 + f64::from(i));
    }

    let t = z_minus_1 + G + 0.5;
    // t^(z - 1/2) is split in two so large arguments do not overflow before
    // exp(-t) scales them back down.
    let half_power = t.powf((z_minus_1 + 0.5) / 2.0);

    TAU.sqrt() * half_power * (half_power * (-t).exp()) * x
}

/// Number of ordered selections of `r` items out of `n`, `n! / (n - r)!`.
///
/// Requires `0 <= r <= n`.
///
/// ## Example
/// ```
/// use scicalc::{error::EvalErrorKind, math::special::permutation};
///
/// assert_eq!(permutation(5, 2), Ok(20.0));
/// assert_eq!(permutation(2, 5), Err(EvalErrorKind::DomainError));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn permutation(n: i64, r: i64) -> MathResult<f64> {
    if n < 0 || r < 0 || r > n {
        return Err(EvalErrorKind::DomainError);
    }

    let mut result = 1.0;
    for i in (n - r + 1..=n).rev() {
        result = checked(result * i as f64)?;
    }
    Ok(result)
}

/// Number of unordered selections of `r` items out of `n`.
///
/// Uses `C(n, r) = C(n, n - r)` to shorten the loop and accumulates with an
/// alternating multiply and divide so intermediate values stay small.
///
/// ## Example
/// ```
/// use scicalc::math::special::combination;
///
/// assert_eq!(combination(5, 2), Ok(10.0));
/// assert_eq!(combination(52, 5), Ok(2_598_960.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn combination(n: i64, r: i64) -> MathResult<f64> {
    if n < 0 || r < 0 || r > n {
        return Err(EvalErrorKind::DomainError);
    }

    let r = r.min(n - r);
    let mut result = 1.0;
    for i in 0..r {
        result = checked(result * (n - i) as f64 / (i + 1) as f64)?;
    }
    Ok(result)
}

/// Greatest common divisor of `|a|` and `|b|`. `gcd(0, 0)` is `0`.
pub fn gcd(a: i64, b: i64) -> MathResult<f64> {
    let divisor = euclid(a.unsigned_abs(), b.unsigned_abs());
    to_exact_f64(divisor)
}

/// Least common multiple of `|a|` and `|b|`.
///
/// A zero operand gives `0` rather than an error.
///
/// ## Errors
/// `Overflow` if the multiple is too large to be represented exactly.
///
/// ## Example
/// ```
/// use scicalc::math::special::lcm;
///
/// assert_eq!(lcm(4, 6), Ok(12.0));
/// assert_eq!(lcm(-4, 6), Ok(12.0));
/// assert_eq!(lcm(0, 9), Ok(0.0));
/// ```
pub fn lcm(a: i64, b: i64) -> MathResult<f64> {
    if a == 0 || b == 0 {
        return Ok(0.0);
    }

    let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
    let multiple = (a / euclid(a, b)).checked_mul(b)
                                     .ok_or(EvalErrorKind::Overflow)?;
    to_exact_f64(multiple)
}

const fn euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn to_exact_f64(value: u64) -> MathResult<f64> {
    if value > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(EvalErrorKind::Overflow);
    }
    let value = i64::try_from(value).map_err(|_| EvalErrorKind::Overflow)?;
    i64_to_f64_checked(value, EvalErrorKind::Overflow)
}

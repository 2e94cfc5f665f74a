use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::math::angle::AngleUnit;

/// `0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// The imaginary unit.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// A complex number with real and imaginary parts.
///
/// Operations never fail. Dividing by a number with zero modulus yields a
/// value whose components are both positive infinity.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part.
    pub real: f64,
    /// The imaginary part.
    pub imag: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real, self.imag) {
            (0.0, 0.0) => write!(f, "0"),
            (real, 0.0) => write!(f, "{real}"),
            (0.0, imag) => write!(f, "{imag}i"),
            (real, imag) if imag > 0.0 => write!(f, "{real} + {imag}i"),
            (real, imag) => write!(f, "{real} - {}i", -imag),
        }
    }
}

impl ComplexNumber {
    /// Constructs a complex number from its components.
    ///
    /// # Example
    /// ```
    /// use scicalc::math::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imag, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Returns the magnitude `sqrt(real² + imag²)`.
    ///
    /// # Example
    /// ```
    /// use scicalc::math::complex::ComplexNumber;
    /// assert_eq!(ComplexNumber::new(3.0, 4.0).magnitude(), 5.0);
    /// ```
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Returns the phase angle expressed in `unit`.
    ///
    /// # Example
    /// ```
    /// use scicalc::math::{angle::AngleUnit, complex::ComplexNumber};
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.phase(AngleUnit::Degrees) - 90.0).abs() < 1e-10);
    /// assert!((c.phase(AngleUnit::Radians) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn phase(self, unit: AngleUnit) -> f64 {
        unit.from_radians(self.imag.atan2(self.real))
    }

    /// Returns the complex conjugate.
    #[must_use]
    pub const fn conj(self) -> Self {
        Self { real: self.real,
               imag: -self.imag, }
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real: -self.real,
               imag: -self.imag, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real: self.real + rhs.real,
               imag: self.imag + rhs.imag, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real: self.real - rhs.real,
               imag: self.imag - rhs.imag, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real: self.real.mul_add(rhs.real, -(self.imag * rhs.imag)),
               imag: self.real.mul_add(rhs.imag, self.imag * rhs.real), }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imag * rhs.imag);
        if denom == 0.0 {
            return Self { real: f64::INFINITY,
                          imag: f64::INFINITY, };
        }

        Self { real: self.real.mul_add(rhs.real, self.imag * rhs.imag) / denom,
               imag: self.imag.mul_add(rhs.real, -(self.real * rhs.imag)) / denom, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real: value,
               imag: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imag) == OrderedFloat(other.imag)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imag).hash(state);
    }
}

impl PartialOrd for ComplexNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplexNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.real).cmp(&OrderedFloat(other.real))
                               .then_with(|| OrderedFloat(self.imag).cmp(&OrderedFloat(other.imag)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn arithmetic() {
        let a = ComplexNumber::new(1.0, 2.0);
        let b = ComplexNumber::new(3.0, -1.0);

        assert_eq!(a + b, ComplexNumber::new(4.0, 1.0));
        assert_eq!(a - b, ComplexNumber::new(-2.0, 3.0));
        assert_eq!(a * b, ComplexNumber::new(5.0, 5.0));
        assert_eq!(-a, ComplexNumber::new(-1.0, -2.0));
        assert_eq!(I * I, ComplexNumber::new(-1.0, 0.0));
    }

    #[test]
    fn division() {
        let q = ComplexNumber::new(5.0, 5.0) / ComplexNumber::new(3.0, -1.0);
        assert!((q.real - 1.0).abs() < 1e-12);
        assert!((q.imag - 2.0).abs() < 1e-12);
    }

    #[test]
    fn division_by_zero_modulus_is_infinite() {
        let q = ComplexNumber::new(1.0, 1.0) / ZERO;
        assert_eq!(q.real, f64::INFINITY);
        assert_eq!(q.imag, f64::INFINITY);
    }

    #[test]
    fn conjugate_and_display() {
        let c = ComplexNumber::new(2.0, 3.0);
        assert_eq!(c.conj(), ComplexNumber::new(2.0, -3.0));
        assert_eq!(c.to_string(), "2 + 3i");
        assert_eq!(c.conj().to_string(), "2 - 3i");
        assert_eq!(ComplexNumber::from(4.5).to_string(), "4.5");
        assert_eq!(I.to_string(), "1i");
    }

    #[test]
    fn nan_components_hash_consistently() {
        let nan = ComplexNumber::new(f64::NAN, 0.0);
        let mut set = HashSet::new();
        set.insert(nan);
        assert!(set.contains(&ComplexNumber::new(f64::NAN, 0.0)));
        assert!(ZERO < I);
    }
}

use std::f64::consts::{E, LN_2, LN_10, PI, SQRT_2};

/// The golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi`, `π`
    Pi,
    /// `e`
    E,
    /// `phi`, `φ`
    Phi,
    /// `sqrt2`, `√2`
    Sqrt2,
    /// `ln2`
    Ln2,
    /// `ln10`
    Ln10,
}

impl Constant {
    /// Looks up a constant by name. Names are case-sensitive.
    ///
    /// # Example
    /// ```
    /// use scicalc::interpreter::evaluator::constant::Constant;
    ///
    /// assert_eq!(Constant::from_name("π"), Some(Constant::Pi));
    /// assert_eq!(Constant::from_name("PI"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" | "π" => Some(Self::Pi),
            "e" => Some(Self::E),
            "phi" | "φ" => Some(Self::Phi),
            "sqrt2" | "√2" => Some(Self::Sqrt2),
            "ln2" => Some(Self::Ln2),
            "ln10" => Some(Self::Ln10),
            _ => None,
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
            Self::Phi => PHI,
            Self::Sqrt2 => SQRT_2,
            Self::Ln2 => LN_2,
            Self::Ln10 => LN_10,
        }
    }
}

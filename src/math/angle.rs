use std::{fmt::Display, f64::consts::PI};

/// The unit trigonometric functions interpret their arguments in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// A full turn is 360.
    #[default]
    Degrees,
    /// A full turn is 2π.
    Radians,
}

impl AngleUnit {
    /// Converts an angle expressed in this unit to radians.
    ///
    /// # Example
    /// ```
    /// use scicalc::math::angle::AngleUnit;
    ///
    /// assert_eq!(AngleUnit::Degrees.to_radians(180.0), std::f64::consts::PI);
    /// assert_eq!(AngleUnit::Radians.to_radians(1.0), 1.0);
    /// ```
    #[must_use]
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            Self::Degrees => deg_to_rad(x),
            Self::Radians => x,
        }
    }

    /// Converts an angle in radians to this unit.
    #[must_use]
    pub fn from_radians(self, x: f64) -> f64 {
        match self {
            Self::Degrees => rad_to_deg(x),
            Self::Radians => x,
        }
    }
}

impl Display for AngleUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degrees => write!(f, "DEG"),
            Self::Radians => write!(f, "RAD"),
        }
    }
}

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

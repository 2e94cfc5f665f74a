use log::debug;

use crate::{
    error::{EvalError, EvalErrorKind},
    interpreter::parser::core::parse,
    math::angle::AngleUnit,
};

/// Longest expression text, in bytes, kept as the last expression.
pub const MAX_EXPRESSION_LEN: usize = 511;
/// Significant digits used when formatting results by default.
pub const DEFAULT_PRECISION: usize = 10;

/// A calculator session.
///
/// Holds the memory register, the last successful result, the angle unit used
/// by trigonometric functions, the display precision and the text of the most
/// recently submitted expression. Each session is owned by a single caller.
///
/// # Example
/// ```
/// use scicalc::session::CalculatorState;
///
/// let mut state = CalculatorState::new();
/// assert_eq!(state.evaluate("3+4"), Ok(7.0));
/// assert_eq!(state.evaluate("ans*2"), Ok(14.0));
///
/// state.memory_store(5.0);
/// assert_eq!(state.evaluate("M+1"), Ok(6.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    memory:          f64,
    last_result:     f64,
    angle_unit:      AngleUnit,
    precision:       usize,
    last_expression: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self { memory:          0.0,
               last_result:     0.0,
               angle_unit:      AngleUnit::Degrees,
               precision:       DEFAULT_PRECISION,
               last_expression: String::new(), }
    }
}

impl CalculatorState {
    /// Creates a session in its reset state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every setting and register to its initial value.
    pub fn reset(&mut self) {
        debug!("resetting calculator state");
        *self = Self::default();
    }

    /// Evaluates an expression against this session.
    ///
    /// The expression text is recorded before parsing, whatever the outcome.
    /// On success the value becomes the new last result. Any failure inside
    /// the parser is reported as [`EvalErrorKind::ParseError`]; the parser's
    /// message is kept in [`EvalError::message`].
    ///
    /// # Errors
    /// - `InvalidInput` for an empty expression.
    /// - `ParseError` for anything the parser rejects.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvalError> {
        debug!("evaluating {expression:?} ({}, memory {})", self.angle_unit, self.memory);

        if expression.is_empty() {
            debug!("rejecting empty expression");
            return Err(EvalError::new(EvalErrorKind::InvalidInput, expression));
        }

        self.last_expression = truncate_expression(expression).to_string();

        match parse(expression, self) {
            Ok(value) => {
                debug!("{expression:?} = {value}");
                self.last_result = value;
                Ok(value)
            },
            Err(e) => {
                debug!("{expression:?} failed: {e} ({:?})", e.kind);
                Err(EvalError::with_message(EvalErrorKind::ParseError, e.message, expression))
            },
        }
    }

    /// Formats `value` with this session's precision.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format_value(value, self.precision)
    }

    pub fn memory_store(&mut self, value: f64) {
        debug!("memory store {value}");
        self.memory = value;
    }

    pub fn memory_add(&mut self, value: f64) {
        debug!("memory add {value}");
        self.memory += value;
    }

    pub fn memory_subtract(&mut self, value: f64) {
        debug!("memory subtract {value}");
        self.memory -= value;
    }

    #[must_use]
    pub const fn memory_recall(&self) -> f64 {
        self.memory
    }

    pub fn memory_clear(&mut self) {
        debug!("memory clear");
        self.memory = 0.0;
    }

    #[must_use]
    pub const fn last_result(&self) -> f64 {
        self.last_result
    }

    /// The most recently submitted expression, truncated to
    /// [`MAX_EXPRESSION_LEN`] bytes.
    #[must_use]
    pub fn last_expression(&self) -> &str {
        &self.last_expression
    }

    #[must_use]
    pub const fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        debug!("angle unit set to {unit}");
        self.angle_unit = unit;
    }

    #[must_use]
    pub const fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_precision(&mut self, precision: usize) {
        debug!("precision set to {precision}");
        self.precision = precision;
    }
}

/// Cuts `expression` to at most [`MAX_EXPRESSION_LEN`] bytes without
/// splitting a character.
fn truncate_expression(expression: &str) -> &str {
    if expression.len() <= MAX_EXPRESSION_LEN {
        return expression;
    }
    let mut end = MAX_EXPRESSION_LEN;
    while !expression.is_char_boundary(end) {
        end -= 1;
    }
    &expression[..end]
}

/// Formats a result for display.
///
/// - Integral values below `1e15` in magnitude print without a fractional
///   part.
/// - Magnitudes of at least `1e10`, or below `1e-4` but not zero, print in
///   scientific notation with `precision` fractional digits.
/// - Anything else prints with `precision` significant digits and trailing
///   zeros removed.
///
/// # Example
/// ```
/// use scicalc::session::format_value;
///
/// assert_eq!(format_value(42.0, 10), "42");
/// assert_eq!(format_value(0.1 + 0.2, 10), "0.3");
/// assert_eq!(format_value(1.5e20, 10), "1.5000000000e+20");
/// assert_eq!(format_value(0.000_012_345, 4), "1.2345e-05");
/// ```
#[must_use]
pub fn format_value(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if value == value.trunc() && magnitude < 1e15 {
        // `{:.0}` keeps the sign of negative zero.
        return format!("{:.0}", value + 0.0);
    }

    if magnitude >= 1e10 || (magnitude < 1e-4 && value != 0.0) {
        return scientific(value, precision);
    }

    general(value, precision.max(1))
}

/// `%.{precision}e` with a signed, at least two-digit exponent.
fn scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => with_c_exponent(mantissa, exponent),
        None => formatted,
    }
}

fn with_c_exponent(mantissa: &str, exponent: &str) -> String {
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// `%.{significant}g`.
fn general(value: f64, significant: usize) -> String {
    // Round to the requested significant digits first; the exponent of the
    // rounded value decides where the decimal point goes.
    let rounded = format!("{value:.prec$e}", prec = significant - 1);
    let exponent = rounded.split_once('e')
                          .and_then(|(_, e)| e.parse::<i64>().ok())
                          .unwrap_or(0);

    let Ok(significant) = i64::try_from(significant) else {
        return rounded;
    };
    if exponent < -4 || exponent >= significant {
        return trim_scientific(&rounded);
    }

    let decimals = usize::try_from(significant - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn trim_scientific(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) => with_c_exponent(trim_fraction(mantissa), exponent),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_reset_state() {
        let state = CalculatorState::new();
        assert_eq!(state.memory_recall(), 0.0);
        assert_eq!(state.last_result(), 0.0);
        assert_eq!(state.angle_unit(), AngleUnit::Degrees);
        assert_eq!(state.precision(), 10);
        assert_eq!(state.last_expression(), "");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = CalculatorState::new();
        state.memory_store(3.0);
        state.set_angle_unit(AngleUnit::Radians);
        state.set_precision(4);
        state.evaluate("1+1").unwrap();

        state.reset();
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn memory_operations() {
        let mut state = CalculatorState::new();
        state.memory_store(5.0);
        state.memory_add(2.5);
        state.memory_subtract(1.0);
        assert_eq!(state.memory_recall(), 6.5);
        state.memory_clear();
        assert_eq!(state.memory_recall(), 0.0);
    }

    #[test]
    fn empty_input_is_invalid_and_not_recorded() {
        let mut state = CalculatorState::new();
        state.evaluate("2").unwrap();

        let err = state.evaluate("").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::InvalidInput);
        assert_eq!(state.last_expression(), "2");
    }

    #[test]
    fn failures_are_recorded_but_keep_last_result() {
        let mut state = CalculatorState::new();
        state.evaluate("6*7").unwrap();

        let err = state.evaluate("1/0").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::ParseError);
        assert_eq!(err.expression, "1/0");
        assert_eq!(err.to_string(), "ERROR: Parse error");
        assert_eq!(state.last_expression(), "1/0");
        assert_eq!(state.last_result(), 42.0);
    }

    #[test]
    fn long_expressions_are_truncated_on_char_boundaries() {
        let mut state = CalculatorState::new();
        let long = format!("{}π", "1+".repeat(255));
        assert_eq!(long.len(), 512);

        let _ = state.evaluate(&long);
        assert_eq!(state.last_expression().len(), 510);
        assert!(state.last_expression().ends_with('+'));
    }

    #[test]
    fn formats_integers_without_fraction() {
        assert_eq!(format_value(0.0, 10), "0");
        assert_eq!(format_value(-0.0, 10), "0");
        assert_eq!(format_value(-17.0, 10), "-17");
        assert_eq!(format_value(120.0, 3), "120");
        assert_eq!(format_value(99_999_999_999_999.0, 10), "99999999999999");
    }

    #[test]
    fn formats_large_and_small_values_scientifically() {
        assert_eq!(format_value(1e15, 3), "1.000e+15");
        assert_eq!(format_value(12_345_678_901.5, 2), "1.23e+10");
        assert_eq!(format_value(-0.000_012_5, 3), "-1.250e-05");
        assert_eq!(format_value(1e-100, 1), "1.0e-100");
    }

    #[test]
    fn formats_general_values_with_significant_digits() {
        assert_eq!(format_value(3.141_592_653_589_793, 10), "3.141592654");
        assert_eq!(format_value(0.5, 10), "0.5");
        assert_eq!(format_value(2.0 / 3.0, 4), "0.6667");
        assert_eq!(format_value(0.000_123, 10), "0.000123");
        assert_eq!(format_value(123_456.789, 3), "1.23e+05");
        assert_eq!(format_value(9.999_96, 5), "10");
    }

    #[test]
    fn non_finite_values_format_plainly() {
        assert_eq!(format_value(f64::INFINITY, 10), "inf");
        assert_eq!(format_value(f64::NAN, 10), "NaN");
    }
}

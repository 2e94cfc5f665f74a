use log::trace;

use crate::{
    error::{EvalErrorKind, ParseErrorKind},
    interpreter::evaluator::function::builtin::{BinaryFunction, Function, UnaryFunction},
    math::{MathResult, angle::AngleUnit, arith, logarithm, special, trig},
    session::CalculatorState,
    util::num::truncate_to_i64,
};

/// Evaluates a builtin function call.
///
/// The argument count must match the function's arity exactly. Trigonometric
/// functions read the angle unit from `state`; nothing else does.
///
/// # Errors
/// - `TooFewArguments` or `TooManyArguments` on an arity mismatch.
/// - The primitive's failure narrowed by [`EvalErrorKind::to_parse_kind`].
///
/// # Example
/// ```
/// use scicalc::{
///     error::ParseErrorKind,
///     interpreter::evaluator::function::{builtin::Function, core::evaluate_function},
///     session::CalculatorState,
/// };
///
/// let state = CalculatorState::new();
/// let sin = Function::from_name("sin").unwrap();
/// assert!((evaluate_function(sin, &[30.0], &state).unwrap() - 0.5).abs() < 1e-12);
/// assert_eq!(evaluate_function(sin, &[], &state), Err(ParseErrorKind::TooFewArguments));
/// ```
pub fn evaluate_function(function: Function,
                         args: &[f64],
                         state: &CalculatorState)
                         -> Result<f64, ParseErrorKind> {
    trace!("calling {function} with {args:?}");

    let unit = state.angle_unit();
    let result = match (function, args) {
        (Function::Unary(f), &[x]) => apply_unary(f, x, unit),
        (Function::Binary(f), &[x, y]) => apply_binary(f, x, y, unit),
        _ if args.len() < function.arity() => return Err(ParseErrorKind::TooFewArguments),
        _ => return Err(ParseErrorKind::TooManyArguments),
    };

    result.map_err(EvalErrorKind::to_parse_kind)
}

fn apply_unary(function: UnaryFunction, x: f64, unit: AngleUnit) -> MathResult<f64> {
    match function {
        UnaryFunction::Sin => trig::sin(x, unit),
        UnaryFunction::Cos => trig::cos(x, unit),
        UnaryFunction::Tan => trig::tan(x, unit),
        UnaryFunction::Sec => trig::sec(x, unit),
        UnaryFunction::Csc => trig::csc(x, unit),
        UnaryFunction::Cot => trig::cot(x, unit),
        UnaryFunction::Asin => trig::asin(x, unit),
        UnaryFunction::Acos => trig::acos(x, unit),
        UnaryFunction::Atan => trig::atan(x, unit),
        UnaryFunction::Asec => trig::asec(x, unit),
        UnaryFunction::Acsc => trig::acsc(x, unit),
        UnaryFunction::Acot => trig::acot(x, unit),
        UnaryFunction::Sinh => trig::sinh(x),
        UnaryFunction::Cosh => trig::cosh(x),
        UnaryFunction::Tanh => trig::tanh(x),
        UnaryFunction::Sech => trig::sech(x),
        UnaryFunction::Csch => trig::csch(x),
        UnaryFunction::Coth => trig::coth(x),
        UnaryFunction::Asinh => trig::asinh(x),
        UnaryFunction::Acosh => trig::acosh(x),
        UnaryFunction::Atanh => trig::atanh(x),
        // `log` is the natural logarithm, like `ln`.
        UnaryFunction::Log | UnaryFunction::Ln => logarithm::ln(x),
        UnaryFunction::Log10 => logarithm::log10(x),
        UnaryFunction::Log2 => logarithm::log2(x),
        UnaryFunction::Exp => logarithm::exp(x),
        UnaryFunction::Exp10 => logarithm::exp10(x),
        UnaryFunction::Exp2 => logarithm::exp2(x),
        UnaryFunction::Sqrt => arith::sqrt(x),
        UnaryFunction::Cbrt => arith::cbrt(x),
        UnaryFunction::Abs => arith::abs(x),
        UnaryFunction::Floor => arith::floor(x),
        UnaryFunction::Ceil => arith::ceil(x),
        UnaryFunction::Round => arith::round(x),
        UnaryFunction::Factorial => special::factorial(truncate_to_i64(x)?),
        UnaryFunction::Gamma => special::gamma(x),
    }
}

fn apply_binary(function: BinaryFunction, x: f64, y: f64, unit: AngleUnit) -> MathResult<f64> {
    match function {
        BinaryFunction::Pow => arith::power(x, y),
        BinaryFunction::Nthrt => arith::nth_root(x, truncate_to_i64(y)?),
        BinaryFunction::Mod => arith::modulo(x, y),
        BinaryFunction::Logb => logarithm::logb(x, y),
        // The first argument is the ordinate.
        BinaryFunction::Atan2 => trig::atan2(x, y, unit),
        BinaryFunction::Perm => special::permutation(truncate_to_i64(x)?, truncate_to_i64(y)?),
        BinaryFunction::Comb => special::combination(truncate_to_i64(x)?, truncate_to_i64(y)?),
        BinaryFunction::Gcd => special::gcd(truncate_to_i64(x)?, truncate_to_i64(y)?),
        BinaryFunction::Lcm => special::lcm(truncate_to_i64(x)?, truncate_to_i64(y)?),
        BinaryFunction::Min => arith::min(x, y),
        BinaryFunction::Max => arith::max(x, y),
    }
}

/// Parsing errors.
///
/// Defines the fine-grained error kinds raised while tokenizing, parsing and
/// dispatching function calls. A parse error carries the cursor offset at
/// which parsing stopped together with a human-readable message.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error kinds produced by the numeric primitives and the
/// descriptor returned by the session facade. Parse failures reach callers
/// only as [`EvalErrorKind::ParseError`].
pub mod eval_error;

pub use eval_error::{EvalError, EvalErrorKind};
pub use parse_error::{ParseError, ParseErrorKind};

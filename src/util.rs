/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Integer-argument
/// primitives use them to turn parser doubles into integers and back.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range or not finite.
pub mod num;

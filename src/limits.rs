//! Build-time limits of the numeric kernel.

use static_assertions::const_assert;

/// Smallest base accepted for input or output.
pub const MIN_BASE: usize = 2;

/// Largest base accepted for input. Input digits are single characters
/// (`0-9`, `A-F`), which caps the range at hexadecimal.
pub const MAX_INPUT_BASE: usize = 16;

/// Largest base accepted for output.
pub const MAX_BASE: usize = 999;

/// Default digit capacity of a freshly initialised number.
pub const DEF_SIZE: usize = 16;

/// Column at which printed output wraps with a `\` continuation.
pub const PRINT_WIDTH: usize = 69;

/// Decimal digits of `u64::MAX`, used to size conversion buffers.
pub(crate) const U64_DIGITS: usize = 20;

const_assert!(MIN_BASE >= 2);
const_assert!(MAX_INPUT_BASE >= 10 && MAX_INPUT_BASE <= MAX_BASE);
const_assert!(DEF_SIZE >= 1);

//! Status codes surfaced by the numeric kernel.

/// Every way a kernel operation can fail.
///
/// Success is the `Ok` arm of the returned `Result`; callers must treat the
/// result value of any failed operation as clobbered, though its storage
/// remains valid for reuse.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Digit storage could not be allocated.
    #[error("out of memory")]
    Alloc,
    /// Division or remainder by zero.
    #[error("divide by zero")]
    DivideByZero,
    /// A non-negative value was required.
    #[error("negative number")]
    Negative,
    /// Square root of a negative value.
    #[error("square root of a negative number")]
    NegSqrt,
    /// Exponent with a fractional part.
    #[error("non-integer exponent")]
    NonInteger,
    /// Value does not fit in an unsigned machine integer.
    #[error("overflow")]
    Overflow,
    /// Input text is not a number in the given base.
    #[error("bad number string")]
    BadString,
    /// The host interrupt flag was observed set.
    #[error("interrupted")]
    Signal,
    /// The output sink failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

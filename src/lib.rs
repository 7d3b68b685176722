//! Arbitrary-precision decimal arithmetic for a `bc`-style calculator.
//!
//! The core type is [`Num`], a signed decimal number stored as little-endian
//! base-10 digits with an explicit radix position. On top of it this crate
//! implements the operations a POSIX `bc` front-end needs (add, subtract,
//! multiply, divide, remainder, integer power and square root), all with a
//! caller-controlled fractional precision (`scale`), plus parsing from any
//! base in `2..=16` and printing in any base in `2..=MAX_BASE` with `bc`'s
//! line-wrapping rules.
//!
//! Long-running digit loops poll a host-supplied [`Interrupt`] flag, so a
//! SIGINT handler can abort a runaway computation; the aborted operation
//! returns [`Error::Signal`] and the caller treats the result as clobbered.
//!
//! ```
//! use bc_num::{Never, Num};
//!
//! let int = Never;
//! let ten = Num::ten();
//! let a = Num::parse("123.456", &ten, 10, &int).unwrap();
//! let b = Num::parse("7.89", &ten, 10, &int).unwrap();
//! let sum = a.add(&b, 0, &int).unwrap();
//! assert_eq!(sum.rdx(), 3);
//! ```

mod digit;
mod error;
mod interrupt;
mod math;
mod num;
mod parse;
mod sqrt;
#[cfg(test)]
mod testutil;
mod write;

pub mod limits;

pub use error::Error;
pub use interrupt::{Interrupt, Never};
pub use num::Num;
pub use write::Printer;

//! Writing numbers to a byte sink in bases 2 through `MAX_BASE`.
//!
//! Output follows `bc` conventions: digits of bases up to 16 are single
//! hex glyphs, larger bases print each place as a space-separated decimal
//! group, and long lines wrap with a `\` continuation at the configured
//! width.

use crate::digit::DIGIT_CHARS;
use crate::error::Error;
use crate::interrupt::Interrupt;
use crate::limits::{MAX_BASE, MAX_INPUT_BASE, MIN_BASE, PRINT_WIDTH};
use crate::num::Num;
use std::io::Write;

/// Columns needed for one digit place of `base`.
fn width_for_base(base: usize) -> usize {
    let mut width = 1;
    let mut pow = 10;
    while pow <= base - 1 {
        width += 1;
        pow *= 10;
    }
    width
}

/// A byte sink plus the column state that `bc`'s line wrapping needs.
///
/// The column persists across `print` calls, the way a calculator keeps
/// appending to the current output line.
pub struct Printer<W> {
    sink: W,
    nchars: usize,
    line_len: usize,
}

impl<W: Write> Printer<W> {
    /// Wraps a sink at the default width.
    pub fn new(sink: W) -> Printer<W> {
        Printer::with_line_len(sink, PRINT_WIDTH)
    }

    /// Wraps a sink at a caller-chosen width; `line_len` must be at
    /// least 2 so a wrapped line can hold a character and the `\`.
    pub fn with_line_len(sink: W, line_len: usize) -> Printer<W> {
        assert!(line_len >= 2, "line length too small: {line_len}");
        Printer {
            sink,
            nchars: 0,
            line_len,
        }
    }

    /// The current output column.
    pub fn column(&self) -> usize {
        self.nchars
    }

    /// Releases the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn put(&mut self, byte: u8) -> Result<(), Error> {
        self.sink.write_all(&[byte])?;
        Ok(())
    }

    fn wrap(&mut self) -> Result<(), Error> {
        self.put(b'\\')?;
        self.put(b'\n')?;
        self.nchars = 0;
        Ok(())
    }

    /// One single-column digit, for bases up to hexadecimal.
    fn put_hex(&mut self, num: u64, radix: bool) -> Result<(), Error> {
        let width = 1 + usize::from(radix);
        if self.nchars + width >= self.line_len {
            self.wrap()?;
        }
        if radix {
            self.put(b'.')?;
        }
        self.put(DIGIT_CHARS[num as usize])?;
        self.nchars += width;
        Ok(())
    }

    /// One multi-column digit group, for bases above hexadecimal. Groups
    /// after the first on a line are space-separated; the first
    /// fractional group is dot-prefixed instead.
    fn put_digits(&mut self, mut num: u64, width: usize, radix: bool) -> Result<(), Error> {
        if self.nchars == self.line_len - 1 {
            self.wrap()?;
        }
        if self.nchars != 0 || radix {
            self.put(if radix { b'.' } else { b' ' })?;
            self.nchars += 1;
        }

        let mut pow = 1u64;
        for _ in 0..width - 1 {
            pow *= 10;
        }
        for _ in 0..width {
            if self.nchars == self.line_len - 1 {
                self.wrap()?;
            }
            let div = num / pow;
            num -= div * pow;
            self.put(b'0' + div as u8)?;
            self.nchars += 1;
            pow /= 10;
        }
        Ok(())
    }

    /// Decimal digits come straight out of the store, most significant
    /// first, with the dot before the first fractional digit.
    fn print_decimal(&mut self, n: &Num) -> Result<(), Error> {
        if n.neg {
            self.put(b'-')?;
            self.nchars += 1;
        }
        for i in (0..n.len).rev() {
            let radix = n.rdx > 0 && i + 1 == n.rdx;
            self.put_hex(n.digits[i] as u64, radix)?;
        }
        Ok(())
    }

    /// Any other base: peel integer digits with repeated `rem`/`div` onto
    /// a stack, then generate fractional digits by repeated multiplication
    /// until the place count passes the stored fraction width.
    fn print_base<I: Interrupt>(
        &mut self,
        n: &Num,
        base: &Num,
        base_t: usize,
        int: &I,
    ) -> Result<(), Error> {
        if n.neg {
            self.put(b'-')?;
            self.nchars += 1;
        }
        let mut m = n.clone();
        m.neg = false;

        let hex = base_t <= MAX_INPUT_BASE;
        let width = if hex { 1 } else { width_for_base(base_t) };

        let mut intp = Num::with_capacity(m.len())?;
        intp.copy_from(&m)?;
        intp.truncate(intp.rdx);
        let mut fracp = m.sub(&intp, 0, int)?;

        let mut stack: Vec<u64> = Vec::new();
        while !intp.is_zero() {
            let digit = intp.rem(base, 0, int)?;
            stack.push(digit.to_u64()?);
            intp = intp.div(base, 0, int)?;
        }
        for &dig in stack.iter().rev() {
            if hex {
                self.put_hex(dig, false)?;
            } else {
                self.put_digits(dig, width, false)?;
            }
        }

        if m.rdx() == 0 {
            return Ok(());
        }

        let mut frac_len = Num::one();
        let mut radix = true;
        while frac_len.len() <= m.rdx() {
            fracp = fracp.mul(base, m.rdx(), int)?;
            let dig = fracp.to_u64()?;
            fracp = fracp.sub(&Num::from_u64(dig), 0, int)?;
            if hex {
                self.put_hex(dig, radix)?;
            } else {
                self.put_digits(dig, width, radix)?;
            }
            frac_len = frac_len.mul(base, 0, int)?;
            radix = false;
        }
        Ok(())
    }

    /// Prints `n` in `base_t`; `base` is the same base as a number, used
    /// for the positional arithmetic of non-decimal output. When
    /// `newline` is set a final newline is emitted and the column resets.
    ///
    /// # Panics
    ///
    /// If `base_t` is outside `MIN_BASE..=MAX_BASE`.
    pub fn print<I: Interrupt>(
        &mut self,
        n: &Num,
        base: &Num,
        base_t: usize,
        newline: bool,
        int: &I,
    ) -> Result<(), Error> {
        assert!(
            (MIN_BASE..=MAX_BASE).contains(&base_t),
            "output base out of range: {base_t}"
        );
        if self.nchars >= self.line_len {
            self.wrap()?;
        }

        if n.is_zero() {
            self.put(b'0')?;
            self.nchars += 1;
        } else if base_t == 10 {
            self.print_decimal(n)?;
        } else {
            self.print_base(n, base, base_t, int)?;
        }

        if newline {
            self.put(b'\n')?;
            self.nchars = 0;
        }
        Ok(())
    }
}

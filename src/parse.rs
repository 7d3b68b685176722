//! Reading numbers from text in bases 2 through 16.

use crate::digit::char_to_digit;
use crate::error::Error;
use crate::interrupt::Interrupt;
use crate::limits::{MAX_INPUT_BASE, MIN_BASE};
use crate::num::{Digit, Num};

impl Num {
    /// Parses `text` as an unsigned number in `base_t`; `base` is the same
    /// base as a number, used for the positional arithmetic of non-decimal
    /// input. Sign is the business of the surrounding expression language.
    ///
    /// The empty string parses as zero. A trailing radix dot is the same
    /// as no dot.
    ///
    /// # Panics
    ///
    /// If `base_t` is outside `MIN_BASE..=MAX_INPUT_BASE`.
    pub fn parse<I: Interrupt>(
        text: &str,
        base: &Num,
        base_t: usize,
        int: &I,
    ) -> Result<Num, Error> {
        assert!(
            (MIN_BASE..=MAX_INPUT_BASE).contains(&base_t),
            "input base out of range: {base_t}"
        );
        let val = text.as_bytes();
        if !is_valid(val, base_t) {
            return Err(Error::BadString);
        }
        if base_t == 10 {
            parse_decimal(val)
        } else {
            parse_base(val, base, int)
        }
    }
}

/// A string is a number in `base` when it holds digits below the base and
/// at most one radix dot. The empty string is valid (and is zero).
fn is_valid(val: &[u8], base: usize) -> bool {
    let mut radix = false;
    for &c in val {
        if c == b'.' {
            if radix {
                return false;
            }
            radix = true;
            continue;
        }
        match char_to_digit(c) {
            Some(v) if (v as usize) < base => {}
            _ => return false,
        }
    }
    true
}

/// Fast path for decimal input: read the digits straight into the store.
fn parse_decimal(val: &[u8]) -> Result<Num, Error> {
    let leading = val.iter().take_while(|&&c| c == b'0').count();
    let val = &val[leading..];

    if val.iter().all(|&c| c == b'0' || c == b'.') {
        return Ok(Num::new());
    }

    let mut n = Num::with_capacity(val.len())?;
    n.rdx = match val.iter().position(|&c| c == b'.') {
        Some(dot) => val.len() - dot - 1,
        None => 0,
    };
    for &c in val.iter().rev() {
        if c == b'.' {
            continue;
        }
        n.digits[n.len] = (c - b'0') as Digit;
        n.len += 1;
    }
    Ok(n)
}

/// Positional accumulation for non-decimal input: the integer part is
/// `Σ digit·base^i`; the fractional part accumulates in the same way and
/// is divided by `base^digits` at the end.
fn parse_base<I: Interrupt>(val: &[u8], base: &Num, int: &I) -> Result<Num, Error> {
    if val.iter().all(|&c| c == b'0' || c == b'.') {
        return Ok(Num::new());
    }

    let dot = val.iter().position(|&c| c == b'.');
    let int_part = &val[..dot.unwrap_or(val.len())];
    let frac_part = dot.map(|d| &val[d + 1..]).unwrap_or(&[]);

    let mut n = Num::new();
    for &c in int_part {
        let v = char_to_digit(c).ok_or(Error::BadString)?;
        n = n.mul(base, 0, int)?;
        n = n.add(&Num::from_u64(v), 0, int)?;
    }

    if frac_part.is_empty() {
        return Ok(n);
    }

    let mut result = Num::with_capacity(base.len())?;
    let mut mult = Num::one();
    let mut digits = 0;
    for &c in frac_part {
        let v = char_to_digit(c).ok_or(Error::BadString)?;
        result = result.mul(base, 0, int)?;
        result = result.add(&Num::from_u64(v), 0, int)?;
        mult = mult.mul(base, 0, int)?;
        digits += 1;
    }

    result = result.div(&mult, digits, int)?;
    n = n.add(&result, digits, int)?;
    if n.len != 0 {
        if n.rdx < digits {
            n.extend(digits - n.rdx)?;
        }
    } else {
        n.set_zero();
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{dec, num};
    use crate::Never;

    fn parse_in(s: &str, base_t: u64) -> Num {
        Num::parse(s, &Num::from_u64(base_t), base_t as usize, &Never).unwrap()
    }

    #[test]
    fn decimal_basics() {
        assert_eq!(dec(&num("123.456")), "123.456");
        assert_eq!(dec(&num("0.5")), ".5");
        assert_eq!(dec(&num("1000")), "1000");
        assert_eq!(num("42").to_u64().unwrap(), 42);
    }

    #[test]
    fn decimal_strips_leading_zeros() {
        assert_eq!(num("007"), num("7"));
        assert_eq!(num("000.050"), num(".050"));
    }

    #[test]
    fn decimal_zero_forms() {
        for s in ["", "0", "000", "0.", ".", ".0", "0.000", "00.00"] {
            let n = num(s);
            assert!(n.is_zero(), "{s:?} should be zero");
            assert!(!n.is_negative());
            assert_eq!(n.rdx(), 0);
        }
    }

    #[test]
    fn trailing_dot_is_integer() {
        assert_eq!(num("10."), num("10"));
        assert_eq!(num("10.").rdx(), 0);
        assert_eq!(parse_in("10.", 2), parse_in("10", 2));
        assert_eq!(parse_in("FF.", 16).to_u64().unwrap(), 255);
    }

    #[test]
    fn fraction_keeps_trailing_zeros() {
        let n = num("1.500");
        assert_eq!(n.rdx(), 3);
        assert_eq!(dec(&n), "1.500");
    }

    #[test]
    fn hex_integer() {
        assert_eq!(parse_in("FF", 16).to_u64().unwrap(), 255);
        assert_eq!(parse_in("10", 16).to_u64().unwrap(), 16);
        assert_eq!(parse_in("DEAD", 16).to_u64().unwrap(), 0xDEAD);
    }

    #[test]
    fn binary_and_octal() {
        assert_eq!(parse_in("101", 2).to_u64().unwrap(), 5);
        assert_eq!(parse_in("777", 8).to_u64().unwrap(), 511);
    }

    #[test]
    fn base_fractions() {
        // .8 in hex is one half, carried at one fractional digit
        let n = parse_in(".8", 16);
        assert_eq!(n.rdx(), 1);
        assert_eq!(dec(&n), ".5");

        // .11 in binary is three quarters at two fractional digits
        let n = parse_in(".11", 2);
        assert_eq!(n.rdx(), 2);
        assert_eq!(dec(&n), ".75");

        let n = parse_in("A.8", 16);
        assert_eq!(dec(&n), "10.5");
    }

    #[test]
    fn base_fraction_scale_is_input_digit_count() {
        // one fractional input digit gives one fractional result digit,
        // so .4 in hex is 0.25 truncated to 0.2
        let n = parse_in(".4", 16);
        assert_eq!(dec(&n), ".2");
        // and .1 in hex (0.0625) truncates to canonical zero
        let n = parse_in(".1", 16);
        assert!(n.is_zero());
    }

    #[test]
    fn rejects_digits_at_or_above_base() {
        for (s, b) in [("2", 2), ("9", 8), ("A", 10), ("G", 16), ("F", 15)] {
            let base = Num::from_u64(b);
            assert!(
                matches!(
                    Num::parse(s, &base, b as usize, &Never),
                    Err(Error::BadString)
                ),
                "{s:?} must be invalid in base {b}"
            );
        }
    }

    #[test]
    fn rejects_malformed_strings() {
        let ten = Num::ten();
        for s in ["1.2.3", "..", "1a", "-1", " 1", "1 "] {
            assert!(
                matches!(Num::parse(s, &ten, 10, &Never), Err(Error::BadString)),
                "{s:?} must be rejected"
            );
        }
    }

    #[test]
    fn empty_string_is_zero() {
        assert!(num("").is_zero());
        assert!(parse_in("", 16).is_zero());
    }
}

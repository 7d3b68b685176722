//! Core arithmetic: the dispatcher and the schoolbook algorithms.
//!
//! Every public operation funnels through [`binary`], which sizes the
//! result storage from the operands before the algorithm runs. The
//! algorithms themselves assume distinct, zeroed result storage; value
//! semantics at the public surface make every operand/result aliasing
//! pattern safe.

use crate::error::Error;
use crate::interrupt::{test_int, Interrupt};
use crate::num::{cmp_mag, compare_digits, sub_digits, Digit, Num};

/// Result slots needed by an add or subtract.
fn add_req(a: &Num, b: &Num) -> usize {
    a.rdx.max(b.rdx) + a.int_len().max(b.int_len()) + 1
}

/// Result slots needed by a multiply, divide or remainder.
fn mul_req(a: &Num, b: &Num, scale: usize) -> usize {
    a.int_len() + b.int_len() + scale.max(a.rdx + b.rdx)
}

/// Allocates the result at the requested capacity and runs the algorithm.
fn binary<F>(a: &Num, b: &Num, req: usize, op: F) -> Result<Num, Error>
where
    F: FnOnce(&Num, &Num, &mut Num) -> Result<(), Error>,
{
    let mut c = Num::with_capacity(req)?;
    op(a, b, &mut c)?;
    Ok(c)
}

impl Num {
    /// `self + other`. The result keeps every fractional digit of the
    /// wider operand; `scale` is accepted for signature uniformity but
    /// does not truncate.
    pub fn add<I: Interrupt>(&self, other: &Num, scale: usize, int: &I) -> Result<Num, Error> {
        let _ = scale;
        binary(self, other, add_req(self, other), |a, b, c| {
            if a.neg == b.neg {
                alg_add(a, b, c, false, int)
            } else {
                alg_sub(a, b, c, false, int)
            }
        })
    }

    /// `self − other`; same scale behaviour as [`Num::add`].
    pub fn sub<I: Interrupt>(&self, other: &Num, scale: usize, int: &I) -> Result<Num, Error> {
        let _ = scale;
        binary(self, other, add_req(self, other), |a, b, c| {
            if a.neg == b.neg {
                alg_sub(a, b, c, true, int)
            } else {
                alg_add(a, b, c, true, int)
            }
        })
    }

    /// `self · other`, keeping at least `max(scale, rdx_a, rdx_b)` and at
    /// most `rdx_a + rdx_b` fractional digits.
    pub fn mul<I: Interrupt>(&self, other: &Num, scale: usize, int: &I) -> Result<Num, Error> {
        binary(self, other, mul_req(self, other, scale), |a, b, c| {
            alg_mul(a, b, c, scale, int)
        })
    }

    /// `self / other` truncated to exactly `scale` fractional digits.
    pub fn div<I: Interrupt>(&self, other: &Num, scale: usize, int: &I) -> Result<Num, Error> {
        binary(self, other, mul_req(self, other, scale), |a, b, c| {
            alg_div(a, b, c, scale, int)
        })
    }

    /// `bc`'s `%`: `self − (self / other) · other` with the quotient
    /// truncated at `scale`.
    pub fn rem<I: Interrupt>(&self, other: &Num, scale: usize, int: &I) -> Result<Num, Error> {
        binary(self, other, mul_req(self, other, scale), |a, b, c| {
            alg_rem(a, b, c, scale, int)
        })
    }

    /// `self ^ other` for integer `other`, by squaring.
    pub fn pow<I: Interrupt>(&self, other: &Num, scale: usize, int: &I) -> Result<Num, Error> {
        let req = self.len.saturating_mul(other.len) + 1;
        binary(self, other, req, |a, b, c| alg_pow(a, b, c, scale, int))
    }

    /// `1 / self` at `scale`.
    pub fn recip<I: Interrupt>(&self, scale: usize, int: &I) -> Result<Num, Error> {
        Num::one().div(self, scale, int)
    }
}

/// Unsigned magnitude addition; the operands are known to share a sign
/// (or, with `sub` set, the caller is subtracting across opposite signs).
/// The result sign is `a`'s, which is also the sign of `b` negated when
/// subtracting; a zero `a` leaves only `b`, so its sign flips under `sub`.
fn alg_add<I: Interrupt>(
    a: &Num,
    b: &Num,
    c: &mut Num,
    sub: bool,
    int: &I,
) -> Result<(), Error> {
    if a.len == 0 {
        c.copy_from(b)?;
        c.neg = if sub { !b.neg } else { b.neg };
        if c.len == 0 {
            c.neg = false;
        }
        return Ok(());
    }
    if b.len == 0 {
        return c.copy_from(a);
    }

    c.set_zero();
    c.neg = a.neg;
    c.rdx = a.rdx.max(b.rdx);
    let min_rdx = a.rdx.min(b.rdx);

    // the wider fraction contributes its low digits verbatim
    let (diff, tail) = if a.rdx > b.rdx {
        (a.rdx - b.rdx, a)
    } else {
        (b.rdx - a.rdx, b)
    };
    let (a_off, b_off) = if a.rdx > b.rdx { (diff, 0) } else { (0, diff) };
    for i in 0..diff {
        c.digits[i] = tail.digits[i];
        c.len += 1;
    }

    let a_int = a.int_len();
    let b_int = b.int_len();
    let min_int = a_int.min(b_int);
    let max_int = a_int.max(b_int);
    let (hi, hi_off) = if a_int > b_int { (a, a_off) } else { (b, b_off) };

    let mut carry: Digit = 0;
    let mut i = 0;
    while i < min_rdx + min_int {
        test_int(int)?;
        let sum = a.digits[a_off + i] + b.digits[b_off + i] + carry;
        c.digits[diff + i] = sum % 10;
        carry = sum / 10;
        i += 1;
        c.len += 1;
    }
    while i < min_rdx + max_int {
        test_int(int)?;
        let sum = hi.digits[hi_off + i] + carry;
        c.digits[diff + i] = sum % 10;
        carry = sum / 10;
        i += 1;
        c.len += 1;
    }
    if carry != 0 {
        c.digits[c.len] = carry;
        c.len += 1;
    }
    Ok(())
}

/// Magnitude subtraction. `sub` says whether the caller is subtracting;
/// it decides the result sign together with which operand is the minuend:
/// subtracting gives `a.neg` when `a` is the minuend and `!b.neg` when `b`
/// is, adding across opposite signs gives the sign of the larger-magnitude
/// operand.
fn alg_sub<I: Interrupt>(a: &Num, b: &Num, c: &mut Num, sub: bool, int: &I) -> Result<(), Error> {
    if a.len == 0 {
        c.copy_from(b)?;
        c.neg = if sub { !b.neg } else { b.neg };
        if c.len == 0 {
            c.neg = false;
        }
        return Ok(());
    }
    if b.len == 0 {
        return c.copy_from(a);
    }

    let mag = cmp_mag(a, b, int)?;
    if mag == 0 {
        c.set_zero();
        return Ok(());
    }
    let (minuend, subtrahend, neg) = if mag > 0 {
        (a, b, a.neg)
    } else {
        (b, a, if sub { !b.neg } else { b.neg })
    };

    c.copy_from(minuend)?;
    c.neg = neg;

    // align the subtrahend's fraction under the minuend's
    let start = if c.rdx < subtrahend.rdx {
        c.extend(subtrahend.rdx - c.rdx)?;
        0
    } else {
        c.rdx - subtrahend.rdx
    };
    sub_digits(&mut c.digits[start..], &subtrahend.digits, subtrahend.len, int)?;

    while c.len > c.rdx && c.digits[c.len - 1] == 0 {
        c.len -= 1;
    }
    Ok(())
}

/// Classical long multiplication with per-digit carry propagation.
fn alg_mul<I: Interrupt>(
    a: &Num,
    b: &Num,
    c: &mut Num,
    scale: usize,
    int: &I,
) -> Result<(), Error> {
    if a.len == 0 || b.len == 0 {
        c.set_zero();
        return Ok(());
    }
    if a.is_unit() {
        c.copy_from(b)?;
        if a.neg {
            c.neg = !c.neg;
        }
        return Ok(());
    }
    if b.is_unit() {
        c.copy_from(a)?;
        if b.neg {
            c.neg = !c.neg;
        }
        return Ok(());
    }

    let scale = scale.max(a.rdx).max(b.rdx);
    c.set_zero();
    c.rdx = a.rdx + b.rdx;

    let mut len = 0;
    let mut carry: Digit = 0;
    for i in 0..b.len {
        for j in 0..a.len {
            test_int(int)?;
            let acc = c.digits[i + j] + a.digits[j] * b.digits[i] + carry;
            c.digits[i + j] = acc % 10;
            carry = acc / 10;
        }
        if carry != 0 {
            c.digits[i + a.len] += carry;
            carry = 0;
            len = len.max(i + a.len + 1);
        } else {
            len = len.max(i + a.len);
        }
    }

    c.len = len.max(c.rdx);
    c.neg = a.neg != b.neg;
    if scale < c.rdx {
        c.truncate(c.rdx - scale);
    }
    c.fix_len();
    Ok(())
}

/// Classical long division: one quotient digit per window position by
/// repeated subtraction of the divisor.
fn alg_div<I: Interrupt>(
    a: &Num,
    b: &Num,
    c: &mut Num,
    scale: usize,
    int: &I,
) -> Result<(), Error> {
    if b.len == 0 {
        return Err(Error::DivideByZero);
    }
    if a.len == 0 {
        c.set_zero();
        return Ok(());
    }
    if b.is_unit() {
        c.copy_from(a)?;
        if b.neg {
            c.neg = !c.neg;
        }
        if c.rdx < scale {
            c.extend(scale - c.rdx)?;
        } else {
            c.truncate(c.rdx - scale);
        }
        c.fix_len();
        return Ok(());
    }

    let mut copy = Num::with_capacity(mul_req(a, b, scale))?;
    copy.copy_from(a)?;

    let mut len = b.len;
    if len > copy.len {
        copy.expand(len + 2)?;
        copy.extend(len - copy.len)?;
    }
    if b.rdx > copy.rdx {
        copy.extend(b.rdx - copy.rdx)?;
    }
    // the divisor becomes an integer for the rest of the division
    copy.rdx -= b.rdx;
    if scale > copy.rdx {
        copy.extend(scale - copy.rdx)?;
    }

    if b.rdx == b.len {
        // a fraction-only divisor may carry leading zero digits;
        // trim them, and reject a magnitude that is all zeros
        let zeros = b.digits[..len].iter().rev().take_while(|&&d| d == 0).count();
        if zeros == len {
            return Err(Error::DivideByZero);
        }
        len -= zeros;
    }

    if copy.cap() == copy.len {
        copy.expand(copy.len + 1)?;
    }
    // guard digit above the top so each window spans len + 1 slots
    copy.digits[copy.len] = 0;
    copy.len += 1;
    let end = copy.len - len;

    c.expand(copy.len)?;
    c.set_zero();
    c.rdx = copy.rdx;
    c.len = copy.len;

    for i in (0..end).rev() {
        test_int(int)?;
        let mut q: Digit = 0;
        let window = &mut copy.digits[i..];
        while window[len] != 0 || compare_digits(window, &b.digits, len, int)? >= 0 {
            sub_digits(window, &b.digits, len, int)?;
            q += 1;
        }
        c.digits[i] = q;
    }

    c.neg = a.neg != b.neg;
    if c.rdx > scale {
        c.truncate(c.rdx - scale);
    }
    c.fix_len();
    Ok(())
}

/// `a − (a / b) · b`, with the product carried at `scale + b.rdx` so it is
/// exact and the result keeps `max(scale + b.rdx, a.rdx)` fractional
/// digits.
fn alg_rem<I: Interrupt>(
    a: &Num,
    b: &Num,
    c: &mut Num,
    scale: usize,
    int: &I,
) -> Result<(), Error> {
    if b.len == 0 {
        return Err(Error::DivideByZero);
    }
    if a.len == 0 {
        c.set_zero();
        return Ok(());
    }

    let q = a.div(b, scale, int)?;
    let p = q.mul(b, scale + b.rdx, int)?;
    *c = a.sub(&p, scale, int)?;
    Ok(())
}

/// Integer exponentiation by squaring, with reciprocal handling for
/// negative exponents.
fn alg_pow<I: Interrupt>(
    a: &Num,
    b: &Num,
    c: &mut Num,
    scale: usize,
    int: &I,
) -> Result<(), Error> {
    if b.rdx != 0 {
        return Err(Error::NonInteger);
    }
    if b.len == 0 {
        c.set_one();
        return Ok(());
    }
    if a.len == 0 {
        c.set_zero();
        return Ok(());
    }
    if b.is_unit() {
        if !b.neg {
            c.copy_from(a)?;
        } else {
            *c = a.recip(scale, int)?;
        }
        return Ok(());
    }

    let neg = b.neg;
    let mut pow = b.mag_to_u64()?;

    let mut copy = Num::with_capacity(a.len)?;
    copy.copy_from(a)?;

    let scale = if neg {
        scale
    } else {
        let cap = a.rdx.saturating_mul(usize::try_from(pow).unwrap_or(usize::MAX));
        scale.max(a.rdx).min(cap)
    };

    // square away trailing zero bits of the exponent, doubling the
    // working scale with each squaring
    let mut powrdx = a.rdx;
    while pow & 1 == 0 {
        test_int(int)?;
        powrdx <<= 1;
        copy = copy.mul(&copy, powrdx, int)?;
        pow >>= 1;
    }

    c.copy_from(&copy)?;
    let mut resrdx = powrdx;
    pow >>= 1;

    while pow != 0 {
        test_int(int)?;
        powrdx <<= 1;
        copy = copy.mul(&copy, powrdx, int)?;
        if pow & 1 == 1 {
            resrdx += powrdx;
            *c = c.mul(&copy, resrdx, int)?;
        }
        pow >>= 1;
    }

    if neg {
        *c = c.recip(scale, int)?;
    }
    if c.rdx > scale {
        c.truncate(c.rdx - scale);
    }
    if c.digits[..c.len].iter().all(|&d| d == 0) {
        c.set_zero();
    }
    Ok(())
}

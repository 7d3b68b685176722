//! Square root by Newton's iteration.

use crate::error::Error;
use crate::interrupt::{test_int, Interrupt};
use crate::num::Num;

impl Num {
    /// `√self` truncated to `max(scale, rdx)` fractional digits.
    ///
    /// Iterates `x ← (x + self/x) / 2` from a guess of the right decimal
    /// magnitude until successive iterates agree in every digit or the
    /// stable-digit count passes the working precision.
    pub fn sqrt<I: Interrupt>(&self, scale: usize, int: &I) -> Result<Num, Error> {
        let req = scale.max(self.rdx) + (self.int_len() + 1) / 2 + 1;
        let mut res = Num::with_capacity(req)?;

        if self.len == 0 {
            return Ok(res);
        }
        if self.neg {
            return Err(Error::NegSqrt);
        }
        if self.is_unit() {
            res.set_one();
            res.extend(scale)?;
            return Ok(res);
        }

        let scale = scale.max(self.rdx) + 1;

        let half = {
            let mut h = Num::one();
            h.digits[0] = 5;
            h.rdx = 1;
            h
        };

        // initial guess: 2·10^((p−1)/2) for an odd count of integer
        // digits, 6·10^((p−2)/2) for an even one
        let mut x0 = Num::with_capacity(self.len)?;
        x0.set_one();
        let mut p = self.int_len();
        if p != 0 {
            if p & 1 == 1 {
                x0.digits[0] = 2;
                p -= 1;
            } else {
                x0.digits[0] = 6;
                p -= 2;
            }
            x0.extend(p)?;
        }
        x0.rdx = 0;

        let resrdx = scale + 1;
        let len = x0.int_len() + resrdx;
        let mut cmp: isize = 1;
        let mut digits = 0usize;

        while cmp != 0 && digits <= len {
            test_int(int)?;
            let f = self.div(&x0, resrdx, int)?;
            let fprime = x0.add(&f, resrdx, int)?;
            let x1 = fprime.mul(&half, resrdx, int)?;
            cmp = x1.compare(&x0, int)?;
            // stable leading digits; when the iterate's integer part
            // shrinks the distance exceeds x1.len and the wrapped value
            // simply ends the loop
            digits = x1.len.wrapping_sub(cmp.unsigned_abs());
            x0 = x1;
        }

        res.copy_from(&x0)?;
        let scale = scale - 1;
        if res.rdx > scale {
            res.truncate(res.rdx - scale);
        } else if res.rdx < scale {
            res.extend(scale - res.rdx)?;
        }
        Ok(res)
    }
}

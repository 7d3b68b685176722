//! Helpers shared by the unit tests.

use crate::{Never, Num, Printer};

/// Parses a decimal literal.
pub(crate) fn num(s: &str) -> Num {
    Num::parse(s, &Num::ten(), 10, &Never).unwrap()
}

/// Renders in decimal, wide enough that nothing wraps.
pub(crate) fn dec(n: &Num) -> String {
    print_in(n, &Num::ten(), 10)
}

/// Renders in an arbitrary base, wide enough that nothing wraps.
pub(crate) fn print_in(n: &Num, base: &Num, base_t: usize) -> String {
    let mut p = Printer::with_line_len(Vec::new(), 1 << 20);
    p.print(n, base, base_t, false, &Never).unwrap();
    String::from_utf8(p.into_inner()).unwrap()
}

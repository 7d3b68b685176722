//! End-to-end scenarios for the numeric kernel.

use bc_num::{Error, Never, Num, Printer};
use std::sync::atomic::AtomicBool;

fn num(s: &str) -> Num {
    Num::parse(s, &Num::ten(), 10, &Never).unwrap()
}

fn render(n: &Num, base_t: usize) -> String {
    let mut p = Printer::with_line_len(Vec::new(), 1 << 20);
    let base = Num::from_u64(base_t as u64);
    p.print(n, &base, base_t, false, &Never).unwrap();
    String::from_utf8(p.into_inner()).unwrap()
}

#[test]
fn scenario_add_with_unequal_fractions() {
    let c = num("123.456").add(&num("7.89"), 10, &Never).unwrap();
    assert_eq!(render(&c, 10), "131.346");
}

#[test]
fn scenario_one_third_at_twenty_digits() {
    let c = num("1").div(&num("3"), 20, &Never).unwrap();
    assert_eq!(render(&c, 10), ".33333333333333333333");
    assert_eq!(c.rdx(), 20);
}

#[test]
fn scenario_two_to_the_tenth() {
    let c = num("2").pow(&num("10"), 0, &Never).unwrap();
    assert_eq!(render(&c, 10), "1024");
}

#[test]
fn scenario_sqrt_two_at_fifty_digits() {
    let c = num("2").sqrt(50, &Never).unwrap();
    assert_eq!(
        render(&c, 10),
        "1.41421356237309504880168872420969807856967187537694"
    );
}

#[test]
fn scenario_hex_round_trip_to_decimal() {
    let sixteen = Num::from_u64(16);
    let n = Num::parse("FF", &sixteen, 16, &Never).unwrap();
    assert_eq!(render(&n, 10), "255");
}

#[test]
fn scenario_ten_mod_three() {
    let c = num("10").rem(&num("3"), 0, &Never).unwrap();
    assert_eq!(render(&c, 10), "1");
}

#[test]
fn sqrt_three_at_thirty_digits() {
    let c = num("3").sqrt(30, &Never).unwrap();
    assert_eq!(render(&c, 10), "1.732050807568877293527446341505");
}

#[test]
fn boundary_divide_by_zero() {
    let zero = Num::new();
    assert!(matches!(
        num("1").div(&zero, 0, &Never),
        Err(Error::DivideByZero)
    ));
    assert!(matches!(
        num("1").rem(&zero, 0, &Never),
        Err(Error::DivideByZero)
    ));
    // a canonically non-zero divisor whose digits are all zero is caught
    // after the fractional shift; plain fractions divide fine
    assert_eq!(render(&num("1").div(&num("0.5"), 0, &Never).unwrap(), 10), "2");
}

#[test]
fn subtracting_from_zero_flips_the_sign() {
    let zero = Num::new();
    let mut three = num("3");
    three.negate();
    assert_eq!(render(&zero.sub(&three, 0, &Never).unwrap(), 10), "3");
    assert_eq!(render(&zero.sub(&num("3"), 0, &Never).unwrap(), 10), "-3");
}

#[test]
fn boundary_negative_sqrt() {
    let mut n = num("9");
    n.negate();
    assert!(matches!(n.sqrt(0, &Never), Err(Error::NegSqrt)));
}

#[test]
fn boundary_non_integer_exponent() {
    assert!(matches!(
        num("2").pow(&num("0.5"), 0, &Never),
        Err(Error::NonInteger)
    ));
}

#[test]
fn boundary_pending_interrupt_aborts() {
    let flag = AtomicBool::new(true);
    let a = num("123456.789");
    let b = num("54.3");
    assert!(matches!(a.add(&b, 0, &flag), Err(Error::Signal)));
    assert!(matches!(a.sub(&b, 0, &flag), Err(Error::Signal)));
    assert!(matches!(a.mul(&b, 0, &flag), Err(Error::Signal)));
    assert!(matches!(a.div(&b, 5, &flag), Err(Error::Signal)));
    assert!(matches!(a.rem(&b, 5, &flag), Err(Error::Signal)));
    assert!(matches!(a.pow(&num("3"), 0, &flag), Err(Error::Signal)));
    assert!(matches!(a.sqrt(5, &flag), Err(Error::Signal)));
    // equal integer widths force the comparison into its digit loop
    assert!(matches!(
        a.compare(&num("654321.987"), &flag),
        Err(Error::Signal)
    ));
}

#[test]
fn bad_strings_are_rejected_not_parsed() {
    let ten = Num::ten();
    for s in ["1..2", "x", "1,5", "0x10"] {
        assert!(matches!(
            Num::parse(s, &ten, 10, &Never),
            Err(Error::BadString)
        ));
    }
}

#[test]
fn printing_wraps_at_the_default_width() {
    // 80 nines at the default 69-column width wrap exactly once
    let long = "9".repeat(80);
    let n = num(&long);
    let mut p = Printer::new(Vec::new());
    p.print(&n, &Num::ten(), 10, true, &Never).unwrap();
    let out = String::from_utf8(p.into_inner()).unwrap();
    let lines: Vec<&str> = out.split("\\\n").collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 68);
    assert_eq!(lines[1], format!("{}\n", "9".repeat(12)));
}

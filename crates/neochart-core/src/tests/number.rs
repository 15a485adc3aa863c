use crate::number::{PRECISION, fmt, fmt_compact};

#[test]
fn fmt_renders_integers_without_fraction() {
    assert_eq!(fmt(0.0), "0");
    assert_eq!(fmt(-0.0), "0");
    assert_eq!(fmt(42.0), "42");
    assert_eq!(fmt(-7.0), "-7");
}

#[test]
fn fmt_snaps_values_inside_the_precision_band() {
    assert_eq!(fmt(0.0004), "0");
    assert_eq!(fmt(-0.0004), "0");
    assert_eq!(fmt(0.9997), "1");
    assert_eq!(fmt(-2.0003), "-2");
    assert_eq!(fmt(6.123233995736766e-15), "0");
}

#[test]
fn fmt_uses_three_fractional_digits_outside_the_band() {
    assert_eq!(fmt(0.001), "0.001");
    assert_eq!(fmt(0.0007), "0.001");
    assert_eq!(fmt(-0.0007), "-0.001");
    assert_eq!(fmt(1000.0007), "1000.001");
    assert_eq!(fmt(1.5), "1.500");
    assert_eq!(fmt(-70.7106781), "-70.711");
}

#[test]
fn fmt_output_parses_back_within_precision() {
    for v in [0.0, 0.1234, -3.14159, 99.9996, 1e6 + 0.25, -0.0006, 250.0004] {
        let back: f64 = fmt(v).parse().unwrap();
        assert!((back - v).abs() <= PRECISION, "{v} -> {back}");
    }
}

#[test]
fn fmt_keeps_non_finite_values_out_of_markup() {
    assert_eq!(fmt(f64::NAN), "0");
    assert_eq!(fmt(f64::INFINITY), "0");
}

#[test]
fn fmt_compact_trims_to_five_significant_digits() {
    assert_eq!(fmt_compact(100.0), "100");
    assert_eq!(fmt_compact(0.0), "0");
    assert_eq!(fmt_compact(2.5), "2.5");
    assert_eq!(fmt_compact(3.14159265), "3.1416");
    assert_eq!(fmt_compact(-12.000001), "-12");
    assert_eq!(fmt_compact(123456.7), "123457");
}

#[test]
fn fmt_writes_huge_integers_in_full() {
    assert_eq!(fmt(1e20), "100000000000000000000");
    assert_eq!(fmt(-1e19), "-10000000000000000000");
    for v in [1e20, -1e19, 1e300] {
        let back: f64 = fmt(v).parse().unwrap();
        assert_eq!(back, v);
    }
}

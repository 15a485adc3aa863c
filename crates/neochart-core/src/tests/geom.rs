use super::approx;
use crate::geom::{Angle, Vector2};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn vector_arithmetic_returns_new_values() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, -1.0);
    assert_eq!(a + b, Vector2::new(4.0, 1.0));
    assert_eq!(a - b, Vector2::new(-2.0, 3.0));
    assert_eq!(-a, Vector2::new(-1.0, -2.0));
    assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(b / 2.0, Vector2::new(1.5, -0.5));
    assert_eq!(a, Vector2::new(1.0, 2.0));
}

#[test]
fn vector_length_and_normalization() {
    let v = Vector2::new(3.0, 4.0);
    assert!(approx(v.length(), 5.0));
    let unit = v.normalized().unwrap();
    assert!(approx(unit.x(), 0.6));
    assert!(approx(unit.y(), 0.8));
    assert!(Vector2::ZERO.normalized().is_none());
}

#[test]
fn polar_round_trip_wraps_phi_into_one_turn() {
    for (r, phi) in [(1.0, 0.3), (2.0, 7.0), (5.0, -1.0), (10.0, PI)] {
        let (r2, phi2) = Vector2::from_polar(r, phi).polar();
        assert!(approx(r2, r), "r for {phi}");
        assert!(approx(phi2, phi.rem_euclid(TAU)), "{phi} -> {phi2}");
        assert!((0.0..TAU).contains(&phi2));
    }
}

#[test]
fn positive_angles_turn_towards_positive_y() {
    let v = Vector2::from_angle(100.0, Angle::degrees(90.0));
    assert!(approx(v.x(), 0.0));
    assert!(approx(v.y(), 100.0));
    let top = Vector2::from_polar(100.0, -FRAC_PI_2);
    assert!(approx(top.y(), -100.0));
}

#[test]
fn angle_normalization_lands_in_half_open_range() {
    assert_eq!(Angle::degrees(350.0).normalized(), Angle::degrees(-10.0));
    assert_eq!(Angle::degrees(-350.0).normalized(), Angle::degrees(10.0));
    assert_eq!(Angle::degrees(180.0).normalized(), Angle::degrees(180.0));
    assert_eq!(Angle::degrees(-180.0).normalized(), Angle::degrees(180.0));
    assert_eq!(Angle::degrees(720.0).normalized(), Angle::ZERO);
    for d in [-1000.0, -540.0, -181.0, 0.5, 181.0, 899.0] {
        let n = Angle::degrees(d).normalized();
        assert!(n > -180.0 && n <= 180.0, "{d} -> {n}");
    }
}

#[test]
fn angle_arithmetic_and_conversion() {
    let a = Angle::degrees(30.0);
    assert_eq!(a + 15.0, Angle::degrees(45.0));
    assert_eq!(a + a, Angle::degrees(60.0));
    assert_eq!(a - 40.0, Angle::degrees(-10.0));
    assert_eq!(a * 3.0, Angle::degrees(90.0));
    assert_eq!(2.0 * a, Angle::degrees(60.0));
    assert_eq!(a / 2.0, Angle::degrees(15.0));
    assert_eq!(-a, Angle::degrees(-30.0));
    assert!(approx(Angle::HALF_TURN.to_radians(), PI));
    assert!(approx(Angle::radians(FRAC_PI_2).to_degrees(), 90.0));
    assert!(Angle::degrees(10.0) < Angle::degrees(20.0));
}

#[test]
fn phi_never_reaches_a_full_turn() {
    let phi = Vector2::new(1.0, -1e-17).phi();
    assert!((0.0..TAU).contains(&phi), "{phi}");
    assert!(approx(Vector2::new(0.0, -1.0).phi(), 3.0 * FRAC_PI_2));
}

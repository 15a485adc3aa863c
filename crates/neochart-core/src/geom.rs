#![forbid(unsafe_code)]

//! Immutable 2-D vector and angle values.
//!
//! Both types are thin, `Copy` wrappers over `euclid` math: every operation returns a new
//! value, nothing is mutated in place.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub type Unit = euclid::UnknownUnit;

type EuclidVector = euclid::Vector2D<f64, Unit>;

/// Two-dimensional vector `(x, y)`.
///
/// The y-axis points down, as in SVG user space, so positive angles turn clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from polar coordinates, `phi` in radians.
    pub fn from_polar(r: f64, phi: f64) -> Self {
        EuclidVector::from_angle_and_length(euclid::Angle::radians(phi), r).into()
    }

    /// Builds a vector of length `r` pointing along `angle`.
    pub fn from_angle(r: f64, angle: Angle) -> Self {
        Self::from_polar(r, angle.to_radians())
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.to_euclid().length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Self> {
        self.to_euclid().try_normalize().map(Into::into)
    }

    /// Radius part of the polar coordinates.
    pub fn r(self) -> f64 {
        self.length()
    }

    /// Angle part of the polar coordinates, in radians within `[0, 2π)`.
    pub fn phi(self) -> f64 {
        let phi = self.to_euclid().angle_from_x_axis().positive().radians;
        // Tiny negative angles round up to a full turn.
        if phi >= std::f64::consts::TAU { 0.0 } else { phi }
    }

    /// `(r, phi)` with `phi` in radians within `[0, 2π)`.
    pub fn polar(self) -> (f64, f64) {
        (self.r(), self.phi())
    }

    fn to_euclid(self) -> EuclidVector {
        euclid::vec2(self.x, self.y)
    }
}

impl From<EuclidVector> for Vector2 {
    fn from(v: EuclidVector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

/// Angle stored in degrees.
///
/// Adding or subtracting a bare `f64` treats it as degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { degrees: 0.0 };
    pub const HALF_TURN: Angle = Angle { degrees: 180.0 };
    pub const FULL_TURN: Angle = Angle { degrees: 360.0 };

    pub const fn degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    pub fn radians(radians: f64) -> Self {
        Self::degrees(radians.to_degrees())
    }

    pub fn to_degrees(self) -> f64 {
        self.degrees
    }

    pub fn to_radians(self) -> f64 {
        self.degrees.to_radians()
    }

    /// The same direction expressed within `(-180°, 180°]`.
    pub fn normalized(self) -> Self {
        let mut d = self.degrees.rem_euclid(360.0);
        if d > 180.0 {
            d -= 360.0;
        }
        Self::degrees(d)
    }

    /// Total order over the degree value (NaN sorts last).
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.degrees.total_cmp(&other.degrees)
    }
}

impl From<euclid::Angle<f64>> for Angle {
    fn from(a: euclid::Angle<f64>) -> Self {
        Self::radians(a.radians)
    }
}

impl PartialEq<f64> for Angle {
    fn eq(&self, other: &f64) -> bool {
        self.degrees == *other
    }
}

impl PartialOrd<f64> for Angle {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.degrees.partial_cmp(other)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::degrees(self.degrees + rhs.degrees)
    }
}

impl Add<f64> for Angle {
    type Output = Angle;
    fn add(self, rhs: f64) -> Angle {
        Angle::degrees(self.degrees + rhs)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::degrees(self.degrees - rhs.degrees)
    }
}

impl Sub<f64> for Angle {
    type Output = Angle;
    fn sub(self, rhs: f64) -> Angle {
        Angle::degrees(self.degrees - rhs)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle::degrees(self.degrees * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle {
        Angle::degrees(self.degrees / rhs)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::degrees(-self.degrees)
    }
}

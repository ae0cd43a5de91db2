//! Turtle world geometry.
//!
//! World space has its origin at the canvas center, +X right, +Y up, and one
//! unit per logical pixel. Headings are degrees, 0° along +X, counter-clockwise.

use core::ops::{Add, Mul, Sub};

/// Position in world units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Unit vector pointing along `heading` degrees.
#[inline]
pub fn direction(heading: f64) -> Point {
    let (sin, cos) = heading.to_radians().sin_cos();
    Point::new(cos, sin)
}

/// Folds any angle into `[0, 360)`.
#[inline]
pub fn normalize_heading(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if h >= 360.0 { 0.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_of_cardinal_headings() {
        assert!(direction(0.0).approx_eq(Point::new(1.0, 0.0), 1e-12));
        assert!(direction(90.0).approx_eq(Point::new(0.0, 1.0), 1e-12));
        assert!(direction(180.0).approx_eq(Point::new(-1.0, 0.0), 1e-12));
        assert!(direction(270.0).approx_eq(Point::new(0.0, -1.0), 1e-12));
    }

    #[test]
    fn headings_fold_into_one_turn() {
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(450.0), 90.0);
        assert_eq!(normalize_heading(-1e-20), 0.0);
    }
}

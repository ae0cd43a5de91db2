//! Primitive shape drawers.
//!
//! Every drawer starts at the turtle's current position and heading, validates
//! its arguments before moving, and wraps the whole path in a fill bracket
//! when `fill` is given.

use easel_engine::paint::Color;

use crate::error::{ensure_finite, ensure_length, ensure_positive, TurtleError};
use crate::{Surface, Turtle};

/// Segment count used by [`curve`] callers that have no preference.
pub const DEFAULT_CURVE_SEGMENTS: u32 = 10;

/// Rectangle drawn clockwise: `width` along the heading, then `height` to its right.
pub fn rectangle<S: Surface>(
    t: &mut Turtle<S>,
    width: f64,
    height: f64,
    fill: Option<Color>,
) -> Result<(), TurtleError> {
    ensure_length("width", width)?;
    ensure_length("height", height)?;

    t.with_fill(fill, |t| {
        for _ in 0..2 {
            t.forward(width)?;
            t.right(90.0)?;
            t.forward(height)?;
            t.right(90.0)?;
        }
        Ok(())
    })
}

pub fn square<S: Surface>(t: &mut Turtle<S>, size: f64, fill: Option<Color>) -> Result<(), TurtleError> {
    ensure_length("size", size)?;

    t.with_fill(fill, |t| {
        for _ in 0..4 {
            t.forward(size)?;
            t.right(90.0)?;
        }
        Ok(())
    })
}

/// Equilateral triangle drawn counter-clockwise (left turns).
pub fn triangle<S: Surface>(t: &mut Turtle<S>, size: f64, fill: Option<Color>) -> Result<(), TurtleError> {
    ensure_length("size", size)?;

    t.with_fill(fill, |t| {
        for _ in 0..3 {
            t.forward(size)?;
            t.left(120.0)?;
        }
        Ok(())
    })
}

/// Full circle with its center `radius` to the left of the heading.
pub fn circle<S: Surface>(t: &mut Turtle<S>, radius: f64, fill: Option<Color>) -> Result<(), TurtleError> {
    ensure_positive("radius", radius)?;

    t.with_fill(fill, |t| {
        t.circle(radius)?;
        Ok(())
    })
}

/// Regular polygon drawn clockwise.
pub fn regular_polygon<S: Surface>(
    t: &mut Turtle<S>,
    sides: u32,
    size: f64,
    fill: Option<Color>,
) -> Result<(), TurtleError> {
    if sides < 3 {
        return Err(TurtleError::invalid("sides", sides as f64, "a polygon needs at least 3 sides"));
    }
    ensure_length("size", size)?;

    let exterior = 360.0 / sides as f64;
    t.with_fill(fill, |t| {
        for _ in 0..sides {
            t.forward(size)?;
            t.right(exterior)?;
        }
        Ok(())
    })
}

/// Bowed line of `segments` equal strokes.
///
/// Before segment `i` the turtle turns right by
/// `curve_factor * sin(π·i/segments)` and turns back after it, so a positive
/// factor bows the path to the right of the heading. The heading is restored
/// exactly at the end.
pub fn curve<S: Surface>(
    t: &mut Turtle<S>,
    length: f64,
    curve_factor: f64,
    segments: u32,
    fill: Option<Color>,
) -> Result<(), TurtleError> {
    ensure_length("length", length)?;
    ensure_finite("curve_factor", curve_factor)?;
    if segments == 0 {
        return Err(TurtleError::invalid("segments", 0.0, "a curve needs at least one segment"));
    }

    let segment_length = length / segments as f64;
    t.with_fill(fill, |t| {
        let start_heading = t.heading();
        for i in 0..segments {
            let angle = curve_factor * (std::f64::consts::PI * i as f64 / segments as f64).sin();
            t.right(angle)?;
            t.forward(segment_length)?;
            t.left(angle)?;
        }
        t.set_heading(start_heading)?;
        Ok(())
    })
}

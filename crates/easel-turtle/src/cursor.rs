use easel_engine::paint::Color;

use crate::error::{ensure_finite, ensure_positive, TurtleError};
use crate::geom::{self, Point};
use crate::surface::{Pen, Surface};

/// Fill opened by `begin_fill` and not yet closed.
struct OpenFill<T> {
    slot: T,
    color: Color,
    path: Vec<Point>,
}

/// Stateful drawing cursor.
///
/// Starts at the world origin facing +X with the pen down, a black pen of
/// width 1 and no fill. Left turns increase the heading, right turns
/// decrease it.
pub struct Turtle<S: Surface> {
    surface: S,
    position: Point,
    heading: f64,
    pen_down: bool,
    pen: Pen,
    fill: Option<OpenFill<S::FillSlot>>,
}

impl<S: Surface> Turtle<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            position: Point::ORIGIN,
            heading: 0.0,
            pen_down: true,
            pen: Pen::default(),
            fill: None,
        }
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Heading in degrees, within `[0, 360)`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.pen_down
    }

    #[inline]
    pub fn is_filling(&self) -> bool {
        self.fill.is_some()
    }

    #[inline]
    pub fn pen(&self) -> Pen {
        self.pen
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Releases the surface. An open fill is discarded unpainted.
    pub fn into_surface(self) -> S {
        if self.fill.is_some() {
            log::warn!("turtle dropped with an open fill; fill discarded");
        }
        self.surface
    }

    // ── pen ───────────────────────────────────────────────────────────────

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.pen.color = color;
    }

    /// Sets the stroke width in world units. Must be finite and `> 0`.
    pub fn set_pen_width(&mut self, width: f32) -> Result<(), TurtleError> {
        ensure_positive("width", width as f64)?;
        self.pen.width = width;
        Ok(())
    }

    pub fn set_background(&mut self, color: Color) {
        self.surface.set_background(color);
    }

    // ── movement ──────────────────────────────────────────────────────────
    //
    // Every public move validates first; a rejected call leaves the turtle
    // and the surface untouched.

    /// Moves `distance` along the heading, stroking if the pen is down.
    /// Negative distances move backwards.
    pub fn forward(&mut self, distance: f64) -> Result<(), TurtleError> {
        ensure_finite("distance", distance)?;
        self.advance(distance);
        Ok(())
    }

    pub fn left(&mut self, degrees: f64) -> Result<(), TurtleError> {
        ensure_finite("angle", degrees)?;
        self.turn(degrees);
        Ok(())
    }

    pub fn right(&mut self, degrees: f64) -> Result<(), TurtleError> {
        ensure_finite("angle", degrees)?;
        self.turn(-degrees);
        Ok(())
    }

    pub fn set_heading(&mut self, degrees: f64) -> Result<(), TurtleError> {
        ensure_finite("heading", degrees)?;
        self.heading = geom::normalize_heading(degrees);
        Ok(())
    }

    /// Jumps to `(x, y)` without drawing, leaving the pen down.
    pub fn teleport(&mut self, x: f64, y: f64) -> Result<(), TurtleError> {
        ensure_finite("x", x)?;
        ensure_finite("y", y)?;
        self.pen_up();
        self.go_to(Point::new(x, y));
        self.pen_down();
        Ok(())
    }

    /// Draws a full circle whose center lies `radius` to the left of the heading.
    ///
    /// The circle is a regular polygon of chords, with the vertex count growing
    /// with the radius. Position and heading are restored afterwards.
    pub fn circle(&mut self, radius: f64) -> Result<(), TurtleError> {
        ensure_positive("radius", radius)?;

        let steps = circle_steps(radius);
        let step_angle = 360.0 / steps as f64;
        let chord = 2.0 * radius * (step_angle / 2.0).to_radians().sin();

        let start_heading = self.heading;
        self.turn(step_angle / 2.0);
        for _ in 0..steps {
            self.advance(chord);
            self.turn(step_angle);
        }
        // Chord rounding can leave the heading a hair off a full turn.
        self.heading = start_heading;
        Ok(())
    }

    fn advance(&mut self, distance: f64) {
        let to = self.position + geom::direction(self.heading) * distance;
        self.go_to(to);
    }

    fn turn(&mut self, degrees: f64) {
        self.heading = geom::normalize_heading(self.heading + degrees);
    }

    fn go_to(&mut self, to: Point) {
        if self.pen_down {
            self.surface.stroke(self.position, to, self.pen);
        }
        if let Some(fill) = self.fill.as_mut() {
            fill.path.push(to);
        }
        self.position = to;
    }

    // ── fill ──────────────────────────────────────────────────────────────

    /// Opens a fill at the current position.
    pub fn begin_fill(&mut self, color: Color) -> Result<(), TurtleError> {
        if self.fill.is_some() {
            return Err(TurtleError::FillAlreadyOpen);
        }
        let slot = self.surface.reserve_fill();
        self.fill = Some(OpenFill { slot, color, path: vec![self.position] });
        Ok(())
    }

    /// Closes the open fill and paints it. Paths of fewer than three points
    /// enclose nothing and are dropped.
    pub fn end_fill(&mut self) -> Result<(), TurtleError> {
        let OpenFill { slot, color, path } = self.fill.take().ok_or(TurtleError::NoOpenFill)?;
        if path.len() > 2 {
            self.surface.fill(slot, &path, color);
        }
        Ok(())
    }

    /// Runs `body` inside a fill bracket when `color` is given.
    ///
    /// The fill is closed even when `body` fails; the body's error wins.
    pub fn with_fill<F>(&mut self, color: Option<Color>, body: F) -> Result<(), TurtleError>
    where
        F: FnOnce(&mut Self) -> Result<(), TurtleError>,
    {
        let Some(color) = color else {
            return body(self);
        };

        self.begin_fill(color)?;
        let drawn = body(self);
        let closed = self.end_fill();
        drawn.and(closed)
    }
}

/// Chord count for a full circle of `radius`.
pub(crate) fn circle_steps(radius: f64) -> usize {
    1 + (11.0 + radius / 6.0).min(59.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Recorder;

    fn turtle() -> Turtle<Recorder> {
        Turtle::new(Recorder::new())
    }

    fn red() -> Color {
        Color::from_straight(1.0, 0.0, 0.0, 1.0)
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn starts_at_origin_facing_east() {
        let t = turtle();
        assert_eq!(t.position(), Point::ORIGIN);
        assert_eq!(t.heading(), 0.0);
        assert!(t.is_down());
        assert!(!t.is_filling());
    }

    #[test]
    fn forward_moves_along_heading_and_strokes() {
        let mut t = turtle();
        t.left(90.0).unwrap();
        t.forward(50.0).unwrap();
        assert!(t.position().approx_eq(Point::new(0.0, 50.0), 1e-9));
        assert_eq!(t.surface().strokes().count(), 1);
    }

    #[test]
    fn right_turn_decreases_heading() {
        let mut t = turtle();
        t.right(90.0).unwrap();
        assert_eq!(t.heading(), 270.0);
        t.left(180.0).unwrap();
        assert_eq!(t.heading(), 90.0);
    }

    #[test]
    fn pen_up_moves_without_stroking() {
        let mut t = turtle();
        t.pen_up();
        t.forward(10.0).unwrap();
        assert!(t.surface().ops().is_empty());
    }

    #[test]
    fn teleport_never_strokes_and_leaves_pen_down() {
        let mut t = turtle();
        t.teleport(-30.0, 40.0).unwrap();
        assert_eq!(t.position(), Point::new(-30.0, 40.0));
        assert!(t.is_down());
        assert!(t.surface().ops().is_empty());
    }

    #[test]
    fn non_finite_moves_are_rejected_in_place() {
        let mut t = turtle();
        t.teleport(3.0, 4.0).unwrap();
        t.set_heading(45.0).unwrap();

        assert!(t.forward(f64::NAN).is_err());
        assert!(t.forward(f64::INFINITY).is_err());
        assert!(t.left(f64::NAN).is_err());
        assert!(t.right(f64::NEG_INFINITY).is_err());
        assert!(t.set_heading(f64::NAN).is_err());
        assert!(t.teleport(f64::NAN, 0.0).is_err());

        assert_eq!(t.position(), Point::new(3.0, 4.0));
        assert_eq!(t.heading(), 45.0);
        assert!(t.surface().ops().is_empty());
    }

    #[test]
    fn negative_forward_moves_backwards() {
        let mut t = turtle();
        t.forward(-10.0).unwrap();
        assert!(t.position().approx_eq(Point::new(-10.0, 0.0), 1e-9));
    }

    // ── pen ───────────────────────────────────────────────────────────────

    #[test]
    fn pen_width_reaches_strokes() {
        let mut t = turtle();
        t.set_pen_width(3.0).unwrap();
        t.forward(5.0).unwrap();
        let (_, _, pen) = t.surface().strokes().next().unwrap();
        assert_eq!(pen.width, 3.0);
    }

    #[test]
    fn invalid_pen_width_keeps_previous() {
        let mut t = turtle();
        for width in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                t.set_pen_width(width),
                Err(TurtleError::InvalidParameter { name: "width", .. })
            ));
        }
        assert_eq!(t.pen().width, 1.0);
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_step_count_grows_with_radius() {
        assert_eq!(circle_steps(20.0), 15);
        assert_eq!(circle_steps(40.0), 18);
        assert_eq!(circle_steps(1000.0), 60);
    }

    #[test]
    fn circle_returns_to_start() {
        let mut t = turtle();
        t.teleport(5.0, 5.0).unwrap();
        t.set_heading(30.0).unwrap();
        t.circle(40.0).unwrap();
        assert!(t.position().approx_eq(Point::new(5.0, 5.0), 1e-9));
        assert_eq!(t.heading(), 30.0);
        assert_eq!(t.surface().strokes().count(), 18);
    }

    #[test]
    fn circle_center_is_left_of_heading() {
        let mut t = turtle();
        t.circle(20.0).unwrap();
        let center = Point::new(0.0, 20.0);
        for stroke in t.surface().strokes() {
            let (_, to, _) = stroke;
            assert!((to.distance(center) - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_circle_radius_leaves_turtle_in_place() {
        let mut t = turtle();
        t.teleport(7.0, -2.0).unwrap();
        for radius in [f64::NAN, f64::INFINITY, 0.0, -20.0] {
            assert!(matches!(
                t.circle(radius),
                Err(TurtleError::InvalidParameter { name: "radius", .. })
            ));
        }
        assert_eq!(t.position(), Point::new(7.0, -2.0));
        assert_eq!(t.heading(), 0.0);
        assert!(t.surface().ops().is_empty());
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_path_collects_every_vertex() {
        let mut t = turtle();
        t.begin_fill(red()).unwrap();
        t.forward(10.0).unwrap();
        t.left(90.0).unwrap();
        t.forward(10.0).unwrap();
        t.end_fill().unwrap();

        let fills: Vec<_> = t.surface().fills().collect();
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].0.len(), 3);
        assert_eq!(fills[0].1, red());
    }

    #[test]
    fn degenerate_fill_paints_nothing() {
        let mut t = turtle();
        t.begin_fill(red()).unwrap();
        t.forward(10.0).unwrap();
        t.end_fill().unwrap();
        assert_eq!(t.surface().fills().count(), 0);
        assert!(!t.is_filling());
    }

    #[test]
    fn nested_begin_fill_is_rejected() {
        let mut t = turtle();
        t.begin_fill(red()).unwrap();
        assert_eq!(t.begin_fill(red()), Err(TurtleError::FillAlreadyOpen));
        assert!(t.is_filling());
    }

    #[test]
    fn end_fill_without_begin_is_rejected() {
        let mut t = turtle();
        assert_eq!(t.end_fill(), Err(TurtleError::NoOpenFill));
    }

    #[test]
    fn with_fill_closes_when_body_fails() {
        let mut t = turtle();
        let err = TurtleError::invalid("size", -1.0, "must not be negative");
        let result = t.with_fill(Some(red()), |t| {
            t.forward(10.0)?;
            t.left(90.0)?;
            t.forward(10.0)?;
            Err(err.clone())
        });
        assert_eq!(result, Err(err));
        assert!(!t.is_filling());
        assert_eq!(t.surface().fills().count(), 1);
    }

    #[test]
    fn with_fill_without_color_just_runs_body() {
        let mut t = turtle();
        t.with_fill(None, |t| {
            assert!(!t.is_filling());
            t.forward(1.0)
        })
        .unwrap();
        assert_eq!(t.surface().fills().count(), 0);
        assert_eq!(t.surface().strokes().count(), 1);
    }

    #[test]
    fn with_fill_reports_body_closing_the_fill_itself() {
        let mut t = turtle();
        let result = t.with_fill(Some(red()), |t| t.end_fill());
        assert_eq!(result, Err(TurtleError::NoOpenFill));
    }
}

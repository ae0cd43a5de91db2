//! Composite drawers built from the primitive shapes.

use easel_engine::paint::Color;

use crate::error::{ensure_positive, TurtleError};
use crate::palette::NamedColor;
use crate::shapes;
use crate::{Surface, Turtle};

#[derive(Debug, Copy, Clone)]
enum Outline {
    Rectangle { width: f64, height: f64 },
    Square { size: f64 },
    Triangle { size: f64 },
}

/// One filled piece of a composite, placed relative to the composite's anchor.
#[derive(Debug, Copy, Clone)]
struct Part {
    name: &'static str,
    offset: (f64, f64),
    outline: Outline,
    color: NamedColor,
}

/// Drawn back to front.
const HOUSE: [Part; 5] = [
    Part {
        name: "base",
        offset: (0.0, 0.0),
        outline: Outline::Rectangle { width: 200.0, height: 400.0 },
        color: NamedColor::Red,
    },
    Part {
        name: "roof",
        offset: (0.0, 0.0),
        outline: Outline::Triangle { size: 200.0 },
        color: NamedColor::Brown,
    },
    Part {
        name: "door",
        offset: (80.0, -146.0),
        outline: Outline::Rectangle { width: 50.0, height: 80.0 },
        color: NamedColor::Yellow,
    },
    Part {
        name: "left window",
        offset: (30.0, -20.0),
        outline: Outline::Square { size: 30.0 },
        color: NamedColor::LightBlue,
    },
    Part {
        name: "right window",
        offset: (140.0, -20.0),
        outline: Outline::Square { size: 30.0 },
        color: NamedColor::LightBlue,
    },
];

pub const SUN_RADIUS: f64 = 40.0;

/// Radius of each cloud puff at scale 1.
pub const CLOUD_PUFF_RADIUS: f64 = 20.0;

/// Start points of the cloud puffs at scale 1, relative to the cloud anchor.
pub const CLOUD_PUFFS: [(f64, f64); 5] = [(0.0, 0.0), (15.0, 10.0), (30.0, 0.0), (45.0, 5.0), (60.0, 0.0)];

/// House anchored at the top-left corner of its base.
///
/// The base hangs 400 units below `(x, y)`, the roof rises above it, and the
/// door and windows sit inside the base. Every part starts facing east.
pub fn house<S: Surface>(t: &mut Turtle<S>, x: f64, y: f64) -> Result<(), TurtleError> {
    for part in &HOUSE {
        log::trace!("house {}: {:?}", part.name, part.outline);
        t.teleport(x + part.offset.0, y + part.offset.1)?;
        t.set_heading(0.0)?;

        let fill = Some(Color::from(part.color));
        match part.outline {
            Outline::Rectangle { width, height } => shapes::rectangle(t, width, height, fill)?,
            Outline::Square { size } => shapes::square(t, size, fill)?,
            Outline::Triangle { size } => shapes::triangle(t, size, fill)?,
        }
    }
    Ok(())
}

/// Yellow disk starting at `(x, y)`; its center is one radius above.
pub fn sun<S: Surface>(t: &mut Turtle<S>, x: f64, y: f64) -> Result<(), TurtleError> {
    t.teleport(x, y)?;
    t.set_heading(0.0)?;
    shapes::circle(t, SUN_RADIUS, Some(NamedColor::Yellow.into()))
}

/// Five overlapping white puffs, all scaled by `scale`.
///
/// The pen turns white and stays white afterwards. The heading is left as
/// the caller set it, so the puffs sit above their start points only when
/// the turtle faces east.
pub fn cloud<S: Surface>(t: &mut Turtle<S>, x: f64, y: f64, scale: f64) -> Result<(), TurtleError> {
    ensure_positive("scale", scale)?;

    let white = Color::from(NamedColor::White);
    t.teleport(x, y)?;
    t.set_pen_color(white);
    for (dx, dy) in CLOUD_PUFFS {
        t.teleport(x + dx * scale, y + dy * scale)?;
        shapes::circle(t, CLOUD_PUFF_RADIUS * scale, Some(white))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::Recorder;

    fn turtle() -> Turtle<Recorder> {
        Turtle::new(Recorder::new())
    }

    fn starts(t: &Turtle<Recorder>) -> Vec<Point> {
        t.surface().fills().map(|(outline, _)| outline[0]).collect()
    }

    // ── house ─────────────────────────────────────────────────────────────

    #[test]
    fn house_paints_five_parts_in_order() {
        let mut t = turtle();
        house(&mut t, -100.0, -100.0).unwrap();

        let colors: Vec<Color> = t.surface().fills().map(|(_, c)| c).collect();
        let expected: Vec<Color> = [
            NamedColor::Red,
            NamedColor::Brown,
            NamedColor::Yellow,
            NamedColor::LightBlue,
            NamedColor::LightBlue,
        ]
        .into_iter()
        .map(Color::from)
        .collect();
        assert_eq!(colors, expected);

        assert_eq!(
            starts(&t),
            vec![
                Point::new(-100.0, -100.0),
                Point::new(-100.0, -100.0),
                Point::new(-20.0, -246.0),
                Point::new(-70.0, -120.0),
                Point::new(40.0, -120.0),
            ]
        );
    }

    #[test]
    fn house_parts_start_facing_east() {
        let mut t = turtle();
        t.set_heading(123.0).unwrap();
        house(&mut t, 0.0, 0.0).unwrap();

        // Base: the first edge runs east along the top of the wall.
        let (from, to, _) = t.surface().strokes().next().unwrap();
        assert!(from.approx_eq(Point::ORIGIN, 1e-9));
        assert!(to.approx_eq(Point::new(200.0, 0.0), 1e-9));
        assert!(!t.is_filling());
    }

    #[test]
    fn roof_rises_above_base() {
        let mut t = turtle();
        house(&mut t, 0.0, 0.0).unwrap();
        let (roof, _) = t.surface().fills().nth(1).unwrap();
        assert!(roof.iter().all(|p| p.y >= -1e-9));
        assert!(roof.iter().any(|p| p.y > 170.0));
    }

    // ── sun ───────────────────────────────────────────────────────────────

    #[test]
    fn sun_is_one_yellow_disk() {
        let mut t = turtle();
        sun(&mut t, 200.0, 150.0).unwrap();
        let fills: Vec<_> = t.surface().fills().collect();
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].1, Color::from(NamedColor::Yellow));
        assert_eq!(fills[0].0[0], Point::new(200.0, 150.0));
        assert!(t.position().approx_eq(Point::new(200.0, 150.0), 1e-9));
    }

    // ── cloud ─────────────────────────────────────────────────────────────

    #[test]
    fn cloud_puffs_start_at_scaled_offsets() {
        for scale in [0.5, 1.0, 2.0] {
            let mut t = turtle();
            cloud(&mut t, -200.0, 140.0, scale).unwrap();

            let expected: Vec<Point> = CLOUD_PUFFS
                .iter()
                .map(|&(dx, dy)| Point::new(-200.0 + dx * scale, 140.0 + dy * scale))
                .collect();
            assert_eq!(starts(&t), expected, "scale {scale}");
        }
    }

    #[test]
    fn cloud_puffs_have_scaled_radius() {
        let scale = 1.5;
        let mut t = turtle();
        cloud(&mut t, 10.0, 20.0, scale).unwrap();

        let radius = CLOUD_PUFF_RADIUS * scale;
        for ((outline, color), (dx, dy)) in t.surface().fills().zip(CLOUD_PUFFS) {
            assert_eq!(color, Color::from(NamedColor::White));
            let center = Point::new(10.0 + dx * scale, 20.0 + dy * scale + radius);
            assert!(outline.iter().all(|p| (p.distance(center) - radius).abs() < 1e-9));
        }
        assert_eq!(t.surface().fills().count(), 5);
    }

    #[test]
    fn cloud_outlines_are_white() {
        let mut t = turtle();
        cloud(&mut t, 0.0, 0.0, 1.0).unwrap();
        let white = Color::from(NamedColor::White);
        assert!(t.surface().strokes().all(|(_, _, pen)| pen.color == white));
        assert_eq!(t.pen().color, white);
    }

    #[test]
    fn cloud_rejects_bad_scale() {
        let mut t = turtle();
        assert!(cloud(&mut t, 0.0, 0.0, 0.0).is_err());
        assert!(cloud(&mut t, 0.0, 0.0, f64::NAN).is_err());
        assert!(t.surface().ops().is_empty());
    }
}

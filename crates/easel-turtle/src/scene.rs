//! The full picture: sky, house, sun and clouds.

use easel_engine::paint::Color;

use crate::composite::{cloud, house, sun};
use crate::error::TurtleError;
use crate::palette::NamedColor;
use crate::{Surface, Turtle};

pub const SKY: NamedColor = NamedColor::SkyBlue;

pub const HOUSE_AT: (f64, f64) = (-100.0, -100.0);

pub const SUN_AT: (f64, f64) = (200.0, 150.0);

pub const CLOUD_SCALE: f64 = 1.0;

pub const CLOUDS: [(f64, f64); 6] = [
    (-200.0, 140.0),
    (-100.0, 180.0),
    (150.0, 120.0),
    (-250.0, 100.0),
    (0.0, 200.0),
    (250.0, 160.0),
];

/// Paints the whole scene. Later pieces cover earlier ones.
pub fn draw_scene<S: Surface>(t: &mut Turtle<S>) -> Result<(), TurtleError> {
    t.set_background(Color::from(SKY));

    house(t, HOUSE_AT.0, HOUSE_AT.1)?;
    sun(t, SUN_AT.0, SUN_AT.1)?;
    for (x, y) in CLOUDS {
        cloud(t, x, y, CLOUD_SCALE)?;
    }

    log::debug!("scene drawn; turtle at {:?}", t.position());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::CLOUD_PUFFS;
    use crate::geom::Point;
    use crate::{Op, Recorder};

    fn recorded() -> Recorder {
        let mut t = Turtle::new(Recorder::new());
        draw_scene(&mut t).unwrap();
        assert!(!t.is_filling());
        t.into_surface()
    }

    #[test]
    fn background_is_set_once_and_first() {
        let rec = recorded();
        let backgrounds = rec.ops().iter().filter(|op| matches!(op, Op::Background(_))).count();
        assert_eq!(backgrounds, 1);
        assert_eq!(rec.ops()[0], Op::Background(Color::from(NamedColor::SkyBlue)));
    }

    #[test]
    fn scene_paints_thirty_six_fills() {
        let rec = recorded();
        assert_eq!(rec.fills().count(), 36);
        assert_eq!(rec.reserved_fills(), 36);
    }

    #[test]
    fn fills_follow_literal_coordinates() {
        let rec = recorded();
        let starts: Vec<Point> = rec.fills().map(|(outline, _)| outline[0]).collect();

        let mut expected = vec![
            Point::new(-100.0, -100.0),
            Point::new(-100.0, -100.0),
            Point::new(-20.0, -246.0),
            Point::new(-70.0, -120.0),
            Point::new(40.0, -120.0),
            Point::new(200.0, 150.0),
        ];
        for (x, y) in CLOUDS {
            expected.extend(CLOUD_PUFFS.iter().map(|&(dx, dy)| Point::new(x + dx, y + dy)));
        }
        assert_eq!(starts, expected);
    }

    #[test]
    fn fill_colors_by_piece() {
        let rec = recorded();
        let colors: Vec<Color> = rec.fills().map(|(_, c)| c).collect();
        assert_eq!(colors[0], Color::from(NamedColor::Red));
        assert_eq!(colors[1], Color::from(NamedColor::Brown));
        assert_eq!(colors[2], Color::from(NamedColor::Yellow));
        assert_eq!(colors[5], Color::from(NamedColor::Yellow));
        assert!(colors[6..].iter().all(|&c| c == Color::from(NamedColor::White)));
    }

    #[test]
    fn fill_slots_are_painted_in_reservation_order() {
        let rec = recorded();
        let slots: Vec<usize> = rec
            .ops()
            .iter()
            .filter_map(|op| match op {
                Op::Fill { slot, .. } => Some(*slot),
                _ => None,
            })
            .collect();
        assert_eq!(slots, (0..36).collect::<Vec<_>>());
    }
}

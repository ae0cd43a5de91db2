//! Turtle graphics on top of the easel engine.
//!
//! A [`Turtle`] is an explicit cursor (position, heading, pen, fill state)
//! that paints through a [`Surface`]. Shape drawers take the turtle by
//! `&mut` and return `Result<(), TurtleError>`; nothing is global.
//!
//! ```
//! use easel_turtle::{shapes, Recorder, Turtle};
//! use easel_turtle::palette::NamedColor;
//!
//! let mut t = Turtle::new(Recorder::new());
//! shapes::square(&mut t, 30.0, Some(NamedColor::LightBlue.into())).unwrap();
//! assert_eq!(t.surface().fills().count(), 1);
//! ```

pub mod composite;
mod cursor;
mod draw_list;
mod error;
pub mod geom;
pub mod palette;
mod record;
pub mod scene;
pub mod shapes;
mod surface;

pub use cursor::Turtle;
pub use draw_list::DrawListSurface;
pub use error::TurtleError;
pub use geom::Point;
pub use record::{Op, Recorder};
pub use surface::{Pen, Surface};

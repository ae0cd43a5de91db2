//! Named colors used by the scene, with their Tk RGB values.

use easel_engine::paint::Color;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NamedColor {
    Black,
    White,
    Red,
    Brown,
    Yellow,
    LightBlue,
    SkyBlue,
}

impl NamedColor {
    /// Straight sRGB bytes.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            NamedColor::Black => [0, 0, 0],
            NamedColor::White => [255, 255, 255],
            NamedColor::Red => [255, 0, 0],
            NamedColor::Brown => [165, 42, 42],
            NamedColor::Yellow => [255, 255, 0],
            NamedColor::LightBlue => [173, 216, 230],
            NamedColor::SkyBlue => [135, 206, 235],
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        let [r, g, b] = named.rgb();
        Color::from_srgb_u8(r, g, b, 255)
    }
}

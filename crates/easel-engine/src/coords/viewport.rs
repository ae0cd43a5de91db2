/// Viewport size in logical pixels.
///
/// The renderer treats this as the coordinate basis for converting logical px
/// positions to NDC in its shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Center point in logical pixels.
    #[inline]
    pub fn center(self) -> super::Vec2 {
        super::Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

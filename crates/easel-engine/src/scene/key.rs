/// Z-ordering layer for draw items.
///
/// Higher values appear on top of lower values. Turtle drawings paint purely
/// in call order, so they stay on [`ZIndex::DEFAULT`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const DEFAULT: ZIndex = ZIndex(0);
}

/// Stable sort key for draw items.
///
/// Ordering rules (field order drives the derived `Ord`):
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (allocation order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    /// Z-layer. Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Position allocated within the list, either at push time or when a slot was reserved.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

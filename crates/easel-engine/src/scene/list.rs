use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// A paint position reserved with [`DrawList::reserve_slot`].
///
/// Filling the slot later places its command beneath everything pushed after
/// the reservation. A slot that is never filled paints nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[must_use = "an unfilled slot paints nothing"]
pub struct Slot {
    key: SortKey,
}

/// Recorded draw stream.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no allocation once warmed
///
/// # Deferred fills
///
/// Turtle fills are opened before their outline is stroked but only known once
/// the outline is closed. Reserve the position up front and fill it afterwards:
///
/// ```
/// # use easel_engine::scene::{DrawList, ZIndex};
/// # use easel_engine::paint::Color;
/// # let mut draw_list = DrawList::new();
/// let slot = draw_list.reserve_slot(ZIndex::DEFAULT);
/// // ... push outline strokes ...
/// draw_list.fill_slot_with_path(slot, vec![], Color::transparent());
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Bumped on every mutation; renderers use it to reuse cached geometry.
    revision: u64,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.revision = self.revision.wrapping_add(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Monotonic mutation counter.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pushes a draw command on top of everything recorded so far in layer `z`.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let key = SortKey::new(z, self.allocate_order());
        self.insert(DrawItem { key, cmd });
    }

    /// Reserves the current paint position in layer `z` without recording anything.
    #[inline]
    pub fn reserve_slot(&mut self, z: ZIndex) -> Slot {
        Slot { key: SortKey::new(z, self.allocate_order()) }
    }

    /// Records `cmd` at the position held by `slot`.
    #[inline]
    pub fn fill_slot(&mut self, slot: Slot, cmd: DrawCmd) {
        self.insert(DrawItem { key: slot.key, cmd });
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn allocate_order(&mut self) -> u32 {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        order
    }

    fn insert(&mut self, item: DrawItem) {
        self.items.push(item);
        self.sorted_dirty = true;
        self.revision = self.revision.wrapping_add(1);
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Keys are unique per list, so an unstable sort is deterministic.
        self.sorted_indices
            .sort_unstable_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn tag(list: &mut DrawList) -> Vec<f32> {
        // Each test item carries a distinguishing width / first x coordinate.
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::FillPath(f) => f.points[0].x,
                DrawCmd::StrokePath(s) => s.width,
            })
            .collect()
    }

    fn stroke(list: &mut DrawList, width: f32) {
        list.push_stroke_path(ZIndex::DEFAULT, vec![Vec2::zero(), Vec2::new(1.0, 0.0)], width, Color::transparent());
    }

    // ── push ──────────────────────────────────────────────────────────────

    #[test]
    fn push_keeps_insertion_order() {
        let mut list = DrawList::new();
        stroke(&mut list, 1.0);
        stroke(&mut list, 2.0);
        stroke(&mut list, 3.0);
        assert_eq!(tag(&mut list), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn higher_z_paints_last() {
        let mut list = DrawList::new();
        list.push_stroke_path(ZIndex(5), vec![], 9.0, Color::transparent());
        stroke(&mut list, 1.0);
        assert_eq!(tag(&mut list), vec![1.0, 9.0]);
    }

    // ── slots ─────────────────────────────────────────────────────────────

    #[test]
    fn filled_slot_paints_beneath_later_pushes() {
        let mut list = DrawList::new();
        stroke(&mut list, 1.0);
        let slot = list.reserve_slot(ZIndex::DEFAULT);
        stroke(&mut list, 2.0);
        stroke(&mut list, 3.0);
        list.fill_slot_with_path(slot, vec![Vec2::new(42.0, 0.0)], Color::transparent());

        assert_eq!(tag(&mut list), vec![1.0, 42.0, 2.0, 3.0]);
    }

    #[test]
    fn unfilled_slot_paints_nothing() {
        let mut list = DrawList::new();
        let _ = list.reserve_slot(ZIndex::DEFAULT);
        stroke(&mut list, 1.0);
        assert_eq!(list.len(), 1);
        assert_eq!(tag(&mut list), vec![1.0]);
    }

    // ── revision ──────────────────────────────────────────────────────────

    #[test]
    fn revision_advances_on_mutation() {
        let mut list = DrawList::new();
        let r0 = list.revision();
        stroke(&mut list, 1.0);
        let r1 = list.revision();
        list.clear();
        let r2 = list.revision();
        assert!(r0 < r1 && r1 < r2);
        assert!(list.is_empty());
    }

    #[test]
    fn reserving_alone_does_not_bump_revision() {
        let mut list = DrawList::new();
        let r0 = list.revision();
        let _ = list.reserve_slot(ZIndex::DEFAULT);
        assert_eq!(list.revision(), r0);
    }
}

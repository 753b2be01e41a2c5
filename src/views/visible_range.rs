use crate::core::ItemsRange;
use crate::lwc::model::StrictRange;
use crate::views::items::TimedItem;

/// Picks the contiguous slice of items that falls inside the viewport.
///
/// Items are ordered by strictly increasing time. `None` means nothing is
/// visible and no item gets projected.
pub trait VisibleRangeSelector {
    fn visible_items_range<I: TimedItem>(&self, items: &[I]) -> Option<ItemsRange>;
}

/// Selects items whose time lies inside an inclusive bar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindowSelector {
    visible_bars: StrictRange,
    extended: bool,
}

impl TimeWindowSelector {
    #[must_use]
    pub fn new(visible_bars: StrictRange) -> Self {
        Self {
            visible_bars,
            extended: false,
        }
    }

    /// Also takes one item past each edge so segments crossing the viewport
    /// border keep both endpoints.
    #[must_use]
    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    #[must_use]
    pub fn visible_bars(&self) -> StrictRange {
        self.visible_bars
    }
}

impl VisibleRangeSelector for TimeWindowSelector {
    fn visible_items_range<I: TimedItem>(&self, items: &[I]) -> Option<ItemsRange> {
        if items.is_empty() {
            return None;
        }
        let mut from = items.partition_point(|item| item.time() < self.visible_bars.left());
        let mut to = items.partition_point(|item| item.time() <= self.visible_bars.right());
        if self.extended {
            from = from.saturating_sub(1);
            to = (to + 1).min(items.len());
        }
        (from < to).then(|| ItemsRange::new(from, to))
    }
}

/// Uses a range computed elsewhere, clamped to the item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedItemsRange(pub Option<ItemsRange>);

impl VisibleRangeSelector for FixedItemsRange {
    fn visible_items_range<I: TimedItem>(&self, items: &[I]) -> Option<ItemsRange> {
        self.0
            .map(|range| range.clamp_to_len(items.len()))
            .filter(|range| !range.is_empty())
    }
}

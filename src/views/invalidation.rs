use serde::{Deserialize, Serialize};

/// Cache state of one pane view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CacheStatus {
    #[default]
    Dirty,
    Recomputing,
    Valid,
}

/// Event that makes prepared pane data stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTrigger {
    /// Rows were replaced or appended.
    DataChanged,
    /// Scroll, zoom, resize or price scale change.
    VisibleRangeChanged,
    StyleChanged,
}

impl InvalidationTrigger {
    const fn bit(self) -> u8 {
        match self {
            Self::DataChanged => 1 << 0,
            Self::VisibleRangeChanged => 1 << 1,
            Self::StyleChanged => 1 << 2,
        }
    }
}

/// Pending triggers accumulated between two recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvalidationTriggers {
    bits: u8,
}

impl InvalidationTriggers {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self::none()
            .with_trigger(InvalidationTrigger::DataChanged)
            .with_trigger(InvalidationTrigger::VisibleRangeChanged)
            .with_trigger(InvalidationTrigger::StyleChanged)
    }

    #[must_use]
    pub const fn from_trigger(trigger: InvalidationTrigger) -> Self {
        Self {
            bits: trigger.bit(),
        }
    }

    #[must_use]
    pub const fn with_trigger(self, trigger: InvalidationTrigger) -> Self {
        Self {
            bits: self.bits | trigger.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains(self, trigger: InvalidationTrigger) -> bool {
        (self.bits & trigger.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    /// New rows make the item list stale, which in turn stales the range.
    #[must_use]
    pub const fn needs_extraction(self) -> bool {
        self.contains(InvalidationTrigger::DataChanged)
    }

    #[must_use]
    pub const fn needs_projection(self) -> bool {
        self.needs_extraction() || self.contains(InvalidationTrigger::VisibleRangeChanged)
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationTrigger, InvalidationTriggers};

    #[test]
    fn triggers_accumulate() {
        let triggers = InvalidationTriggers::none()
            .with_trigger(InvalidationTrigger::StyleChanged)
            .union(InvalidationTriggers::from_trigger(
                InvalidationTrigger::VisibleRangeChanged,
            ));
        assert!(triggers.contains(InvalidationTrigger::StyleChanged));
        assert!(triggers.contains(InvalidationTrigger::VisibleRangeChanged));
        assert!(!triggers.contains(InvalidationTrigger::DataChanged));
        assert!(!triggers.needs_extraction());
        assert!(triggers.needs_projection());
    }

    #[test]
    fn data_change_implies_projection() {
        let triggers = InvalidationTriggers::from_trigger(InvalidationTrigger::DataChanged);
        assert!(triggers.needs_extraction());
        assert!(triggers.needs_projection());
        assert!(InvalidationTriggers::none().is_none());
        assert!(InvalidationTriggers::all().contains(InvalidationTrigger::StyleChanged));
    }
}

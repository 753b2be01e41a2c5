use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Logical bar index on the time scale.
pub type TimePointIndex = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Half-open `[from, to)` interval of positions into a row or item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemsRange {
    from: usize,
    to: usize,
}

impl ItemsRange {
    /// Builds a range; `to` is clamped so the range is never inverted.
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to: to.max(from),
        }
    }

    #[must_use]
    pub fn from(self) -> usize {
        self.from
    }

    #[must_use]
    pub fn to(self) -> usize {
        self.to
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.to - self.from
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.from == self.to
    }

    #[must_use]
    pub fn contains(self, position: usize) -> bool {
        self.from <= position && position < self.to
    }

    /// Positions covered by the range.
    #[must_use]
    pub fn indices(self) -> Range<usize> {
        self.from..self.to
    }

    /// Restricts the range to a list of `len` elements.
    #[must_use]
    pub fn clamp_to_len(self, len: usize) -> Self {
        Self::new(self.from.min(len), self.to.min(len))
    }
}

/// Pixel coordinate of a screen item.
///
/// Items start `Pending` and only become `Computed` when the projector
/// reaches them inside the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Coordinate {
    #[default]
    Pending,
    Computed(f64),
}

impl Coordinate {
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Pending => None,
            Self::Computed(value) => Some(value),
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_computed(self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

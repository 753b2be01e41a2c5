use crate::core::{Coordinate, TimePointIndex};
use crate::render::Color;

/// Item positioned horizontally by its time index.
pub trait TimedItem {
    fn time(&self) -> TimePointIndex;
    fn x(&self) -> Coordinate;
    fn set_x(&mut self, x: f64);
}

/// Item carrying a single price projected to one y coordinate.
pub trait PricedItem: TimedItem {
    fn price(&self) -> f64;
    fn y(&self) -> Coordinate;
    fn set_y(&mut self, y: f64);
}

/// Item carrying a higher and a lower boundary price.
pub trait CloudPricedItem: TimedItem {
    fn higher_price(&self) -> f64;
    fn lower_price(&self) -> f64;
    fn set_higher_y(&mut self, y: f64);
    fn set_lower_y(&mut self, y: f64);
}

/// Screen item of a cloud band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudAreaItem {
    pub time: TimePointIndex,
    pub higher_price: f64,
    pub lower_price: f64,
    /// Source row closed at or above its open; selects the fill color.
    pub is_above: bool,
    pub x: Coordinate,
    pub higher_y: Coordinate,
    pub lower_y: Coordinate,
}

impl CloudAreaItem {
    /// Item with every coordinate pending.
    #[must_use]
    pub fn new(
        time: TimePointIndex,
        higher_price: f64,
        lower_price: f64,
        is_above: bool,
    ) -> Self {
        Self {
            time,
            higher_price,
            lower_price,
            is_above,
            x: Coordinate::Pending,
            higher_y: Coordinate::Pending,
            lower_y: Coordinate::Pending,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.x.is_pending() && self.higher_y.is_pending() && self.lower_y.is_pending()
    }

    #[must_use]
    pub fn is_projected(&self) -> bool {
        self.x.is_computed() && self.higher_y.is_computed() && self.lower_y.is_computed()
    }

    /// Line item following the higher boundary.
    #[must_use]
    pub fn higher_line_item(&self, line_color: Color) -> LineStrokeItem {
        LineStrokeItem {
            time: self.time,
            price: self.higher_price,
            x: self.x,
            y: self.higher_y,
            line_color,
        }
    }

    /// Line item following the lower boundary.
    #[must_use]
    pub fn lower_line_item(&self, line_color: Color) -> LineStrokeItem {
        LineStrokeItem {
            time: self.time,
            price: self.lower_price,
            x: self.x,
            y: self.lower_y,
            line_color,
        }
    }
}

impl TimedItem for CloudAreaItem {
    fn time(&self) -> TimePointIndex {
        self.time
    }

    fn x(&self) -> Coordinate {
        self.x
    }

    fn set_x(&mut self, x: f64) {
        self.x = Coordinate::Computed(x);
    }
}

impl CloudPricedItem for CloudAreaItem {
    fn higher_price(&self) -> f64 {
        self.higher_price
    }

    fn lower_price(&self) -> f64 {
        self.lower_price
    }

    fn set_higher_y(&mut self, y: f64) {
        self.higher_y = Coordinate::Computed(y);
    }

    fn set_lower_y(&mut self, y: f64) {
        self.lower_y = Coordinate::Computed(y);
    }
}

/// Screen item of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStrokeItem {
    pub time: TimePointIndex,
    pub price: f64,
    pub x: Coordinate,
    pub y: Coordinate,
    pub line_color: Color,
}

impl LineStrokeItem {
    #[must_use]
    pub fn new(time: TimePointIndex, price: f64, line_color: Color) -> Self {
        Self {
            time,
            price,
            x: Coordinate::Pending,
            y: Coordinate::Pending,
            line_color,
        }
    }

    /// Pixel position when both coordinates are computed.
    #[must_use]
    pub fn point(&self) -> Option<(f64, f64)> {
        Some((self.x.value()?, self.y.value()?))
    }
}

impl TimedItem for LineStrokeItem {
    fn time(&self) -> TimePointIndex {
        self.time
    }

    fn x(&self) -> Coordinate {
        self.x
    }

    fn set_x(&mut self, x: f64) {
        self.x = Coordinate::Computed(x);
    }
}

impl PricedItem for LineStrokeItem {
    fn price(&self) -> f64 {
        self.price
    }

    fn y(&self) -> Coordinate {
        self.y
    }

    fn set_y(&mut self, y: f64) {
        self.y = Coordinate::Computed(y);
    }
}

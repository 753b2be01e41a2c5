use crate::core::TimePointIndex;
use crate::error::{ChartError, ChartResult};
use crate::views::{TimeScaleCoordinates, TimeWindowSelector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalRange {
    pub from: f64,
    pub to: f64,
}

/// Inclusive window of bar indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictRange {
    left: TimePointIndex,
    right: TimePointIndex,
}

impl StrictRange {
    #[must_use]
    pub fn new(left: TimePointIndex, right: TimePointIndex) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn left(self) -> TimePointIndex {
        self.left
    }

    #[must_use]
    pub fn right(self) -> TimePointIndex {
        self.right
    }

    #[must_use]
    pub fn count(self) -> f64 {
        (self.right - self.left + 1) as f64
    }

    #[must_use]
    pub fn contains(self, index: TimePointIndex) -> bool {
        self.left <= index && index <= self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScaleOptions {
    pub right_offset: f64,
    pub bar_spacing: f64,
    pub min_bar_spacing: f64,
    /// `0` caps spacing at half the width.
    pub max_bar_spacing: f64,
}

impl Default for TimeScaleOptions {
    fn default() -> Self {
        Self {
            right_offset: 0.0,
            bar_spacing: 6.0,
            min_bar_spacing: 0.5,
            max_bar_spacing: 0.0,
        }
    }
}

/// Horizontal scale: bar index to pixel x.
///
/// The newest bar is `base_index`; `right_offset` bars of empty space follow
/// it on the right edge.
#[derive(Debug, Clone)]
pub struct TimeScale {
    options: TimeScaleOptions,
    width: f64,
    base_index: Option<TimePointIndex>,
    right_offset: f64,
    bar_spacing: f64,
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(TimeScaleOptions::default())
    }
}

impl TimeScale {
    #[must_use]
    pub fn new(options: TimeScaleOptions) -> Self {
        Self {
            width: 0.0,
            base_index: None,
            right_offset: options.right_offset,
            bar_spacing: options.bar_spacing,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> TimeScaleOptions {
        self.options
    }

    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }
        self.width = width;
        self.correct_bar_spacing();
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_base_index(&mut self, base_index: Option<TimePointIndex>) {
        self.base_index = base_index;
    }

    #[must_use]
    pub fn base_index(&self) -> TimePointIndex {
        self.base_index.unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.base_index.is_none()
    }

    #[must_use]
    pub fn right_offset(&self) -> f64 {
        self.right_offset
    }

    pub fn set_right_offset(&mut self, offset: f64) -> ChartResult<()> {
        if !offset.is_finite() {
            return Err(ChartError::InvalidData(
                "time scale right offset must be finite".to_owned(),
            ));
        }
        self.right_offset = offset;
        Ok(())
    }

    #[must_use]
    pub fn bar_spacing(&self) -> f64 {
        self.bar_spacing
    }

    pub fn set_bar_spacing(&mut self, bar_spacing: f64) -> ChartResult<()> {
        if !bar_spacing.is_finite() || bar_spacing <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale bar spacing must be finite and > 0".to_owned(),
            ));
        }
        self.bar_spacing = bar_spacing;
        self.correct_bar_spacing();
        Ok(())
    }

    pub fn index_to_coordinate(&self, index: TimePointIndex) -> ChartResult<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        let delta_from_right = self.base_index() as f64 + self.right_offset - index as f64;
        Ok(self.width - (delta_from_right + 0.5) * self.bar_spacing - 1.0)
    }

    #[must_use]
    pub fn visible_logical_range(&self) -> Option<LogicalRange> {
        if self.is_empty() {
            return None;
        }
        let bars_length = self.width / self.bar_spacing;
        let right_border = self.right_offset + self.base_index() as f64;
        Some(LogicalRange {
            from: right_border - bars_length + 1.0,
            to: right_border,
        })
    }

    #[must_use]
    pub fn visible_strict_range(&self) -> Option<StrictRange> {
        self.visible_logical_range().map(|range| {
            StrictRange::new(
                range.from.floor() as TimePointIndex,
                range.to.ceil() as TimePointIndex,
            )
        })
    }

    /// Selector over the bars currently on screen.
    #[must_use]
    pub fn visible_window(&self, extended: bool) -> Option<TimeWindowSelector> {
        self.visible_strict_range()
            .map(|range| TimeWindowSelector::new(range).extended(extended))
    }

    fn correct_bar_spacing(&mut self) {
        let max = if self.options.max_bar_spacing > 0.0 {
            self.options.max_bar_spacing
        } else if self.width > 0.0 {
            self.width * 0.5
        } else {
            f64::INFINITY
        };
        let min = self.options.min_bar_spacing.min(max);
        self.bar_spacing = self.bar_spacing.clamp(min, max);
    }
}

impl TimeScaleCoordinates for TimeScale {
    fn bar_spacing(&self) -> f64 {
        self.bar_spacing
    }

    fn index_to_coordinate(&self, index: TimePointIndex) -> ChartResult<f64> {
        TimeScale::index_to_coordinate(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::{StrictRange, TimeScale, TimeScaleOptions};
    use approx::assert_relative_eq;

    fn scale() -> TimeScale {
        let mut time_scale = TimeScale::new(TimeScaleOptions::default());
        time_scale.set_width(1000.0).expect("width");
        time_scale.set_base_index(Some(199));
        time_scale
    }

    #[test]
    fn index_to_coordinate_matches_lightweight_formula() {
        let time_scale = scale();
        let x = time_scale.index_to_coordinate(199).expect("x");
        assert_relative_eq!(x, 1000.0 - 0.5 * 6.0 - 1.0);
        let previous = time_scale.index_to_coordinate(198).expect("previous x");
        assert_relative_eq!(x - previous, 6.0);
    }

    #[test]
    fn visible_strict_range_covers_width() {
        let time_scale = scale();
        let range = time_scale.visible_strict_range().expect("range");
        assert_eq!(range.right(), 199);
        assert_eq!(range.left(), 33);
        assert!(range.contains(100));
    }

    #[test]
    fn empty_scale_has_no_visible_range() {
        let time_scale = TimeScale::default();
        assert!(time_scale.visible_strict_range().is_none());
        assert_eq!(time_scale.index_to_coordinate(3).expect("x"), 0.0);
    }

    #[test]
    fn bar_spacing_is_clamped_to_half_width() {
        let mut time_scale = scale();
        time_scale.set_bar_spacing(900.0).expect("spacing");
        assert_relative_eq!(time_scale.bar_spacing(), 500.0);
        assert!(time_scale.set_bar_spacing(0.0).is_err());
        assert_eq!(StrictRange::new(2, 4).count(), 3.0);
    }
}

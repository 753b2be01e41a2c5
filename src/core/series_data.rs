use std::fmt::Debug;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::TimePointIndex;
use crate::core::primitives::{decimal_to_f64, ensure_finite};
use crate::error::ChartResult;
use crate::render::Color;

/// Value tuple of one row in price units.
///
/// Single-value series store the same price in all four slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRowValue {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PlotRowValue {
    /// Builds a value tuple; all prices must be finite.
    ///
    /// `high`/`low` are not ordered against each other: cloud series use them
    /// as two independent boundaries that may cross.
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        Ok(Self {
            open: ensure_finite(open, "open")?,
            high: ensure_finite(high, "high")?,
            low: ensure_finite(low, "low")?,
            close: ensure_finite(close, "close")?,
        })
    }

    pub fn single(value: f64) -> ChartResult<Self> {
        Self::new(value, value, value, value)
    }

    pub fn from_decimal(
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }
}

/// One time-indexed data point together with its optional per-point overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRow<S> {
    pub index: TimePointIndex,
    pub value: PlotRowValue,
    #[serde(default)]
    pub style: S,
}

impl<S: Default> PlotRow<S> {
    #[must_use]
    pub fn new(index: TimePointIndex, value: PlotRowValue) -> Self {
        Self {
            index,
            value,
            style: S::default(),
        }
    }
}

impl<S> PlotRow<S> {
    #[must_use]
    pub fn with_style(mut self, style: S) -> Self {
        self.style = style;
        self
    }
}

/// Per-point override record attached to a row.
pub trait RowStyle: Debug + Clone + Default + PartialEq {
    fn validate(&self) -> ChartResult<()>;
}

fn validate_colors(colors: &[Option<Color>]) -> ChartResult<()> {
    for color in colors.iter().flatten() {
        color.validate()?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarRowStyle {
    pub color: Option<Color>,
}

/// Equivalent to Lightweight bar-level `color`, `borderColor` and `wickColor`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandlestickRowStyle {
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub wick_color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaRowStyle {
    pub line_color: Option<Color>,
    pub top_color: Option<Color>,
    pub bottom_color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineRowStyle {
    pub top_fill_color1: Option<Color>,
    pub top_fill_color2: Option<Color>,
    pub top_line_color: Option<Color>,
    pub bottom_fill_color1: Option<Color>,
    pub bottom_fill_color2: Option<Color>,
    pub bottom_line_color: Option<Color>,
}

/// Cloud rows carry override slots, but the cloud resolver reads
/// configuration only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudAreaRowStyle {
    pub higher_line_color: Option<Color>,
    pub lower_line_color: Option<Color>,
    pub negative_color: Option<Color>,
    pub positive_color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokenAreaRowStyle {
    pub color: Option<Color>,
    pub label: Option<String>,
    pub extend_right: bool,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineRowStyle {
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramRowStyle {
    pub color: Option<Color>,
}

impl RowStyle for BarRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.color])
    }
}

impl RowStyle for CandlestickRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.color, self.border_color, self.wick_color])
    }
}

impl RowStyle for AreaRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.line_color, self.top_color, self.bottom_color])
    }
}

impl RowStyle for BaselineRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[
            self.top_fill_color1,
            self.top_fill_color2,
            self.top_line_color,
            self.bottom_fill_color1,
            self.bottom_fill_color2,
            self.bottom_line_color,
        ])
    }
}

impl RowStyle for CloudAreaRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[
            self.higher_line_color,
            self.lower_line_color,
            self.negative_color,
            self.positive_color,
        ])
    }
}

impl RowStyle for BrokenAreaRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.color])
    }
}

impl RowStyle for LineRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.color])
    }
}

impl RowStyle for HistogramRowStyle {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.color])
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{BarRowStyle, CandlestickRowStyle, PlotRow, PlotRowValue, RowStyle};
    use crate::render::Color;

    #[test]
    fn single_value_fills_all_slots() {
        let value = PlotRowValue::single(42.0).expect("single");
        assert_eq!(value.open, 42.0);
        assert_eq!(value.high, 42.0);
        assert_eq!(value.low, 42.0);
        assert_eq!(value.close, 42.0);
    }

    #[test]
    fn non_finite_prices_are_rejected() {
        assert!(PlotRowValue::new(1.0, f64::INFINITY, 0.0, 1.0).is_err());
        assert!(PlotRowValue::single(f64::NAN).is_err());
    }

    #[test]
    fn crossing_boundaries_are_accepted() {
        let value = PlotRowValue::new(10.0, 9.0, 11.0, 10.0).expect("crossed band");
        assert!(value.high < value.low);
    }

    #[test]
    fn decimal_values_convert() {
        let value = PlotRowValue::from_decimal(
            Decimal::new(100, 0),
            Decimal::new(1055, 1),
            Decimal::new(995, 1),
            Decimal::new(102, 0),
        )
        .expect("decimal row");
        assert!((value.high - 105.5).abs() <= 1e-12);
    }

    #[test]
    fn row_defaults_to_empty_overrides() {
        let row: PlotRow<BarRowStyle> = PlotRow::new(3, PlotRowValue::single(1.0).expect("value"));
        assert_eq!(row.style, BarRowStyle::default());
    }

    #[test]
    fn override_validation_checks_every_color() {
        let style = CandlestickRowStyle {
            wick_color: Some(Color::rgb(1.5, 0.0, 0.0)),
            ..CandlestickRowStyle::default()
        };
        assert!(style.validate().is_err());
    }
}

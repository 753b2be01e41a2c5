use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

const UP_COLOR: Color = Color::rgb8(0x26, 0xa6, 0x9a);
const DOWN_COLOR: Color = Color::rgb8(0xef, 0x53, 0x50);
const LINE_COLOR: Color = Color::rgb8(0x21, 0x96, 0xf3);

/// How consecutive points of a stroked line are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineType {
    #[default]
    Simple,
    WithSteps,
    Curved,
}

/// Reference price used by baseline series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseValue {
    pub price: f64,
}

/// Series-wide style configuration shared by every variant.
///
/// Options are loaded from JSON with missing fields filled from defaults,
/// and validated before they reach a series.
pub trait SeriesStyleOptions:
    Debug + Clone + PartialEq + Default + Serialize + DeserializeOwned
{
    fn validate(&self) -> ChartResult<()>;

    fn from_json_str(input: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse series options: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }

    fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize series options: {e}"))
        })
    }
}

fn validate_colors(colors: &[Color]) -> ChartResult<()> {
    for color in colors {
        color.validate()?;
    }
    Ok(())
}

fn validate_line_width(width: f64, field_name: &str) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite and > 0"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyleOptions {
    pub up_color: Color,
    pub down_color: Color,
    pub open_visible: bool,
    pub thin_bars: bool,
}

impl Default for BarStyleOptions {
    fn default() -> Self {
        Self {
            up_color: UP_COLOR,
            down_color: DOWN_COLOR,
            open_visible: true,
            thin_bars: true,
        }
    }
}

impl SeriesStyleOptions for BarStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.up_color, self.down_color])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandlestickStyleOptions {
    pub up_color: Color,
    pub down_color: Color,
    pub wick_visible: bool,
    pub border_visible: bool,
    pub border_up_color: Color,
    pub border_down_color: Color,
    pub wick_up_color: Color,
    pub wick_down_color: Color,
}

impl Default for CandlestickStyleOptions {
    fn default() -> Self {
        Self {
            up_color: UP_COLOR,
            down_color: DOWN_COLOR,
            wick_visible: true,
            border_visible: true,
            border_up_color: UP_COLOR,
            border_down_color: DOWN_COLOR,
            wick_up_color: UP_COLOR,
            wick_down_color: DOWN_COLOR,
        }
    }
}

impl SeriesStyleOptions for CandlestickStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[
            self.up_color,
            self.down_color,
            self.border_up_color,
            self.border_down_color,
            self.wick_up_color,
            self.wick_down_color,
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaStyleOptions {
    pub top_color: Color,
    pub bottom_color: Color,
    pub line_color: Color,
    pub line_style: LineStrokeStyle,
    pub line_width: f64,
    pub line_type: LineType,
}

impl Default for AreaStyleOptions {
    fn default() -> Self {
        Self {
            top_color: Color::rgba8(46, 220, 135, 0.4),
            bottom_color: Color::rgba8(40, 221, 100, 0.0),
            line_color: Color::rgb8(0x33, 0xd7, 0x78),
            line_style: LineStrokeStyle::Solid,
            line_width: 3.0,
            line_type: LineType::Simple,
        }
    }
}

impl SeriesStyleOptions for AreaStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.top_color, self.bottom_color, self.line_color])?;
        validate_line_width(self.line_width, "area line width")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineStyleOptions {
    pub base_value: BaseValue,
    pub top_fill_color1: Color,
    pub top_fill_color2: Color,
    pub top_line_color: Color,
    pub bottom_fill_color1: Color,
    pub bottom_fill_color2: Color,
    pub bottom_line_color: Color,
    pub line_width: f64,
    pub line_style: LineStrokeStyle,
    pub line_type: LineType,
}

impl Default for BaselineStyleOptions {
    fn default() -> Self {
        Self {
            base_value: BaseValue::default(),
            top_fill_color1: Color::rgba8(38, 166, 154, 0.28),
            top_fill_color2: Color::rgba8(38, 166, 154, 0.05),
            top_line_color: Color::rgb8(38, 166, 154),
            bottom_fill_color1: Color::rgba8(239, 83, 80, 0.05),
            bottom_fill_color2: Color::rgba8(239, 83, 80, 0.28),
            bottom_line_color: Color::rgb8(239, 83, 80),
            line_width: 3.0,
            line_style: LineStrokeStyle::Solid,
            line_type: LineType::Simple,
        }
    }
}

impl SeriesStyleOptions for BaselineStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        if !self.base_value.price.is_finite() {
            return Err(ChartError::InvalidData(
                "baseline base value must be finite".to_owned(),
            ));
        }
        validate_colors(&[
            self.top_fill_color1,
            self.top_fill_color2,
            self.top_line_color,
            self.bottom_fill_color1,
            self.bottom_fill_color2,
            self.bottom_line_color,
        ])?;
        validate_line_width(self.line_width, "baseline line width")
    }
}

/// Band between a higher and a lower boundary line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudAreaStyleOptions {
    pub positive_color: Color,
    pub negative_color: Color,
    pub higher_line_color: Color,
    pub higher_line_style: LineStrokeStyle,
    pub higher_line_type: LineType,
    pub higher_line_width: f64,
    pub lower_line_color: Color,
    pub lower_line_style: LineStrokeStyle,
    pub lower_line_type: LineType,
    pub lower_line_width: f64,
}

impl Default for CloudAreaStyleOptions {
    fn default() -> Self {
        Self {
            positive_color: Color::rgba8(38, 166, 154, 0.28),
            negative_color: Color::rgba8(239, 83, 80, 0.28),
            higher_line_color: UP_COLOR,
            higher_line_style: LineStrokeStyle::Solid,
            higher_line_type: LineType::Simple,
            higher_line_width: 2.0,
            lower_line_color: DOWN_COLOR,
            lower_line_style: LineStrokeStyle::Solid,
            lower_line_type: LineType::Simple,
            lower_line_width: 2.0,
        }
    }
}

impl SeriesStyleOptions for CloudAreaStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[
            self.positive_color,
            self.negative_color,
            self.higher_line_color,
            self.lower_line_color,
        ])?;
        validate_line_width(self.higher_line_width, "cloud higher line width")?;
        validate_line_width(self.lower_line_width, "cloud lower line width")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokenAreaStyleOptions {
    pub color: Color,
    pub stroke_color: Color,
}

impl Default for BrokenAreaStyleOptions {
    fn default() -> Self {
        Self {
            color: Color::rgba8(33, 150, 243, 0.2),
            stroke_color: LINE_COLOR,
        }
    }
}

impl SeriesStyleOptions for BrokenAreaStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        validate_colors(&[self.color, self.stroke_color])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyleOptions {
    pub color: Color,
    pub line_style: LineStrokeStyle,
    pub line_width: f64,
    pub line_type: LineType,
}

impl Default for LineStyleOptions {
    fn default() -> Self {
        Self {
            color: LINE_COLOR,
            line_style: LineStrokeStyle::Solid,
            line_width: 3.0,
            line_type: LineType::Simple,
        }
    }
}

impl SeriesStyleOptions for LineStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        self.color.validate()?;
        validate_line_width(self.line_width, "line width")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramStyleOptions {
    pub color: Color,
    pub base: f64,
}

impl Default for HistogramStyleOptions {
    fn default() -> Self {
        Self {
            color: UP_COLOR,
            base: 0.0,
        }
    }
}

impl SeriesStyleOptions for HistogramStyleOptions {
    fn validate(&self) -> ChartResult<()> {
        if !self.base.is_finite() {
            return Err(ChartError::InvalidData(
                "histogram base must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BaselineStyleOptions, CandlestickStyleOptions, CloudAreaStyleOptions, LineStyleOptions,
        SeriesStyleOptions,
    };

    #[test]
    fn defaults_validate() {
        assert!(CandlestickStyleOptions::default().validate().is_ok());
        assert!(BaselineStyleOptions::default().validate().is_ok());
        assert!(CloudAreaStyleOptions::default().validate().is_ok());
    }

    #[test]
    fn non_positive_line_width_is_rejected() {
        let options = LineStyleOptions {
            line_width: 0.0,
            ..LineStyleOptions::default()
        };
        assert!(options.validate().is_err());
    }
}

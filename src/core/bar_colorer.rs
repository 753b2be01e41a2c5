//! Per-bar style resolution.
//!
//! Every series shape owns one resolver that merges the optional overrides
//! of a located row with the series configuration. A row-level value always
//! wins; otherwise the configured value is used, for some fields picked by an
//! up/down or above/below comparison of the row prices. The comparisons are
//! inclusive, so ties resolve to the up/above side:
//!
//! | Shape | Comparison |
//! |---|---|
//! | Bar, Candlestick | `open <= close` is up |
//! | CloudArea | `close >= open` is above |
//! | Baseline | `close >= base_value.price` is above |

use serde::{Deserialize, Serialize};

use crate::core::series_data::{
    AreaRowStyle, BarRowStyle, BaselineRowStyle, BrokenAreaRowStyle, CandlestickRowStyle,
    CloudAreaRowStyle, HistogramRowStyle, LineRowStyle, PlotRow,
};
use crate::core::series_options::{
    AreaStyleOptions, BarStyleOptions, BaselineStyleOptions, BrokenAreaStyleOptions,
    CandlestickStyleOptions, CloudAreaStyleOptions, HistogramStyleOptions, LineStyleOptions,
};
use crate::core::{Series, SeriesKind, SeriesPlotRow, SeriesType, TimePointIndex};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Resolver signature shared by all series shapes.
pub type StyleGetterFn<K> = fn(
    &<K as SeriesKind>::Options,
    &SeriesPlotRow<K>,
    Option<&SeriesPlotRow<K>>,
) -> <K as SeriesKind>::BarStyle;

/// Rows already located by the caller for the requested index.
///
/// The pair must belong to the requested index; it is trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecomputedBars<'a, S> {
    pub value: &'a PlotRow<S>,
    pub previous_value: Option<&'a PlotRow<S>>,
}

impl<'a, S> PrecomputedBars<'a, S> {
    #[must_use]
    pub fn new(value: &'a PlotRow<S>, previous_value: Option<&'a PlotRow<S>>) -> Self {
        Self {
            value,
            previous_value,
        }
    }
}

/// Row override if present, configured value otherwise.
#[must_use]
pub fn resolve_color(row_override: Option<Color>, configured: Color) -> Color {
    row_override.unwrap_or(configured)
}

/// Picks `up` when `is_up` holds.
#[must_use]
pub fn directional_color(is_up: bool, up: Color, down: Color) -> Color {
    if is_up { up } else { down }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarColorerStyle {
    pub bar_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlesticksColorerStyle {
    pub bar_color: Color,
    pub bar_border_color: Color,
    pub bar_wick_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBarColorerStyle {
    pub bar_color: Color,
    pub line_color: Color,
    pub top_color: Color,
    pub bottom_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrokenAreaBarColorerStyle {
    pub bar_color: Color,
    pub line_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudAreaBarColorerStyle {
    pub bar_color: Color,
    pub positive_color: Color,
    pub negative_color: Color,
    pub higher_line_color: Color,
    pub lower_line_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineBarColorerStyle {
    pub bar_color: Color,
    pub top_line_color: Color,
    pub bottom_line_color: Color,
    pub top_fill_color1: Color,
    pub top_fill_color2: Color,
    pub bottom_fill_color1: Color,
    pub bottom_fill_color2: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineBarColorerStyle {
    pub bar_color: Color,
    pub line_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBarColorerStyle {
    pub bar_color: Color,
}

/// Resolved style of any series shape, for consumers holding mixed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BarStyle {
    Bar(BarColorerStyle),
    Candlestick(CandlesticksColorerStyle),
    Area(AreaBarColorerStyle),
    Baseline(BaselineBarColorerStyle),
    CloudArea(CloudAreaBarColorerStyle),
    BrokenArea(BrokenAreaBarColorerStyle),
    Line(LineBarColorerStyle),
    Histogram(HistogramBarColorerStyle),
}

impl BarStyle {
    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        match self {
            Self::Bar(_) => SeriesType::Bar,
            Self::Candlestick(_) => SeriesType::Candlestick,
            Self::Area(_) => SeriesType::Area,
            Self::Baseline(_) => SeriesType::Baseline,
            Self::CloudArea(_) => SeriesType::CloudArea,
            Self::BrokenArea(_) => SeriesType::BrokenArea,
            Self::Line(_) => SeriesType::Line,
            Self::Histogram(_) => SeriesType::Histogram,
        }
    }

    /// Color shown for the bar in legends and crosshair labels.
    #[must_use]
    pub fn bar_color(&self) -> Color {
        match self {
            Self::Bar(style) => style.bar_color,
            Self::Candlestick(style) => style.bar_color,
            Self::Area(style) => style.bar_color,
            Self::Baseline(style) => style.bar_color,
            Self::CloudArea(style) => style.bar_color,
            Self::BrokenArea(style) => style.bar_color,
            Self::Line(style) => style.bar_color,
            Self::Histogram(style) => style.bar_color,
        }
    }
}

macro_rules! impl_from_style {
    ($($style:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$style> for BarStyle {
                fn from(style: $style) -> Self {
                    Self::$variant(style)
                }
            }
        )*
    };
}

impl_from_style!(
    BarColorerStyle => Bar,
    CandlesticksColorerStyle => Candlestick,
    AreaBarColorerStyle => Area,
    BaselineBarColorerStyle => Baseline,
    CloudAreaBarColorerStyle => CloudArea,
    BrokenAreaBarColorerStyle => BrokenArea,
    LineBarColorerStyle => Line,
    HistogramBarColorerStyle => Histogram,
);

fn is_up_bar<S>(row: &PlotRow<S>) -> bool {
    row.value.open <= row.value.close
}

pub fn bar_style_for_bar(
    options: &BarStyleOptions,
    current: &PlotRow<BarRowStyle>,
    _previous: Option<&PlotRow<BarRowStyle>>,
) -> BarColorerStyle {
    let is_up = is_up_bar(current);
    BarColorerStyle {
        bar_color: resolve_color(
            current.style.color,
            directional_color(is_up, options.up_color, options.down_color),
        ),
    }
}

pub fn bar_style_for_candlestick(
    options: &CandlestickStyleOptions,
    current: &PlotRow<CandlestickRowStyle>,
    _previous: Option<&PlotRow<CandlestickRowStyle>>,
) -> CandlesticksColorerStyle {
    let is_up = is_up_bar(current);
    CandlesticksColorerStyle {
        bar_color: resolve_color(
            current.style.color,
            directional_color(is_up, options.up_color, options.down_color),
        ),
        bar_border_color: resolve_color(
            current.style.border_color,
            directional_color(is_up, options.border_up_color, options.border_down_color),
        ),
        bar_wick_color: resolve_color(
            current.style.wick_color,
            directional_color(is_up, options.wick_up_color, options.wick_down_color),
        ),
    }
}

pub fn bar_style_for_area(
    options: &AreaStyleOptions,
    current: &PlotRow<AreaRowStyle>,
    _previous: Option<&PlotRow<AreaRowStyle>>,
) -> AreaBarColorerStyle {
    let line_color = resolve_color(current.style.line_color, options.line_color);
    AreaBarColorerStyle {
        bar_color: line_color,
        line_color,
        top_color: resolve_color(current.style.top_color, options.top_color),
        bottom_color: resolve_color(current.style.bottom_color, options.bottom_color),
    }
}

/// The stroke always comes from configuration; only the fill honors the row.
pub fn bar_style_for_broken_area(
    options: &BrokenAreaStyleOptions,
    current: &PlotRow<BrokenAreaRowStyle>,
    _previous: Option<&PlotRow<BrokenAreaRowStyle>>,
) -> BrokenAreaBarColorerStyle {
    BrokenAreaBarColorerStyle {
        bar_color: resolve_color(current.style.color, options.color),
        line_color: options.stroke_color,
    }
}

/// Row overrides are ignored; every field passes configuration through.
pub fn bar_style_for_cloud_area(
    options: &CloudAreaStyleOptions,
    current: &PlotRow<CloudAreaRowStyle>,
    _previous: Option<&PlotRow<CloudAreaRowStyle>>,
) -> CloudAreaBarColorerStyle {
    let is_above = current.value.close >= current.value.open;
    CloudAreaBarColorerStyle {
        bar_color: directional_color(is_above, options.positive_color, options.negative_color),
        positive_color: options.positive_color,
        negative_color: options.negative_color,
        higher_line_color: options.higher_line_color,
        lower_line_color: options.lower_line_color,
    }
}

/// `bar_color` follows the comparison against the configured lines and
/// ignores the row's line overrides.
pub fn bar_style_for_baseline(
    options: &BaselineStyleOptions,
    current: &PlotRow<BaselineRowStyle>,
    _previous: Option<&PlotRow<BaselineRowStyle>>,
) -> BaselineBarColorerStyle {
    let is_above = current.value.close >= options.base_value.price;
    let style = &current.style;
    BaselineBarColorerStyle {
        bar_color: directional_color(is_above, options.top_line_color, options.bottom_line_color),
        top_line_color: resolve_color(style.top_line_color, options.top_line_color),
        bottom_line_color: resolve_color(style.bottom_line_color, options.bottom_line_color),
        top_fill_color1: resolve_color(style.top_fill_color1, options.top_fill_color1),
        top_fill_color2: resolve_color(style.top_fill_color2, options.top_fill_color2),
        bottom_fill_color1: resolve_color(style.bottom_fill_color1, options.bottom_fill_color1),
        bottom_fill_color2: resolve_color(style.bottom_fill_color2, options.bottom_fill_color2),
    }
}

pub fn bar_style_for_line(
    options: &LineStyleOptions,
    current: &PlotRow<LineRowStyle>,
    _previous: Option<&PlotRow<LineRowStyle>>,
) -> LineBarColorerStyle {
    let line_color = resolve_color(current.style.color, options.color);
    LineBarColorerStyle {
        bar_color: line_color,
        line_color,
    }
}

pub fn bar_style_for_histogram(
    options: &HistogramStyleOptions,
    current: &PlotRow<HistogramRowStyle>,
    _previous: Option<&PlotRow<HistogramRowStyle>>,
) -> HistogramBarColorerStyle {
    HistogramBarColorerStyle {
        bar_color: resolve_color(current.style.color, options.color),
    }
}

/// Style query bound to one series.
pub struct SeriesBarColorer<'a, K: SeriesKind> {
    series: &'a Series<K>,
    style_getter: StyleGetterFn<K>,
}

impl<'a, K: SeriesKind> SeriesBarColorer<'a, K> {
    #[must_use]
    pub fn new(series: &'a Series<K>) -> Self {
        Self {
            series,
            style_getter: K::STYLE_GETTER,
        }
    }

    /// Resolves the style of the bar at `bar_index`.
    ///
    /// # Panics
    ///
    /// Panics when no row exists at `bar_index`. Callers must only query
    /// indices known to exist; use [`Self::try_bar_style`] otherwise.
    #[must_use]
    pub fn bar_style(
        &self,
        bar_index: TimePointIndex,
        precomputed: Option<PrecomputedBars<'_, K::RowStyle>>,
    ) -> K::BarStyle {
        self.try_bar_style(bar_index, precomputed)
            .unwrap_or_else(|err| panic!("{} bar style query failed: {err}", K::SERIES_TYPE))
    }

    pub fn try_bar_style(
        &self,
        bar_index: TimePointIndex,
        precomputed: Option<PrecomputedBars<'_, K::RowStyle>>,
    ) -> ChartResult<K::BarStyle> {
        let bars = self
            .find_bar(bar_index, precomputed)
            .ok_or(ChartError::MissingBar { index: bar_index })?;
        Ok((self.style_getter)(
            self.series.options(),
            bars.value,
            bars.previous_value,
        ))
    }

    fn find_bar<'b>(
        &'b self,
        bar_index: TimePointIndex,
        precomputed: Option<PrecomputedBars<'b, K::RowStyle>>,
    ) -> Option<PrecomputedBars<'b, K::RowStyle>> {
        if precomputed.is_some() {
            return precomputed;
        }
        self.series.bars().value_with_previous(bar_index)
    }
}

/// Type-erased style query used by legend and crosshair overlays.
pub trait BarStyleSource {
    fn series_type(&self) -> SeriesType;

    /// Style of the bar at `bar_index`, `None` when the series has no row there.
    fn bar_style_at(&self, bar_index: TimePointIndex) -> Option<BarStyle>;
}

impl<K: SeriesKind> BarStyleSource for Series<K> {
    fn series_type(&self) -> SeriesType {
        K::SERIES_TYPE
    }

    fn bar_style_at(&self, bar_index: TimePointIndex) -> Option<BarStyle> {
        self.bar_colorer()
            .try_bar_style(bar_index, None)
            .ok()
            .map(Into::into)
    }
}

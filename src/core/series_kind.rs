use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::core::bar_colorer::{
    self, AreaBarColorerStyle, BarColorerStyle, BarStyle, BaselineBarColorerStyle,
    BrokenAreaBarColorerStyle, CandlesticksColorerStyle, CloudAreaBarColorerStyle,
    HistogramBarColorerStyle, LineBarColorerStyle, StyleGetterFn,
};
use crate::core::series_data::{
    AreaRowStyle, BarRowStyle, BaselineRowStyle, BrokenAreaRowStyle, CandlestickRowStyle,
    CloudAreaRowStyle, HistogramRowStyle, LineRowStyle, PlotRow, RowStyle,
};
use crate::core::series_options::{
    AreaStyleOptions, BarStyleOptions, BaselineStyleOptions, BrokenAreaStyleOptions,
    CandlestickStyleOptions, CloudAreaStyleOptions, HistogramStyleOptions, LineStyleOptions,
    SeriesStyleOptions,
};

/// Discriminant of the eight renderable series shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesType {
    Bar,
    Candlestick,
    Area,
    Baseline,
    CloudArea,
    BrokenArea,
    Line,
    Histogram,
}

impl SeriesType {
    pub const ALL: [SeriesType; 8] = [
        SeriesType::Bar,
        SeriesType::Candlestick,
        SeriesType::Area,
        SeriesType::Baseline,
        SeriesType::CloudArea,
        SeriesType::BrokenArea,
        SeriesType::Line,
        SeriesType::Histogram,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Candlestick => "Candlestick",
            Self::Area => "Area",
            Self::Baseline => "Baseline",
            Self::CloudArea => "CloudArea",
            Self::BrokenArea => "BrokenArea",
            Self::Line => "Line",
            Self::Histogram => "Histogram",
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one series shape.
///
/// Ties together the row override record, the style configuration, the
/// resolved style record and the resolver that merges them. Implemented by
/// the zero-sized markers below; the resolver is picked once per colorer.
pub trait SeriesKind: Debug + Sized + 'static {
    const SERIES_TYPE: SeriesType;
    const STYLE_GETTER: StyleGetterFn<Self>;

    type Options: SeriesStyleOptions;
    type RowStyle: RowStyle;
    type BarStyle: Debug + Clone + PartialEq + Into<BarStyle>;
}

/// Row type stored by a series of kind `K`.
pub type SeriesPlotRow<K> = PlotRow<<K as SeriesKind>::RowStyle>;

macro_rules! series_kind {
    ($(#[$meta:meta])* $name:ident, $series_type:ident, $options:ty, $row:ty, $style:ty, $getter:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl SeriesKind for $name {
            const SERIES_TYPE: SeriesType = SeriesType::$series_type;
            const STYLE_GETTER: StyleGetterFn<Self> = $getter;

            type Options = $options;
            type RowStyle = $row;
            type BarStyle = $style;
        }
    };
}

series_kind!(
    /// OHLC bars.
    BarSeries,
    Bar,
    BarStyleOptions,
    BarRowStyle,
    BarColorerStyle,
    bar_colorer::bar_style_for_bar
);
series_kind!(
    CandlestickSeries,
    Candlestick,
    CandlestickStyleOptions,
    CandlestickRowStyle,
    CandlesticksColorerStyle,
    bar_colorer::bar_style_for_candlestick
);
series_kind!(
    AreaSeries,
    Area,
    AreaStyleOptions,
    AreaRowStyle,
    AreaBarColorerStyle,
    bar_colorer::bar_style_for_area
);
series_kind!(
    /// Area split around a fixed reference price.
    BaselineSeries,
    Baseline,
    BaselineStyleOptions,
    BaselineRowStyle,
    BaselineBarColorerStyle,
    bar_colorer::bar_style_for_baseline
);
series_kind!(
    /// Band between the row `high` (higher boundary) and `low` (lower boundary).
    CloudAreaSeries,
    CloudArea,
    CloudAreaStyleOptions,
    CloudAreaRowStyle,
    CloudAreaBarColorerStyle,
    bar_colorer::bar_style_for_cloud_area
);
series_kind!(
    BrokenAreaSeries,
    BrokenArea,
    BrokenAreaStyleOptions,
    BrokenAreaRowStyle,
    BrokenAreaBarColorerStyle,
    bar_colorer::bar_style_for_broken_area
);
series_kind!(
    LineSeries,
    Line,
    LineStyleOptions,
    LineRowStyle,
    LineBarColorerStyle,
    bar_colorer::bar_style_for_line
);
series_kind!(
    HistogramSeries,
    Histogram,
    HistogramStyleOptions,
    HistogramRowStyle,
    HistogramBarColorerStyle,
    bar_colorer::bar_style_for_histogram
);

#[cfg(test)]
mod tests {
    use super::{
        AreaSeries, BarSeries, BaselineSeries, BrokenAreaSeries, CandlestickSeries,
        CloudAreaSeries, HistogramSeries, LineSeries, SeriesKind, SeriesType,
    };

    #[test]
    fn markers_map_to_their_discriminant() {
        let discriminants = [
            BarSeries::SERIES_TYPE,
            CandlestickSeries::SERIES_TYPE,
            AreaSeries::SERIES_TYPE,
            BaselineSeries::SERIES_TYPE,
            CloudAreaSeries::SERIES_TYPE,
            BrokenAreaSeries::SERIES_TYPE,
            LineSeries::SERIES_TYPE,
            HistogramSeries::SERIES_TYPE,
        ];
        assert_eq!(discriminants, SeriesType::ALL);
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(SeriesType::CloudArea.to_string(), "CloudArea");
    }
}

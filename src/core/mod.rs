pub mod bar_colorer;
pub mod plot_list;
pub mod primitives;
pub mod series;
pub mod series_data;
pub mod series_kind;
pub mod series_options;
pub mod types;

pub use bar_colorer::{
    AreaBarColorerStyle, BarColorerStyle, BarStyle, BarStyleSource, BaselineBarColorerStyle,
    BrokenAreaBarColorerStyle, CandlesticksColorerStyle, CloudAreaBarColorerStyle,
    HistogramBarColorerStyle, LineBarColorerStyle, PrecomputedBars, SeriesBarColorer,
    StyleGetterFn, resolve_color,
};
pub use plot_list::PlotList;
pub use series::Series;
pub use series_data::{
    AreaRowStyle, BarRowStyle, BaselineRowStyle, BrokenAreaRowStyle, CandlestickRowStyle,
    CloudAreaRowStyle, HistogramRowStyle, LineRowStyle, PlotRow, PlotRowValue, RowStyle,
};
pub use series_kind::{
    AreaSeries, BarSeries, BaselineSeries, BrokenAreaSeries, CandlestickSeries, CloudAreaSeries,
    HistogramSeries, LineSeries, SeriesKind, SeriesPlotRow, SeriesType,
};
pub use series_options::{
    AreaStyleOptions, BarStyleOptions, BaseValue, BaselineStyleOptions, BrokenAreaStyleOptions,
    CandlestickStyleOptions, CloudAreaStyleOptions, HistogramStyleOptions, LineStyleOptions,
    LineType, SeriesStyleOptions,
};
pub use types::{Coordinate, ItemsRange, TimePointIndex, Viewport};

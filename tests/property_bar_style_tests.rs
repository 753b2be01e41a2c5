use chart_series_rs::core::{
    BarRowStyle, BarSeries, BarStyleOptions, BaseValue, BaselineSeries, BaselineStyleOptions,
    CandlestickSeries, CandlestickStyleOptions, CloudAreaSeries, CloudAreaStyleOptions, PlotRow,
    PlotRowValue, Series,
};
use chart_series_rs::render::Color;
use proptest::prelude::*;

fn price() -> impl Strategy<Value = f64> {
    -1_000.0f64..1_000.0
}

fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb8(r, g, b))
}

fn row<S: Default>(index: i64, open: f64, close: f64) -> PlotRow<S> {
    let value = PlotRowValue::new(open, open.max(close), open.min(close), close).expect("row");
    PlotRow::new(index, value)
}

proptest! {
    #[test]
    fn bar_override_always_wins(open in price(), close in price(), override_color in color()) {
        let mut series = Series::<BarSeries>::new(BarStyleOptions::default()).expect("series");
        series
            .set_data(vec![row(0, open, close).with_style(BarRowStyle {
                color: Some(override_color),
            })])
            .expect("rows");
        prop_assert_eq!(series.bar_style(0, None).bar_color, override_color);
    }

    #[test]
    fn candlestick_direction_is_inclusive(open in price(), delta in 0.0f64..100.0) {
        let options = CandlestickStyleOptions::default();
        let mut series = Series::<CandlestickSeries>::new(options).expect("series");
        series
            .set_data(vec![row(0, open, open + delta), row(1, open + delta, open + delta)])
            .expect("rows");
        prop_assert_eq!(series.bar_style(0, None).bar_color, options.up_color);
        prop_assert_eq!(series.bar_style(1, None).bar_wick_color, options.wick_up_color);
    }

    #[test]
    fn baseline_side_follows_reference_price(reference in price(), close in price()) {
        let options = BaselineStyleOptions {
            base_value: BaseValue { price: reference },
            ..BaselineStyleOptions::default()
        };
        let mut series = Series::<BaselineSeries>::new(options).expect("series");
        series
            .set_data(vec![row(0, close, close), row(1, reference, reference)])
            .expect("rows");
        let expected = if close >= reference {
            options.top_line_color
        } else {
            options.bottom_line_color
        };
        prop_assert_eq!(series.bar_style(0, None).bar_color, expected);
        prop_assert_eq!(series.bar_style(1, None).bar_color, options.top_line_color);
    }

    #[test]
    fn cloud_point_side_follows_own_open(open in price(), close in price()) {
        let options = CloudAreaStyleOptions::default();
        let mut series = Series::<CloudAreaSeries>::new(options).expect("series");
        series.set_data(vec![row(0, open, close)]).expect("rows");
        let style = series.bar_style(0, None);
        let expected = if close >= open {
            options.positive_color
        } else {
            options.negative_color
        };
        prop_assert_eq!(style.bar_color, expected);
        prop_assert_eq!(style.higher_line_color, options.higher_line_color);
    }
}

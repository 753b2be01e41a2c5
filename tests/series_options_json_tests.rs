use chart_series_rs::core::{
    BaselineStyleOptions, CandlestickStyleOptions, CloudAreaSeries, CloudAreaStyleOptions,
    LineType, Series, SeriesStyleOptions,
};
use chart_series_rs::render::{Color, LineStrokeStyle};

#[test]
fn partial_json_fills_missing_fields_from_defaults() {
    let options = CloudAreaStyleOptions::from_json_str(
        r##"{"higher_line_color":"#ffffff","lower_line_type":"WithSteps"}"##,
    )
    .expect("options");
    assert_eq!(options.higher_line_color, Color::rgb(1.0, 1.0, 1.0));
    assert_eq!(options.lower_line_type, LineType::WithSteps);
    assert_eq!(
        options.positive_color,
        CloudAreaStyleOptions::default().positive_color
    );
    assert_eq!(options.higher_line_style, LineStrokeStyle::Solid);
}

#[test]
fn pretty_json_round_trips() {
    let options = CandlestickStyleOptions {
        wick_visible: false,
        border_up_color: Color::from_hex("#123456").expect("color"),
        ..CandlestickStyleOptions::default()
    };
    let json = options.to_json_pretty().expect("serialize");
    assert!(json.contains("\"#123456\""));
    let parsed = CandlestickStyleOptions::from_json_str(&json).expect("parse");
    assert_eq!(parsed.to_json_pretty().expect("serialize again"), json);
}

#[test]
fn malformed_or_invalid_options_are_rejected() {
    assert!(BaselineStyleOptions::from_json_str("{").is_err());
    assert!(BaselineStyleOptions::from_json_str(r#"{"line_width":-1.0}"#).is_err());
    assert!(BaselineStyleOptions::from_json_str(r#"{"top_line_color":"red"}"#).is_err());
    let parsed =
        BaselineStyleOptions::from_json_str(r#"{"base_value":{"price":12.5}}"#).expect("base");
    assert_eq!(parsed.base_value.price, 12.5);
}

#[test]
fn series_rejects_invalid_options_and_keeps_current() {
    let mut series = Series::<CloudAreaSeries>::default();
    let invalid = CloudAreaStyleOptions {
        lower_line_width: 0.0,
        ..CloudAreaStyleOptions::default()
    };
    assert!(series.apply_options(invalid).is_err());
    assert_eq!(series.options(), &CloudAreaStyleOptions::default());
    assert!(Series::<CloudAreaSeries>::new(invalid).is_err());
}

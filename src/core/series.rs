use tracing::{debug, trace, warn};

use crate::core::bar_colorer::{PrecomputedBars, SeriesBarColorer};
use crate::core::plot_list::PlotList;
use crate::core::series_data::RowStyle;
use crate::core::series_options::SeriesStyleOptions;
use crate::core::{SeriesKind, SeriesPlotRow, SeriesType, TimePointIndex};
use crate::error::ChartResult;

/// Data source of one series: ordered rows plus the style configuration.
#[derive(Debug, Clone)]
pub struct Series<K: SeriesKind> {
    options: K::Options,
    bars: PlotList<K::RowStyle>,
}

impl<K: SeriesKind> Default for Series<K> {
    fn default() -> Self {
        Self {
            options: K::Options::default(),
            bars: PlotList::new(),
        }
    }
}

impl<K: SeriesKind> Series<K> {
    /// Creates an empty series with validated options.
    pub fn new(options: K::Options) -> ChartResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            bars: PlotList::new(),
        })
    }

    #[must_use]
    pub fn series_type(&self) -> SeriesType {
        K::SERIES_TYPE
    }

    #[must_use]
    pub fn options(&self) -> &K::Options {
        &self.options
    }

    /// Replaces the style configuration.
    ///
    /// Views built on this series must be invalidated with a style trigger.
    pub fn apply_options(&mut self, options: K::Options) -> ChartResult<()> {
        if let Err(err) = options.validate() {
            warn!(series_type = %K::SERIES_TYPE, error = %err, "rejected series options");
            return Err(err);
        }
        self.options = options;
        debug!(series_type = %K::SERIES_TYPE, "applied series options");
        Ok(())
    }

    #[must_use]
    pub fn bars(&self) -> &PlotList<K::RowStyle> {
        &self.bars
    }

    /// Replaces all rows; see [`PlotList::from_rows`] for ordering rules.
    pub fn set_data(&mut self, rows: Vec<SeriesPlotRow<K>>) -> ChartResult<()> {
        for row in &rows {
            row.style.validate()?;
        }
        let original_count = rows.len();
        self.bars = PlotList::from_rows(rows);
        debug!(
            series_type = %K::SERIES_TYPE,
            original_count,
            canonical_count = self.bars.len(),
            "set series rows"
        );
        Ok(())
    }

    /// Appends one row newer than every stored row.
    pub fn append(&mut self, row: SeriesPlotRow<K>) -> ChartResult<()> {
        row.style.validate()?;
        let index = row.index;
        if let Err(err) = self.bars.append(row) {
            warn!(series_type = %K::SERIES_TYPE, index, error = %err, "rejected row append");
            return Err(err);
        }
        trace!(series_type = %K::SERIES_TYPE, count = self.bars.len(), "append series row");
        Ok(())
    }

    #[must_use]
    pub fn bar_colorer(&self) -> SeriesBarColorer<'_, K> {
        SeriesBarColorer::new(self)
    }

    /// Resolves the style of the bar at `bar_index`.
    ///
    /// # Panics
    ///
    /// Panics when the series has no row at `bar_index`.
    #[must_use]
    pub fn bar_style(
        &self,
        bar_index: TimePointIndex,
        precomputed: Option<PrecomputedBars<'_, K::RowStyle>>,
    ) -> K::BarStyle {
        self.bar_colorer().bar_style(bar_index, precomputed)
    }
}

#[cfg(test)]
mod tests {
    use super::Series;
    use crate::core::series_data::{HistogramRowStyle, PlotRow, PlotRowValue};
    use crate::core::series_options::HistogramStyleOptions;
    use crate::core::{HistogramSeries, SeriesType};
    use crate::render::Color;

    fn row(index: i64, price: f64) -> PlotRow<HistogramRowStyle> {
        PlotRow::new(index, PlotRowValue::single(price).expect("finite price"))
    }

    #[test]
    fn new_series_reports_discriminant_and_is_empty() {
        let series = Series::<HistogramSeries>::new(HistogramStyleOptions::default())
            .expect("series");
        assert_eq!(series.series_type(), SeriesType::Histogram);
        assert!(series.bars().is_empty());
    }

    #[test]
    fn invalid_options_are_rejected_and_keep_previous() {
        let mut series = Series::<HistogramSeries>::default();
        let invalid = HistogramStyleOptions {
            color: Color::rgb(2.0, 0.0, 0.0),
            ..HistogramStyleOptions::default()
        };
        assert!(series.apply_options(invalid).is_err());
        assert_eq!(series.options(), &HistogramStyleOptions::default());
    }

    #[test]
    fn invalid_row_override_is_rejected() {
        let mut series = Series::<HistogramSeries>::default();
        let bad = row(1, 1.0).with_style(HistogramRowStyle {
            color: Some(Color::rgba(0.0, 0.0, 0.0, -1.0)),
        });
        assert!(series.append(bad.clone()).is_err());
        assert!(series.set_data(vec![bad]).is_err());
        assert!(series.bars().is_empty());
    }

    #[test]
    fn append_keeps_rows_ordered() {
        let mut series = Series::<HistogramSeries>::default();
        series.set_data(vec![row(2, 1.0), row(1, 2.0)]).expect("set data");
        series.append(row(3, 3.0)).expect("append");
        assert!(series.append(row(3, 4.0)).is_err());
        let indices: Vec<i64> = series.bars().rows().iter().map(|row| row.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }
}

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CloudAreaSeries, ItemsRange, PlotRow, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CloudAreaRendererData, CompositeRenderer, LineRendererData, PaneRendererCloudArea,
    PaneRendererLine, SeriesRenderer,
};
use crate::views::items::CloudAreaItem;
use crate::views::series_pane_view::{
    PriceScaleCoordinates, SeriesPaneAdapter, SeriesPaneView, TimeScaleCoordinates,
};

/// Pane view drawing a cloud band with its two boundary lines.
pub type CloudAreaPaneView = SeriesPaneView<CloudAreaPaneAdapter>;

impl CloudAreaPaneView {
    #[must_use]
    pub fn for_cloud_area() -> Self {
        Self::new(CloudAreaPaneAdapter::new())
    }
}

/// Maps rows to cloud items: `high` is the higher boundary, `low` the lower.
/// The fill side follows the point style rule, `close >= open`.
///
/// Runs over every row so the visible range can move without re-extraction.
#[must_use]
pub fn fill_cloud_points<S: Sync>(rows: &[PlotRow<S>]) -> Vec<CloudAreaItem> {
    let to_item = |row: &PlotRow<S>| {
        CloudAreaItem::new(
            row.index,
            row.value.high,
            row.value.low,
            row.value.close >= row.value.open,
        )
    };

    #[cfg(feature = "parallel-projection")]
    {
        rows.par_iter().map(to_item).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        rows.iter().map(to_item).collect()
    }
}

/// Cloud variant of the pane view: one item list feeding a fill renderer and
/// two line renderers, painted in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudAreaPaneAdapter {
    renderer: CompositeRenderer,
}

impl Default for CloudAreaPaneAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudAreaPaneAdapter {
    #[must_use]
    pub fn new() -> Self {
        let mut renderer = CompositeRenderer::new();
        renderer.set_renderers([
            SeriesRenderer::CloudArea(PaneRendererCloudArea::new()),
            SeriesRenderer::Line(PaneRendererLine::new()),
            SeriesRenderer::Line(PaneRendererLine::new()),
        ]);
        Self { renderer }
    }
}

impl SeriesPaneAdapter for CloudAreaPaneAdapter {
    type Kind = CloudAreaSeries;
    type Item = CloudAreaItem;
    type Renderer = CompositeRenderer;

    fn renderer(&self) -> &CompositeRenderer {
        &self.renderer
    }

    fn fill_raw_points(&self, series: &Series<CloudAreaSeries>) -> Vec<CloudAreaItem> {
        fill_cloud_points(series.bars().rows())
    }

    fn convert_to_coordinates<T, P>(
        &self,
        items: &mut [CloudAreaItem],
        time_scale: &T,
        price_scale: &P,
        first_value: f64,
        range: ItemsRange,
    ) -> ChartResult<()>
    where
        T: TimeScaleCoordinates,
        P: PriceScaleCoordinates,
    {
        time_scale.indexes_to_coordinates(items, range)?;
        price_scale.cloud_points_to_coordinates(items, first_value, range)
    }

    fn prepare_renderer_data(
        &mut self,
        series: &Series<CloudAreaSeries>,
        items: &[CloudAreaItem],
        visible_range: Option<ItemsRange>,
        bar_spacing: f64,
    ) -> ChartResult<()> {
        let options = series.options();
        let [
            SeriesRenderer::CloudArea(fill),
            SeriesRenderer::Line(higher),
            SeriesRenderer::Line(lower),
        ] = self.renderer.renderers_mut()
        else {
            return Err(ChartError::InvalidData(
                "cloud composite must hold fill, higher and lower renderers".to_owned(),
            ));
        };

        fill.set_data(CloudAreaRendererData {
            items: items.to_vec(),
            positive_color: options.positive_color,
            negative_color: options.negative_color,
            visible_range,
            bar_width: bar_spacing,
        });
        higher.set_data(LineRendererData {
            items: items
                .iter()
                .map(|item| item.higher_line_item(options.higher_line_color))
                .collect(),
            line_style: options.higher_line_style,
            line_type: options.higher_line_type,
            line_width: options.higher_line_width,
            visible_range,
            bar_width: bar_spacing,
        });
        lower.set_data(LineRendererData {
            items: items
                .iter()
                .map(|item| item.lower_line_item(options.lower_line_color))
                .collect(),
            line_style: options.lower_line_style,
            line_type: options.lower_line_type,
            line_width: options.lower_line_width,
            visible_range,
            bar_width: bar_spacing,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CloudAreaPaneAdapter, fill_cloud_points};
    use crate::core::{CloudAreaRowStyle, PlotRow, PlotRowValue};
    use crate::render::SeriesRendererKind;

    #[test]
    fn extraction_maps_high_and_low_with_pending_coordinates() {
        let rows: Vec<PlotRow<CloudAreaRowStyle>> = (0..5)
            .map(|index| {
                let value = PlotRowValue::new(1.0, 10.0 + index as f64, 5.0, 2.0).expect("row");
                PlotRow::new(index, value)
            })
            .collect();
        let items = fill_cloud_points(&rows);
        assert_eq!(items.len(), rows.len());
        for (item, row) in items.iter().zip(&rows) {
            assert_eq!(item.time, row.index);
            assert_eq!(item.higher_price, row.value.high);
            assert_eq!(item.lower_price, row.value.low);
            assert!(item.is_above);
            assert!(item.is_pending());
        }
    }

    #[test]
    fn fill_side_follows_close_against_open() {
        let rows: Vec<PlotRow<CloudAreaRowStyle>> = vec![
            PlotRow::new(0, PlotRowValue::new(50.0, 60.0, 40.0, 45.0).expect("falling")),
            PlotRow::new(1, PlotRowValue::new(45.0, 60.0, 40.0, 45.0).expect("flat")),
        ];
        let items = fill_cloud_points(&rows);
        assert!(!items[0].is_above);
        assert!(items[1].is_above);
    }

    #[test]
    fn composite_is_registered_fill_first() {
        let adapter = CloudAreaPaneAdapter::new();
        assert_eq!(
            adapter.renderer.kinds(),
            vec![
                SeriesRendererKind::CloudArea,
                SeriesRendererKind::Line,
                SeriesRendererKind::Line,
            ]
        );
    }
}

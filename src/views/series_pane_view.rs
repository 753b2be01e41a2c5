//! Generic pane-view driver.
//!
//! A pane view turns the rows of one series into renderer packets in three
//! stages: extraction over the full row list, projection of the visible
//! slice through the scale collaborators, and packet preparation. Stages run
//! lazily on [`SeriesPaneView::renderer`] and only when an invalidation
//! trigger made them stale. The per-variant behavior lives in a
//! [`SeriesPaneAdapter`].

use std::fmt::Debug;

use tracing::{debug, warn};

use crate::core::{ItemsRange, PrecomputedBars, Series, SeriesKind, TimePointIndex};
use crate::error::{ChartError, ChartResult};
use crate::views::invalidation::{CacheStatus, InvalidationTrigger, InvalidationTriggers};
use crate::views::items::{CloudPricedItem, PricedItem, TimedItem};
use crate::views::visible_range::VisibleRangeSelector;

/// Horizontal collaborator: time index to pixel x.
pub trait TimeScaleCoordinates {
    /// Pixels between two neighbouring bars at the current zoom.
    fn bar_spacing(&self) -> f64;

    fn index_to_coordinate(&self, index: TimePointIndex) -> ChartResult<f64>;

    /// Writes x for every item inside `range`; other items are untouched.
    fn indexes_to_coordinates<I: TimedItem>(
        &self,
        items: &mut [I],
        range: ItemsRange,
    ) -> ChartResult<()> {
        let range = range.clamp_to_len(items.len());
        for item in &mut items[range.indices()] {
            let x = self.index_to_coordinate(item.time())?;
            item.set_x(x);
        }
        Ok(())
    }
}

/// Vertical collaborator: price to pixel y.
///
/// `first_value` is the reference price for relative display modes.
pub trait PriceScaleCoordinates {
    fn price_to_coordinate(&self, price: f64, first_value: f64) -> ChartResult<f64>;

    fn points_to_coordinates<I: PricedItem>(
        &self,
        items: &mut [I],
        first_value: f64,
        range: ItemsRange,
    ) -> ChartResult<()> {
        let range = range.clamp_to_len(items.len());
        for item in &mut items[range.indices()] {
            let y = self.price_to_coordinate(item.price(), first_value)?;
            item.set_y(y);
        }
        Ok(())
    }

    fn cloud_points_to_coordinates<I: CloudPricedItem>(
        &self,
        items: &mut [I],
        first_value: f64,
        range: ItemsRange,
    ) -> ChartResult<()> {
        let range = range.clamp_to_len(items.len());
        for item in &mut items[range.indices()] {
            let higher_y = self.price_to_coordinate(item.higher_price(), first_value)?;
            let lower_y = self.price_to_coordinate(item.lower_price(), first_value)?;
            item.set_higher_y(higher_y);
            item.set_lower_y(lower_y);
        }
        Ok(())
    }
}

/// Variant-specific half of a pane view.
pub trait SeriesPaneAdapter {
    type Kind: SeriesKind;
    type Item: TimedItem + Clone + Debug;
    type Renderer;

    fn renderer(&self) -> &Self::Renderer;

    /// Maps every row to one item with pending coordinates, in row order.
    fn fill_raw_points(&self, series: &Series<Self::Kind>) -> Vec<Self::Item>;

    fn convert_to_coordinates<T, P>(
        &self,
        items: &mut [Self::Item],
        time_scale: &T,
        price_scale: &P,
        first_value: f64,
        range: ItemsRange,
    ) -> ChartResult<()>
    where
        T: TimeScaleCoordinates,
        P: PriceScaleCoordinates;

    fn prepare_renderer_data(
        &mut self,
        series: &Series<Self::Kind>,
        items: &[Self::Item],
        visible_range: Option<ItemsRange>,
        bar_spacing: f64,
    ) -> ChartResult<()>;
}

/// Lazily recomputed pane view over one series.
#[derive(Debug)]
pub struct SeriesPaneView<A: SeriesPaneAdapter> {
    adapter: A,
    items: Vec<A::Item>,
    items_visible_range: Option<ItemsRange>,
    status: CacheStatus,
    pending: InvalidationTriggers,
}

impl<A: SeriesPaneAdapter> SeriesPaneView<A> {
    /// Creates a dirty view; the first [`Self::renderer`] call runs every stage.
    #[must_use]
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            items: Vec::new(),
            items_visible_range: None,
            status: CacheStatus::Dirty,
            pending: InvalidationTriggers::all(),
        }
    }

    pub fn invalidate(&mut self, trigger: InvalidationTrigger) {
        self.pending = self.pending.with_trigger(trigger);
        self.status = CacheStatus::Dirty;
    }

    #[must_use]
    pub fn status(&self) -> CacheStatus {
        self.status
    }

    #[must_use]
    pub fn pending_triggers(&self) -> InvalidationTriggers {
        self.pending
    }

    /// Items as of the last recomputation, one per row.
    #[must_use]
    pub fn items(&self) -> &[A::Item] {
        &self.items
    }

    #[must_use]
    pub fn items_visible_range(&self) -> Option<ItemsRange> {
        self.items_visible_range
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Brings the view up to date and returns its renderer.
    ///
    /// On error the view stays dirty with its triggers kept, so the next
    /// call retries every stale stage.
    pub fn renderer<T, P, V>(
        &mut self,
        series: &Series<A::Kind>,
        time_scale: &T,
        price_scale: &P,
        selector: &V,
    ) -> ChartResult<&A::Renderer>
    where
        T: TimeScaleCoordinates,
        P: PriceScaleCoordinates,
        V: VisibleRangeSelector,
    {
        if self.status != CacheStatus::Valid {
            self.make_valid(series, time_scale, price_scale, selector)?;
        }
        Ok(self.adapter.renderer())
    }

    /// Style of the bar at `bar_index`, for legend and crosshair overlays.
    ///
    /// # Panics
    ///
    /// Panics when the series has no row at `bar_index`.
    #[must_use]
    pub fn bar_style(
        &self,
        series: &Series<A::Kind>,
        bar_index: TimePointIndex,
        precomputed: Option<PrecomputedBars<'_, <A::Kind as SeriesKind>::RowStyle>>,
    ) -> <A::Kind as SeriesKind>::BarStyle {
        series.bar_style(bar_index, precomputed)
    }

    fn make_valid<T, P, V>(
        &mut self,
        series: &Series<A::Kind>,
        time_scale: &T,
        price_scale: &P,
        selector: &V,
    ) -> ChartResult<()>
    where
        T: TimeScaleCoordinates,
        P: PriceScaleCoordinates,
        V: VisibleRangeSelector,
    {
        self.status = CacheStatus::Recomputing;
        let triggers = self.pending;
        match self.recompute(triggers, series, time_scale, price_scale, selector) {
            Ok(()) => {
                self.pending = InvalidationTriggers::none();
                self.status = CacheStatus::Valid;
                Ok(())
            }
            Err(err) => {
                warn!(series_type = %series.series_type(), error = %err, "pane view recompute failed");
                self.status = CacheStatus::Dirty;
                Err(err)
            }
        }
    }

    fn recompute<T, P, V>(
        &mut self,
        triggers: InvalidationTriggers,
        series: &Series<A::Kind>,
        time_scale: &T,
        price_scale: &P,
        selector: &V,
    ) -> ChartResult<()>
    where
        T: TimeScaleCoordinates,
        P: PriceScaleCoordinates,
        V: VisibleRangeSelector,
    {
        if triggers.needs_extraction() {
            self.items = self.adapter.fill_raw_points(series);
        }
        if triggers.needs_projection() {
            self.items_visible_range = selector.visible_items_range(&self.items);
            if let Some(range) = self.items_visible_range {
                let first_value = first_visible_value(series, range)?;
                self.adapter.convert_to_coordinates(
                    &mut self.items,
                    time_scale,
                    price_scale,
                    first_value,
                    range,
                )?;
            }
        }
        self.adapter.prepare_renderer_data(
            series,
            &self.items,
            self.items_visible_range,
            time_scale.bar_spacing(),
        )?;
        debug!(
            series_type = %series.series_type(),
            item_count = self.items.len(),
            visible_range = ?self.items_visible_range,
            extracted = triggers.needs_extraction(),
            projected = triggers.needs_projection(),
            "recomputed pane view"
        );
        Ok(())
    }
}

/// Close of the first visible row, the base of relative price modes.
fn first_visible_value<K: SeriesKind>(series: &Series<K>, range: ItemsRange) -> ChartResult<f64> {
    series
        .bars()
        .rows()
        .get(range.from())
        .map(|row| row.value.close)
        .ok_or_else(|| {
            ChartError::InvalidData(format!(
                "visible range starts at {} but the series has {} rows",
                range.from(),
                series.bars().len()
            ))
        })
}

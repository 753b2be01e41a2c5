pub mod cloud_area_pane_view;
pub mod invalidation;
pub mod items;
pub mod series_pane_view;
pub mod visible_range;

pub use cloud_area_pane_view::{CloudAreaPaneAdapter, CloudAreaPaneView, fill_cloud_points};
pub use invalidation::{CacheStatus, InvalidationTrigger, InvalidationTriggers};
pub use items::{CloudAreaItem, CloudPricedItem, LineStrokeItem, PricedItem, TimedItem};
pub use series_pane_view::{
    PriceScaleCoordinates, SeriesPaneAdapter, SeriesPaneView, TimeScaleCoordinates,
};
pub use visible_range::{FixedItemsRange, TimeWindowSelector, VisibleRangeSelector};

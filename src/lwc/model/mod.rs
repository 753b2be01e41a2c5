//! Reference scale collaborators following the Lightweight Charts model.

mod price_scale;
mod time_scale;

pub use price_scale::{
    PriceRange, PriceScale, PriceScaleMargins, PriceScaleMode, PriceScaleOptions,
};
pub use time_scale::{LogicalRange, StrictRange, TimeScale, TimeScaleOptions};

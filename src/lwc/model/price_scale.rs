use crate::core::primitives::ensure_finite;
use crate::error::{ChartError, ChartResult};
use crate::views::PriceScaleCoordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceScaleMode {
    #[default]
    Normal,
    Logarithmic,
    Percentage,
    IndexedTo100,
}

/// Empty space above and below the series, as fractions of the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScaleMargins {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScaleOptions {
    pub mode: PriceScaleMode,
    pub invert_scale: bool,
    pub scale_margins: PriceScaleMargins,
}

impl Default for PriceScaleOptions {
    fn default() -> Self {
        Self {
            mode: PriceScaleMode::Normal,
            invert_scale: false,
            scale_margins: PriceScaleMargins {
                top: 0.2,
                bottom: 0.1,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min == self.max || self.min.is_nan() || self.max.is_nan()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LogFormula {
    logical_offset: f64,
    coord_offset: f64,
}

impl Default for LogFormula {
    fn default() -> Self {
        Self {
            logical_offset: 4.0,
            coord_offset: 0.0001,
        }
    }
}

impl LogFormula {
    /// Keeps small ranges resolvable after the log transform.
    fn for_price_range(range: PriceRange) -> Self {
        let default = Self::default();
        let diff = range.length().abs();
        if !(1e-15..1.0).contains(&diff) {
            return default;
        }
        let logical_offset = default.logical_offset + diff.log10().abs().ceil();
        Self {
            logical_offset,
            coord_offset: 1.0 / 10f64.powf(logical_offset),
        }
    }

    fn to_log(self, price: f64) -> f64 {
        let magnitude = price.abs();
        if magnitude < 1e-15 {
            return 0.0;
        }
        let value = (magnitude + self.coord_offset).log10() + self.logical_offset;
        if price < 0.0 { -value } else { value }
    }
}

/// Vertical scale: price to pixel y.
///
/// The price range is expressed in the units of the active mode: prices for
/// `Normal` and `Logarithmic`, percent for `Percentage`, index points for
/// `IndexedTo100`. Relative modes are measured against the first value handed
/// to [`PriceScale::price_to_coordinate`].
#[derive(Debug, Clone)]
pub struct PriceScale {
    options: PriceScaleOptions,
    height: f64,
    price_range: Option<PriceRange>,
    log_formula: LogFormula,
}

impl Default for PriceScale {
    fn default() -> Self {
        Self::new(PriceScaleOptions::default())
    }
}

impl PriceScale {
    #[must_use]
    pub fn new(options: PriceScaleOptions) -> Self {
        Self {
            options,
            height: 0.0,
            price_range: None,
            log_formula: LogFormula::default(),
        }
    }

    #[must_use]
    pub fn options(&self) -> PriceScaleOptions {
        self.options
    }

    /// Replaces the options; the price range is kept as-is.
    pub fn apply_options(&mut self, options: PriceScaleOptions) -> ChartResult<()> {
        let margins = options.scale_margins;
        if !(0.0..=1.0).contains(&margins.top) || !(0.0..=1.0).contains(&margins.bottom) {
            return Err(ChartError::InvalidData(
                "price scale margins must be in [0,1]".to_owned(),
            ));
        }
        if margins.top + margins.bottom > 1.0 {
            return Err(ChartError::InvalidData(
                "sum of price scale margins must be <= 1".to_owned(),
            ));
        }
        self.options = options;
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> PriceScaleMode {
        self.options.mode
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.options.invert_scale
    }

    pub fn set_height(&mut self, height: f64) -> ChartResult<()> {
        self.height = ensure_finite(height, "price scale height")?.max(0.0);
        Ok(())
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn internal_height(&self) -> f64 {
        self.height - self.top_margin_px() - self.bottom_margin_px()
    }

    /// Sets the visible range in mode units; logarithmic mode takes prices.
    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = match (self.options.mode, range) {
            (PriceScaleMode::Logarithmic, Some(range)) => {
                self.log_formula = LogFormula::for_price_range(range);
                Some(PriceRange::new(
                    self.log_formula.to_log(range.min()),
                    self.log_formula.to_log(range.max()),
                ))
            }
            _ => range,
        };
    }

    /// Visible range in transformed units.
    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height == 0.0 || self.price_range.is_none_or(PriceRange::is_empty)
    }

    pub fn price_to_coordinate(&self, price: f64, first_value: f64) -> ChartResult<f64> {
        let price = ensure_finite(price, "price")?;
        let logical = match self.options.mode {
            PriceScaleMode::Percentage => to_percent(price, first_value),
            PriceScaleMode::IndexedTo100 => to_indexed_to_100(price, first_value),
            PriceScaleMode::Normal | PriceScaleMode::Logarithmic => price,
        };
        let coordinate = self.logical_to_coordinate(logical)?;
        ensure_finite(coordinate, "price coordinate")
    }

    fn logical_to_coordinate(&self, mut logical: f64) -> ChartResult<f64> {
        if self.is_empty() {
            return Ok(0.0);
        }
        let range = self.range()?;
        if self.options.mode == PriceScaleMode::Logarithmic && logical != 0.0 {
            logical = self.log_formula.to_log(logical);
        }
        let inv_coordinate = self.bottom_margin_px()
            + (self.internal_height() - 1.0) * (logical - range.min()) / range.length();
        Ok(self.inverted_coordinate(inv_coordinate))
    }

    fn range(&self) -> ChartResult<PriceRange> {
        self.price_range
            .ok_or_else(|| ChartError::InvalidData("price range is not available".to_owned()))
    }

    fn inverted_coordinate(&self, coordinate: f64) -> f64 {
        if self.is_inverted() {
            coordinate
        } else {
            self.height - 1.0 - coordinate
        }
    }

    fn top_margin_px(&self) -> f64 {
        let margins = self.options.scale_margins;
        let fraction = if self.is_inverted() {
            margins.bottom
        } else {
            margins.top
        };
        fraction * self.height
    }

    fn bottom_margin_px(&self) -> f64 {
        let margins = self.options.scale_margins;
        let fraction = if self.is_inverted() {
            margins.top
        } else {
            margins.bottom
        };
        fraction * self.height
    }
}

impl PriceScaleCoordinates for PriceScale {
    fn price_to_coordinate(&self, price: f64, first_value: f64) -> ChartResult<f64> {
        PriceScale::price_to_coordinate(self, price, first_value)
    }
}

fn to_percent(value: f64, base_value: f64) -> f64 {
    let result = 100.0 * (value - base_value) / base_value;
    if base_value < 0.0 { -result } else { result }
}

fn to_indexed_to_100(value: f64, base_value: f64) -> f64 {
    let result = 100.0 * (value - base_value) / base_value + 100.0;
    if base_value < 0.0 { -result } else { result }
}

#[cfg(test)]
mod tests {
    use super::{PriceRange, PriceScale, PriceScaleMargins, PriceScaleMode, PriceScaleOptions};
    use approx::assert_relative_eq;

    fn scale(mode: PriceScaleMode, range: PriceRange) -> PriceScale {
        let mut price_scale = PriceScale::new(PriceScaleOptions {
            mode,
            ..PriceScaleOptions::default()
        });
        price_scale.set_height(500.0).expect("height");
        price_scale.set_price_range(Some(range));
        price_scale
    }

    #[test]
    fn higher_prices_map_higher_on_screen() {
        let price_scale = scale(PriceScaleMode::Normal, PriceRange::new(100.0, 200.0));
        let top = price_scale.price_to_coordinate(200.0, 100.0).expect("top");
        let bottom = price_scale.price_to_coordinate(100.0, 100.0).expect("bottom");
        assert!(top < bottom);
        // Margins: 20% top, 10% bottom of 500px.
        assert_relative_eq!(top, 100.0);
        assert_relative_eq!(bottom, 449.0);
    }

    #[test]
    fn inversion_flips_direction() {
        let mut price_scale = scale(PriceScaleMode::Normal, PriceRange::new(100.0, 200.0));
        price_scale
            .apply_options(PriceScaleOptions {
                invert_scale: true,
                ..PriceScaleOptions::default()
            })
            .expect("options");
        let top = price_scale.price_to_coordinate(200.0, 100.0).expect("top");
        let bottom = price_scale.price_to_coordinate(100.0, 100.0).expect("bottom");
        assert!(top > bottom);
    }

    #[test]
    fn relative_modes_project_against_first_value() {
        let normal = scale(PriceScaleMode::Normal, PriceRange::new(-10.0, 10.0));
        let percent = scale(PriceScaleMode::Percentage, PriceRange::new(-10.0, 10.0));
        assert_relative_eq!(
            percent.price_to_coordinate(105.0, 100.0).expect("percent"),
            normal.price_to_coordinate(5.0, 100.0).expect("normal"),
            epsilon = 1e-9
        );

        let normal = scale(PriceScaleMode::Normal, PriceRange::new(90.0, 110.0));
        let indexed = scale(PriceScaleMode::IndexedTo100, PriceRange::new(90.0, 110.0));
        assert_relative_eq!(
            indexed.price_to_coordinate(210.0, 200.0).expect("indexed"),
            normal.price_to_coordinate(105.0, 200.0).expect("normal"),
            epsilon = 1e-9
        );
    }

    #[test]
    fn logarithmic_mode_spaces_decades_evenly() {
        let price_scale = scale(PriceScaleMode::Logarithmic, PriceRange::new(10.0, 1000.0));
        let low = price_scale.price_to_coordinate(10.0, 10.0).expect("low");
        let middle = price_scale.price_to_coordinate(100.0, 10.0).expect("middle");
        let high = price_scale.price_to_coordinate(1000.0, 10.0).expect("high");
        assert!(high < middle && middle < low);
        assert_relative_eq!(middle, (low + high) / 2.0, epsilon = 1e-2);
    }

    #[test]
    fn zero_first_value_in_percentage_mode_is_rejected() {
        let price_scale = scale(PriceScaleMode::Percentage, PriceRange::new(-10.0, 10.0));
        assert!(price_scale.price_to_coordinate(5.0, 0.0).is_err());
    }

    #[test]
    fn invalid_margins_are_rejected() {
        let mut price_scale = PriceScale::default();
        let options = PriceScaleOptions {
            scale_margins: PriceScaleMargins {
                top: 0.7,
                bottom: 0.6,
            },
            ..PriceScaleOptions::default()
        };
        assert!(price_scale.apply_options(options).is_err());
    }
}

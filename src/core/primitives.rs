use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub(crate) fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{decimal_to_f64, ensure_finite};

    #[test]
    fn decimal_conversion_keeps_value() {
        let value = decimal_to_f64(Decimal::new(12_345, 2), "close").expect("convert");
        assert!((value - 123.45).abs() <= 1e-12);
    }

    #[test]
    fn ensure_finite_rejects_nan() {
        assert!(ensure_finite(f64::NAN, "open").is_err());
        assert!(ensure_finite(1.0, "open").is_ok());
    }
}

use thiserror::Error;

use crate::core::TimePointIndex;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A style query targeted a bar index with no row behind it.
    #[error("no bar exists at index {index}")]
    MissingBar { index: TimePointIndex },
}

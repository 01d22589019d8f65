use thiserror::Error;

/// Validation failures raised by the numeric helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("invalid shot sample: {0}")]
    InvalidSample(String),

    #[error("grouping radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("rolling window must be at least 1")]
    InvalidWindow,

    #[error("invalid chart data: {0}")]
    InvalidChart(String),
}

pub type MetricsResult<T> = std::result::Result<T, MetricsError>;

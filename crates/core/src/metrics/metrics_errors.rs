use thiserror::Error;

/// Errors raised while deriving metrics from the source tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A required table has no rows. Fatal for anything that depends on it.
    #[error("Dataset '{0}' has no rows")]
    EmptyDataset(String),

    /// A ratio's denominator is zero. Callers substitute a fallback
    /// (0% or "not applicable") instead of surfacing NaN.
    #[error("Division by zero while computing {0}")]
    DivisionByZero(String),

    /// A derived value falls outside the range `Decimal` can represent.
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(String),
}

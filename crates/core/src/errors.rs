//! Core error types for the treasury metrics engine.
//!
//! Load-time problems with the source tables surface as [`ValidationError`]s,
//! computation problems (empty tables, zero denominators) as [`MetricsError`]s.

use chrono::Month;
use thiserror::Error;

use crate::metrics::MetricsError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the treasury core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Metrics calculation failed: {0}")]
    Metrics(#[from] MetricsError),
}

/// Errors raised while loading the source tables.
///
/// Malformed tables are rejected eagerly so that no aggregate is ever computed
/// over them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Column '{column}' has {actual} values but {expected} months were given")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Month {} appears more than once", .0.name())]
    DuplicateMonth(Month),

    #[error("Month {} is out of calendar order (follows {})", .month.name(), .previous.name())]
    MonthOutOfOrder { month: Month, previous: Month },

    #[error("Negative volume {amount} for '{column}' in {}", .month.name())]
    NegativeVolume {
        column: String,
        month: Month,
        amount: rust_decimal::Decimal,
    },

    #[error("Partner '{0}' is declared more than once")]
    DuplicatePartner(String),

    #[error("No volume for partner '{partner}' in {}", .month.name())]
    MissingPartnerVolume { partner: String, month: Month },

    #[error("Unknown partner '{partner}' in {}", .month.name())]
    UnknownPartner { partner: String, month: Month },

    #[error("Reporting year needs 12 months, got {0}")]
    IncompleteYear(usize),

    #[error("Monthly and partner tables cover different months")]
    MonthMismatch,

    #[error("Column '{0}' sums beyond the representable range")]
    TotalOverflow(String),
}

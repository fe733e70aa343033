//! Dashboard view models.
//!
//! Plain values ready to be handed to a charting library: labels, series,
//! colors. No widget objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metrics::{PartnerSeries, VolumeIncomePoint};

/// A headline figure card, e.g. "CUMULATIVE VOLUME / USD 104,539,901.00".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub label: String,
    pub currency: String,
    pub value: Decimal,
    /// Formatted value with currency and thousands separators
    pub display: String,
}

/// Target progress gauge shown under the target gap card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetGauge {
    pub title: String,
    /// Progress in percent, rounded for display. None when the target is zero.
    pub value: Option<Decimal>,
    pub range_min: Decimal,
    pub range_max: Decimal,
    /// Threshold marker, drawn at the current progress
    pub threshold: Option<Decimal>,
    pub bar_color: String,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineCards {
    pub cumulative_volume: MetricCard,
    pub total_income: MetricCard,
    pub target_gap: MetricCard,
    pub target_progress: TargetGauge,
}

/// Volume trend line over income bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformanceChart {
    pub months: Vec<String>,
    pub volume: Vec<Decimal>,
    pub volume_color: String,
    pub income: Vec<Decimal>,
    /// One color per income bar: green for gains, red for losses
    pub income_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketShareSlice {
    pub partner: String,
    /// Percentage of total volume, rounded for display
    pub percentage: Decimal,
    pub color: String,
    /// Offset from the pie center; non-zero only for the dominant partner
    pub pull: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketShareChart {
    pub slices: Vec<MarketShareSlice>,
    /// None when no partner has any volume
    pub dominant_partner: Option<String>,
}

/// Stacked monthly volume per partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDistributionChart {
    pub months: Vec<String>,
    pub series: Vec<PartnerSeries>,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub cards: HeadlineCards,
    pub monthly_performance: MonthlyPerformanceChart,
    pub market_share: MarketShareChart,
    pub partner_distribution: PartnerDistributionChart,
    pub volume_income: Vec<VolumeIncomePoint>,
}

//! Service exposing the derived metrics of one reporting year.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::tables::{PartnerId, TreasuryDataset};

use super::metrics_calculator::{
    dominant_partner, headline_metrics, market_share_or_zero, monthly_performance,
    partner_totals, partner_volume_series, volume_income_series,
};
use super::{
    HeadlineMetrics, MarketShares, MonthlyPerformance, PartnerSeries, PartnerTotal,
    VolumeIncomePoint,
};

/// Trait for the metrics service.
pub trait MetricsServiceTrait: Send + Sync {
    fn reporting_year(&self) -> i32;
    fn annual_target(&self) -> Decimal;
    fn get_headline_metrics(&self) -> Result<HeadlineMetrics>;
    /// Market shares, 0% per partner when there is no volume at all.
    fn get_market_shares(&self) -> Result<MarketShares>;
    fn get_dominant_partner(&self) -> Result<PartnerId>;
    fn get_partner_totals(&self) -> Vec<PartnerTotal>;
    fn get_partner_volume_series(&self) -> Vec<PartnerSeries>;
    fn get_monthly_performance(&self) -> MonthlyPerformance;
    fn get_volume_income_series(&self) -> Vec<VolumeIncomePoint>;
}

/// Metrics over an injected, immutable dataset.
///
/// Nothing is cached: the dataset never changes, so every call recomputes the
/// same values.
pub struct MetricsService {
    dataset: Arc<TreasuryDataset>,
    annual_target: Decimal,
}

impl MetricsService {
    pub fn new(dataset: Arc<TreasuryDataset>, annual_target: Decimal) -> Self {
        debug!(
            "Metrics service for {} with annual target {}",
            dataset.reporting_year, annual_target
        );
        MetricsService {
            dataset,
            annual_target,
        }
    }
}

impl MetricsServiceTrait for MetricsService {
    fn reporting_year(&self) -> i32 {
        self.dataset.reporting_year
    }

    fn annual_target(&self) -> Decimal {
        self.annual_target
    }

    fn get_headline_metrics(&self) -> Result<HeadlineMetrics> {
        headline_metrics(&self.dataset, self.annual_target)
    }

    fn get_market_shares(&self) -> Result<MarketShares> {
        market_share_or_zero(&self.dataset.partners)
    }

    fn get_dominant_partner(&self) -> Result<PartnerId> {
        dominant_partner(&self.get_market_shares()?)
    }

    fn get_partner_totals(&self) -> Vec<PartnerTotal> {
        partner_totals(&self.dataset.partners)
    }

    fn get_partner_volume_series(&self) -> Vec<PartnerSeries> {
        partner_volume_series(&self.dataset.partners)
    }

    fn get_monthly_performance(&self) -> MonthlyPerformance {
        monthly_performance(&self.dataset.monthly)
    }

    fn get_volume_income_series(&self) -> Vec<VolumeIncomePoint> {
        volume_income_series(&self.dataset.monthly)
    }
}

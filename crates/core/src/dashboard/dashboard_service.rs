//! Maps metrics onto the dashboard view model.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{
    DOMINANT_SLICE_PULL, INCOME_CURRENCY, NEGATIVE_COLOR, PARTNER_PALETTE, POSITIVE_COLOR,
    PRIMARY_COLOR, VOLUME_CURRENCY,
};
use crate::errors::{Error, Result};
use crate::metrics::{
    HeadlineMetrics, IncomeSignClass, MarketShares, MetricsError, MetricsServiceTrait,
    MonthlyPerformance,
};
use crate::utils::{format_money, round_for_display};

use super::{
    Dashboard, HeadlineCards, MarketShareChart, MarketShareSlice, MetricCard,
    MonthlyPerformanceChart, PartnerDistributionChart, TargetGauge,
};

/// Trait for the dashboard service.
pub trait DashboardServiceTrait: Send + Sync {
    fn get_dashboard(&self) -> Result<Dashboard>;
}

pub struct DashboardService {
    metrics_service: Arc<dyn MetricsServiceTrait>,
}

impl DashboardService {
    pub fn new(metrics_service: Arc<dyn MetricsServiceTrait>) -> Self {
        Self { metrics_service }
    }

    fn build_cards(headline: &HeadlineMetrics) -> HeadlineCards {
        let progress = headline.target_progress.map(round_for_display);

        HeadlineCards {
            cumulative_volume: metric_card(
                "CUMULATIVE VOLUME",
                VOLUME_CURRENCY,
                headline.cumulative_volume,
            ),
            total_income: metric_card("TOTAL FX INCOME", INCOME_CURRENCY, headline.total_income),
            target_gap: metric_card("ANNUAL TARGET GAP", VOLUME_CURRENCY, headline.target_gap),
            target_progress: TargetGauge {
                title: "Target Progress".to_string(),
                value: progress,
                range_min: Decimal::ZERO,
                range_max: dec!(100),
                threshold: progress,
                bar_color: PRIMARY_COLOR.to_string(),
                suffix: "%".to_string(),
            },
        }
    }

    fn build_monthly_chart(performance: MonthlyPerformance) -> MonthlyPerformanceChart {
        let income_colors = performance
            .income_classes
            .iter()
            .map(|class| income_color(*class).to_string())
            .collect();

        MonthlyPerformanceChart {
            months: performance.months,
            volume: performance.fx_volume,
            volume_color: PRIMARY_COLOR.to_string(),
            income: performance.fx_income,
            income_colors,
        }
    }

    /// Slices follow partner order; the dominant partner's slice is pulled out
    /// unless nobody has any volume.
    fn build_market_share_chart(
        shares: &MarketShares,
        dominant: Option<&str>,
    ) -> MarketShareChart {
        let dominant = dominant.filter(|_| !shares.total().is_zero());

        let slices = shares
            .iter()
            .enumerate()
            .map(|(idx, share)| {
                let is_dominant = dominant == Some(share.partner.as_str());
                MarketShareSlice {
                    partner: share.partner.to_string(),
                    percentage: round_for_display(share.percentage),
                    color: PARTNER_PALETTE[idx % PARTNER_PALETTE.len()].to_string(),
                    pull: if is_dominant { DOMINANT_SLICE_PULL } else { 0.0 },
                }
            })
            .collect();

        MarketShareChart {
            slices,
            dominant_partner: dominant.map(str::to_string),
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self) -> Result<Dashboard> {
        let metrics = &self.metrics_service;
        let year = metrics.reporting_year();
        debug!("Building dashboard for {}", year);

        let headline = metrics.get_headline_metrics()?;
        let shares = metrics.get_market_shares()?;
        // A table that declares no partners draws an empty pie.
        let dominant = match metrics.get_dominant_partner() {
            Ok(partner) => Some(partner),
            Err(Error::Metrics(MetricsError::EmptyDataset(_))) if shares.is_empty() => None,
            Err(e) => return Err(e),
        };
        let performance = metrics.get_monthly_performance();
        let months = performance.months.clone();

        Ok(Dashboard {
            title: format!("Treasury Department Analysis {}", year),
            cards: Self::build_cards(&headline),
            monthly_performance: Self::build_monthly_chart(performance),
            market_share: Self::build_market_share_chart(&shares, dominant.as_ref().map(|p| p.as_str())),
            partner_distribution: PartnerDistributionChart {
                months,
                series: metrics.get_partner_volume_series(),
            },
            volume_income: metrics.get_volume_income_series(),
        })
    }
}

fn metric_card(label: &str, currency: &str, value: Decimal) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        currency: currency.to_string(),
        value,
        display: format_money(currency, value),
    }
}

/// Bar color of a month's income.
pub fn income_color(class: IncomeSignClass) -> &'static str {
    match class {
        IncomeSignClass::Positive => POSITIVE_COLOR,
        IncomeSignClass::Negative => NEGATIVE_COLOR,
    }
}

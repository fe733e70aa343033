use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Error, Result};
use crate::tables::{MonthlyTable, PartnerId, PartnerTable, TreasuryDataset};
use crate::utils::month_label;

use super::{
    HeadlineMetrics, IncomeSignClass, MarketShares, MetricsError, MonthlyPerformance,
    PartnerSeries, PartnerShare, PartnerTotal, VolumeIncomePoint,
};

const ONE_HUNDRED: Decimal = dec!(100);

/// Sum of every partner volume over every month.
///
/// Fails with `EmptyDataset` when the table has no rows.
pub fn total_volume(table: &PartnerTable) -> Result<Decimal> {
    if table.is_empty() {
        return Err(MetricsError::EmptyDataset("partner volumes".to_string()).into());
    }

    Ok(table
        .records()
        .iter()
        .flat_map(|record| record.volumes.values())
        .sum())
}

/// Yearly volume per partner, in canonical partner order.
pub fn partner_totals(table: &PartnerTable) -> Vec<PartnerTotal> {
    table
        .partners()
        .iter()
        .map(|partner| PartnerTotal {
            partner: partner.clone(),
            total: table.column(partner).into_iter().sum(),
        })
        .collect()
}

/// Each partner's share of total volume, in percent.
///
/// Fails with `EmptyDataset` on an empty table and with `DivisionByZero`
/// when every volume is zero.
pub fn market_share(table: &PartnerTable) -> Result<MarketShares> {
    let total = total_volume(table)?;
    if total.is_zero() {
        return Err(MetricsError::DivisionByZero("market share".to_string()).into());
    }

    let shares: Vec<PartnerShare> = partner_totals(table)
        .into_iter()
        .map(|PartnerTotal { partner, total: partner_total }| PartnerShare {
            partner,
            percentage: partner_total / total * ONE_HUNDRED,
        })
        .collect();

    debug!(
        "Computed market share for {} partners over total volume {}",
        shares.len(),
        total
    );
    Ok(MarketShares::new(shares))
}

/// Like [`market_share`], but substitutes 0% per partner when total volume is zero.
/// An empty table is still an error.
pub fn market_share_or_zero(table: &PartnerTable) -> Result<MarketShares> {
    match market_share(table) {
        Err(Error::Metrics(MetricsError::DivisionByZero(what))) => {
            warn!(
                "Total partner volume is zero, reporting 0% {} for every partner",
                what
            );
            Ok(MarketShares::zeroed(table.partners()))
        }
        other => other,
    }
}

/// Partner with the largest share. Ties go to the partner that comes first
/// in canonical order.
pub fn dominant_partner(shares: &MarketShares) -> Result<PartnerId> {
    let mut best: Option<&PartnerShare> = None;
    for share in shares {
        match best {
            Some(current) if share.percentage <= current.percentage => {}
            _ => best = Some(share),
        }
    }

    best.map(|share| share.partner.clone())
        .ok_or_else(|| MetricsError::EmptyDataset("market shares".to_string()).into())
}

/// `(volume, income, month)` per month, in table order.
pub fn volume_income_series(table: &MonthlyTable) -> Vec<VolumeIncomePoint> {
    table
        .iter()
        .map(|record| VolumeIncomePoint {
            fx_volume: record.fx_volume,
            fx_income: record.fx_income,
            month: month_label(record.month),
        })
        .collect()
}

/// Sign class of each month's income, in table order.
pub fn income_color_class(table: &MonthlyTable) -> Vec<IncomeSignClass> {
    table
        .iter()
        .map(|record| IncomeSignClass::of(record.fx_income))
        .collect()
}

/// `achieved / target * 100`. Values above 100 are returned as-is.
///
/// A percentage too large for `Decimal` fails with `Overflow`.
pub fn progress_to_target(achieved: Decimal, target: Decimal) -> Result<Decimal> {
    if target.is_zero() {
        return Err(MetricsError::DivisionByZero("progress to target".to_string()).into());
    }
    achieved
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .ok_or_else(|| MetricsError::Overflow("progress to target".to_string()).into())
}

/// Amount still missing to reach the target; negative once it is exceeded.
pub fn target_gap(achieved: Decimal, target: Decimal) -> Decimal {
    target - achieved
}

pub fn total_fx_volume(table: &MonthlyTable) -> Result<Decimal> {
    if table.is_empty() {
        return Err(MetricsError::EmptyDataset("monthly FX volume".to_string()).into());
    }
    Ok(table.iter().map(|record| record.fx_volume).sum())
}

pub fn total_fx_income(table: &MonthlyTable) -> Result<Decimal> {
    if table.is_empty() {
        return Err(MetricsError::EmptyDataset("monthly FX income".to_string()).into());
    }
    Ok(table.iter().map(|record| record.fx_income).sum())
}

/// Monthly volume of each partner, for the stacked distribution chart.
pub fn partner_volume_series(table: &PartnerTable) -> Vec<PartnerSeries> {
    table
        .partners()
        .iter()
        .map(|partner| PartnerSeries {
            partner: partner.clone(),
            values: table.column(partner),
        })
        .collect()
}

pub fn monthly_performance(table: &MonthlyTable) -> MonthlyPerformance {
    MonthlyPerformance {
        months: table.iter().map(|record| month_label(record.month)).collect(),
        fx_volume: table.iter().map(|record| record.fx_volume).collect(),
        fx_income: table.iter().map(|record| record.fx_income).collect(),
        income_classes: income_color_class(table),
    }
}

/// Cumulative volume, total income and progress against `annual_target`.
///
/// A zero target, or one so small the percentage overflows, leaves
/// `target_progress` empty instead of failing.
pub fn headline_metrics(dataset: &TreasuryDataset, annual_target: Decimal) -> Result<HeadlineMetrics> {
    let cumulative_volume = total_fx_volume(&dataset.monthly)?;
    let total_income = total_fx_income(&dataset.monthly)?;

    let target_progress = match progress_to_target(cumulative_volume, annual_target) {
        Ok(progress) => Some(progress),
        Err(Error::Metrics(MetricsError::DivisionByZero(_))) => {
            warn!("Annual target is zero, target progress is not applicable");
            None
        }
        Err(Error::Metrics(MetricsError::Overflow(_))) => {
            warn!(
                "Progress of {} against target {} is out of range",
                cumulative_volume, annual_target
            );
            None
        }
        Err(e) => return Err(e),
    };

    Ok(HeadlineMetrics {
        cumulative_volume,
        total_income,
        annual_target,
        target_gap: target_gap(cumulative_volume, annual_target),
        target_progress,
    })
}

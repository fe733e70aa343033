//! Derived metric models consumed by the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tables::PartnerId;

/// A partner's share of total volume, in percent (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerShare {
    pub partner: PartnerId,
    pub percentage: Decimal,
}

/// Market share per partner, in canonical partner order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketShares(Vec<PartnerShare>);

impl MarketShares {
    pub fn new(shares: Vec<PartnerShare>) -> Self {
        MarketShares(shares)
    }

    /// 0% for every partner. Used when total volume is zero.
    pub fn zeroed(partners: &[PartnerId]) -> Self {
        MarketShares(
            partners
                .iter()
                .map(|partner| PartnerShare {
                    partner: partner.clone(),
                    percentage: Decimal::ZERO,
                })
                .collect(),
        )
    }

    pub fn get(&self, partner: &PartnerId) -> Option<Decimal> {
        self.0
            .iter()
            .find(|share| &share.partner == partner)
            .map(|share| share.percentage)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartnerShare> {
        self.0.iter()
    }

    /// Sum of all shares; 100 up to rounding unless zeroed.
    pub fn total(&self) -> Decimal {
        self.0.iter().map(|share| share.percentage).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a MarketShares {
    type Item = &'a PartnerShare;
    type IntoIter = std::slice::Iter<'a, PartnerShare>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sign of a month's FX income, used to pick its bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeSignClass {
    Positive,
    Negative,
}

impl IncomeSignClass {
    /// Zero income counts as positive.
    pub fn of(amount: Decimal) -> Self {
        if amount < Decimal::ZERO {
            IncomeSignClass::Negative
        } else {
            IncomeSignClass::Positive
        }
    }
}

/// One month of the volume-vs-income scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeIncomePoint {
    pub fx_volume: Decimal,
    pub fx_income: Decimal,
    pub month: String,
}

/// Yearly volume of one partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerTotal {
    pub partner: PartnerId,
    pub total: Decimal,
}

/// Monthly volumes of one partner, aligned with the table's months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSeries {
    pub partner: PartnerId,
    pub values: Vec<Decimal>,
}

/// Monthly volume and income columns with their sign classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    pub months: Vec<String>,
    pub fx_volume: Vec<Decimal>,
    pub fx_income: Vec<Decimal>,
    pub income_classes: Vec<IncomeSignClass>,
}

/// Headline figures of the reporting year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineMetrics {
    /// Sum of monthly FX volume
    pub cumulative_volume: Decimal,
    /// Sum of monthly FX income
    pub total_income: Decimal,
    pub annual_target: Decimal,
    /// Target minus cumulative volume; negative once the target is exceeded
    pub target_gap: Decimal,
    /// Percent of target achieved, not clamped. None when the target is zero.
    pub target_progress: Option<Decimal>,
}

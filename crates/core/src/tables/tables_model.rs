//! Source tables for the treasury dashboard.
//!
//! Both tables are validated on construction and immutable afterwards. Every
//! metric is derived from them on demand.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::Month;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;
use crate::errors::{Error, Result, ValidationError};

/// Identifier of a remittance partner, e.g. `"LEMFI"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerId(String);

impl PartnerId {
    pub fn new(id: impl Into<String>) -> Self {
        PartnerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartnerId {
    fn from(id: &str) -> Self {
        PartnerId::new(id)
    }
}

/// FX volume and income for a single month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRecord {
    pub month: Month,
    /// Volume transacted, never negative
    pub fx_volume: Decimal,
    /// Net income; negative for loss-making months
    pub fx_income: Decimal,
}

impl MonthlyRecord {
    pub fn new(month: Month, fx_volume: Decimal, fx_income: Decimal) -> Self {
        Self {
            month,
            fx_volume,
            fx_income,
        }
    }
}

/// Volume per partner for a single month.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerMonthlyRecord {
    pub month: Month,
    pub volumes: BTreeMap<PartnerId, Decimal>,
}

impl PartnerMonthlyRecord {
    pub fn new(month: Month, volumes: BTreeMap<PartnerId, Decimal>) -> Self {
        Self { month, volumes }
    }

    pub fn volume(&self, partner: &PartnerId) -> Option<Decimal> {
        self.volumes.get(partner).copied()
    }
}

/// Monthly FX volume and income, one row per month in calendar order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlyTable {
    records: Vec<MonthlyRecord>,
}

impl MonthlyTable {
    /// Builds the table, rejecting duplicate or unordered months, negative
    /// volumes, and columns whose total does not fit in a `Decimal`.
    pub fn new(records: Vec<MonthlyRecord>) -> Result<Self> {
        validate_month_order(records.iter().map(|r| r.month))?;

        for record in &records {
            if record.fx_volume < Decimal::ZERO {
                return Err(ValidationError::NegativeVolume {
                    column: "fx_volume".to_string(),
                    month: record.month,
                    amount: record.fx_volume,
                }
                .into());
            }
        }
        check_sum("fx_volume", records.iter().map(|r| &r.fx_volume))?;
        check_sum("fx_income", records.iter().map(|r| &r.fx_income))?;

        debug!("Loaded monthly table with {} rows", records.len());
        Ok(Self { records })
    }

    /// Builds the table from parallel columns, the way the data is usually
    /// written down (one list of months, one list per measure).
    pub fn from_columns(months: &[Month], volumes: &[Decimal], incomes: &[Decimal]) -> Result<Self> {
        check_column_length("fx_volume", months.len(), volumes.len())?;
        check_column_length("fx_income", months.len(), incomes.len())?;

        let records = months
            .iter()
            .zip(volumes.iter().zip(incomes.iter()))
            .map(|(month, (volume, income))| MonthlyRecord::new(*month, *volume, *income))
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthlyRecord> {
        self.records.iter()
    }

    pub fn months(&self) -> Vec<Month> {
        self.records.iter().map(|r| r.month).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Monthly volume per partner.
///
/// `partners` fixes the canonical partner ordering used by every ordered output
/// derived from this table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartnerTable {
    partners: Vec<PartnerId>,
    records: Vec<PartnerMonthlyRecord>,
}

impl PartnerTable {
    /// Builds the table. Every record must carry a volume for exactly the
    /// declared partners.
    pub fn new(partners: Vec<PartnerId>, records: Vec<PartnerMonthlyRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for partner in &partners {
            if !seen.insert(partner) {
                return Err(ValidationError::DuplicatePartner(partner.to_string()).into());
            }
        }

        validate_month_order(records.iter().map(|r| r.month))?;

        for record in &records {
            for partner in &partners {
                match record.volume(partner) {
                    None => {
                        return Err(ValidationError::MissingPartnerVolume {
                            partner: partner.to_string(),
                            month: record.month,
                        }
                        .into());
                    }
                    Some(amount) if amount < Decimal::ZERO => {
                        return Err(ValidationError::NegativeVolume {
                            column: partner.to_string(),
                            month: record.month,
                            amount,
                        }
                        .into());
                    }
                    Some(_) => {}
                }
            }

            if let Some(unknown) = record.volumes.keys().find(|p| !seen.contains(p)) {
                return Err(ValidationError::UnknownPartner {
                    partner: unknown.to_string(),
                    month: record.month,
                }
                .into());
            }
        }
        // Volumes are non-negative, so a representable grand total bounds every partial sum.
        check_sum(
            "partner volumes",
            records.iter().flat_map(|r| r.volumes.values()),
        )?;

        debug!(
            "Loaded partner table with {} partners over {} months",
            partners.len(),
            records.len()
        );
        Ok(Self { partners, records })
    }

    /// Builds the table from a month column plus one volume column per partner.
    /// Column order becomes the canonical partner order.
    pub fn from_columns(months: &[Month], columns: Vec<(PartnerId, Vec<Decimal>)>) -> Result<Self> {
        for (partner, values) in &columns {
            check_column_length(partner.as_str(), months.len(), values.len())?;
        }

        let records = months
            .iter()
            .enumerate()
            .map(|(idx, month)| {
                let volumes = columns
                    .iter()
                    .map(|(partner, values)| (partner.clone(), values[idx]))
                    .collect();
                PartnerMonthlyRecord::new(*month, volumes)
            })
            .collect();
        let partners = columns.into_iter().map(|(partner, _)| partner).collect();

        Self::new(partners, records)
    }

    pub fn partners(&self) -> &[PartnerId] {
        &self.partners
    }

    pub fn records(&self) -> &[PartnerMonthlyRecord] {
        &self.records
    }

    pub fn months(&self) -> Vec<Month> {
        self.records.iter().map(|r| r.month).collect()
    }

    /// Volumes of one partner in table order. Empty for an unknown partner.
    pub fn column(&self, partner: &PartnerId) -> Vec<Decimal> {
        self.records
            .iter()
            .filter_map(|r| r.volume(partner))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A validated reporting year: both tables covering the same twelve months.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasuryDataset {
    pub reporting_year: i32,
    pub monthly: MonthlyTable,
    pub partners: PartnerTable,
}

impl TreasuryDataset {
    pub fn new(reporting_year: i32, monthly: MonthlyTable, partners: PartnerTable) -> Result<Self> {
        if monthly.months() != partners.months() {
            return Err(ValidationError::MonthMismatch.into());
        }
        if monthly.len() != MONTHS_PER_YEAR {
            return Err(ValidationError::IncompleteYear(monthly.len()).into());
        }

        Ok(Self {
            reporting_year,
            monthly,
            partners,
        })
    }
}

fn check_column_length(column: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::Validation(ValidationError::ColumnLengthMismatch {
            column: column.to_string(),
            expected,
            actual,
        }));
    }
    Ok(())
}

/// Rejects a column whose running total would overflow `Decimal`.
fn check_sum<'a>(column: &str, mut values: impl Iterator<Item = &'a Decimal>) -> Result<()> {
    values
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(*value))
        .map(|_| ())
        .ok_or_else(|| ValidationError::TotalOverflow(column.to_string()).into())
}

/// Months must be unique and strictly increasing in calendar order.
fn validate_month_order(months: impl Iterator<Item = Month>) -> Result<()> {
    let mut seen = [false; MONTHS_PER_YEAR];
    let mut previous: Option<Month> = None;

    for month in months {
        let idx = month.number_from_month() as usize - 1;
        if seen[idx] {
            return Err(ValidationError::DuplicateMonth(month).into());
        }
        seen[idx] = true;

        if let Some(prev) = previous {
            if month.number_from_month() < prev.number_from_month() {
                return Err(ValidationError::MonthOutOfOrder {
                    month,
                    previous: prev,
                }
                .into());
            }
        }
        previous = Some(month);
    }
    Ok(())
}

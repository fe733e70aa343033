//! The 2024 treasury reporting year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::utils::CALENDAR_MONTHS;

use super::{MonthlyTable, PartnerId, PartnerTable, TreasuryDataset};

pub const REFERENCE_YEAR: i32 = 2024;

/// Annual volume target (USD) of the reference year.
pub const REFERENCE_ANNUAL_TARGET: Decimal = dec!(500000000);

pub const LEMFI: &str = "LEMFI";
pub const NALA: &str = "NALA";
pub const DLOCAL: &str = "DLOCAL";
pub const STARKS: &str = "STARKS";

const FX_VOLUME: [Decimal; 12] = [
    dec!(10695001.00),
    dec!(6050000.00),
    dec!(12668000.00),
    dec!(9250000.00),
    dec!(8050000.00),
    dec!(7900000.00),
    dec!(6250000.00),
    dec!(12204100.00),
    dec!(8112800.00),
    dec!(23360000.00),
    dec!(16290055.00),
    dec!(7830000.00),
];

const FX_INCOME: [Decimal; 12] = [
    dec!(8381251.00),
    dec!(4884250.00),
    dec!(3301000.00),
    dec!(5382500.00),
    dec!(2225000.00),
    dec!(-30500.00),
    dec!(925000.00),
    dec!(779850.00),
    dec!(536840.00),
    dec!(-319150.00),
    dec!(-675202.25),
    dec!(-861182.00),
];

const LEMFI_VOLUME: [Decimal; 12] = [
    dec!(8500000.00),
    dec!(4750000.00),
    dec!(10100000.00),
    dec!(7150000.00),
    dec!(6250000.00),
    dec!(7500000.00),
    dec!(6250000.00),
    dec!(10149900.00),
    dec!(6950000.00),
    dec!(15250000.00),
    dec!(14950000.00),
    dec!(6950000.00),
];

const NALA_VOLUME: [Decimal; 12] = [
    dec!(1995000.00),
    dec!(500000.00),
    dec!(2568000.00),
    dec!(18000000.00),
    dec!(1300000.00),
    dec!(400000.00),
    dec!(0.00),
    dec!(1995000.00),
    dec!(100000.00),
    dec!(3260000.00),
    dec!(710000.00),
    dec!(0.00),
];

// DLOCAL onboarded in September, STARKS in December.
const DLOCAL_VOLUME: [Decimal; 12] = [
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(1000000.00),
    dec!(1150000.00),
    dec!(470000.00),
    dec!(0.00),
];

const STARKS_VOLUME: [Decimal; 12] = [
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(0.00),
    dec!(300000.00),
];

pub fn monthly_table_2024() -> Result<MonthlyTable> {
    MonthlyTable::from_columns(&CALENDAR_MONTHS, &FX_VOLUME, &FX_INCOME)
}

pub fn partner_table_2024() -> Result<PartnerTable> {
    PartnerTable::from_columns(
        &CALENDAR_MONTHS,
        vec![
            (PartnerId::from(LEMFI), LEMFI_VOLUME.to_vec()),
            (PartnerId::from(NALA), NALA_VOLUME.to_vec()),
            (PartnerId::from(DLOCAL), DLOCAL_VOLUME.to_vec()),
            (PartnerId::from(STARKS), STARKS_VOLUME.to_vec()),
        ],
    )
}

/// The complete, validated 2024 reporting year.
pub fn dataset_2024() -> Result<TreasuryDataset> {
    TreasuryDataset::new(REFERENCE_YEAR, monthly_table_2024()?, partner_table_2024()?)
}

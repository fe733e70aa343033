//! Property-based integration tests for the metrics engine.
//!
//! These tests verify that the aggregation invariants hold across arbitrary
//! valid partner tables, using the `proptest` crate for case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use treasury_core::metrics::{
    dominant_partner, income_color_class, market_share, progress_to_target, total_volume,
    IncomeSignClass, MetricsError,
};
use treasury_core::tables::{MonthlyTable, PartnerId, PartnerMonthlyRecord, PartnerTable};
use treasury_core::utils::CALENDAR_MONTHS;
use treasury_core::Error;

// =============================================================================
// Generators
// =============================================================================

/// Generates a non-negative volume with cent precision.
fn arb_volume() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        1 => Just(Decimal::ZERO),
        4 => (0i64..10_000_000_000).prop_map(|cents| Decimal::new(cents, 2)),
    ]
}

/// Generates a signed income with cent precision.
fn arb_income() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a full-year partner table with 1 to 6 partners.
fn arb_partner_table() -> impl Strategy<Value = PartnerTable> {
    (1usize..=6)
        .prop_flat_map(|count| {
            proptest::collection::vec(proptest::collection::vec(arb_volume(), 12), count)
        })
        .prop_map(|columns| {
            let columns = columns
                .into_iter()
                .enumerate()
                .map(|(idx, values)| (PartnerId::new(format!("P{}", idx)), values))
                .collect();
            PartnerTable::from_columns(&CALENDAR_MONTHS, columns).unwrap()
        })
}

/// Generates a full-year monthly table.
fn arb_monthly_table() -> impl Strategy<Value = MonthlyTable> {
    (
        proptest::collection::vec(arb_volume(), 12),
        proptest::collection::vec(arb_income(), 12),
    )
        .prop_map(|(volumes, incomes)| {
            MonthlyTable::from_columns(&CALENDAR_MONTHS, &volumes, &incomes).unwrap()
        })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Market shares sum to 100 whenever there is any volume.
    #[test]
    fn prop_market_shares_sum_to_one_hundred(table in arb_partner_table()) {
        let total = total_volume(&table).unwrap();
        prop_assume!(!total.is_zero());

        let shares = market_share(&table).unwrap();
        prop_assert!(
            (shares.total() - dec!(100)).abs() < dec!(0.000001),
            "shares summed to {}",
            shares.total()
        );
    }

    /// No partner ever has a negative share.
    #[test]
    fn prop_market_shares_are_non_negative(table in arb_partner_table()) {
        if let Ok(shares) = market_share(&table) {
            for share in shares.iter() {
                prop_assert!(share.percentage >= Decimal::ZERO);
            }
        }
    }

    /// Zero total volume is reported, never turned into NaN-like output.
    #[test]
    fn prop_zero_volume_is_division_by_zero(table in arb_partner_table()) {
        let total = total_volume(&table).unwrap();
        let result = market_share(&table);
        if total.is_zero() {
            prop_assert!(matches!(
                result,
                Err(Error::Metrics(MetricsError::DivisionByZero(_)))
            ));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Total volume does not depend on month order.
    #[test]
    fn prop_total_volume_ignores_month_order(
        table in arb_partner_table(),
        seed in any::<u64>()
    ) {
        let mut records: Vec<PartnerMonthlyRecord> = table.records().to_vec();
        let len = records.len();
        records.rotate_left((seed as usize) % len);
        records.reverse();

        let expected: Decimal = records
            .iter()
            .flat_map(|r| r.volumes.values())
            .sum();
        prop_assert_eq!(total_volume(&table).unwrap(), expected);
    }

    /// The dominant partner holds the maximum share and no earlier partner ties it.
    #[test]
    fn prop_dominant_partner_is_first_maximum(table in arb_partner_table()) {
        if let Ok(shares) = market_share(&table) {
            let dominant = dominant_partner(&shares).unwrap();
            let max = shares.iter().map(|s| s.percentage).max().unwrap();
            let first_max = shares.iter().find(|s| s.percentage == max).unwrap();
            prop_assert_eq!(dominant, first_max.partner.clone());
        }
    }

    /// Negative class exactly for negative income, in table order.
    #[test]
    fn prop_income_class_matches_sign(table in arb_monthly_table()) {
        let classes = income_color_class(&table);
        prop_assert_eq!(classes.len(), table.len());
        for (record, class) in table.iter().zip(classes.iter()) {
            let expected = if record.fx_income < Decimal::ZERO {
                IncomeSignClass::Negative
            } else {
                IncomeSignClass::Positive
            };
            prop_assert_eq!(*class, expected);
        }
    }

    /// Progress scales linearly: reaching the target is exactly 100%.
    #[test]
    fn prop_progress_at_target_is_one_hundred(cents in 1i64..10_000_000_000) {
        let target = Decimal::new(cents, 2);
        prop_assert_eq!(progress_to_target(target, target).unwrap(), dec!(100));
    }
}

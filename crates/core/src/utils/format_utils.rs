use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a value for display (2 decimal places, half away from zero).
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Formats an amount with thousands separators and two decimals,
/// prefixed by its currency code: `"USD 104,539,901.00"`.
pub fn format_money(currency: &str, amount: Decimal) -> String {
    let rounded = round_for_display(amount);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{} {}{}.{}", currency, sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(
            format_money("USD", dec!(104539901)),
            "USD 104,539,901.00"
        );
        assert_eq!(format_money("KES", dec!(26066041.00)), "KES 26,066,041.00");
        assert_eq!(format_money("USD", dec!(999)), "USD 999.00");
        assert_eq!(format_money("USD", dec!(1000)), "USD 1,000.00");
    }

    #[test]
    fn test_format_money_negative_and_fractional() {
        assert_eq!(format_money("KES", dec!(-675202.25)), "KES -675,202.25");
        assert_eq!(format_money("KES", dec!(-0.001)), "KES 0.00");
        assert_eq!(format_money("USD", dec!(0.005)), "USD 0.01");
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(dec!(20.907980)), dec!(20.91));
        assert_eq!(round_for_display(dec!(0.2166)), dec!(0.22));
    }
}

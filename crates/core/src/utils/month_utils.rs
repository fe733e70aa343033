use chrono::Month;

/// The twelve calendar months, January first.
pub const CALENDAR_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Upper-case label used on chart axes, e.g. `"JANUARY"`.
pub fn month_label(month: Month) -> String {
    month.name().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_months_are_in_order() {
        for (idx, month) in CALENDAR_MONTHS.iter().enumerate() {
            assert_eq!(month.number_from_month() as usize, idx + 1);
        }
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(Month::January), "JANUARY");
        assert_eq!(month_label(Month::September), "SEPTEMBER");
    }
}

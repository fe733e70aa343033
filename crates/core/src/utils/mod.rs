pub mod format_utils;
pub mod month_utils;

pub use format_utils::{format_money, round_for_display};
pub use month_utils::{month_label, CALENDAR_MONTHS};

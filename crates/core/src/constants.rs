/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of months in a reporting year
pub const MONTHS_PER_YEAR: usize = 12;

/// Currency of FX volumes (and of the annual target)
pub const VOLUME_CURRENCY: &str = "USD";

/// Currency of FX income
pub const INCOME_CURRENCY: &str = "KES";

/// Bar color for months with non-negative income
pub const POSITIVE_COLOR: &str = "#28a745";

/// Bar color for months with negative income
pub const NEGATIVE_COLOR: &str = "#dc3545";

/// Line color of the volume trend and the target gauge bar
pub const PRIMARY_COLOR: &str = "#1a76ff";

/// Market share slice palette, cycled in partner order
pub const PARTNER_PALETTE: [&str; 4] = ["#1a76ff", "#28a745", "#ffc107", "#dc3545"];

/// How far the dominant partner's slice is pulled out of the pie
pub const DOMINANT_SLICE_PULL: f64 = 0.1;

/// Currency all stored rates are relative to
pub const PIVOT_CURRENCY: &str = "USD";

/// Source currency selected when a session starts
pub const DEFAULT_SOURCE_CURRENCY: &str = "JPY";

/// Target currency selected when a session starts
pub const DEFAULT_TARGET_CURRENCY: &str = "USD";

/// Content of an empty edit buffer
pub const DEFAULT_BUFFER: &str = "0";

/// Decimal precision for displayed amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for the displayed unit rate
pub const RATE_DISPLAY_DECIMAL_PRECISION: u32 = 5;

/// Suffix that turns a plain number into its percentage
pub const PERCENT_SUFFIX: &str = "*0.01";

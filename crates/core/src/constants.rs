/// Dictionary label of the category that plans loan issuance
pub const ISSUANCE_CATEGORY_LABEL: &str = "видача";

/// Dictionary label of the category that plans collections
pub const COLLECTION_CATEGORY_LABEL: &str = "збір";

/// Environment variable overriding the issuance label
pub const ISSUANCE_LABEL_ENV: &str = "PLANFACT_ISSUANCE_LABEL";

/// Environment variable overriding the collection label
pub const COLLECTION_LABEL_ENV: &str = "PLANFACT_COLLECTION_LABEL";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Multiplier turning a ratio into a percentage
pub const PERCENT_MULTIPLIER: i64 = 100;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Reportable years, bounded so month keys stay `YYYY-MM`.
pub const MIN_REPORT_YEAR: i32 = 0;
pub const MAX_REPORT_YEAR: i32 = 9999;

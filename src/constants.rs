// Sun-synchronous orbit relation: cos(i) = -((R_E + h) / SSO_REFERENCE_RADIUS)^SSO_EXPONENT
pub const R_EARTH_KM: f64 = 6378.0; // Earth radius (km)
pub const SSO_REFERENCE_RADIUS_KM: f64 = 12352.0; // Orbit radius of a polar SSO (km)
pub const SSO_EXPONENT: f64 = 3.5;

// RAAN and argument of perigee are fixed for every altitude
pub const RAAN_DEG: f64 = 0.0;
pub const ARGUMENT_OF_PERIGEE_DEG: f64 = 0.0;

// Text DAS shows instead of a lifetime when decay happens after the propagation window
pub const SENTINEL_PHRASE: &str = "Greater than";
// A double-click on the field selects only this first word
pub const SENTINEL_WORD: &str = "Greater";

// Default sweep grid
pub const DEFAULT_ALTITUDES_KM: [f64; 3] = [600.0, 550.0, 500.0];
pub const DEFAULT_RATIO_MIN: f64 = 0.020; // m²/kg
pub const DEFAULT_RATIO_MAX: f64 = 0.044; // m²/kg
pub const DEFAULT_RATIO_COUNT: usize = 10;

// Files
pub const COORDINATE_FILE: &str = "dict.json";
pub const APP_DIR: &str = "deorbit";
pub const TABLE_PREFIX: &str = "start_year_";
pub const RATIO_COLUMN: &str = "ratio";

// Timing (milliseconds)
pub const DEFAULT_SETTLE_MS: u64 = 100; // Pause after every input action
pub const DEFAULT_POLL_MS: u64 = 250;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Constants used throughout the underbar workspace
// Environment variable names
pub const UNDERBAR_LOG_VAR: &str = "UNDERBAR_LOG";
pub const UNDERBAR_SEED_VAR: &str = "UNDERBAR_SEED";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

pub const DONE_TOKEN: &str = "done";
pub const STOP_TOKEN: &str = "stop";

pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

pub const CONFIG_DIR_NAME: &str = "classroom";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const CURRENT_YEAR_ENV: &str = "CLASSROOM_CURRENT_YEAR";

pub fn get_reference_year_override() -> Option<i32> {
    std::env::var(CURRENT_YEAR_ENV)
        .ok()
        .and_then(|value| parse_reference_year(&value))
}

/// Non-numeric values are ignored rather than treated as an error.
pub fn parse_reference_year(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

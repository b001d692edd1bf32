use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load `AppConfig`, reading a `.env` file first when one exists.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load `AppConfig` from the process environment only.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("TRENDTRACKR_ENV", "development"))?;
    let log_level = or_default("TRENDTRACKR_LOG_LEVEL", env.default_log_level());
    let data_dir = PathBuf::from(or_default("TRENDTRACKR_DATA_DIR", "./data"));
    let cache_ttl_secs: u64 = parse_number(
        "TRENDTRACKR_CACHE_TTL_SECS",
        &or_default("TRENDTRACKR_CACHE_TTL_SECS", "3600"),
    )?;

    let cache_capacity: usize = parse_number(
        "TRENDTRACKR_CACHE_CAPACITY",
        &or_default("TRENDTRACKR_CACHE_CAPACITY", "256"),
    )?;
    require_positive("TRENDTRACKR_CACHE_CAPACITY", cache_capacity)?;

    let histogram_bins: usize = parse_number(
        "TRENDTRACKR_HISTOGRAM_BINS",
        &or_default("TRENDTRACKR_HISTOGRAM_BINS", "20"),
    )?;
    require_positive("TRENDTRACKR_HISTOGRAM_BINS", histogram_bins)?;

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        cache_ttl_secs,
        cache_capacity,
        histogram_bins,
    })
}

fn parse_number<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason: format!("'{raw}': {e}"),
    })
}

fn require_positive(var: &str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRENDTRACKR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

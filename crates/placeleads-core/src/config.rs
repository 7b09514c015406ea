use crate::app_config::{AppConfig, Environment};
use crate::search::PROVIDER_MAX_TARGET_COUNT;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, without `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PLACELEADS_ENV", "development"))?;
    let log_level = or_default("PLACELEADS_LOG_LEVEL", "info");

    // Blank counts as absent.
    let places_api_key = lookup("PLACES_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let store_path = PathBuf::from(or_default("PLACELEADS_STORE_PATH", "./placeleads.json"));
    let request_timeout_secs = parse_u64("PLACELEADS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACELEADS_USER_AGENT", "placeleads/0.1 (lead-generation)");
    let page_delay_ms = parse_u64("PLACELEADS_PAGE_DELAY_MS", "2000")?;

    let max_target_count = parse_usize("PLACELEADS_MAX_TARGET_COUNT", "60")?;
    if max_target_count == 0 || max_target_count > PROVIDER_MAX_TARGET_COUNT {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACELEADS_MAX_TARGET_COUNT".to_string(),
            reason: format!("must be between 1 and {PROVIDER_MAX_TARGET_COUNT}"),
        });
    }

    let legacy_base_url = or_default("PLACELEADS_LEGACY_BASE_URL", "https://maps.googleapis.com/");
    let places_base_url = or_default("PLACELEADS_PLACES_BASE_URL", "https://places.googleapis.com/");

    Ok(AppConfig {
        env,
        log_level,
        places_api_key,
        store_path,
        request_timeout_secs,
        user_agent,
        page_delay_ms,
        max_target_count,
        legacy_base_url,
        places_base_url,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLACELEADS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

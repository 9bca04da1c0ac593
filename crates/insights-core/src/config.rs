use std::path::PathBuf;

use crate::app_config::{AppConfig, ConfigOverrides, Environment, OutputFormat};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration, letting `overrides` replace env values.
///
/// Calls `dotenvy::dotenv().ok()` first. An overridden variable is never
/// parsed, so an invalid value in the environment cannot fail the load.
///
/// # Errors
///
/// Returns `ConfigError` if a value that is read is invalid.
pub fn load_app_config_with(overrides: &ConfigOverrides) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config_with(|key| std::env::var(key), overrides)
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    build_app_config_with(lookup, &ConfigOverrides::default())
}

fn build_app_config_with<F>(
    lookup: F,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("INSIGHTS_ENV", "development"))?;
    let log_level = or_default("INSIGHTS_LOG_LEVEL", "info");
    let profile_path = match &overrides.profile_path {
        Some(path) => Some(path.clone()),
        None => lookup("INSIGHTS_PROFILE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from),
    };

    let output = match overrides.output {
        Some(output) => output,
        None => or_default("INSIGHTS_OUTPUT", "text")
            .parse::<OutputFormat>()
            .map_err(|reason| ConfigError::InvalidEnvVar {
                var: "INSIGHTS_OUTPUT".to_string(),
                reason,
            })?,
    };

    Ok(AppConfig {
        env,
        log_level,
        profile_path,
        output,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "INSIGHTS_ENV".to_string(),
            reason: format!("expected development, test or production, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::{AppConfig, DEFAULT_FRONTEND_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Set-but-blank counts as unset for the optional values.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let frontend_url = parse_frontend_url(&or_default(
        "SHOPFRONT_FRONTEND_URL",
        DEFAULT_FRONTEND_URL,
    ))?;
    let log_level = or_default("SHOPFRONT_LOG_LEVEL", "info");
    let user_agent = or_default("SHOPFRONT_USER_AGENT", "shopfront/0.1 (storefront-ui)");

    let request_timeout_secs = optional("SHOPFRONT_REQUEST_TIMEOUT_SECS")
        .map(|raw| {
            raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: "SHOPFRONT_REQUEST_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()?;

    let session_cookie = optional("SHOPFRONT_SESSION_COOKIE");

    Ok(AppConfig {
        frontend_url,
        log_level,
        user_agent,
        request_timeout_secs,
        session_cookie,
    })
}

/// Validate the frontend service address: an absolute `http`/`https` URL.
fn parse_frontend_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "SHOPFRONT_FRONTEND_URL".to_string(),
        reason,
    };

    let url = reqwest::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.trim().to_string()),
        other => Err(invalid(format!("unsupported scheme \"{other}\""))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

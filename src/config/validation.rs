use crate::config::types::SearchConfig;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// # Rules
///
/// - `endpoint` must parse as an absolute http(s) URL
/// - the identity pool must contain at least one non-empty entry
pub fn validate(config: &SearchConfig) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&config.endpoint).map_err(|e| {
        ConfigError::Validation(format!("endpoint is not a valid URL: {}", e))
    })?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "endpoint must use http or https, got '{}'",
            endpoint.scheme()
        )));
    }

    if config.user_agents.is_empty() {
        return Err(ConfigError::Validation(
            "user-agents pool must not be empty".to_string(),
        ));
    }

    if config.user_agents.iter().any(|ua| ua.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "user-agents pool contains an empty entry".to_string(),
        ));
    }

    Ok(())
}

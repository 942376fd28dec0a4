use crate::config::types::{
    ApiConfig, Config, HarvesterConfig, OutputConfig, MAX_PER_PAGE, MAX_REQUESTS_PER_MINUTE,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_harvester_config(&config.harvester)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the endpoint configuration
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid api url '{}': {}", config.url, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::Validation(format!(
            "api url must use http or https scheme, got '{}'",
            config.url
        )));
    }

    Ok(())
}

/// Validates the pacing configuration against the API ceilings
fn validate_harvester_config(config: &HarvesterConfig) -> Result<(), ConfigError> {
    if config.requests_per_minute < 1 || config.requests_per_minute > MAX_REQUESTS_PER_MINUTE {
        return Err(ConfigError::Validation(format!(
            "requests-per-minute must be between 1 and {}, got {}",
            MAX_REQUESTS_PER_MINUTE, config.requests_per_minute
        )));
    }

    if config.per_page < 1 || config.per_page > MAX_PER_PAGE {
        return Err(ConfigError::Validation(format!(
            "per-page must be between 1 and {}, got {}",
            MAX_PER_PAGE, config.per_page
        )));
    }

    Ok(())
}

/// Validates the output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.tool_label.is_empty() {
        return Err(ConfigError::Validation(
            "tool-label cannot be empty".to_string(),
        ));
    }

    // The label ends up in the results file name
    if !config
        .tool_label
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "tool-label must contain only alphanumeric characters, hyphens, and underscores, got '{}'",
            config.tool_label
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_requests_per_minute_rejected() {
        let mut config = Config::default();
        config.harvester.requests_per_minute = 0;

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rate_above_api_ceiling_rejected() {
        let mut config = Config::default();
        config.harvester.requests_per_minute = MAX_REQUESTS_PER_MINUTE + 1;

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_per_page_bounds() {
        let mut config = Config::default();

        config.harvester.per_page = 0;
        assert!(validate(&config).is_err());

        config.harvester.per_page = MAX_PER_PAGE;
        assert!(validate(&config).is_ok());

        config.harvester.per_page = MAX_PER_PAGE + 1;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_unparseable_api_url_rejected() {
        let mut config = Config::default();
        config.api.url = "not a url".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = Config::default();
        config.api.url = "ftp://graphql.anilist.co".to_string();

        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_http_allowed_for_local_endpoints() {
        let mut config = Config::default();
        config.api.url = "http://127.0.0.1:8080".to_string();

        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_output_directory_rejected() {
        let mut config = Config::default();
        config.output.directory = String::new();

        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_tool_label_charset() {
        let mut config = Config::default();

        config.output.tool_label = "nightly_harvest-2".to_string();
        assert!(validate(&config).is_ok());

        config.output.tool_label = "bad label".to_string();
        assert!(validate(&config).is_err());

        config.output.tool_label = String::new();
        assert!(validate(&config).is_err());
    }
}

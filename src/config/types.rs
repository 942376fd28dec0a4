use serde::Deserialize;

/// Page-size ceiling imposed by the API
pub const MAX_PER_PAGE: u32 = 50;

/// Request-rate ceiling imposed by the API (requests per minute)
pub const MAX_REQUESTS_PER_MINUTE: u32 = 90;

/// Main configuration structure for Ani-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub harvester: HarvesterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// GraphQL endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Endpoint receiving the page queries
    #[serde(default = "default_api_url")]
    pub url: String,
}

/// Harvest pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HarvesterConfig {
    /// Request budget per minute; the pacing delay is derived from this
    #[serde(rename = "requests-per-minute", default = "default_requests_per_minute")]
    pub requests_per_minute: u32,

    /// Records requested per page
    #[serde(rename = "per-page", default = "default_per_page")]
    pub per_page: u32,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the run's results file, created on demand
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Label prefixed to the results file name
    #[serde(rename = "tool-label", default = "default_tool_label")]
    pub tool_label: String,
}

fn default_api_url() -> String {
    "https://graphql.anilist.co".to_string()
}

fn default_requests_per_minute() -> u32 {
    20
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_output_directory() -> String {
    "GraphQL".to_string()
}

fn default_tool_label() -> String {
    "ani-harvest".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

impl Default for HarvesterConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: default_requests_per_minute(),
            per_page: default_per_page(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            tool_label: default_tool_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_constants() {
        let config = Config::default();

        assert_eq!(config.api.url, "https://graphql.anilist.co");
        assert_eq!(config.harvester.requests_per_minute, 20);
        assert_eq!(config.harvester.per_page, 50);
        assert_eq!(config.output.directory, "GraphQL");
        assert_eq!(config.output.tool_label, "ani-harvest");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[harvester]
requests-per-minute = 30
"#,
        )
        .unwrap();

        assert_eq!(config.harvester.requests_per_minute, 30);
        assert_eq!(config.harvester.per_page, MAX_PER_PAGE);
        assert_eq!(config.api.url, "https://graphql.anilist.co");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.directory, Config::default().output.directory);
    }
}

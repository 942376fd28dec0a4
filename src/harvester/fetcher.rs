//! GraphQL page fetcher
//!
//! This module issues one POST per page number and turns the response into a
//! list of records, classifying every failure along the way:
//! - network failures and timeouts
//! - non-2xx statuses
//! - malformed payloads or a missing `data.Page.media` path
//!
//! There is no retry logic; a failed page fails the run.

use crate::config::ApiConfig;
use crate::media::Media;
use crate::TransportError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// The page query sent on every fetch
///
/// `$page` and `$perPage` are the only variables; ordering is fixed by
/// popularity so page numbers advance over a stable sequence.
const PAGE_QUERY: &str = r#"
query ($page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    media(type: ANIME, sort: POPULARITY_DESC) {
      id
      title {
        romaji
        english
      }
      episodes
      format
      season
      seasonYear
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct PageResponse {
    data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "Page")]
    page: Option<ResponsePage>,
}

#[derive(Debug, Deserialize)]
struct ResponsePage {
    media: Option<Vec<Media>>,
}

/// Builds the HTTP client used for every page fetch
///
/// The original design carries no request timeout; one is set here anyway so
/// a hung request cannot block the loop forever.
pub fn build_http_client() -> Result<Client, TransportError> {
    Client::builder()
        .user_agent(concat!("ani-harvest/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(TransportError::Client)
}

/// Fetches one page of records
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `api` - Endpoint configuration
/// * `per_page` - Page size to request
/// * `page` - 1-based page number
///
/// # Returns
///
/// * `Ok(Vec<Media>)` - The page's records; empty means the catalog is exhausted
/// * `Err(TransportError)` - Network, status, or payload-shape failure
pub async fn fetch_page(
    client: &Client,
    api: &ApiConfig,
    per_page: u32,
    page: u32,
) -> Result<Vec<Media>, TransportError> {
    let body = serde_json::json!({
        "query": PAGE_QUERY,
        "variables": { "page": page, "perPage": per_page },
    });

    let response = client
        .post(&api.url)
        .json(&body)
        .send()
        .await
        .map_err(|source| TransportError::Request { page, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            page,
            status: status.as_u16(),
        });
    }

    let payload = response
        .text()
        .await
        .map_err(|source| TransportError::Request { page, source })?;

    parse_page_payload(&payload, page)
}

/// Extracts the record list at `data.Page.media`
///
/// Absence of any link in that path is a shape error, as is a body that is
/// not the expected JSON at all.
fn parse_page_payload(payload: &str, page: u32) -> Result<Vec<Media>, TransportError> {
    let response: PageResponse =
        serde_json::from_str(payload).map_err(|e| TransportError::Shape {
            page,
            reason: e.to_string(),
        })?;

    response
        .data
        .and_then(|data| data.page)
        .and_then(|p| p.media)
        .ok_or_else(|| TransportError::Shape {
            page,
            reason: "missing data.Page.media in response".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }

    #[test]
    fn test_parse_full_payload() {
        let payload = r#"{
            "data": { "Page": { "media": [
                { "id": 1, "title": { "romaji": "A", "english": null },
                  "episodes": 12, "format": "TV", "season": "SPRING", "seasonYear": 2020 },
                { "id": 2, "title": { "romaji": "B", "english": "B (EN)" },
                  "episodes": null, "format": null, "season": null, "seasonYear": null }
            ] } }
        }"#;

        let media = parse_page_payload(payload, 1).unwrap();
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].id, 1);
        assert_eq!(media[1].title.english.as_deref(), Some("B (EN)"));
    }

    #[test]
    fn test_parse_empty_page() {
        let payload = r#"{ "data": { "Page": { "media": [] } } }"#;
        let media = parse_page_payload(payload, 3).unwrap();
        assert!(media.is_empty());
    }

    #[test]
    fn test_missing_media_path_is_shape_error() {
        for payload in [
            r#"{ "data": { "Page": {} } }"#,
            r#"{ "data": {} }"#,
            r#"{ "data": null }"#,
            r#"{ "errors": [{ "message": "boom" }] }"#,
        ] {
            let result = parse_page_payload(payload, 2);
            assert!(
                matches!(result, Err(TransportError::Shape { page: 2, .. })),
                "expected shape error for {payload}"
            );
        }
    }

    #[test]
    fn test_non_json_body_is_shape_error() {
        let result = parse_page_payload("<html>rate limited</html>", 5);
        assert!(matches!(result, Err(TransportError::Shape { page: 5, .. })));
    }

    #[test]
    fn test_query_names_the_page_variables() {
        assert!(PAGE_QUERY.contains("Page(page: $page, perPage: $perPage)"));
    }
}

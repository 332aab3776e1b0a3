//! Menu API client utilities.
//!
//! This module provides a lightweight client for the menu service's two read
//! endpoints. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Resolving the base address from `RAMEN_API_BASE` with a local fallback
//! - Validating the base URL for safety
//! - Decoding item records into [`ramen_types::RemoteItem`]
//!
//! The primary entry point is [`MenuClient`]. Create an instance via
//! [`MenuClient::new_from_env`], then issue reads with
//! [`MenuClient::list_items`] and [`MenuClient::get_item`].

use std::env;
use std::time::Duration;

use ramen_types::{ItemId, RemoteItem};
use reqwest::{Client, StatusCode, Url, header};
use tracing::debug;

/// Environment variable overriding the base address of the menu service.
pub const BASE_URL_ENV_VAR: &str = "RAMEN_API_BASE";
/// Default base address when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Collection endpoint path.
const ITEMS_PATH: &str = "/ramens";

/// Errors surfaced by the menu client.
///
/// All three kinds are terminal for the request that produced them: callers
/// log with endpoint context and degrade, never retry.
#[derive(Debug, thiserror::Error)]
pub enum MenuApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} responded with status {status}")]
    Status { path: String, status: StatusCode },
    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for menu service access.
///
/// The client pre-configures default headers and builds requests against a
/// validated base URL.
pub struct MenuClient {
    pub base_url: String,
    pub http: Client,
    pub user_agent: String,
}

impl MenuClient {
    /// Construct a [`MenuClient`] from the environment.
    ///
    /// The base URL is taken from `RAMEN_API_BASE` (if set) or falls back to
    /// the fixed local default. Non-localhost hosts must use HTTPS.
    pub fn new_from_env() -> Result<Self, MenuApiError> {
        let base_url = env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new_with_base_url(base_url)
    }

    /// Construct a [`MenuClient`] against an explicit base URL.
    pub fn new_with_base_url(base_url: String) -> Result<Self, MenuApiError> {
        validate_base_url(&base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|source| MenuApiError::Transport {
                path: base_url.clone(),
                source,
            })?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("ramen-tui/0.1; {}", env::consts::OS),
        })
    }

    /// Fetch the full collection, in server-provided order.
    pub async fn list_items(&self) -> Result<Vec<RemoteItem>, MenuApiError> {
        self.get_json(ITEMS_PATH).await
    }

    /// Fetch one item by identifier. An unknown id surfaces as a status error.
    pub async fn get_item(&self, id: &ItemId) -> Result<RemoteItem, MenuApiError> {
        self.get_json(&item_path(id)).await
    }

    /// Issue a GET for an API-relative path and decode the JSON body.
    ///
    /// A non-success status is an error; the body is only decoded on success.
    async fn get_json<T>(&self, path: &str) -> Result<T, MenuApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "issuing menu request");

        let response = self
            .http
            .get(&url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|source| MenuApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenuApiError::Status {
                path: path.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(|source| MenuApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Build the per-item endpoint path for an identifier.
fn item_path(id: &ItemId) -> String {
    format!("{ITEMS_PATH}/{id}")
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_base_url(base: &str) -> Result<(), MenuApiError> {
    let parsed_base_url =
        Url::parse(base).map_err(|e| MenuApiError::InvalidBaseUrl(format!("'{base}' does not parse: {e}")))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| MenuApiError::InvalidBaseUrl(format!("'{base}' must include a host")))?;

    // Local development allowance: localhost/127.0.0.1 with any scheme.
    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(MenuApiError::InvalidBaseUrl(format!(
            "non-localhost hosts must use https; got '{}://'",
            parsed_base_url.scheme()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_accepted() {
        assert!(validate_base_url(DEFAULT_BASE_URL).is_ok());
    }

    #[test]
    fn localhost_allows_any_scheme() {
        assert!(validate_base_url("http://localhost:3000").is_ok());
        assert!(validate_base_url("http://127.0.0.1:8080").is_ok());
        assert!(validate_base_url("https://localhost").is_ok());
    }

    #[test]
    fn remote_hosts_require_https() {
        assert!(validate_base_url("http://menu.example.com").is_err());
        assert!(validate_base_url("https://menu.example.com").is_ok());
    }

    #[test]
    fn invalid_urls_are_rejected() {
        assert!(validate_base_url("not a url").is_err());
        assert!(validate_base_url("file:///tmp/menu").is_err());
    }

    #[test]
    fn item_path_embeds_the_identifier() {
        assert_eq!(item_path(&ItemId::from("1")), "/ramens/1");
        assert_eq!(item_path(&ItemId::from("abc-42")), "/ramens/abc-42");
    }

    #[test]
    fn collection_body_decodes_in_order() {
        let json = r#"[
            {"id": 2, "name": "Miso", "restaurant": "B", "image": "b.jpg", "rating": 7, "comment": ""},
            {"id": 1, "name": "Shoyu", "restaurant": "A", "image": "a.jpg", "rating": "8", "comment": "good"}
        ]"#;
        let items: Vec<RemoteItem> = serde_json::from_str(json).expect("deserialize collection");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].fields.name, "Miso");
        assert_eq!(items[1].fields.name, "Shoyu");
    }
}

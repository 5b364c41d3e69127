/*
[INPUT]:  Client configuration (base URL, credentials, timeouts)
[OUTPUT]: Configured reqwest client executing authenticated API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request behavior
*/

use chrono::{DateTime, FixedOffset, Local};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use crate::auth::sts_token_at;
use crate::http::{IntranetError, Result};

/// Default base URL for the Intranet API
const DEFAULT_BASE_URL: &str = "https://intranet.minieye.tech/sys-api";

/// Default User-Agent sent with every request
const DEFAULT_USER_AGENT: &str =
    concat!("minieye-intranet-sdk-rust/", env!("CARGO_PKG_VERSION"));

const STS_UID_HEADER: HeaderName = HeaderName::from_static("x-sts-uid");
const STS_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-sts-token");

/// Client configuration
///
/// When both `api_key` and the access key pair are set, the API key wins and
/// the STS headers are not emitted.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            access_key_id: None,
            access_key_secret: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a validated configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    /// Authenticate with a bearer API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Authenticate with an STS access key pair
    pub fn with_access_keys(
        mut self,
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.access_key_secret = Some(access_key_secret.into());
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the base URL and strip its trailing slashes.
    ///
    /// Applied again when a client is built, so a literal-constructed config
    /// cannot bypass validation.
    pub(crate) fn normalized(mut self) -> Result<Self> {
        if self.base_url.is_empty() {
            return Err(IntranetError::Config("base_url cannot be empty".to_string()));
        }
        let trimmed = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&trimmed)
            .map_err(|err| IntranetError::Config(format!("invalid base_url {trimmed:?}: {err}")))?;
        self.base_url = trimmed;
        Ok(self)
    }
}

/// Main HTTP client for the Intranet API
///
/// Holds one reqwest client carrying the fixed headers and the configured
/// timeout. The instance is reusable across sequential calls; callers
/// sharing one instance across tasks share the underlying connection pool
/// and should structure that themselves if they need isolation.
#[derive(Debug, Clone)]
pub struct IntranetClient {
    http_client: Client,
    config: ClientConfig,
}

impl IntranetClient {
    /// Create a new client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with a custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let config = config.normalized()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| IntranetError::internal("failed to build HTTP client", err))?;

        Ok(Self { http_client, config })
    }

    /// Normalized configuration in use
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint path.
    ///
    /// Plain concatenation: the base keeps its sub-path (`Url::join` would
    /// drop `/sys-api` for absolute paths), the path loses its leading
    /// slash, and exactly one slash separates the two.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Authentication headers for the current instant
    pub fn auth_headers(&self) -> Result<HeaderMap> {
        self.auth_headers_at(Local::now().fixed_offset())
    }

    /// Authentication headers pinned to an explicit instant.
    ///
    /// API key wins over the STS key pair; with neither configured the map
    /// is empty and the server decides what to do with the bare request.
    pub(crate) fn auth_headers_at(&self, now: DateTime<FixedOffset>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = &self.config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {api_key}"))
                .map_err(|_| IntranetError::Config("api_key is not a valid header value".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        } else if let (Some(id), Some(secret)) =
            (&self.config.access_key_id, &self.config.access_key_secret)
        {
            let token = sts_token_at(now, id, secret)?;
            let uid = HeaderValue::from_str(id).map_err(|_| {
                IntranetError::Config("access_key_id is not a valid header value".to_string())
            })?;
            let token = HeaderValue::from_str(&token).map_err(|_| {
                IntranetError::Config("derived token is not a valid header value".to_string())
            })?;
            headers.insert(STS_UID_HEADER, uid);
            headers.insert(STS_TOKEN_HEADER, token);
            debug!(uid = %id, "using STS authentication");
        }

        Ok(headers)
    }

    /// Execute one request and decode the response body as JSON.
    ///
    /// Transport failures, timeouts, non-2xx statuses and undecodable
    /// bodies all surface as [`IntranetError::Internal`]; application-level
    /// codes inside the envelope are the caller's business.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<Value> {
        let url = self.build_url(path);
        let auth_headers = self.auth_headers()?;

        debug!(%method, %url, "sending request");

        let mut builder = self.http_client.request(method, &url).headers(auth_headers);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            error!(%url, error = %err, "request failed");
            IntranetError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%url, %status, "request returned error status");
            return Err(IntranetError::internal_msg(format!(
                "HTTP request failed: {path} (status {status})"
            )));
        }

        response.json::<Value>().await.map_err(|err| {
            error!(%url, error = %err, "response body is not valid JSON");
            IntranetError::internal("invalid JSON response", err)
        })
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, Some(body), None).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PUT, path, Some(body), None).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn utc8_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_config_rejects_empty_base_url() {
        let err = ClientConfig::new("").unwrap_err();
        assert!(matches!(err, IntranetError::Config(_)));
    }

    #[test]
    fn test_config_rejects_relative_base_url() {
        let err = ClientConfig::new("host/sys-api").unwrap_err();
        assert!(matches!(err, IntranetError::Config(_)));
    }

    #[test]
    fn test_config_strips_trailing_slashes() {
        let config = ClientConfig::new("https://x/api/").unwrap();
        assert_eq!(config.base_url, "https://x/api");

        let config = ClientConfig::new("https://x/api///").unwrap();
        assert_eq!(config.base_url, "https://x/api");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("minieye-intranet-sdk-rust/"));
    }

    #[rstest]
    #[case("https://host/sys-api", "/user/info")]
    #[case("https://host/sys-api/", "/user/info")]
    #[case("https://host/sys-api", "user/info")]
    #[case("https://host/sys-api/", "user/info")]
    fn test_build_url_slash_combinations(#[case] base: &str, #[case] path: &str) {
        let client = IntranetClient::with_config(ClientConfig::new(base).unwrap()).unwrap();
        assert_eq!(client.build_url(path), "https://host/sys-api/user/info");
    }

    #[test]
    fn test_build_url_keeps_base_sub_path() {
        let client =
            IntranetClient::with_config(ClientConfig::new("https://host/sys-api").unwrap())
                .unwrap();
        assert_eq!(
            client.build_url("/connector/kafka/send-topic-message"),
            "https://host/sys-api/connector/kafka/send-topic-message"
        );
    }

    #[test]
    fn test_auth_headers_empty_without_credentials() {
        let client = IntranetClient::new().unwrap();
        let headers = client.auth_headers_at(utc8_now()).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_auth_headers_bearer() {
        let config = ClientConfig::default().with_api_key("k123");
        let client = IntranetClient::with_config(config).unwrap();
        let headers = client.auth_headers_at(utc8_now()).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer k123");
        assert!(headers.get("x-sts-uid").is_none());
    }

    #[test]
    fn test_auth_headers_api_key_wins_over_key_pair() {
        let config = ClientConfig::default()
            .with_api_key("k123")
            .with_access_keys("id", "secret");
        let client = IntranetClient::with_config(config).unwrap();
        let headers = client.auth_headers_at(utc8_now()).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer k123");
        assert!(headers.get("x-sts-uid").is_none());
        assert!(headers.get("x-sts-token").is_none());
    }

    #[test]
    fn test_auth_headers_sts_pair() {
        let config = ClientConfig::default().with_access_keys("id", "secret");
        let client = IntranetClient::with_config(config).unwrap();
        let headers = client.auth_headers_at(utc8_now()).unwrap();
        assert_eq!(headers.get("x-sts-uid").unwrap(), "id");
        // 2024-3-5 09:xx in UTC+8, hour bucket 9
        assert_eq!(
            headers.get("x-sts-token").unwrap(),
            "3ab0251a1ae5824ea33f64a4a72f1f19"
        );
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_auth_headers_sts_requires_utc8() {
        let config = ClientConfig::default().with_access_keys("id", "secret");
        let client = IntranetClient::with_config(config).unwrap();
        let utc_now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 1, 30, 0)
            .unwrap();
        let err = client.auth_headers_at(utc_now).unwrap_err();
        assert!(matches!(err, IntranetError::Timezone { .. }));
    }

    #[test]
    fn test_auth_headers_incomplete_key_pair_is_unauthenticated() {
        let config = ClientConfig {
            access_key_id: Some("id".to_string()),
            ..ClientConfig::default()
        };
        let client = IntranetClient::with_config(config).unwrap();
        let headers = client.auth_headers_at(utc8_now()).unwrap();
        assert!(headers.is_empty());
    }
}

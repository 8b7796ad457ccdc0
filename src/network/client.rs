//! HTTP client wrapper - executes requests and reduces responses to text + status

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::constants::{APP_VERSION, TIMEOUT_ENV_VAR};
use crate::error::RequestError;
use crate::models::{ExecutionResult, Request};

/// Runtime knobs for the shared HTTP client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            timeout: None,
            user_agent: format!("ravens-rock/{}", APP_VERSION),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the timeout read from `RAVENS_ROCK_TIMEOUT_SECS` if set
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();
        if let Ok(raw) = std::env::var(TIMEOUT_ENV_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!(value = %raw, "Ignoring invalid {}", TIMEOUT_ENV_VAR),
            }
        }
        config
    }
}

/// Create an HTTP client from the given configuration
pub fn create_client(config: &ClientConfig) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default HTTP client");
        reqwest::Client::new()
    })
}

/// Parse the request URL and append its params as query pairs.
///
/// Params with no value are appended key-only (`?flag`).
pub fn build_url(request: &Request) -> Result<Url, RequestError> {
    let mut url = Url::parse(request.url.trim()).map_err(|_| RequestError::UrlComponents)?;

    if !request.params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &request.params {
            match value {
                Some(value) => {
                    pairs.append_pair(key, value);
                }
                None => {
                    pairs.append_key_only(key);
                }
            }
        }
    }

    let usable = !url.cannot_be_a_base()
        && matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some_and(|h| !h.is_empty());
    if !usable {
        return Err(RequestError::UrlExtraction);
    }

    Ok(url)
}

/// Header map with one entry per request header; `None` values are sent empty.
///
/// Keys that differ only by case name the same header; the last one in key
/// order wins and the collision is logged.
fn build_headers(request: &Request) -> Result<HeaderMap, RequestError> {
    let mut headers = HeaderMap::with_capacity(request.headers.len());
    for (key, value) in &request.headers {
        let invalid = || RequestError::InvalidHeader { name: key.clone() };
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
        let value = HeaderValue::from_str(value.as_deref().unwrap_or("")).map_err(|_| invalid())?;
        if let Some(previous) = headers.insert(name, value) {
            tracing::warn!(header = %key, ?previous, "Header key collides with an earlier entry; replacing it");
        }
    }
    Ok(headers)
}

/// Build a wire-level request from the model, without sending it
pub fn build_request(
    client: &reqwest::Client,
    request: &Request,
) -> Result<reqwest::Request, RequestError> {
    let url = build_url(request)?;
    let headers = build_headers(request)?;

    let mut req_builder = client
        .request(request.http_method.to_reqwest(), url)
        .headers(headers);

    if !request.body().is_empty() {
        req_builder = req_builder.body(request.body().as_bytes().to_vec());
    }

    req_builder.build().map_err(|_| RequestError::UrlExtraction)
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_body() || e.is_decode() {
        format!("Error reading body: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Execute a request and reduce the outcome to response text and status.
///
/// Decodable UTF-8 body text takes precedence over a transport error; the
/// status is reported whenever an HTTP response arrived.
pub async fn execute_request(client: &reqwest::Client, request: &Request) -> ExecutionResult {
    let wire = match build_request(client, request) {
        Ok(wire) => wire,
        Err(e) => {
            tracing::warn!(url = %request.url, error = %e, "Request not sent");
            return ExecutionResult::failure(e.to_string());
        }
    };

    match client.execute(wire).await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            match resp.bytes().await {
                Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                    Ok(text) => ExecutionResult::new(Some(text), Some(status)),
                    Err(_) => {
                        tracing::warn!(status, bytes = bytes.len(), "Response body is not UTF-8");
                        ExecutionResult::new(None, Some(status))
                    }
                },
                Err(e) => ExecutionResult::new(Some(describe_error(&e)), Some(status)),
            }
        }
        Err(e) => {
            let status = e.status().map(|s| s.as_u16());
            ExecutionResult::new(Some(describe_error(&e)), status)
        }
    }
}

/// Sends requests over one shared, cheaply cloneable HTTP client
#[derive(Clone, Debug)]
pub struct Executor {
    client: reqwest::Client,
}

impl Executor {
    pub fn new(config: &ClientConfig) -> Self {
        Executor {
            client: create_client(config),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Send one request; resolves exactly once
    pub async fn send(&self, request: &Request) -> ExecutionResult {
        tracing::info!(url = %request.url, method = %request.http_method, "Executing request");
        let result = execute_request(&self.client, request).await;
        tracing::info!(status = ?result.status_code, "Request completed");
        result
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

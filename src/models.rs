use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{BODY_FORMATS, MISSING_STATUS_DISPLAY, NO_BODY_FORMAT, NO_RESPONSE_TEXT};

/// Header or query parameter map. A `None` value is a key with no value.
pub type Mapping = BTreeMap<String, Option<String>>;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::PATCH,
        HttpMethod::DELETE,
        HttpMethod::HEAD,
        HttpMethod::OPTIONS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::PATCH => reqwest::Method::PATCH,
            HttpMethod::DELETE => reqwest::Method::DELETE,
            HttpMethod::HEAD => reqwest::Method::HEAD,
            HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .ok_or_else(|| format!("Unknown HTTP method: {}", s))
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Body format picker selection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BodyFormat {
    /// The `"xo"` entry: no Content-Type is injected
    #[default]
    None,
    ContentType(String),
}

impl BodyFormat {
    /// Maps a picker title to a selection; `"xo"` and blank mean none.
    pub fn from_title(title: &str) -> Self {
        let title = title.trim();
        if title.is_empty() || title == NO_BODY_FORMAT {
            BodyFormat::None
        } else {
            BodyFormat::ContentType(title.to_string())
        }
    }

    /// Picker entries, starting with the no-format sentinel
    pub fn choices() -> Vec<BodyFormat> {
        std::iter::once(BodyFormat::None)
            .chain(BODY_FORMATS.iter().map(|ct| BodyFormat::ContentType(ct.to_string())))
            .collect()
    }

    pub fn title(&self) -> &str {
        match self {
            BodyFormat::None => NO_BODY_FORMAT,
            BodyFormat::ContentType(ct) => ct,
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        match self {
            BodyFormat::None => None,
            BodyFormat::ContentType(ct) => Some(ct),
        }
    }
}

/// Removes every backslash from body text.
pub fn strip_backslashes(body: &str) -> String {
    body.replace('\\', "")
}

fn deserialize_body<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let body = String::deserialize(deserializer)?;
    Ok(strip_backslashes(&body))
}

fn deserialize_params<'de, D>(deserializer: D) -> Result<Mapping, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Mapping>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single HTTP request, as edited and persisted in a document.
///
/// `body` never contains a backslash: every assignment strips them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub url: String,
    pub http_method: HttpMethod,
    #[serde(default, deserialize_with = "deserialize_params")]
    pub params: Mapping,
    pub headers: Mapping,
    #[serde(deserialize_with = "deserialize_body")]
    body: String,
}

impl Request {
    pub fn new(
        url: impl Into<String>,
        http_method: HttpMethod,
        params: Mapping,
        headers: Mapping,
        body: &str,
    ) -> Self {
        Request {
            url: url.into(),
            http_method,
            params,
            headers,
            body: strip_backslashes(body),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Sets the body, stripping backslashes. Returns whether it changed.
    pub fn set_body(&mut self, body: &str) -> bool {
        let body = strip_backslashes(body);
        if body == self.body {
            return false;
        }
        self.body = body;
        true
    }
}

/// Outcome of one send: response text and status, either possibly absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub response_text: Option<String>,
    pub status_code: Option<u16>,
}

impl ExecutionResult {
    pub fn new(response_text: Option<String>, status_code: Option<u16>) -> Self {
        ExecutionResult {
            response_text,
            status_code,
        }
    }

    /// A local failure: message only, no status.
    pub fn failure(message: impl Into<String>) -> Self {
        ExecutionResult {
            response_text: Some(message.into()),
            status_code: None,
        }
    }

    pub fn display_text(&self) -> &str {
        self.response_text.as_deref().unwrap_or(NO_RESPONSE_TEXT)
    }

    pub fn display_status(&self) -> i32 {
        self.status_code
            .map(i32::from)
            .unwrap_or(MISSING_STATUS_DISPLAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_defaults() {
        let req = Request::default();
        assert_eq!(req.http_method, HttpMethod::GET);
        assert!(req.url.is_empty());
        assert!(req.params.is_empty());
        assert!(req.headers.is_empty());
        assert!(req.body().is_empty());
    }

    #[test]
    fn test_set_body_strips_backslashes() {
        let mut req = Request::default();
        assert!(req.set_body(r#"{\"a\": \"b\\c\"}"#));
        assert_eq!(req.body(), r#"{"a": "bc"}"#);
    }

    #[test]
    fn test_set_body_without_backslash_keeps_content() {
        let mut req = Request::default();
        req.set_body("plain text / with slash");
        assert_eq!(req.body(), "plain text / with slash");
        assert!(!req.set_body("plain text / with slash"));
    }

    #[test]
    fn test_constructor_strips_backslashes() {
        let req = Request::new("http://x", HttpMethod::POST, Mapping::new(), Mapping::new(), r"a\b");
        assert_eq!(req.body(), "ab");
    }

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("patch".parse::<HttpMethod>().unwrap(), HttpMethod::PATCH);
        assert_eq!(" Options ".parse::<HttpMethod>().unwrap(), HttpMethod::OPTIONS);
        assert!("BREW".parse::<HttpMethod>().is_err());

        let method: HttpMethod = serde_json::from_str(r#""delete""#).unwrap();
        assert_eq!(method, HttpMethod::DELETE);
        assert_eq!(serde_json::to_string(&method).unwrap(), r#""DELETE""#);
        assert!(serde_json::from_str::<HttpMethod>(r#""BREW""#).is_err());
    }

    #[test]
    fn test_body_format_sentinel() {
        assert_eq!(BodyFormat::from_title("xo"), BodyFormat::None);
        assert_eq!(BodyFormat::from_title(""), BodyFormat::None);
        let json = BodyFormat::from_title("application/json");
        assert_eq!(json.content_type(), Some("application/json"));
        assert_eq!(BodyFormat::None.title(), "xo");

        let choices = BodyFormat::choices();
        assert_eq!(choices[0], BodyFormat::None);
        assert!(choices.contains(&BodyFormat::from_title("text/plain")));
    }

    #[test]
    fn test_execution_result_display_fallbacks() {
        let empty = ExecutionResult::default();
        assert_eq!(empty.display_text(), "No response received.");
        assert_eq!(empty.display_status(), -100);

        let ok = ExecutionResult::new(Some("hi".into()), Some(200));
        assert_eq!(ok.display_text(), "hi");
        assert_eq!(ok.display_status(), 200);
    }
}

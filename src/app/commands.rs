//! Command handlers - field edits and the send action

use crate::app::Session;
use crate::codec;
use crate::constants::CONTENT_TYPE_HEADER;
use crate::error::RequestError;
use crate::models::{BodyFormat, ExecutionResult, HttpMethod, Mapping, Request};
use crate::network::Executor;

impl Session {
    // ========================
    // Field edits
    // ========================

    pub fn set_url(&mut self, url: &str) -> bool {
        if self.request.url == url {
            return false;
        }
        self.request.url = url.to_string();
        true
    }

    pub fn set_method(&mut self, method: HttpMethod) -> bool {
        if self.request.http_method == method {
            return false;
        }
        self.request.http_method = method;
        true
    }

    pub fn set_body(&mut self, body: &str) -> bool {
        self.request.set_body(body)
    }

    pub fn set_body_format(&mut self, format: BodyFormat) -> bool {
        if self.body_format == format {
            return false;
        }
        self.body_format = format;
        true
    }

    /// Store raw headers editor text; it is decoded when sending
    pub fn set_headers_text(&mut self, text: &str) -> bool {
        if self.headers_text == text {
            return false;
        }
        self.headers_text = text.to_string();
        true
    }

    /// Store raw params editor text; it is decoded when sending
    pub fn set_params_text(&mut self, text: &str) -> bool {
        if self.params_text == text {
            return false;
        }
        self.params_text = text.to_string();
        true
    }

    // ========================
    // Send
    // ========================

    /// Assemble the request to send from the current edits.
    ///
    /// Blank editor text keeps the current mapping. A selected body format
    /// becomes the `Content-Type` header, and GET requests go out without a
    /// body. On error the session is left as it was.
    pub fn prepare_send(&mut self) -> Result<Request, RequestError> {
        let mut headers = decode_field(&self.headers_text, "Headers")?
            .unwrap_or_else(|| self.request.headers.clone());

        if let Some(content_type) = self.body_format.content_type() {
            headers.retain(|key, _| !key.eq_ignore_ascii_case(CONTENT_TYPE_HEADER));
            headers.insert(CONTENT_TYPE_HEADER.to_string(), Some(content_type.to_string()));
        }

        let params = decode_field(&self.params_text, "Parameters")?
            .unwrap_or_else(|| self.request.params.clone());

        let body = if self.request.http_method == HttpMethod::GET {
            ""
        } else {
            self.request.body()
        };

        let request = Request::new(
            self.request.url.clone(),
            self.request.http_method,
            params,
            headers,
            body,
        );

        self.set_request(request.clone());
        Ok(request)
    }

    /// Prepare and send the current request
    pub async fn send(&mut self, executor: &Executor) -> Result<ExecutionResult, RequestError> {
        let request = self.prepare_send()?;
        Ok(executor.send(&request).await)
    }
}

fn decode_field(text: &str, field: &'static str) -> Result<Option<Mapping>, RequestError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    codec::decode(text).map(Some).map_err(|e| {
        tracing::warn!(field, error = %e, "Rejected mapping text");
        RequestError::InvalidMappingText { field }
    })
}

//! Session state - the request being edited plus its editor-side views

use std::path::{Path, PathBuf};

use crate::codec;
use crate::document;
use crate::error::DocumentError;
use crate::models::{BodyFormat, Request};
use crate::storage::Storage;

/// One open document.
///
/// Single owner, single thread: the session is mutated only by whoever
/// holds it. Mutators report whether anything changed so the caller can
/// decide when the document is dirty.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub(crate) request: Request,
    pub(crate) body_format: BodyFormat,
    pub(crate) headers_text: String,
    pub(crate) params_text: String,
}

impl Session {
    /// Fresh document: GET, everything else empty, no body format
    pub fn new() -> Self {
        let mut session = Session::default();
        session.sync_texts();
        session
    }

    /// Session over an existing request
    pub fn with_request(request: Request) -> Self {
        let mut session = Session::new();
        session.set_request(request);
        session
    }

    /// Load a document file into a new session
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        Ok(Session::with_request(document::load(path)?))
    }

    /// Save the current request to a document file
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        document::save(path, &self.request)
    }

    /// Autosave the current request as draft `name`
    pub fn autosave(&self, storage: &Storage, name: &str) -> anyhow::Result<PathBuf> {
        let path = storage.autosave(name, &self.request)?;
        tracing::debug!(name, path = %path.display(), "Draft autosaved");
        Ok(path)
    }

    /// Reopen a session from draft `name`
    pub fn restore_draft(storage: &Storage, name: &str) -> anyhow::Result<Self> {
        Ok(Session::with_request(storage.load_draft(name)?))
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn into_request(self) -> Request {
        self.request
    }

    pub fn body_format(&self) -> &BodyFormat {
        &self.body_format
    }

    pub fn headers_text(&self) -> &str {
        &self.headers_text
    }

    pub fn params_text(&self) -> &str {
        &self.params_text
    }

    /// Replace the request wholesale. The editor text is refreshed after the
    /// new request is installed, so it always shows the current mappings.
    pub fn set_request(&mut self, request: Request) -> bool {
        if request == self.request {
            return false;
        }
        self.request = request;
        self.sync_texts();
        true
    }

    /// Re-encode headers and params into their editor text. An encode
    /// failure leaves the previous text in place.
    pub(crate) fn sync_texts(&mut self) {
        if let Some(text) = codec::encode(&self.request.headers) {
            self.headers_text = text;
        }
        if let Some(text) = codec::encode(&self.request.params) {
            self.params_text = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HttpMethod, Mapping};

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert_eq!(session.request(), &Request::default());
        assert_eq!(session.body_format(), &BodyFormat::None);
        assert_eq!(session.headers_text(), "{}");
        assert_eq!(session.params_text(), "{}");
    }

    #[test]
    fn test_set_request_syncs_text_after_install() {
        let mut session = Session::new();
        let mut headers = Mapping::new();
        headers.insert("Accept".into(), Some("text/html".into()));
        let req = Request::new("https://a.io/x", HttpMethod::DELETE, Mapping::new(), headers, "");

        assert!(session.set_request(req.clone()));
        assert_eq!(session.headers_text(), r#"{"Accept":"text/html"}"#);
        assert!(!session.set_request(req));
    }

    #[test]
    fn test_autosave_then_restore_draft() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_dir(dir.path());

        let mut session = Session::new();
        session.set_url("https://httpbin.org/post");
        session.set_method(HttpMethod::POST);
        session.set_body(r#"{"k":"v"}"#);

        let path = session.autosave(&storage, "scratch").unwrap();
        assert!(path.starts_with(dir.path()));

        let restored = Session::restore_draft(&storage, "scratch").unwrap();
        assert_eq!(restored.request(), session.request());
        assert_eq!(storage.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_save_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let mut session = Session::new();
        session.set_url("https://httpbin.org/get");
        session.save(&path).unwrap();

        let reopened = Session::open(&path).unwrap();
        assert_eq!(reopened.request(), session.request());
    }
}

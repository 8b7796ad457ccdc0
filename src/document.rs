//! Request documents: JSON with snake_case keys, one request per file.
//!
//! ```json
//! {"url":"https://httpbin.org/get","http_method":"GET","params":{"q":"x"},"headers":{},"body":""}
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::DocumentError;
use crate::models::Request;

/// Encodes a request as document bytes.
pub fn serialize(request: &Request) -> Result<Vec<u8>, DocumentError> {
    serde_json::to_vec(request).map_err(DocumentError::Serialization)
}

/// Decodes document bytes into a request.
pub fn deserialize(bytes: &[u8]) -> Result<Request, DocumentError> {
    serde_json::from_slice(bytes).map_err(DocumentError::Deserialization)
}

/// Writes the document next to `path` first, then renames it into place,
/// so a failed save leaves the previous file intact.
pub fn save(path: &Path, request: &Request) -> Result<(), DocumentError> {
    let bytes = serialize(request)?;

    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "document".into());
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let write_result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&tmp_path);
        tracing::warn!(path = %path.display(), error = %e, "Document save failed");
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Document saved");
    Ok(())
}

/// Reads and decodes a document file.
pub fn load(path: &Path) -> Result<Request, DocumentError> {
    let bytes = fs::read(path)?;
    let request = deserialize(&bytes)?;
    tracing::debug!(path = %path.display(), "Document loaded");
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HttpMethod, Mapping};

    fn sample() -> Request {
        let mut params = Mapping::new();
        params.insert("q".into(), Some("x".into()));
        params.insert("flag".into(), None);
        let mut headers = Mapping::new();
        headers.insert("Accept".into(), Some("application/json".into()));
        Request::new(
            "https://httpbin.org/anything/a/b",
            HttpMethod::POST,
            params,
            headers,
            r#"{"name":"test"}"#,
        )
    }

    #[test]
    fn test_serialize_uses_snake_case_and_plain_slashes() {
        let text = String::from_utf8(serialize(&sample()).unwrap()).unwrap();
        assert!(text.contains(r#""http_method":"POST""#));
        assert!(text.contains(r#""url":"https://httpbin.org/anything/a/b""#));
        assert!(text.contains(r#""flag":null"#));
        assert!(!text.contains("httpMethod"));
        assert!(!text.contains("\\/"));
    }

    #[test]
    fn test_roundtrip_reproduces_request() {
        let req = sample();
        assert_eq!(deserialize(&serialize(&req).unwrap()).unwrap(), req);
        let empty = Request::default();
        assert_eq!(deserialize(&serialize(&empty).unwrap()).unwrap(), empty);
    }

    #[test]
    fn test_deserialize_accepts_missing_or_null_params() {
        let missing = br#"{"url":"u","http_method":"GET","headers":{},"body":""}"#;
        assert!(deserialize(missing).unwrap().params.is_empty());
        let null = br#"{"url":"u","http_method":"GET","params":null,"headers":{},"body":""}"#;
        assert!(deserialize(null).unwrap().params.is_empty());
    }

    #[test]
    fn test_deserialize_strips_body_backslashes() {
        let doc = br#"{"url":"u","http_method":"PUT","headers":{},"body":"a\\b"}"#;
        assert_eq!(deserialize(doc).unwrap().body(), "ab");
    }

    #[test]
    fn test_deserialize_accepts_any_method_case() {
        let doc = br#"{"url":"http://a.io","http_method":"post","headers":{},"body":""}"#;
        assert_eq!(deserialize(doc).unwrap().http_method, HttpMethod::POST);
        let doc = br#"{"url":"http://a.io","http_method":"Patch","headers":{},"body":""}"#;
        assert_eq!(deserialize(doc).unwrap().http_method, HttpMethod::PATCH);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        assert!(matches!(
            deserialize(b"not json"),
            Err(DocumentError::Deserialization(_))
        ));
        // camelCase keys are not the document format
        let camel = br#"{"url":"u","httpMethod":"GET","headers":{},"body":""}"#;
        assert!(deserialize(camel).is_err());
        let bad_header = br#"{"url":"u","http_method":"GET","headers":{"a":1},"body":""}"#;
        assert!(deserialize(bad_header).is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        let req = sample();

        save(&path, &req).unwrap();
        assert_eq!(load(&path).unwrap(), req);
        assert!(!dir.path().join("request.json.tmp").exists());
    }

    #[test]
    fn test_failed_save_keeps_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        save(&path, &sample()).unwrap();

        // a directory squatting on the temp name makes the write fail
        fs::create_dir(dir.path().join("request.json.tmp")).unwrap();
        assert!(save(&path, &Request::default()).is_err());
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }
}

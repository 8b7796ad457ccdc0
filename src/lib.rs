//! # Ravens Rock
//!
//! A minimal document-based REST client core: one request in, one response out.
//!
//! ## Features
//! - Request model with url, method, query params, headers and body
//! - JSON editor text for headers/params, validated before sending
//! - HTTP execution reduced to response text + status code
//! - Request documents saved as snake_case JSON, plus autosave drafts
//!
//! ## Architecture
//! - App Layer - editing session behind one document
//! - Network Layer (Tokio) - async HTTP execution over a shared client
//! - Persistence - document codec and draft storage

pub mod app;
pub mod codec;
pub mod constants;
pub mod document;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod storage;

// Re-export commonly used types
pub use app::Session;
pub use error::{CodecError, DocumentError, RequestError};
pub use messages::{NetworkCommand, NetworkResponse};
pub use models::{BodyFormat, ExecutionResult, HttpMethod, Mapping, Request};
pub use network::{ClientConfig, Executor, NetworkActor};
pub use storage::Storage;

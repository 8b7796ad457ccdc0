//! Network layer - HTTP request execution
//!
//! The Network actor receives send commands and replies once per request.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{build_request, build_url, create_client, execute_request, ClientConfig, Executor};

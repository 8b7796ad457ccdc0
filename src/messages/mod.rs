//! Message types passed between a session and the network actor.

pub mod network;

pub use network::{NetworkCommand, NetworkResponse};

//! Network messages - communication between callers and the Network layer

use crate::models::{ExecutionResult, Request};

/// Commands sent to the Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Send one request; answered by exactly one `Completed` with the same id
    Send { id: u64, request: Request },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent back from the Network layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse {
    Completed { id: u64, result: ExecutionResult },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
        }
    }

    pub fn into_result(self) -> ExecutionResult {
        match self {
            NetworkResponse::Completed { result, .. } => result,
        }
    }
}

//! Network messages - communication between App and Network layers

use crate::models::Request;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute an HTTP request on a background task
    ExecuteRequest { id: u64, request: Request },
    /// Shutdown the network actor
    Shutdown,
}

/// Results sent from Network layer to App layer.
///
/// Exactly one response is delivered per `ExecuteRequest`.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The server answered and the body decoded as UTF-8
    Completed {
        id: u64,
        status: u16,
        body: String,
        time_ms: u64,
    },
    /// No usable response. `body` holds the text to display: empty when the
    /// transport produced nothing, a decode note when the bytes were not
    /// valid UTF-8.
    Failed {
        id: u64,
        body: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}

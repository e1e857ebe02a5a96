//! Shared response body types for API handlers.

use serde::Serialize;

/// Acknowledgement body for operations that return no entity, e.g.
/// `{ "message": "Show deleted successfully" }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

//! Shared response envelope types for API handlers.
//!
//! Every response body carries a top-level `success` flag next to the
//! payload's own fields:
//!
//! ```text
//! { "success": true,  "message": "...", "contact": { ... } }
//! { "success": false, "message": "..." }
//! ```

use serde::Serialize;

/// `{ "success": bool, ...T }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }

    pub fn failure(body: T) -> Self {
        Self {
            success: false,
            body,
        }
    }
}

/// A bare human-readable message.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

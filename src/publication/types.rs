/// Core publication type definitions
///
/// Defines the publication and author records persisted in SQLite, plus the
/// wire-level operation result returned by the moderation endpoints.

use serde::{Deserialize, Serialize};

/// A unit of user-submitted content subject to moderation
///
/// Created by the submission flow with `pending_approval = true`. Only the
/// moderation service mutates it afterwards: approval flips the flag,
/// rejection and deletion remove the row entirely. There is no third state —
/// a rejected publication simply no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Unique identifier, assigned by the store at creation
    pub id: i64,
    /// Publication title, never empty
    pub title: String,
    /// Publication body, never empty
    pub content: String,
    /// Identifier of the owning user, used to route notifications
    pub author_id: i64,
    /// `true` while awaiting moderation, `false` once approved
    pub pending_approval: bool,
}

/// Identifying data of a publication's author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Unique user identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact address; absent means approval notifications cannot be routed
    pub email: Option<String>,
}

/// A pending publication joined with its author, as returned by the listing
#[derive(Debug, Clone, Serialize)]
pub struct PendingPublication {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// Wire-level outcome of a moderation operation
///
/// Serialized on every failure response so callers have a single
/// failure-detection idiom regardless of which endpoint they hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl OperationResult {
    /// Successful outcome with no message
    pub fn ok() -> Self {
        Self { success: true, error_message: None }
    }

    /// Failed outcome carrying a user-facing message
    pub fn error(message: impl Into<String>) -> Self {
        Self { success: false, error_message: Some(message.into()) }
    }
}

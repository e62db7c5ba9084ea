/// HTTP API Layer
///
/// This module provides the REST endpoints for the moderation workflow.
/// It handles request extraction, delegation to the workflow service, and
/// the mapping of structured errors onto HTTP status codes.

// Moderation endpoints (list pending, approve, reject, update, delete)
pub mod publications;

// Re-export router builder and shared state
pub use publications::{create_publication_routes, AppState};

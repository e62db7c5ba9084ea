/// Publication Domain Layer
///
/// This module holds the publication domain types and their SQLite
/// persistence:
/// - Type definitions (Publication, Author, PendingPublication)
/// - SQLite store with sqlx (lookup, pending listing, upsert, removal)

// Core publication type definitions
pub mod types;

// SQLite persistence layer for publications
pub mod store;

// Re-export commonly used types
pub use store::PublicationStore;
pub use types::{Author, OperationResult, PendingPublication, Publication};

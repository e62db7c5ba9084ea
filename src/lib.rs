/// Tablon: moderation backend for user-submitted publications
///
/// This library provides the approval workflow for publications: pending
/// listings, approval with author notification, rejection, update, and
/// deletion, over SQLite persistence and an SMTP notifier.

// Core configuration and setup
pub mod config;

// Publication domain layer - types and SQLite persistence
pub mod publication;

// Moderation workflow layer - the approval service and its error taxonomy
pub mod moderation;

// Notification layer - out-of-band delivery to authors
pub mod notify;

// HTTP API layer - REST endpoints for the moderation workflow
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use moderation::{ModerationError, ModerationService};
pub use notify::{Notifier, NotifyError};
pub use publication::{Author, OperationResult, PendingPublication, Publication, PublicationStore};
pub use server::start_server;

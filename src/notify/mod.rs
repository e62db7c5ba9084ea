/// Notification Layer
///
/// Out-of-band delivery of moderation messages, decoupled from storage.
/// The moderation service only sees the `Notifier` trait; the SMTP-backed
/// implementation lives in `email` and a recording mock in `testing`.

use async_trait::async_trait;
use thiserror::Error;

// SMTP notifier backed by lettre
pub mod email;

// Recording mock for tests
#[cfg(test)]
pub mod testing;

pub use email::EmailNotifier;

/// Errors a notifier can report
///
/// Recipient problems are distinguished from transport rejection so callers
/// can tell a data issue (no address on file) from an SMTP outage.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// No user exists with the given ID
    #[error("No se encontró un usuario con el ID {0}.")]
    UnknownRecipient(i64),

    /// The user exists but has no usable contact address
    #[error("El usuario con ID {0} no tiene un correo electrónico válido.")]
    MissingAddress(i64),

    /// The underlying transport rejected the send
    #[error("Error SMTP al enviar el correo: {0}")]
    Transport(String),

    /// Recipient lookup failed at the storage layer
    #[error("Error al consultar el destinatario: {0}")]
    Lookup(String),
}

/// Out-of-band message delivery to a user
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message to the given user
    async fn notify(&self, user_id: i64, subject: &str, body: &str) -> Result<(), NotifyError>;
}

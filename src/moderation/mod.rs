/// Moderation Workflow Layer
///
/// The sole authority over a publication's moderation state. Everything that
/// flips, rewrites, or removes a publication goes through this module:
/// - Structured error taxonomy (ModerationError)
/// - The approval workflow service (list/approve/reject/update/delete)

use crate::notify::NotifyError;
use thiserror::Error;

// Approval workflow service
pub mod service;

pub use service::ModerationService;

/// Structured failure taxonomy for moderation operations
///
/// One error type across every operation, so callers have a single
/// failure-detection idiom. `Display` carries the user-facing message;
/// storage and transport variants deliberately hide the underlying detail
/// behind a generic message, keeping internals out of API responses (the
/// source cause stays attached for logging).
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Non-positive identifier, rejected before any store access
    #[error("El ID de la publicación debe ser un número positivo.")]
    InvalidId,

    /// Empty or whitespace-only title on update
    #[error("El título de la publicación no puede estar vacío.")]
    EmptyTitle,

    /// Empty or whitespace-only content on update
    #[error("El contenido de la publicación no puede estar vacío.")]
    EmptyContent,

    /// The referenced publication does not exist
    #[error("Publicación no encontrada.")]
    NotFound,

    /// Illegal transition: the publication is already approved
    #[error("La publicación ya está aprobada.")]
    AlreadyApproved,

    /// The store could not persist or remove the record; the cause is kept
    /// for logging but never serialized
    #[error("Error al actualizar la base de datos.")]
    Storage(anyhow::Error),

    /// The notifier could not deliver; the approval itself already committed
    #[error("Error al enviar el correo electrónico.")]
    Notification(#[source] NotifyError),
}

impl ModerationError {
    /// Whether this failure is the caller's fault (bad input)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidId | Self::EmptyTitle | Self::EmptyContent
        )
    }
}

/// Approval workflow service
///
/// Orchestrates moderation state transitions on publications: listing the
/// pending set, approving (with an author notification), rejecting, updating,
/// and deleting. Store and notifier are injected; the service holds no
/// publication state of its own and re-reads the store on every operation.

use crate::{
    moderation::ModerationError,
    notify::Notifier,
    publication::{PendingPublication, Publication, PublicationStore},
};
use std::sync::Arc;

/// Subject line for approval notifications
const APPROVAL_SUBJECT: &str = "Publicación aprobada";

/// The moderation workflow service
///
/// The only component allowed to mutate a publication's moderation state.
pub struct ModerationService {
    /// Publication persistence
    store: PublicationStore,
    /// Out-of-band notification delivery, invoked only on approval
    notifier: Arc<dyn Notifier>,
}

impl ModerationService {
    /// Create the service with its injected collaborators
    pub fn new(store: PublicationStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// List all publications awaiting moderation, with their authors attached
    ///
    /// No side effects; an empty pending set is an empty vec, not an error.
    pub async fn list_pending(&self) -> Result<Vec<PendingPublication>, ModerationError> {
        self.store
            .find_all_pending()
            .await
            .map_err(ModerationError::Storage)
    }

    /// Approve a pending publication and notify its author
    ///
    /// The persisted flip strictly precedes the notification attempt: an
    /// approval is never announced unless it durably happened. Conversely a
    /// notification failure does not roll the approval back — the error
    /// reports the delivery problem while the state change stands.
    pub async fn approve(&self, id: i64) -> Result<(), ModerationError> {
        if id <= 0 {
            return Err(ModerationError::InvalidId);
        }

        let publication = self
            .store
            .find_by_id(id)
            .await
            .map_err(ModerationError::Storage)?
            .ok_or(ModerationError::NotFound)?;

        if !publication.pending_approval {
            return Err(ModerationError::AlreadyApproved);
        }

        // Conditional update is the guard against a concurrent approval: the
        // read above may be stale, this flip cannot be.
        let flipped = self
            .store
            .approve_if_pending(id)
            .await
            .map_err(ModerationError::Storage)?;
        if !flipped {
            return Err(ModerationError::AlreadyApproved);
        }

        tracing::info!("Approved publication {} ('{}')", id, publication.title);

        self.notifier
            .notify(
                publication.author_id,
                APPROVAL_SUBJECT,
                &format!("Tu publicación '{}' ha sido aprobada.", publication.title),
            )
            .await
            .map_err(ModerationError::Notification)
    }

    /// Reject a pending publication, removing it permanently
    ///
    /// No notification is sent; rejection is silent by design.
    pub async fn reject(&self, id: i64) -> Result<(), ModerationError> {
        self.remove(id).await.inspect(|_| {
            tracing::info!("Rejected publication {}", id);
        })
    }

    /// Overwrite a publication's title and content in place
    ///
    /// Validation runs before any store access; `pending_approval` and `id`
    /// are left untouched. Returns the updated record after a confirmed
    /// persist.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
    ) -> Result<Publication, ModerationError> {
        if id <= 0 {
            return Err(ModerationError::InvalidId);
        }
        if title.trim().is_empty() {
            return Err(ModerationError::EmptyTitle);
        }
        if content.trim().is_empty() {
            return Err(ModerationError::EmptyContent);
        }

        let mut publication = self
            .store
            .find_by_id(id)
            .await
            .map_err(ModerationError::Storage)?
            .ok_or(ModerationError::NotFound)?;

        publication.title = title.to_string();
        publication.content = content.to_string();

        self.store
            .save(&publication)
            .await
            .map_err(ModerationError::Storage)?;

        tracing::info!("Updated publication {}", id);
        Ok(publication)
    }

    /// Delete a publication, removing it permanently
    ///
    /// Same removal semantics as reject, exposed as its own operation.
    pub async fn delete(&self, id: i64) -> Result<(), ModerationError> {
        self.remove(id).await.inspect(|_| {
            tracing::info!("Deleted publication {}", id);
        })
    }

    /// Shared removal path for reject and delete
    async fn remove(&self, id: i64) -> Result<(), ModerationError> {
        if id <= 0 {
            return Err(ModerationError::InvalidId);
        }

        let removed = self
            .store
            .remove_by_id(id)
            .await
            .map_err(ModerationError::Storage)?;
        if !removed {
            return Err(ModerationError::NotFound);
        }
        Ok(())
    }
}

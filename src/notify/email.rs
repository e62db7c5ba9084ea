/// SMTP notifier backed by lettre
///
/// Resolves the recipient's address through the publication store, then
/// delivers the message over an async SMTP transport configured from
/// `EmailConfig`. The transport is built once at startup; building it does
/// not open a connection, so startup does not depend on the relay being up.

use crate::{
    config::EmailConfig,
    notify::{Notifier, NotifyError},
    publication::PublicationStore,
};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

/// Notifier that delivers approval messages by email
pub struct EmailNotifier {
    /// Store used to resolve user IDs to contact addresses
    store: PublicationStore,
    /// Async SMTP transport
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    /// Sender mailbox for all outbound mail
    from: Mailbox,
}

impl EmailNotifier {
    /// Build a notifier from SMTP configuration
    ///
    /// Fails if the configured relay hostname or sender address is invalid.
    pub fn new(config: &EmailConfig, store: PublicationStore) -> Result<Self> {
        let from: Mailbox = config
            .from_address
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid sender address '{}': {}", config.from_address, e))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ))
            .build();

        Ok(Self { store, mailer, from })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, user_id: i64, subject: &str, body: &str) -> Result<(), NotifyError> {
        let author = self
            .store
            .find_author(user_id)
            .await
            .map_err(|e| NotifyError::Lookup(e.to_string()))?
            .ok_or(NotifyError::UnknownRecipient(user_id))?;

        let address = author
            .email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
            .ok_or(NotifyError::MissingAddress(user_id))?;

        let to: Mailbox = address
            .parse()
            .map_err(|_| NotifyError::MissingAddress(user_id))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        tracing::info!("Sent notification to user {}: {}", user_id, subject);
        Ok(())
    }
}

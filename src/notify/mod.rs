//! Notification collaborators.
//!
//! The scheduling engine treats delivery as a black box: in-app
//! notifications, email, and user->address resolution live behind
//! traits. Every caller tolerates failure -- a dead SMTP relay must
//! never roll back a booking or a cancellation.

use anyhow::Result;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::{debug, info};
use serde_json::Value;
use uuid::Uuid;

use crate::config::SmtpConfig;

/// In-app notification fan-out. Persistence of the notification bell
/// is owned by a collaborator service.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user_id: Uuid, title: &str, message: &str, payload: Value)
        -> Result<()>;
}

pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(
        &self,
        user_id: Uuid,
        title: &str,
        message: &str,
        payload: Value,
    ) -> Result<()> {
        info!("notification for {user_id}: {title} - {message}");
        debug!("notification payload for {user_id}: {payload}");
        Ok(())
    }
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<()>;
}

/// SMTP relay delivery. The blocking lettre send is moved onto the
/// blocking pool so a slow relay cannot stall the runtime.
pub struct SmtpEmailSender {
    relay: String,
    port: u16,
    username: String,
    password: String,
    from_address: String,
}

impl SmtpEmailSender {
    pub fn new(config: &SmtpConfig) -> Self {
        Self {
            relay: config.relay.clone(),
            port: config.port,
            username: config.username.clone(),
            password: config.password.clone(),
            from_address: config.from_address.clone(),
        }
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid from address: {e}"))?,
            )
            .to(to
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())?;

        let creds = Credentials::new(self.username.clone(), self.password.clone());
        let mailer = SmtpTransport::relay(&self.relay)?
            .port(self.port)
            .credentials(creds)
            .build();

        tokio::task::spawn_blocking(move || mailer.send(&email)).await??;
        Ok(())
    }
}

/// Stand-in when no SMTP relay is configured; logs and reports success
/// so callers keep their best-effort semantics.
pub struct NullEmailSender;

#[async_trait]
impl EmailSender for NullEmailSender {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<()> {
        info!("smtp not configured; skipping email to {to}: {subject}");
        Ok(())
    }
}

/// Resolves a user id to an email address. Identity data is external;
/// a `None` simply means no email delivery for that recipient.
pub trait UserDirectory: Send + Sync {
    fn email_of(&self, user_id: Uuid) -> Option<String>;
}

pub struct EmptyDirectory;

impl UserDirectory for EmptyDirectory {
    fn email_of(&self, _user_id: Uuid) -> Option<String> {
        None
    }
}

//! Windowed reminder delivery.
//!
//! For each threshold (24h, 1h before start) a run selects CONFIRMED
//! meetings whose lead time falls inside `threshold +/- tolerance` and
//! whose sent-flag is still false, delivers to every stakeholder, then
//! flips the flag. The flag flip is the exactly-once guarantee: a
//! second run inside the same window selects nothing. The tolerance
//! must be at least as wide as the trigger cadence or meetings slip
//! between runs.

use chrono::{Duration, Utc};
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::meetings::MeetingStore;
use crate::notify::{EmailSender, Notifier, UserDirectory};
use crate::shared::models::{Meeting, ReminderKind};

use super::RunSummary;

const DELIVERY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

pub struct ReminderScheduler {
    store: Arc<MeetingStore>,
    notifier: Arc<dyn Notifier>,
    email: Arc<dyn EmailSender>,
    directory: Arc<dyn UserDirectory>,
    tolerance: Duration,
}

impl ReminderScheduler {
    pub fn new(
        store: Arc<MeetingStore>,
        notifier: Arc<dyn Notifier>,
        email: Arc<dyn EmailSender>,
        directory: Arc<dyn UserDirectory>,
        tolerance_minutes: i64,
    ) -> Self {
        Self {
            store,
            notifier,
            email,
            directory,
            tolerance: Duration::minutes(tolerance_minutes),
        }
    }

    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        for kind in ReminderKind::ALL {
            let now = Utc::now();
            let lower = now + kind.lead() - self.tolerance;
            let upper = now + kind.lead() + self.tolerance;
            let due = self.store.confirmed_due_for_reminder(kind, lower, upper).await;

            for meeting in due {
                summary.processed += 1;
                self.deliver_to_stakeholders(&meeting, kind, &mut summary)
                    .await;
                if self.store.mark_reminder_sent(meeting.id, kind).await {
                    summary.succeeded += 1;
                }
            }
        }

        info!(
            "reminder run: {} due, {} marked, {} delivery errors",
            summary.processed,
            summary.succeeded,
            summary.errors.len()
        );
        summary
    }

    /// Per-recipient delivery, each attempt isolated behind a timeout
    /// so one stuck send cannot hold up the rest of the batch.
    async fn deliver_to_stakeholders(
        &self,
        meeting: &Meeting,
        kind: ReminderKind,
        summary: &mut RunSummary,
    ) {
        for user_id in self.store.recipients_of(meeting).await {
            let delivery = self.deliver_one(meeting, kind, user_id);
            match tokio::time::timeout(DELIVERY_TIMEOUT, delivery).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!(
                        "reminder delivery failed for meeting {} to {user_id}: {e}",
                        meeting.id
                    );
                    summary
                        .errors
                        .push(format!("meeting {}: {e}", meeting.id));
                }
                Err(_) => {
                    warn!(
                        "reminder delivery timed out for meeting {} to {user_id}",
                        meeting.id
                    );
                    summary
                        .errors
                        .push(format!("meeting {}: delivery timed out", meeting.id));
                }
            }
        }
    }

    async fn deliver_one(
        &self,
        meeting: &Meeting,
        kind: ReminderKind,
        user_id: Uuid,
    ) -> anyhow::Result<()> {
        let title = format!("Meeting reminder ({})", kind.label());
        let message = format!(
            "\"{}\" starts at {}",
            meeting.title, meeting.start_time
        );
        self.notifier
            .notify(
                user_id,
                &title,
                &message,
                json!({ "meeting_id": meeting.id, "threshold": kind.label() }),
            )
            .await?;

        if let Some(address) = self.directory.email_of(user_id) {
            let subject = format!("Reminder: {} starts at {}", meeting.title, meeting.start_time);
            let html = format!(
                "<p>Your meeting \"{}\" starts at {}.</p>",
                meeting.title, meeting.start_time
            );
            self.email.send(&address, &subject, &html).await?;
        }
        Ok(())
    }
}

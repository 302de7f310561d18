use std::sync::Arc;

use crate::audit::{AuditSink, LogAuditSink};
use crate::config::AppConfig;
use crate::jobs::{CompletionSweeper, ReminderScheduler};
use crate::meetings::{MeetingService, MeetingStore};
use crate::notify::{
    EmailSender, EmptyDirectory, LogNotifier, Notifier, NullEmailSender, SmtpEmailSender,
    UserDirectory,
};
use crate::slots::SlotStore;

pub struct AppState {
    pub config: AppConfig,
    pub slots: Arc<SlotStore>,
    pub meetings: Arc<MeetingStore>,
    pub meeting_service: Arc<MeetingService>,
    pub reminders: Arc<ReminderScheduler>,
    pub completion: Arc<CompletionSweeper>,
}

impl AppState {
    /// Production wiring: SMTP when configured, log-backed
    /// collaborators otherwise.
    pub fn new(config: AppConfig) -> Arc<Self> {
        let email: Arc<dyn EmailSender> = match &config.smtp {
            Some(smtp) => Arc::new(SmtpEmailSender::new(smtp)),
            None => Arc::new(NullEmailSender),
        };
        Self::with_collaborators(
            config,
            Arc::new(LogNotifier),
            email,
            Arc::new(EmptyDirectory),
            Arc::new(LogAuditSink),
        )
    }

    pub fn with_collaborators(
        config: AppConfig,
        notifier: Arc<dyn Notifier>,
        email: Arc<dyn EmailSender>,
        directory: Arc<dyn UserDirectory>,
        audit: Arc<dyn AuditSink>,
    ) -> Arc<Self> {
        let slots = Arc::new(SlotStore::new());
        let meetings = Arc::new(MeetingStore::new());
        let meeting_service = Arc::new(MeetingService::new(
            meetings.clone(),
            slots.clone(),
            notifier.clone(),
            email.clone(),
            directory.clone(),
            audit.clone(),
            config.booking.policy,
        ));
        let reminders = Arc::new(ReminderScheduler::new(
            meetings.clone(),
            notifier,
            email,
            directory,
            config.jobs.reminder_tolerance_minutes,
        ));
        let completion = Arc::new(CompletionSweeper::new(meetings.clone(), audit));

        Arc::new(Self {
            config,
            slots,
            meetings,
            meeting_service,
            reminders,
            completion,
        })
    }
}

//! Background job loop.
//!
//! Each job carries a cron expression; a tick loop checks which
//! schedules are due and runs them, recomputing the next occurrence
//! afterwards. The jobs themselves are idempotent, so the loop
//! coexisting with HTTP-triggered runs needs no coordination.

use anyhow::Context;
use chrono::{DateTime, Utc};
use cron::Schedule;
use log::{error, info};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::JobsConfig;

use super::{CompletionSweeper, ReminderScheduler};

const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

pub struct JobScheduler {
    reminders: Arc<ReminderScheduler>,
    completion: Arc<CompletionSweeper>,
    reminder_schedule: Schedule,
    completion_schedule: Schedule,
    next_reminder: RwLock<Option<DateTime<Utc>>>,
    next_completion: RwLock<Option<DateTime<Utc>>>,
}

impl JobScheduler {
    pub fn from_config(
        config: &JobsConfig,
        reminders: Arc<ReminderScheduler>,
        completion: Arc<CompletionSweeper>,
    ) -> anyhow::Result<Self> {
        let reminder_schedule = Schedule::from_str(&config.reminder_cron)
            .with_context(|| format!("invalid reminder cron: {}", config.reminder_cron))?;
        let completion_schedule = Schedule::from_str(&config.completion_cron)
            .with_context(|| format!("invalid completion cron: {}", config.completion_cron))?;

        let next_reminder = reminder_schedule.upcoming(Utc).next();
        let next_completion = completion_schedule.upcoming(Utc).next();

        Ok(Self {
            reminders,
            completion,
            reminder_schedule,
            completion_schedule,
            next_reminder: RwLock::new(next_reminder),
            next_completion: RwLock::new(next_completion),
        })
    }

    pub fn start(self: Arc<Self>) {
        info!("starting job scheduler");
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                if let Err(e) = self.check_and_run_jobs().await {
                    error!("error running scheduled jobs: {e}");
                }
            }
        });
    }

    async fn check_and_run_jobs(&self) -> anyhow::Result<()> {
        let now = Utc::now();

        if self.take_due(&self.next_reminder, &self.reminder_schedule, now).await {
            let summary = self.reminders.run().await;
            info!(
                "scheduled reminder run: {} processed, {} errors",
                summary.processed,
                summary.errors.len()
            );
        }

        if self
            .take_due(&self.next_completion, &self.completion_schedule, now)
            .await
        {
            let summary = self.completion.run().await;
            info!(
                "scheduled completion sweep: {} processed, {} errors",
                summary.processed,
                summary.errors.len()
            );
        }

        Ok(())
    }

    /// Returns true when the job's next occurrence has passed, rolling
    /// the stored occurrence forward in the same step.
    async fn take_due(
        &self,
        next: &RwLock<Option<DateTime<Utc>>>,
        schedule: &Schedule,
        now: DateTime<Utc>,
    ) -> bool {
        let mut next = next.write().await;
        match *next {
            Some(due) if due <= now => {
                *next = schedule.upcoming(Utc).next();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn default_cron_expressions_parse() {
        let config = crate::config::AppConfig::default();
        assert!(Schedule::from_str(&config.jobs.reminder_cron).is_ok());
        assert!(Schedule::from_str(&config.jobs.completion_cron).is_ok());
    }

    #[tokio::test]
    async fn take_due_rolls_forward_once() {
        let schedule = Schedule::from_str("0 */5 * * * *").unwrap();
        let next = RwLock::new(Some(Utc::now() - Duration::minutes(1)));

        let store = Arc::new(crate::meetings::MeetingStore::new());
        let scheduler = JobScheduler {
            reminders: Arc::new(ReminderScheduler::new(
                store.clone(),
                Arc::new(crate::notify::LogNotifier),
                Arc::new(crate::notify::NullEmailSender),
                Arc::new(crate::notify::EmptyDirectory),
                60,
            )),
            completion: Arc::new(CompletionSweeper::new(
                store,
                Arc::new(crate::audit::LogAuditSink),
            )),
            reminder_schedule: schedule.clone(),
            completion_schedule: schedule.clone(),
            next_reminder: next,
            next_completion: RwLock::new(None),
        };

        let now = Utc::now();
        assert!(
            scheduler
                .take_due(&scheduler.next_reminder, &schedule, now)
                .await
        );
        // rolled forward; an immediate re-check is not due
        assert!(
            !scheduler
                .take_due(&scheduler.next_reminder, &schedule, now)
                .await
        );
        // a never-scheduled job is never due
        assert!(
            !scheduler
                .take_due(&scheduler.next_completion, &schedule, now)
                .await
        );
    }
}

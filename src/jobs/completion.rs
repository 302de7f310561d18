//! Completion sweep.
//!
//! Confirmed meetings whose end time has elapsed are moved to
//! COMPLETED. The transition goes through the status machine under the
//! store lock, so a cancellation that lands first simply makes the
//! sweep attempt illegal -- that race is skipped silently, not
//! reported as an error. Re-running over an already-completed meeting
//! selects nothing.

use chrono::Utc;
use log::{debug, info};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::audit::AuditSink;
use crate::meetings::status::MeetingStatus;
use crate::meetings::MeetingStore;
use crate::shared::error::SchedulingError;

use super::RunSummary;

pub struct CompletionSweeper {
    store: Arc<MeetingStore>,
    audit: Arc<dyn AuditSink>,
}

impl CompletionSweeper {
    pub fn new(store: Arc<MeetingStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    pub async fn run(&self) -> RunSummary {
        let now = Utc::now();
        let elapsed = self.store.confirmed_elapsed(now).await;
        let mut summary = RunSummary::default();

        for meeting in elapsed {
            self.complete_one(meeting.id, &mut summary).await;
        }

        info!(
            "completion sweep: {} elapsed, {} completed",
            summary.processed, summary.succeeded
        );
        summary
    }

    async fn complete_one(&self, meeting_id: Uuid, summary: &mut RunSummary) {
        summary.processed += 1;
        match self
            .store
            .try_transition(meeting_id, MeetingStatus::Completed)
            .await
        {
            Ok((old, updated)) => {
                self.audit.record_transition(
                    updated.id,
                    "complete",
                    Some(old),
                    updated.status,
                    "SYSTEM",
                    json!({ "end_time": updated.end_time }),
                );
                summary.succeeded += 1;
            }
            // lost the race against a cancellation (or a concurrent
            // sweep); the meeting is no longer ours to complete
            Err(SchedulingError::InvalidTransition { .. })
            | Err(SchedulingError::MeetingNotFound(_)) => {
                debug!("skipping meeting {meeting_id}: state moved since selection");
            }
            Err(e) => summary.errors.push(format!("meeting {meeting_id}: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Meeting, MeetingType};
    use crate::tests::test_util::RecordingAudit;
    use chrono::Duration;

    async fn meeting_with(
        store: &MeetingStore,
        status: MeetingStatus,
        start_offset: Duration,
        duration_minutes: i64,
    ) -> Meeting {
        let now = Utc::now();
        let start = now + start_offset;
        let meeting = Meeting {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            institution_id: Uuid::new_v4(),
            slot_id: None,
            start_time: start,
            end_time: start + Duration::minutes(duration_minutes),
            duration_minutes,
            status,
            title: "Portfolio review".to_string(),
            join_url: None,
            agenda: None,
            reminder_24h_sent: false,
            reminder_1h_sent: false,
            meeting_type: MeetingType::OneOnOne,
            created_at: now,
            updated_at: now,
        };
        store.insert(meeting.clone(), &[meeting.student_id]).await;
        meeting
    }

    #[tokio::test]
    async fn completes_elapsed_confirmed_meetings_only() {
        let store = Arc::new(MeetingStore::new());
        let audit = Arc::new(RecordingAudit::new());

        let done = meeting_with(&store, MeetingStatus::Confirmed, Duration::hours(-2), 30).await;
        // started but not yet over
        let running =
            meeting_with(&store, MeetingStatus::Confirmed, Duration::minutes(-10), 60).await;
        let upcoming =
            meeting_with(&store, MeetingStatus::Confirmed, Duration::hours(3), 30).await;
        let pending = meeting_with(&store, MeetingStatus::Pending, Duration::hours(-2), 30).await;

        let sweeper = CompletionSweeper::new(store.clone(), audit.clone());
        let summary = sweeper.run().await;
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.succeeded, 1);
        assert!(summary.errors.is_empty());

        assert_eq!(
            store.get(done.id).await.unwrap().status,
            MeetingStatus::Completed
        );
        assert_eq!(
            store.get(running.id).await.unwrap().status,
            MeetingStatus::Confirmed
        );
        assert_eq!(
            store.get(upcoming.id).await.unwrap().status,
            MeetingStatus::Confirmed
        );
        assert_eq!(
            store.get(pending.id).await.unwrap().status,
            MeetingStatus::Pending
        );

        let actions = audit.actions_for(done.id);
        assert_eq!(actions, vec!["complete".to_string()]);
    }

    #[tokio::test]
    async fn rerun_is_a_no_op() {
        let store = Arc::new(MeetingStore::new());
        let audit = Arc::new(RecordingAudit::new());
        meeting_with(&store, MeetingStatus::Confirmed, Duration::hours(-2), 30).await;

        let sweeper = CompletionSweeper::new(store.clone(), audit.clone());
        assert_eq!(sweeper.run().await.succeeded, 1);

        let summary = sweeper.run().await;
        assert_eq!(summary.processed, 0);
        assert_eq!(summary.succeeded, 0);
    }

    #[tokio::test]
    async fn lost_race_with_cancellation_is_skipped_silently() {
        let store = Arc::new(MeetingStore::new());
        let audit = Arc::new(RecordingAudit::new());
        let meeting =
            meeting_with(&store, MeetingStatus::Confirmed, Duration::hours(-2), 30).await;

        // cancellation lands after selection but before the transition
        store
            .try_transition(meeting.id, MeetingStatus::Cancelled)
            .await
            .unwrap();

        let sweeper = CompletionSweeper::new(store.clone(), audit.clone());
        let mut summary = RunSummary::default();
        sweeper.complete_one(meeting.id, &mut summary).await;

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.succeeded, 0);
        assert!(summary.errors.is_empty());
        assert_eq!(
            store.get(meeting.id).await.unwrap().status,
            MeetingStatus::Cancelled
        );
        assert!(audit.actions_for(meeting.id).is_empty());
    }
}

//! Audit trail collaborator.
//!
//! Every status change is reported here after it commits. Storage of
//! the trail is external; the default sink writes the structured log
//! line. A sink failure must never revert the meeting mutation it
//! describes.

use log::info;
use serde_json::Value;
use uuid::Uuid;

use crate::meetings::status::MeetingStatus;

pub trait AuditSink: Send + Sync {
    fn record_transition(
        &self,
        meeting_id: Uuid,
        action: &str,
        old_status: Option<MeetingStatus>,
        new_status: MeetingStatus,
        actor: &str,
        metadata: Value,
    );
}

pub struct LogAuditSink;

impl AuditSink for LogAuditSink {
    fn record_transition(
        &self,
        meeting_id: Uuid,
        action: &str,
        old_status: Option<MeetingStatus>,
        new_status: MeetingStatus,
        actor: &str,
        metadata: Value,
    ) {
        let old = old_status.map_or_else(|| "-".to_string(), |s| s.to_string());
        info!(
            "audit: meeting={meeting_id} action={action} old={old} new={new_status} actor={actor} metadata={metadata}"
        );
    }
}

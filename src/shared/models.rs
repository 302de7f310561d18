use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::meetings::status::MeetingStatus;

/// An institution-published, bookable time window.
///
/// `booked_by` tracks the single meeting holding the claim; a slot with
/// `is_booked` set always carries it, which is what rules out the
/// orphaned-lock state (booked slot with no referencing meeting).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_booked: bool,
    pub booked_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingType {
    OneOnOne,
    Group,
}

/// Reminder thresholds tracked per meeting. Each maps to one monotonic
/// sent-flag; the flag only resets when an accepted reschedule moves
/// the meeting, which re-earns both reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    TwentyFourHour,
    OneHour,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 2] = [ReminderKind::TwentyFourHour, ReminderKind::OneHour];

    /// Lead time before `start_time` at which the reminder is due.
    pub fn lead(self) -> Duration {
        match self {
            ReminderKind::TwentyFourHour => Duration::hours(24),
            ReminderKind::OneHour => Duration::hours(1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReminderKind::TwentyFourHour => "24h",
            ReminderKind::OneHour => "1h",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: Uuid,
    pub student_id: Uuid,
    pub institution_id: Uuid,
    /// None for ad-hoc meetings created without a published slot.
    pub slot_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub status: MeetingStatus,
    pub title: String,
    pub join_url: Option<String>,
    pub agenda: Option<String>,
    pub reminder_24h_sent: bool,
    pub reminder_1h_sent: bool,
    pub meeting_type: MeetingType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meeting {
    pub fn has_elapsed(&self, now: DateTime<Utc>) -> bool {
        self.end_time <= now
    }

    pub fn reminder_sent(&self, kind: ReminderKind) -> bool {
        match kind {
            ReminderKind::TwentyFourHour => self.reminder_24h_sent,
            ReminderKind::OneHour => self.reminder_1h_sent,
        }
    }

    pub fn set_reminder_sent(&mut self, kind: ReminderKind) {
        match kind {
            ReminderKind::TwentyFourHour => self.reminder_24h_sent = true,
            ReminderKind::OneHour => self.reminder_1h_sent = true,
        }
    }

    pub fn clear_reminders(&mut self) {
        self.reminder_24h_sent = false;
        self.reminder_1h_sent = false;
    }
}

/// Join row between a meeting and a participating user; unique per
/// (meeting_id, participant_user_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingParticipant {
    pub meeting_id: Uuid,
    pub participant_user_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A pending request to move a meeting. Resolution either rewrites the
/// meeting times (accepted) or leaves them untouched (rejected); the
/// proposal itself always closes, never silently drops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleProposal {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub proposed_start: DateTime<Utc>,
    pub proposed_by: Uuid,
    pub reason: Option<String>,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_flags_map_to_kinds() {
        let now = Utc::now();
        let mut meeting = Meeting {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            institution_id: Uuid::new_v4(),
            slot_id: None,
            start_time: now + Duration::hours(2),
            end_time: now + Duration::hours(3),
            duration_minutes: 60,
            status: MeetingStatus::Confirmed,
            title: "Intro call".to_string(),
            join_url: None,
            agenda: None,
            reminder_24h_sent: false,
            reminder_1h_sent: false,
            meeting_type: MeetingType::OneOnOne,
            created_at: now,
            updated_at: now,
        };

        meeting.set_reminder_sent(ReminderKind::TwentyFourHour);
        assert!(meeting.reminder_sent(ReminderKind::TwentyFourHour));
        assert!(!meeting.reminder_sent(ReminderKind::OneHour));

        meeting.set_reminder_sent(ReminderKind::OneHour);
        meeting.clear_reminders();
        assert!(!meeting.reminder_24h_sent);
        assert!(!meeting.reminder_1h_sent);
    }
}

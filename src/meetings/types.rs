use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::models::MeetingType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookMeetingRequest {
    pub slot_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub meeting_type: Option<MeetingType>,
    /// Additional participant user ids beyond the booking student.
    #[serde(default)]
    pub extra_participants: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdhocMeetingRequest {
    pub student_id: Uuid,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(default)]
    pub agenda: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub meeting_type: Option<MeetingType>,
    #[serde(default)]
    pub extra_participants: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposeRescheduleRequest {
    pub new_start: DateTime<Utc>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRescheduleRequest {
    pub accept: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingQuery {
    pub user_id: Uuid,
}

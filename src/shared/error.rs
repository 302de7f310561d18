use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::meetings::status::MeetingStatus;

/// Domain error taxonomy shared by every scheduling component.
///
/// Conflict-class errors (`SlotAlreadyBooked`, `InvalidTransition`, ...)
/// are expected under contention; callers react by refreshing state,
/// not by retrying the same operation. Collaborator failures (email,
/// in-app notify, audit) are never represented here -- they are logged
/// at the call site and swallowed.
#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("slot {0} not found")]
    SlotNotFound(Uuid),

    #[error("meeting {0} not found")]
    MeetingNotFound(Uuid),

    #[error("reschedule proposal {0} not found")]
    ProposalNotFound(Uuid),

    #[error("slot {0} is already booked")]
    SlotAlreadyBooked(Uuid),

    #[error("slot {0} is booked and cannot be deleted")]
    SlotBooked(Uuid),

    #[error("slot {0} start time has passed")]
    SlotExpired(Uuid),

    #[error("illegal status transition {from} -> {to}")]
    InvalidTransition {
        from: MeetingStatus,
        to: MeetingStatus,
    },

    #[error("reschedule proposal {0} is already resolved")]
    ProposalClosed(Uuid),

    #[error("meeting {0} is not open for rescheduling")]
    MeetingNotActive(Uuid),

    #[error("actor {actor} may not {action}")]
    Forbidden { actor: Uuid, action: &'static str },

    #[error("invalid time range: end {end} is not after start {start}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("start time {0} is in the past")]
    StartTimeInPast(DateTime<Utc>),

    #[error("invalid duration: {0} minutes")]
    InvalidDuration(i64),
}

impl SchedulingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SlotNotFound(_) | Self::MeetingNotFound(_) | Self::ProposalNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::SlotAlreadyBooked(_)
            | Self::SlotBooked(_)
            | Self::InvalidTransition { .. }
            | Self::ProposalClosed(_)
            | Self::MeetingNotActive(_) => StatusCode::CONFLICT,
            Self::SlotExpired(_) => StatusCode::GONE,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::InvalidTimeRange { .. } | Self::StartTimeInPast(_) | Self::InvalidDuration(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    /// Expected-under-contention errors, as opposed to caller bugs.
    pub fn is_conflict(&self) -> bool {
        self.status_code() == StatusCode::CONFLICT
    }
}

impl IntoResponse for SchedulingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_class_is_distinguishable() {
        let id = Uuid::new_v4();
        assert!(SchedulingError::SlotAlreadyBooked(id).is_conflict());
        assert!(SchedulingError::InvalidTransition {
            from: MeetingStatus::Completed,
            to: MeetingStatus::Confirmed,
        }
        .is_conflict());
        assert!(!SchedulingError::SlotNotFound(id).is_conflict());
        assert!(!SchedulingError::SlotExpired(id).is_conflict());
        assert!(!SchedulingError::Forbidden {
            actor: id,
            action: "delete slot",
        }
        .is_conflict());
    }

    #[test]
    fn transition_error_names_both_states() {
        let err = SchedulingError::InvalidTransition {
            from: MeetingStatus::Cancelled,
            to: MeetingStatus::Completed,
        };
        let msg = err.to_string();
        assert!(msg.contains("CANCELLED"));
        assert!(msg.contains("COMPLETED"));
    }
}

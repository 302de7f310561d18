//! Meeting status machine.
//!
//! Pure adjudication of status transitions: the machine never mutates a
//! meeting, it only answers whether a state change is legal. Every
//! component that moves a meeting between states goes through
//! [`check_transition`], so legality has a single source of truth.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::SchedulingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingStatus {
    Pending,
    Confirmed,
    Rejected,
    Cancelled,
    Completed,
}

impl MeetingStatus {
    pub const ALL: [MeetingStatus; 5] = [
        MeetingStatus::Pending,
        MeetingStatus::Confirmed,
        MeetingStatus::Rejected,
        MeetingStatus::Cancelled,
        MeetingStatus::Completed,
    ];
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeetingStatus::Pending => "PENDING",
            MeetingStatus::Confirmed => "CONFIRMED",
            MeetingStatus::Rejected => "REJECTED",
            MeetingStatus::Cancelled => "CANCELLED",
            MeetingStatus::Completed => "COMPLETED",
        };
        f.write_str(s)
    }
}

pub fn allowed_transitions(from: MeetingStatus) -> &'static [MeetingStatus] {
    match from {
        MeetingStatus::Pending => &[
            MeetingStatus::Confirmed,
            MeetingStatus::Rejected,
            MeetingStatus::Cancelled,
        ],
        MeetingStatus::Confirmed => &[MeetingStatus::Cancelled, MeetingStatus::Completed],
        MeetingStatus::Rejected | MeetingStatus::Cancelled | MeetingStatus::Completed => &[],
    }
}

pub fn can_transition(current: MeetingStatus, next: MeetingStatus) -> bool {
    allowed_transitions(current).contains(&next)
}

/// Only non-terminal meetings can be cancelled.
pub fn can_cancel(current: MeetingStatus) -> bool {
    matches!(current, MeetingStatus::Pending | MeetingStatus::Confirmed)
}

pub fn is_terminal(status: MeetingStatus) -> bool {
    allowed_transitions(status).is_empty()
}

pub fn check_transition(
    current: MeetingStatus,
    next: MeetingStatus,
) -> Result<(), SchedulingError> {
    if can_transition(current, next) {
        Ok(())
    } else {
        Err(SchedulingError::InvalidTransition {
            from: current,
            to: next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal_pairs() -> Vec<(MeetingStatus, MeetingStatus)> {
        vec![
            (MeetingStatus::Pending, MeetingStatus::Confirmed),
            (MeetingStatus::Pending, MeetingStatus::Rejected),
            (MeetingStatus::Pending, MeetingStatus::Cancelled),
            (MeetingStatus::Confirmed, MeetingStatus::Cancelled),
            (MeetingStatus::Confirmed, MeetingStatus::Completed),
        ]
    }

    #[test]
    fn transition_table_is_exact() {
        let legal = legal_pairs();
        for from in MeetingStatus::ALL {
            for to in MeetingStatus::ALL {
                let expected = legal.contains(&(from, to));
                assert_eq!(
                    can_transition(from, to),
                    expected,
                    "{from} -> {to} should be {expected}"
                );
            }
        }
    }

    #[test]
    fn terminal_states_allow_nothing() {
        for status in [
            MeetingStatus::Rejected,
            MeetingStatus::Cancelled,
            MeetingStatus::Completed,
        ] {
            assert!(is_terminal(status));
            assert!(allowed_transitions(status).is_empty());
        }
        assert!(!is_terminal(MeetingStatus::Pending));
        assert!(!is_terminal(MeetingStatus::Confirmed));
    }

    #[test]
    fn can_cancel_only_active_states() {
        assert!(can_cancel(MeetingStatus::Pending));
        assert!(can_cancel(MeetingStatus::Confirmed));
        assert!(!can_cancel(MeetingStatus::Rejected));
        assert!(!can_cancel(MeetingStatus::Cancelled));
        assert!(!can_cancel(MeetingStatus::Completed));
    }

    #[test]
    fn check_transition_reports_both_states() {
        let err = check_transition(MeetingStatus::Completed, MeetingStatus::Pending)
            .expect_err("terminal state must reject transitions");
        match err {
            SchedulingError::InvalidTransition { from, to } => {
                assert_eq!(from, MeetingStatus::Completed);
                assert_eq!(to, MeetingStatus::Pending);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Meeting lifecycle service.
//!
//! Coordinates the slot store, the status machine and the notification
//! collaborators. The authoritative mutation (slot claim, status
//! change) always commits first; notifications and audit entries are
//! best-effort side effects that never block or reverse it.

pub mod status;
pub mod types;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::{Duration, Utc};
use futures::future::join_all;
use log::{info, warn};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::audit::AuditSink;
use crate::auth::Actor;
use crate::config::BookingPolicy;
use crate::core::urls::ApiUrls;
use crate::notify::{EmailSender, Notifier, UserDirectory};
use crate::shared::error::SchedulingError;
use crate::shared::models::{
    Meeting, MeetingParticipant, MeetingType, ProposalStatus, ReminderKind, RescheduleProposal,
};
use crate::shared::state::AppState;
use crate::slots::SlotStore;
use status::MeetingStatus;
use types::{
    AdhocMeetingRequest, BookMeetingRequest, MeetingQuery, ProposeRescheduleRequest,
    RejectRequest, ResolveRescheduleRequest,
};

/// Persisted meeting records, participant rows and open reschedule
/// proposals. Status changes go through [`MeetingStore::try_transition`],
/// which runs the machine check and the update inside one write
/// section -- the single-row compare-and-swap that makes overlapping
/// batch jobs and live requests safe without job-level locking.
#[derive(Default)]
pub struct MeetingStore {
    meetings: RwLock<HashMap<Uuid, Meeting>>,
    participants: RwLock<HashMap<Uuid, Vec<MeetingParticipant>>>,
    proposals: RwLock<HashMap<Uuid, RescheduleProposal>>,
}

impl MeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, meeting: Meeting, participant_ids: &[Uuid]) {
        let meeting_id = meeting.id;
        self.meetings.write().await.insert(meeting_id, meeting);

        let mut rows = Vec::new();
        for &user_id in participant_ids {
            let row = MeetingParticipant {
                meeting_id,
                participant_user_id: user_id,
            };
            if !rows.contains(&row) {
                rows.push(row);
            }
        }
        self.participants.write().await.insert(meeting_id, rows);
    }

    pub async fn get(&self, meeting_id: Uuid) -> Option<Meeting> {
        self.meetings.read().await.get(&meeting_id).cloned()
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Meeting> {
        let participants = self.participants.read().await;
        let meetings = self.meetings.read().await;
        let mut out: Vec<Meeting> = meetings
            .values()
            .filter(|m| {
                m.institution_id == user_id
                    || participants
                        .get(&m.id)
                        .is_some_and(|rows| rows.iter().any(|r| r.participant_user_id == user_id))
            })
            .cloned()
            .collect();
        out.sort_by_key(|m| m.start_time);
        out
    }

    pub async fn participant_ids(&self, meeting_id: Uuid) -> Vec<Uuid> {
        self.participants
            .read()
            .await
            .get(&meeting_id)
            .map(|rows| rows.iter().map(|r| r.participant_user_id).collect())
            .unwrap_or_default()
    }

    /// Everyone with a stake in the meeting: participant rows plus the
    /// institution side.
    pub async fn recipients_of(&self, meeting: &Meeting) -> Vec<Uuid> {
        let mut ids = self.participant_ids(meeting.id).await;
        if !ids.contains(&meeting.institution_id) {
            ids.push(meeting.institution_id);
        }
        ids
    }

    /// Applies a status change if the machine allows it, returning the
    /// previous status and the updated record. Check and update happen
    /// under one write lock.
    pub async fn try_transition(
        &self,
        meeting_id: Uuid,
        next: MeetingStatus,
    ) -> Result<(MeetingStatus, Meeting), SchedulingError> {
        let mut meetings = self.meetings.write().await;
        let meeting = meetings
            .get_mut(&meeting_id)
            .ok_or(SchedulingError::MeetingNotFound(meeting_id))?;
        status::check_transition(meeting.status, next)?;
        let old = meeting.status;
        meeting.status = next;
        meeting.updated_at = Utc::now();
        Ok((old, meeting.clone()))
    }

    /// Moves a meeting to a new start, recomputing the end from its
    /// duration and resetting both reminder flags -- a moved meeting
    /// re-earns its reminders.
    pub async fn apply_reschedule(
        &self,
        meeting_id: Uuid,
        new_start: chrono::DateTime<Utc>,
    ) -> Result<Meeting, SchedulingError> {
        let mut meetings = self.meetings.write().await;
        let meeting = meetings
            .get_mut(&meeting_id)
            .ok_or(SchedulingError::MeetingNotFound(meeting_id))?;
        if status::is_terminal(meeting.status) {
            return Err(SchedulingError::MeetingNotActive(meeting_id));
        }
        meeting.start_time = new_start;
        meeting.end_time = new_start + Duration::minutes(meeting.duration_minutes);
        meeting.clear_reminders();
        meeting.updated_at = Utc::now();
        Ok(meeting.clone())
    }

    pub async fn confirmed_due_for_reminder(
        &self,
        kind: ReminderKind,
        lower: chrono::DateTime<Utc>,
        upper: chrono::DateTime<Utc>,
    ) -> Vec<Meeting> {
        self.meetings
            .read()
            .await
            .values()
            .filter(|m| {
                m.status == MeetingStatus::Confirmed
                    && !m.reminder_sent(kind)
                    && m.start_time >= lower
                    && m.start_time <= upper
            })
            .cloned()
            .collect()
    }

    /// Flips the sent-flag for one threshold. Returns false when the
    /// flag was already set (or the meeting is gone), which is what
    /// makes a re-run inside the same window deliver nothing.
    pub async fn mark_reminder_sent(&self, meeting_id: Uuid, kind: ReminderKind) -> bool {
        let mut meetings = self.meetings.write().await;
        match meetings.get_mut(&meeting_id) {
            Some(meeting) if !meeting.reminder_sent(kind) => {
                meeting.set_reminder_sent(kind);
                true
            }
            _ => false,
        }
    }

    pub async fn confirmed_elapsed(&self, now: chrono::DateTime<Utc>) -> Vec<Meeting> {
        self.meetings
            .read()
            .await
            .values()
            .filter(|m| m.status == MeetingStatus::Confirmed && m.has_elapsed(now))
            .cloned()
            .collect()
    }

    pub async fn insert_proposal(&self, proposal: RescheduleProposal) {
        self.proposals
            .write()
            .await
            .insert(proposal.id, proposal);
    }

    pub async fn get_proposal(&self, proposal_id: Uuid) -> Option<RescheduleProposal> {
        self.proposals.read().await.get(&proposal_id).cloned()
    }

    /// Closes a pending proposal. A proposal resolves exactly once; a
    /// second attempt gets `ProposalClosed`.
    pub async fn resolve_proposal(
        &self,
        proposal_id: Uuid,
        outcome: ProposalStatus,
    ) -> Result<RescheduleProposal, SchedulingError> {
        let mut proposals = self.proposals.write().await;
        let proposal = proposals
            .get_mut(&proposal_id)
            .ok_or(SchedulingError::ProposalNotFound(proposal_id))?;
        if proposal.status != ProposalStatus::Pending {
            return Err(SchedulingError::ProposalClosed(proposal_id));
        }
        proposal.status = outcome;
        Ok(proposal.clone())
    }
}

pub struct MeetingService {
    store: Arc<MeetingStore>,
    slots: Arc<SlotStore>,
    notifier: Arc<dyn Notifier>,
    email: Arc<dyn EmailSender>,
    directory: Arc<dyn UserDirectory>,
    audit: Arc<dyn AuditSink>,
    policy: BookingPolicy,
}

impl MeetingService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<MeetingStore>,
        slots: Arc<SlotStore>,
        notifier: Arc<dyn Notifier>,
        email: Arc<dyn EmailSender>,
        directory: Arc<dyn UserDirectory>,
        audit: Arc<dyn AuditSink>,
        policy: BookingPolicy,
    ) -> Self {
        Self {
            store,
            slots,
            notifier,
            email,
            directory,
            audit,
            policy,
        }
    }

    /// Books a meeting against a published slot. The claim is the
    /// atomic step: once it succeeds the meeting record is inserted
    /// with the claiming id, so there is no observable state where the
    /// slot is held without a referencing meeting. Slot-claim failures
    /// pass through untranslated so the caller can tell a stale UI from
    /// a lost race from an expired slot.
    pub async fn book_meeting(
        &self,
        student_id: Uuid,
        req: BookMeetingRequest,
    ) -> Result<Meeting, SchedulingError> {
        let meeting_id = Uuid::new_v4();
        let slot = self.slots.claim_slot(req.slot_id, meeting_id).await?;

        let now = Utc::now();
        let status = self.policy.initial_status();
        let meeting_type = req.meeting_type.unwrap_or(if req.extra_participants.is_empty() {
            MeetingType::OneOnOne
        } else {
            MeetingType::Group
        });
        let meeting = Meeting {
            id: meeting_id,
            student_id,
            institution_id: slot.owner_id,
            slot_id: Some(slot.id),
            start_time: slot.start_time,
            end_time: slot.end_time,
            duration_minutes: (slot.end_time - slot.start_time).num_minutes(),
            status,
            title: req.title,
            join_url: req.join_url,
            agenda: req.agenda,
            reminder_24h_sent: false,
            reminder_1h_sent: false,
            meeting_type,
            created_at: now,
            updated_at: now,
        };

        let mut participant_ids = vec![student_id];
        participant_ids.extend(req.extra_participants);
        self.store.insert(meeting.clone(), &participant_ids).await;
        info!(
            "meeting {} booked by student {} against slot {}",
            meeting.id, student_id, slot.id
        );

        self.audit.record_transition(
            meeting.id,
            "book",
            None,
            status,
            &student_id.to_string(),
            json!({ "slot_id": slot.id }),
        );
        self.notify_best_effort(
            meeting.institution_id,
            "New meeting request",
            &format!("\"{}\" was booked for {}", meeting.title, meeting.start_time),
            json!({ "meeting_id": meeting.id }),
        )
        .await;

        Ok(meeting)
    }

    /// Direct-create path without a slot: the institution schedules a
    /// meeting at an arbitrary future time, already confirmed.
    pub async fn create_adhoc_meeting(
        &self,
        institution_id: Uuid,
        req: AdhocMeetingRequest,
    ) -> Result<Meeting, SchedulingError> {
        if req.duration_minutes <= 0 {
            return Err(SchedulingError::InvalidDuration(req.duration_minutes));
        }
        let now = Utc::now();
        if req.start_time <= now {
            return Err(SchedulingError::StartTimeInPast(req.start_time));
        }

        let meeting_type = req.meeting_type.unwrap_or(if req.extra_participants.is_empty() {
            MeetingType::OneOnOne
        } else {
            MeetingType::Group
        });
        let meeting = Meeting {
            id: Uuid::new_v4(),
            student_id: req.student_id,
            institution_id,
            slot_id: None,
            start_time: req.start_time,
            end_time: req.start_time + Duration::minutes(req.duration_minutes),
            duration_minutes: req.duration_minutes,
            status: MeetingStatus::Confirmed,
            title: req.title,
            join_url: req.join_url,
            agenda: req.agenda,
            reminder_24h_sent: false,
            reminder_1h_sent: false,
            meeting_type,
            created_at: now,
            updated_at: now,
        };

        let mut participant_ids = vec![req.student_id];
        participant_ids.extend(req.extra_participants);
        self.store.insert(meeting.clone(), &participant_ids).await;
        info!(
            "ad-hoc meeting {} created by institution {}",
            meeting.id, institution_id
        );

        self.audit.record_transition(
            meeting.id,
            "create_adhoc",
            None,
            MeetingStatus::Confirmed,
            &institution_id.to_string(),
            json!({}),
        );
        self.notify_best_effort(
            req.student_id,
            "Meeting scheduled",
            &format!("\"{}\" is scheduled for {}", meeting.title, meeting.start_time),
            json!({ "meeting_id": meeting.id }),
        )
        .await;

        Ok(meeting)
    }

    pub async fn confirm_meeting(
        &self,
        meeting_id: Uuid,
        actor_id: Uuid,
    ) -> Result<Meeting, SchedulingError> {
        let meeting = self.require_meeting(meeting_id).await?;
        if meeting.institution_id != actor_id {
            return Err(SchedulingError::Forbidden {
                actor: actor_id,
                action: "confirm this meeting",
            });
        }

        let (old, updated) = self
            .store
            .try_transition(meeting_id, MeetingStatus::Confirmed)
            .await?;
        self.audit.record_transition(
            meeting_id,
            "confirm",
            Some(old),
            updated.status,
            &actor_id.to_string(),
            json!({}),
        );
        self.notify_best_effort(
            updated.student_id,
            "Meeting confirmed",
            &format!("\"{}\" on {} is confirmed", updated.title, updated.start_time),
            json!({ "meeting_id": meeting_id }),
        )
        .await;
        Ok(updated)
    }

    pub async fn reject_meeting(
        &self,
        meeting_id: Uuid,
        actor_id: Uuid,
        reason: Option<String>,
    ) -> Result<Meeting, SchedulingError> {
        let meeting = self.require_meeting(meeting_id).await?;
        if meeting.institution_id != actor_id {
            return Err(SchedulingError::Forbidden {
                actor: actor_id,
                action: "reject this meeting",
            });
        }

        let (old, updated) = self
            .store
            .try_transition(meeting_id, MeetingStatus::Rejected)
            .await?;
        if let Some(slot_id) = updated.slot_id {
            self.slots.release_slot(slot_id).await;
        }
        self.audit.record_transition(
            meeting_id,
            "reject",
            Some(old),
            updated.status,
            &actor_id.to_string(),
            json!({ "reason": reason }),
        );
        let message = match &reason {
            Some(reason) => format!("\"{}\" was declined: {}", updated.title, reason),
            None => format!("\"{}\" was declined", updated.title),
        };
        self.notify_best_effort(
            updated.student_id,
            "Meeting declined",
            &message,
            json!({ "meeting_id": meeting_id }),
        )
        .await;
        Ok(updated)
    }

    /// Cancels an active meeting. The status change and the slot
    /// release commit first; every other party is then notified in-app
    /// and by email, each delivery isolated so one failure neither
    /// blocks the rest nor surfaces to the caller.
    pub async fn cancel_meeting(
        &self,
        meeting_id: Uuid,
        actor_id: Uuid,
    ) -> Result<Meeting, SchedulingError> {
        let meeting = self.require_meeting(meeting_id).await?;
        self.require_party(&meeting, actor_id, "cancel this meeting")
            .await?;

        let (old, updated) = self
            .store
            .try_transition(meeting_id, MeetingStatus::Cancelled)
            .await?;
        if let Some(slot_id) = updated.slot_id {
            self.slots.release_slot(slot_id).await;
        }
        self.audit.record_transition(
            meeting_id,
            "cancel",
            Some(old),
            updated.status,
            &actor_id.to_string(),
            json!({}),
        );

        let recipients: Vec<Uuid> = self
            .store
            .recipients_of(&updated)
            .await
            .into_iter()
            .filter(|&id| id != actor_id)
            .collect();
        let deliveries = recipients
            .iter()
            .map(|&user_id| self.deliver_cancellation(&updated, user_id));
        join_all(deliveries).await;

        Ok(updated)
    }

    /// Opens a reschedule proposal. The meeting keeps its current times
    /// until the counterparty accepts.
    pub async fn propose_reschedule(
        &self,
        meeting_id: Uuid,
        actor_id: Uuid,
        req: ProposeRescheduleRequest,
    ) -> Result<RescheduleProposal, SchedulingError> {
        let meeting = self.require_meeting(meeting_id).await?;
        self.require_party(&meeting, actor_id, "reschedule this meeting")
            .await?;
        if status::is_terminal(meeting.status) {
            return Err(SchedulingError::MeetingNotActive(meeting_id));
        }
        if req.new_start <= Utc::now() {
            return Err(SchedulingError::StartTimeInPast(req.new_start));
        }

        let proposal = RescheduleProposal {
            id: Uuid::new_v4(),
            meeting_id,
            proposed_start: req.new_start,
            proposed_by: actor_id,
            reason: req.reason,
            status: ProposalStatus::Pending,
            created_at: Utc::now(),
        };
        self.store.insert_proposal(proposal.clone()).await;
        info!(
            "reschedule proposal {} opened for meeting {} by {}",
            proposal.id, meeting_id, actor_id
        );

        let counterparties: Vec<Uuid> = self
            .store
            .recipients_of(&meeting)
            .await
            .into_iter()
            .filter(|&id| id != actor_id)
            .collect();
        for user_id in counterparties {
            self.notify_best_effort(
                user_id,
                "Reschedule proposed",
                &format!(
                    "\"{}\" was proposed to move to {}",
                    meeting.title, proposal.proposed_start
                ),
                json!({ "meeting_id": meeting_id, "proposal_id": proposal.id }),
            )
            .await;
        }

        Ok(proposal)
    }

    /// Resolves a pending proposal. Accepting rewrites the meeting
    /// times and resets both reminder flags; rejecting leaves the
    /// meeting untouched. Either way the proposal closes exactly once.
    pub async fn resolve_reschedule(
        &self,
        proposal_id: Uuid,
        actor_id: Uuid,
        accept: bool,
    ) -> Result<Meeting, SchedulingError> {
        let proposal = self
            .store
            .get_proposal(proposal_id)
            .await
            .ok_or(SchedulingError::ProposalNotFound(proposal_id))?;
        let meeting = self.require_meeting(proposal.meeting_id).await?;
        self.require_party(&meeting, actor_id, "resolve this proposal")
            .await?;
        if actor_id == proposal.proposed_by {
            return Err(SchedulingError::Forbidden {
                actor: actor_id,
                action: "resolve their own proposal",
            });
        }

        if !accept {
            self.store
                .resolve_proposal(proposal_id, ProposalStatus::Rejected)
                .await?;
            self.notify_best_effort(
                proposal.proposed_by,
                "Reschedule declined",
                &format!("\"{}\" keeps its original time", meeting.title),
                json!({ "meeting_id": meeting.id, "proposal_id": proposal_id }),
            )
            .await;
            return self.require_meeting(meeting.id).await;
        }

        if status::is_terminal(meeting.status) {
            return Err(SchedulingError::MeetingNotActive(meeting.id));
        }
        self.store
            .resolve_proposal(proposal_id, ProposalStatus::Accepted)
            .await?;
        let updated = self
            .store
            .apply_reschedule(meeting.id, proposal.proposed_start)
            .await?;
        self.audit.record_transition(
            meeting.id,
            "reschedule",
            Some(updated.status),
            updated.status,
            &actor_id.to_string(),
            json!({
                "old_start": meeting.start_time,
                "new_start": updated.start_time,
            }),
        );
        self.notify_best_effort(
            proposal.proposed_by,
            "Reschedule accepted",
            &format!("\"{}\" moved to {}", updated.title, updated.start_time),
            json!({ "meeting_id": updated.id, "proposal_id": proposal_id }),
        )
        .await;
        Ok(updated)
    }

    pub async fn get_meeting(&self, meeting_id: Uuid) -> Result<Meeting, SchedulingError> {
        self.require_meeting(meeting_id).await
    }

    pub async fn list_meetings_for(&self, user_id: Uuid) -> Vec<Meeting> {
        self.store.list_for_user(user_id).await
    }

    async fn require_meeting(&self, meeting_id: Uuid) -> Result<Meeting, SchedulingError> {
        self.store
            .get(meeting_id)
            .await
            .ok_or(SchedulingError::MeetingNotFound(meeting_id))
    }

    async fn require_party(
        &self,
        meeting: &Meeting,
        actor_id: Uuid,
        action: &'static str,
    ) -> Result<(), SchedulingError> {
        if meeting.institution_id == actor_id {
            return Ok(());
        }
        let participants = self.store.participant_ids(meeting.id).await;
        if participants.contains(&actor_id) {
            return Ok(());
        }
        Err(SchedulingError::Forbidden {
            actor: actor_id,
            action,
        })
    }

    async fn notify_best_effort(
        &self,
        user_id: Uuid,
        title: &str,
        message: &str,
        payload: serde_json::Value,
    ) {
        if let Err(e) = self.notifier.notify(user_id, title, message, payload).await {
            warn!("notifier failed for user {user_id}: {e}");
        }
    }

    async fn deliver_cancellation(&self, meeting: &Meeting, user_id: Uuid) {
        self.notify_best_effort(
            user_id,
            "Meeting cancelled",
            &format!(
                "\"{}\" on {} was cancelled",
                meeting.title, meeting.start_time
            ),
            json!({ "meeting_id": meeting.id }),
        )
        .await;

        if let Some(address) = self.directory.email_of(user_id) {
            let subject = format!("Meeting cancelled: {}", meeting.title);
            let html = format!(
                "<p>The meeting \"{}\" scheduled for {} has been cancelled.</p>",
                meeting.title, meeting.start_time
            );
            if let Err(e) = self.email.send(&address, &subject, &html).await {
                warn!(
                    "email delivery failed for meeting {} to {address}: {e}",
                    meeting.id
                );
            }
        }
    }
}

// HTTP handlers

pub async fn book_meeting(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(req): Json<BookMeetingRequest>,
) -> Result<Json<Meeting>, SchedulingError> {
    let meeting = state.meeting_service.book_meeting(actor.user_id, req).await?;
    Ok(Json(meeting))
}

pub async fn create_adhoc_meeting(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(req): Json<AdhocMeetingRequest>,
) -> Result<Json<Meeting>, SchedulingError> {
    if !actor.is_institution() {
        return Err(SchedulingError::Forbidden {
            actor: actor.user_id,
            action: "create ad-hoc meetings",
        });
    }
    let meeting = state
        .meeting_service
        .create_adhoc_meeting(actor.user_id, req)
        .await?;
    Ok(Json(meeting))
}

pub async fn get_meeting(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Meeting>, SchedulingError> {
    Ok(Json(state.meeting_service.get_meeting(id).await?))
}

pub async fn list_meetings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MeetingQuery>,
) -> Json<Vec<Meeting>> {
    Json(state.meeting_service.list_meetings_for(query.user_id).await)
}

pub async fn confirm_meeting(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<Meeting>, SchedulingError> {
    Ok(Json(
        state.meeting_service.confirm_meeting(id, actor.user_id).await?,
    ))
}

pub async fn reject_meeting(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(req): Json<RejectRequest>,
) -> Result<Json<Meeting>, SchedulingError> {
    Ok(Json(
        state
            .meeting_service
            .reject_meeting(id, actor.user_id, req.reason)
            .await?,
    ))
}

pub async fn cancel_meeting(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<Meeting>, SchedulingError> {
    Ok(Json(
        state.meeting_service.cancel_meeting(id, actor.user_id).await?,
    ))
}

pub async fn propose_reschedule(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(req): Json<ProposeRescheduleRequest>,
) -> Result<Json<RescheduleProposal>, SchedulingError> {
    Ok(Json(
        state
            .meeting_service
            .propose_reschedule(id, actor.user_id, req)
            .await?,
    ))
}

pub async fn resolve_reschedule(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(req): Json<ResolveRescheduleRequest>,
) -> Result<Json<Meeting>, SchedulingError> {
    Ok(Json(
        state
            .meeting_service
            .resolve_reschedule(id, actor.user_id, req.accept)
            .await?,
    ))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(ApiUrls::MEETINGS, get(list_meetings).post(book_meeting))
        .route(ApiUrls::MEETING_ADHOC, post(create_adhoc_meeting))
        .route(ApiUrls::MEETING_BY_ID, get(get_meeting))
        .route(ApiUrls::MEETING_CONFIRM, post(confirm_meeting))
        .route(ApiUrls::MEETING_REJECT, post(reject_meeting))
        .route(ApiUrls::MEETING_CANCEL, post(cancel_meeting))
        .route(ApiUrls::MEETING_RESCHEDULE, post(propose_reschedule))
        .route(ApiUrls::RESCHEDULE_RESOLVE, post(resolve_reschedule))
        .with_state(state)
}

//! Availability slot store.
//!
//! Owns every published slot. The storage contract for `claim_slot` is
//! an atomic conditional update: the `is_booked` check and the flip
//! happen in one step under the store's write lock, so two concurrent
//! booking attempts against the same slot always resolve to exactly
//! one winner. Callers must never read the flag and write it back in a
//! second step.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::Actor;
use crate::core::urls::ApiUrls;
use crate::shared::error::SchedulingError;
use crate::shared::models::AvailabilitySlot;
use crate::shared::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotsRequest {
    pub windows: Vec<SlotWindow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotQuery {
    pub owner_id: Uuid,
}

#[derive(Default)]
pub struct SlotStore {
    slots: RwLock<HashMap<Uuid, AvailabilitySlot>>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts unbooked slots for an owner. Windows must be well-formed
    /// (end after start); the whole batch is rejected before any insert
    /// otherwise. Overlapping windows from the same owner are
    /// permitted.
    pub async fn create_slots(
        &self,
        owner_id: Uuid,
        windows: Vec<SlotWindow>,
    ) -> Result<Vec<AvailabilitySlot>, SchedulingError> {
        for window in &windows {
            if window.end_time <= window.start_time {
                return Err(SchedulingError::InvalidTimeRange {
                    start: window.start_time,
                    end: window.end_time,
                });
            }
        }

        let now = Utc::now();
        let mut slots = self.slots.write().await;
        let mut created = Vec::with_capacity(windows.len());
        for window in windows {
            let slot = AvailabilitySlot {
                id: Uuid::new_v4(),
                owner_id,
                start_time: window.start_time,
                end_time: window.end_time,
                is_booked: false,
                booked_by: None,
                created_at: now,
            };
            slots.insert(slot.id, slot.clone());
            created.push(slot);
        }
        info!("created {} slots for owner {}", created.len(), owner_id);
        Ok(created)
    }

    /// Atomically claims a slot for a meeting: at most one caller can
    /// flip `is_booked` false -> true for a given slot. Expired slots
    /// are not offerable at all, so expiry is reported before
    /// contention.
    pub async fn claim_slot(
        &self,
        slot_id: Uuid,
        meeting_id: Uuid,
    ) -> Result<AvailabilitySlot, SchedulingError> {
        let now = Utc::now();
        let mut slots = self.slots.write().await;
        let slot = slots
            .get_mut(&slot_id)
            .ok_or(SchedulingError::SlotNotFound(slot_id))?;
        if slot.start_time < now {
            return Err(SchedulingError::SlotExpired(slot_id));
        }
        if slot.is_booked {
            return Err(SchedulingError::SlotAlreadyBooked(slot_id));
        }
        slot.is_booked = true;
        slot.booked_by = Some(meeting_id);
        debug!("slot {slot_id} claimed by meeting {meeting_id}");
        Ok(slot.clone())
    }

    /// Frees a claimed slot. Idempotent: releasing a missing or
    /// already-free slot is a no-op, because cancellation paths can
    /// race with manual cleanup.
    pub async fn release_slot(&self, slot_id: Uuid) {
        let mut slots = self.slots.write().await;
        if let Some(slot) = slots.get_mut(&slot_id) {
            if slot.is_booked {
                slot.is_booked = false;
                slot.booked_by = None;
                debug!("slot {slot_id} released");
            }
        }
    }

    pub async fn delete_slot(&self, slot_id: Uuid, owner_id: Uuid) -> Result<(), SchedulingError> {
        let mut slots = self.slots.write().await;
        let slot = slots
            .get(&slot_id)
            .ok_or(SchedulingError::SlotNotFound(slot_id))?;
        if slot.owner_id != owner_id {
            return Err(SchedulingError::Forbidden {
                actor: owner_id,
                action: "delete this slot",
            });
        }
        if slot.is_booked {
            return Err(SchedulingError::SlotBooked(slot_id));
        }
        slots.remove(&slot_id);
        info!("slot {slot_id} deleted by owner {owner_id}");
        Ok(())
    }

    /// Slots still offerable to new bookers, ascending by start.
    pub async fn list_future_slots(&self, owner_id: Uuid) -> Vec<AvailabilitySlot> {
        let now = Utc::now();
        let slots = self.slots.read().await;
        let mut future: Vec<AvailabilitySlot> = slots
            .values()
            .filter(|s| s.owner_id == owner_id && s.start_time >= now)
            .cloned()
            .collect();
        future.sort_by_key(|s| s.start_time);
        future
    }

    pub async fn get_slot(&self, slot_id: Uuid) -> Option<AvailabilitySlot> {
        self.slots.read().await.get(&slot_id).cloned()
    }
}

// HTTP handlers

pub async fn create_slots(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(req): Json<CreateSlotsRequest>,
) -> Result<Json<Vec<AvailabilitySlot>>, SchedulingError> {
    if !actor.is_institution() {
        return Err(SchedulingError::Forbidden {
            actor: actor.user_id,
            action: "publish slots",
        });
    }
    let created = state.slots.create_slots(actor.user_id, req.windows).await?;
    Ok(Json(created))
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotQuery>,
) -> Json<Vec<AvailabilitySlot>> {
    Json(state.slots.list_future_slots(query.owner_id).await)
}

pub async fn delete_slot(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, SchedulingError> {
    state.slots.delete_slot(id, actor.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(ApiUrls::SLOTS, get(list_slots).post(create_slots))
        .route(ApiUrls::SLOT_BY_ID, axum::routing::delete(delete_slot))
        .with_state(state)
}

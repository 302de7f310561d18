//! Clock-driven batch jobs.
//!
//! Both jobs are idempotent and carry no persisted cursor: every run
//! recomputes its selection window from the current time, so they can
//! be fired by the background scheduler, by an external cron hitting
//! the trigger endpoints, or by both at once.

pub mod completion;
pub mod reminders;
pub mod scheduler;

use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::urls::ApiUrls;
use crate::shared::state::AppState;

pub use completion::CompletionSweeper;
pub use reminders::ReminderScheduler;
pub use scheduler::JobScheduler;

/// Per-run result. Individual failures land in `errors` and never
/// abort the rest of the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub errors: Vec<String>,
}

pub async fn run_reminders(State(state): State<Arc<AppState>>) -> Json<RunSummary> {
    Json(state.reminders.run().await)
}

pub async fn run_completions(State(state): State<Arc<AppState>>) -> Json<RunSummary> {
    Json(state.completion.run().await)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(ApiUrls::JOBS_REMINDERS, post(run_reminders))
        .route(ApiUrls::JOBS_COMPLETIONS, post(run_completions))
        .with_state(state)
}

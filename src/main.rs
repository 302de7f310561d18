use axum::routing::get;
use axum::{Json, Router};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use meetserver::config::AppConfig;
use meetserver::core::urls::ApiUrls;
use meetserver::jobs::{self, JobScheduler};
use meetserver::meetings;
use meetserver::shared::state::AppState;
use meetserver::slots;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let state = AppState::new(config.clone());

    let scheduler = Arc::new(JobScheduler::from_config(
        &config.jobs,
        state.reminders.clone(),
        state.completion.clone(),
    )?);
    scheduler.start();

    let app = Router::new()
        .route(ApiUrls::HEALTH, get(health_check))
        .merge(slots::router(state.clone()))
        .merge(meetings::router(state.clone()))
        .merge(jobs::router(state.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("meetserver listening on {addr}");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

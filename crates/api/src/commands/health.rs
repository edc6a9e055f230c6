//! Liveness probe

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub authenticated: bool,
    pub version: &'static str,
}

/// `GET /health`
pub async fn health(State(ctx): State<Arc<AppContext>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        authenticated: ctx.session.is_authenticated().await,
        version: env!("CARGO_PKG_VERSION"),
    })
}

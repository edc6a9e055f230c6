//! HTTP route handlers
//!
//! Each request draws onto a fresh [`HtmlSurface`](learnboard_infra::HtmlSurface)
//! and returns the finished page.

pub mod dashboard;
pub mod health;
pub mod session;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::context::AppContext;

/// Build the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/login", post(session::login))
        .route("/logout", post(session::logout))
        .route("/health", get(health::health))
        .with_state(ctx)
}

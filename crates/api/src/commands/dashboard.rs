//! Dashboard page

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::Html;
use learnboard_infra::HtmlSurface;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// `GET /`: the cached profile, a fresh fetch for a restored session, or the
/// login form.
pub async fn index(State(ctx): State<Arc<AppContext>>) -> Html<String> {
    let start = Instant::now();

    let mut surface = HtmlSurface::new();
    ctx.dashboard.show_current(&mut surface).await;
    let success = surface.alerts().is_empty();

    log_command_execution("dashboard::index", start.elapsed(), success);
    Html(surface.into_html())
}

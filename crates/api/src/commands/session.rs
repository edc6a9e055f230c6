//! Sign-in and sign-out routes

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use learnboard_core::LoginOutcome;
use learnboard_infra::HtmlSurface;
use serde::Deserialize;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Login form fields
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `POST /login`: sign in and answer with the resulting page.
///
/// A rejected sign-in keeps the username in the form.
pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    Form(form): Form<LoginForm>,
) -> Html<String> {
    let start = Instant::now();

    let mut surface = HtmlSurface::new().with_username(form.username.as_str());
    let outcome = ctx.dashboard.login(&mut surface, &form.username, &form.password).await;

    let success = matches!(outcome, LoginOutcome::SignedIn(_));
    if !success {
        info!(username = %form.username, ?outcome, "Sign-in did not reach the dashboard");
    }
    log_command_execution("session::login", start.elapsed(), success);

    Html(surface.into_html())
}

/// `POST /logout`: end the session and go back to the login page.
pub async fn logout(State(ctx): State<Arc<AppContext>>) -> Redirect {
    let start = Instant::now();

    let mut surface = HtmlSurface::new();
    ctx.dashboard.logout(&mut surface).await;

    log_command_execution("session::logout", start.elapsed(), true);
    Redirect::to("/")
}

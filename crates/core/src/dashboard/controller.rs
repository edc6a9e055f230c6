//! Dashboard controller
//!
//! Sequences the session manager, the profile source and the renderer for
//! each user action, and decides what the screen shows when one of them
//! fails:
//!
//! - a rejected sign-in shows the fixed inline login message and keeps the
//!   login view;
//! - any profile fetch failure ends the session, raises one fixed alert and
//!   returns to the login view.

use std::sync::Arc;

use learnboard_domain::constants::PROFILE_LOAD_FAILED_MESSAGE;
use learnboard_domain::{LearnboardError, ProfileRecord, Result};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::profile::ProfileSource;
use crate::render::{DisplaySurface, Renderer, View};
use crate::session::SessionManager;

/// How a sign-in attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Signed in and the profile is on screen
    SignedIn(Arc<ProfileRecord>),
    /// Credentials were not accepted
    Rejected,
    /// Signed in, but the profile could not be loaded and the session was
    /// ended again
    ProfileUnavailable,
}

/// Keeps the login trigger busy while alive; restores it on drop, including
/// during unwinding.
struct BusyGuard<'a> {
    surface: &'a mut dyn DisplaySurface,
}

impl<'a> BusyGuard<'a> {
    fn engage(surface: &'a mut dyn DisplaySurface) -> Self {
        surface.set_login_busy(true);
        Self { surface }
    }

    /// Draw on the guarded surface without releasing the busy state.
    fn surface(&mut self) -> &mut dyn DisplaySurface {
        &mut *self.surface
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.surface.set_login_busy(false);
    }
}

/// Dashboard controller
pub struct DashboardController {
    session: Arc<SessionManager>,
    profiles: Arc<dyn ProfileSource>,
    renderer: Renderer,
    profile: RwLock<Option<Arc<ProfileRecord>>>,
}

impl DashboardController {
    pub fn new(
        session: Arc<SessionManager>,
        profiles: Arc<dyn ProfileSource>,
        renderer: Renderer,
    ) -> Self {
        Self { session, profiles, renderer, profile: RwLock::new(None) }
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Profile currently on screen, if any
    pub async fn current_profile(&self) -> Option<Arc<ProfileRecord>> {
        self.profile.read().await.clone()
    }

    /// Sign in, then load and render the profile.
    pub async fn login(
        &self,
        surface: &mut dyn DisplaySurface,
        username: &str,
        password: &str,
    ) -> LoginOutcome {
        surface.clear_login_error();

        // The trigger stays busy until the profile has been drawn or the
        // attempt has failed.
        let mut busy = BusyGuard::engage(surface);

        if let Err(err) = self.session.login(username, password).await {
            let surface = busy.surface();
            surface.show_login_error(err.user_message());
            surface.show_view(View::Login);
            return LoginOutcome::Rejected;
        }

        // Bound first so the fetch future is gone before the guard drops.
        let outcome = match self.load_profile(busy.surface()).await {
            Ok(profile) => LoginOutcome::SignedIn(profile),
            Err(_) => LoginOutcome::ProfileUnavailable,
        };
        outcome
    }

    /// Fetch the profile with the current token and render it.
    ///
    /// Without a token this only shows the login view. A failed fetch ends
    /// the session before the error is returned.
    pub async fn load_profile(
        &self,
        surface: &mut dyn DisplaySurface,
    ) -> Result<Arc<ProfileRecord>> {
        let Some(token) = self.session.token().await else {
            surface.show_view(View::Login);
            return Err(LearnboardError::InvalidCredentials);
        };

        surface.show_view(View::Loading);
        match self.profiles.fetch_profile(&token).await {
            Ok(record) => {
                let record = Arc::new(record);
                *self.profile.write().await = Some(Arc::clone(&record));
                self.renderer.render_profile(surface, &record);
                info!(login = %record.login, "Profile loaded");
                Ok(record)
            }
            Err(err) => {
                error!(
                    error = %err,
                    fetch_failure = err.is_fetch_failure(),
                    "Profile fetch failed; ending session"
                );
                self.end_session().await;
                surface.alert(fetch_failure_message(&err));
                surface.show_view(View::Login);
                Err(err)
            }
        }
    }

    /// Sign out and return to the login view.
    pub async fn logout(&self, surface: &mut dyn DisplaySurface) {
        self.end_session().await;
        surface.clear_login_error();
        surface.show_view(View::Login);
    }

    /// Draw whatever the current state calls for: the cached profile, a
    /// fresh fetch for a restored session, or the login form.
    pub async fn show_current(&self, surface: &mut dyn DisplaySurface) {
        if let Some(record) = self.current_profile().await {
            self.renderer.render_profile(surface, &record);
            return;
        }

        if self.session.is_authenticated().await {
            // Failures are already on the surface.
            let _ = self.load_profile(surface).await;
        } else {
            surface.show_view(View::Login);
        }
    }

    async fn end_session(&self) {
        *self.profile.write().await = None;
        self.session.logout().await;
    }
}

/// Alert text for a failed fetch. Kinds outside the three fetch failures
/// still get the profile message rather than a generic one.
fn fetch_failure_message(err: &LearnboardError) -> &'static str {
    if err.is_fetch_failure() {
        err.user_message()
    } else {
        PROFILE_LOAD_FAILED_MESSAGE
    }
}

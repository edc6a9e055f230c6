//! # Learnboard Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for authentication, token storage, profile
//!   retrieval and display
//! - The session manager and dashboard controller
//! - Chart geometry (XP progression, skills radar) as scene graphs
//! - The profile view model and renderer
//!
//! ## Architecture Principles
//! - Only depends on `learnboard-domain`
//! - No HTTP, storage or markup code
//! - All external dependencies via traits

pub mod charts;
pub mod dashboard;
pub mod profile;
pub mod render;
pub mod session;
pub mod utils;

// Re-export specific items to avoid ambiguity
pub use dashboard::{DashboardController, LoginOutcome};
pub use profile::ProfileSource;
pub use render::{
    ChartRegion, DisplaySurface, ListSlot, ProfileView, Renderer, Slot, TooltipBinding, View,
};
pub use session::ports::{AuthGateway, TokenStore};
pub use session::SessionManager;

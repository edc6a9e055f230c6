//! Dashboard flow: sign-in, profile load and the error-to-screen policy

pub mod controller;

pub use controller::{DashboardController, LoginOutcome};

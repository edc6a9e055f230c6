//! External service integrations

pub mod platform;

pub use platform::{PlatformAuthGateway, PlatformProfileClient};

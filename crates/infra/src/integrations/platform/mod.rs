//! Learning platform integration: sign-in endpoint and GraphQL profile API

pub mod auth;
pub mod graphql;
pub mod query;

pub use auth::PlatformAuthGateway;
pub use graphql::PlatformProfileClient;

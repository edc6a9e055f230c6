//! Authentication token lifecycle

pub mod ports;
pub mod service;

pub use service::SessionManager;

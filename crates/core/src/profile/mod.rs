//! Profile retrieval

pub mod ports;

pub use ports::ProfileSource;

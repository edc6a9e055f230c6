//! Token store implementations

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileTokenStore;
pub use keychain::KeyringTokenStore;
pub use memory::MemoryTokenStore;

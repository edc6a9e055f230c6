//! Domain types and models

pub mod profile;
pub mod session;

pub use profile::{GroupStatus, ProfileRecord, ProjectGroup, SkillEntry, XpTransaction};
pub use session::{clean_token, extract_token, Credentials};

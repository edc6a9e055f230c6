//! Normalized student profile
//!
//! One `ProfileRecord` is produced per successful fetch and replaced
//! wholesale on the next one. Chart inputs (`XpTransaction`, `SkillEntry`)
//! live here; chart outputs are derived in the core crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SKILL_TYPE_PREFIX;
use crate::impl_domain_status_conversions;

/// Status of a project group on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Finished,
    Working,
    Setup,
}

impl_domain_status_conversions!(GroupStatus {
    Finished => "finished",
    Working => "working",
    Setup => "setup",
});

/// Project group the student belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub path: String,
    pub status: GroupStatus,
    /// Member logins. Only requested for working and setup groups.
    pub members: Vec<String>,
}

impl ProjectGroup {
    /// Last path segment, e.g. `graphql` for `/kisumu/module/graphql`.
    pub fn project_name(&self) -> &str {
        path_basename(&self.path)
    }
}

/// Single XP transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpTransaction {
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    pub path: String,
}

impl XpTransaction {
    pub fn project_name(&self) -> &str {
        path_basename(&self.path)
    }
}

/// Highest recorded amount for one skill type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Raw transaction type, e.g. `skill_prog`
    pub skill_name: String,
    pub amount: f64,
}

impl SkillEntry {
    /// Human label: prefix stripped, underscores replaced with spaces.
    pub fn display_name(&self) -> String {
        self.skill_name
            .strip_prefix(SKILL_TYPE_PREFIX)
            .unwrap_or(&self.skill_name)
            .replace('_', " ")
    }
}

/// Flat profile record built from one GraphQL user row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: i64,
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub campus: Option<String>,
    pub audit_ratio: Option<f64>,
    pub total_up: f64,
    pub total_down: f64,
    /// First entry of the event list, 0 when the student has none
    pub level: u32,
    /// Aggregated XP for the configured event, 0 when absent
    pub total_xp: f64,
    pub finished_projects: Vec<ProjectGroup>,
    pub current_projects: Vec<ProjectGroup>,
    pub setup_projects: Vec<ProjectGroup>,
    /// Ascending by timestamp
    pub xp_transactions: Vec<XpTransaction>,
    /// One entry per skill type
    pub skills: Vec<SkillEntry>,
}

impl ProfileRecord {
    pub fn finished_count(&self) -> usize {
        self.finished_projects.len()
    }

    pub fn current_count(&self) -> usize {
        self.current_projects.len()
    }

    pub fn setup_count(&self) -> usize {
        self.setup_projects.len()
    }

    /// `First Last`, or `None` when neither name is known.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

fn path_basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

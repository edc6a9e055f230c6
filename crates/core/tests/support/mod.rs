//! Shared test helpers for `learnboard-core` integration tests.
//!
//! In-memory port implementations and a surface that records every call,
//! so flow tests can assert on what the user would see.

#![allow(dead_code)]

pub mod mocks;
pub mod surface;

use chrono::{TimeZone, Utc};
use learnboard_domain::{GroupStatus, ProfileRecord, ProjectGroup, SkillEntry, XpTransaction};

/// Profile with a little of everything
pub fn sample_profile() -> ProfileRecord {
    ProfileRecord {
        id: 7,
        login: "alice".into(),
        first_name: Some("Alice".into()),
        last_name: Some("Otieno".into()),
        email: Some("alice@example.com".into()),
        campus: None,
        audit_ratio: Some(1.5),
        total_up: 2_000_000.0,
        total_down: 1_000_000.0,
        level: 12,
        total_xp: 35.0,
        finished_projects: vec![ProjectGroup {
            path: "/kisumu/module/go-reloaded".into(),
            status: GroupStatus::Finished,
            members: vec![],
        }],
        current_projects: vec![],
        setup_projects: vec![ProjectGroup {
            path: "/kisumu/module/forum".into(),
            status: GroupStatus::Setup,
            members: vec!["alice".into(), "bob".into()],
        }],
        xp_transactions: vec![
            XpTransaction {
                timestamp: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
                amount: 10.0,
                path: "/kisumu/module/go-reloaded".into(),
            },
            XpTransaction {
                timestamp: Utc.with_ymd_and_hms(2024, 2, 3, 9, 0, 0).unwrap(),
                amount: 25.0,
                path: "/kisumu/module/ascii-art".into(),
            },
        ],
        skills: vec![
            SkillEntry { skill_name: "skill_go".into(), amount: 40.0 },
            SkillEntry { skill_name: "skill_js".into(), amount: 80.0 },
        ],
    }
}

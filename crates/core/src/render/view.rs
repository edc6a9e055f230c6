//! Pure view model for the profile screen

use learnboard_domain::constants::CAMPUS_FALLBACK;
use learnboard_domain::{ProfileRecord, ProjectGroup};

use super::ports::{ListSlot, Slot};
use crate::utils::format::{format_ratio, format_thousands};

/// Display strings for every profile slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub campus: String,
    pub level: String,
    pub total_xp: String,
    pub audit_ratio: String,
    pub total_up: String,
    pub total_down: String,
    pub finished_projects: String,
    pub current_projects: String,
    pub setup_projects: String,
    pub current_groups: Vec<String>,
    pub setup_groups: Vec<String>,
}

impl ProfileView {
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        let name = match profile.full_name() {
            Some(full) => format!("{full} ({})", profile.login),
            None => profile.login.clone(),
        };
        let campus = profile
            .campus
            .as_deref()
            .map(str::trim)
            .filter(|campus| !campus.is_empty())
            .unwrap_or(CAMPUS_FALLBACK)
            .to_string();

        Self {
            name,
            email: profile.email.clone().unwrap_or_default(),
            campus,
            level: profile.level.to_string(),
            total_xp: format_thousands(profile.total_xp),
            audit_ratio: format_ratio(profile.audit_ratio),
            total_up: format_thousands(profile.total_up),
            total_down: format_thousands(profile.total_down),
            finished_projects: profile.finished_count().to_string(),
            current_projects: profile.current_count().to_string(),
            setup_projects: profile.setup_count().to_string(),
            current_groups: profile.current_projects.iter().map(group_line).collect(),
            setup_groups: profile.setup_projects.iter().map(group_line).collect(),
        }
    }

    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::Name => &self.name,
            Slot::Email => &self.email,
            Slot::Campus => &self.campus,
            Slot::Level => &self.level,
            Slot::TotalXp => &self.total_xp,
            Slot::AuditRatio => &self.audit_ratio,
            Slot::TotalUp => &self.total_up,
            Slot::TotalDown => &self.total_down,
            Slot::FinishedProjects => &self.finished_projects,
            Slot::CurrentProjects => &self.current_projects,
            Slot::SetupProjects => &self.setup_projects,
        }
    }

    pub fn list(&self, slot: ListSlot) -> &[String] {
        match slot {
            ListSlot::CurrentGroups => &self.current_groups,
            ListSlot::SetupGroups => &self.setup_groups,
        }
    }
}

/// `project (alice, bob)`, or just the project name for a solo group.
fn group_line(group: &ProjectGroup) -> String {
    if group.members.is_empty() {
        group.project_name().to_string()
    } else {
        format!("{} ({})", group.project_name(), group.members.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use learnboard_domain::GroupStatus;

    use super::*;

    fn profile() -> ProfileRecord {
        ProfileRecord {
            id: 42,
            login: "alice".into(),
            first_name: Some("Alice".into()),
            last_name: Some("Otieno".into()),
            email: Some("alice@example.com".into()),
            campus: Some("kisumu".into()),
            audit_ratio: Some(1.23456),
            total_up: 1_523_400.0,
            total_down: 1_234_000.0,
            level: 17,
            total_xp: 345_678.0,
            finished_projects: vec![
                ProjectGroup {
                    path: "/kisumu/module/go-reloaded".into(),
                    status: GroupStatus::Finished,
                    members: vec![],
                },
                ProjectGroup {
                    path: "/kisumu/module/ascii-art".into(),
                    status: GroupStatus::Finished,
                    members: vec![],
                },
            ],
            current_projects: vec![ProjectGroup {
                path: "/kisumu/module/graphql".into(),
                status: GroupStatus::Working,
                members: vec!["alice".into(), "bob".into()],
            }],
            setup_projects: vec![],
            xp_transactions: vec![],
            skills: vec![],
        }
    }

    #[test]
    fn formats_every_slot() {
        let view = ProfileView::from_profile(&profile());

        assert_eq!(view.slot(Slot::Name), "Alice Otieno (alice)");
        assert_eq!(view.slot(Slot::Email), "alice@example.com");
        assert_eq!(view.slot(Slot::Campus), "kisumu");
        assert_eq!(view.slot(Slot::Level), "17");
        assert_eq!(view.slot(Slot::TotalXp), "345,678");
        assert_eq!(view.slot(Slot::AuditRatio), "1.23");
        assert_eq!(view.slot(Slot::TotalUp), "1,523,400");
        assert_eq!(view.slot(Slot::TotalDown), "1,234,000");
        assert_eq!(view.slot(Slot::FinishedProjects), "2");
        assert_eq!(view.slot(Slot::CurrentProjects), "1");
        assert_eq!(view.slot(Slot::SetupProjects), "0");
        assert_eq!(view.list(ListSlot::CurrentGroups), ["graphql (alice, bob)".to_string()]);
        assert!(view.list(ListSlot::SetupGroups).is_empty());
    }

    #[test]
    fn falls_back_for_missing_fields() {
        let mut record = profile();
        record.first_name = None;
        record.last_name = Some("  ".into());
        record.campus = None;
        record.audit_ratio = None;

        let view = ProfileView::from_profile(&record);

        assert_eq!(view.name, "alice");
        assert_eq!(view.campus, "N/A");
        assert_eq!(view.audit_ratio, "0.00");
    }
}

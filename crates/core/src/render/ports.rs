//! Display surface abstraction
//!
//! The renderer and the dashboard controller only talk to the screen
//! through [`DisplaySurface`]. Adapters decide what a slot or a chart
//! region is on their medium.

use crate::charts::{ChartOutput, Marker};

/// Top-level screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Loading,
    Profile,
}

/// Named scalar field on the profile view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Name,
    Email,
    Campus,
    Level,
    TotalXp,
    AuditRatio,
    TotalUp,
    TotalDown,
    FinishedProjects,
    CurrentProjects,
    SetupProjects,
}

impl Slot {
    pub const ALL: [Slot; 11] = [
        Slot::Name,
        Slot::Email,
        Slot::Campus,
        Slot::Level,
        Slot::TotalXp,
        Slot::AuditRatio,
        Slot::TotalUp,
        Slot::TotalDown,
        Slot::FinishedProjects,
        Slot::CurrentProjects,
        Slot::SetupProjects,
    ];

    /// Stable identifier used by markup adapters
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "user-name",
            Self::Email => "user-email",
            Self::Campus => "user-campus",
            Self::Level => "user-level",
            Self::TotalXp => "total-xp",
            Self::AuditRatio => "audit-ratio",
            Self::TotalUp => "total-up",
            Self::TotalDown => "total-down",
            Self::FinishedProjects => "finished-projects",
            Self::CurrentProjects => "current-projects",
            Self::SetupProjects => "setup-projects",
        }
    }
}

/// Named list on the profile view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSlot {
    /// Groups in progress with their collaborators
    CurrentGroups,
    /// Groups still being set up with their collaborators
    SetupGroups,
}

impl ListSlot {
    pub fn id(self) -> &'static str {
        match self {
            Self::CurrentGroups => "current-groups",
            Self::SetupGroups => "setup-groups",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRegion {
    Xp,
    Skills,
}

impl ChartRegion {
    pub fn id(self) -> &'static str {
        match self {
            Self::Xp => "xp-chart",
            Self::Skills => "skills-chart",
        }
    }
}

/// Hover behavior attached to one chart marker
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipBinding {
    pub marker_id: String,
    pub title: String,
    pub lines: Vec<String>,
    pub hover_radius: Option<f64>,
}

impl From<&Marker> for TooltipBinding {
    fn from(marker: &Marker) -> Self {
        Self {
            marker_id: marker.id.clone(),
            title: marker.tooltip.title.clone(),
            lines: marker.tooltip.lines.clone(),
            hover_radius: marker.hover_radius,
        }
    }
}

/// Screen the dashboard draws on
pub trait DisplaySurface: Send {
    fn show_view(&mut self, view: View);

    /// Disable the login trigger and show a busy label, or restore it
    fn set_login_busy(&mut self, busy: bool);

    fn show_login_error(&mut self, message: &str);

    fn clear_login_error(&mut self);

    /// Blocking notice, shown once
    fn alert(&mut self, message: &str);

    fn set_slot(&mut self, slot: Slot, value: &str);

    fn set_list(&mut self, slot: ListSlot, items: &[String]);

    fn set_chart(&mut self, region: ChartRegion, chart: &ChartOutput);

    fn bind_tooltips(&mut self, region: ChartRegion, bindings: &[TooltipBinding]);
}

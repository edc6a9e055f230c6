//! Chart transforms: profile data in, scene graphs out.

pub mod scene;
pub mod skills;
pub mod xp;

/// Colors shared by both charts
pub mod palette {
    pub const PRIMARY: &str = "#4f46e5";
    pub const SECONDARY: &str = "#0ea5e9";
    pub const GRID: &str = "#e5e7eb";
    pub const AXIS: &str = "#9ca3af";
    pub const TEXT: &str = "#1f2937";
    pub const MUTED_TEXT: &str = "#6b7280";
    pub const SURFACE: &str = "#ffffff";
}

pub use scene::{ChartOutput, Marker, PathCommand, Point, Scene, Shape, Style, TextAnchor, Tooltip};
pub use skills::{
    build_skills_chart, skill_points, strongest_per_type, RadarLayout, SkillPoint, SkillsChart,
};
pub use xp::{build_xp_chart, cumulative_points, plot_positions, XpChart, XpChartLayout, XpPoint};

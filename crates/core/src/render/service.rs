//! Renderer - applies a profile to a display surface

use learnboard_domain::ProfileRecord;
use tracing::debug;

use super::ports::{ChartRegion, DisplaySurface, ListSlot, Slot, TooltipBinding, View};
use super::view::ProfileView;
use crate::charts::{build_skills_chart, build_xp_chart, ChartOutput, RadarLayout, XpChartLayout};

/// Stateless profile renderer
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    xp_layout: XpChartLayout,
    radar_layout: RadarLayout,
}

impl Renderer {
    pub fn new(xp_layout: XpChartLayout, radar_layout: RadarLayout) -> Self {
        Self { xp_layout, radar_layout }
    }

    /// Fill every slot, draw both charts and wire their tooltips, then
    /// switch to the profile view.
    pub fn render_profile(&self, surface: &mut dyn DisplaySurface, profile: &ProfileRecord) {
        let view = ProfileView::from_profile(profile);
        for slot in Slot::ALL {
            surface.set_slot(slot, view.slot(slot));
        }
        for list in [ListSlot::CurrentGroups, ListSlot::SetupGroups] {
            surface.set_list(list, view.list(list));
        }

        let xp = build_xp_chart(&profile.xp_transactions, &self.xp_layout);
        Self::draw_chart(surface, ChartRegion::Xp, &xp.output);

        let skills = build_skills_chart(&profile.skills, &self.radar_layout);
        Self::draw_chart(surface, ChartRegion::Skills, &skills.output);

        debug!(
            login = %profile.login,
            xp_points = xp.points.len(),
            skill_points = skills.points.len(),
            "Rendered profile"
        );
        surface.show_view(View::Profile);
    }

    fn draw_chart(surface: &mut dyn DisplaySurface, region: ChartRegion, chart: &ChartOutput) {
        surface.set_chart(region, chart);
        let bindings: Vec<TooltipBinding> = chart
            .scene()
            .map(|scene| scene.markers().map(TooltipBinding::from).collect())
            .unwrap_or_default();
        surface.bind_tooltips(region, &bindings);
    }
}

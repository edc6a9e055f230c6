//! HTML page surface
//!
//! Collects everything the dashboard draws during one request and turns it
//! into a complete page.

use std::collections::HashMap;

use learnboard_core::charts::ChartOutput;
use learnboard_core::{ChartRegion, DisplaySurface, ListSlot, Slot, TooltipBinding, View};

use super::assets::{SCRIPT, STYLESHEET};
use super::svg::{chart_to_html, escape_xml};

const PAGE_TITLE: &str = "Learnboard";
const LOADING_SECTION: &str =
    r#"<div id="loadingSection" class="loading-section">Loading your profile...</div>"#;

/// Slot labels in display order
const STAT_LABELS: [(Slot, &str); 10] = [
    (Slot::Email, "Email"),
    (Slot::Campus, "Campus"),
    (Slot::Level, "Level"),
    (Slot::TotalXp, "Total XP"),
    (Slot::AuditRatio, "Audit ratio"),
    (Slot::TotalUp, "Done"),
    (Slot::TotalDown, "Received"),
    (Slot::FinishedProjects, "Finished projects"),
    (Slot::CurrentProjects, "Current projects"),
    (Slot::SetupProjects, "Projects in setup"),
];

/// [`DisplaySurface`] rendering to a server-side HTML page
#[derive(Debug)]
pub struct HtmlSurface {
    view: View,
    login_busy: bool,
    login_error: Option<String>,
    alerts: Vec<String>,
    username: String,
    slots: HashMap<Slot, String>,
    lists: HashMap<ListSlot, Vec<String>>,
    charts: HashMap<ChartRegion, String>,
    tooltips: HashMap<ChartRegion, Vec<TooltipBinding>>,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self {
            view: View::Login,
            login_busy: false,
            login_error: None,
            alerts: Vec::new(),
            username: String::new(),
            slots: HashMap::new(),
            lists: HashMap::new(),
            charts: HashMap::new(),
            tooltips: HashMap::new(),
        }
    }
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill the username field of the login form.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// Render the complete page.
    pub fn into_html(self) -> String {
        let body = match self.view {
            View::Login => self.login_section(),
            View::Loading => LOADING_SECTION.to_string(),
            View::Profile => self.profile_section(),
        };

        let alerts: String = self
            .alerts
            .iter()
            .map(|message| {
                format!(r#"<div class="alert" role="alert">{}</div>"#, escape_xml(message))
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{STYLESHEET}</style>
</head>
<body>
{alerts}{body}
<div id="chartTooltip" class="chart-tooltip hidden"></div>
<script>{SCRIPT}</script>
</body>
</html>
"#
        )
    }

    fn login_section(&self) -> String {
        let error = match &self.login_error {
            Some(message) => format!(
                r#"<div id="errorMessage" class="error-message" role="alert">{}</div>"#,
                escape_xml(message)
            ),
            None => r#"<div id="errorMessage" class="error-message hidden"></div>"#.to_string(),
        };
        let (disabled, label) =
            if self.login_busy { (" disabled", "Signing In...") } else { ("", "Sign In") };

        format!(
            r#"<section id="loginSection" class="login-section">
<form id="loginForm" class="login-card" method="post" action="/login">
<h1>Sign in</h1>
<label for="username">Username or email</label>
<input id="username" name="username" type="text" autocomplete="username" required value="{username}">
<label for="password">Password</label>
<input id="password" name="password" type="password" autocomplete="current-password" required>
<button type="submit" class="login-btn"{disabled}><span>{label}</span></button>
{error}
</form>
</section>"#,
            username = escape_xml(&self.username),
        )
    }

    fn profile_section(&self) -> String {
        let stats: String = STAT_LABELS
            .iter()
            .map(|(slot, label)| {
                format!(
                    r#"<div class="stat"><div class="label">{label}</div><div id="{id}" class="value">{value}</div></div>"#,
                    id = slot.id(),
                    value = escape_xml(self.slot(*slot)),
                )
            })
            .collect();

        format!(
            r#"<main id="profileSection" class="profile-section">
<header class="profile-header">
<h1 id="{name_id}">{name}</h1>
<form method="post" action="/logout"><button type="submit" class="logout-btn">Log out</button></form>
</header>
<div class="stats">{stats}</div>
<div class="groups">{current}{setup}</div>
<div class="charts">{xp}{skills}</div>
</main>"#,
            name_id = Slot::Name.id(),
            name = escape_xml(self.slot(Slot::Name)),
            current = self.list_section(ListSlot::CurrentGroups, "Current projects"),
            setup = self.list_section(ListSlot::SetupGroups, "Projects in setup"),
            xp = self.chart_card(ChartRegion::Xp, "XP progression"),
            skills = self.chart_card(ChartRegion::Skills, "Skills"),
        )
    }

    fn slot(&self, slot: Slot) -> &str {
        self.slots.get(&slot).map(String::as_str).unwrap_or_default()
    }

    fn list_section(&self, slot: ListSlot, title: &str) -> String {
        let items = self.lists.get(&slot).map(Vec::as_slice).unwrap_or_default();
        let body = if items.is_empty() {
            "<p>None</p>".to_string()
        } else {
            let entries: String =
                items.iter().map(|item| format!("<li>{}</li>", escape_xml(item))).collect();
            format!("<ul>{entries}</ul>")
        };
        format!(r#"<section id="{}"><h2>{title}</h2>{body}</section>"#, slot.id())
    }

    fn chart_card(&self, region: ChartRegion, title: &str) -> String {
        let chart = self.charts.get(&region).map(String::as_str).unwrap_or_default();
        let tooltips: String = self
            .tooltips
            .get(&region)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(tooltip_entry)
            .collect();

        format!(
            r#"<section id="{id}" class="chart-card"><h2>{title}</h2>{chart}<ul class="tooltip-data">{tooltips}</ul></section>"#,
            id = region.id(),
        )
    }
}

fn tooltip_entry(binding: &TooltipBinding) -> String {
    let hover = binding
        .hover_radius
        .map(|radius| format!(r#" data-hover-r="{radius}""#))
        .unwrap_or_default();
    let lines: String =
        binding.lines.iter().map(|line| format!("<span>{}</span>", escape_xml(line))).collect();
    format!(
        r#"<li data-marker-id="{id}"{hover}><strong>{title}</strong>{lines}</li>"#,
        id = escape_xml(&binding.marker_id),
        title = escape_xml(&binding.title),
    )
}

impl DisplaySurface for HtmlSurface {
    fn show_view(&mut self, view: View) {
        self.view = view;
    }

    fn set_login_busy(&mut self, busy: bool) {
        self.login_busy = busy;
    }

    fn show_login_error(&mut self, message: &str) {
        self.login_error = Some(message.to_string());
    }

    fn clear_login_error(&mut self) {
        self.login_error = None;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_slot(&mut self, slot: Slot, value: &str) {
        self.slots.insert(slot, value.to_string());
    }

    fn set_list(&mut self, slot: ListSlot, items: &[String]) {
        self.lists.insert(slot, items.to_vec());
    }

    fn set_chart(&mut self, region: ChartRegion, chart: &ChartOutput) {
        self.charts.insert(region, chart_to_html(chart, region.id()));
    }

    fn bind_tooltips(&mut self, region: ChartRegion, bindings: &[TooltipBinding]) {
        self.tooltips.insert(region, bindings.to_vec());
    }
}

//! Radial (radar) skills chart

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use learnboard_domain::SkillEntry;

use super::palette;
use super::scene::{ChartOutput, Marker, Point, Scene, Shape, Style, TextAnchor, Tooltip};
use crate::utils::format::format_thousands;

const RING_FRACTIONS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
const EMPTY_MESSAGE: &str = "No skills recorded yet";
/// Labels closer than this to the vertical centerline are centered.
const CENTERLINE_TOLERANCE: f64 = 1.0;

/// Canvas geometry of the radar chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarLayout {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub radius: f64,
    /// Distance of skill labels beyond the full radius
    pub label_offset: f64,
    pub marker_radius: f64,
    pub hover_radius: f64,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            center: Point::new(250.0, 250.0),
            radius: 180.0,
            label_offset: 25.0,
            marker_radius: 5.0,
            hover_radius: 8.0,
        }
    }
}

/// Placement of one skill on the radar
#[derive(Debug, Clone, PartialEq)]
pub struct SkillPoint {
    pub angle_index: usize,
    /// Radians, `-π/2` is straight up and angles grow clockwise on screen
    pub angle: f64,
    /// `amount / max_amount`, in `[0, 1]` for non-negative amounts
    pub normalized_distance: f64,
    pub x: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
    /// Display name (prefix stripped, underscores as spaces)
    pub skill_name: String,
    pub amount: f64,
}

impl SkillPoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn label_anchor(&self, center: Point) -> TextAnchor {
        if self.label_x > center.x + CENTERLINE_TOLERANCE {
            TextAnchor::Start
        } else if self.label_x < center.x - CENTERLINE_TOLERANCE {
            TextAnchor::End
        } else {
            TextAnchor::Middle
        }
    }
}

/// Geometry and metadata of one radar render
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsChart {
    pub points: Vec<SkillPoint>,
    pub max_amount: f64,
    pub output: ChartOutput,
}

/// Keep one entry per skill type holding the highest amount, in order of
/// first appearance.
pub fn strongest_per_type(skills: &[SkillEntry]) -> Vec<SkillEntry> {
    let mut index_by_type: HashMap<&str, usize> = HashMap::new();
    let mut result: Vec<SkillEntry> = Vec::new();

    for skill in skills {
        match index_by_type.get(skill.skill_name.as_str()) {
            Some(&index) => {
                if skill.amount > result[index].amount {
                    result[index].amount = skill.amount;
                }
            }
            None => {
                index_by_type.insert(skill.skill_name.as_str(), result.len());
                result.push(skill.clone());
            }
        }
    }

    result
}

/// Angle of the `index`-th of `count` evenly spaced spokes, starting at the top.
pub fn spoke_angle(index: usize, count: usize) -> f64 {
    index as f64 * TAU / count as f64 - FRAC_PI_2
}

/// Place every distinct skill on the radar.
pub fn skill_points(skills: &[SkillEntry], layout: &RadarLayout) -> Vec<SkillPoint> {
    let skills = strongest_per_type(skills);
    let count = skills.len();
    let max = skills.iter().map(|s| s.amount).fold(0.0_f64, f64::max);
    let label_radius = layout.radius + layout.label_offset;

    skills
        .iter()
        .enumerate()
        .map(|(index, skill)| {
            let angle = spoke_angle(index, count);
            let normalized = if max > 0.0 { skill.amount.max(0.0) / max } else { 0.0 };
            let distance = normalized * layout.radius;
            let (sin, cos) = angle.sin_cos();

            SkillPoint {
                angle_index: index,
                angle,
                normalized_distance: normalized,
                x: layout.center.x + distance * cos,
                y: layout.center.y + distance * sin,
                label_x: layout.center.x + label_radius * cos,
                label_y: layout.center.y + label_radius * sin,
                skill_name: skill.display_name(),
                amount: skill.amount,
            }
        })
        .collect()
}

/// Build the radar chart for `skills`.
pub fn build_skills_chart(skills: &[SkillEntry], layout: &RadarLayout) -> SkillsChart {
    let points = skill_points(skills, layout);
    if points.is_empty() {
        return SkillsChart {
            points,
            max_amount: 0.0,
            output: ChartOutput::Placeholder {
                width: layout.width,
                height: layout.height,
                message: EMPTY_MESSAGE.to_string(),
            },
        };
    }

    let max = points.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    let mut scene = Scene::new(layout.width, layout.height);

    push_rings(&mut scene, layout, max);
    push_spokes(&mut scene, layout, &points);

    scene.push(Shape::Polygon {
        points: points.iter().map(SkillPoint::position).collect(),
        style: Style::class("skill-area")
            .fill(palette::SECONDARY)
            .stroke(palette::SECONDARY, 2.0)
            .opacity(0.35),
    });

    for point in &points {
        scene.push(Shape::Circle {
            center: point.position(),
            radius: layout.marker_radius,
            style: Style::class("skill-point")
                .fill(palette::SECONDARY)
                .stroke(palette::SURFACE, 1.5),
            marker: Some(Marker {
                id: format!("skill-point-{}", point.angle_index),
                tooltip: Tooltip {
                    title: point.skill_name.clone(),
                    lines: vec![format!("Amount: {}", format_thousands(point.amount))],
                },
                hover_radius: Some(layout.hover_radius),
            }),
        });
    }

    for point in &points {
        scene.push(Shape::Text {
            position: Point::new(point.label_x, point.label_y),
            content: point.skill_name.clone(),
            anchor: point.label_anchor(layout.center),
            style: Style::class("skill-label").fill(palette::TEXT).font_size(12.0),
        });
    }

    SkillsChart { points, max_amount: max, output: ChartOutput::Scene(scene) }
}

fn push_rings(scene: &mut Scene, layout: &RadarLayout, max: f64) {
    for fraction in RING_FRACTIONS {
        let radius = layout.radius * fraction;
        scene.push(Shape::Circle {
            center: layout.center,
            radius,
            style: Style::class("skill-ring").stroke(palette::GRID, 1.0).fill("none"),
            marker: None,
        });
        scene.push(Shape::Text {
            position: layout.center.offset(4.0, -radius - 2.0),
            content: format_thousands(max * fraction),
            anchor: TextAnchor::Start,
            style: Style::class("skill-ring-label").fill(palette::MUTED_TEXT).font_size(10.0),
        });
    }
}

fn push_spokes(scene: &mut Scene, layout: &RadarLayout, points: &[SkillPoint]) {
    for point in points {
        let (sin, cos) = point.angle.sin_cos();
        scene.push(Shape::Line {
            from: layout.center,
            to: layout.center.offset(layout.radius * cos, layout.radius * sin),
            style: Style::class("skill-axis").stroke(palette::GRID, 1.0),
        });
    }
}

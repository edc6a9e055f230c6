//! Cumulative XP line/area chart

use chrono::{DateTime, Utc};
use learnboard_domain::XpTransaction;

use super::palette;
use super::scene::{
    ChartOutput, Marker, PathCommand, Point, Scene, Shape, Style, TextAnchor, Tooltip,
};
use crate::utils::format::{format_date, format_delta, format_thousands};

const GRID_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const EMPTY_MESSAGE: &str = "No XP transactions yet";

/// Space reserved around the plot area for labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Canvas geometry of the XP chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XpChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub marker_radius: f64,
    pub hover_radius: f64,
}

impl Default for XpChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: Margin { top: 20.0, right: 30.0, bottom: 50.0, left: 70.0 },
            marker_radius: 4.0,
            hover_radius: 6.0,
        }
    }
}

impl XpChartLayout {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Plot-relative point to canvas coordinates
    fn to_canvas(&self, point: Point) -> Point {
        point.offset(self.margin.left, self.margin.top)
    }
}

/// Running total after one transaction
#[derive(Debug, Clone, PartialEq)]
pub struct XpPoint {
    pub date: DateTime<Utc>,
    pub cumulative_xp: f64,
    pub delta_amount: f64,
    pub project_path: String,
}

impl XpPoint {
    pub fn project_name(&self) -> &str {
        self.project_path.trim_end_matches('/').rsplit('/').next().unwrap_or(&self.project_path)
    }
}

/// Geometry and metadata of one XP chart render
#[derive(Debug, Clone, PartialEq)]
pub struct XpChart {
    pub points: Vec<XpPoint>,
    /// Plot-relative positions, parallel to `points`
    pub positions: Vec<Point>,
    pub max_cumulative: f64,
    pub output: ChartOutput,
}

/// Running sum over the transaction sequence, in input order.
pub fn cumulative_points(transactions: &[XpTransaction]) -> Vec<XpPoint> {
    transactions
        .iter()
        .scan(0.0_f64, |total, tx| {
            *total += tx.amount;
            Some(XpPoint {
                date: tx.timestamp,
                cumulative_xp: *total,
                delta_amount: tx.amount,
                project_path: tx.path.clone(),
            })
        })
        .collect()
}

/// Plot-relative position of every point.
///
/// x spreads points evenly across the plot width (a single point sits on the
/// left edge); y scales the cumulative value against the maximum, with the
/// maximum at the top. A non-positive maximum leaves every point on the
/// baseline.
pub fn plot_positions(points: &[XpPoint], plot_width: f64, plot_height: f64) -> Vec<Point> {
    let max = max_cumulative(points);
    let steps = points.len().saturating_sub(1);

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if steps == 0 { 0.0 } else { index as f64 / steps as f64 * plot_width };
            let y = if max > 0.0 {
                plot_height - (point.cumulative_xp / max) * plot_height
            } else {
                plot_height
            };
            Point::new(x, y)
        })
        .collect()
}

fn max_cumulative(points: &[XpPoint]) -> f64 {
    points.iter().map(|p| p.cumulative_xp).fold(f64::NEG_INFINITY, f64::max).max(0.0)
}

/// Build the XP chart for `transactions` (expected ascending by timestamp).
pub fn build_xp_chart(transactions: &[XpTransaction], layout: &XpChartLayout) -> XpChart {
    let points = cumulative_points(transactions);
    if points.is_empty() {
        return XpChart {
            points,
            positions: Vec::new(),
            max_cumulative: 0.0,
            output: ChartOutput::Placeholder {
                width: layout.width,
                height: layout.height,
                message: EMPTY_MESSAGE.to_string(),
            },
        };
    }

    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();
    let max = max_cumulative(&points);
    let positions = plot_positions(&points, plot_width, plot_height);

    let mut scene = Scene::new(layout.width, layout.height);
    push_grid(&mut scene, layout, max);
    push_axes(&mut scene, layout);
    push_area_and_line(&mut scene, layout, &positions);
    push_markers(&mut scene, layout, &points, &positions);
    push_date_labels(&mut scene, layout, &points);

    XpChart { points, positions, max_cumulative: max, output: ChartOutput::Scene(scene) }
}

fn push_grid(scene: &mut Scene, layout: &XpChartLayout, max: f64) {
    let plot_width = layout.plot_width();
    let plot_height = layout.plot_height();

    for fraction in GRID_FRACTIONS {
        let y = plot_height - fraction * plot_height;
        let left = layout.to_canvas(Point::new(0.0, y));
        let right = layout.to_canvas(Point::new(plot_width, y));

        scene.push(Shape::Line {
            from: left,
            to: right,
            style: Style::class("xp-grid").stroke(palette::GRID, 1.0).opacity(0.6),
        });
        scene.push(Shape::Text {
            position: left.offset(-10.0, 4.0),
            content: format_thousands(max * fraction),
            anchor: TextAnchor::End,
            style: Style::class("xp-grid-label").fill(palette::MUTED_TEXT).font_size(11.0),
        });
    }
}

fn push_axes(scene: &mut Scene, layout: &XpChartLayout) {
    let origin = layout.to_canvas(Point::new(0.0, layout.plot_height()));
    let top = layout.to_canvas(Point::new(0.0, 0.0));
    let right = layout.to_canvas(Point::new(layout.plot_width(), layout.plot_height()));
    let style = Style::class("xp-axis").stroke(palette::AXIS, 1.0);

    scene.push(Shape::Line { from: origin, to: top, style: style.clone() });
    scene.push(Shape::Line { from: origin, to: right, style });
}

fn push_area_and_line(scene: &mut Scene, layout: &XpChartLayout, positions: &[Point]) {
    let baseline = layout.plot_height();
    let canvas: Vec<Point> = positions.iter().map(|p| layout.to_canvas(*p)).collect();

    if let (Some(first), Some(last)) = (positions.first(), positions.last()) {
        let mut area = Vec::with_capacity(canvas.len() + 3);
        area.push(PathCommand::MoveTo(layout.to_canvas(Point::new(first.x, baseline))));
        area.extend(canvas.iter().map(|p| PathCommand::LineTo(*p)));
        area.push(PathCommand::LineTo(layout.to_canvas(Point::new(last.x, baseline))));
        area.push(PathCommand::Close);

        scene.push(Shape::Path {
            commands: area,
            style: Style::class("xp-area").fill(palette::PRIMARY).opacity(0.2),
        });
    }

    let line = canvas
        .iter()
        .enumerate()
        .map(|(index, p)| {
            if index == 0 {
                PathCommand::MoveTo(*p)
            } else {
                PathCommand::LineTo(*p)
            }
        })
        .collect();

    scene.push(Shape::Path {
        commands: line,
        style: Style::class("xp-line").stroke(palette::PRIMARY, 2.0).fill("none"),
    });
}

fn push_markers(
    scene: &mut Scene,
    layout: &XpChartLayout,
    points: &[XpPoint],
    positions: &[Point],
) {
    for (index, (point, position)) in points.iter().zip(positions).enumerate() {
        scene.push(Shape::Circle {
            center: layout.to_canvas(*position),
            radius: layout.marker_radius,
            style: Style::class("xp-point").fill(palette::PRIMARY).stroke(palette::SURFACE, 1.5),
            marker: Some(Marker {
                id: format!("xp-point-{index}"),
                tooltip: xp_tooltip(point),
                hover_radius: Some(layout.hover_radius),
            }),
        });
    }
}

fn xp_tooltip(point: &XpPoint) -> Tooltip {
    Tooltip {
        title: format_date(&point.date),
        lines: vec![
            format!("Total: {} XP", format_thousands(point.cumulative_xp)),
            format_delta(point.delta_amount),
            format!("Project: {}", point.project_name()),
        ],
    }
}

fn push_date_labels(scene: &mut Scene, layout: &XpChartLayout, points: &[XpPoint]) {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };
    let y = layout.plot_height() + 25.0;
    let style = Style::class("xp-date-label").fill(palette::MUTED_TEXT).font_size(12.0);

    scene.push(Shape::Text {
        position: layout.to_canvas(Point::new(0.0, y)),
        content: format_date(&first.date),
        anchor: TextAnchor::Start,
        style: style.clone(),
    });
    scene.push(Shape::Text {
        position: layout.to_canvas(Point::new(layout.plot_width(), y)),
        content: format_date(&last.date),
        anchor: TextAnchor::End,
        style,
    });
}

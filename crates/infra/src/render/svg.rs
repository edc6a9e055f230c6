//! Scene graph to SVG serialization

use learnboard_core::charts::{ChartOutput, PathCommand, Point, Scene, Shape, Style};

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Compact coordinate: at most two decimals, no trailing zeros.
fn num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn style_attrs(style: &Style) -> String {
    let mut attrs = format!(r#" class="{}""#, escape_xml(style.class));
    if let Some(stroke) = style.stroke {
        attrs.push_str(&format!(r#" stroke="{}""#, escape_xml(stroke)));
    }
    if let Some(width) = style.stroke_width {
        attrs.push_str(&format!(r#" stroke-width="{}""#, num(width)));
    }
    if let Some(fill) = style.fill {
        attrs.push_str(&format!(r#" fill="{}""#, escape_xml(fill)));
    }
    if let Some(opacity) = style.opacity {
        attrs.push_str(&format!(r#" fill-opacity="{}""#, num(opacity)));
    }
    if let Some(size) = style.font_size {
        attrs.push_str(&format!(r#" font-size="{}""#, num(size)));
    }
    attrs
}

fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|command| match command {
            PathCommand::MoveTo(p) => format!("M{},{}", num(p.x), num(p.y)),
            PathCommand::LineTo(p) => format!("L{},{}", num(p.x), num(p.y)),
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn point_list(points: &[Point]) -> String {
    points.iter().map(|p| format!("{},{}", num(p.x), num(p.y))).collect::<Vec<_>>().join(" ")
}

fn shape_to_svg(shape: &Shape) -> String {
    match shape {
        Shape::Line { from, to, style } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            style_attrs(style)
        ),
        Shape::Path { commands, style } => {
            format!(r#"<path d="{}"{}/>"#, path_data(commands), style_attrs(style))
        }
        Shape::Circle { center, radius, style, marker } => {
            let marker_attrs = marker
                .as_ref()
                .map(|marker| {
                    let mut attrs = format!(r#" data-marker="{}""#, escape_xml(&marker.id));
                    attrs.push_str(&format!(r#" data-r="{}""#, num(*radius)));
                    if let Some(hover) = marker.hover_radius {
                        attrs.push_str(&format!(r#" data-hover-r="{}""#, num(hover)));
                    }
                    attrs
                })
                .unwrap_or_default();
            format!(
                r#"<circle cx="{}" cy="{}" r="{}"{}{}/>"#,
                num(center.x),
                num(center.y),
                num(*radius),
                style_attrs(style),
                marker_attrs
            )
        }
        Shape::Polygon { points, style } => {
            format!(r#"<polygon points="{}"{}/>"#, point_list(points), style_attrs(style))
        }
        Shape::Text { position, content, anchor, style } => format!(
            r#"<text x="{}" y="{}" text-anchor="{}"{}>{}</text>"#,
            num(position.x),
            num(position.y),
            anchor.as_str(),
            style_attrs(style),
            escape_xml(content)
        ),
    }
}

/// Serialize a scene as a standalone `<svg>` element.
pub fn scene_to_svg(scene: &Scene, id: &str) -> String {
    let mut svg = format!(
        r#"<svg id="{id}-svg" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img">"#,
        id = escape_xml(id),
        w = num(scene.width),
        h = num(scene.height),
    );
    for shape in &scene.shapes {
        svg.push_str(&shape_to_svg(shape));
    }
    svg.push_str("</svg>");
    svg
}

/// Markup for a chart region: the SVG, or the placeholder message.
pub fn chart_to_html(chart: &ChartOutput, id: &str) -> String {
    match chart {
        ChartOutput::Scene(scene) => scene_to_svg(scene, id),
        ChartOutput::Placeholder { width, height, message } => format!(
            r#"<div class="chart-placeholder" style="max-width:{}px;min-height:{}px">{}</div>"#,
            num(*width),
            num(*height),
            escape_xml(message)
        ),
    }
}

#[cfg(test)]
mod tests {
    use learnboard_core::charts::{Marker, TextAnchor, Tooltip};

    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_xml(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn trims_numbers() {
        assert_eq!(num(70.0), "70");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn serializes_each_shape_kind() {
        let mut scene = Scene::new(100.0, 50.0);
        scene.push(Shape::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 0.0),
            style: Style::class("axis").stroke("#999", 1.0),
        });
        scene.push(Shape::Path {
            commands: vec![
                PathCommand::MoveTo(Point::new(0.0, 10.0)),
                PathCommand::LineTo(Point::new(5.0, 2.5)),
                PathCommand::Close,
            ],
            style: Style::class("area").fill("#abc").opacity(0.2),
        });
        scene.push(Shape::Circle {
            center: Point::new(5.0, 2.5),
            radius: 4.0,
            style: Style::class("dot"),
            marker: Some(Marker {
                id: "xp-point-0".into(),
                tooltip: Tooltip { title: "t".into(), lines: vec![] },
                hover_radius: Some(6.0),
            }),
        });
        scene.push(Shape::Polygon {
            points: vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)],
            style: Style::class("poly"),
        });
        scene.push(Shape::Text {
            position: Point::new(3.0, 4.0),
            content: "a < b".into(),
            anchor: TextAnchor::End,
            style: Style::class("label").font_size(12.0),
        });

        let svg = scene_to_svg(&scene, "xp-chart");

        assert!(svg.starts_with(
            r#"<svg id="xp-chart-svg" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50""#
        ));
        assert!(svg.contains(
            r##"<line x1="0" y1="0" x2="10" y2="0" class="axis" stroke="#999" stroke-width="1"/>"##
        ));
        assert!(svg.contains(r#"d="M0,10 L5,2.5 Z""#));
        assert!(svg.contains(r#"fill-opacity="0.2""#));
        assert!(svg.contains(r#"data-marker="xp-point-0" data-r="4" data-hover-r="6""#));
        assert!(svg.contains(r#"<polygon points="1,1 2,2" class="poly"/>"#));
        assert!(svg.contains(r#"text-anchor="end" class="label" font-size="12">a &lt; b</text>"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn placeholder_renders_message() {
        let chart = ChartOutput::Placeholder {
            width: 800.0,
            height: 400.0,
            message: "No XP transactions yet".into(),
        };
        let html = chart_to_html(&chart, "xp-chart");
        assert!(html.contains("chart-placeholder"));
        assert!(html.contains("No XP transactions yet"));
        assert!(!html.contains("<svg"));
    }
}

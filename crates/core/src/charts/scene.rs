//! Renderer-agnostic scene graph for the dashboard charts.
//!
//! Chart builders emit a flat list of typed shapes in canvas coordinates
//! (origin top-left, y grows downward). Adapters serialize the list to the
//! target surface; nothing here knows about markup.

/// Point in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift by `dx`, `dy`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Horizontal alignment of a text run relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Paint attributes. `class` is the hook for page stylesheets; the explicit
/// colors keep a standalone serialization legible.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub class: &'static str,
    pub stroke: Option<&'static str>,
    pub fill: Option<&'static str>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub font_size: Option<f64>,
}

impl Style {
    pub fn class(class: &'static str) -> Self {
        Self { class, stroke: None, fill: None, stroke_width: None, opacity: None, font_size: None }
    }

    pub fn stroke(mut self, color: &'static str, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = Some(width);
        self
    }

    pub fn fill(mut self, color: &'static str) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// One segment of a path outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Tooltip payload carried by an interactive marker
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<String>,
}

/// Interactive point on a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Unique within the scene, stable across renders of the same data
    pub id: String,
    pub tooltip: Tooltip,
    /// Radius while hovered; `None` keeps the resting radius.
    pub hover_radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point, style: Style },
    Path { commands: Vec<PathCommand>, style: Style },
    Circle { center: Point, radius: f64, style: Style, marker: Option<Marker> },
    Polygon { points: Vec<Point>, style: Style },
    Text { position: Point, content: String, anchor: TextAnchor, style: Style },
}

impl Shape {
    pub fn marker(&self) -> Option<&Marker> {
        match self {
            Self::Circle { marker, .. } => marker.as_ref(),
            _ => None,
        }
    }
}

/// Fixed-size canvas holding shapes in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, shapes: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Interactive markers in paint order
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.shapes.iter().filter_map(Shape::marker)
    }
}

/// Result of a chart transform: either geometry or a message explaining why
/// there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Placeholder { width: f64, height: f64, message: String },
    Scene(Scene),
}

impl ChartOutput {
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Self::Scene(scene) => Some(scene),
            Self::Placeholder { .. } => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

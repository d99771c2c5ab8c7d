//! Annotation shape variants and the shared annotation model.

use std::fmt;

use markup_geometry::Point;
use thiserror::Error;

use super::color::Color;
use super::id::AnnotationId;
use super::style::TextStyle;

// ============================================================================
// Shape Kinds
// ============================================================================

/// The kind of an annotation, without its variant data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// Straight arrow from an origin to a tip
    Arrow,
    /// Outline rectangle between two corners
    Rect,
    /// Freehand stroke
    Pen,
    /// Text box between an origin and its extent
    Text,
    /// Numbered circular marker
    Number,
    /// Translucent highlighter box
    Highlight,
    /// Redaction box hiding the pixels underneath
    Obfuscate,
}

impl ShapeKind {
    /// Get the display name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Arrow => "arrow",
            ShapeKind::Rect => "rect",
            ShapeKind::Pen => "pen",
            ShapeKind::Text => "text",
            ShapeKind::Number => "number",
            ShapeKind::Highlight => "highlight",
            ShapeKind::Obfuscate => "obfuscate",
        }
    }

    /// Get all shape kinds.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Arrow,
            ShapeKind::Rect,
            ShapeKind::Pen,
            ShapeKind::Text,
            ShapeKind::Number,
            ShapeKind::Highlight,
            ShapeKind::Obfuscate,
        ]
    }

    /// Number of points a shape of this kind is made of.
    pub fn point_count(&self) -> PointCount {
        match self {
            ShapeKind::Arrow
            | ShapeKind::Rect
            | ShapeKind::Text
            | ShapeKind::Highlight
            | ShapeKind::Obfuscate => PointCount::Exactly(2),
            ShapeKind::Pen => PointCount::AtLeast(1),
            ShapeKind::Number => PointCount::Exactly(1),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Allowed length of a shape's point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCount {
    Exactly(usize),
    AtLeast(usize),
}

impl PointCount {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            PointCount::Exactly(n) => count == n,
            PointCount::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointCount::Exactly(n) => write!(f, "exactly {n}"),
            PointCount::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

// ============================================================================
// Variant Data
// ============================================================================

/// Content and style of a text annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub style: TextStyle,
    /// Whether the text is currently open in an editor. Never persisted.
    pub editing: bool,
}

impl TextContent {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            editing: false,
        }
    }
}

/// Shape variant with its kind-specific attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Arrow,
    Rect,
    Pen,
    Text(TextContent),
    /// Numbered marker with its label value.
    Number(u32),
    Highlight,
    Obfuscate,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Arrow => ShapeKind::Arrow,
            Shape::Rect => ShapeKind::Rect,
            Shape::Pen => ShapeKind::Pen,
            Shape::Text(_) => ShapeKind::Text,
            Shape::Number(_) => ShapeKind::Number,
            Shape::Highlight => ShapeKind::Highlight,
            Shape::Obfuscate => ShapeKind::Obfuscate,
        }
    }
}

/// Errors from building an annotation with invalid geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("{kind} annotation needs {expected} points, got {found}")]
    PointCount {
        kind: ShapeKind,
        expected: PointCount,
        found: usize,
    },
}

// ============================================================================
// Annotation Model
// ============================================================================

/// A single annotation drawn over an image.
///
/// The point list always satisfies [`ShapeKind::point_count`] for the
/// annotation's kind: constructors check it and every transformation keeps
/// the length unchanged. Meaning of the points by kind:
///
/// - arrow: `[origin, tip]`
/// - rect, highlight, obfuscate: `[origin, opposite corner]`
/// - pen: the stroke path
/// - text: `[origin, extent]`
/// - number: `[position]`
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationModel {
    id: AnnotationId,
    shape: Shape,
    points: Vec<Point>,
    color: Color,
}

impl AnnotationModel {
    /// Create an annotation, checking the point count against the shape kind.
    pub fn new(
        id: AnnotationId,
        shape: Shape,
        points: Vec<Point>,
        color: Color,
    ) -> Result<Self, ShapeError> {
        let kind = shape.kind();
        let expected = kind.point_count();
        if !expected.accepts(points.len()) {
            return Err(ShapeError::PointCount {
                kind,
                expected,
                found: points.len(),
            });
        }

        Ok(Self {
            id,
            shape,
            points,
            color,
        })
    }

    /// Arrow pointing from `origin` to `tip`.
    pub fn arrow(id: AnnotationId, origin: Point, tip: Point, color: Color) -> Self {
        Self::two_point(id, Shape::Arrow, origin, tip, color)
    }

    /// Outline rectangle spanning two opposite corners.
    pub fn rect(id: AnnotationId, origin: Point, corner: Point, color: Color) -> Self {
        Self::two_point(id, Shape::Rect, origin, corner, color)
    }

    pub fn highlight(id: AnnotationId, origin: Point, corner: Point, color: Color) -> Self {
        Self::two_point(id, Shape::Highlight, origin, corner, color)
    }

    pub fn obfuscate(id: AnnotationId, origin: Point, corner: Point, color: Color) -> Self {
        Self::two_point(id, Shape::Obfuscate, origin, corner, color)
    }

    /// Freehand stroke. Fails on an empty path.
    pub fn pen(id: AnnotationId, path: Vec<Point>, color: Color) -> Result<Self, ShapeError> {
        Self::new(id, Shape::Pen, path, color)
    }

    /// Text box from `origin` to `extent`.
    pub fn text(
        id: AnnotationId,
        origin: Point,
        extent: Point,
        content: TextContent,
        color: Color,
    ) -> Self {
        Self::two_point(id, Shape::Text(content), origin, extent, color)
    }

    /// Numbered marker centered on `position`.
    pub fn number(id: AnnotationId, position: Point, value: u32, color: Color) -> Self {
        Self {
            id,
            shape: Shape::Number(value),
            points: vec![position],
            color,
        }
    }

    fn two_point(id: AnnotationId, shape: Shape, a: Point, b: Point, color: Color) -> Self {
        Self {
            id,
            shape,
            points: vec![a, b],
            color,
        }
    }

    pub fn id(&self) -> &AnnotationId {
        &self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// The defining points, never empty.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Text content, for text annotations.
    pub fn text_content(&self) -> Option<&TextContent> {
        match &self.shape {
            Shape::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Label value, for numbered markers.
    pub fn number_value(&self) -> Option<u32> {
        match self.shape {
            Shape::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Same annotation painted in another color.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// Same annotation with replaced variant data of the same kind.
    ///
    /// Returns `None` if `shape` is of a different kind.
    pub fn with_shape(&self, shape: Shape) -> Option<Self> {
        if shape.kind() != self.kind() {
            return None;
        }
        Some(Self {
            shape,
            ..self.clone()
        })
    }

    /// Apply `f` to every point, keeping order and count.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            points: self.points.iter().map(|p| f(*p)).collect(),
            ..self.clone()
        }
    }

    /// Replace the point at `index`. `None` if out of range.
    pub fn with_point(&self, index: usize, point: Point) -> Option<Self> {
        if index >= self.points.len() {
            return None;
        }
        let mut points = self.points.clone();
        points[index] = point;
        Some(Self {
            points,
            ..self.clone()
        })
    }
}

/// Label for the next numbered marker: one more than the highest label in
/// `annotations`, or `first` when there are no markers yet.
pub fn next_number_value(annotations: &[AnnotationModel], first: u32) -> u32 {
    annotations
        .iter()
        .filter_map(AnnotationModel::number_value)
        .max()
        .map_or(first, |highest| highest.saturating_add(1).max(first))
}

// ============================================================================
// Tests
// ============================================================================

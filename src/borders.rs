//! Selection borders drawn around the active annotation.
//!
//! The border rectangle is the axis-aligned box spanning the annotation's
//! points, grown by a per-kind inset. Numbered markers are a single point,
//! so their box is first grown to the marker's radius.

use markup_geometry::{BoundingBox, Point};

use crate::model::{AnnotationModel, ShapeKind};

/// Radius of a numbered marker, in image pixels.
pub const NUMBER_MARKER_RADIUS: f32 = 15.0;

/// Border geometry for one shape kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    /// Horizontal growth on each side.
    pub inset_x: f32,
    /// Vertical growth on each side.
    pub inset_y: f32,
    /// Stroke width of the selection outline.
    pub line_width: f32,
}

impl BorderStyle {
    const fn new(inset_x: f32, inset_y: f32, line_width: f32) -> Self {
        Self {
            inset_x,
            inset_y,
            line_width,
        }
    }
}

/// Border style for `kind`.
pub fn border_style(kind: ShapeKind) -> BorderStyle {
    match kind {
        ShapeKind::Text => BorderStyle::new(5.0, 10.0, 2.0),
        ShapeKind::Arrow
        | ShapeKind::Pen
        | ShapeKind::Rect
        | ShapeKind::Highlight
        | ShapeKind::Obfuscate => BorderStyle::new(5.0, 5.0, 1.0),
        ShapeKind::Number => BorderStyle::new(4.0, 4.0, 1.5),
    }
}

/// Rectangle of the selection outline around `annotation`.
pub fn borders_rect(annotation: &AnnotationModel) -> BoundingBox {
    let style = border_style(annotation.kind());
    let mut rect = BoundingBox::spanning(annotation.points())
        .unwrap_or_else(|| BoundingBox::new(0.0, 0.0, 0.0, 0.0));

    if annotation.kind() == ShapeKind::Number {
        rect = rect.expanded(NUMBER_MARKER_RADIUS, NUMBER_MARKER_RADIUS);
    }

    rect.expanded(style.inset_x, style.inset_y)
}

/// Stroke width of the selection outline around `annotation`.
pub fn border_line_width(annotation: &AnnotationModel) -> f32 {
    border_style(annotation.kind()).line_width
}

/// Check if `point` falls inside the selection border of `annotation`.
pub fn contains_point(annotation: &AnnotationModel, point: Point) -> bool {
    borders_rect(annotation).contains(&point)
}

/// Index of the topmost annotation under `point`.
///
/// Later annotations are drawn on top, so the search runs back to front.
pub fn hit_test(annotations: &[AnnotationModel], point: Point) -> Option<usize> {
    annotations
        .iter()
        .rposition(|annotation| contains_point(annotation, point))
}

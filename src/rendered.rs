//! Edit results tagged with a redraw hint.

use crate::model::AnnotationModel;

/// Why an annotation changed, so a renderer can pick the cheapest redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingType {
    /// The annotation was just drawn.
    Created,
    /// Translated without changing its shape.
    Moved,
    /// One defining point was dragged.
    Resized,
    /// Scaled about an anchor.
    Scaled,
    /// Text content changed; the text layout has to be redone.
    TextChanged,
    /// Only the selection changed; the content can be reused as is.
    SelectionOnly,
}

/// An annotation paired with an optional redraw hint.
///
/// Lives for one edit cycle: produced by an edit, consumed by the redraw
/// path, then dropped. Never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedModel {
    pub model: AnnotationModel,
    pub rendering_type: Option<RenderingType>,
}

impl RenderedModel {
    /// Wrap a model with no hint; renderers redraw it fully.
    pub fn new(model: AnnotationModel) -> Self {
        Self {
            model,
            rendering_type: None,
        }
    }

    pub fn with_hint(model: AnnotationModel, rendering_type: RenderingType) -> Self {
        Self {
            model,
            rendering_type: Some(rendering_type),
        }
    }

    /// Whether the annotation's content has to be drawn again.
    pub fn needs_content_redraw(&self) -> bool {
        self.rendering_type != Some(RenderingType::SelectionOnly)
    }

    pub fn into_model(self) -> AnnotationModel {
        self.model
    }
}

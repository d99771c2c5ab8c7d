//! Annotation data model.

mod annotation;
mod color;
mod id;
mod style;

pub use annotation::{
    AnnotationModel, PointCount, Shape, ShapeError, ShapeKind, TextContent, next_number_value,
};
pub use color::Color;
pub use id::AnnotationId;
pub use style::{DEFAULT_FONT_SIZE, MIN_FONT_SIZE, TextAlignment, TextStyle};

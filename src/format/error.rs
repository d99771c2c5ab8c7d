//! Error types for writing and reading annotation documents.

use thiserror::Error;

use crate::model::{AnnotationId, PointCount, ShapeError, ShapeKind};

/// Errors that abort decoding of a whole document.
///
/// `bucket` names the JSON array the offending entry came from
/// (`"rects"`, `"texts"`, ...).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed JSON or a missing mandatory field
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrong number of points for the entry's shape kind
    #[error("{bucket} entry '{id}' needs {expected} points, got {found}")]
    PointCount {
        bucket: &'static str,
        id: AnnotationId,
        expected: PointCount,
        found: usize,
    },

    /// A coordinate is NaN or infinite
    #[error("{bucket} entry '{id}' has a non-finite point")]
    NonFinitePoint {
        bucket: &'static str,
        id: AnnotationId,
    },

    /// A color component is outside 0..=1
    #[error("{bucket} entry '{id}' has a color component outside 0..=1")]
    InvalidColor {
        bucket: &'static str,
        id: AnnotationId,
    },

    /// Font size is not a positive finite number
    #[error("text entry '{id}' has invalid font size {font_size}")]
    InvalidFontSize { id: AnnotationId, font_size: f32 },

    /// Entry id is the empty string
    #[error("{bucket} entry with order {order} has an empty id")]
    EmptyId { bucket: &'static str, order: usize },

    /// Two entries share an id
    #[error("Duplicate annotation id '{id}'")]
    DuplicateId { id: AnnotationId },

    /// Two entries share an order index
    #[error("Order {order} is used by more than one entry")]
    DuplicateOrder { order: usize },

    /// Order index not in `0..count`
    #[error("Order {order} of entry '{id}' is out of range for {count} entries")]
    OrderOutOfRange {
        id: AnnotationId,
        order: usize,
        count: usize,
    },
}

impl DecodeError {
    /// Attach the bucket and id to a shape construction error.
    pub(crate) fn from_shape_error(bucket: &'static str, id: AnnotationId, err: ShapeError) -> Self {
        match err {
            ShapeError::PointCount {
                expected, found, ..
            } => Self::PointCount {
                bucket,
                id,
                expected,
                found,
            },
        }
    }
}

/// Errors that stop a collection from being written.
///
/// Raised for annotations a document could hold but never load back.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A coordinate is NaN or infinite
    #[error("{kind} annotation '{id}' has a non-finite point")]
    NonFinitePoint { kind: ShapeKind, id: AnnotationId },

    /// A color component is outside 0..=1
    #[error("{kind} annotation '{id}' has a color component outside 0..=1")]
    InvalidColor { kind: ShapeKind, id: AnnotationId },

    /// Font size is not a positive finite number
    #[error("text annotation '{id}' has invalid font size {font_size}")]
    InvalidFontSize { id: AnnotationId, font_size: f32 },

    /// Annotation id is the empty string
    #[error("{kind} annotation at position {order} has an empty id")]
    EmptyId { kind: ShapeKind, order: usize },

    /// Two annotations share an id
    #[error("Duplicate annotation id '{id}'")]
    DuplicateId { id: AnnotationId },
}

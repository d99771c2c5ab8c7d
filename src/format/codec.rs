//! Conversion between an ordered annotation list and a [`SortedDocument`].
//!
//! Encoding partitions the list by kind and stamps each entry with its
//! position. Decoding validates every entry, checks that the order indices
//! form exactly `0..n`, and sorts by them to rebuild the list. Both
//! directions apply the same field checks, so anything `encode` accepts
//! `decode` loads back.

use std::collections::HashSet;

use markup_geometry::Point;

use super::document::{NumberEntry, ShapeEntry, SortedDocument, TextEntry, bucket_name};
use super::error::{DecodeError, EncodeError};
use crate::model::{AnnotationId, AnnotationModel, Color, Shape, ShapeKind, TextContent, TextStyle};

/// Group `annotations` into a document, keeping their draw order in the
/// `order` field of each entry.
///
/// Text style fields equal to `style` are left out of the text entries.
/// Fails on annotations the document could not load back: empty or
/// duplicate ids, non-finite points, colors outside `0..=1`, or a
/// non-positive font size.
pub fn encode(annotations: &[AnnotationModel], style: &TextStyle) -> Result<SortedDocument, EncodeError> {
    let result = encode_entries(annotations, style);
    if let Err(e) = &result {
        log::warn!("Refused to encode annotations: {}", e);
    }
    result
}

fn encode_entries(annotations: &[AnnotationModel], style: &TextStyle) -> Result<SortedDocument, EncodeError> {
    if let Some(id) = first_duplicate_id(annotations.iter().map(AnnotationModel::id)) {
        return Err(EncodeError::DuplicateId { id: id.clone() });
    }

    let mut document = SortedDocument::new(*style);

    for (order, annotation) in annotations.iter().enumerate() {
        check_fields(
            annotation.id(),
            annotation.points(),
            annotation.color(),
            annotation.shape(),
        )
        .map_err(|fault| fault.for_encode(annotation, order))?;

        let id = annotation.id().clone();
        let points = annotation.points().to_vec();
        let color = annotation.color();

        match annotation.shape() {
            Shape::Text(content) => document.texts.push(TextEntry {
                id,
                points,
                color,
                text: content.text.clone(),
                font_size: (content.style.font_size != style.font_size)
                    .then_some(content.style.font_size),
                alignment: (content.style.alignment != style.alignment)
                    .then_some(content.style.alignment),
                order,
            }),
            Shape::Number(value) => document.numbers.push(NumberEntry {
                id,
                points,
                color,
                value: *value,
                order,
            }),
            shape => {
                if let Some(bucket) = document.plain_bucket_mut(shape.kind()) {
                    bucket.push(ShapeEntry {
                        id,
                        points,
                        color,
                        order,
                    });
                }
            }
        }
    }

    log::debug!(
        "Encoded {} annotations: {} texts, {} arrows, {} pens, {} rects, {} obfuscates, {} highlights, {} numbers",
        annotations.len(),
        document.texts.len(),
        document.arrows.len(),
        document.pens.len(),
        document.rects.len(),
        document.obfuscates.len(),
        document.highlights.len(),
        document.numbers.len()
    );

    Ok(document)
}

/// Rebuild the ordered annotation list from `document`.
///
/// Fails on the first invalid entry; nothing is returned for a document with
/// any bad entry.
pub fn decode(document: &SortedDocument) -> Result<Vec<AnnotationModel>, DecodeError> {
    let result = decode_entries(document);
    if let Err(e) = &result {
        log::warn!("Rejected annotation document: {}", e);
    }
    result
}

fn decode_entries(document: &SortedDocument) -> Result<Vec<AnnotationModel>, DecodeError> {
    let count = document.total_entries();
    let mut ordered: Vec<(usize, AnnotationModel)> = Vec::with_capacity(count);

    for entry in &document.texts {
        let content = TextContent::new(entry.text.clone(), entry.resolved_style(&document.style));
        let model = build(
            ShapeKind::Text,
            &entry.id,
            &entry.points,
            entry.color,
            entry.order,
            Shape::Text(content),
        )?;
        ordered.push((entry.order, model));
    }

    for (kind, entries) in document.plain_buckets() {
        for entry in entries {
            let shape = match kind {
                ShapeKind::Arrow => Shape::Arrow,
                ShapeKind::Pen => Shape::Pen,
                ShapeKind::Rect => Shape::Rect,
                ShapeKind::Obfuscate => Shape::Obfuscate,
                ShapeKind::Highlight => Shape::Highlight,
                ShapeKind::Text | ShapeKind::Number => continue,
            };
            let model = build(kind, &entry.id, &entry.points, entry.color, entry.order, shape)?;
            ordered.push((entry.order, model));
        }
    }

    for entry in &document.numbers {
        let model = build(
            ShapeKind::Number,
            &entry.id,
            &entry.points,
            entry.color,
            entry.order,
            Shape::Number(entry.value),
        )?;
        ordered.push((entry.order, model));
    }

    check_order(&ordered, count)?;
    check_unique_ids(&ordered)?;

    ordered.sort_by_key(|(order, _)| *order);

    log::debug!(
        "Decoded {} annotations from document",
        ordered.len()
    );

    Ok(ordered.into_iter().map(|(_, model)| model).collect())
}

/// Validate one entry and build its model.
fn build(
    kind: ShapeKind,
    id: &AnnotationId,
    points: &[Point],
    color: Color,
    order: usize,
    shape: Shape,
) -> Result<AnnotationModel, DecodeError> {
    let bucket = bucket_name(kind);

    check_fields(id, points, color, &shape).map_err(|fault| fault.for_decode(bucket, id, order))?;

    AnnotationModel::new(id.clone(), shape, points.to_vec(), color)
        .map_err(|e| DecodeError::from_shape_error(bucket, id.clone(), e))
}

/// Order indices must be exactly `0..count`, each used once.
fn check_order(ordered: &[(usize, AnnotationModel)], count: usize) -> Result<(), DecodeError> {
    let mut seen = vec![false; count];
    for (order, model) in ordered {
        let Some(slot) = seen.get_mut(*order) else {
            return Err(DecodeError::OrderOutOfRange {
                id: model.id().clone(),
                order: *order,
                count,
            });
        };
        if *slot {
            return Err(DecodeError::DuplicateOrder { order: *order });
        }
        *slot = true;
    }
    Ok(())
}

fn check_unique_ids(ordered: &[(usize, AnnotationModel)]) -> Result<(), DecodeError> {
    match first_duplicate_id(ordered.iter().map(|(_, model)| model.id())) {
        Some(id) => Err(DecodeError::DuplicateId { id: id.clone() }),
        None => Ok(()),
    }
}

fn first_duplicate_id<'a>(mut ids: impl Iterator<Item = &'a AnnotationId>) -> Option<&'a AnnotationId> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

/// Field-level problem found on one annotation or entry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Fault {
    EmptyId,
    NonFinitePoint,
    InvalidColor,
    InvalidFontSize(f32),
}

impl Fault {
    fn for_encode(self, annotation: &AnnotationModel, order: usize) -> EncodeError {
        let kind = annotation.kind();
        let id = annotation.id().clone();
        match self {
            Fault::EmptyId => EncodeError::EmptyId { kind, order },
            Fault::NonFinitePoint => EncodeError::NonFinitePoint { kind, id },
            Fault::InvalidColor => EncodeError::InvalidColor { kind, id },
            Fault::InvalidFontSize(font_size) => EncodeError::InvalidFontSize { id, font_size },
        }
    }

    fn for_decode(self, bucket: &'static str, id: &AnnotationId, order: usize) -> DecodeError {
        let id = id.clone();
        match self {
            Fault::EmptyId => DecodeError::EmptyId { bucket, order },
            Fault::NonFinitePoint => DecodeError::NonFinitePoint { bucket, id },
            Fault::InvalidColor => DecodeError::InvalidColor { bucket, id },
            Fault::InvalidFontSize(font_size) => DecodeError::InvalidFontSize { id, font_size },
        }
    }
}

/// Checks shared by encode and decode. Point counts are left to
/// [`AnnotationModel::new`].
fn check_fields(id: &AnnotationId, points: &[Point], color: Color, shape: &Shape) -> Result<(), Fault> {
    if id.is_empty() {
        return Err(Fault::EmptyId);
    }
    if !points.iter().all(Point::is_finite) {
        return Err(Fault::NonFinitePoint);
    }
    if !color.is_normalized() {
        return Err(Fault::InvalidColor);
    }
    if let Shape::Text(content) = shape {
        let font_size = content.style.font_size;
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(Fault::InvalidFontSize(font_size));
        }
    }
    Ok(())
}

/// Encode `annotations` straight to pretty-printed JSON.
pub fn to_json(annotations: &[AnnotationModel], style: &TextStyle) -> Result<String, EncodeError> {
    let document = encode(annotations, style)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a JSON document and decode it.
pub fn from_json(json: &str) -> Result<Vec<AnnotationModel>, DecodeError> {
    let document: SortedDocument = serde_json::from_str(json).inspect_err(|e| {
        log::warn!("Failed to parse annotation document: {}", e);
    })?;
    decode(&document)
}

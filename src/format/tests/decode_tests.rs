//! Tests for rejecting malformed documents.

use markup_geometry::Point;

use crate::format::{DecodeError, ShapeEntry, SortedDocument, decode, from_json};
use crate::model::{AnnotationId, Color, PointCount, TextStyle};

fn entry(id: &str, points: Vec<Point>, order: usize) -> ShapeEntry {
    ShapeEntry {
        id: AnnotationId::from(id),
        points,
        color: Color::RED,
        order,
    }
}

fn two_points() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]
}

#[test]
fn test_rect_with_one_point_is_rejected() {
    let mut document = SortedDocument::new(TextStyle::default());
    document.arrows.push(entry("a", two_points(), 0));
    document.rects.push(entry("r", vec![Point::new(1.0, 1.0)], 1));

    match decode(&document) {
        Err(DecodeError::PointCount {
            bucket,
            id,
            expected,
            found,
        }) => {
            assert_eq!(bucket, "rects");
            assert_eq!(id.as_str(), "r");
            assert_eq!(expected, PointCount::Exactly(2));
            assert_eq!(found, 1);
        }
        other => panic!("Expected PointCount error, got {:?}", other),
    }
}

#[test]
fn test_rect_with_one_point_in_json_is_rejected() {
    let json = r#"{
        "style": {"fontSize": 24.0, "alignment": "left"},
        "rects": [
            {"id": "r", "points": [{"x": 1.0, "y": 2.0}],
             "color": {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
             "order": 0}
        ]
    }"#;
    assert!(matches!(from_json(json), Err(DecodeError::PointCount { .. })));
}

#[test]
fn test_empty_pen_is_rejected() {
    let mut document = SortedDocument::default();
    document.pens.push(entry("p", Vec::new(), 0));
    assert!(matches!(
        decode(&document),
        Err(DecodeError::PointCount {
            expected: PointCount::AtLeast(1),
            found: 0,
            ..
        })
    ));
}

#[test]
fn test_number_with_two_points_is_rejected() {
    let json = r#"{
        "numbers": [
            {"id": "n", "points": [{"x": 1.0, "y": 2.0}, {"x": 3.0, "y": 4.0}],
             "color": {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
             "value": 1, "order": 0}
        ]
    }"#;
    assert!(matches!(
        from_json(json),
        Err(DecodeError::PointCount { bucket: "numbers", .. })
    ));
}

#[test]
fn test_duplicate_order_is_rejected() {
    let mut document = SortedDocument::default();
    document.arrows.push(entry("a", two_points(), 0));
    document.rects.push(entry("r", two_points(), 0));
    assert!(matches!(
        decode(&document),
        Err(DecodeError::DuplicateOrder { order: 0 })
    ));
}

#[test]
fn test_order_out_of_range_is_rejected() {
    let mut document = SortedDocument::default();
    document.arrows.push(entry("a", two_points(), 0));
    document.rects.push(entry("r", two_points(), 5));
    match decode(&document) {
        Err(DecodeError::OrderOutOfRange { id, order, count }) => {
            assert_eq!(id.as_str(), "r");
            assert_eq!(order, 5);
            assert_eq!(count, 2);
        }
        other => panic!("Expected OrderOutOfRange error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut document = SortedDocument::default();
    document.arrows.push(entry("same", two_points(), 0));
    document.highlights.push(entry("same", two_points(), 1));
    assert!(matches!(
        decode(&document),
        Err(DecodeError::DuplicateId { .. })
    ));
}

#[test]
fn test_empty_id_is_rejected() {
    let mut document = SortedDocument::default();
    document.obfuscates.push(entry("", two_points(), 0));
    assert!(matches!(
        decode(&document),
        Err(DecodeError::EmptyId {
            bucket: "obfuscates",
            order: 0
        })
    ));
}

#[test]
fn test_color_out_of_range_is_rejected() {
    let mut document = SortedDocument::default();
    let mut bad = entry("a", two_points(), 0);
    bad.color = Color::rgba(1.2, 0.0, 0.0, 1.0);
    document.arrows.push(bad);
    assert!(matches!(
        decode(&document),
        Err(DecodeError::InvalidColor { bucket: "arrows", .. })
    ));
}

#[test]
fn test_non_finite_point_is_rejected() {
    let mut document = SortedDocument::default();
    document
        .arrows
        .push(entry("a", vec![Point::ZERO, Point::new(f32::INFINITY, 0.0)], 0));
    assert!(matches!(
        decode(&document),
        Err(DecodeError::NonFinitePoint { .. })
    ));
}

#[test]
fn test_missing_order_field_is_rejected() {
    let json = r#"{
        "arrows": [
            {"id": "a", "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}],
             "color": {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0}}
        ]
    }"#;
    assert!(matches!(from_json(json), Err(DecodeError::Json(_))));
}

#[test]
fn test_missing_color_field_is_rejected() {
    let json = r#"{
        "pens": [{"id": "p", "points": [{"x": 0.0, "y": 0.0}], "order": 0}]
    }"#;
    assert!(matches!(from_json(json), Err(DecodeError::Json(_))));
}

#[test]
fn test_invalid_font_size_is_rejected() {
    let json = r#"{
        "texts": [
            {"id": "t", "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}],
             "color": {"red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
             "text": "hi", "fontSize": 0.0, "order": 0}
        ]
    }"#;
    assert!(matches!(
        from_json(json),
        Err(DecodeError::InvalidFontSize { .. })
    ));
}

#[test]
fn test_one_bad_entry_rejects_whole_document() {
    let mut document = SortedDocument::default();
    for i in 0..5 {
        document.arrows.push(entry(&format!("a{i}"), two_points(), i));
    }
    document.rects.push(entry("bad", vec![Point::ZERO], 5));
    assert!(decode(&document).is_err());
}

#[test]
fn test_missing_buckets_read_as_empty() {
    let json = r#"{
        "arrows": [
            {"id": "a", "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}],
             "color": {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
             "order": 0}
        ]
    }"#;
    let annotations = from_json(json).unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].id().as_str(), "a");
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(from_json("{not json"), Err(DecodeError::Json(_))));
}

#[test]
fn test_error_messages() {
    let mut document = SortedDocument::default();
    document.rects.push(entry("r", vec![Point::ZERO], 0));
    let err = decode(&document).unwrap_err();
    assert_eq!(err.to_string(), "rects entry 'r' needs exactly 2 points, got 1");
}

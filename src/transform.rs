//! Pure edit operations on annotations.
//!
//! Every function takes an annotation by reference and returns a new one.
//! The id, color and point count of the input are always preserved, so the
//! result satisfies the same invariants as the input.

use markup_geometry::{Point, delta};

use crate::knobs::{self, KnobRole};
use crate::model::{AnnotationModel, MIN_FONT_SIZE, Shape};
use crate::rendered::{RenderedModel, RenderingType};

/// An edit requested by the host for one annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum EditIntent {
    /// Translate every point by the given displacement.
    Move(Point),
    /// Drag the knob with the given role to a new position.
    Resize { knob: KnobRole, to: Point },
    /// Scale every point about `anchor`.
    Scale { factor: f32, anchor: Point },
    /// Replace the content of a text annotation.
    EditText(String),
}

/// Translate every point of `annotation` by `delta`.
pub fn moved_annotation(annotation: &AnnotationModel, delta: Point) -> AnnotationModel {
    annotation.map_points(|p| p + delta)
}

/// Drag one knob of `annotation` to `to`.
///
/// A reshaping knob replaces exactly the point it was derived from. A
/// move-only knob moves the whole annotation by the knob's displacement.
/// Annotations without such a knob come back unchanged.
pub fn resized_annotation(annotation: &AnnotationModel, role: KnobRole, to: Point) -> AnnotationModel {
    let Some(knob) = knobs::knob_pair(annotation).and_then(|pair| pair.get(role).copied()) else {
        log::debug!(
            "Ignoring {} knob drag on {} annotation {}",
            role.name(),
            annotation.kind(),
            annotation.id()
        );
        return annotation.clone();
    };

    if knob.role.reshapes() {
        annotation
            .with_point(knob.point_index, to)
            .unwrap_or_else(|| annotation.clone())
    } else {
        moved_annotation(annotation, delta(knob.position, to))
    }
}

/// Scale `annotation` by `factor` about `anchor`.
///
/// Text font size is scaled by the magnitude of `factor` and never drops
/// below [`MIN_FONT_SIZE`]. A non-finite factor, or one that pushes a point
/// out of `f32` range, leaves the annotation unchanged.
pub fn scaled_annotation(annotation: &AnnotationModel, factor: f32, anchor: Point) -> AnnotationModel {
    let scaled = annotation.map_points(|p| anchor + (p - anchor) * factor);
    if !factor.is_finite() || !scaled.points().iter().all(Point::is_finite) {
        log::debug!(
            "Ignoring scale by {} on {} annotation {}",
            factor,
            annotation.kind(),
            annotation.id()
        );
        return annotation.clone();
    }

    match scaled.text_content() {
        Some(content) => {
            let mut content = content.clone();
            content.style.font_size =
                (content.style.font_size * factor.abs()).clamp(MIN_FONT_SIZE, f32::MAX);
            scaled.with_shape(Shape::Text(content)).unwrap_or(scaled)
        }
        None => scaled,
    }
}

/// Replace the text of a text annotation. `None` for other kinds.
pub fn retexted_annotation(annotation: &AnnotationModel, text: &str) -> Option<AnnotationModel> {
    let mut content = annotation.text_content()?.clone();
    content.text = text.to_string();
    annotation.with_shape(Shape::Text(content))
}

/// Apply `intent` to `annotation` and tag the result with a redraw hint.
pub fn apply_edit(annotation: &AnnotationModel, intent: &EditIntent) -> RenderedModel {
    match intent {
        EditIntent::Move(delta) => {
            RenderedModel::with_hint(moved_annotation(annotation, *delta), RenderingType::Moved)
        }
        EditIntent::Resize { knob, to } => RenderedModel::with_hint(
            resized_annotation(annotation, *knob, *to),
            RenderingType::Resized,
        ),
        EditIntent::Scale { factor, anchor } => RenderedModel::with_hint(
            scaled_annotation(annotation, *factor, *anchor),
            RenderingType::Scaled,
        ),
        EditIntent::EditText(text) => match retexted_annotation(annotation, text) {
            Some(model) => RenderedModel::with_hint(model, RenderingType::TextChanged),
            None => {
                log::debug!(
                    "Ignoring text edit on {} annotation {}",
                    annotation.kind(),
                    annotation.id()
                );
                RenderedModel::with_hint(annotation.clone(), RenderingType::SelectionOnly)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{decode, encode, from_json, to_json};
    use crate::model::{AnnotationId, Color, TextAlignment, TextContent, TextStyle};
    use proptest::prelude::*;

    fn rect() -> AnnotationModel {
        AnnotationModel::rect(
            AnnotationId::from("r"),
            Point::new(0.0, 0.0),
            Point::new(10.0, 20.0),
            Color::RED,
        )
    }

    fn text() -> AnnotationModel {
        AnnotationModel::text(
            AnnotationId::from("t"),
            Point::new(0.0, 0.0),
            Point::new(20.0, 10.0),
            TextContent::new("hello", TextStyle::default().with_font_size(10.0)),
            Color::BLACK,
        )
    }

    fn pen(points: Vec<Point>) -> AnnotationModel {
        AnnotationModel::pen(AnnotationId::from("p"), points, Color::RED).unwrap()
    }

    #[test]
    fn test_move_translates_every_point() {
        let stroke = pen(vec![Point::new(1.0, 1.0), Point::new(2.0, 3.0), Point::new(4.0, 0.0)]);
        let moved = moved_annotation(&stroke, Point::new(10.0, -1.0));
        assert_eq!(
            moved.points(),
            &[Point::new(11.0, 0.0), Point::new(12.0, 2.0), Point::new(14.0, -1.0)]
        );
        assert_eq!(moved.id(), stroke.id());
        // Input untouched
        assert_eq!(stroke.points()[0], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_move_keeps_text_content() {
        let moved = moved_annotation(&text(), Point::new(3.0, 3.0));
        assert_eq!(moved.text_content(), text().text_content());
    }

    #[test]
    fn test_resize_target_replaces_only_that_point() {
        let resized = resized_annotation(&rect(), KnobRole::Target, Point::new(30.0, 40.0));
        assert_eq!(resized.points(), &[Point::new(0.0, 0.0), Point::new(30.0, 40.0)]);
    }

    #[test]
    fn test_resize_origin() {
        let resized = resized_annotation(&rect(), KnobRole::Origin, Point::new(-5.0, -5.0));
        assert_eq!(resized.points(), &[Point::new(-5.0, -5.0), Point::new(10.0, 20.0)]);
    }

    #[test]
    fn test_resize_with_move_only_knob_moves_marker() {
        let marker =
            AnnotationModel::number(AnnotationId::from("n"), Point::new(5.0, 5.0), 2, Color::RED);
        let dragged = resized_annotation(&marker, KnobRole::MoveOnly, Point::new(8.0, 1.0));
        assert_eq!(dragged.points(), &[Point::new(8.0, 1.0)]);
        assert_eq!(dragged.number_value(), Some(2));
    }

    #[test]
    fn test_resize_with_missing_knob_is_noop() {
        assert_eq!(
            resized_annotation(&rect(), KnobRole::Extent, Point::new(1.0, 1.0)),
            rect()
        );
        let stroke = pen(vec![Point::ZERO]);
        assert_eq!(
            resized_annotation(&stroke, KnobRole::Origin, Point::new(1.0, 1.0)),
            stroke
        );
    }

    #[test]
    fn test_scale_about_anchor() {
        let scaled = scaled_annotation(&rect(), 2.0, Point::new(10.0, 20.0));
        assert_eq!(scaled.points(), &[Point::new(-10.0, -20.0), Point::new(10.0, 20.0)]);
    }

    #[test]
    fn test_scale_text_scales_font() {
        let scaled = scaled_annotation(&text(), 1.5, Point::ZERO);
        assert_eq!(scaled.text_content().unwrap().style.font_size, 15.0);
        assert_eq!(scaled.points()[1], Point::new(30.0, 15.0));
    }

    #[test]
    fn test_scale_by_zero_keeps_font_loadable() {
        let collapsed = scaled_annotation(&text(), 0.0, Point::new(5.0, 5.0));
        assert_eq!(collapsed.text_content().unwrap().style.font_size, MIN_FONT_SIZE);
        assert_eq!(collapsed.points(), &[Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);

        let json = to_json(&[collapsed.clone()], &TextStyle::default()).unwrap();
        assert_eq!(from_json(&json).unwrap(), vec![collapsed]);
    }

    #[test]
    fn test_scale_by_tiny_factor_clamps_font() {
        let shrunk = scaled_annotation(&text(), 1.0e-40, Point::ZERO);
        assert_eq!(shrunk.text_content().unwrap().style.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_scale_with_unusable_factor_is_noop() {
        for factor in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(scaled_annotation(&rect(), factor, Point::ZERO), rect());
        }
        // Finite factor, but the points overflow
        let far = AnnotationModel::rect(
            AnnotationId::from("far"),
            Point::new(0.0, 0.0),
            Point::new(1.0e30, 1.0e30),
            Color::RED,
        );
        assert_eq!(scaled_annotation(&far, 1.0e30, Point::ZERO), far);
    }

    #[test]
    fn test_retext() {
        let edited = retexted_annotation(&text(), "bye").unwrap();
        assert_eq!(edited.text_content().unwrap().text, "bye");
        assert!(retexted_annotation(&rect(), "bye").is_none());
    }

    #[test]
    fn test_apply_edit_hints() {
        let cases = [
            (EditIntent::Move(Point::new(1.0, 1.0)), RenderingType::Moved),
            (
                EditIntent::Resize {
                    knob: KnobRole::Target,
                    to: Point::ZERO,
                },
                RenderingType::Resized,
            ),
            (
                EditIntent::Scale {
                    factor: 0.5,
                    anchor: Point::ZERO,
                },
                RenderingType::Scaled,
            ),
        ];
        for (intent, hint) in cases {
            assert_eq!(apply_edit(&rect(), &intent).rendering_type, Some(hint));
        }

        let edit = EditIntent::EditText("new".to_string());
        assert_eq!(
            apply_edit(&text(), &edit).rendering_type,
            Some(RenderingType::TextChanged)
        );
        let ignored = apply_edit(&rect(), &edit);
        assert_eq!(ignored.rendering_type, Some(RenderingType::SelectionOnly));
        assert_eq!(ignored.model, rect());
    }

    fn arb_point() -> impl Strategy<Value = Point> + Clone {
        (-1.0e4f32..1.0e4, -1.0e4f32..1.0e4).prop_map(|(x, y)| Point::new(x, y))
    }

    fn arb_role() -> impl Strategy<Value = KnobRole> {
        prop_oneof![
            Just(KnobRole::Origin),
            Just(KnobRole::Target),
            Just(KnobRole::Extent),
            Just(KnobRole::MoveOnly),
        ]
    }

    fn arb_shape() -> impl Strategy<Value = (Shape, Vec<Point>)> {
        let two = prop::collection::vec(arb_point(), 2..=2);
        let style = (
            1.0f32..200.0,
            prop_oneof![Just(TextAlignment::Left), Just(TextAlignment::Right)],
        )
            .prop_map(|(size, alignment)| TextStyle::new(size, alignment));
        prop_oneof![
            two.clone().prop_map(|p| (Shape::Arrow, p)),
            two.clone().prop_map(|p| (Shape::Rect, p)),
            two.clone().prop_map(|p| (Shape::Obfuscate, p)),
            prop::collection::vec(arb_point(), 1..10).prop_map(|p| (Shape::Pen, p)),
            (two, "[a-z ]{0,12}", style)
                .prop_map(|(p, text, style)| (Shape::Text(TextContent::new(text, style)), p)),
            (arb_point(), 1u32..100).prop_map(|(p, value)| (Shape::Number(value), vec![p])),
        ]
    }

    fn arb_intent() -> impl Strategy<Value = EditIntent> {
        prop_oneof![
            arb_point().prop_map(EditIntent::Move),
            (arb_role(), arb_point()).prop_map(|(knob, to)| EditIntent::Resize { knob, to }),
            (
                prop_oneof![Just(0.0f32), Just(-1.0f32), 1.0e-30f32..1.0e-20, -4.0f32..4.0],
                arb_point(),
            )
                .prop_map(|(factor, anchor)| EditIntent::Scale { factor, anchor }),
            "[a-z ]{0,12}".prop_map(EditIntent::EditText),
        ]
    }

    proptest! {
        #[test]
        fn edited_collections_still_load(
            edits in prop::collection::vec((arb_shape(), arb_intent()), 1..8),
        ) {
            let edited: Vec<AnnotationModel> = edits
                .into_iter()
                .enumerate()
                .map(|(i, ((shape, points), intent))| {
                    let id = AnnotationId::from(format!("e-{i}"));
                    let model = AnnotationModel::new(id, shape, points, Color::RED).unwrap();
                    apply_edit(&model, &intent).into_model()
                })
                .collect();

            let document = encode(&edited, &TextStyle::default());
            prop_assert!(document.is_ok(), "{:?}", document);
            let restored = decode(&document.unwrap());
            prop_assert!(restored.is_ok(), "{:?}", restored);
            prop_assert_eq!(restored.unwrap(), edited);
        }

        #[test]
        fn move_then_move_back_restores_points(
            path in prop::collection::vec(arb_point(), 1..20),
            v in arb_point(),
        ) {
            let original = pen(path);
            let restored = moved_annotation(&moved_annotation(&original, v), -v);
            for (a, b) in original.points().iter().zip(restored.points()) {
                prop_assert!(a.approx_eq(b, 1.0e-2), "{:?} vs {:?}", a, b);
            }
        }

        #[test]
        fn move_keeps_count_id_and_color(
            path in prop::collection::vec(arb_point(), 1..20),
            v in arb_point(),
        ) {
            let original = pen(path);
            let moved = moved_annotation(&original, v);
            prop_assert_eq!(moved.points().len(), original.points().len());
            prop_assert_eq!(moved.id(), original.id());
            prop_assert_eq!(moved.color(), original.color());
        }

        #[test]
        fn resize_keeps_point_count(to in arb_point()) {
            for knob in [KnobRole::Origin, KnobRole::Target, KnobRole::Extent, KnobRole::MoveOnly] {
                let resized = resized_annotation(&rect(), knob, to);
                prop_assert_eq!(resized.points().len(), 2);
            }
        }
    }
}

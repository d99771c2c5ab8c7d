//! Per-kind knob creators.

use super::{Knob, KnobPair, KnobRole};
use crate::model::AnnotationModel;

/// Tail and tip of an arrow.
pub(super) fn arrow_knobs(annotation: &AnnotationModel) -> KnobPair {
    two_point_knobs(annotation, KnobRole::Origin, KnobRole::Target)
}

/// The two defining corners of a rect, highlight or redaction box.
pub(super) fn corner_knobs(annotation: &AnnotationModel) -> KnobPair {
    two_point_knobs(annotation, KnobRole::Origin, KnobRole::Target)
}

/// Origin and extent of a text box.
pub(super) fn text_knobs(annotation: &AnnotationModel) -> KnobPair {
    two_point_knobs(annotation, KnobRole::Origin, KnobRole::Extent)
}

/// A single knob on the marker position.
pub(super) fn position_knob(annotation: &AnnotationModel) -> KnobPair {
    KnobPair::new(
        annotation
            .points()
            .iter()
            .take(1)
            .map(|position| Knob::new(KnobRole::MoveOnly, *position, 0))
            .collect(),
    )
}

fn two_point_knobs(annotation: &AnnotationModel, first: KnobRole, second: KnobRole) -> KnobPair {
    let points = annotation.points();
    KnobPair::new(
        [first, second]
            .into_iter()
            .zip(points.iter().enumerate())
            .map(|(role, (index, position))| Knob::new(role, *position, index))
            .collect(),
    )
}

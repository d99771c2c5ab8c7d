//! Draggable control points ("knobs") for selected annotations.
//!
//! Knobs are derived from an annotation's current points every time they are
//! requested and never cached, so they always agree with the geometry after
//! an edit. Which kinds get knobs is decided by a kind → creator table;
//! kinds without an entry are edited by whole-shape moves only.

mod creators;

use markup_geometry::Point;

use crate::model::{AnnotationModel, ShapeKind};

/// Default hit radius for grabbing a knob, in image pixels.
pub const KNOB_HIT_RADIUS: f32 = 10.0;

/// What dragging a knob does to its annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnobRole {
    /// Moves the first defining point (arrow tail, rect origin, text origin).
    Origin,
    /// Moves the second defining point of an arrow or box.
    Target,
    /// Moves the far corner of a text box.
    Extent,
    /// Drags the whole annotation.
    MoveOnly,
}

impl KnobRole {
    pub fn name(&self) -> &'static str {
        match self {
            KnobRole::Origin => "origin",
            KnobRole::Target => "target",
            KnobRole::Extent => "extent",
            KnobRole::MoveOnly => "move-only",
        }
    }

    /// Whether dragging this knob reshapes the annotation rather than moving it.
    pub fn reshapes(&self) -> bool {
        !matches!(self, KnobRole::MoveOnly)
    }
}

/// A single control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knob {
    pub role: KnobRole,
    pub position: Point,
    /// Index of the annotation point this knob was derived from.
    pub point_index: usize,
}

impl Knob {
    pub fn new(role: KnobRole, position: Point, point_index: usize) -> Self {
        Self {
            role,
            position,
            point_index,
        }
    }

    /// Check if `point` is within `radius` of this knob.
    pub fn hit(&self, point: Point, radius: f32) -> bool {
        markup_geometry::distance(self.position, point) <= radius
    }
}

/// Ordered set of knobs for one annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobPair {
    knobs: Vec<Knob>,
}

impl KnobPair {
    pub fn new(knobs: Vec<Knob>) -> Self {
        Self { knobs }
    }

    pub fn knobs(&self) -> &[Knob] {
        &self.knobs
    }

    pub fn len(&self) -> usize {
        self.knobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knobs.is_empty()
    }

    /// First knob with the given role.
    pub fn get(&self, role: KnobRole) -> Option<&Knob> {
        self.knobs.iter().find(|k| k.role == role)
    }

    /// Knob positions in order.
    pub fn positions(&self) -> Vec<Point> {
        self.knobs.iter().map(|k| k.position).collect()
    }

    /// The knob nearest to `point` within `radius`, if any.
    ///
    /// On equal distance the earlier knob wins.
    pub fn hit_test(&self, point: Point, radius: f32) -> Option<&Knob> {
        self.knobs
            .iter()
            .filter(|k| k.hit(point, radius))
            .fold(None, |best: Option<&Knob>, knob| match best {
                Some(b)
                    if markup_geometry::distance(b.position, point)
                        <= markup_geometry::distance(knob.position, point) =>
                {
                    Some(b)
                }
                _ => Some(knob),
            })
    }
}

/// Builds the knobs of one annotation from its points.
pub type KnobCreator = fn(&AnnotationModel) -> KnobPair;

/// Registered knob creators. Adding a shape kind with resize handles means
/// adding one entry here and one creator in `creators`.
const KNOB_CREATORS: &[(ShapeKind, KnobCreator)] = &[
    (ShapeKind::Arrow, creators::arrow_knobs),
    (ShapeKind::Rect, creators::corner_knobs),
    (ShapeKind::Highlight, creators::corner_knobs),
    (ShapeKind::Obfuscate, creators::corner_knobs),
    (ShapeKind::Text, creators::text_knobs),
    (ShapeKind::Number, creators::position_knob),
];

/// Creator registered for `kind`, if any.
pub fn knob_creator(kind: ShapeKind) -> Option<KnobCreator> {
    KNOB_CREATORS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, creator)| *creator)
}

/// Whether annotations of `kind` get knobs at all.
pub fn has_knobs(kind: ShapeKind) -> bool {
    knob_creator(kind).is_some()
}

/// Knobs for `annotation`, or `None` if its kind is move-only.
pub fn knob_pair(annotation: &AnnotationModel) -> Option<KnobPair> {
    let Some(creator) = knob_creator(annotation.kind()) else {
        log::trace!(
            "No knob creator for {} annotation {}",
            annotation.kind(),
            annotation.id()
        );
        return None;
    };
    Some(creator(annotation))
}

//! Markup - Image Annotation Editing Core
//!
//! The in-memory side of an image markup editor: annotation models for
//! arrows, rectangles, pen strokes, text boxes, numbered markers,
//! highlights and obfuscation regions, the knobs used to reshape them, their
//! selection borders, and the sorted JSON document they are stored in.
//!
//! Rendering and input handling belong to the host. The host keeps an
//! ordered `Vec<AnnotationModel>` (later entries draw on top), asks this
//! crate for knobs and borders of the selected entry, and replaces entries
//! with the results of [`transform`] operations.

pub mod borders;
pub mod config;
pub mod format;
pub mod knobs;
pub mod model;
pub mod rendered;
pub mod transform;

pub use markup_geometry::{BoundingBox, Point};

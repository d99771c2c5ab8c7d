//! Planar geometry primitives shared by the annotation engine.
//!
//! Everything here is a small `Copy` value type. Coordinates are `f32`
//! in image space, with y growing downwards.

pub mod bounds;
pub mod point;

pub use bounds::BoundingBox;
pub use point::{Point, delta, distance};

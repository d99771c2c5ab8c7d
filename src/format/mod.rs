//! Annotation document serialization.
//!
//! An in-memory annotation list is an ordered, mixed sequence of shapes. On
//! disk it becomes a [`SortedDocument`]: one JSON array per shape kind plus a
//! shared text `style`, with an `order` index on every entry that restores the
//! draw order on load.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use markup::format::{from_json, to_json};
//! use markup::model::TextStyle;
//!
//! let json = to_json(&annotations, &TextStyle::default())?;
//! let restored = from_json(&json)?;
//! assert_eq!(restored, annotations);
//! ```

mod codec;
mod document;
mod error;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode, from_json, to_json};
pub use document::{NumberEntry, ShapeEntry, SortedDocument, TextEntry, bucket_name};
pub use error::{DecodeError, EncodeError};

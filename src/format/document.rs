//! Serialized document layout.
//!
//! Annotations are stored in one array per kind rather than one mixed list.
//! Every entry carries an `order` index; sorting all entries by it restores
//! the original draw order across arrays.

use markup_geometry::Point;
use serde::{Deserialize, Serialize};

use crate::model::{AnnotationId, Color, ShapeKind, TextAlignment, TextStyle};

/// A complete annotation document.
///
/// Missing arrays and a missing `style` read as empty/default; fields inside
/// entries are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortedDocument {
    /// Text defaults shared by every text entry.
    #[serde(default)]
    pub style: TextStyle,

    #[serde(default)]
    pub texts: Vec<TextEntry>,

    #[serde(default)]
    pub arrows: Vec<ShapeEntry>,

    #[serde(default)]
    pub pens: Vec<ShapeEntry>,

    #[serde(default)]
    pub rects: Vec<ShapeEntry>,

    #[serde(default)]
    pub obfuscates: Vec<ShapeEntry>,

    #[serde(default)]
    pub highlights: Vec<ShapeEntry>,

    #[serde(default)]
    pub numbers: Vec<NumberEntry>,
}

impl SortedDocument {
    /// Create an empty document with the given text defaults.
    pub fn new(style: TextStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Get total entry count across all arrays.
    pub fn total_entries(&self) -> usize {
        self.texts.len()
            + self.arrows.len()
            + self.pens.len()
            + self.rects.len()
            + self.obfuscates.len()
            + self.highlights.len()
            + self.numbers.len()
    }

    /// Check if the document holds no annotations.
    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }

    /// Array holding the plain entries of `kind`. `None` for text and number,
    /// which have their own entry types.
    pub(crate) fn plain_bucket_mut(&mut self, kind: ShapeKind) -> Option<&mut Vec<ShapeEntry>> {
        match kind {
            ShapeKind::Arrow => Some(&mut self.arrows),
            ShapeKind::Pen => Some(&mut self.pens),
            ShapeKind::Rect => Some(&mut self.rects),
            ShapeKind::Obfuscate => Some(&mut self.obfuscates),
            ShapeKind::Highlight => Some(&mut self.highlights),
            ShapeKind::Text | ShapeKind::Number => None,
        }
    }

    /// Plain arrays paired with their kind.
    pub(crate) fn plain_buckets(&self) -> [(ShapeKind, &[ShapeEntry]); 5] {
        [
            (ShapeKind::Arrow, self.arrows.as_slice()),
            (ShapeKind::Pen, self.pens.as_slice()),
            (ShapeKind::Rect, self.rects.as_slice()),
            (ShapeKind::Obfuscate, self.obfuscates.as_slice()),
            (ShapeKind::Highlight, self.highlights.as_slice()),
        ]
    }
}

/// JSON array name for a shape kind.
pub fn bucket_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Arrow => "arrows",
        ShapeKind::Rect => "rects",
        ShapeKind::Pen => "pens",
        ShapeKind::Text => "texts",
        ShapeKind::Number => "numbers",
        ShapeKind::Highlight => "highlights",
        ShapeKind::Obfuscate => "obfuscates",
    }
}

/// Entry for arrows, pens, rects, obfuscates and highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub id: AnnotationId,
    pub points: Vec<Point>,
    pub color: Color,
    pub order: usize,
}

/// Text entry. Style fields are present only where they differ from the
/// document `style`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEntry {
    pub id: AnnotationId,
    pub points: Vec<Point>,
    pub color: Color,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<TextAlignment>,
    pub order: usize,
}

impl TextEntry {
    /// Effective style: the document defaults with this entry's overrides.
    pub fn resolved_style(&self, defaults: &TextStyle) -> TextStyle {
        TextStyle {
            font_size: self.font_size.unwrap_or(defaults.font_size),
            alignment: self.alignment.unwrap_or(defaults.alignment),
        }
    }
}

/// Numbered marker entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberEntry {
    pub id: AnnotationId,
    pub points: Vec<Point>,
    pub color: Color,
    pub value: u32,
    pub order: usize,
}

//! Text styling shared between text annotations and documents.

use serde::{Deserialize, Serialize};

/// Default font size for new text annotations, in image pixels.
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Smallest font size an edit can shrink text to.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Horizontal alignment of text inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    pub fn name(&self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
            TextAlignment::Right => "right",
        }
    }
}

/// Style attributes of a text annotation.
///
/// A serialized document stores one of these as its shared default; text
/// entries only carry the fields that differ from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub alignment: TextAlignment,
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl TextStyle {
    pub fn new(font_size: f32, alignment: TextAlignment) -> Self {
        Self {
            font_size,
            alignment,
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE, TextAlignment::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_style_fills_defaults() {
        let style: TextStyle = serde_json::from_str(r#"{"alignment":"center"}"#).unwrap();
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(style.alignment, TextAlignment::Center);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = serde_json::to_string(&TextStyle::default().with_font_size(12.0)).unwrap();
        assert_eq!(json, r#"{"fontSize":12.0,"alignment":"left"}"#);
    }
}

//! Unit tests for document encoding and decoding.
//!
//! These tests verify the bucketed JSON layout, draw-order restoration,
//! and rejection of malformed documents.

mod decode_tests;

#![forbid(unsafe_code)]

//! Owned UTF-16 text storage for wrap passes.
//!
//! A [`TextBuffer`] is an ordered, zero-indexed sequence of UTF-16 code
//! units with its length tracked directly; there is no terminator
//! sentinel and no `size + 1` allocation arithmetic. The buffer is
//! immutable for the duration of a wrap pass; all mutation is construction.
//!
//! Offsets into the buffer are *code-unit* offsets. A supplementary-plane
//! character (emoji, rare CJK) occupies two code units and therefore two
//! positions; nothing in this crate ever measures rendered glyph width.

use std::ops::Range;

/// A code-unit offset into a [`TextBuffer`].
///
/// Valid positions span `[0, len]` inclusive: one-past-the-end denotes
/// "at end" and is a legitimate boundary.
pub type Position = usize;

/// Owned, length-tracked UTF-16 text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    units: Vec<u16>,
}

impl TextBuffer {
    /// Encode a string into a buffer of UTF-16 code units.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }

    /// Wrap an existing code-unit sequence.
    #[must_use]
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Length in code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the buffer holds no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The full code-unit sequence.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// The code units covered by `range`.
    ///
    /// # Panics
    /// Panics if `range` leaves `[0, len]`, like any slice index.
    #[must_use]
    pub fn slice(&self, range: Range<Position>) -> &[u16] {
        &self.units[range]
    }

    /// Decode the code units covered by `range` back into a `String`.
    ///
    /// Unpaired surrogates decode to U+FFFD. Segmentation boundaries fall
    /// on scalar-value boundaries, so spans produced by a wrap pass over a
    /// well-formed source never contain any.
    #[must_use]
    pub fn decode_lossy(&self, range: Range<Position>) -> String {
        String::from_utf16_lossy(&self.units[range])
    }
}

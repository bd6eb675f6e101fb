#![forbid(unsafe_code)]

//! Built-in boundary cursors backed by UAX #29 segmentation.
//!
//! A [`SegmentCursor`] precomputes the full boundary table for a
//! `(rule, text)` binding and answers every query from that table: stateful
//! queries walk an index, stateless queries binary-search and leave the
//! index alone. The table is sorted, duplicate-free, and always contains
//! both `0` and the text length.
//!
//! # Example
//! ```
//! use kerf_core::{BoundaryCursor, BreakRule, SegmentCursor};
//!
//! let mut cursor = SegmentCursor::bind(BreakRule::Word, "to be");
//! assert_eq!(cursor.next().unwrap(), Some(2)); // after "to"
//! assert_eq!(cursor.following(2).unwrap(), Some(3)); // after " "
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::buffer::Position;
use crate::cursor::{BoundaryCursor, BreakResult};

/// Which boundaries a built-in cursor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakRule {
    /// UAX #29 word boundaries. Whitespace runs are their own segments, so
    /// wrapping at these boundaries keeps words intact.
    #[default]
    Word,
    /// Extended grapheme cluster boundaries. Every user-perceived character
    /// is its own segment; emoji and ZWJ sequences are never split.
    Grapheme,
}

/// A [`BoundaryCursor`] over a precomputed boundary table.
#[derive(Debug, Clone)]
pub struct SegmentCursor {
    /// Sorted, deduplicated code-unit offsets; first is 0.
    boundaries: Vec<Position>,
    /// Index of the current boundary for the stateful queries.
    index: usize,
}

impl SegmentCursor {
    /// Bind a cursor to `text` under `rule`.
    ///
    /// The engine consuming this cursor must run over a buffer built from
    /// the same text; binding is a setup step, not a per-query concern.
    #[must_use]
    pub fn bind(rule: BreakRule, text: &str) -> Self {
        let boundaries = match rule {
            BreakRule::Word => offsets(text.split_word_bounds()),
            BreakRule::Grapheme => offsets(text.graphemes(true)),
        };
        Self {
            boundaries,
            index: 0,
        }
    }

    /// Build a cursor from an explicit boundary table.
    ///
    /// The table is sorted and deduplicated, and `0` is inserted if absent
    /// (the start of the text is always a boundary). Intended for fixtures
    /// and rule prototyping.
    #[must_use]
    pub fn from_table<I>(table: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut boundaries: Vec<Position> = table.into_iter().collect();
        boundaries.push(0);
        boundaries.sort_unstable();
        boundaries.dedup();
        Self {
            boundaries,
            index: 0,
        }
    }

    /// The full boundary table, in ascending order.
    #[must_use]
    pub fn boundaries(&self) -> &[Position] {
        &self.boundaries
    }
}

/// Accumulate segment end offsets in UTF-16 code units, starting at 0.
fn offsets<'a, I>(segments: I) -> Vec<Position>
where
    I: Iterator<Item = &'a str>,
{
    let mut table = vec![0];
    let mut pos = 0;
    for seg in segments {
        pos += seg.encode_utf16().count();
        table.push(pos);
    }
    table
}

impl BoundaryCursor for SegmentCursor {
    fn next(&mut self) -> BreakResult {
        if self.index + 1 < self.boundaries.len() {
            self.index += 1;
            Ok(Some(self.boundaries[self.index]))
        } else {
            Ok(None)
        }
    }

    fn previous(&mut self) -> BreakResult {
        if self.index > 0 {
            self.index -= 1;
            Ok(Some(self.boundaries[self.index]))
        } else {
            Ok(None)
        }
    }

    fn following(&mut self, pos: Position) -> BreakResult {
        let idx = self.boundaries.partition_point(|&b| b <= pos);
        Ok(self.boundaries.get(idx).copied())
    }

    fn preceding(&mut self, pos: Position) -> BreakResult {
        let idx = self.boundaries.partition_point(|&b| b < pos);
        Ok(idx.checked_sub(1).map(|i| self.boundaries[i]))
    }

    fn seek_to_first(&mut self) {
        self.index = 0;
    }

    fn seek_to_last(&mut self) {
        self.index = self.boundaries.len() - 1;
    }
}

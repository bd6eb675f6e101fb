#![forbid(unsafe_code)]

//! The boundary-cursor contract consumed by the wrap engine.
//!
//! A [`BoundaryCursor`] reports segmentation-boundary offsets within a text
//! it was bound to at construction time. Two query families exist:
//!
//! - **Stateful** ([`next`](BoundaryCursor::next) /
//!   [`previous`](BoundaryCursor::previous)): cheap, but each answer depends
//!   on the cursor's internal position, so consumption must be strictly
//!   monotonic and the cursor must be primed
//!   ([`seek_to_first`](BoundaryCursor::seek_to_first) /
//!   [`seek_to_last`](BoundaryCursor::seek_to_last)) before a pass.
//! - **Stateless** ([`following`](BoundaryCursor::following) /
//!   [`preceding`](BoundaryCursor::preceding)): the caller supplies the
//!   position on every call; the internal cursor is neither read nor moved,
//!   so these interleave safely with arbitrary other queries.
//!
//! Exhaustion (`Ok(None)`) is a distinguished sentinel, not a failure; a
//! [`BreakError`] means the cursor could not be queried at all.

use crate::buffer::Position;

/// A boundary-cursor query failure.
///
/// Distinct from ordinary exhaustion: a cursor that has simply run out of
/// boundaries reports `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakError {
    message: String,
}

impl BreakError {
    /// Create an error carrying a human-readable cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for BreakError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boundary query failed: {}", self.message)
    }
}

impl std::error::Error for BreakError {}

/// Outcome of a single boundary query.
///
/// `Ok(Some(pos))` is the next boundary in the queried direction,
/// `Ok(None)` means no further boundary exists in that direction.
pub type BreakResult = Result<Option<Position>, BreakError>;

/// Reports segmentation boundaries within a bound text.
///
/// All positions are UTF-16 code-unit offsets into the text the cursor was
/// bound to; `0` and the text length are themselves boundaries.
pub trait BoundaryCursor {
    /// Advance the internal cursor to the boundary after its current one.
    fn next(&mut self) -> BreakResult;

    /// Move the internal cursor to the boundary before its current one.
    fn previous(&mut self) -> BreakResult;

    /// First boundary strictly after `pos`. Does not touch the internal
    /// cursor.
    fn following(&mut self, pos: Position) -> BreakResult;

    /// Last boundary strictly before `pos`. Does not touch the internal
    /// cursor.
    fn preceding(&mut self, pos: Position) -> BreakResult;

    /// Prime the internal cursor to the first boundary (offset 0).
    fn seek_to_first(&mut self);

    /// Prime the internal cursor to the last boundary (the text length).
    fn seek_to_last(&mut self);
}

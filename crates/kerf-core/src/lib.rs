#![forbid(unsafe_code)]

//! Text storage and boundary cursors for the kerf wrap engine.
//!
//! This crate owns everything the wrap engine consumes but does not decide:
//! the UTF-16 [`TextBuffer`] a pass runs over, the [`BoundaryCursor`]
//! contract through which segmentation boundaries are reported, and the
//! built-in [`SegmentCursor`] implementations (UAX #29 word and grapheme
//! boundaries via `unicode-segmentation`).

pub mod buffer;
pub mod cursor;
pub mod segment;

pub use buffer::{Position, TextBuffer};
pub use cursor::{BoundaryCursor, BreakError, BreakResult};
pub use segment::{BreakRule, SegmentCursor};

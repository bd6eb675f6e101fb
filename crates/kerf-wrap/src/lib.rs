#![forbid(unsafe_code)]

//! Greedy width-bounded line wrapping over boundary cursors.
//!
//! [`WrapEngine`] drives a [`BoundaryCursor`](kerf_core::BoundaryCursor)
//! across a [`TextBuffer`](kerf_core::TextBuffer) in one of four
//! [`TraversalMode`]s, accumulates boundary-to-boundary deltas into a
//! [`LineAccumulator`], and emits completed [`LineSpan`]s through a
//! [`LineSink`]. Width is measured in UTF-16 code units, never in
//! rendered glyph cells.
//!
//! # Example
//! ```
//! use kerf_core::{BreakRule, SegmentCursor, TextBuffer};
//! use kerf_wrap::{SpanCollector, TraversalMode, WrapEngine};
//!
//! let text = "greedy line wrapping";
//! let buffer = TextBuffer::new(text);
//! let mut cursor = SegmentCursor::bind(BreakRule::Word, text);
//! let mut sink = SpanCollector::new();
//!
//! let engine = WrapEngine::new(TraversalMode::Forward, 11);
//! let emitted = engine.wrap(&buffer, &mut cursor, &mut sink).unwrap();
//! assert_eq!(emitted, 2);
//! assert_eq!(sink.lines(), ["greedy line", " wrapping"]);
//! ```

pub mod accumulator;
pub mod engine;
pub mod sink;
pub mod span;

pub use accumulator::LineAccumulator;
pub use engine::{TraversalMode, WrapEngine, WrapError};
pub use sink::{LineSink, SinkError, SpanCollector};
pub use span::LineSpan;

//! Fixture tests for the wrap engine over hand-built boundary tables.
//!
//! These pin the exact span sequences for the documented scenarios:
//! the canonical 10-unit trace, degenerate target widths, oversized
//! single units, early cursor exhaustion, and collaborator failures.

use kerf_core::{BoundaryCursor, BreakError, BreakResult, BreakRule, SegmentCursor, TextBuffer};
use kerf_wrap::{LineSink, LineSpan, SinkError, SpanCollector, TraversalMode, WrapEngine, WrapError};

fn span(start: usize, end: usize) -> LineSpan {
    LineSpan { start, end }
}

fn wrap_table(
    text: &str,
    table: &[usize],
    mode: TraversalMode,
    width: usize,
) -> (usize, SpanCollector) {
    let buffer = TextBuffer::new(text);
    let mut cursor = SegmentCursor::from_table(table.iter().copied());
    let mut sink = SpanCollector::new();
    let emitted = WrapEngine::new(mode, width)
        .wrap(&buffer, &mut cursor, &mut sink)
        .expect("fixture pass");
    (emitted, sink)
}

// ── The canonical 10-unit trace ───────────────────────────────────────
//
// Buffer of 10 code units, boundaries at {3, 6, 8, 10}, width 5.

#[test]
fn canonical_trace_forward() {
    let (emitted, sink) = wrap_table("0123456789", &[3, 6, 8, 10], TraversalMode::Forward, 5);
    assert_eq!(emitted, 3);
    assert_eq!(sink.spans(), &[span(0, 3), span(3, 8), span(8, 10)]);
    assert_eq!(sink.lines(), ["012", "34567", "89"]);
}

#[test]
fn canonical_trace_safe_forward() {
    let (_, stateful) = wrap_table("0123456789", &[3, 6, 8, 10], TraversalMode::Forward, 5);
    let (_, safe) = wrap_table("0123456789", &[3, 6, 8, 10], TraversalMode::SafeForward, 5);
    assert_eq!(stateful.spans(), safe.spans());
}

#[test]
fn canonical_trace_reverse() {
    let (emitted, sink) = wrap_table("0123456789", &[3, 6, 8, 10], TraversalMode::Reverse, 5);
    assert_eq!(emitted, 3);
    assert_eq!(sink.spans(), &[span(10, 6), span(6, 3), span(3, 0)]);
    assert_eq!(sink.lines(), ["6789", "345", "012"]);
}

#[test]
fn canonical_trace_safe_reverse() {
    let (_, stateful) = wrap_table("0123456789", &[3, 6, 8, 10], TraversalMode::Reverse, 5);
    let (_, safe) = wrap_table("0123456789", &[3, 6, 8, 10], TraversalMode::SafeReverse, 5);
    assert_eq!(stateful.spans(), safe.spans());
}

// ── Degenerate widths ─────────────────────────────────────────────────

#[test]
fn zero_width_emits_one_unit_per_line() {
    let (emitted, sink) = wrap_table("0123456789", &[3, 6, 8, 10], TraversalMode::Forward, 0);
    assert_eq!(emitted, 4);
    assert_eq!(
        sink.spans(),
        &[span(0, 3), span(3, 6), span(6, 8), span(8, 10)]
    );
}

#[test]
fn oversized_single_unit_ships_alone() {
    let text = "extraordinarily big";
    let buffer = TextBuffer::new(text);
    let mut cursor = SegmentCursor::bind(BreakRule::Word, text);
    let mut sink = SpanCollector::new();
    WrapEngine::new(TraversalMode::Forward, 5)
        .wrap(&buffer, &mut cursor, &mut sink)
        .expect("pass");
    assert_eq!(sink.lines(), ["extraordinarily", " big"]);
    // The oversized word exceeds the width, alone on its own line.
    assert!(sink.spans()[0].width() > 5);
}

// ── Empty input ───────────────────────────────────────────────────────

#[test]
fn empty_buffer_emits_no_spans() {
    let buffer = TextBuffer::new("");
    let mut cursor = SegmentCursor::bind(BreakRule::Word, "");
    for mode in [
        TraversalMode::Forward,
        TraversalMode::Reverse,
        TraversalMode::SafeForward,
        TraversalMode::SafeReverse,
    ] {
        let mut sink = SpanCollector::new();
        let emitted = WrapEngine::new(mode, 5)
            .wrap(&buffer, &mut cursor, &mut sink)
            .expect("pass");
        assert_eq!(emitted, 0, "mode {mode}");
        assert!(sink.is_empty(), "mode {mode}");
    }
}

// ── Early exhaustion ──────────────────────────────────────────────────
//
// A table whose last boundary falls short of the buffer edge: the
// remainder is folded into the final flush instead of being dropped.

#[test]
fn forward_exhaustion_flushes_remainder_to_buffer_edge() {
    let (emitted, sink) = wrap_table("0123456789", &[3, 6], TraversalMode::Forward, 5);
    assert_eq!(emitted, 2);
    assert_eq!(sink.spans(), &[span(0, 3), span(3, 10)]);
    assert_eq!(sink.lines(), ["012", "3456789"]);
}

#[test]
fn reverse_exhaustion_flushes_remainder_to_buffer_edge() {
    // A cursor that runs dry after one backward answer.
    struct DryAfterOne {
        served: bool,
    }
    impl BoundaryCursor for DryAfterOne {
        fn next(&mut self) -> BreakResult {
            Ok(None)
        }
        fn previous(&mut self) -> BreakResult {
            if self.served {
                Ok(None)
            } else {
                self.served = true;
                Ok(Some(8))
            }
        }
        fn following(&mut self, _pos: usize) -> BreakResult {
            Ok(None)
        }
        fn preceding(&mut self, _pos: usize) -> BreakResult {
            Ok(None)
        }
        fn seek_to_first(&mut self) {}
        fn seek_to_last(&mut self) {}
    }

    let buffer = TextBuffer::new("0123456789");
    let mut cursor = DryAfterOne { served: false };
    let mut sink = SpanCollector::new();
    let emitted = WrapEngine::new(TraversalMode::Reverse, 5)
        .wrap(&buffer, &mut cursor, &mut sink)
        .expect("pass");
    assert_eq!(emitted, 1);
    assert_eq!(sink.spans(), &[span(10, 0)]);
    assert_eq!(sink.lines(), ["0123456789"]);
}

// ── Collaborator failures ─────────────────────────────────────────────

struct PoisonedCursor;

impl BoundaryCursor for PoisonedCursor {
    fn next(&mut self) -> BreakResult {
        Err(BreakError::new("rule set unavailable"))
    }
    fn previous(&mut self) -> BreakResult {
        Err(BreakError::new("rule set unavailable"))
    }
    fn following(&mut self, _pos: usize) -> BreakResult {
        Err(BreakError::new("rule set unavailable"))
    }
    fn preceding(&mut self, _pos: usize) -> BreakResult {
        Err(BreakError::new("rule set unavailable"))
    }
    fn seek_to_first(&mut self) {}
    fn seek_to_last(&mut self) {}
}

#[test]
fn cursor_failure_aborts_the_pass() {
    let buffer = TextBuffer::new("0123456789");
    let mut sink = SpanCollector::new();
    let err = WrapEngine::new(TraversalMode::Forward, 5)
        .wrap(&buffer, &mut PoisonedCursor, &mut sink)
        .expect_err("cursor failure must surface");
    assert!(matches!(err, WrapError::Oracle(_)));
    assert!(sink.is_empty(), "no flush after an aborted pass");
}

struct RefusingSink {
    calls: usize,
}

impl LineSink for RefusingSink {
    fn emit(&mut self, _span: LineSpan, _units: &[u16]) -> Result<(), SinkError> {
        self.calls += 1;
        Err(SinkError::new("downstream closed"))
    }
}

#[test]
fn sink_failure_aborts_the_pass() {
    let buffer = TextBuffer::new("0123456789");
    let mut cursor = SegmentCursor::from_table([3, 6, 8, 10]);
    let mut sink = RefusingSink { calls: 0 };
    let err = WrapEngine::new(TraversalMode::Forward, 5)
        .wrap(&buffer, &mut cursor, &mut sink)
        .expect_err("sink failure must surface");
    assert!(matches!(err, WrapError::Sink(_)));
    assert_eq!(sink.calls, 1, "abort after the first rejected flush");
}

// ── Mode symmetry ─────────────────────────────────────────────────────
//
// A boundary table symmetric about the buffer midpoint: the reverse pass
// emits the forward spans, reversed and mirrored.

#[test]
fn symmetric_table_wraps_symmetrically() {
    let text = "ab ba";
    let buffer = TextBuffer::new(text);
    let engine_fwd = WrapEngine::new(TraversalMode::Forward, 2);
    let engine_rev = WrapEngine::new(TraversalMode::Reverse, 2);

    let mut cursor = SegmentCursor::bind(BreakRule::Word, text);
    let mut fwd = SpanCollector::new();
    engine_fwd.wrap(&buffer, &mut cursor, &mut fwd).expect("forward");
    let mut rev = SpanCollector::new();
    engine_rev.wrap(&buffer, &mut cursor, &mut rev).expect("reverse");

    assert_eq!(fwd.lines(), ["ab", " ", "ba"]);
    assert_eq!(rev.lines(), ["ba", " ", "ab"]);

    let len = buffer.len();
    let mirrored: Vec<LineSpan> = rev
        .spans()
        .iter()
        .map(|s| span(len - s.start, len - s.end))
        .collect();
    assert_eq!(mirrored, fwd.spans());
}

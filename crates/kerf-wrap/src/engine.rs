#![forbid(unsafe_code)]

//! The greedy wrap engine.
//!
//! One parametrized loop serves all four traversal modes; the mode decides
//! the start position, the per-step cursor query, and which direction the
//! accumulator grows. The overflow policy is greedy: accept a boundary
//! while the projected width fits, flush otherwise. The one exception is
//! that an empty line accepts any single unit, however wide, so the pass
//! always makes progress.
//!
//! # Invariants
//!
//! 1. **Coverage**: emitted spans tile the buffer. Every code unit appears
//!    in exactly one span, even when the cursor exhausts early (the final
//!    flush extends to the buffer edge).
//!
//! 2. **Width bound**: every span fits the target width except a span
//!    holding a single oversized segmentation unit.
//!
//! 3. **Termination**: each accepted boundary strictly advances the tracked
//!    position and each flush is immediately followed by an acceptance, so
//!    a pass runs in O(boundaries) steps.
//!
//! 4. **No re-query after flush**: the boundary that triggered a flush is
//!    cached and retried against the fresh line; a stateful cursor is never
//!    asked to produce it twice.

use kerf_core::{BoundaryCursor, BreakError, Position, TextBuffer};
use tracing::{debug, trace, warn};

use crate::accumulator::LineAccumulator;
use crate::sink::{LineSink, SinkError};
use crate::span::LineSpan;

/// How a wrap pass traverses the buffer and queries its cursor.
///
/// The stateful modes ride the cursor's internal position: one cheap query
/// per step, but consumption must stay strictly sequential. The safe modes
/// hand the tracked position to the cursor on every call, so they tolerate
/// interleaved, non-sequential queries against the same cursor at the cost
/// of a search per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Front to back via [`BoundaryCursor::next`].
    #[default]
    Forward,
    /// Back to front via [`BoundaryCursor::previous`].
    Reverse,
    /// Front to back via [`BoundaryCursor::following`].
    SafeForward,
    /// Back to front via [`BoundaryCursor::preceding`].
    SafeReverse,
}

impl TraversalMode {
    /// Whether positions increase over the pass.
    #[must_use]
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward | Self::SafeForward)
    }

    /// Whether the mode rides the cursor's internal position.
    #[must_use]
    pub fn is_stateful(self) -> bool {
        matches!(self, Self::Forward | Self::Reverse)
    }

    /// Position a pass starts from.
    fn origin(self, len: usize) -> Position {
        if self.is_forward() { 0 } else { len }
    }

    /// Position a pass runs toward.
    fn far_edge(self, len: usize) -> Position {
        if self.is_forward() { len } else { 0 }
    }
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::SafeForward => "safe-forward",
            Self::SafeReverse => "safe-reverse",
        })
    }
}

/// A wrap pass failure.
///
/// The engine itself never fails; it only propagates what its
/// collaborators report. Either way the pass aborts with no further flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    /// The boundary cursor could not be queried.
    Oracle(BreakError),
    /// The output sink rejected a flushed line.
    Sink(SinkError),
}

impl std::fmt::Display for WrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oracle(err) => write!(f, "wrap pass aborted: {err}"),
            Self::Sink(err) => write!(f, "wrap pass aborted: {err}"),
        }
    }
}

impl std::error::Error for WrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Oracle(err) => Some(err),
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<BreakError> for WrapError {
    fn from(err: BreakError) -> Self {
        Self::Oracle(err)
    }
}

impl From<SinkError> for WrapError {
    fn from(err: SinkError) -> Self {
        Self::Sink(err)
    }
}

/// Greedy line wrapper over a boundary cursor.
///
/// Configuration is explicit and per-instance; there is no process-wide
/// state. The target width is measured in code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapEngine {
    mode: TraversalMode,
    target_width: usize,
}

impl WrapEngine {
    /// Create an engine for one traversal mode and target width.
    ///
    /// A target width of 0 is legal and degenerates to one segmentation
    /// unit per emitted line.
    #[must_use]
    pub fn new(mode: TraversalMode, target_width: usize) -> Self {
        Self { mode, target_width }
    }

    /// The configured traversal mode.
    #[must_use]
    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// The configured target width in code units.
    #[must_use]
    pub fn target_width(&self) -> usize {
        self.target_width
    }

    /// Run one wrap pass, emitting lines through `sink`.
    ///
    /// Stateful modes prime the cursor themselves (`seek_to_first` /
    /// `seek_to_last`), so a cursor left anywhere by an earlier pass is
    /// fine. The cursor must be bound to the same text `buffer` was built
    /// from.
    ///
    /// Returns the number of emitted lines. An empty buffer emits none.
    ///
    /// # Errors
    /// Propagates cursor query failures and sink write failures; either
    /// aborts the pass immediately with no further flush.
    pub fn wrap<C, S>(
        &self,
        buffer: &TextBuffer,
        cursor: &mut C,
        sink: &mut S,
    ) -> Result<usize, WrapError>
    where
        C: BoundaryCursor,
        S: LineSink,
    {
        let len = buffer.len();
        let forward = self.mode.is_forward();
        if self.mode.is_stateful() {
            if forward {
                cursor.seek_to_first();
            } else {
                cursor.seek_to_last();
            }
        }

        let mut textpos = self.mode.origin(len);
        let mut line = LineAccumulator::new(textpos);
        let mut pending: Option<Position> = None;
        let mut emitted = 0;
        let mut exhausted = false;

        loop {
            let within = if forward { textpos < len } else { textpos > 0 };
            if !within {
                break;
            }

            let boundary = match pending.take() {
                Some(held) => held,
                None => match self.query(cursor, textpos)? {
                    Some(found) => found,
                    None => {
                        exhausted = true;
                        break;
                    }
                },
            };

            let delta = boundary.abs_diff(textpos);
            if delta == 0 {
                // A zero-width step cannot extend the line; accepting it
                // would stall the pass.
                debug!(mode = %self.mode, textpos, "skipping zero-width boundary report");
                continue;
            }

            if line.width() + delta <= self.target_width || line.is_empty() {
                // Fits, or the line is empty and this single unit must be
                // taken regardless of width to guarantee progress.
                if forward {
                    line.advance(delta);
                } else {
                    line.retreat(delta);
                }
                textpos = boundary;
            } else {
                self.flush(buffer, line.span(), sink)?;
                emitted += 1;
                line.reset(textpos);
                // The rejected boundary opens the next line; a stateful
                // cursor has already moved past it, so retry from cache.
                pending = Some(boundary);
            }
        }

        if exhausted {
            let far = self.mode.far_edge(len);
            if textpos != far {
                // The rule set never reported a boundary for the tail.
                // Fold the remainder into the final line so emitted spans
                // still cover the whole buffer.
                warn!(
                    mode = %self.mode,
                    textpos,
                    far,
                    "cursor exhausted before the buffer edge; flushing remainder"
                );
                let remainder = far.abs_diff(textpos);
                if forward {
                    line.advance(remainder);
                } else {
                    line.retreat(remainder);
                }
            }
        }

        if !line.is_empty() {
            self.flush(buffer, line.span(), sink)?;
            emitted += 1;
        }

        Ok(emitted)
    }

    /// One boundary query, per the configured mode.
    fn query<C>(&self, cursor: &mut C, textpos: Position) -> Result<Option<Position>, WrapError>
    where
        C: BoundaryCursor,
    {
        let found = match self.mode {
            TraversalMode::Forward => cursor.next(),
            TraversalMode::Reverse => cursor.previous(),
            TraversalMode::SafeForward => cursor.following(textpos),
            TraversalMode::SafeReverse => cursor.preceding(textpos),
        }?;
        Ok(found)
    }

    fn flush<S>(&self, buffer: &TextBuffer, span: LineSpan, sink: &mut S) -> Result<(), WrapError>
    where
        S: LineSink,
    {
        trace!(
            start = span.start,
            end = span.end,
            width = span.width(),
            "flushing line"
        );
        sink.emit(span, buffer.slice(span.range()))?;
        Ok(())
    }
}

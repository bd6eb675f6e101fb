#![forbid(unsafe_code)]

//! Output seam for completed lines.
//!
//! The engine hands each flushed span to a [`LineSink`] together with the
//! code units it covers, in traversal order. Converting those units to an
//! external representation (UTF-8, a render buffer, a test log) is the
//! sink's business, not the engine's.

use crate::span::LineSpan;

/// A sink write failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    message: String,
}

impl SinkError {
    /// Create an error carrying a human-readable cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line sink failed: {}", self.message)
    }
}

impl std::error::Error for SinkError {}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Receives completed lines from a wrap pass.
pub trait LineSink {
    /// Accept one flushed span and the code units it covers.
    ///
    /// Called once per line, in traversal order. The units are always in
    /// ascending buffer order, even for reverse-mode spans.
    fn emit(&mut self, span: LineSpan, units: &[u16]) -> Result<(), SinkError>;
}

/// A sink that records every emitted span and its decoded text.
///
/// The reference sink for tests and for callers that want the pass result
/// in memory.
#[derive(Debug, Clone, Default)]
pub struct SpanCollector {
    spans: Vec<LineSpan>,
    lines: Vec<String>,
}

impl SpanCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded spans, in emission order.
    #[must_use]
    pub fn spans(&self) -> &[LineSpan] {
        &self.spans
    }

    /// The recorded lines decoded to `String`, in emission order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether no line has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl LineSink for SpanCollector {
    fn emit(&mut self, span: LineSpan, units: &[u16]) -> Result<(), SinkError> {
        self.spans.push(span);
        self.lines.push(String::from_utf16_lossy(units));
        Ok(())
    }
}

#![forbid(unsafe_code)]

//! The kerf binary: wrap a text file (or stdin) to a code-unit width.
//!
//! Wiring only: input loading, cursor binding, and a stdout sink around
//! the wrap engine. Diagnostics go to stderr through `tracing`, filtered
//! by `RUST_LOG`.

mod cli;

use std::fs;
use std::io::{self, BufWriter, Read, Stdout, Write};
use std::process;

use kerf_core::{SegmentCursor, TextBuffer};
use kerf_wrap::{LineSink, LineSpan, SinkError, WrapEngine, WrapError};
use tracing::debug;

/// Writes each emitted span to stdout as a UTF-8 line.
///
/// Decoding from the buffer's UTF-16 code units happens here, at the
/// output seam; the engine never sees bytes.
struct StdoutSink {
    out: BufWriter<Stdout>,
}

impl StdoutSink {
    fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
        }
    }

    fn finish(mut self) -> Result<(), SinkError> {
        self.out.flush().map_err(SinkError::from)
    }
}

impl LineSink for StdoutSink {
    fn emit(&mut self, _span: LineSpan, units: &[u16]) -> Result<(), SinkError> {
        let line = String::from_utf16_lossy(units);
        writeln!(self.out, "{line}").map_err(SinkError::from)
    }
}

#[derive(Debug)]
enum RunError {
    Read { source: String, message: String },
    Wrap(WrapError),
    Flush(SinkError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { source, message } => write!(f, "cannot read {source}: {message}"),
            Self::Wrap(err) => write!(f, "{err}"),
            Self::Flush(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RunError {}

fn load_input(opts: &cli::Opts) -> Result<String, RunError> {
    if opts.reads_stdin() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| RunError::Read {
                source: "stdin".to_string(),
                message: err.to_string(),
            })?;
        Ok(text)
    } else {
        let path = opts.input.as_deref().unwrap_or_default();
        fs::read_to_string(path).map_err(|err| RunError::Read {
            source: path.to_string(),
            message: err.to_string(),
        })
    }
}

fn run(opts: &cli::Opts) -> Result<usize, RunError> {
    let text = load_input(opts)?;
    let buffer = TextBuffer::new(&text);
    let mut cursor = SegmentCursor::bind(opts.rule, &text);
    debug!(
        units = buffer.len(),
        boundaries = cursor.boundaries().len(),
        "input bound"
    );

    let engine = WrapEngine::new(opts.mode, opts.width);
    let mut sink = StdoutSink::new();
    let emitted = engine
        .wrap(&buffer, &mut cursor, &mut sink)
        .map_err(RunError::Wrap)?;
    sink.finish().map_err(RunError::Flush)?;
    Ok(emitted)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = cli::Opts::parse();
    debug!(
        width = opts.width,
        mode = %opts.mode,
        rule = ?opts.rule,
        input = opts.input.as_deref().unwrap_or("-"),
        "options resolved"
    );

    match run(&opts) {
        Ok(emitted) => debug!(lines = emitted, "wrap pass complete"),
        Err(err) => {
            eprintln!("kerf: {err}");
            process::exit(1);
        }
    }
}

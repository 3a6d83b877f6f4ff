//! Sinks: the side effect a handler performs when its filter matches

use crate::error::ChainError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::warn;

/// Single-method capability invoked by a handler that decided to act
pub trait Sink {
    /// Perform the side effect for `message`
    fn emit(&self, message: &str);
}

impl<F> Sink for F
where
    F: Fn(&str),
{
    fn emit(&self, message: &str) {
        self(message)
    }
}

/// Built-in sink variants, selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SinkKind {
    Console,
    Email,
    File,
    Database,
}

impl SinkKind {
    /// Every sink kind
    pub const VARIANTS: [SinkKind; 4] = [
        SinkKind::Console,
        SinkKind::Email,
        SinkKind::File,
        SinkKind::Database,
    ];

    /// Configuration token
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::Email => "email",
            SinkKind::File => "file",
            SinkKind::Database => "database",
        }
    }

    /// Line prefix written ahead of each message
    pub fn prefix(&self) -> &'static str {
        match self {
            SinkKind::Console => "Writing to console:",
            SinkKind::Email => "Sending via email:",
            SinkKind::File => "Writing to log file:",
            SinkKind::Database => "Writing to database:",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        SinkKind::VARIANTS
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ChainError::UnknownSink(token.to_string()))
    }
}

impl TryFrom<String> for SinkKind {
    type Error = ChainError;

    fn try_from(value: String) -> Result<Self, ChainError> {
        value.parse()
    }
}

impl From<SinkKind> for String {
    fn from(kind: SinkKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Line-oriented sink writing `<prefix> <message>` per emission
pub struct TextSink {
    kind: SinkKind,
    out: RefCell<Box<dyn Write>>,
}

impl TextSink {
    /// Sink of the given kind writing to standard output
    pub fn stdout(kind: SinkKind) -> Self {
        Self::with_writer(kind, io::stdout())
    }

    /// Sink of the given kind writing to an arbitrary writer
    pub fn with_writer(kind: SinkKind, writer: impl Write + 'static) -> Self {
        Self {
            kind,
            out: RefCell::new(Box::new(writer)),
        }
    }

    /// Variant of this sink
    pub fn kind(&self) -> SinkKind {
        self.kind
    }
}

impl Sink for TextSink {
    fn emit(&self, message: &str) {
        let mut out = self.out.borrow_mut();
        // Write failures never stop propagation down the chain
        if let Err(err) = writeln!(out, "{} {}", self.kind.prefix(), message) {
            warn!(sink = %self.kind, error = %err, "Sink write failed");
        }
    }
}

impl fmt::Debug for TextSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSink").field("kind", &self.kind).finish_non_exhaustive()
    }
}

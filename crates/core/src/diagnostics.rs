//! Recoverable build conditions.
//!
//! The builder never aborts on these; it reports them through the
//! [`DiagnosticSink`] it was constructed with and carries on.

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    UnsupportedElementKind,
    DuplicateIndexEntry,
    AlreadyReparented,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::UnsupportedElementKind => "unsupported-element-kind",
            DiagnosticKind::DuplicateIndexEntry => "duplicate-index-entry",
            DiagnosticKind::AlreadyReparented => "already-reparented",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to `tracing` as a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(kind = %diagnostic.kind, "{}", diagnostic.message);
    }
}

/// Keeps diagnostics in memory, optionally echoing them to `tracing`.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    echo: bool,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echoing() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            echo: true,
        }
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics
            .lock()
            .map(|d| d.iter().filter(|x| x.kind == kind).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().map(|d| d.is_empty()).unwrap_or(true)
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        if self.echo {
            TracingSink.emit(diagnostic.clone());
        }
        if let Ok(mut d) = self.diagnostics.lock() {
            d.push(diagnostic);
        }
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic)
    }
}

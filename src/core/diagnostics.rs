//! ### Classification diagnostics
//! Events the tokenizer and the classifier report instead of writing to a global logger.

use std::sync::Mutex;

use crate::core::change_type::ChangeType;

/// A diagnostic event raised while reading pending changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A change-type segment matched nothing in the vocabulary.
    UnrecognizedToken { segment: String },
    /// A pending change matched no status rule.
    UnresolvedStatus {
        local_item: String,
        change_types: Vec<ChangeType>,
    },
}

/// Receives diagnostics. Shared across threads by the classifier.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnrecognizedToken { segment } => {
                tracing::error!(segment = %segment, "Undocumented status from server");
            }
            Diagnostic::UnresolvedStatus { local_item, change_types } => {
                tracing::error!(local_item = %local_item, ?change_types, "Unhandled status type");
            }
        }
    }
}

/// Keeps every diagnostic in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the collected events.
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match self.events.lock() {
            Ok(mut events) => events.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

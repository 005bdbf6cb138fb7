//! Caller-visible warning channel for resolution failures.

use std::sync::{Mutex, PoisonError};
use tracing::warn;

pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
}

/// Emits warnings through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

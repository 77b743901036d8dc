//! Testing utilities for the variant-gate workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use vgate_core::{LogSink, Selector, VariantTag};

/// Sink that records every error message it receives
#[derive(Debug, Default)]
pub struct CapturingSink {
    messages: Mutex<Vec<String>>,
}

impl CapturingSink {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl LogSink for CapturingSink {
    fn error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Selector over `tags` wired to a fresh capturing sink
#[must_use]
pub fn capturing_selector<T: VariantTag>(tags: &[T]) -> (Selector<T>, Arc<CapturingSink>) {
    let sink = CapturingSink::new();
    let selector = Selector::new(tags.iter().cloned()).with_sink(sink.clone());
    (selector, sink)
}

/// The `[line, json]` output-format selector used throughout the tests
#[must_use]
pub fn format_selector() -> (Selector<String>, Arc<CapturingSink>) {
    capturing_selector(&["line".to_string(), "json".to_string()])
}

/// Mapping that pairs every tag with its own rendered name
#[must_use]
pub fn echo_mapping<T: VariantTag>(tags: &[T]) -> HashMap<T, String> {
    tags.iter().map(|t| (t.clone(), T::to_string(t))).collect()
}

/// Mapping from string tags to static values
#[must_use]
pub fn mapping(pairs: &[(&str, &'static str)]) -> HashMap<String, &'static str> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

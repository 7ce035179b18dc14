//! Non-fatal conditions found while decoding.
//!
//! These never stop a decode. Each one is logged through `tracing` (target `dlis`) and pushed
//! into the caller's [`Warnings`] so it can be inspected afterwards.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Storage unit label parsed but is not DLIS v1.0; decoding assumed v1.0.
    InconsistentStorageLabel { found: String },
    /// Frame number differs from the previous one plus one.
    FrameNumberOutOfSequence { record: usize, expected: u32, found: u32 },
    /// Bounded text did not fit its slot and was cut at `capacity` code points.
    TruncatedText { row: usize, column: usize, length: usize, capacity: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InconsistentStorageLabel { found } => write!(
                f,
                "storage unit label inconsistent with specification (version {}) - \
                 falling back to assuming DLIS v1",
                found
            ),
            Warning::FrameNumberOutOfSequence { record, expected, found } => write!(
                f,
                "non-sequential frames in record {}: expected = {}, current = {}",
                record, expected, found
            ),
            Warning::TruncatedText { row, column, length, capacity } => write!(
                f,
                "text in row {} column {} truncated from {} to {} characters",
                row, column, length, capacity
            ),
        }
    }
}

/// Collector for [`Warning`]s.
#[derive(Debug, Default)]
pub struct Warnings {
    items: Vec<Warning>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::warn!(target: "dlis", "{}", warning);
        self.items.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.items
    }
}

#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod event;
pub mod geometry;
pub mod registry;
pub mod selector;
pub mod types;

// Internal building blocks, public for tooling and tests.
pub mod histogram;

// --- High-level re-exports -------------------------------------------------

// Main entry points: selector + results.
pub use crate::selector::{SelectionError, SelectionParams, VertexSelector};
pub use crate::types::SelectionResult;

// Structured diagnostics returned alongside the result.
pub use crate::diagnostics::{CandidateOutcome, CandidateTrace, SelectionReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::event::{EventStore, InMemoryEventStore};
    pub use crate::types::{Cluster, Hit, TpcView, Vertex};
    pub use crate::{SelectionParams, SelectionResult, VertexSelector};
}

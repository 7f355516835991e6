//! Vertex selector: scores candidate 3D vertices against the angular
//! distribution of nearby 2D hits and selects a single best vertex.
//!
//! Overview
//! - Projects each candidate into the U, V and W readout views.
//! - Scans the named cluster list of each view, filling a weighted phi
//!   histogram with the hit displacement directions; hits closer to the
//!   projected vertex weigh more.
//! - Reduces each histogram to a sum-of-squared-bin-contents merit and adds
//!   the three views into one combined score. Candidates that are not on a
//!   hit in all three views are dropped before ranking.
//! - Ranks survivors descending by score and greedily walks the top few,
//!   gating later entries on spatial exclusion and score dominance against
//!   the already accepted set.
//! - Persists the winner as a singleton vertex list through the event store.
//!
//! Modules
//! - [`params`] – configuration for the scan thresholds and acceptance gates.
//! - `pipeline` – the [`VertexSelector`] implementation.
//! - `scanner` – the per-view hit scan.
//! - `merit` – the figure-of-merit reduction.

pub mod merit;
pub mod params;
mod pipeline;
mod scanner;

pub use params::SelectionParams;
pub use pipeline::VertexSelector;

use crate::types::TpcView;

/// Fatal failures aborting a selection run. A candidate that is not on a hit
/// in all three views is a silent skip, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// No current vertex list was available from the event store.
    MissingVertexList,
    /// A configured cluster list name did not resolve.
    MissingClusterList { name: String },
    /// A cluster in the named list was recorded for a different view than
    /// the one being scanned; the list is wired to the wrong view.
    ViewMismatch {
        list_name: String,
        expected: TpcView,
        found: TpcView,
    },
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::MissingVertexList => {
                write!(f, "no current vertex list available")
            }
            SelectionError::MissingClusterList { name } => {
                write!(f, "cluster list {name:?} not found")
            }
            SelectionError::ViewMismatch {
                list_name,
                expected,
                found,
            } => write!(
                f,
                "cluster list {list_name:?} holds a view-{found} cluster while scanning view {expected}"
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

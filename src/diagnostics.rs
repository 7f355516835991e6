//! Structured diagnostics emitted alongside the selection result.

use crate::types::SelectionResult;
use serde::Serialize;

/// How a candidate fared across scoring and the acceptance walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOutcome {
    /// Dropped before ranking: not on a hit in all three views.
    OffHit,
    /// Ranked, but the acceptance walk stopped before reaching it.
    BeyondDepth,
    /// Visited and rejected by the spatial-exclusion gate.
    TooClose,
    /// Visited and rejected by the score-dominance gate.
    Dominated,
    /// Member of the accepted working set.
    Accepted,
}

/// Per-candidate trace: per-view on-hit flags and histogram merits, the
/// combined score when the candidate entered ranking, and the final outcome.
#[derive(Clone, Debug, Serialize)]
pub struct CandidateTrace {
    /// Index into the input vertex list.
    pub candidate: usize,
    pub vertex_id: u32,
    /// On-hit flags in U, V, W order.
    pub on_hit: [bool; 3],
    /// Per-view figure of merit in U, V, W order.
    pub view_merits: [f32; 3],
    /// Combined score; `None` for candidates dropped before ranking.
    pub score: Option<f32>,
    pub outcome: CandidateOutcome,
}

/// Wall-clock split of one selection run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub scan_ms: f64,
    pub rank_ms: f64,
    pub total_ms: f64,
}

/// Full report of one selection run: the compact result plus one trace per
/// input candidate and the timing split.
#[derive(Clone, Debug, Serialize)]
pub struct SelectionReport {
    pub result: SelectionResult,
    pub candidates: Vec<CandidateTrace>,
    pub timing: TimingBreakdown,
}

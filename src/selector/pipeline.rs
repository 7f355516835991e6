//! Selection pipeline driving candidate scoring and selection end-to-end.
//!
//! The [`VertexSelector`] exposes a simple API: point it at an event store
//! holding the current candidate vertex list and the three per-view cluster
//! lists, and it persists the selected singleton vertex list. Internally it
//! coordinates the per-view hit scans, the figure-of-merit reduction, the
//! descending-score ranking, and the greedy acceptance walk.
//!
//! Typical usage:
//! ```no_run
//! use vertex_select::event::InMemoryEventStore;
//! use vertex_select::{SelectionParams, VertexSelector};
//!
//! # fn example(mut store: InMemoryEventStore) -> Result<(), vertex_select::SelectionError> {
//! let selector = VertexSelector::new(SelectionParams::default());
//! let result = selector.run(&mut store)?;
//! if result.found {
//!     println!("selected vertex score: {:.3}", result.score);
//! }
//! # Ok(())
//! # }
//! ```

use super::merit::{combined_merit, histogram_merit};
use super::params::SelectionParams;
use super::scanner::scan_view;
use super::SelectionError;
use crate::diagnostics::{CandidateOutcome, CandidateTrace, SelectionReport, TimingBreakdown};
use crate::event::EventStore;
use crate::geometry::{ViewProjector, WirePlaneProjector};
use crate::histogram::PhiHistogram;
use crate::types::{SelectionResult, TpcView, Vertex, VertexScore};
use log::debug;
use std::time::Instant;

/// Vertex selector orchestrating per-view scans, ranking and the greedy
/// acceptance walk.
///
/// The run is stateless beyond the immutable parameters: every invocation
/// allocates its own histograms and score list, so independent events may be
/// processed by cloned selectors without shared state.
pub struct VertexSelector<P: ViewProjector = WirePlaneProjector> {
    params: SelectionParams,
    projector: P,
}

impl VertexSelector<WirePlaneProjector> {
    /// Creates a selector using the built-in wire-plane projection.
    pub fn new(params: SelectionParams) -> Self {
        Self::with_projector(params, WirePlaneProjector::default())
    }
}

impl<P: ViewProjector> VertexSelector<P> {
    /// Creates a selector with a host-supplied view projection.
    pub fn with_projector(params: SelectionParams, projector: P) -> Self {
        Self { params, projector }
    }

    pub fn params(&self) -> &SelectionParams {
        &self.params
    }

    /// Runs the selection and returns the compact result.
    pub fn run<S: EventStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<SelectionResult, SelectionError> {
        Ok(self.run_with_diagnostics(store)?.result)
    }

    /// Runs the selection and returns the result plus per-candidate traces.
    ///
    /// The acceptance walk gates only whether an output is produced: when the
    /// working set ends up non-empty, the emitted vertex is unconditionally
    /// the globally top-scored candidate, not the best member of the working
    /// set. This asymmetry is deliberate (see README) and must not be
    /// "simplified" into emitting the working set's best.
    pub fn run_with_diagnostics<S: EventStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<SelectionReport, SelectionError> {
        let total_start = Instant::now();

        let vertices: Vec<Vertex> = store
            .current_vertex_list()
            .ok_or(SelectionError::MissingVertexList)?
            .to_vec();
        debug!("VertexSelector::run start candidates={}", vertices.len());

        let scan_start = Instant::now();
        let (scores, mut traces) = self.score_candidates(store, &vertices)?;
        let scan_ms = scan_start.elapsed().as_secs_f64() * 1000.0;

        let rank_start = Instant::now();
        let (ranked, accepted) = self.rank_and_accept(&vertices, scores, &mut traces);
        let rank_ms = rank_start.elapsed().as_secs_f64() * 1000.0;

        let mut result = SelectionResult {
            found: false,
            vertex: None,
            score: 0.0,
            candidates_scored: ranked.len(),
            latency_ms: 0.0,
        };

        if !accepted.is_empty() {
            let best = ranked[0];
            let vertex = vertices[best.candidate].clone();
            store.save_vertex_list(&self.params.output_vertex_list, vec![vertex.clone()]);
            if self.params.replace_current_vertex_list {
                store.replace_current_vertex_list(&self.params.output_vertex_list);
            }
            result.found = true;
            result.score = best.score;
            result.vertex = Some(vertex);
        }

        result.latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "VertexSelector::run done found={} scored={} accepted={} latency_ms={:.3}",
            result.found,
            result.candidates_scored,
            accepted.len(),
            result.latency_ms
        );

        Ok(SelectionReport {
            result,
            candidates: traces,
            timing: TimingBreakdown {
                scan_ms,
                rank_ms,
                total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
            },
        })
    }

    /// Scans every candidate in all three views. Candidates on a hit in all
    /// three views receive a combined score; the rest are dropped here.
    fn score_candidates<S: EventStore + ?Sized>(
        &self,
        store: &S,
        vertices: &[Vertex],
    ) -> Result<(Vec<VertexScore>, Vec<CandidateTrace>), SelectionError> {
        let mut scores = Vec::new();
        let mut traces = Vec::with_capacity(vertices.len());

        for (candidate, vertex) in vertices.iter().enumerate() {
            let mut histograms = TpcView::ALL.map(|_| {
                PhiHistogram::new(
                    self.params.histogram_n_phi_bins,
                    self.params.histogram_phi_min,
                    self.params.histogram_phi_max,
                )
            });

            let mut on_hit = [false; 3];
            for (slot, view) in TpcView::ALL.into_iter().enumerate() {
                on_hit[slot] = scan_view(
                    store,
                    &self.projector,
                    &self.params,
                    &vertex.position,
                    view,
                    self.cluster_list_name(view),
                    &mut histograms[slot],
                )?;
            }

            let view_merits = [
                histogram_merit(&histograms[0]),
                histogram_merit(&histograms[1]),
                histogram_merit(&histograms[2]),
            ];
            let ranked = on_hit.iter().all(|&flag| flag);
            let score = ranked.then(|| combined_merit(&histograms));
            if let Some(score) = score {
                scores.push(VertexScore { candidate, score });
            }

            traces.push(CandidateTrace {
                candidate,
                vertex_id: vertex.id,
                on_hit,
                view_merits,
                score,
                outcome: if ranked {
                    CandidateOutcome::BeyondDepth
                } else {
                    CandidateOutcome::OffHit
                },
            });
        }

        Ok((scores, traces))
    }

    /// Sorts the scored candidates descending and walks the top entries,
    /// applying the spatial-exclusion and score-dominance gates against the
    /// already accepted working set. The first visited candidate is accepted
    /// unconditionally; the walk depth counts every visited entry.
    fn rank_and_accept(
        &self,
        vertices: &[Vertex],
        mut scores: Vec<VertexScore>,
        traces: &mut [CandidateTrace],
    ) -> (Vec<VertexScore>, Vec<VertexScore>) {
        // Stable sort: ties keep input-list order.
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut accepted: Vec<VertexScore> = Vec::new();
        for entry in scores.iter().take(self.params.max_top_score_candidates) {
            if !accepted.is_empty() && !self.accept_location(vertices, entry.candidate, &accepted)
            {
                traces[entry.candidate].outcome = CandidateOutcome::TooClose;
                continue;
            }
            if !accepted.is_empty() && !self.accept_score(entry.score, &accepted) {
                traces[entry.candidate].outcome = CandidateOutcome::Dominated;
                continue;
            }
            traces[entry.candidate].outcome = CandidateOutcome::Accepted;
            accepted.push(*entry);
        }

        (scores, accepted)
    }

    /// Spatial-exclusion gate: the candidate must be at least the configured
    /// 3D distance away from every accepted candidate.
    fn accept_location(
        &self,
        vertices: &[Vertex],
        candidate: usize,
        accepted: &[VertexScore],
    ) -> bool {
        let position = vertices[candidate].position;
        accepted.iter().all(|entry| {
            let displacement = (position - vertices[entry.candidate].position).norm();
            displacement >= self.params.min_candidate_displacement
        })
    }

    /// Score-dominance gate: the candidate must score at least the configured
    /// fraction of every accepted candidate's score.
    fn accept_score(&self, score: f32, accepted: &[VertexScore]) -> bool {
        accepted
            .iter()
            .all(|entry| score >= self.params.min_candidate_score_fraction * entry.score)
    }

    fn cluster_list_name(&self, view: TpcView) -> &str {
        match view {
            TpcView::U => &self.params.input_cluster_list_u,
            TpcView::V => &self.params.input_cluster_list_v,
            TpcView::W => &self.params.input_cluster_list_w,
        }
    }
}

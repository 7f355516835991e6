use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// One of the three independent 2D readout views of the detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TpcView {
    U,
    V,
    W,
}

impl TpcView {
    /// All views, in scan order.
    pub const ALL: [TpcView; 3] = [TpcView::U, TpcView::V, TpcView::W];
}

impl std::fmt::Display for TpcView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TpcView::U => write!(f, "U"),
            TpcView::V => write!(f, "V"),
            TpcView::W => write!(f, "W"),
        }
    }
}

/// Candidate interaction vertex. Owned by the event store; the selector only
/// reads positions and never mutates a vertex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: u32,
    pub position: Point3<f32>,
}

/// Single energy deposit in one view, at view-local 2D coordinates.
/// `layer` is the readout depth used to keep cluster hits ordered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub layer: u32,
    pub position: Point2<f32>,
}

/// Connected group of hits attributed to one particle track or shower,
/// specific to one view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub view: TpcView,
    pub hits: Vec<Hit>,
}

impl Cluster {
    /// Builds a cluster with its hits ordered by layer.
    pub fn new(view: TpcView, mut hits: Vec<Hit>) -> Self {
        hits.sort_by_key(|hit| hit.layer);
        Cluster { view, hits }
    }
}

/// Scored candidate: index into the input vertex list plus the combined
/// three-view figure of merit.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct VertexScore {
    pub candidate: usize,
    pub score: f32,
}

/// Compact outcome of one selection run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SelectionResult {
    pub found: bool,
    pub vertex: Option<Vertex>,
    pub score: f32,
    /// Candidates that were on a hit in all three views and entered ranking.
    pub candidates_scored: usize,
    pub latency_ms: f64,
}

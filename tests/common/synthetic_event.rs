use nalgebra::{Point2, Point3};
use vertex_select::event::InMemoryEventStore;
use vertex_select::geometry::{ViewProjector, WirePlaneProjector};
use vertex_select::types::{Cluster, Hit, TpcView, Vertex};

pub const CANDIDATE_LIST: &str = "CandidateVertices";
pub const CLUSTER_LIST_U: &str = "ClustersU";
pub const CLUSTER_LIST_V: &str = "ClustersV";
pub const CLUSTER_LIST_W: &str = "ClustersW";
pub const OUTPUT_LIST: &str = "SelectedVertices";

/// Builds synthetic events: candidate vertices plus per-view hits placed at
/// controlled displacements from each candidate's projected position, using
/// the same default projection the selector uses.
pub struct EventBuilder {
    projector: WirePlaneProjector,
    vertices: Vec<Vertex>,
    hits: [Vec<Hit>; 3],
}

fn slot(view: TpcView) -> usize {
    match view {
        TpcView::U => 0,
        TpcView::V => 1,
        TpcView::W => 2,
    }
}

impl EventBuilder {
    pub fn new() -> Self {
        EventBuilder {
            projector: WirePlaneProjector::default(),
            vertices: Vec::new(),
            hits: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Adds a candidate vertex; returns its index in the candidate list.
    pub fn add_vertex(&mut self, position: Point3<f32>) -> usize {
        let id = self.vertices.len() as u32;
        self.vertices.push(Vertex { id, position });
        self.vertices.len() - 1
    }

    /// Hit at `distance` from the projection of `position`, along `angle`,
    /// in one view.
    pub fn add_hit_near(
        &mut self,
        position: Point3<f32>,
        view: TpcView,
        angle: f32,
        distance: f32,
    ) {
        let projected = self.projector.project(&position, view);
        let hit_position = Point2::new(
            projected.x + distance * angle.cos(),
            projected.y + distance * angle.sin(),
        );
        let layer = self.hits[slot(view)].len() as u32;
        self.hits[slot(view)].push(Hit { layer, position: hit_position });
    }

    /// The same hit geometry replicated in all three views.
    pub fn add_hit_near_all_views(&mut self, position: Point3<f32>, angle: f32, distance: f32) {
        for view in TpcView::ALL {
            self.add_hit_near(position, view, angle, distance);
        }
    }

    /// Tight angular burst: `count` hits along one direction at increasing
    /// distances, in every view.
    pub fn add_burst(
        &mut self,
        position: Point3<f32>,
        angle: f32,
        count: usize,
        start: f32,
        step: f32,
    ) {
        for k in 0..count {
            self.add_hit_near_all_views(position, angle, start + step * k as f32);
        }
    }

    /// Angularly scattered hits: `count` hits spread uniformly around the
    /// projected position at the given distance, in every view.
    pub fn add_ring(&mut self, position: Point3<f32>, count: usize, distance: f32) {
        for k in 0..count {
            let angle = -std::f32::consts::PI + (k as f32 + 0.5) * std::f32::consts::TAU / count as f32;
            self.add_hit_near_all_views(position, angle, distance);
        }
    }

    pub fn build(&self) -> InMemoryEventStore {
        self.build_with_list_names(CLUSTER_LIST_U, CLUSTER_LIST_V, CLUSTER_LIST_W)
    }

    pub fn build_with_list_names(&self, u: &str, v: &str, w: &str) -> InMemoryEventStore {
        let mut store = InMemoryEventStore::new();
        store.add_vertex_list(CANDIDATE_LIST, self.vertices.clone());
        store.set_current_vertex_list(CANDIDATE_LIST);
        for (name, view) in [(u, TpcView::U), (v, TpcView::V), (w, TpcView::W)] {
            let cluster = Cluster::new(view, self.hits[slot(view)].clone());
            store.add_cluster_list(name, vec![cluster]);
        }
        store
    }
}

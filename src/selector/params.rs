//! Parameter types configuring the vertex selector.
//!
//! Defaults follow the standard reconstruction tune; the list names are the
//! usual knobs to change per detector configuration, followed by the on-hit
//! threshold and the candidate-acceptance gates.

use std::f32::consts::PI;

/// Selector-wide parameters controlling scoring and candidate acceptance.
#[derive(Clone, Debug)]
pub struct SelectionParams {
    /// Cluster list scanned for the U view.
    pub input_cluster_list_u: String,
    /// Cluster list scanned for the V view.
    pub input_cluster_list_v: String,
    /// Cluster list scanned for the W view.
    pub input_cluster_list_w: String,
    /// Name under which the selected singleton vertex list is saved.
    pub output_vertex_list: String,
    /// Whether the output list also becomes the current vertex list.
    pub replace_current_vertex_list: bool,
    /// Number of bins in the per-view phi histogram.
    pub histogram_n_phi_bins: usize,
    /// Lower edge of the histogram angular range (radians).
    pub histogram_phi_min: f32,
    /// Upper edge of the histogram angular range (radians, exclusive).
    pub histogram_phi_max: f32,
    /// Hits farther than this from the projected vertex are ignored.
    pub max_hit_vertex_displacement: f32,
    /// A hit strictly closer than this marks the vertex as on a hit.
    pub max_on_hit_displacement: f32,
    /// Exponent applied to the hit displacement magnitude to obtain the
    /// histogram weight; negative values favour close hits.
    pub hit_deweighting_power: f32,
    /// Depth of the greedy acceptance walk over the ranked candidates.
    pub max_top_score_candidates: usize,
    /// Minimum 3D distance between accepted candidates.
    pub min_candidate_displacement: f32,
    /// A candidate must score at least this fraction of every already
    /// accepted candidate's score to join the working set.
    pub min_candidate_score_fraction: f32,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            input_cluster_list_u: "ClustersU".to_string(),
            input_cluster_list_v: "ClustersV".to_string(),
            input_cluster_list_w: "ClustersW".to_string(),
            output_vertex_list: "SelectedVertices".to_string(),
            replace_current_vertex_list: true,
            histogram_n_phi_bins: 200,
            histogram_phi_min: -1.1 * PI,
            histogram_phi_max: 1.1 * PI,
            max_hit_vertex_displacement: f32::MAX,
            max_on_hit_displacement: 1.0,
            hit_deweighting_power: -0.5,
            max_top_score_candidates: 5,
            min_candidate_displacement: 2.0,
            min_candidate_score_fraction: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionParams;
    use std::f32::consts::PI;

    #[test]
    fn default_histogram_range_is_wider_than_atan2() {
        let params = SelectionParams::default();
        assert_eq!(params.histogram_n_phi_bins, 200);
        assert!(params.histogram_phi_min < -PI);
        assert!(params.histogram_phi_max > PI);
    }
}

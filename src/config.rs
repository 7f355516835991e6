//! Runtime configuration for the demo binary and embedding hosts.
//!
//! Configuration is flat JSON: the three input cluster list names and the
//! output list name are required, every numeric knob is optional and falls
//! back to the [`SelectionParams`] default.

use crate::event::InMemoryEventStore;
use crate::selector::SelectionParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Selection knobs as loaded from JSON.
#[derive(Clone, Debug, Deserialize)]
pub struct SelectionConfig {
    pub input_cluster_list_u: String,
    pub input_cluster_list_v: String,
    pub input_cluster_list_w: String,
    pub output_vertex_list: String,
    #[serde(default)]
    pub replace_current_vertex_list: Option<bool>,
    #[serde(default)]
    pub histogram_n_phi_bins: Option<usize>,
    #[serde(default)]
    pub histogram_phi_min: Option<f32>,
    #[serde(default)]
    pub histogram_phi_max: Option<f32>,
    #[serde(default)]
    pub max_hit_vertex_displacement: Option<f32>,
    #[serde(default)]
    pub max_on_hit_displacement: Option<f32>,
    #[serde(default)]
    pub hit_deweighting_power: Option<f32>,
    #[serde(default)]
    pub max_top_score_candidates: Option<usize>,
    #[serde(default)]
    pub min_candidate_displacement: Option<f32>,
    #[serde(default)]
    pub min_candidate_score_fraction: Option<f32>,
}

impl SelectionConfig {
    /// Resolves the configuration onto the parameter defaults.
    pub fn resolve(&self) -> SelectionParams {
        let defaults = SelectionParams::default();
        SelectionParams {
            input_cluster_list_u: self.input_cluster_list_u.clone(),
            input_cluster_list_v: self.input_cluster_list_v.clone(),
            input_cluster_list_w: self.input_cluster_list_w.clone(),
            output_vertex_list: self.output_vertex_list.clone(),
            replace_current_vertex_list: self
                .replace_current_vertex_list
                .unwrap_or(defaults.replace_current_vertex_list),
            histogram_n_phi_bins: self
                .histogram_n_phi_bins
                .unwrap_or(defaults.histogram_n_phi_bins),
            histogram_phi_min: self.histogram_phi_min.unwrap_or(defaults.histogram_phi_min),
            histogram_phi_max: self.histogram_phi_max.unwrap_or(defaults.histogram_phi_max),
            max_hit_vertex_displacement: self
                .max_hit_vertex_displacement
                .unwrap_or(defaults.max_hit_vertex_displacement),
            max_on_hit_displacement: self
                .max_on_hit_displacement
                .unwrap_or(defaults.max_on_hit_displacement),
            hit_deweighting_power: self
                .hit_deweighting_power
                .unwrap_or(defaults.hit_deweighting_power),
            max_top_score_candidates: self
                .max_top_score_candidates
                .unwrap_or(defaults.max_top_score_candidates),
            min_candidate_displacement: self
                .min_candidate_displacement
                .unwrap_or(defaults.min_candidate_displacement),
            min_candidate_score_fraction: self
                .min_candidate_score_fraction
                .unwrap_or(defaults.min_candidate_score_fraction),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

/// Top-level demo configuration: event payload path, selection knobs and
/// optional JSON report output.
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub event_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    pub selection: SelectionConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Loads a JSON event payload into an in-memory store.
pub fn load_event(path: &Path) -> Result<InMemoryEventStore, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read event {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse event {}: {e}", path.display()))
}

//! Event store seam to the host reconstruction framework.
//!
//! The selector reads the current candidate vertex list and per-view named
//! cluster lists, and writes back a named singleton vertex list. Hosts with
//! their own list management implement [`EventStore`]; [`InMemoryEventStore`]
//! backs the demo binary and the tests and can be (de)serialised as a JSON
//! event payload.

use crate::types::{Cluster, Vertex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named list storage owned by the host framework for the duration of one
/// reconstruction event.
pub trait EventStore {
    /// The current candidate vertex list, if one is set.
    fn current_vertex_list(&self) -> Option<&[Vertex]>;

    /// A cluster list by name.
    fn cluster_list(&self, name: &str) -> Option<&[Cluster]>;

    /// Persists `vertices` under `name`, replacing any previous content.
    fn save_vertex_list(&mut self, name: &str, vertices: Vec<Vertex>);

    /// Makes the named saved list the current vertex list.
    fn replace_current_vertex_list(&mut self, name: &str);
}

/// Simple owned implementation of [`EventStore`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryEventStore {
    #[serde(default)]
    vertex_lists: HashMap<String, Vec<Vertex>>,
    #[serde(default)]
    cluster_lists: HashMap<String, Vec<Cluster>>,
    #[serde(default)]
    current_vertex_list: Option<String>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex_list(&mut self, name: impl Into<String>, vertices: Vec<Vertex>) {
        self.vertex_lists.insert(name.into(), vertices);
    }

    pub fn add_cluster_list(&mut self, name: impl Into<String>, clusters: Vec<Cluster>) {
        self.cluster_lists.insert(name.into(), clusters);
    }

    pub fn set_current_vertex_list(&mut self, name: impl Into<String>) {
        self.current_vertex_list = Some(name.into());
    }

    /// A saved vertex list by name.
    pub fn vertex_list(&self, name: &str) -> Option<&[Vertex]> {
        self.vertex_lists.get(name).map(Vec::as_slice)
    }

    /// Name of the current vertex list, if one is set.
    pub fn current_vertex_list_name(&self) -> Option<&str> {
        self.current_vertex_list.as_deref()
    }
}

impl EventStore for InMemoryEventStore {
    fn current_vertex_list(&self) -> Option<&[Vertex]> {
        self.current_vertex_list
            .as_ref()
            .and_then(|name| self.vertex_lists.get(name))
            .map(Vec::as_slice)
    }

    fn cluster_list(&self, name: &str) -> Option<&[Cluster]> {
        self.cluster_lists.get(name).map(Vec::as_slice)
    }

    fn save_vertex_list(&mut self, name: &str, vertices: Vec<Vertex>) {
        self.vertex_lists.insert(name.to_string(), vertices);
    }

    fn replace_current_vertex_list(&mut self, name: &str) {
        self.current_vertex_list = Some(name.to_string());
    }
}

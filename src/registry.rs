//! Explicit name→factory registry for reconstruction algorithms.
//!
//! Hosts that configure their reconstruction chain from text resolve each
//! algorithm name through a table populated at process start, instead of a
//! compile-time factory list.

use crate::event::EventStore;
use crate::geometry::ViewProjector;
use crate::selector::{SelectionError, SelectionParams, VertexSelector};
use crate::types::SelectionResult;
use std::collections::HashMap;

/// A reconstruction algorithm runnable against an event store.
pub trait Algorithm {
    fn run(&self, store: &mut dyn EventStore) -> Result<SelectionResult, SelectionError>;
}

impl<P: ViewProjector> Algorithm for VertexSelector<P> {
    fn run(&self, store: &mut dyn EventStore) -> Result<SelectionResult, SelectionError> {
        VertexSelector::run(self, store)
    }
}

/// Factory producing a boxed algorithm from selection parameters.
pub type AlgorithmFactory = fn(SelectionParams) -> Box<dyn Algorithm>;

/// Name of the built-in vertex selection algorithm.
pub const VERTEX_SELECTION: &str = "LArVertexSelection";

/// Table of named algorithm factories.
pub struct AlgorithmRegistry {
    factories: HashMap<&'static str, AlgorithmFactory>,
}

impl AlgorithmRegistry {
    /// Registry preloaded with the built-in algorithms.
    pub fn with_builtins() -> Self {
        let mut factories: HashMap<&'static str, AlgorithmFactory> = HashMap::new();
        factories.insert(VERTEX_SELECTION, |params| -> Box<dyn Algorithm> {
            Box::new(VertexSelector::new(params))
        });
        Self { factories }
    }

    /// Adds or replaces a factory under `name`.
    pub fn register(&mut self, name: &'static str, factory: AlgorithmFactory) {
        self.factories.insert(name, factory);
    }

    /// Instantiates the named algorithm, or `None` if unregistered.
    pub fn create(&self, name: &str, params: SelectionParams) -> Option<Box<dyn Algorithm>> {
        self.factories.get(name).map(|factory| factory(params))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

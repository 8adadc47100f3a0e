#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use thiserror::Error;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError<V> {
    /// The vertex was never added to the graph.
    #[error("unknown vertex: {0:?}")]
    UnknownVertex(V),
    /// Edge weights must be non-negative (NaN is rejected too).
    #[error("invalid edge weight: {0}")]
    InvalidWeight(f64),
}

/// Undirected graph with `f64` edge weights, stored as a vertex-to-adjacency
/// mapping. Every edge appears in both endpoints' adjacency maps with the
/// same weight; all mutation keeps that symmetric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "V: Serialize + Eq + Hash",
        deserialize = "V: Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct WeightedGraph<V: Eq + Hash> {
    pub(crate) adjacency: HashMap<V, HashMap<V, f64>>,
}

impl<V: Eq + Hash> Default for WeightedGraph<V> {
    fn default() -> Self {
        WeightedGraph {
            adjacency: HashMap::new(),
        }
    }
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Ord + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vertex` with an empty adjacency map. Re-inserting an
    /// existing vertex is a no-op and keeps its edges.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Inserts an undirected edge between `a` and `b`, recorded in both
    /// adjacency maps. Re-adding an existing edge overwrites the weight on
    /// both sides. Both endpoints must already be vertices.
    pub fn add_edge(&mut self, a: V, b: V, weight: f64) -> Result<(), GraphError<V>> {
        if weight < 0.0 || weight.is_nan() {
            return Err(GraphError::InvalidWeight(weight));
        }
        if !self.adjacency.contains_key(&a) {
            return Err(GraphError::UnknownVertex(a));
        }
        if !self.adjacency.contains_key(&b) {
            return Err(GraphError::UnknownVertex(b));
        }

        if let Some(adjacent) = self.adjacency.get_mut(&a) {
            adjacent.insert(b.clone(), weight);
        }
        if let Some(adjacent) = self.adjacency.get_mut(&b) {
            adjacent.insert(a, weight);
        }
        Ok(())
    }

    /// Iterates over `vertex`'s neighbors and edge weights. Empty for an
    /// unknown vertex.
    pub fn neighbors(&self, vertex: &V) -> impl Iterator<Item = (&V, f64)> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|adjacent| adjacent.iter().map(|(v, w)| (v, *w)))
    }

    pub fn edge_weight(&self, a: &V, b: &V) -> Option<f64> {
        self.adjacency.get(a)?.get(b).copied()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, each counted once.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .flat_map(|(a, adjacent)| adjacent.keys().map(move |b| (a, b)))
            .filter(|(a, b)| a <= b)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

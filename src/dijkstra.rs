use crate::graph::{GraphError, WeightedGraph};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Sentinel distance reported for vertices the source cannot reach.
pub const UNREACHABLE: f64 = f64::INFINITY;

struct QueueEntry<'a, V> {
    distance: f64,
    vertex: &'a V,
}

impl<V: Ord> PartialEq for QueueEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for QueueEntry<'_, V> {}

impl<V: Ord> PartialOrd for QueueEntry<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for QueueEntry<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.vertex.cmp(other.vertex))
    }
}

impl<V> WeightedGraph<V>
where
    V: Eq + Hash + Ord + Clone,
{
    /// Computes the shortest distance from `source` to every vertex in the
    /// graph. Vertices with no path from `source` map to [`UNREACHABLE`].
    ///
    /// Label-correcting Dijkstra over a min-heap: improved tentative
    /// distances are pushed as fresh entries instead of a decrease-key, so
    /// the heap may hold stale duplicates for a vertex. A popped entry whose
    /// distance exceeds the recorded best is skipped; that check is what
    /// makes the duplicates safe. O((V + E) log V) for non-negative weights.
    pub fn shortest_paths(&self, source: &V) -> Result<HashMap<V, f64>, GraphError<V>> {
        let (source, _) = self
            .adjacency
            .get_key_value(source)
            .ok_or_else(|| GraphError::UnknownVertex(source.clone()))?;

        let mut distances: HashMap<&V, f64> =
            self.adjacency.keys().map(|v| (v, UNREACHABLE)).collect();
        distances.insert(source, 0.0);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(QueueEntry {
            distance: 0.0,
            vertex: source,
        }));

        while let Some(Reverse(QueueEntry { distance, vertex })) = heap.pop() {
            // Stale entry: a shorter path to this vertex was settled already.
            if distance > distances[vertex] {
                continue;
            }

            for (neighbor, weight) in &self.adjacency[vertex] {
                let candidate = distance + weight;
                if candidate < distances[neighbor] {
                    distances.insert(neighbor, candidate);
                    heap.push(Reverse(QueueEntry {
                        distance: candidate,
                        vertex: neighbor,
                    }));
                }
            }
        }

        Ok(distances.into_iter().map(|(v, d)| (v.clone(), d)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_graph() -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_vertex("C");
        graph.add_edge("A", "B", 5.0).unwrap();
        graph.add_edge("B", "C", 3.0).unwrap();
        graph.add_edge("A", "C", 10.0).unwrap();
        graph
    }

    #[test]
    fn test_indirect_path_beats_direct_edge() {
        let graph = triangle_graph();
        let distances = graph.shortest_paths(&"A").unwrap();

        assert_eq!(distances[&"A"], 0.0);
        assert_eq!(distances[&"B"], 5.0);
        // A -> B -> C = 8, shorter than the direct A -> C edge of 10.
        assert_eq!(distances[&"C"], 8.0);
        assert_eq!(distances.len(), 3);
    }

    #[test]
    fn test_source_distance_is_zero() {
        let graph = triangle_graph();
        for vertex in ["A", "B", "C"] {
            let distances = graph.shortest_paths(&vertex).unwrap();
            assert_eq!(distances[&vertex], 0.0);
        }
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("X");

        let distances = graph.shortest_paths(&"X").unwrap();
        assert_eq!(distances.len(), 1);
        assert_eq!(distances[&"X"], 0.0);
    }

    #[test]
    fn test_disconnected_vertex_is_unreachable() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");

        let distances = graph.shortest_paths(&"A").unwrap();
        assert_eq!(distances[&"A"], 0.0);
        assert_eq!(distances[&"B"], UNREACHABLE);
    }

    #[test]
    fn test_unknown_source_is_an_error() {
        let graph = triangle_graph();
        let result = graph.shortest_paths(&"Z");
        assert_eq!(result, Err(GraphError::UnknownVertex("Z")));
    }

    #[test]
    fn test_stale_heap_entries_are_skipped() {
        // 0-1-2-3 chain plus a heavy 0-3 shortcut: vertex 3 gets an early
        // heap entry at 5 that is superseded by the 4-long chain path.
        let mut graph = WeightedGraph::new();
        for v in 0..4 {
            graph.add_vertex(v);
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();
        graph.add_edge(2, 3, 1.0).unwrap();
        graph.add_edge(0, 3, 5.0).unwrap();

        let distances = graph.shortest_paths(&0).unwrap();
        assert_eq!(distances[&3], 4.0);
    }

    #[test]
    fn test_overwritten_edge_uses_new_weight() {
        let mut graph = triangle_graph();
        graph.add_edge("A", "C", 1.0).unwrap();

        let distances = graph.shortest_paths(&"A").unwrap();
        assert_eq!(distances[&"C"], 1.0);
        // B is now cheapest through C: 1 + 3 < 5.
        assert_eq!(distances[&"B"], 4.0);
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = WeightedGraph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 0.0).unwrap();
        graph.add_edge("B", "C", 2.0).unwrap();

        let distances = graph.shortest_paths(&"A").unwrap();
        assert_eq!(distances[&"B"], 0.0);
        assert_eq!(distances[&"C"], 2.0);
    }
}

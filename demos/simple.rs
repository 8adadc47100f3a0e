use dijkstra_map::{UNREACHABLE, WeightedGraph};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut graph = WeightedGraph::new();
    for vertex in ["A", "B", "C"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge("A", "B", 5.0)?;
    graph.add_edge("B", "C", 3.0)?;
    graph.add_edge("A", "C", 10.0)?;

    info!(
        "built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut vertices: Vec<_> = graph.vertices().collect();
    vertices.sort();

    println!("Adjacency:");
    for &vertex in &vertices {
        let mut adjacent: Vec<_> = graph.neighbors(vertex).collect();
        adjacent.sort_by_key(|&(v, _)| v);
        let formatted: Vec<String> = adjacent
            .iter()
            .map(|(v, w)| format!("{} ({:.0})", v, w))
            .collect();
        println!("  {} -> {}", vertex, formatted.join(", "));
    }

    let distances = graph.shortest_paths(&"A")?;
    let mut sorted_distances: Vec<_> = distances.into_iter().collect();
    sorted_distances.sort_by_key(|&(v, _)| v);

    println!("Shortest distances from \"A\":");
    for (vertex, distance) in sorted_distances {
        if distance == UNREACHABLE {
            println!("  {} -> ∞", vertex);
        } else {
            println!("  {} -> {:.0}", vertex, distance);
        }
    }

    Ok(())
}

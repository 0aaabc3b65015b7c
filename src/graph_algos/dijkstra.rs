use crate::graph::{Adjacency, Graph, SearchResult};
use super::shortest_path::{into_result, shortest_path, NO_PARENT};


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The next node is found with a linear scan over the open nodes, O(V^2 + E).
/// Maps are small so the scan beats a heap, and ties resolve to the first node in graph order.
/// Nodes are closed once popped, the search stops once the goal is closed.
pub fn run_dijkstra(graph: &Graph, start: &str, goal: &str) -> SearchResult {
    let adj = Adjacency::new(graph);
    let Some((start_index, goal_index)) = adj.endpoints(start, goal) else {
        return SearchResult::missing_endpoint(start);
    };

    let (dist, parent, visited) = build_dijkstra_graph(&adj, start_index, Some(goal_index));

    let path = if dist[goal_index].is_finite() {
        shortest_path(&parent, start_index, goal_index)
    } else {
        Vec::new()
    };

    into_result(&adj, start, &path, &visited)
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns the best known distance and parent of every node along with the closing order
/// goal_index: stop once this node is closed, None explores every reachable node
fn build_dijkstra_graph(adj: &Adjacency, start_index: usize, goal_index: Option<usize>) -> (Vec<f64>, Vec<usize>, Vec<usize>) {
    let mut dist = vec![f64::INFINITY; adj.len()];
    let mut parent = vec![NO_PARENT; adj.len()];
    let mut closed = vec![false; adj.len()];
    let mut visited = Vec::new();

    dist[start_index] = 0.0;

    loop {
        // smallest open distance, first one wins on ties
        let mut current = None;
        let mut best = f64::INFINITY;
        for index in 0..adj.len() {
            if !closed[index] && dist[index] < best {
                best = dist[index];
                current = Some(index);
            }
        }

        let Some(current) = current else {
            break;
        };

        closed[current] = true;
        visited.push(current);
        if Some(current) == goal_index {
            break;
        }

        for &(next, edge_cost) in &adj.neighbors[current] {
            let alt = dist[current] + edge_cost;
            if alt < dist[next] {
                dist[next] = alt;
                parent[next] = current;
            }
        }
    }

    (dist, parent, visited)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::compute_path_cost;
    use crate::graph_algos::fixtures;

    #[test]
    fn test_dijkstra_takes_direct_edge() {
        // A-C costs 3, A-B-C costs 6
        let graph = fixtures::triangle();
        let result = run_dijkstra(&graph, "A", "C");
        assert_eq!(result.path, vec!["A", "C"]);
        assert_eq!(compute_path_cost(&graph, &result.path), 3.0);
        assert_eq!(compute_path_cost(&graph, &["A", "B", "C"].map(String::from)), 6.0);
    }

    #[test]
    fn test_dijkstra_without_direct_edge() {
        let graph = fixtures::graph(
            &[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0)],
            &[("A", "B", 1.0), ("B", "C", 5.0)],
        );
        let result = run_dijkstra(&graph, "A", "C");
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(compute_path_cost(&graph, &result.path), 6.0);
    }

    #[test]
    fn test_dijkstra_finds_cheapest_path() {
        let result = run_dijkstra(&fixtures::diamond(), "S", "G");
        assert_eq!(result.path, vec!["S", "B", "C", "G"]);
        // closing order follows distance: S 0, B 1, C 2, G 3
        assert_eq!(result.visited_nodes, vec!["S", "B", "C", "G"]);
    }

    #[test]
    fn test_build_dijkstra_graph_full() {
        let graph = fixtures::diamond();
        let adj = Adjacency::new(&graph);
        let (dist, _, visited) = build_dijkstra_graph(&adj, 0, None);

        // S A B C G
        assert_eq!(dist, vec![0.0, 10.0, 1.0, 2.0, 3.0]);
        assert_eq!(visited.len(), 5);
    }

    #[test]
    fn test_dijkstra_ties_resolve_in_graph_order() {
        // Both middle nodes cost 1, B comes first in the node list
        let graph = fixtures::graph(
            &[("S", 0.0, 0.0), ("B", 1.0, 1.0), ("A", 1.0, -1.0), ("G", 2.0, 0.0)],
            &[("S", "A", 1.0), ("S", "B", 1.0), ("A", "G", 1.0), ("B", "G", 1.0)],
        );
        let result = run_dijkstra(&graph, "S", "G");
        assert_eq!(result.visited_nodes, vec!["S", "B", "A", "G"]);
        assert_eq!(result.path, vec!["S", "B", "G"]);
    }
}

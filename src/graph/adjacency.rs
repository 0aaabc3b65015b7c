use crate::collections::FxIndexSet;
use super::{Graph, NodeId};


/// Index based view of a graph, built once per search
/// ids: node ids in graph order, the set index is the node index
/// neighbors: (neighbor_index, cost) for every open edge in both directions
pub(crate) struct Adjacency<'g> {
    pub ids: FxIndexSet<&'g str>,
    pub neighbors: Vec<Vec<(usize, f64)>>,
}

impl<'g> Adjacency<'g> {

    pub fn new(graph: &'g Graph) -> Self {
        let ids: FxIndexSet<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();
        let mut neighbors = vec![Vec::new(); ids.len()];

        for (from, to, cost) in Self::directed_edges(&ids, graph) {
            neighbors[from].push((to, cost));
        }

        Self { ids, neighbors }
    }

    /// Every open edge expanded into both directions, edges with unknown endpoints are skipped
    pub fn directed_edges(ids: &FxIndexSet<&str>, graph: &Graph) -> Vec<(usize, usize, f64)> {
        let mut edges = Vec::with_capacity(graph.edges.len() * 2);
        for edge in graph.open_edges() {
            let (Some(from), Some(to)) = (
                ids.get_index_of(edge.from.as_str()),
                ids.get_index_of(edge.to.as_str()),
            ) else {
                continue;
            };
            edges.push((from, to, edge.cost));
            edges.push((to, from, edge.cost));
        }
        edges
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    pub fn id(&self, index: usize) -> NodeId {
        self.ids.get_index(index).map(|id| id.to_string()).unwrap_or_default()
    }

    /// Convert a list of node indexes into node ids
    pub fn to_ids(&self, indexes: &[usize]) -> Vec<NodeId> {
        indexes.iter().map(|&index| self.id(index)).collect()
    }

    /// Look up both endpoints of a search
    pub fn endpoints(&self, start: &str, goal: &str) -> Option<(usize, usize)> {
        Some((self.index_of(start)?, self.index_of(goal)?))
    }
}

use crate::maximum_flow::graph::ResidualGraph;
use crate::maximum_flow::FlowNum;
use log::trace;
use std::collections::VecDeque;

/// Breadth-first search for a fewest-edges augmenting path.
///
/// Buffers are kept between searches so repeated calls on the same graph do not reallocate.
#[derive(Default)]
pub struct PathFinder {
    parent: Vec<usize>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl PathFinder {
    /// Searches from `source` over arcs with positive residual capacity and reports whether
    /// `sink` was reached. Arcs are scanned in ascending target order, so the discovered
    /// parents, and therefore the path, are the same for identical inputs.
    pub fn find_path<Flow: FlowNum>(&mut self, graph: &ResidualGraph<Flow>, source: usize, sink: usize) -> bool {
        let num_nodes = graph.num_nodes();
        self.parent.clear();
        self.parent.resize(num_nodes, usize::MAX);
        self.visited.clear();
        self.visited.resize(num_nodes, false);
        self.que.clear();

        self.que.push_back(source);
        self.visited[source] = true;

        while let Some(u) = self.que.pop_front() {
            for e in graph.neighbors(u) {
                if self.visited[e.to] || e.residual == Flow::zero() {
                    continue;
                }

                trace!("bfs reached {} from {}", e.to, u);
                self.visited[e.to] = true;
                self.parent[e.to] = u;
                if e.to == sink {
                    return true;
                }
                self.que.push_back(e.to);
            }
        }

        self.visited[sink]
    }

    /// Node that discovered `v` in the last search.
    #[inline]
    pub fn parent_of(&self, v: usize) -> Option<usize> {
        self.parent.get(v).copied().filter(|&u| u != usize::MAX)
    }

    /// Edges from `source` to `sink` along the last search's parent links, source first.
    /// Empty if `sink` was not reached.
    pub fn path(&self, source: usize, sink: usize) -> Vec<(usize, usize)> {
        let mut path = Vec::new();
        let mut v = sink;
        while v != source {
            match self.parent_of(v) {
                Some(u) => {
                    path.push((u, v));
                    v = u;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    // 0 -> 1 -> 3 and 0 -> 2 -> 3, plus a longer detour 0 -> 4 -> 5 -> 3
    #[fixture]
    fn diamond() -> ResidualGraph<i64> {
        let mut graph = ResidualGraph::new(6).unwrap();
        for (u, v, c) in [(0, 4, 9), (4, 5, 9), (5, 3, 9), (0, 2, 1), (2, 3, 1), (0, 1, 1), (1, 3, 1)] {
            graph.add_edge(u, v, c).unwrap();
        }
        graph
    }

    #[rstest]
    fn finds_the_shortest_path_with_lowest_indices_first(diamond: ResidualGraph<i64>) {
        let mut finder = PathFinder::default();
        assert!(finder.find_path(&diamond, 0, 3));
        assert_eq!(finder.path(0, 3), vec![(0, 1), (1, 3)]);
        assert_eq!(finder.parent_of(3), Some(1));
        assert_eq!(finder.parent_of(0), None);
    }

    #[rstest]
    fn skips_saturated_arcs(mut diamond: ResidualGraph<i64>) {
        diamond.augment(&[(0, 1), (1, 3)], 1).unwrap();
        diamond.augment(&[(0, 2), (2, 3)], 1).unwrap();

        let mut finder = PathFinder::default();
        assert!(finder.find_path(&diamond, 0, 3));
        assert_eq!(finder.path(0, 3), vec![(0, 4), (4, 5), (5, 3)]);
    }

    #[rstest]
    fn unreachable_sink_is_a_plain_false(diamond: ResidualGraph<i64>) {
        let mut finder = PathFinder::default();
        assert!(!finder.find_path(&diamond, 3, 0));
        assert!(finder.path(3, 0).is_empty());
    }

    #[test]
    fn follows_reverse_residual_arcs() {
        let mut graph = ResidualGraph::<i64>::new(3).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(2, 1, 1).unwrap();
        graph.augment(&[(2, 1)], 1).unwrap();

        let mut finder = PathFinder::default();
        assert!(finder.find_path(&graph, 0, 2));
        assert_eq!(finder.path(0, 2), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn buffers_are_reset_between_searches() {
        let mut graph = ResidualGraph::<i64>::new(3).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(1, 2, 1).unwrap();

        let mut finder = PathFinder::default();
        assert!(finder.find_path(&graph, 0, 2));
        graph.augment(&finder.path(0, 2), 1).unwrap();
        assert!(!finder.find_path(&graph, 0, 2));
        assert_eq!(finder.parent_of(2), None);
    }
}

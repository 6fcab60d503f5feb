use crate::maximum_flow::edmonds_karp::MaxFlow;
use crate::maximum_flow::error::{FlowError, GraphError};
use crate::maximum_flow::status::Status;
use crate::maximum_flow::FlowNum;
use std::collections::VecDeque;

#[derive(PartialEq, Debug, Clone)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub upper: Flow,
    pub residual: Flow,
}

/// Capacities and residual capacities of a flow network, one record per ordered node pair.
///
/// Each node keeps its outgoing arcs sorted by target, and every stored arc `(u, v)` has its
/// reverse `(v, u)` stored as well (with zero capacity unless added explicitly).
#[derive(Debug, Clone)]
pub struct ResidualGraph<Flow> {
    num_nodes: usize,
    adjacency: Vec<Vec<InsideEdge<Flow>>>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: FlowNum,
{
    pub fn new(num_nodes: usize) -> Result<Self, GraphError> {
        if num_nodes == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self { num_nodes, adjacency: vec![Vec::new(); num_nodes] })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of ordered pairs with a positive original capacity.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().flatten().filter(|e| e.upper > Flow::zero()).count()
    }

    /// Sets the capacity of `(from, to)`, replacing any earlier value. `(to, from)` is left alone.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < Flow::zero() {
            return Err(GraphError::NegativeCapacity { from, to });
        }

        let edge = self.entry(from, to);
        edge.upper = capacity;
        edge.residual = capacity;
        self.entry(to, from);
        Ok(())
    }

    pub fn capacity(&self, from: usize, to: usize) -> Flow {
        self.find(from, to).map_or(Flow::zero(), |e| e.upper)
    }

    pub fn residual_capacity(&self, from: usize, to: usize) -> Flow {
        self.find(from, to).map_or(Flow::zero(), |e| e.residual)
    }

    /// Arcs leaving `u` in ascending target order, zero-residual ones included.
    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<'_, InsideEdge<Flow>> {
        self.adjacency[u].iter()
    }

    /// Pushes `amount` along every edge of `path`, which must be a simple chain of stored arcs.
    ///
    /// The whole path is validated before anything is written, so the graph is unchanged on error.
    pub fn augment(&mut self, path: &[(usize, usize)], amount: Flow) -> Result<(), FlowError<Flow>> {
        let mut on_path = vec![false; self.num_nodes];
        for (i, &(u, v)) in path.iter().enumerate() {
            let residual = self.residual_capacity(u, v);
            let broken_chain = match i {
                0 => false,
                _ => path[i - 1].1 != u,
            };
            if u == v || self.find(u, v).is_none() || broken_chain || amount < Flow::zero() || amount > residual || on_path[v] {
                return Err(FlowError::InvalidAugment { from: u, to: v, amount, residual });
            }
            on_path[u] = true;
            on_path[v] = true;
            if self.residual_capacity(v, u).checked_add(&amount).is_none() {
                let partial = MaxFlow { status: Status::Overflow, ..MaxFlow::default() };
                return Err(FlowError::CapacityOverflow { iterations: 0, partial: Box::new(partial) });
            }
        }

        for &(u, v) in path {
            self.entry(u, v).residual -= amount;
            self.entry(v, u).residual += amount;
        }
        Ok(())
    }

    /// `(from, to, flow)` for every pair with positive original capacity, ordered by `(from, to)`.
    ///
    /// Flow pushed back across an antiparallel edge is netted out, so values are never negative.
    pub fn actual_flows(&self) -> Vec<(usize, usize, Flow)> {
        let mut flows = Vec::new();
        for (u, edges) in self.adjacency.iter().enumerate() {
            for e in edges.iter().filter(|e| e.upper > Flow::zero()) {
                let flow = if e.residual < e.upper { e.upper - e.residual } else { Flow::zero() };
                flows.push((u, e.to, flow));
            }
        }
        flows
    }

    /// Nodes reachable from `source` over arcs with positive residual capacity, ascending.
    ///
    /// After a run has finished this is the source side of a minimum cut.
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        if source >= self.num_nodes {
            return Vec::new();
        }

        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            for e in self.neighbors(u) {
                if !visited[e.to] && e.residual > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }

        (0..self.num_nodes).filter(|&u| visited[u]).collect()
    }

    /// Sum of original capacities on edges leaving `side`. `None` if the sum overflows.
    pub fn cut_capacity(&self, side: &[usize]) -> Option<Flow> {
        let mut inside = vec![false; self.num_nodes];
        side.iter().filter(|&&u| u < self.num_nodes).for_each(|&u| inside[u] = true);

        let mut capacity = Flow::zero();
        for u in (0..self.num_nodes).filter(|&u| inside[u]) {
            for e in self.neighbors(u).filter(|e| !inside[e.to]) {
                capacity = capacity.checked_add(&e.upper)?;
            }
        }
        Some(capacity)
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.num_nodes {
            return Err(GraphError::InvalidVertex { vertex, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    fn find(&self, from: usize, to: usize) -> Option<&InsideEdge<Flow>> {
        let edges = self.adjacency.get(from)?;
        edges.binary_search_by_key(&to, |e| e.to).ok().map(|i| &edges[i])
    }

    // returns the arc record for (from, to), inserting a zero-capacity one in sorted position
    fn entry(&mut self, from: usize, to: usize) -> &mut InsideEdge<Flow> {
        let edges = &mut self.adjacency[from];
        let i = match edges.binary_search_by_key(&to, |e| e.to) {
            Ok(i) => i,
            Err(i) => {
                edges.insert(i, InsideEdge { to, upper: Flow::zero(), residual: Flow::zero() });
                i
            }
        };
        &mut edges[i]
    }
}

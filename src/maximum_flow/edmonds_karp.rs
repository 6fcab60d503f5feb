use crate::maximum_flow::error::{FlowError, GraphError};
use crate::maximum_flow::graph::ResidualGraph;
use crate::maximum_flow::path_finder::PathFinder;
use crate::maximum_flow::status::Status;
use crate::maximum_flow::trace::{IterationRecord, Trace};
use crate::maximum_flow::FlowNum;
use log::{debug, info, warn};
use num_traits::Zero;
use serde::Serialize;

/// Outcome of a run: the flow value, why the run stopped and every iteration it performed.
#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct MaxFlow<Flow> {
    pub status: Status,
    pub flow: Flow,
    pub trace: Trace<Flow>,
}

impl<Flow: Zero> Default for MaxFlow<Flow> {
    fn default() -> Self {
        Self { status: Status::default(), flow: Flow::zero(), trace: Trace::default() }
    }
}

#[derive(Default)]
pub struct EdmondsKarp {
    finder: PathFinder,
    iteration_limit: Option<usize>,
}

impl EdmondsKarp {
    /// Stops after `limit` augmenting iterations with [`Status::IterationLimit`].
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn solve<Flow: FlowNum>(&mut self, source: usize, sink: usize, graph: &mut ResidualGraph<Flow>) -> Result<MaxFlow<Flow>, FlowError<Flow>> {
        for vertex in [source, sink] {
            if vertex >= graph.num_nodes() {
                return Err(GraphError::InvalidVertex { vertex, num_nodes: graph.num_nodes() }.into());
            }
        }

        let mut flow = Flow::zero();
        let mut trace = Trace::default();
        let mut iterations = 0;

        if source != sink {
            while self.finder.find_path(graph, source, sink) {
                if self.iteration_limit.is_some_and(|limit| iterations >= limit) {
                    warn!("stopping after {} iterations with flow {}", iterations, flow);
                    return Ok(MaxFlow { status: Status::IterationLimit, flow, trace });
                }

                let path = self.finder.path(source, sink);
                let delta = path.iter().fold(Flow::max_value(), |delta, &(u, v)| delta.min(graph.residual_capacity(u, v)));

                let total = match flow.checked_add(&delta) {
                    Some(total) => total,
                    None => return Err(overflow(iterations, flow, trace)),
                };
                match graph.augment(&path, delta) {
                    Ok(()) => {}
                    Err(FlowError::CapacityOverflow { .. }) => return Err(overflow(iterations, flow, trace)),
                    Err(e) => return Err(e),
                }

                iterations += 1;
                flow = total;
                debug!("iteration {}: pushed {} along {:?}, total {}", iterations, delta, path, flow);
                trace.push(IterationRecord { iteration: iterations, path, path_flow: delta, cumulative_flow: flow });
            }
        }

        trace.push(IterationRecord { iteration: iterations + 1, path: Vec::new(), path_flow: Flow::zero(), cumulative_flow: flow });
        info!("maximum flow from {} to {} is {} after {} iterations", source, sink, flow, iterations);
        Ok(MaxFlow { status: Status::Optimal, flow, trace })
    }
}

fn overflow<Flow: FlowNum>(iterations: usize, flow: Flow, trace: Trace<Flow>) -> FlowError<Flow> {
    warn!("flow overflowed after {} iterations", iterations);
    FlowError::CapacityOverflow { iterations, partial: Box::new(MaxFlow { status: Status::Overflow, flow, trace }) }
}

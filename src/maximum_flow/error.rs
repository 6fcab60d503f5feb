use crate::maximum_flow::edmonds_karp::MaxFlow;
use thiserror::Error;

/// Rejected graph construction input. Nothing is modified when one is returned.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("a flow network needs at least one node")]
    EmptyGraph,

    #[error("node {vertex} is out of range for a network with {num_nodes} nodes")]
    InvalidVertex { vertex: usize, num_nodes: usize },

    #[error("edge ({from}, {to}) has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },
}

#[derive(Error, Debug)]
pub enum FlowError<Flow> {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Pushing more than an arc can carry. Only a broken caller gets here.
    #[error("cannot push {amount} along ({from}, {to}) with residual capacity {residual}")]
    InvalidAugment { from: usize, to: usize, amount: Flow, residual: Flow },

    /// The flow type ran out of range. `partial` holds the flow and trace accumulated before the abort.
    #[error("flow value overflowed after {iterations} augmenting iterations")]
    CapacityOverflow { iterations: usize, partial: Box<MaxFlow<Flow>> },
}

pub mod edmonds_karp;
pub mod error;
pub mod graph;
pub mod path_finder;
pub mod status;
pub mod trace;

use num_traits::{Bounded, CheckedAdd, CheckedSub, NumAssign};
use std::fmt::{Debug, Display};

use crate::maximum_flow::edmonds_karp::{EdmondsKarp, MaxFlow};
use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::ResidualGraph;

/// Numeric bound shared by every flow type the engine accepts.
pub trait FlowNum: NumAssign + Ord + Copy + Bounded + CheckedAdd + CheckedSub + Debug + Display {}

impl<T> FlowNum for T where T: NumAssign + Ord + Copy + Bounded + CheckedAdd + CheckedSub + Debug + Display {}

/// Runs Edmonds-Karp from `source` to `sink` without an iteration limit.
pub fn compute_max_flow<Flow: FlowNum>(graph: &mut ResidualGraph<Flow>, source: usize, sink: usize) -> Result<MaxFlow<Flow>, FlowError<Flow>> {
    EdmondsKarp::default().solve(source, sink, graph)
}

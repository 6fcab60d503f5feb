//! Edmonds-Karp maximum flow with a per-iteration trace.
//!
//! The engine lives in [`maximum_flow`]; [`instance`] loads problem files for the `max-flow` binary.

pub mod instance;
pub mod maximum_flow;

pub use maximum_flow::compute_max_flow;
pub use maximum_flow::edmonds_karp::{EdmondsKarp, MaxFlow};
pub use maximum_flow::error::{FlowError, GraphError};
pub use maximum_flow::graph::ResidualGraph;
pub use maximum_flow::status::Status;
pub use maximum_flow::trace::{IterationRecord, Trace};

use serde::Serialize;

#[derive(Default, PartialEq, Eq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Optimal,
    // stopped by the caller's iteration guard; the flow is feasible but may not be maximum
    IterationLimit,
    Overflow,
}

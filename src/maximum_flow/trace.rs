use serde::Serialize;
use std::slice::Iter;

/// One augmenting iteration, or the terminal "no further path" marker.
#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct IterationRecord<Flow> {
    pub iteration: usize,
    pub path: Vec<(usize, usize)>,
    pub path_flow: Flow,
    pub cumulative_flow: Flow,
}

impl<Flow> IterationRecord<Flow> {
    /// The marker closing a completed run is the only record with an empty path.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.path.is_empty()
    }

    /// The path as a node sequence, source first. Empty for the terminal marker.
    pub fn nodes(&self) -> Vec<usize> {
        match self.path.first() {
            Some(&(source, _)) => std::iter::once(source).chain(self.path.iter().map(|&(_, v)| v)).collect(),
            None => Vec::new(),
        }
    }
}

/// Append-only log of a run, in the order the iterations happened.
#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Trace<Flow> {
    records: Vec<IterationRecord<Flow>>,
}

impl<Flow> Default for Trace<Flow> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<Flow> Trace<Flow> {
    pub(crate) fn push(&mut self, record: IterationRecord<Flow>) {
        debug_assert!(!self.is_complete(), "trace already terminated");
        self.records.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, IterationRecord<Flow>> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&IterationRecord<Flow>> {
        self.records.last()
    }

    /// Whether the run ended because no augmenting path was left.
    pub fn is_complete(&self) -> bool {
        self.records.last().is_some_and(IterationRecord::is_terminal)
    }

    /// Records that actually pushed flow.
    pub fn augmenting(&self) -> impl Iterator<Item = &IterationRecord<Flow>> {
        self.records.iter().filter(|record| !record.is_terminal())
    }
}

impl<'a, Flow> IntoIterator for &'a Trace<Flow> {
    type Item = &'a IterationRecord<Flow>;
    type IntoIter = Iter<'a, IterationRecord<Flow>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

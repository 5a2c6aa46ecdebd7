use crate::metrics::{
    Aggregate,
    StatusRecord,
};
use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError,
};

/// Thread-safe accumulator for one collection run.
///
/// Clones share the same state, so every reply handler can hold its own
/// handle. Appending a record and updating both rollups happens under a
/// single lock, readers never see one without the other.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    aggregate: Aggregate,
    sealed: bool,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one decoded reply. Returns `false`, leaving the state
    /// untouched, once the run has been sealed.
    pub fn on_record(&self, record: StatusRecord) -> bool {
        let mut state = self.lock();
        if state.sealed {
            debug!(server = %record.server_name, "collection window closed, discarding late reply");
            return false;
        }
        trace!(server = %record.server_name, cluster = %record.cluster_name, "accounting reply");
        state.aggregate.add(record);
        true
    }

    /// Number of records accepted so far.
    pub fn len(&self) -> usize {
        self.lock().aggregate.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A consistent copy of the current state.
    pub fn snapshot(&self) -> Aggregate {
        self.lock().aggregate.clone()
    }

    /// Closes the run and hands out everything collected. Later calls to
    /// [`Aggregator::on_record`] are rejected.
    pub fn seal(&self) -> Aggregate {
        let mut state = self.lock();
        state.sealed = true;
        std::mem::take(&mut state.aggregate)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // the state is plain data, a panicking writer cannot leave it half-updated
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

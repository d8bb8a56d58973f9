//! Outgoing routes: every uploaded record ends up in exactly one of two
//! named sinks, `success` or `failure`.

use crate::record::Record;
use std::sync::{Arc, Mutex};

/// A destination for routed records. Implementations must tolerate calls
/// from multiple uploader threads.
pub trait RecordSink: Send + Sync {
    fn accept(&self, record: Record);
}

/// The two outgoing paths of an uploader. A record is transferred to exactly
/// one of them per invocation, never both, never neither.
#[derive(Clone)]
pub struct Routes {
    pub success: Arc<dyn RecordSink>,
    pub failure: Arc<dyn RecordSink>,
}

impl Routes {
    pub fn new(success: Arc<dyn RecordSink>, failure: Arc<dyn RecordSink>) -> Self {
        Self { success, failure }
    }
}

/// Sink that keeps every routed record in memory. Used by the CLI to report
/// outcomes and by tests to assert routing.
#[derive(Default)]
pub struct CollectedRecords {
    records: Mutex<Vec<Record>>,
}

impl CollectedRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the collected records, in arrival order.
    pub fn names(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect()
    }

    /// Drains and returns everything collected so far.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

impl RecordSink for CollectedRecords {
    fn accept(&self, record: Record) {
        self.records.lock().unwrap().push(record);
    }
}

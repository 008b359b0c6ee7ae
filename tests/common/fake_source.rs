//! Scripted [`RecordSource`] with per-record latency, a call log and failure
//! injection, serving the fixture record set.

use async_trait::async_trait;
use parking_lot::Mutex;
use recordview::fixtures::FixtureData;
use recordview::records::{RecordDetail, RecordId, RecordSummary};
use recordview::source::{FetchError, RecordSource};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const LIST_LATENCY: Duration = Duration::from_millis(650);
pub const DETAIL_LATENCY: Duration = Duration::from_millis(1100);

pub struct FakeSource {
    data: FixtureData,
    list_latency: Duration,
    detail_latency: Duration,
    latency_overrides: Mutex<HashMap<RecordId, Duration>>,
    failing: Mutex<HashSet<RecordId>>,
    fail_list: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            data: FixtureData::generate(123),
            list_latency: LIST_LATENCY,
            detail_latency: DETAIL_LATENCY,
            latency_overrides: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            fail_list: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_detail_latency(self, id: &str, latency: Duration) -> Self {
        self.latency_overrides
            .lock()
            .insert(RecordId::from(id), latency);
        self
    }

    pub fn data(&self) -> &FixtureData {
        &self.data
    }

    pub fn set_list_failing(&self, failing: bool) {
        self.fail_list.store(failing, Ordering::SeqCst);
    }

    pub fn set_detail_failing(&self, id: &str, failing: bool) {
        let mut set = self.failing.lock();
        if failing {
            set.insert(RecordId::from(id));
        } else {
            set.remove(&RecordId::from(id));
        }
    }

    /// Every call in order: `"list"` or `"detail:<id>"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls.lock().iter().filter(|c| *c == "list").count()
    }

    pub fn detail_calls(&self, id: &str) -> usize {
        let needle = format!("detail:{}", id);
        self.calls.lock().iter().filter(|c| **c == needle).count()
    }
}

#[async_trait]
impl RecordSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn list(&self) -> Result<Vec<RecordSummary>, FetchError> {
        self.calls.lock().push("list".to_string());
        tokio::time::sleep(self.list_latency).await;

        if self.fail_list.load(Ordering::SeqCst) {
            return Err(FetchError::Other("injected list failure".to_string()));
        }
        Ok(self.data.summaries())
    }

    async fn detail(&self, id: &RecordId) -> Result<Option<RecordDetail>, FetchError> {
        self.calls.lock().push(format!("detail:{}", id));
        let latency = self
            .latency_overrides
            .lock()
            .get(id)
            .copied()
            .unwrap_or(self.detail_latency);
        tokio::time::sleep(latency).await;

        if self.failing.lock().contains(id) {
            return Err(FetchError::Other(format!("injected failure for {}", id)));
        }
        Ok(self.data.find(id).cloned())
    }
}

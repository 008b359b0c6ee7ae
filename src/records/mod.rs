//! Record data model shared by the fixture server, the client and the UI.

mod types;

pub use types::{RecordDetail, RecordId, RecordResponse, RecordSummary, RecordsResponse};

use std::fmt;

use crate::records::RecordId;

const RECORDS: &str = "records";

/// Cache key: an ordered list of segments, compared segment-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Key of the record list, and prefix of every record key.
    pub fn records() -> Self {
        Self(vec![RECORDS.to_string()])
    }

    /// Key of a single record: `("records", id)`.
    pub fn record(id: &RecordId) -> Self {
        Self(vec![RECORDS.to_string(), id.as_str().to_string()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when `prefix` matches the leading segments of this key.
    /// A key is a prefix of itself.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_starts_with_records_prefix() {
        let key = QueryKey::record(&RecordId::new("3"));
        assert!(key.starts_with(&QueryKey::records()));
        assert!(QueryKey::records().starts_with(&QueryKey::records()));
    }

    #[test]
    fn prefix_matching_is_segment_wise() {
        let key = QueryKey::new(["recordsx", "3"]);
        assert!(!key.starts_with(&QueryKey::records()));
        assert!(!QueryKey::records().starts_with(&QueryKey::record(&RecordId::new("3"))));
    }

    #[test]
    fn display_joins_segments() {
        assert_eq!(QueryKey::record(&RecordId::new("3")).to_string(), "records/3");
        assert_eq!(QueryKey::new(["a"]).segments(), ["a".to_string()]);
    }
}

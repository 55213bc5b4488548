use serde::{Deserialize, Serialize};

use crate::Record;

/// A coarse, caller-defined filter applied on top of free-text search.
///
/// A filter without a `value` is the "all" filter and excludes nothing.
/// Otherwise a record is kept iff the text of `field` equals `value`
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickFilter {
    pub tag: String,
    pub label: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl QuickFilter {
    pub const ALL: &'static str = "all";

    pub fn all() -> Self {
        Self {
            tag: Self::ALL.to_string(),
            label: "All".to_string(),
            field: String::new(),
            value: None,
        }
    }

    pub fn matching(
        tag: impl Into<String>,
        label: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
            field: field.into(),
            value: Some(value.into()),
        }
    }

    /// `all` / `active` / `inactive` on the `status` field.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::all(),
            Self::matching("active", "Active", "status", "Active"),
            Self::matching("inactive", "Inactive", "status", "Inactive"),
        ]
    }

    pub fn matches(&self, record: &Record) -> bool {
        match &self.value {
            None => true,
            Some(value) => record
                .get(&self.field)
                .is_some_and(|v| v.to_text() == *value),
        }
    }

    /// Number of records this filter keeps, ignoring every other filter.
    pub fn count(&self, data: &[Record]) -> usize {
        data.iter().filter(|r| self.matches(r)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("status", "Active"),
            Record::new().with("id", 2).with("status", "Inactive"),
            Record::new().with("id", 3).with("status", "Active"),
            Record::new().with("id", 4),
        ]
    }

    #[test]
    fn all_keeps_everything() {
        assert_eq!(QuickFilter::all().count(&data()), 4);
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let active = QuickFilter::matching("active", "Active", "status", "Active");
        assert_eq!(active.count(&data()), 2);

        let lowercase = QuickFilter::matching("active", "Active", "status", "active");
        assert_eq!(lowercase.count(&data()), 0);
    }
}

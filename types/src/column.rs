use serde::{Deserialize, Serialize};

/// Input used to filter a column from the filter panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFilter {
    /// Pick one of the column's distinct values.
    #[default]
    Select,
    Text,
    Number,
    Date,
}

/// Schema entry describing how one field of a [`Record`](crate::Record) is
/// labelled, sorted and filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub filter: ColumnFilter,
    #[serde(default)]
    pub width: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            filterable: false,
            filter: ColumnFilter::default(),
            width: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Make the column filterable through the given input.
    pub fn filter_by(mut self, filter: ColumnFilter) -> Self {
        self.filterable = true;
        self.filter = filter;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }
}

mod column;
pub mod config;
mod error;
mod page_size;
mod quick_filter;
mod record;
mod value;

pub use column::{Column, ColumnFilter};
pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use page_size::PageSize;
pub use quick_filter::QuickFilter;
pub use record::Record;
pub use value::Value;

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;

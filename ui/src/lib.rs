//! Dashboard building blocks: the [`DataTable`] and the smaller controls it
//! and the pages are made of.

pub mod accordion;
pub mod breadcrumb;
pub mod calendar;
pub mod chart;
pub mod command;
pub mod filter;
pub mod modal;
pub mod pagination;
pub mod popover;
pub mod search;
pub mod sort;
pub mod stats_card;
pub mod table;
pub mod time_picker;

pub use accordion::{Accordion, AccordionItem, AccordionMode};
pub use breadcrumb::{Breadcrumb, Crumb, crumbs_for};
pub use calendar::Calendar;
pub use chart::{AreaChart, ChartPoint};
pub use command::{Command, CommandPalette};
pub use filter::{FilterField, FilterKind, FilterPanel};
pub use modal::{Modal, ModalSize};
pub use pagination::Pagination;
pub use popover::{Popover, PopoverAlign};
pub use search::SearchInput;
pub use sort::{SortOption, SortSelect};
pub use stats_card::{StatsCard, StatsVariant, Trend};
pub use table::{ActionKind, CellRenderer, DataTable, RowAction, TableOptions, Tone};
pub use time_picker::TimePicker;

use dioxus::prelude::*;
use types::{Record, Result};
use ui::ChartPoint;

const USERS: &str = include_str!("../assets/data/users.json");
const PRODUCTS: &str = include_str!("../assets/data/products.json");
const ORDERS: &str = include_str!("../assets/data/orders.json");
const RECENT_ORDERS: &str = include_str!("../assets/data/recent_orders.json");
const TOP_PRODUCTS: &str = include_str!("../assets/data/top_products.json");
const REPORT_TYPES: &str = include_str!("../assets/data/report_types.json");
const RECENT_REPORTS: &str = include_str!("../assets/data/recent_reports.json");
const SALES: &str = include_str!("../assets/data/sales.json");
const MONTHLY_SALES: &str = include_str!("../assets/data/monthly_sales.json");
const USER_GROWTH: &str = include_str!("../assets/data/user_growth.json");
const CONVERSION: &str = include_str!("../assets/data/conversion.json");

/// The mock data bundled with the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub users: Vec<Record>,
    pub products: Vec<Record>,
    pub orders: Vec<Record>,
    pub recent_orders: Vec<Record>,
    pub top_products: Vec<Record>,
    pub report_types: Vec<Record>,
    pub recent_reports: Vec<Record>,
    pub sales: Vec<ChartPoint>,
    pub monthly_sales: Vec<ChartPoint>,
    pub user_growth: Vec<ChartPoint>,
    pub conversion: Vec<ChartPoint>,
}

impl Datasets {
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            users: Record::list_from_json(USERS)?,
            products: Record::list_from_json(PRODUCTS)?,
            orders: Record::list_from_json(ORDERS)?,
            recent_orders: Record::list_from_json(RECENT_ORDERS)?,
            top_products: Record::list_from_json(TOP_PRODUCTS)?,
            report_types: Record::list_from_json(REPORT_TYPES)?,
            recent_reports: Record::list_from_json(RECENT_REPORTS)?,
            sales: series(SALES)?,
            monthly_sales: series(MONTHLY_SALES)?,
            user_growth: series(USER_GROWTH)?,
            conversion: series(CONVERSION)?,
        })
    }
}

fn series(json: &str) -> Result<Vec<ChartPoint>> {
    Ok(serde_json::from_str(json)?)
}

/// Reactive handles to the collections pages can edit.
#[derive(Clone, Copy)]
pub struct Store {
    pub users: Signal<Vec<Record>>,
    pub products: Signal<Vec<Record>>,
    pub orders: Signal<Vec<Record>>,
    pub recent_orders: Signal<Vec<Record>>,
    pub fixed: Signal<Datasets>,
}

impl Store {
    pub fn new(data: Datasets) -> Self {
        Self {
            users: Signal::new(data.users.clone()),
            products: Signal::new(data.products.clone()),
            orders: Signal::new(data.orders.clone()),
            recent_orders: Signal::new(data.recent_orders.clone()),
            fixed: Signal::new(data),
        }
    }
}

pub fn use_store() -> Store {
    use_context::<Store>()
}

/// Removes the record at `index`, ignoring indices that went stale.
pub fn remove_record(records: &mut Vec<Record>, index: usize) -> Option<Record> {
    (index < records.len()).then(|| records.remove(index))
}

/// Next id in a `PREFIX-NNN` sequence.
pub fn next_id(records: &[Record], prefix: &str) -> String {
    let highest = records
        .iter()
        .filter_map(|r| {
            r.text("id")
                .strip_prefix(prefix)
                .and_then(|n| n.trim_start_matches('-').parse::<u32>().ok())
        })
        .max()
        .unwrap_or(0);
    format!("{prefix}-{:03}", highest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_datasets_parse() {
        let data = Datasets::bundled().unwrap();
        assert_eq!(data.users.len(), 5);
        assert_eq!(data.products.len(), 5);
        assert_eq!(data.orders.len(), 5);
        assert_eq!(data.report_types.len(), 6);
        assert_eq!(data.monthly_sales.len(), 12);
        assert_eq!(data.users[2].text("status"), "Inactive");
        assert_eq!(data.products[0].text("stock"), "45");
        assert_eq!(data.products[0].text("rating"), "4.8");
    }

    #[test]
    fn removal_ignores_stale_indices() {
        let mut records = Datasets::bundled().unwrap().users;
        let removed = remove_record(&mut records, 1).unwrap();
        assert_eq!(removed.text("id"), "USR-002");
        assert_eq!(records.len(), 4);
        assert!(remove_record(&mut records, 4).is_none());
    }

    #[test]
    fn ids_continue_the_sequence() {
        let users = Datasets::bundled().unwrap().users;
        assert_eq!(next_id(&users, "USR"), "USR-006");
        assert_eq!(next_id(&[], "PRD"), "PRD-001");
    }
}

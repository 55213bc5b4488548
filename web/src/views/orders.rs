use dioxus::prelude::*;
use types::{Column, ColumnFilter, QuickFilter};

use super::components::{PageHeader, RecordTable};
use crate::data::use_store;

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "Order ID"),
        Column::new("customer", "Customer"),
        Column::new("email", "Email"),
        Column::new("products", "Products"),
        Column::new("total", "Total"),
        Column::new("status", "Status"),
        Column::new("payment", "Payment Method").filterable(true),
        Column::new("date", "Order Date").filter_by(ColumnFilter::Date),
        Column::new("actions", "Actions").sortable(false),
    ]
}

fn status_filters() -> Vec<QuickFilter> {
    let mut filters = vec![QuickFilter::all()];
    for status in ["Pending", "Shipped", "Completed", "Cancelled"] {
        filters.push(QuickFilter::matching(status.to_lowercase(), status, "status", status));
    }
    filters
}

#[component]
pub fn Orders() -> Element {
    let store = use_store();

    rsx! {
        div {
            PageHeader {
                title: "Orders Management",
                subtitle: "View and manage customer orders and their status.",
            }
            RecordTable {
                title: "Orders List",
                noun: "order",
                data: store.orders,
                columns: columns(),
                quick_filters: status_filters(),
            }
        }
    }
}

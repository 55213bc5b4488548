use dioxus::prelude::*;
use types::{Column, ColumnFilter, QuickFilter};

use super::components::{PageHeader, RecordTable};
use crate::data::use_store;

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "Product ID"),
        Column::new("name", "Product Name"),
        Column::new("category", "Category").filterable(true),
        Column::new("price", "Price"),
        Column::new("stock", "Stock").filter_by(ColumnFilter::Number),
        Column::new("status", "Status").filterable(true),
        Column::new("rating", "Rating"),
        Column::new("sales", "Sales"),
        Column::new("actions", "Actions").sortable(false),
    ]
}

fn stock_filters() -> Vec<QuickFilter> {
    vec![
        QuickFilter::all(),
        QuickFilter::matching("in-stock", "In Stock", "status", "In Stock"),
        QuickFilter::matching("low-stock", "Low Stock", "status", "Low Stock"),
        QuickFilter::matching("out-of-stock", "Out of Stock", "status", "Out of Stock"),
    ]
}

#[component]
pub fn Products() -> Element {
    let store = use_store();

    rsx! {
        div {
            PageHeader {
                title: "Products Management",
                subtitle: "Manage your product catalog and inventory.",
            }
            RecordTable {
                title: "Products List",
                noun: "product",
                data: store.products,
                columns: columns(),
                quick_filters: stock_filters(),
            }
        }
    }
}

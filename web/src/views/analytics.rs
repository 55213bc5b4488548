use dioxus::prelude::*;
use types::Column;
use ui::{AreaChart, ChartPoint, DataTable, StatsCard, TableOptions, Trend};

use crate::data::use_store;

fn top_product_columns() -> Vec<Column> {
    vec![
        Column::new("rank", "Rank").width("60px"),
        Column::new("name", "Product Name"),
        Column::new("sales", "Sales"),
        Column::new("revenue", "Revenue"),
    ]
}

/// A plain table: no search, filters, sorting or paging.
fn static_table() -> TableOptions {
    TableOptions {
        searchable: false,
        filterable: false,
        sortable: false,
        pagination: false,
        ..TableOptions::default()
    }
}

#[component]
fn ChartCard(#[props(into)] title: String, data: Vec<ChartPoint>, #[props(into)] color: String) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
            }
            AreaChart { data, color }
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    let store = use_store();
    let top_products = use_signal(|| store.fixed.read().top_products.clone());
    let fixed = store.fixed.read();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Analytics" }
                    p { class: "page-subtitle", "Detailed insights and analytics about your business performance." }
                }
            }

            div { class: "grid grid-cols-4",
                StatsCard { title: "Total Revenue", value: "$1,234,567", description: "This year", icon: "$", trend: Trend::up(23.5) }
                StatsCard { title: "Total Orders", value: "15,432", description: "This year", icon: "🛒", trend: Trend::up(18.2) }
                StatsCard { title: "Active Users", value: "8,945", description: "This month", icon: "👥", trend: Trend::up(12.7) }
                StatsCard { title: "Conversion Rate", value: "4.7%", description: "This month", icon: "↗", trend: Trend::up(2.1) }
            }

            div { class: "grid grid-cols-2",
                ChartCard { title: "Revenue Trend", data: fixed.monthly_sales.clone(), color: "#10b981" }
                ChartCard { title: "User Growth", data: fixed.user_growth.clone(), color: "#3b82f6" }
            }

            div { class: "grid grid-cols-2",
                ChartCard { title: "Conversion Rate", data: fixed.conversion.clone(), color: "#f59e0b" }
                DataTable {
                    title: "Top Products",
                    data: top_products,
                    columns: top_product_columns(),
                    options: static_table(),
                    quick_filters: Vec::new(),
                }
            }

            div { class: "grid grid-cols-3",
                StatsCard { title: "Page Views", value: "2.4M", description: "+20.1% from last month", icon: "👁" }
                StatsCard { title: "Average Rating", value: "4.8", description: "+0.2 from last month", icon: "★" }
                StatsCard { title: "Active Sessions", value: "1,234", description: "+12.5% from last month", icon: "⚡" }
            }
        }
    }
}

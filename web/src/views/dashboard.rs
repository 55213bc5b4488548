use dioxus::prelude::*;
use types::{Column, QuickFilter};
use ui::{AreaChart, DataTable, StatsCard, StatsVariant, TableOptions, Trend};

use super::components::standard_cells;
use crate::data::use_store;
use crate::{Route, use_app};

struct QuickAction {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    to: Route,
}

fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title: "Add User",
            description: "Create new user account",
            icon: "👥",
            to: Route::Users {},
        },
        QuickAction {
            title: "Add Product",
            description: "Add new product to catalog",
            icon: "📦",
            to: Route::Products {},
        },
        QuickAction {
            title: "View Orders",
            description: "Check recent orders",
            icon: "🛒",
            to: Route::Orders {},
        },
        QuickAction {
            title: "Analytics",
            description: "View detailed analytics",
            icon: "📈",
            to: Route::Analytics {},
        },
        QuickAction {
            title: "Generate Report",
            description: "Create new report",
            icon: "📄",
            to: Route::Reports {},
        },
    ]
}

fn order_columns() -> Vec<Column> {
    vec![
        Column::new("id", "Order ID"),
        Column::new("customer", "Customer"),
        Column::new("product", "Product"),
        Column::new("amount", "Amount"),
        Column::new("status", "Status"),
        Column::new("date", "Date"),
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let app = use_app();
    let store = use_store();
    let admin = app.config.read().admin.name.clone();
    let first_name = admin.split_whitespace().next().unwrap_or("Admin").to_string();
    let sales = store.fixed.read().sales.clone();
    let options = TableOptions {
        filterable: false,
        show_page_size_selector: false,
        ..TableOptions::from_defaults(&app.config.read().table)
    };

    rsx! {
        div {
            div { class: "hero",
                h1 { class: "hero-title", "Welcome back, {first_name}! 👋" }
                p { class: "hero-subtitle",
                    "Here's what's happening with your business today. Monitor your key metrics and stay on top of everything."
                }
            }

            div { class: "grid grid-cols-4",
                StatsCard {
                    title: "Total Users",
                    value: "2,543",
                    description: "Active users this month",
                    icon: "👥",
                    trend: Trend::up(12.0),
                    variant: StatsVariant::Gradient,
                }
                StatsCard {
                    title: "Total Orders",
                    value: "1,234",
                    description: "Orders this month",
                    icon: "🛒",
                    trend: Trend::up(8.0),
                    variant: StatsVariant::Elevated,
                }
                StatsCard {
                    title: "Revenue",
                    value: "$45,231",
                    description: "Total revenue this month",
                    icon: "$",
                    trend: Trend::up(15.0),
                    variant: StatsVariant::Gradient,
                }
                StatsCard {
                    title: "Growth",
                    value: "+23.5%",
                    description: "Compared to last month",
                    icon: "↗",
                    trend: Trend::up(23.5),
                    variant: StatsVariant::Elevated,
                }
            }

            div { class: "dashboard-grid",
                for action in quick_actions() {
                    Link {
                        key: "{action.title}",
                        to: action.to,
                        class: "dashboard-card",
                        span { class: "dashboard-card-icon", "{action.icon}" }
                        h3 { class: "dashboard-card-title", "{action.title}" }
                        p { class: "dashboard-card-desc", "{action.description}" }
                    }
                }
            }

            div { class: "grid grid-cols-2",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Sales Overview" }
                        Link { to: Route::Analytics {}, class: "btn btn-sm btn-link", "View Details ↗" }
                    }
                    AreaChart { data: sales, color: "#3b82f6" }
                }
                div { class: "stack",
                    h2 { class: "section-title", "Performance Metrics" }
                    StatsCard { title: "Products", value: "156", description: "Total products in catalog", icon: "📦" }
                    StatsCard { title: "Page Views", value: "12.5K", description: "Views today", icon: "👁" }
                    StatsCard { title: "Rating", value: "4.8", description: "Average customer rating", icon: "★" }
                    StatsCard { title: "Conversion", value: "3.2%", description: "Conversion rate", icon: "⚡" }
                }
            }

            div { class: "section",
                h2 { class: "section-title", "Recent Orders" }
                p { class: "page-subtitle", "Latest orders from your customers" }
                DataTable {
                    data: store.recent_orders,
                    columns: order_columns(),
                    options,
                    quick_filters: vec![QuickFilter::all()],
                    cells: standard_cells(),
                }
            }
        }
    }
}

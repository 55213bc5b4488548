mod components;

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;

mod products;
pub use products::Products;

mod orders;
pub use orders::Orders;

mod analytics;
pub use analytics::Analytics;

mod reports;
pub use reports::Reports;

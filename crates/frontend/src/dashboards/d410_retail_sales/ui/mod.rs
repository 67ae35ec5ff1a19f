pub mod dashboard;
pub mod sales_table;

pub use dashboard::RetailSalesDashboard;

pub mod d410_retail_sales;

pub use d410_retail_sales::ui::RetailSalesDashboard;

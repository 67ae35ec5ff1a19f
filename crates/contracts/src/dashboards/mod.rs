pub mod d410_retail_sales;
